use serde::Serialize;

use crate::error::CoreError;
use crate::pdf::Pdf;

/// An ordered set of records with unique identities.
///
/// Used both as the immutable snapshot stored in history and as the
/// working copy commands edit before committing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Catalog {
    pdfs: Vec<Pdf>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a catalog from loaded records, rejecting duplicate identities.
    pub fn from_pdfs(pdfs: Vec<Pdf>) -> Result<Self, CoreError> {
        let mut catalog = Self::new();
        for pdf in pdfs {
            catalog.add(pdf)?;
        }
        Ok(catalog)
    }

    pub fn contains(&self, pdf: &Pdf) -> bool {
        self.pdfs.iter().any(|p| p.is_same_pdf(pdf))
    }

    pub fn add(&mut self, pdf: Pdf) -> Result<(), CoreError> {
        if self.contains(&pdf) {
            return Err(CoreError::DuplicatePdf(pdf.name().to_string()));
        }
        self.pdfs.push(pdf);
        Ok(())
    }

    /// Remove the record equal to `target`.
    pub fn remove(&mut self, target: &Pdf) -> Result<Pdf, CoreError> {
        let pos = self
            .position(target)
            .ok_or_else(|| CoreError::PdfNotFound(target.name().to_string()))?;
        Ok(self.pdfs.remove(pos))
    }

    /// Replace `target` with `edited` in place, keeping its position.
    /// `edited` may share `target`'s identity but no other record's.
    pub fn replace(&mut self, target: &Pdf, edited: Pdf) -> Result<(), CoreError> {
        let pos = self
            .position(target)
            .ok_or_else(|| CoreError::PdfNotFound(target.name().to_string()))?;
        if !target.is_same_pdf(&edited) && self.contains(&edited) {
            return Err(CoreError::DuplicatePdf(edited.name().to_string()));
        }
        self.pdfs[pos] = edited;
        Ok(())
    }

    pub fn pdfs(&self) -> &[Pdf] {
        &self.pdfs
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Pdf> {
        self.pdfs.iter()
    }

    pub fn len(&self) -> usize {
        self.pdfs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pdfs.is_empty()
    }

    /// BLAKE3 hash over the MessagePack encoding of every record, in order.
    pub fn fingerprint(&self) -> Result<[u8; 32], CoreError> {
        let bytes =
            rmp_serde::to_vec(self).map_err(|e| CoreError::Serialization(e.to_string()))?;
        Ok(*blake3::hash(&bytes).as_bytes())
    }

    fn position(&self, target: &Pdf) -> Option<usize> {
        self.pdfs.iter().position(|p| p == target)
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a Pdf;
    type IntoIter = std::slice::Iter<'a, Pdf>;

    fn into_iter(self) -> Self::IntoIter {
        self.pdfs.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pdf::{Directory, FileSize, PdfName, Tag};
    use std::collections::BTreeSet;

    fn pdf(name: &str) -> Pdf {
        Pdf::new(
            PdfName::new(name).unwrap(),
            Directory::new("/docs").unwrap(),
            FileSize::from_bytes(1),
            BTreeSet::new(),
        )
    }

    #[test]
    fn add_rejects_same_identity() {
        let mut catalog = Catalog::new();
        catalog.add(pdf("a.pdf")).unwrap();

        let resized = Pdf::new(
            PdfName::new("a.pdf").unwrap(),
            Directory::new("/docs").unwrap(),
            FileSize::from_bytes(500),
            BTreeSet::new(),
        );
        let result = catalog.add(resized);
        assert!(matches!(result, Err(CoreError::DuplicatePdf(_))));
        assert_eq!(catalog.len(), 1);
    }

    #[test]
    fn from_pdfs_rejects_duplicates() {
        let result = Catalog::from_pdfs(vec![pdf("a.pdf"), pdf("b.pdf"), pdf("a.pdf")]);
        assert!(result.is_err());

        let ok = Catalog::from_pdfs(vec![pdf("a.pdf"), pdf("b.pdf")]).unwrap();
        assert_eq!(ok.len(), 2);
    }

    #[test]
    fn remove_uses_full_equality() {
        let mut catalog = Catalog::from_pdfs(vec![pdf("a.pdf")]).unwrap();
        let tagged = pdf("a.pdf").with_tags(BTreeSet::from([Tag::new("x").unwrap()]));

        assert!(matches!(catalog.remove(&tagged), Err(CoreError::PdfNotFound(_))));
        assert_eq!(catalog.remove(&pdf("a.pdf")).unwrap(), pdf("a.pdf"));
        assert!(catalog.is_empty());
    }

    #[test]
    fn replace_keeps_position_and_checks_collisions() {
        let mut catalog = Catalog::from_pdfs(vec![pdf("a.pdf"), pdf("b.pdf"), pdf("c.pdf")]).unwrap();

        // Editing a record into its own identity is allowed
        let tagged = pdf("b.pdf").with_tags(BTreeSet::from([Tag::new("x").unwrap()]));
        catalog.replace(&pdf("b.pdf"), tagged.clone()).unwrap();
        assert_eq!(catalog.pdfs()[1], tagged);

        // Renaming onto another record's identity is not
        let result = catalog.replace(&pdf("a.pdf"), pdf("c.pdf"));
        assert!(matches!(result, Err(CoreError::DuplicatePdf(_))));
        assert_eq!(catalog.pdfs()[0], pdf("a.pdf"));
    }

    #[test]
    fn fingerprint_tracks_content_and_order() {
        let ab = Catalog::from_pdfs(vec![pdf("a.pdf"), pdf("b.pdf")]).unwrap();
        let ab_again = Catalog::from_pdfs(vec![pdf("a.pdf"), pdf("b.pdf")]).unwrap();
        let ba = Catalog::from_pdfs(vec![pdf("b.pdf"), pdf("a.pdf")]).unwrap();

        assert_eq!(ab.fingerprint().unwrap(), ab_again.fingerprint().unwrap());
        assert_ne!(ab.fingerprint().unwrap(), ba.fingerprint().unwrap());
        assert_ne!(ab.fingerprint().unwrap(), Catalog::new().fingerprint().unwrap());
    }
}
