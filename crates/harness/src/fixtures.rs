use std::collections::BTreeSet;
use std::path::Path;

use lopdf::{Document, Object, dictionary};
use pdfbook_core::{Directory, FileSize, Pdf, PdfName};
use tempfile::TempDir;

/// Write a one-page PDF that `lopdf` can load back.
pub fn write_minimal_pdf(path: &Path) -> Result<(), Box<dyn std::error::Error>> {
    write_pdf_with_pages(path, 1)
}

/// Write a PDF of `pages` blank A4 pages.
pub fn write_pdf_with_pages(path: &Path, pages: u32) -> Result<(), Box<dyn std::error::Error>> {
    let mut doc = Document::with_version("1.5");
    let pages_id = doc.new_object_id();
    let kids: Vec<Object> = (0..pages)
        .map(|_| {
            doc.add_object(dictionary! {
                "Type" => "Page",
                "Parent" => pages_id,
                "MediaBox" => vec![0.into(), 0.into(), 595.into(), 842.into()],
            })
            .into()
        })
        .collect();
    let page_tree = dictionary! {
        "Type" => "Pages",
        "Kids" => kids,
        "Count" => pages,
    };
    doc.objects.insert(pages_id, Object::Dictionary(page_tree));
    let catalog_id = doc.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => pages_id,
    });
    doc.trailer.set("Root", catalog_id);
    doc.save(path)?;
    Ok(())
}

/// A temporary directory of document files, removed on drop.
pub struct TestLibrary {
    dir: TempDir,
}

impl TestLibrary {
    pub fn new() -> Result<Self, std::io::Error> {
        Ok(Self {
            dir: tempfile::tempdir()?,
        })
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    pub fn directory(&self) -> Result<Directory, Box<dyn std::error::Error>> {
        Ok(Directory::from_path(self.dir.path())?)
    }

    /// Write a loadable PDF named `name` and return its record.
    pub fn write_valid_pdf(&self, name: &str) -> Result<Pdf, Box<dyn std::error::Error>> {
        let path = self.dir.path().join(name);
        write_minimal_pdf(&path)?;
        self.record_for(name)
    }

    /// Write a loadable PDF with `pages` pages and return its record.
    pub fn write_pdf_with_pages(
        &self,
        name: &str,
        pages: u32,
    ) -> Result<Pdf, Box<dyn std::error::Error>> {
        write_pdf_with_pages(&self.dir.path().join(name), pages)?;
        self.record_for(name)
    }

    /// Write a file named `name` that is not a PDF.
    pub fn write_corrupt_pdf(&self, name: &str) -> Result<Pdf, Box<dyn std::error::Error>> {
        std::fs::write(self.dir.path().join(name), b"this file is not a pdf at all")?;
        self.record_for(name)
    }

    /// Record for a file that does not exist in the library.
    pub fn missing_pdf(&self, name: &str) -> Result<Pdf, Box<dyn std::error::Error>> {
        Ok(Pdf::new(
            PdfName::new(name)?,
            self.directory()?,
            FileSize::from_bytes(0),
            BTreeSet::new(),
        ))
    }

    fn record_for(&self, name: &str) -> Result<Pdf, Box<dyn std::error::Error>> {
        let size = std::fs::metadata(self.dir.path().join(name))?.len();
        Ok(Pdf::new(
            PdfName::new(name)?,
            self.directory()?,
            FileSize::from_bytes(size),
            BTreeSet::new(),
        ))
    }
}
