use serde::Serialize;
use std::collections::BTreeSet;
use std::fmt;
use std::path::{Path, PathBuf};

use crate::error::CoreError;

/// File name of a catalogued document, e.g. `report.pdf`.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct PdfName(String);

impl PdfName {
    pub fn new(name: impl Into<String>) -> Result<Self, CoreError> {
        let name = name.into();
        if Self::is_valid(&name) {
            Ok(Self(name))
        } else {
            Err(CoreError::InvalidName(name))
        }
    }

    /// Non-empty, does not start with whitespace, and only uses
    /// alphanumerics, space and `._-()`.
    pub fn is_valid(name: &str) -> bool {
        let mut chars = name.chars();
        match chars.next() {
            None => false,
            Some(first) if first.is_whitespace() => false,
            Some(_) => name.chars().all(|c| {
                c.is_ascii_alphanumeric() || matches!(c, ' ' | '.' | '_' | '-' | '(' | ')')
            }),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PdfName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Location of the directory holding a document.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct Directory(String);

impl Directory {
    pub fn new(directory: impl Into<String>) -> Result<Self, CoreError> {
        let directory = directory.into();
        if directory.trim().is_empty() || directory.contains('\0') {
            return Err(CoreError::InvalidDirectory(directory));
        }
        Ok(Self(directory))
    }

    pub fn from_path(path: &Path) -> Result<Self, CoreError> {
        let s = path
            .to_str()
            .ok_or_else(|| CoreError::InvalidDirectory(path.display().to_string()))?;
        Self::new(s)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn as_path(&self) -> &Path {
        Path::new(&self.0)
    }
}

impl fmt::Display for Directory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct FileSize(u64);

impl FileSize {
    pub fn from_bytes(bytes: u64) -> Self {
        Self(bytes)
    }

    pub fn bytes(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for FileSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} bytes", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct Tag(String);

impl Tag {
    pub fn new(tag: impl Into<String>) -> Result<Self, CoreError> {
        let tag = tag.into();
        if tag.is_empty() || !tag.chars().all(|c| c.is_ascii_alphanumeric()) {
            return Err(CoreError::InvalidTag(tag));
        }
        Ok(Self(tag))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}]", self.0)
    }
}

/// One catalog entry.
///
/// Values are immutable: edits go through [`Pdf::with_name`] and
/// [`Pdf::with_tags`], which return a new record.
///
/// Two records describe the *same document* when name and directory
/// match ([`Pdf::is_same_pdf`]); `==` compares every attribute.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Pdf {
    name: PdfName,
    directory: Directory,
    size: FileSize,
    tags: BTreeSet<Tag>,
}

impl Pdf {
    pub fn new(name: PdfName, directory: Directory, size: FileSize, tags: BTreeSet<Tag>) -> Self {
        Self {
            name,
            directory,
            size,
            tags,
        }
    }

    pub fn name(&self) -> &PdfName {
        &self.name
    }

    pub fn directory(&self) -> &Directory {
        &self.directory
    }

    pub fn size(&self) -> FileSize {
        self.size
    }

    pub fn tags(&self) -> &BTreeSet<Tag> {
        &self.tags
    }

    /// Full path of the underlying file.
    pub fn path(&self) -> PathBuf {
        self.directory.as_path().join(self.name.as_str())
    }

    pub fn is_same_pdf(&self, other: &Pdf) -> bool {
        self.name == other.name && self.directory == other.directory
    }

    pub fn with_name(&self, name: PdfName) -> Self {
        Self {
            name,
            ..self.clone()
        }
    }

    pub fn with_size(&self, size: FileSize) -> Self {
        Self {
            size,
            ..self.clone()
        }
    }

    pub fn with_tags(&self, tags: BTreeSet<Tag>) -> Self {
        Self {
            tags,
            ..self.clone()
        }
    }
}

impl fmt::Display for Pdf {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} Directory: {} Size: {} Tags: ",
            self.name, self.directory, self.size
        )?;
        for tag in &self.tags {
            write!(f, "{tag}")?;
        }
        Ok(())
    }
}
