use std::collections::BTreeSet;

use pdfbook_core::{Directory, FileSize, Pdf, PdfName, Tag};

pub const DEFAULT_NAME: &str = "report.pdf";
pub const DEFAULT_DIRECTORY: &str = "/tmp/pdfbook";
pub const DEFAULT_SIZE: u64 = 1024;

/// Builds `Pdf` values for tests. Panics on invalid input.
#[derive(Debug, Clone)]
pub struct PdfBuilder {
    name: String,
    directory: String,
    size: u64,
    tags: Vec<String>,
}

impl Default for PdfBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl PdfBuilder {
    pub fn new() -> Self {
        Self {
            name: DEFAULT_NAME.to_string(),
            directory: DEFAULT_DIRECTORY.to_string(),
            size: DEFAULT_SIZE,
            tags: Vec::new(),
        }
    }

    /// Start from an existing record.
    pub fn from_pdf(pdf: &Pdf) -> Self {
        Self {
            name: pdf.name().to_string(),
            directory: pdf.directory().to_string(),
            size: pdf.size().bytes(),
            tags: pdf.tags().iter().map(|t| t.as_str().to_string()).collect(),
        }
    }

    pub fn with_name(mut self, name: &str) -> Self {
        self.name = name.to_string();
        self
    }

    pub fn with_directory(mut self, directory: &str) -> Self {
        self.directory = directory.to_string();
        self
    }

    pub fn with_size(mut self, size: u64) -> Self {
        self.size = size;
        self
    }

    pub fn with_tags(mut self, tags: &[&str]) -> Self {
        self.tags = tags.iter().map(|t| t.to_string()).collect();
        self
    }

    pub fn build(self) -> Pdf {
        let tags: BTreeSet<Tag> = self
            .tags
            .into_iter()
            .map(|t| Tag::new(t).expect("valid tag"))
            .collect();
        Pdf::new(
            PdfName::new(self.name).expect("valid pdf name"),
            Directory::new(self.directory).expect("valid directory"),
            FileSize::from_bytes(self.size),
            tags,
        )
    }
}
