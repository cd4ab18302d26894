use std::io;
use std::path::{Path, PathBuf};

use pdfbook_core::FileSize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("io error: {0}")]
    Io(#[from] io::Error),

    #[error("malformed document: {0}")]
    Malformed(String),
}

/// An opened document. Holds no content, only what was learned while
/// opening it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentHandle {
    pub path: PathBuf,
    pub page_count: usize,
    pub size: FileSize,
}

/// Opens documents to check that they are loadable.
///
/// Calls block until the underlying read finishes; there is no timeout.
pub trait DocumentLoader {
    fn open(&self, path: &Path) -> Result<DocumentHandle, LoadError>;

    fn close(&self, handle: DocumentHandle) {
        drop(handle);
    }

    /// Open and immediately close `path`.
    fn validate(&self, path: &Path) -> Result<(), LoadError> {
        let handle = self.open(path)?;
        self.close(handle);
        Ok(())
    }
}

/// Loader backed by `lopdf`.
#[derive(Debug, Clone, Copy, Default)]
pub struct LopdfLoader;

impl DocumentLoader for LopdfLoader {
    fn open(&self, path: &Path) -> Result<DocumentHandle, LoadError> {
        // Surface missing/unreadable files as io errors rather than parse errors
        let metadata = std::fs::metadata(path)?;
        let document =
            lopdf::Document::load(path).map_err(|e| LoadError::Malformed(e.to_string()))?;
        Ok(DocumentHandle {
            path: path.to_path_buf(),
            page_count: document.get_pages().len(),
            size: FileSize::from_bytes(metadata.len()),
        })
    }
}
