use std::cell::{Cell, RefCell};
use std::path::{Path, PathBuf};

use pdfbook_core::{Catalog, FileSize, Pdf, PdfPredicate};
use pdfbook_engine::{CatalogModel, DocumentHandle, DocumentLoader, EngineError, LoadError};
use pdfbook_storage::{CatalogStorage, StorageError};

fn unexpected(method: &str) -> ! {
    panic!("{method}: This method should not be called.")
}

/// A `CatalogModel` that only answers the calls an add needs.
///
/// `has_pdf` checks the seeded and added records. `add_pdf` and `commit`
/// are recorded when the stub accepts adds and panic otherwise. Every
/// other method panics.
#[derive(Debug, Default)]
pub struct ModelStub {
    existing: Vec<Pdf>,
    accepts_adds: bool,
    pub pdfs_added: Vec<Pdf>,
    pub commits: usize,
}

impl ModelStub {
    /// Stub holding a single record and refusing changes.
    pub fn with_pdf(pdf: Pdf) -> Self {
        Self {
            existing: vec![pdf],
            ..Self::default()
        }
    }

    /// Stub that records every add and commit.
    pub fn accepting_adds() -> Self {
        Self {
            accepts_adds: true,
            ..Self::default()
        }
    }
}

impl CatalogModel for ModelStub {
    fn catalog(&self) -> &Catalog {
        unexpected("catalog")
    }

    fn reset_catalog(&mut self, _catalog: Catalog) {
        unexpected("reset_catalog")
    }

    fn has_pdf(&self, pdf: &Pdf) -> bool {
        self.existing
            .iter()
            .chain(self.pdfs_added.iter())
            .any(|p| p.is_same_pdf(pdf))
    }

    fn add_pdf(&mut self, pdf: Pdf) -> Result<(), EngineError> {
        if !self.accepts_adds {
            unexpected("add_pdf")
        }
        self.pdfs_added.push(pdf);
        Ok(())
    }

    fn delete_pdf(&mut self, _target: &Pdf) -> Result<(), EngineError> {
        unexpected("delete_pdf")
    }

    fn set_pdf(&mut self, _target: &Pdf, _edited: Pdf) -> Result<(), EngineError> {
        unexpected("set_pdf")
    }

    fn filtered_pdfs(&self) -> Vec<&Pdf> {
        unexpected("filtered_pdfs")
    }

    fn filter(&self) -> &PdfPredicate {
        unexpected("filter")
    }

    fn update_filter(&mut self, _predicate: PdfPredicate) {
        unexpected("update_filter")
    }

    fn can_undo(&self) -> bool {
        unexpected("can_undo")
    }

    fn can_redo(&self) -> bool {
        unexpected("can_redo")
    }

    fn undo(&mut self) -> Result<(), EngineError> {
        unexpected("undo")
    }

    fn redo(&mut self) -> Result<(), EngineError> {
        unexpected("redo")
    }

    fn commit(&mut self) {
        if !self.accepts_adds {
            unexpected("commit")
        }
        self.commits += 1;
    }

    fn selected_pdf(&self) -> Option<&Pdf> {
        unexpected("selected_pdf")
    }

    fn set_selected_pdf(&mut self, _pdf: Option<Pdf>) -> Result<(), EngineError> {
        unexpected("set_selected_pdf")
    }
}

/// A `DocumentLoader` that accepts or rejects every path and remembers
/// what it was asked to open.
#[derive(Debug, Default)]
pub struct StubLoader {
    accept: bool,
    opened: RefCell<Vec<PathBuf>>,
}

impl StubLoader {
    pub fn accepting() -> Self {
        Self {
            accept: true,
            ..Self::default()
        }
    }

    pub fn rejecting() -> Self {
        Self::default()
    }

    pub fn opened(&self) -> Vec<PathBuf> {
        self.opened.borrow().clone()
    }
}

impl DocumentLoader for StubLoader {
    fn open(&self, path: &Path) -> Result<DocumentHandle, LoadError> {
        self.opened.borrow_mut().push(path.to_path_buf());
        if !self.accept {
            return Err(LoadError::Malformed("stub loader rejects every document".into()));
        }
        Ok(DocumentHandle {
            path: path.to_path_buf(),
            page_count: 1,
            size: FileSize::default(),
        })
    }
}

/// In-memory `CatalogStorage` whose saves can be made to fail, as if the
/// disk were full.
#[derive(Debug, Default)]
pub struct FlakyStorage {
    saved: Option<Catalog>,
    failing: Cell<bool>,
    pub saves: usize,
}

impl FlakyStorage {
    pub fn set_failing(&self, failing: bool) {
        self.failing.set(failing);
    }

    pub fn saved(&self) -> Option<&Catalog> {
        self.saved.as_ref()
    }
}

impl CatalogStorage for FlakyStorage {
    fn read_catalog(&self) -> Result<Option<Catalog>, StorageError> {
        Ok(self.saved.clone())
    }

    fn save_catalog(&mut self, catalog: &Catalog) -> Result<(), StorageError> {
        if self.failing.get() {
            return Err(StorageError::Sqlite(rusqlite::Error::SqliteFailure(
                rusqlite::ffi::Error::new(rusqlite::ffi::SQLITE_FULL),
                Some("database or disk is full".to_string()),
            )));
        }
        self.saved = Some(catalog.clone());
        self.saves += 1;
        Ok(())
    }
}
