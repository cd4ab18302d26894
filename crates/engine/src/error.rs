use std::path::PathBuf;

use pdfbook_core::CoreError;
use pdfbook_storage::StorageError;
use thiserror::Error;

use crate::history::HistoryDirection;
use crate::loader::LoadError;

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("storage error: {0}")]
    Storage(#[from] StorageError),

    #[error("core error: {0}")]
    Core(#[from] CoreError),

    #[error("pdf already in catalog: {0}")]
    DuplicatePdf(String),

    #[error("pdf not found: {0}")]
    PdfNotFound(String),

    #[error("pdf not in filtered list: {0}")]
    NotInFilteredList(String),

    #[error("no {0} state available")]
    NoHistory(HistoryDirection),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("config error: {0}")]
    Config(String),

    #[error("logging error: {0}")]
    Logging(String),
}

impl EngineError {
    /// Lift catalog-level failures into the facade's vocabulary.
    pub(crate) fn from_catalog(err: CoreError) -> Self {
        match err {
            CoreError::DuplicatePdf(name) => Self::DuplicatePdf(name),
            CoreError::PdfNotFound(name) => Self::PdfNotFound(name),
            other => Self::Core(other),
        }
    }
}

/// Failure of a user command. The display string is the message shown
/// to the user.
#[derive(Debug, Error)]
pub enum CommandError {
    #[error("{0}")]
    Precondition(&'static str),

    #[error("This document already exists in the catalog")]
    Duplicate,

    #[error("Selected file is corrupted and cannot be loaded")]
    UnloadableFile {
        path: PathBuf,
        #[source]
        source: LoadError,
    },

    #[error("No more commands to {0}!")]
    NoHistory(HistoryDirection),

    #[error("The pdf index provided is invalid")]
    InvalidIndex,

    #[error(transparent)]
    Engine(#[from] EngineError),
}
