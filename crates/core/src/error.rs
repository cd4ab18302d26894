use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("serialization error: {0}")]
    Serialization(String),

    #[error("invalid pdf name: {0:?}")]
    InvalidName(String),

    #[error("invalid directory: {0:?}")]
    InvalidDirectory(String),

    #[error("invalid tag: {0:?}")]
    InvalidTag(String),

    #[error("index must be a positive integer")]
    InvalidIndex,

    #[error("duplicate pdf: {0}")]
    DuplicatePdf(String),

    #[error("pdf not found: {0}")]
    PdfNotFound(String),
}
