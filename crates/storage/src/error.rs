use thiserror::Error;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("sqlite error: {0}")]
    Sqlite(#[from] rusqlite::Error),

    #[error("serialization error: {0}")]
    Serialization(String),

    #[error("catalog checksum mismatch: stored catalog does not match its fingerprint")]
    ChecksumMismatch,

    #[error("unsupported schema version: {0}")]
    UnsupportedSchema(i32),

    #[error("core error: {0}")]
    Core(#[from] pdfbook_core::CoreError),
}
