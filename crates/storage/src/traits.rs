use pdfbook_core::Catalog;

use crate::error::StorageError;

/// Persistence backend for the catalog.
pub trait CatalogStorage {
    /// Returns `None` when nothing has been saved yet.
    fn read_catalog(&self) -> Result<Option<Catalog>, StorageError>;

    /// Replace the stored catalog with `catalog`.
    fn save_catalog(&mut self, catalog: &Catalog) -> Result<(), StorageError>;
}
