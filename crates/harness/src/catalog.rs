use pdfbook_core::Pdf;
use pdfbook_engine::commands::AddCommand;
use pdfbook_engine::{
    CatalogConfig, CatalogModel, Command, CommandError, CommandResult, LogicManager, LopdfLoader,
};
use pdfbook_storage::{SqliteStorage, StorageError};

use crate::fixtures::TestLibrary;

/// A catalog wired to in-memory storage, the real PDF loader, and a
/// scratch directory of files to add.
pub struct TestCatalog {
    pub library: TestLibrary,
    pub logic: LogicManager<SqliteStorage, LopdfLoader>,
}

impl TestCatalog {
    pub fn new() -> Result<Self, Box<dyn std::error::Error>> {
        Self::with_config(&CatalogConfig::default())
    }

    pub fn with_config(config: &CatalogConfig) -> Result<Self, Box<dyn std::error::Error>> {
        let storage = SqliteStorage::open_in_memory()?;
        Ok(Self {
            library: TestLibrary::new()?,
            logic: LogicManager::new(storage, LopdfLoader, config)?,
        })
    }

    pub fn execute(&mut self, command: impl Into<Command>) -> Result<CommandResult, CommandError> {
        self.logic.execute(&command.into())
    }

    /// Write a valid file named `name` and add it.
    pub fn add_valid(&mut self, name: &str) -> Result<Pdf, Box<dyn std::error::Error>> {
        let pdf = self.library.write_valid_pdf(name)?;
        self.execute(AddCommand::new(pdf.clone()))?;
        Ok(pdf)
    }

    /// Number of records in the working copy.
    pub fn size(&self) -> usize {
        self.logic.model().catalog().len()
    }

    /// Names in the filtered list, in order.
    pub fn visible_names(&self) -> Vec<String> {
        self.logic
            .filtered_pdfs()
            .iter()
            .map(|p| p.name().to_string())
            .collect()
    }

    pub fn saved_document_count(&self) -> Result<u64, StorageError> {
        self.logic.storage().document_count()
    }
}
