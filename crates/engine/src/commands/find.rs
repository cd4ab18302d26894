use std::fmt;

use pdfbook_core::PdfPredicate;

use super::CommandResult;
use crate::error::CommandError;
use crate::model::CatalogModel;

pub const COMMAND_WORD: &str = "find";

/// Narrows the visible list to the PDFs matching a predicate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FindCommand {
    predicate: PdfPredicate,
}

impl FindCommand {
    pub fn new(predicate: PdfPredicate) -> Self {
        Self { predicate }
    }

    pub fn execute(&self, model: &mut dyn CatalogModel) -> Result<CommandResult, CommandError> {
        model.update_filter(self.predicate.clone());
        let listed = model.filtered_pdfs().len();
        Ok(CommandResult::new(format!("{listed} pdfs listed!")))
    }
}

impl fmt::Display for FindCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{COMMAND_WORD} {}", self.predicate)
    }
}
