use std::fmt;

use pdfbook_core::Index;

use super::{CommandResult, model_error, pdf_at};
use crate::error::CommandError;
use crate::model::CatalogModel;

pub const COMMAND_WORD: &str = "delete";

/// Removes the PDF at an index of the filtered list from the catalog.
/// The file itself is not touched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeleteCommand {
    target_index: Index,
}

impl DeleteCommand {
    pub fn new(target_index: Index) -> Self {
        Self { target_index }
    }

    pub fn execute(&self, model: &mut dyn CatalogModel) -> Result<CommandResult, CommandError> {
        let target = pdf_at(model, self.target_index)?;
        model.delete_pdf(&target).map_err(model_error)?;
        model.commit();
        Ok(CommandResult::new(format!("Deleted PDF: {target}")))
    }
}

impl fmt::Display for DeleteCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{COMMAND_WORD} {}", self.target_index)
    }
}
