use std::fmt;

use pdfbook_core::Index;

use super::{CommandResult, model_error, pdf_at};
use crate::error::CommandError;
use crate::model::CatalogModel;

pub const COMMAND_WORD: &str = "select";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectCommand {
    target_index: Index,
}

impl SelectCommand {
    pub fn new(target_index: Index) -> Self {
        Self { target_index }
    }

    pub fn execute(&self, model: &mut dyn CatalogModel) -> Result<CommandResult, CommandError> {
        let target = pdf_at(model, self.target_index)?;
        model.set_selected_pdf(Some(target)).map_err(model_error)?;
        Ok(CommandResult::new(format!(
            "Selected PDF: {}",
            self.target_index
        )))
    }
}

impl fmt::Display for SelectCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{COMMAND_WORD} {}", self.target_index)
    }
}
