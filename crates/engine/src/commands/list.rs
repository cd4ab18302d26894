use pdfbook_core::PdfPredicate;

use super::CommandResult;
use crate::error::CommandError;
use crate::model::CatalogModel;

pub const COMMAND_WORD: &str = "list";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ListCommand;

impl ListCommand {
    pub fn execute(&self, model: &mut dyn CatalogModel) -> Result<CommandResult, CommandError> {
        model.update_filter(PdfPredicate::All);
        Ok(CommandResult::new("Listed all pdfs"))
    }
}
