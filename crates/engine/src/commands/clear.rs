use pdfbook_core::Catalog;

use super::CommandResult;
use crate::error::CommandError;
use crate::model::CatalogModel;

pub const COMMAND_WORD: &str = "clear";

/// Empties the catalog. Undoable like any other commit.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ClearCommand;

impl ClearCommand {
    pub fn execute(&self, model: &mut dyn CatalogModel) -> Result<CommandResult, CommandError> {
        model.reset_catalog(Catalog::new());
        model.commit();
        Ok(CommandResult::new("Catalog has been cleared!"))
    }
}
