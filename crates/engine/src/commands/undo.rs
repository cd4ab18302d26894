use pdfbook_core::PdfPredicate;

use super::{CommandResult, model_error};
use crate::error::CommandError;
use crate::history::HistoryDirection;
use crate::model::CatalogModel;

pub const UNDO_COMMAND_WORD: &str = "undo";
pub const REDO_COMMAND_WORD: &str = "redo";

/// Steps the catalog back to the previous committed snapshot.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct UndoCommand;

impl UndoCommand {
    pub fn execute(&self, model: &mut dyn CatalogModel) -> Result<CommandResult, CommandError> {
        if !model.can_undo() {
            return Err(CommandError::NoHistory(HistoryDirection::Undo));
        }
        model.undo().map_err(model_error)?;
        model.update_filter(PdfPredicate::All);
        Ok(CommandResult::new("Undo success!"))
    }
}

/// Reapplies the snapshot most recently stepped back from.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RedoCommand;

impl RedoCommand {
    pub fn execute(&self, model: &mut dyn CatalogModel) -> Result<CommandResult, CommandError> {
        if !model.can_redo() {
            return Err(CommandError::NoHistory(HistoryDirection::Redo));
        }
        model.redo().map_err(model_error)?;
        model.update_filter(PdfPredicate::All);
        Ok(CommandResult::new("Redo success!"))
    }
}
