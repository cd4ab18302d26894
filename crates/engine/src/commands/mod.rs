//! User commands.
//!
//! Every command validates against the model before changing it and
//! commits as its last step, so a failing command leaves history, the
//! working copy and the selection untouched.

pub mod add;
pub mod clear;
pub mod delete;
pub mod edit;
pub mod find;
pub mod history;
pub mod list;
pub mod select;
pub mod undo;

pub use add::AddCommand;
pub use clear::ClearCommand;
pub use delete::DeleteCommand;
pub use edit::{EditCommand, EditPdfDescriptor};
pub use find::FindCommand;
pub use history::HistoryCommand;
pub use list::ListCommand;
pub use select::SelectCommand;
pub use undo::{RedoCommand, UndoCommand};

use std::fmt;

use pdfbook_core::{Index, Pdf};

use crate::command_history::CommandHistory;
use crate::error::{CommandError, EngineError};
use crate::loader::DocumentLoader;
use crate::model::CatalogModel;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandResult {
    feedback_to_user: String,
}

impl CommandResult {
    pub fn new(feedback_to_user: impl Into<String>) -> Self {
        Self {
            feedback_to_user: feedback_to_user.into(),
        }
    }

    pub fn feedback_to_user(&self) -> &str {
        &self.feedback_to_user
    }
}

/// Collaborators a command may need besides the model.
#[derive(Clone, Copy)]
pub struct ExecutionContext<'a> {
    pub loader: &'a dyn DocumentLoader,
    pub history: &'a CommandHistory,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Add(AddCommand),
    Delete(DeleteCommand),
    Edit(EditCommand),
    Select(SelectCommand),
    Find(FindCommand),
    List(ListCommand),
    Clear(ClearCommand),
    Undo(UndoCommand),
    Redo(RedoCommand),
    History(HistoryCommand),
}

impl Command {
    pub fn execute(
        &self,
        model: &mut dyn CatalogModel,
        ctx: &ExecutionContext<'_>,
    ) -> Result<CommandResult, CommandError> {
        match self {
            Self::Add(cmd) => cmd.execute(model, ctx.loader),
            Self::Delete(cmd) => cmd.execute(model),
            Self::Edit(cmd) => cmd.execute(model, ctx.loader),
            Self::Select(cmd) => cmd.execute(model),
            Self::Find(cmd) => cmd.execute(model),
            Self::List(cmd) => cmd.execute(model),
            Self::Clear(cmd) => cmd.execute(model),
            Self::Undo(cmd) => cmd.execute(model),
            Self::Redo(cmd) => cmd.execute(model),
            Self::History(cmd) => cmd.execute(ctx.history),
        }
    }

    pub fn command_word(&self) -> &'static str {
        match self {
            Self::Add(_) => add::COMMAND_WORD,
            Self::Delete(_) => delete::COMMAND_WORD,
            Self::Edit(_) => edit::COMMAND_WORD,
            Self::Select(_) => select::COMMAND_WORD,
            Self::Find(_) => find::COMMAND_WORD,
            Self::List(_) => list::COMMAND_WORD,
            Self::Clear(_) => clear::COMMAND_WORD,
            Self::Undo(_) => undo::UNDO_COMMAND_WORD,
            Self::Redo(_) => undo::REDO_COMMAND_WORD,
            Self::History(_) => history::COMMAND_WORD,
        }
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Add(cmd) => write!(f, "{cmd}"),
            Self::Delete(cmd) => write!(f, "{cmd}"),
            Self::Edit(cmd) => write!(f, "{cmd}"),
            Self::Select(cmd) => write!(f, "{cmd}"),
            Self::Find(cmd) => write!(f, "{cmd}"),
            other => f.write_str(other.command_word()),
        }
    }
}

macro_rules! command_from {
    ($variant:ident, $ty:ty) => {
        impl From<$ty> for Command {
            fn from(cmd: $ty) -> Self {
                Self::$variant(cmd)
            }
        }
    };
}

command_from!(Add, AddCommand);
command_from!(Delete, DeleteCommand);
command_from!(Edit, EditCommand);
command_from!(Select, SelectCommand);
command_from!(Find, FindCommand);
command_from!(List, ListCommand);
command_from!(Clear, ClearCommand);
command_from!(Undo, UndoCommand);
command_from!(Redo, RedoCommand);
command_from!(History, HistoryCommand);

/// Record at `index` of the filtered list.
fn pdf_at(model: &dyn CatalogModel, index: Index) -> Result<Pdf, CommandError> {
    model
        .filtered_pdfs()
        .get(index.zero_based())
        .map(|pdf| (*pdf).clone())
        .ok_or(CommandError::InvalidIndex)
}

fn model_error(err: EngineError) -> CommandError {
    match err {
        EngineError::DuplicatePdf(_) => CommandError::Duplicate,
        EngineError::NoHistory(direction) => CommandError::NoHistory(direction),
        other => CommandError::Engine(other),
    }
}
