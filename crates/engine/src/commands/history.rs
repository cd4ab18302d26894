use super::CommandResult;
use crate::command_history::CommandHistory;
use crate::error::CommandError;

pub const COMMAND_WORD: &str = "history";

/// Lists the commands entered so far, most recent first.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HistoryCommand;

impl HistoryCommand {
    pub fn execute(&self, history: &CommandHistory) -> Result<CommandResult, CommandError> {
        if history.is_empty() {
            return Ok(CommandResult::new("You have not yet entered any commands."));
        }
        let entries: Vec<&str> = history.entries().iter().rev().map(String::as_str).collect();
        Ok(CommandResult::new(format!(
            "Entered commands (from most recent to earliest):\n{}",
            entries.join("\n")
        )))
    }
}
