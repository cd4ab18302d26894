pub mod command_history;
pub mod commands;
pub mod config;
pub mod error;
pub mod history;
pub mod loader;
pub mod logging;
pub mod logic;
pub mod model;

pub use command_history::CommandHistory;
pub use commands::{Command, CommandResult, ExecutionContext};
pub use config::CatalogConfig;
pub use error::{CommandError, EngineError};
pub use history::{CatalogHistory, HistoryDirection, Snapshot};
pub use loader::{DocumentHandle, DocumentLoader, LoadError, LopdfLoader};
pub use logic::LogicManager;
pub use model::{CatalogModel, ModelManager};
