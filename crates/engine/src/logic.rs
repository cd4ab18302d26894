use pdfbook_core::{Catalog, Pdf};
use pdfbook_storage::{CatalogStorage, SqliteStorage};
use tracing::{debug, info, warn};

use crate::command_history::CommandHistory;
use crate::commands::{Command, CommandResult, ExecutionContext};
use crate::config::CatalogConfig;
use crate::error::{CommandError, EngineError};
use crate::loader::DocumentLoader;
use crate::model::{CatalogModel, ModelManager};

/// Runs commands against the catalog and keeps storage in step with
/// the committed state.
pub struct LogicManager<S: CatalogStorage, L: DocumentLoader> {
    model: ModelManager,
    storage: S,
    loader: L,
    history: CommandHistory,
    saved_fingerprint: [u8; 32],
}

impl<L: DocumentLoader> LogicManager<SqliteStorage, L> {
    /// Open (or create) the SQLite catalog named by `config`.
    pub fn open(config: &CatalogConfig, loader: L) -> Result<Self, EngineError> {
        if let Some(parent) = config.catalog_path.parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent)?;
        }
        let storage = SqliteStorage::open(&config.catalog_path)?;
        Self::new(storage, loader, config)
    }
}

impl<S: CatalogStorage, L: DocumentLoader> LogicManager<S, L> {
    pub fn new(storage: S, loader: L, config: &CatalogConfig) -> Result<Self, EngineError> {
        let initial = match storage.read_catalog()? {
            Some(catalog) => {
                info!(documents = catalog.len(), "loaded catalog");
                catalog
            }
            None => {
                info!("no saved catalog, starting with an empty one");
                Catalog::new()
            }
        };
        // An empty store stays unwritten until a commit changes the content
        let saved_fingerprint = initial.fingerprint()?;

        Ok(Self {
            model: ModelManager::with_history_limit(initial, config.history_limit),
            storage,
            loader,
            history: CommandHistory::new(),
            saved_fingerprint,
        })
    }

    /// Execute one command. Its text is recorded whether or not it
    /// succeeds; the catalog is saved when the committed state changed.
    ///
    /// A failed save does not fail the command, which has already been
    /// committed. It is logged and retried after the next successful
    /// command, or explicitly through [`LogicManager::save`].
    pub fn execute(&mut self, command: &Command) -> Result<CommandResult, CommandError> {
        let ctx = ExecutionContext {
            loader: &self.loader,
            history: &self.history,
        };
        let outcome = command.execute(&mut self.model, &ctx);
        self.history.add(command.to_string());

        let result = match outcome {
            Ok(result) => result,
            Err(err) => {
                debug!(command = %command, error = %err, "command failed");
                return Err(err);
            }
        };
        if let Err(err) = self.save() {
            warn!(command = %command, error = %err, "failed to save catalog, will retry");
        }
        Ok(result)
    }

    /// Save the committed catalog if it differs from what storage holds.
    pub fn save(&mut self) -> Result<(), EngineError> {
        let committed = self.model.history().current().catalog();
        let fingerprint = committed.fingerprint()?;
        if self.saved_fingerprint == fingerprint {
            return Ok(());
        }
        self.storage.save_catalog(committed)?;
        self.saved_fingerprint = fingerprint;
        info!(documents = committed.len(), "saved catalog");
        Ok(())
    }

    /// Whether the committed catalog differs from the last one loaded or
    /// saved.
    pub fn has_unsaved_changes(&self) -> Result<bool, EngineError> {
        let fingerprint = self.model.history().current().catalog().fingerprint()?;
        Ok(fingerprint != self.saved_fingerprint)
    }

    pub fn model(&self) -> &ModelManager {
        &self.model
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    pub fn command_history(&self) -> &CommandHistory {
        &self.history
    }

    pub fn filtered_pdfs(&self) -> Vec<&Pdf> {
        self.model.filtered_pdfs()
    }

    pub fn selected_pdf(&self) -> Option<&Pdf> {
        self.model.selected_pdf()
    }
}
