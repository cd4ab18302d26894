use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::EngineError;

/// Runtime settings, read from a TOML file. Missing keys fall back to
/// [`CatalogConfig::default`].
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct CatalogConfig {
    /// SQLite file holding the saved catalog.
    pub catalog_path: PathBuf,
    /// Maximum number of snapshots kept for undo/redo. `None` keeps all.
    pub history_limit: Option<usize>,
    /// `tracing` filter directive used when `RUST_LOG` is unset.
    pub log_filter: String,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            catalog_path: PathBuf::from("data").join("pdfbook.db"),
            history_limit: None,
            log_filter: "info".to_string(),
        }
    }
}

impl CatalogConfig {
    pub fn from_toml_str(s: &str) -> Result<Self, EngineError> {
        toml::from_str(s).map_err(|e| EngineError::Config(e.to_string()))
    }

    pub fn load(path: &Path) -> Result<Self, EngineError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }
}
