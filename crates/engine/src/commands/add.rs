use std::fmt;

use pdfbook_core::Pdf;
use tracing::{debug, warn};

use super::{CommandResult, model_error};
use crate::error::CommandError;
use crate::loader::DocumentLoader;
use crate::model::CatalogModel;

pub const COMMAND_WORD: &str = "add";

/// Adds a PDF to the catalog.
///
/// Before anything is inserted the referenced file is opened and closed
/// again through the [`DocumentLoader`]; a file that cannot be opened is
/// rejected and the catalog is left as it was.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddCommand {
    to_add: Pdf,
}

impl AddCommand {
    pub fn new(pdf: Pdf) -> Self {
        Self { to_add: pdf }
    }

    pub fn pdf(&self) -> &Pdf {
        &self.to_add
    }

    pub fn execute(
        &self,
        model: &mut dyn CatalogModel,
        loader: &dyn DocumentLoader,
    ) -> Result<CommandResult, CommandError> {
        if model.has_pdf(&self.to_add) {
            return Err(CommandError::Duplicate);
        }

        let path = self.to_add.path();
        if let Err(source) = loader.validate(&path) {
            warn!(path = %path.display(), error = %source, "rejecting unloadable pdf");
            return Err(CommandError::UnloadableFile { path, source });
        }

        model.add_pdf(self.to_add.clone()).map_err(model_error)?;
        model.commit();
        debug!(pdf = %self.to_add.name(), "added pdf");

        Ok(CommandResult::new(format!("New PDF added: {}", self.to_add)))
    }
}

impl TryFrom<Option<Pdf>> for AddCommand {
    type Error = CommandError;

    fn try_from(pdf: Option<Pdf>) -> Result<Self, Self::Error> {
        pdf.map(Self::new)
            .ok_or(CommandError::Precondition("A pdf must be provided to add"))
    }
}

impl fmt::Display for AddCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{COMMAND_WORD} {}", self.to_add.path().display())
    }
}
