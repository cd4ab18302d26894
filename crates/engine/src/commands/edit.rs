use std::collections::BTreeSet;
use std::fmt;

use pdfbook_core::{Index, Pdf, PdfName, PdfPredicate, Tag};
use tracing::warn;

use super::{CommandResult, model_error, pdf_at};
use crate::error::CommandError;
use crate::loader::DocumentLoader;
use crate::model::CatalogModel;

pub const COMMAND_WORD: &str = "edit";

/// Fields to change on a PDF. Unset fields keep their current value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EditPdfDescriptor {
    pub name: Option<PdfName>,
    pub tags: Option<BTreeSet<Tag>>,
}

impl EditPdfDescriptor {
    pub fn is_any_field_edited(&self) -> bool {
        self.name.is_some() || self.tags.is_some()
    }

    fn apply(&self, pdf: &Pdf) -> Pdf {
        let mut edited = pdf.clone();
        if let Some(name) = &self.name {
            edited = edited.with_name(name.clone());
        }
        if let Some(tags) = &self.tags {
            edited = edited.with_tags(tags.clone());
        }
        edited
    }
}

/// Edits the PDF at an index of the filtered list.
///
/// A new name points the record at another file in the same directory,
/// so that file has to be loadable. The record then takes that file's
/// size.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditCommand {
    index: Index,
    descriptor: EditPdfDescriptor,
}

impl EditCommand {
    pub fn new(index: Index, descriptor: EditPdfDescriptor) -> Result<Self, CommandError> {
        if !descriptor.is_any_field_edited() {
            return Err(CommandError::Precondition(
                "At least one field to edit must be provided.",
            ));
        }
        Ok(Self { index, descriptor })
    }

    pub fn execute(
        &self,
        model: &mut dyn CatalogModel,
        loader: &dyn DocumentLoader,
    ) -> Result<CommandResult, CommandError> {
        let target = pdf_at(model, self.index)?;
        let mut edited = self.descriptor.apply(&target);

        if !target.is_same_pdf(&edited) && model.has_pdf(&edited) {
            return Err(CommandError::Duplicate);
        }

        if edited.name() != target.name() {
            let path = edited.path();
            let handle = match loader.open(&path) {
                Ok(handle) => handle,
                Err(source) => {
                    warn!(path = %path.display(), error = %source, "rejecting unloadable pdf");
                    return Err(CommandError::UnloadableFile { path, source });
                }
            };
            edited = edited.with_size(handle.size);
            loader.close(handle);
        }

        model.set_pdf(&target, edited.clone()).map_err(model_error)?;
        model.update_filter(PdfPredicate::All);
        model.commit();

        Ok(CommandResult::new(format!("Edited PDF: {edited}")))
    }
}

impl fmt::Display for EditCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{COMMAND_WORD} {}", self.index)?;
        if let Some(name) = &self.descriptor.name {
            write!(f, " name/{name}")?;
        }
        if let Some(tags) = &self.descriptor.tags {
            f.write_str(" tags/")?;
            for tag in tags {
                write!(f, "{tag}")?;
            }
        }
        Ok(())
    }
}
