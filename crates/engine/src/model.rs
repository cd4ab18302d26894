use pdfbook_core::{Catalog, Pdf, PdfPredicate, SnapshotId};
use tracing::debug;

use crate::error::EngineError;
use crate::history::CatalogHistory;

/// The access point commands use to read and change the catalog.
///
/// `add_pdf`, `delete_pdf`, `set_pdf` and `reset_catalog` only touch the
/// working copy. Nothing reaches history until `commit` is called, so a
/// command can run every validation first and commit last.
pub trait CatalogModel {
    /// The working copy.
    fn catalog(&self) -> &Catalog;

    fn reset_catalog(&mut self, catalog: Catalog);

    /// Whether a record with the same identity is in the working copy.
    fn has_pdf(&self, pdf: &Pdf) -> bool;

    fn add_pdf(&mut self, pdf: Pdf) -> Result<(), EngineError>;

    fn delete_pdf(&mut self, target: &Pdf) -> Result<(), EngineError>;

    fn set_pdf(&mut self, target: &Pdf, edited: Pdf) -> Result<(), EngineError>;

    fn filtered_pdfs(&self) -> Vec<&Pdf>;

    fn filter(&self) -> &PdfPredicate;

    fn update_filter(&mut self, predicate: PdfPredicate);

    fn can_undo(&self) -> bool;

    fn can_redo(&self) -> bool;

    fn undo(&mut self) -> Result<(), EngineError>;

    fn redo(&mut self) -> Result<(), EngineError>;

    fn commit(&mut self);

    fn selected_pdf(&self) -> Option<&Pdf>;

    fn set_selected_pdf(&mut self, pdf: Option<Pdf>) -> Result<(), EngineError>;
}

/// In-memory catalog facade backed by [`CatalogHistory`].
///
/// The filter and the selection live outside history: undo and redo do
/// not restore them. A selection whose record disappears from the working
/// copy is cleared.
pub struct ModelManager {
    history: CatalogHistory,
    working: Catalog,
    filter: PdfPredicate,
    selected: Option<Pdf>,
}

impl ModelManager {
    pub fn new(initial: Catalog) -> Self {
        Self::with_history_limit(initial, None)
    }

    pub fn with_history_limit(initial: Catalog, history_limit: Option<usize>) -> Self {
        Self {
            history: CatalogHistory::with_max_depth(initial.clone(), history_limit),
            working: initial,
            filter: PdfPredicate::All,
            selected: None,
        }
    }

    pub fn history(&self) -> &CatalogHistory {
        &self.history
    }

    pub fn current_snapshot_id(&self) -> SnapshotId {
        self.history.current().id()
    }

    fn load_current_snapshot(&mut self) {
        self.working = self.history.current().catalog().clone();
        self.reconcile_selection();
    }

    fn reconcile_selection(&mut self) {
        if let Some(selected) = &self.selected
            && !self.working.iter().any(|p| p == selected)
        {
            debug!(pdf = %selected.name(), "selected pdf no longer in catalog");
            self.selected = None;
        }
    }
}

impl CatalogModel for ModelManager {
    fn catalog(&self) -> &Catalog {
        &self.working
    }

    fn reset_catalog(&mut self, catalog: Catalog) {
        self.working = catalog;
        self.reconcile_selection();
    }

    fn has_pdf(&self, pdf: &Pdf) -> bool {
        self.working.contains(pdf)
    }

    fn add_pdf(&mut self, pdf: Pdf) -> Result<(), EngineError> {
        self.working.add(pdf).map_err(EngineError::from_catalog)
    }

    fn delete_pdf(&mut self, target: &Pdf) -> Result<(), EngineError> {
        self.working.remove(target).map_err(EngineError::from_catalog)?;
        self.reconcile_selection();
        Ok(())
    }

    fn set_pdf(&mut self, target: &Pdf, edited: Pdf) -> Result<(), EngineError> {
        let follows_selection = self.selected.as_ref() == Some(target);
        self.working
            .replace(target, edited.clone())
            .map_err(EngineError::from_catalog)?;
        if follows_selection {
            self.selected = Some(edited);
        }
        Ok(())
    }

    fn filtered_pdfs(&self) -> Vec<&Pdf> {
        self.working.iter().filter(|p| self.filter.matches(p)).collect()
    }

    fn filter(&self) -> &PdfPredicate {
        &self.filter
    }

    fn update_filter(&mut self, predicate: PdfPredicate) {
        self.filter = predicate;
    }

    fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    fn undo(&mut self) -> Result<(), EngineError> {
        self.history.undo()?;
        self.load_current_snapshot();
        Ok(())
    }

    fn redo(&mut self) -> Result<(), EngineError> {
        self.history.redo()?;
        self.load_current_snapshot();
        Ok(())
    }

    fn commit(&mut self) {
        self.history.commit(self.working.clone());
    }

    fn selected_pdf(&self) -> Option<&Pdf> {
        self.selected.as_ref()
    }

    fn set_selected_pdf(&mut self, pdf: Option<Pdf>) -> Result<(), EngineError> {
        if let Some(pdf) = &pdf
            && !self.filtered_pdfs().contains(&pdf)
        {
            return Err(EngineError::NotInFilteredList(pdf.name().to_string()));
        }
        self.selected = pdf;
        Ok(())
    }
}
