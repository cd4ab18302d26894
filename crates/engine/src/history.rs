use std::fmt;

use pdfbook_core::{Catalog, SnapshotId};
use tracing::debug;

use crate::error::EngineError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HistoryDirection {
    Undo,
    Redo,
}

impl HistoryDirection {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Undo => "undo",
            Self::Redo => "redo",
        }
    }
}

impl fmt::Display for HistoryDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One committed version of the catalog. Never mutated after commit.
#[derive(Debug, Clone)]
pub struct Snapshot {
    id: SnapshotId,
    catalog: Catalog,
}

impl Snapshot {
    fn new(catalog: Catalog) -> Self {
        Self {
            id: SnapshotId::new(),
            catalog,
        }
    }

    pub fn id(&self) -> SnapshotId {
        self.id
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }
}

/// Append-only log of catalog snapshots with a cursor.
///
/// `states[cursor]` is the current snapshot. There is always at least one
/// state. Committing drops everything after the cursor, so states that
/// were reachable by redo are gone once a new commit lands.
pub struct CatalogHistory {
    states: Vec<Snapshot>,
    cursor: usize,
    max_depth: Option<usize>,
}

impl CatalogHistory {
    pub fn new(initial: Catalog) -> Self {
        Self::with_max_depth(initial, None)
    }

    /// `max_depth` bounds the number of retained snapshots; the oldest are
    /// dropped first. A depth below 1 is treated as 1.
    pub fn with_max_depth(initial: Catalog, max_depth: Option<usize>) -> Self {
        Self {
            states: vec![Snapshot::new(initial)],
            cursor: 0,
            max_depth: max_depth.map(|d| d.max(1)),
        }
    }

    pub fn commit(&mut self, catalog: Catalog) -> SnapshotId {
        self.states.truncate(self.cursor + 1);
        let snapshot = Snapshot::new(catalog);
        let id = snapshot.id();
        self.states.push(snapshot);
        self.cursor = self.states.len() - 1;

        // Enforce depth limit by dropping oldest entries
        if let Some(max_depth) = self.max_depth {
            while self.states.len() > max_depth {
                self.states.remove(0);
                self.cursor -= 1;
            }
        }

        debug!(snapshot = %id, cursor = self.cursor, len = self.states.len(), "committed snapshot");
        id
    }

    pub fn undo(&mut self) -> Result<&Snapshot, EngineError> {
        if !self.can_undo() {
            return Err(EngineError::NoHistory(HistoryDirection::Undo));
        }
        self.cursor -= 1;
        debug!(cursor = self.cursor, "undo");
        Ok(&self.states[self.cursor])
    }

    pub fn redo(&mut self) -> Result<&Snapshot, EngineError> {
        if !self.can_redo() {
            return Err(EngineError::NoHistory(HistoryDirection::Redo));
        }
        self.cursor += 1;
        debug!(cursor = self.cursor, "redo");
        Ok(&self.states[self.cursor])
    }

    pub fn can_undo(&self) -> bool {
        self.cursor > 0
    }

    pub fn can_redo(&self) -> bool {
        self.cursor + 1 < self.states.len()
    }

    pub fn current(&self) -> &Snapshot {
        &self.states[self.cursor]
    }

    /// Number of retained snapshots. Always at least 1.
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize {
        self.states.len()
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn undo_depth(&self) -> usize {
        self.cursor
    }

    pub fn redo_depth(&self) -> usize {
        self.states.len() - self.cursor - 1
    }

    /// Whether `id` can still be reached by undo or redo.
    pub fn contains(&self, id: SnapshotId) -> bool {
        self.states.iter().any(|s| s.id == id)
    }

    pub fn snapshot_ids(&self) -> Vec<SnapshotId> {
        self.states.iter().map(Snapshot::id).collect()
    }
}
