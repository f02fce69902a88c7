//! Linear undo/redo history of whole item-list snapshots.
//!
//! Every persistent change to the item list goes through [`HistoryStore::commit`].
//! Snapshots are never modified after they are appended; undo and redo only
//! move the cursor.

use deskplan_core::WorkspaceItem;

/// Snapshot log with a cursor. Always holds at least one snapshot and keeps
/// `index < len`.
#[derive(Debug, Clone)]
pub struct HistoryStore {
    snapshots: Vec<Vec<WorkspaceItem>>,
    index: usize,
    limit: usize,
}

impl HistoryStore {
    /// Creates a history whose only snapshot is `initial`. A `limit` of 0 keeps
    /// every snapshot.
    pub fn new(initial: Vec<WorkspaceItem>, limit: usize) -> Self {
        Self {
            snapshots: vec![initial],
            index: 0,
            limit,
        }
    }

    /// The visible item list.
    pub fn current(&self) -> &[WorkspaceItem] {
        // index < len is maintained by every mutator
        &self.snapshots[self.index]
    }

    /// Discards the redo branch, appends `items` and makes it visible.
    pub fn commit(&mut self, items: Vec<WorkspaceItem>) {
        self.snapshots.truncate(self.index + 1);
        self.snapshots.push(items);
        self.index = self.snapshots.len() - 1;

        if self.limit > 0 && self.snapshots.len() > self.limit {
            let excess = self.snapshots.len() - self.limit;
            self.snapshots.drain(..excess);
            self.index -= excess;
        }

        tracing::debug!(
            "History commit: index {} of {} ({} items)",
            self.index,
            self.snapshots.len(),
            self.current().len()
        );
    }

    /// Steps back one snapshot. Returns false at the oldest snapshot.
    pub fn undo(&mut self) -> bool {
        if self.index == 0 {
            return false;
        }
        self.index -= 1;
        true
    }

    /// Steps forward one snapshot. Returns false at the newest snapshot.
    pub fn redo(&mut self) -> bool {
        if self.index + 1 >= self.snapshots.len() {
            return false;
        }
        self.index += 1;
        true
    }

    pub fn can_undo(&self) -> bool {
        self.index > 0
    }

    pub fn can_redo(&self) -> bool {
        self.index + 1 < self.snapshots.len()
    }

    pub fn index(&self) -> usize {
        self.index
    }

    /// Number of stored snapshots.
    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    /// Never true; a history always holds its initial snapshot.
    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }

    pub fn undo_depth(&self) -> usize {
        self.index
    }

    pub fn redo_depth(&self) -> usize {
        self.snapshots.len() - self.index - 1
    }
}
