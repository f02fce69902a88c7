use deskplan_core::WorkspaceItem;

use super::DesignerState;

impl DesignerState {
    /// Appends `items` as the new visible snapshot, discarding any redo branch.
    pub fn commit(&mut self, items: Vec<WorkspaceItem>) {
        self.history.commit(items);
    }

    /// Returns to the previous snapshot. No-op at the oldest one.
    pub fn undo(&mut self) -> bool {
        if !self.history.undo() {
            return false;
        }
        self.notify("Undo successful");
        true
    }

    /// Re-applies the next snapshot. No-op at the newest one.
    pub fn redo(&mut self) -> bool {
        if !self.history.redo() {
            return false;
        }
        self.notify("Redo successful");
        true
    }

    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    /// Number of snapshots currently stored.
    pub fn history_len(&self) -> usize {
        self.history.len()
    }
}
