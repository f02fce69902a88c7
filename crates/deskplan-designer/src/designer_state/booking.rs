use deskplan_core::{Employee, ItemStatus, WorkspaceItem};

use super::DesignerState;

impl DesignerState {
    /// The item the booking panel shows: the first selected item that still exists.
    ///
    /// Follows selection order, not item-list order. The two only differ for a
    /// non-exclusive selection, which booking mode never produces.
    pub fn primary_selected_item(&self) -> Option<&WorkspaceItem> {
        self.selection.ids().iter().find_map(|id| self.item(id))
    }

    /// Marks the item occupied by the signed-in user.
    pub fn confirm_booking(&mut self, id: &str) -> bool {
        let booked = self.edit_booking(id, ItemStatus::Occupied, Some(Employee::current_user()));
        if booked {
            self.notify("Booking confirmed!");
        }
        booked
    }

    /// Returns the item to available with no assignee.
    pub fn release_booking(&mut self, id: &str) -> bool {
        let released = self.edit_booking(id, ItemStatus::Available, None);
        if released {
            self.notify("Booking released");
        }
        released
    }

    fn edit_booking(&mut self, id: &str, status: ItemStatus, assignee: Option<Employee>) -> bool {
        if self.item(id).is_none() {
            tracing::debug!("Ignoring booking change for unknown item {}", id);
            return false;
        }
        let items = self
            .items()
            .iter()
            .map(|item| {
                let mut item = item.clone();
                if item.id == id {
                    item.status = status;
                    item.assignee = assignee.clone();
                }
                item
            })
            .collect();
        self.commit(items);
        true
    }
}
