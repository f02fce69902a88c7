use std::collections::HashMap;

use deskplan_core::constants::{ADD_ITEM_JITTER, ADD_ITEM_ORIGIN};
use deskplan_core::{Category, Employee, ItemStatus, ItemType, WorkspaceItem};
use serde::{Deserialize, Serialize};

use super::DesignerState;
use crate::clipboard::{duplicates, generate_id, random_unit};

/// Fill color given to new zone boxes.
const ZONE_BOX_COLOR: &str = "rgba(14, 113, 129, 0.05)";

/// Position, size and rotation of an item, as edited in the properties panel.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ItemGeometry {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub rotation: f64,
}

impl From<&WorkspaceItem> for ItemGeometry {
    fn from(item: &WorkspaceItem) -> Self {
        Self {
            x: item.x,
            y: item.y,
            width: item.width,
            height: item.height,
            rotation: item.rotation,
        }
    }
}

impl DesignerState {
    /// Copies of the selected items, in item-list order.
    pub fn selected_items(&self) -> Vec<WorkspaceItem> {
        self.items()
            .iter()
            .filter(|item| self.selection.contains(&item.id))
            .cloned()
            .collect()
    }

    /// Adds a new item of `item_type` near the top-left of the floor and
    /// selects it. Returns the new id.
    pub fn add_item(&mut self, item_type: ItemType, category: Category, label: &str) -> String {
        let (width, height) = item_type.default_size();
        let (origin_x, origin_y) = ADD_ITEM_ORIGIN;
        let mut item = WorkspaceItem::new(
            generate_id(item_type),
            item_type,
            category,
            origin_x + random_unit() * ADD_ITEM_JITTER,
            origin_y + random_unit() * ADD_ITEM_JITTER,
            width,
            height,
            format!("{} {}", label, self.items().len() + 1),
        );
        if item_type == ItemType::ZoneBox {
            item.color = Some(ZONE_BOX_COLOR.to_string());
        }

        let id = item.id.clone();
        let mut items = self.items().to_vec();
        items.push(item);
        self.commit(items);
        self.selection.select_exclusive(id.clone());
        self.notify(format!("Added {}", label));
        id
    }

    /// Removes the named items and clears the selection. An empty list does nothing.
    pub fn delete_items(&mut self, ids: &[String]) {
        if ids.is_empty() {
            return;
        }
        let items = self
            .items()
            .iter()
            .filter(|item| !ids.contains(&item.id))
            .cloned()
            .collect();
        self.commit(items);
        self.selection.clear();
        self.notify(format!("{} item(s) deleted", ids.len()));
    }

    /// Replaces live items with the given versions, matched by id. Unknown ids
    /// are ignored and list order is kept. Always records a snapshot.
    pub fn update_items(&mut self, updated: Vec<WorkspaceItem>) {
        let mut by_id: HashMap<String, WorkspaceItem> = updated
            .into_iter()
            .map(|item| (item.id.clone(), item))
            .collect();
        let items = self
            .items()
            .iter()
            .map(|item| by_id.remove(&item.id).unwrap_or_else(|| item.clone()))
            .collect();
        self.commit(items);
    }

    /// Replaces a single item, matched by id.
    pub fn update_item(&mut self, item: WorkspaceItem) {
        self.update_items(vec![item]);
    }

    /// Clones the named items offset down and to the right, and selects the clones.
    pub fn duplicate_items(&mut self, ids: &[String]) -> Vec<String> {
        let sources: Vec<WorkspaceItem> = self
            .items()
            .iter()
            .filter(|item| ids.contains(&item.id))
            .cloned()
            .collect();
        if sources.is_empty() {
            return Vec::new();
        }

        let clones = duplicates(&sources, self.placement.duplicate_offset);
        self.append_and_select(clones, "Duplicated")
    }

    /// Copies the selected items to the clipboard. Returns how many were copied.
    pub fn copy(&mut self) -> usize {
        let selected = self.selected_items();
        let count = self.clipboard.copy(&selected);
        if count > 0 {
            self.notify(format!("Copied {} item(s)", count));
        }
        count
    }

    /// Pastes the clipboard centered on the last cursor position and selects
    /// the pasted items.
    pub fn paste(&mut self) -> Vec<String> {
        if self.clipboard.is_empty() {
            return Vec::new();
        }
        let pasted = self
            .clipboard
            .paste_layout(self.cursor, self.placement.paste_offset);
        self.append_and_select(pasted, "Pasted")
    }

    fn append_and_select(&mut self, new_items: Vec<WorkspaceItem>, verb: &str) -> Vec<String> {
        let ids: Vec<String> = new_items.iter().map(|item| item.id.clone()).collect();
        let mut items = self.items().to_vec();
        items.extend(new_items);
        self.commit(items);
        self.selection.select_many(ids.iter().cloned());
        self.notify(format!("{} {} item(s)", verb, ids.len()));
        ids
    }

    /// Applies `edit` to a copy of the named item and commits it. Unknown ids
    /// are ignored.
    fn edit_item(&mut self, id: &str, edit: impl FnOnce(&mut WorkspaceItem)) -> bool {
        let Some(mut item) = self.item(id).cloned() else {
            tracing::debug!("Ignoring edit of unknown item {}", id);
            return false;
        };
        edit(&mut item);
        self.update_item(item);
        true
    }

    pub fn set_locked(&mut self, id: &str, locked: bool) -> bool {
        self.edit_item(id, |item| item.locked = Some(locked))
    }

    pub fn set_label(&mut self, id: &str, label: &str) -> bool {
        self.edit_item(id, |item| item.label = label.to_string())
    }

    pub fn set_geometry(&mut self, id: &str, geometry: ItemGeometry) -> bool {
        self.edit_item(id, |item| {
            item.x = geometry.x;
            item.y = geometry.y;
            item.width = geometry.width;
            item.height = geometry.height;
            item.rotation = geometry.rotation;
        })
    }

    /// Adds the facility tag when missing, removes it when present.
    pub fn toggle_facility(&mut self, id: &str, facility: &str) -> bool {
        self.edit_item(id, |item| {
            let facilities = item.facilities.get_or_insert_with(Vec::new);
            if facilities.iter().any(|f| f == facility) {
                facilities.retain(|f| f != facility);
            } else {
                facilities.push(facility.to_string());
            }
        })
    }

    /// Assigns a person (occupied) or clears the assignment (available).
    pub fn set_assignee(&mut self, id: &str, assignee: Option<Employee>) -> bool {
        self.edit_item(id, |item| {
            item.status = if assignee.is_some() {
                ItemStatus::Occupied
            } else {
                ItemStatus::Available
            };
            item.assignee = assignee;
        })
    }
}
