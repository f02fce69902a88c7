use deskplan_core::{Bounds, Point, WorkspaceItem};

/// Manages which items are selected.
///
/// The selection is an ordered list of item ids without duplicates. Order
/// does not affect membership, but the first entry is the "primary" item the
/// booking panel works on.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SelectionManager {
    selected: Vec<String>,
}

impl SelectionManager {
    /// Creates a `SelectionManager` with no selection.
    ///
    /// # Examples
    ///
    /// ```
    /// use deskplan_designer::selection_manager::SelectionManager;
    ///
    /// let manager = SelectionManager::new();
    /// assert!(manager.is_empty());
    /// ```
    pub fn new() -> Self {
        Self::default()
    }

    /// The selected ids in selection order.
    pub fn ids(&self) -> &[String] {
        &self.selected
    }

    pub fn contains(&self, id: &str) -> bool {
        self.selected.iter().any(|s| s == id)
    }

    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }

    pub fn len(&self) -> usize {
        self.selected.len()
    }

    /// First selected id, if any.
    pub fn primary(&self) -> Option<&str> {
        self.selected.first().map(String::as_str)
    }

    /// Makes `id` the only selected item.
    pub fn select_exclusive(&mut self, id: impl Into<String>) {
        self.selected = vec![id.into()];
    }

    /// Adds `id` when absent, removes it when present (Shift+click).
    pub fn toggle(&mut self, id: &str) {
        if let Some(pos) = self.selected.iter().position(|s| s == id) {
            self.selected.remove(pos);
        } else {
            self.selected.push(id.to_string());
        }
    }

    /// Replaces the selection wholesale. Repeated ids are kept once.
    pub fn select_many<I, S>(&mut self, ids: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.selected.clear();
        for id in ids {
            let id = id.into();
            if !self.contains(&id) {
                self.selected.push(id);
            }
        }
    }

    pub fn clear(&mut self) {
        self.selected.clear();
    }

    /// Selects every item whose unrotated center lies inside the rectangle
    /// spanned by `a` and `b` (inclusive, either drag direction).
    ///
    /// Rotation is ignored: a rotated item is hit-tested by its center only.
    ///
    /// Returns the number of items selected.
    pub fn select_in_rect(&mut self, items: &[WorkspaceItem], a: Point, b: Point) -> usize {
        let ids = items_in_rect(items, a, b);
        let count = ids.len();
        self.select_many(ids);
        count
    }
}

/// Ids of the items whose unrotated center falls inside the rectangle
/// spanned by `a` and `b`, in item-list order.
pub fn items_in_rect(items: &[WorkspaceItem], a: Point, b: Point) -> Vec<String> {
    let bounds = Bounds::from_corners(a, b);
    items
        .iter()
        .filter(|item| bounds.contains(item.center()))
        .map(|item| item.id.clone())
        .collect()
}
