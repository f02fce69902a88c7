//! Copy/paste and duplication.
//!
//! New items always get a fresh id built from the item type and a random
//! numeric suffix, e.g. `DESK-48213907`.

use deskplan_core::constants::COPY_LABEL_SUFFIX;
use deskplan_core::{Bounds, ItemType, Point, WorkspaceItem};
use uuid::Uuid;

use crate::transform::round_half_up;

/// Range of the numeric id suffix.
const ID_SUFFIX_SPACE: u128 = 100_000_000;

/// Items captured by the last copy. Independent of history.
#[derive(Debug, Clone, Default)]
pub struct Clipboard {
    items: Vec<WorkspaceItem>,
}

impl Clipboard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the clipboard with copies of `items`. Copying nothing leaves
    /// the previous contents in place; returns the number of items captured.
    pub fn copy(&mut self, items: &[WorkspaceItem]) -> usize {
        if items.is_empty() {
            return 0;
        }
        self.items = items.to_vec();
        self.items.len()
    }

    pub fn items(&self) -> &[WorkspaceItem] {
        &self.items
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Copies of the clipboard contents placed so that their combined
    /// bounding-box center lands on `cursor`, or `fallback_offset` below and
    /// to the right of where it was copied from when no cursor is known.
    ///
    /// Positions are rounded to whole units, ids are fresh and the copies are
    /// unlocked. Labels are kept.
    pub fn paste_layout(&self, cursor: Option<Point>, fallback_offset: f64) -> Vec<WorkspaceItem> {
        let Some(center) = combined_bounds(&self.items).map(|b| b.center()) else {
            return Vec::new();
        };
        let target = cursor.unwrap_or(Point::new(
            center.x + fallback_offset,
            center.y + fallback_offset,
        ));
        let (dx, dy) = (target.x - center.x, target.y - center.y);

        self.items
            .iter()
            .map(|item| {
                let mut pasted = item.clone();
                pasted.id = generate_id(item.item_type);
                pasted.x = round_half_up(item.x + dx);
                pasted.y = round_half_up(item.y + dy);
                pasted.locked = Some(false);
                pasted
            })
            .collect()
    }
}

/// Offset copies of `items` with fresh ids and " (Copy)" labels.
pub fn duplicates(items: &[WorkspaceItem], offset: f64) -> Vec<WorkspaceItem> {
    items
        .iter()
        .map(|item| {
            let mut copy = item.clone();
            copy.id = generate_id(item.item_type);
            copy.x = item.x + offset;
            copy.y = item.y + offset;
            copy.label = format!("{}{}", item.label, COPY_LABEL_SUFFIX);
            copy
        })
        .collect()
}

/// Union of the unrotated bounds of `items`; `None` when empty.
pub fn combined_bounds(items: &[WorkspaceItem]) -> Option<Bounds> {
    items
        .iter()
        .map(WorkspaceItem::bounds)
        .reduce(|acc, b| acc.union(&b))
}

/// A new practically-unique id for an item of `item_type`.
pub fn generate_id(item_type: ItemType) -> String {
    let suffix = Uuid::new_v4().as_u128() % ID_SUFFIX_SPACE;
    format!("{}-{}", item_type.id_prefix(), suffix)
}

/// A random value in `[0, 1)`.
///
/// Uses the low 48 bits of a v4 uuid; the version and variant bits sit above them.
pub(crate) fn random_unit() -> f64 {
    const RANDOM_BITS: u32 = 48;
    let bits = Uuid::new_v4().as_u128() & ((1u128 << RANDOM_BITS) - 1);
    bits as f64 / (1u128 << RANDOM_BITS) as f64
}
