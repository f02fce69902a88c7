//! Serializable summary of a designer session.

use deskplan_core::{FloorConfig, WorkspaceItem};
use deskplan_designer::{AppMode, DesignerState};
use serde::Serialize;

/// What the binary prints after replaying a script.
#[derive(Debug, Serialize)]
pub struct LayoutReport<'a> {
    pub floor: &'a FloorConfig,
    pub mode: AppMode,
    pub zoom: f64,
    pub selection: &'a [String],
    pub can_undo: bool,
    pub can_redo: bool,
    pub items: &'a [WorkspaceItem],
}

impl<'a> LayoutReport<'a> {
    pub fn new(state: &'a DesignerState) -> Self {
        Self {
            floor: &state.floor,
            mode: state.mode,
            zoom: state.zoom(),
            selection: state.selected_ids(),
            can_undo: state.can_undo(),
            can_redo: state.can_redo(),
            items: state.items(),
        }
    }
}
