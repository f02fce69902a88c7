//! Designer state: the top-level controller for the floor-plan editor.
//!
//! Owns the committed item list (through the history store), the selection,
//! the viewport, the active gesture and the clipboard. Collaborators read
//! items and selection from here and call back through the operations below.
//!
//! This module is split into submodules:
//! - `history`: commit, undo and redo
//! - `items`: add, delete, update, duplicate, copy/paste and property setters
//! - `selection`: selection and application mode
//! - `booking`: booking confirmation and release
//! - `pointer`: pointer gestures driving the transform engine
//! - `keyboard`: keyboard shortcuts
//! - `viewport`: zoom and board placement

mod booking;
mod history;
mod items;
mod keyboard;
mod pointer;
mod selection;
mod viewport;

use chrono::{DateTime, Utc};
use deskplan_core::seed::{initial_items, INITIAL_SELECTION};
use deskplan_core::{FloorConfig, Point, WorkspaceItem};
use deskplan_settings::{Config, PlacementSettings};
use serde::{Deserialize, Serialize};

use crate::clipboard::Clipboard;
use crate::history::HistoryStore;
use crate::notification::Notification;
use crate::selection_manager::SelectionManager;
use crate::transform::InteractionState;
use crate::viewport::Viewport;

pub use items::ItemGeometry;
pub use keyboard::KeyCommand;

/// Who is using the editor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AppMode {
    /// Layout editing.
    #[default]
    Admin,
    /// End users picking a desk or room.
    Booking,
}

/// Designer state for UI integration
#[derive(Debug, Clone)]
pub struct DesignerState {
    pub mode: AppMode,
    pub floor: FloorConfig,
    pub viewport: Viewport,
    pub selection: SelectionManager,
    pub clipboard: Clipboard,
    pub(crate) history: HistoryStore,
    pub(crate) interaction: InteractionState,
    pub(crate) placement: PlacementSettings,
    /// Last board-space cursor position reported by the input layer.
    pub(crate) cursor: Option<Point>,
    pub(crate) notification: Option<Notification>,
}

impl Default for DesignerState {
    fn default() -> Self {
        Self::new()
    }
}

impl DesignerState {
    /// Creates a designer loaded with the seed layout and default settings.
    pub fn new() -> Self {
        Self::with_config(&Config::default())
    }

    /// Creates a designer loaded with the seed layout.
    pub fn with_config(config: &Config) -> Self {
        let mut state = Self::with_items(initial_items(), config);
        state.selection.select_exclusive(INITIAL_SELECTION);
        state
    }

    /// Creates a designer whose initial snapshot is `items`, with nothing selected.
    pub fn with_items(items: Vec<WorkspaceItem>, config: &Config) -> Self {
        tracing::debug!("Designer initialized with {} items", items.len());
        Self {
            mode: AppMode::Admin,
            floor: config.floor.clone(),
            viewport: Viewport::new(config.zoom.clone()),
            selection: SelectionManager::new(),
            clipboard: Clipboard::new(),
            history: HistoryStore::new(items, config.history.limit),
            interaction: InteractionState::Idle,
            placement: config.placement.clone(),
            cursor: None,
            notification: None,
        }
    }

    /// The committed item list.
    pub fn items(&self) -> &[WorkspaceItem] {
        self.history.current()
    }

    pub fn item(&self, id: &str) -> Option<&WorkspaceItem> {
        self.items().iter().find(|item| item.id == id)
    }

    /// Active gesture, if any.
    pub fn interaction(&self) -> &InteractionState {
        &self.interaction
    }

    pub fn placement(&self) -> &PlacementSettings {
        &self.placement
    }

    /// Last board-space cursor position, if one was reported.
    pub fn cursor(&self) -> Option<Point> {
        self.cursor
    }

    /// Records the board-space cursor position used by paste.
    pub fn on_cursor_move(&mut self, x: f64, y: f64) {
        self.cursor = Some(Point::new(x, y));
    }

    /// The current notification message while it is still visible at `now`.
    pub fn notification(&self, now: DateTime<Utc>) -> Option<&str> {
        self.notification
            .as_ref()
            .filter(|n| n.is_visible(now))
            .map(|n| n.message.as_str())
    }

    pub(crate) fn notify(&mut self, message: impl Into<String>) {
        let message = message.into();
        tracing::info!("{}", message);
        self.notification = Some(Notification::new(message, Utc::now()));
    }

    /// Replaces the floor bounds and name. Not recorded in history.
    pub fn set_floor_config(&mut self, floor: FloorConfig) {
        tracing::debug!(
            "Floor set to '{}' ({} x {})",
            floor.name,
            floor.width,
            floor.height
        );
        self.floor = floor;
    }

    /// Items in paint order: structural, then zones, then furniture, with
    /// selected items above unselected ones of the same category.
    pub fn render_order(&self) -> Vec<&WorkspaceItem> {
        let mut ordered: Vec<&WorkspaceItem> = self.items().iter().collect();
        ordered.sort_by_key(|item| {
            (
                item.category.z_rank(),
                self.selection.contains(&item.id),
            )
        });
        ordered
    }
}
