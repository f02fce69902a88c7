//! Input events from the UI layer and their dispatch into the designer.
//!
//! Events are plain serde data so a session can be recorded and replayed:
//!
//! ```json
//! [
//!   { "type": "pointer_down", "x": 460, "y": 185, "target": { "item_id": "D-101" } },
//!   { "type": "pointer_move", "x": 500, "y": 185 },
//!   { "type": "pointer_up" }
//! ]
//! ```

use deskplan_core::{Category, ItemType, Point};
use serde::{Deserialize, Serialize};

use crate::designer_state::DesignerState;
use crate::transform::TransformKind;

/// Modifier keys held during an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Modifiers {
    pub shift: bool,
    pub ctrl: bool,
    pub meta: bool,
}

impl Modifiers {
    pub fn shift() -> Self {
        Self {
            shift: true,
            ..Self::default()
        }
    }

    /// Ctrl on most platforms, Cmd on macOS.
    pub fn command(&self) -> bool {
        self.ctrl || self.meta
    }
}

/// The item (and handle on it) under the pointer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PointerTarget {
    pub item_id: String,
    #[serde(default)]
    pub handle: TransformKind,
}

impl PointerTarget {
    pub fn new(item_id: impl Into<String>, handle: TransformKind) -> Self {
        Self {
            item_id: item_id.into(),
            handle,
        }
    }
}

/// One event from the input layer. Pointer positions are in viewport space.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum InputEvent {
    PointerDown {
        x: f64,
        y: f64,
        #[serde(default)]
        target: Option<PointerTarget>,
        #[serde(default)]
        modifiers: Modifiers,
    },
    PointerMove {
        x: f64,
        y: f64,
        #[serde(default)]
        modifiers: Modifiers,
    },
    PointerUp,
    Wheel {
        delta_y: f64,
        #[serde(default)]
        modifiers: Modifiers,
    },
    KeyDown {
        key: String,
        #[serde(default)]
        modifiers: Modifiers,
        #[serde(default)]
        in_text_field: bool,
    },
    /// The board moved on screen (layout change or scroll).
    BoardOrigin { x: f64, y: f64 },
    ZoomIn,
    ZoomOut,
    ResetZoom,
    SetZoom { value: f64 },
    ToggleMode,
    Select { ids: Vec<String> },
    AddItem {
        item_type: ItemType,
        #[serde(default)]
        category: Option<Category>,
        label: String,
    },
    Duplicate {
        #[serde(default)]
        ids: Option<Vec<String>>,
    },
    ConfirmBooking { id: String },
    ReleaseBooking { id: String },
}

/// Decodes a recorded event list.
pub fn parse_script(json: &str) -> deskplan_core::Result<Vec<InputEvent>> {
    Ok(serde_json::from_str(json)?)
}

impl DesignerState {
    /// Routes one input event to the matching operation.
    pub fn dispatch(&mut self, event: InputEvent) {
        tracing::trace!("Dispatch {:?}", event);
        match event {
            InputEvent::PointerDown {
                x,
                y,
                target,
                modifiers,
            } => self.pointer_down(Point::new(x, y), target.as_ref(), modifiers),
            InputEvent::PointerMove { x, y, modifiers } => {
                self.pointer_move(Point::new(x, y), modifiers)
            }
            InputEvent::PointerUp => self.pointer_up(),
            InputEvent::Wheel { delta_y, modifiers } => {
                self.wheel(delta_y, modifiers.command());
            }
            InputEvent::KeyDown {
                key,
                modifiers,
                in_text_field,
            } => {
                self.handle_key(&key, modifiers, in_text_field);
            }
            InputEvent::BoardOrigin { x, y } => self.set_board_origin(x, y),
            InputEvent::ZoomIn => self.zoom_in(),
            InputEvent::ZoomOut => self.zoom_out(),
            InputEvent::ResetZoom => self.reset_zoom(),
            InputEvent::SetZoom { value } => self.set_zoom(value),
            InputEvent::ToggleMode => {
                self.toggle_mode();
            }
            InputEvent::Select { ids } => self.set_selection(ids),
            InputEvent::AddItem {
                item_type,
                category,
                label,
            } => {
                let category = category.unwrap_or_else(|| item_type.default_category());
                self.add_item(item_type, category, &label);
            }
            InputEvent::Duplicate { ids } => {
                let ids = ids.unwrap_or_else(|| self.selected_ids().to_vec());
                self.duplicate_items(&ids);
            }
            InputEvent::ConfirmBooking { id } => {
                self.confirm_booking(&id);
            }
            InputEvent::ReleaseBooking { id } => {
                self.release_booking(&id);
            }
        }
    }

    /// Dispatches every event in order.
    pub fn replay<I>(&mut self, events: I)
    where
        I: IntoIterator<Item = InputEvent>,
    {
        for event in events {
            self.dispatch(event);
        }
    }
}
