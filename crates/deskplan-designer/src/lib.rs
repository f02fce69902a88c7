//! # DeskPlan Designer
//!
//! The interactive engine behind the floor-plan editor: it turns pointer,
//! wheel and keyboard events into committed changes to the item list.
//!
//! ## Components
//!
//! - **Viewport**: viewport/board coordinate mapping and zoom
//! - **Selection Manager**: exclusive, toggle and marquee selection
//! - **Transform**: the move/rotate/resize gesture state machine
//! - **History**: linear undo/redo over whole item-list snapshots
//! - **Clipboard**: copy/paste and duplication with fresh ids
//! - **Designer State**: the controller tying them together
//! - **Input**: serde input events and their dispatch
//!
//! ## Data flow
//!
//! ```text
//! InputEvent
//!   └── Viewport (viewport -> board)
//!         └── Selection Manager / Transform (targets, new geometry)
//!               └── History (commit)
//!                     └── items() / selected_ids() for renderers and panels
//! ```
//!
//! ## Usage
//!
//! ```
//! use deskplan_core::Point;
//! use deskplan_designer::{DesignerState, Modifiers, PointerTarget, TransformKind};
//!
//! let mut state = DesignerState::new();
//! let target = PointerTarget::new("D-101", TransformKind::Move);
//! state.pointer_down(Point::new(450.0, 180.0), Some(&target), Modifiers::default());
//! state.pointer_move(Point::new(470.0, 190.0), Modifiers::default());
//! state.pointer_up();
//!
//! let desk = state.item("D-101").unwrap();
//! assert_eq!((desk.x, desk.y), (420.0, 160.0));
//! state.undo();
//! assert_eq!(state.item("D-101").unwrap().x, 400.0);
//! ```

pub mod clipboard;
pub mod designer_state;
pub mod history;
pub mod input;
pub mod notification;
pub mod selection_manager;
pub mod transform;
pub mod viewport;

pub use clipboard::Clipboard;
pub use designer_state::{AppMode, DesignerState, ItemGeometry, KeyCommand};
pub use history::HistoryStore;
pub use input::{parse_script, InputEvent, Modifiers, PointerTarget};
pub use notification::Notification;
pub use selection_manager::SelectionManager;
pub use transform::{InteractionState, MarqueeSession, TransformKind, TransformSession};
pub use viewport::Viewport;
