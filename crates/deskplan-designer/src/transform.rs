//! Pointer-driven transform state machine.
//!
//! A gesture runs from pointer-down to pointer-up. While it is active the
//! engine holds either a [`TransformSession`] (move, rotate or a corner
//! resize of the selected items) or a [`MarqueeSession`] (rubber-band
//! selection on empty board). Geometry is always derived from the session's
//! start snapshot plus the current pointer, never from the live items, so a
//! multi-item drag moves rigidly.

use deskplan_core::{Bounds, Point, WorkspaceItem};
use deskplan_settings::PlacementSettings;
use serde::{Deserialize, Serialize};

use crate::viewport::Viewport;

/// What a gesture does to its target items.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum TransformKind {
    #[default]
    #[serde(rename = "move")]
    Move,
    #[serde(rename = "rotate")]
    Rotate,
    #[serde(rename = "resize-tl")]
    ResizeTopLeft,
    #[serde(rename = "resize-tr")]
    ResizeTopRight,
    #[serde(rename = "resize-bl")]
    ResizeBottomLeft,
    #[serde(rename = "resize-br")]
    ResizeBottomRight,
}

impl TransformKind {
    pub fn is_resize(&self) -> bool {
        matches!(
            self,
            TransformKind::ResizeTopLeft
                | TransformKind::ResizeTopRight
                | TransformKind::ResizeBottomLeft
                | TransformKind::ResizeBottomRight
        )
    }

    fn left(&self) -> bool {
        matches!(self, TransformKind::ResizeTopLeft | TransformKind::ResizeBottomLeft)
    }

    fn right(&self) -> bool {
        matches!(self, TransformKind::ResizeTopRight | TransformKind::ResizeBottomRight)
    }

    fn top(&self) -> bool {
        matches!(self, TransformKind::ResizeTopLeft | TransformKind::ResizeTopRight)
    }

    fn bottom(&self) -> bool {
        matches!(self, TransformKind::ResizeBottomLeft | TransformKind::ResizeBottomRight)
    }
}

/// An active move/rotate/resize gesture.
#[derive(Debug, Clone, PartialEq)]
pub struct TransformSession {
    pub kind: TransformKind,
    /// Pointer-down position in viewport space.
    pub start: Point,
    /// Value copies of the target items taken at pointer-down.
    pub start_items: Vec<WorkspaceItem>,
    /// Rotation of the pressed item at pointer-down.
    pub initial_rotation: f64,
    /// Angle (radians) from the pressed item's center to the pointer at
    /// pointer-down. Zero unless the gesture is a rotation.
    pub start_angle: f64,
}

impl TransformSession {
    /// Starts a gesture on `pressed` that will transform `targets`.
    pub fn begin(
        kind: TransformKind,
        pointer: Point,
        pressed: &WorkspaceItem,
        targets: Vec<WorkspaceItem>,
        viewport: &Viewport,
    ) -> Self {
        let start_angle = if kind == TransformKind::Rotate {
            pointer_angle(pressed.center(), pointer, viewport)
        } else {
            0.0
        };

        Self {
            kind,
            start: pointer,
            start_items: targets,
            initial_rotation: pressed.rotation,
            start_angle,
        }
    }

    /// Computes the targets' geometry for the pointer at `pointer`.
    ///
    /// Locked items come back unchanged. `snap` rounds rotation to the
    /// configured increment.
    pub fn update(
        &self,
        pointer: Point,
        viewport: &Viewport,
        snap: bool,
        rules: &PlacementSettings,
    ) -> Vec<WorkspaceItem> {
        let (dx, dy) = viewport.delta_to_board(pointer.x - self.start.x, pointer.y - self.start.y);

        self.start_items
            .iter()
            .map(|item| {
                if item.is_locked() {
                    return item.clone();
                }
                match self.kind {
                    TransformKind::Move => moved(item, dx, dy),
                    TransformKind::Rotate => {
                        let current = pointer_angle(item.center(), pointer, viewport);
                        let mut rotated = item.clone();
                        rotated.rotation = rotation_for(
                            self.initial_rotation,
                            self.start_angle,
                            current,
                            snap.then_some(rules.rotation_snap_degrees),
                        );
                        rotated
                    }
                    kind => resized(item, kind, dx, dy, rules.min_item_size),
                }
            })
            .collect()
    }
}

/// An active rubber-band selection, corners in board space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MarqueeSession {
    pub start: Point,
    pub current: Point,
}

impl MarqueeSession {
    pub fn new(start: Point) -> Self {
        Self {
            start,
            current: start,
        }
    }

    /// Normalized rectangle, independent of drag direction.
    pub fn bounds(&self) -> Bounds {
        Bounds::from_corners(self.start, self.current)
    }
}

/// Transform engine state. At most one gesture is active at a time.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum InteractionState {
    #[default]
    Idle,
    Dragging(TransformSession),
    MarqueeSelecting(MarqueeSession),
}

impl InteractionState {
    pub fn is_idle(&self) -> bool {
        matches!(self, InteractionState::Idle)
    }

    pub fn marquee(&self) -> Option<&MarqueeSession> {
        match self {
            InteractionState::MarqueeSelecting(m) => Some(m),
            _ => None,
        }
    }

    pub fn session(&self) -> Option<&TransformSession> {
        match self {
            InteractionState::Dragging(s) => Some(s),
            _ => None,
        }
    }
}

/// Angle in radians of the vector from a board-space center to a viewport
/// pointer, measured in viewport space.
pub fn pointer_angle(center: Point, pointer: Point, viewport: &Viewport) -> f64 {
    let c = viewport.to_viewport(center);
    (pointer.y - c.y).atan2(pointer.x - c.x)
}

/// Rotation after turning from `start_angle` to `current_angle` (radians).
/// Snaps to a multiple of `snap_degrees` when given, otherwise to 0.1°.
pub fn rotation_for(
    initial_rotation: f64,
    start_angle: f64,
    current_angle: f64,
    snap_degrees: Option<f64>,
) -> f64 {
    let rotation = initial_rotation + (current_angle - start_angle).to_degrees();
    match snap_degrees {
        Some(step) if step > 0.0 => round_half_up(rotation / step) * step,
        _ => round_half_up(rotation * 10.0) / 10.0,
    }
}

/// `item` translated by `(dx, dy)` with the position rounded to whole units.
pub fn moved(item: &WorkspaceItem, dx: f64, dy: f64) -> WorkspaceItem {
    let mut out = item.clone();
    out.x = round_half_up(item.x + dx);
    out.y = round_half_up(item.y + dy);
    out
}

/// `item` resized by dragging the corner named by `kind`.
///
/// Only the two edges meeting at the corner move. Width and height never drop
/// below `min_size`.
pub fn resized(
    item: &WorkspaceItem,
    kind: TransformKind,
    dx: f64,
    dy: f64,
    min_size: f64,
) -> WorkspaceItem {
    let mut out = item.clone();
    if kind.right() {
        out.width = (item.width + dx).max(min_size);
    }
    if kind.bottom() {
        out.height = (item.height + dy).max(min_size);
    }
    if kind.left() {
        out.x = item.x + dx;
        out.width = (item.width - dx).max(min_size);
    }
    if kind.top() {
        out.y = item.y + dy;
        out.height = (item.height - dy).max(min_size);
    }
    out
}

/// Rounds to the nearest integer with halves going towards positive infinity.
pub(crate) fn round_half_up(value: f64) -> f64 {
    (value + 0.5).floor()
}
