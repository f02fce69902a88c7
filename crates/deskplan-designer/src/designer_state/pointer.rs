use deskplan_core::Point;

use super::{AppMode, DesignerState};
use crate::input::{Modifiers, PointerTarget};
use crate::transform::{InteractionState, MarqueeSession, TransformKind, TransformSession};

impl DesignerState {
    /// Handles pointer-down at viewport position `pointer`.
    ///
    /// `target` names the pressed item and handle; `None` means empty board.
    pub fn pointer_down(
        &mut self,
        pointer: Point,
        target: Option<&PointerTarget>,
        modifiers: Modifiers,
    ) {
        if self.mode == AppMode::Booking {
            if let Some(item) = target.and_then(|t| self.item(&t.item_id)) {
                if item.is_bookable() {
                    let id = item.id.clone();
                    self.selection.select_exclusive(id);
                }
            }
            return;
        }

        let Some(target) = target else {
            let start = self.viewport.to_board(pointer);
            self.interaction = InteractionState::MarqueeSelecting(MarqueeSession::new(start));
            self.selection.clear();
            tracing::debug!("Marquee started at ({:.1}, {:.1})", start.x, start.y);
            return;
        };

        let Some(pressed) = self.item(&target.item_id).cloned() else {
            tracing::debug!("Pointer down on unknown item {}", target.item_id);
            return;
        };

        if pressed.is_locked() && target.handle != TransformKind::Move {
            if !self.selection.contains(&pressed.id) {
                self.selection.select_exclusive(pressed.id.clone());
            }
            tracing::debug!("Refused {:?} on locked item {}", target.handle, pressed.id);
            return;
        }

        if modifiers.shift {
            self.selection.toggle(&pressed.id);
        } else if !self.selection.contains(&pressed.id) {
            self.selection.select_exclusive(pressed.id.clone());
        }

        if pressed.is_locked() {
            tracing::debug!("Refused move on locked item {}", pressed.id);
            return;
        }

        let targets = self.selected_items();
        tracing::debug!(
            "Gesture {:?} started on {} ({} item(s))",
            target.handle,
            pressed.id,
            targets.len()
        );
        self.interaction = InteractionState::Dragging(TransformSession::begin(
            target.handle,
            pointer,
            &pressed,
            targets,
            &self.viewport,
        ));
    }

    /// Handles pointer-move at viewport position `pointer`.
    ///
    /// Always reports the board-space cursor. Extends an active marquee, or
    /// recomputes and commits the dragged items' geometry.
    pub fn pointer_move(&mut self, pointer: Point, modifiers: Modifiers) {
        let board = self.viewport.to_board(pointer);
        self.on_cursor_move(board.x, board.y);

        let updated = match &mut self.interaction {
            InteractionState::Idle => return,
            InteractionState::MarqueeSelecting(marquee) => {
                marquee.current = board;
                return;
            }
            InteractionState::Dragging(session) => {
                session.update(pointer, &self.viewport, modifiers.shift, &self.placement)
            }
        };
        self.update_items(updated);
    }

    /// Handles pointer-up: finalizes a marquee and ends any gesture.
    pub fn pointer_up(&mut self) {
        match std::mem::take(&mut self.interaction) {
            InteractionState::MarqueeSelecting(marquee) => {
                let count = self.selection.select_in_rect(
                    self.history.current(),
                    marquee.start,
                    marquee.current,
                );
                tracing::debug!("Marquee selected {} item(s)", count);
            }
            InteractionState::Dragging(session) => {
                tracing::debug!("Gesture {:?} ended", session.kind);
            }
            InteractionState::Idle => {}
        }
    }
}
