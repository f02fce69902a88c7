use deskplan_core::Point;

use super::DesignerState;

impl DesignerState {
    pub fn zoom(&self) -> f64 {
        self.viewport.zoom()
    }

    /// Sets the zoom level, clamped to the configured range.
    pub fn set_zoom(&mut self, zoom: f64) {
        self.viewport.set_zoom(zoom);
    }

    pub fn zoom_in(&mut self) {
        self.viewport.zoom_in();
    }

    pub fn zoom_out(&mut self) {
        self.viewport.zoom_out();
    }

    pub fn reset_zoom(&mut self) {
        self.viewport.reset_zoom();
    }

    /// Handles a scroll tick; zooms only when `modified`.
    pub fn wheel(&mut self, delta_y: f64, modified: bool) -> bool {
        let consumed = self.viewport.handle_wheel(delta_y, modified);
        if consumed {
            tracing::trace!("Wheel zoom -> {:.1}", self.viewport.zoom());
        }
        consumed
    }

    /// Records where the board is drawn in viewport space.
    pub fn set_board_origin(&mut self, x: f64, y: f64) {
        self.viewport.set_origin(Point::new(x, y));
    }
}
