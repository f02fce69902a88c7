//! Coordinate mapping between viewport (screen) space and board space.
//!
//! The board is drawn at `origin` (the top-left of the board's on-screen
//! bounding rectangle) and scaled by `zoom`. Conversions read the current
//! zoom and origin on every call; nothing is cached between events.

use deskplan_core::Point;
use deskplan_settings::ZoomSettings;

/// Zoom factor and board placement on screen.
#[derive(Debug, Clone, PartialEq)]
pub struct Viewport {
    zoom: f64,
    origin: Point,
    limits: ZoomSettings,
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new(ZoomSettings::default())
    }
}

impl Viewport {
    /// Creates a viewport at 100% zoom with the board at the screen origin.
    ///
    /// Unusable limits (non-finite, non-positive, or `min > max`) are replaced
    /// by the built-in defaults so zooming can never fail.
    pub fn new(limits: ZoomSettings) -> Self {
        let limits = usable_limits(limits);
        Self {
            zoom: 1.0_f64.clamp(limits.min, limits.max),
            origin: Point::new(0.0, 0.0),
            limits,
        }
    }

    /// Gets the current zoom level (1.0 = 100%).
    pub fn zoom(&self) -> f64 {
        self.zoom
    }

    /// Sets the zoom level, clamped to the configured range.
    pub fn set_zoom(&mut self, zoom: f64) {
        if zoom.is_nan() {
            return;
        }
        self.zoom = zoom.clamp(self.limits.min, self.limits.max);
    }

    pub fn zoom_in(&mut self) {
        self.set_zoom(self.zoom + self.limits.step);
    }

    pub fn zoom_out(&mut self) {
        self.set_zoom(self.zoom - self.limits.step);
    }

    /// Resets zoom to 1.0 (100%).
    pub fn reset_zoom(&mut self) {
        self.set_zoom(1.0);
    }

    /// Applies one scroll tick. Only a modified scroll zooms; scrolling down
    /// (positive `delta_y`) zooms out. Returns whether the event was consumed.
    pub fn handle_wheel(&mut self, delta_y: f64, modified: bool) -> bool {
        if !modified {
            return false;
        }
        let step = if delta_y > 0.0 {
            -self.limits.wheel_step
        } else {
            self.limits.wheel_step
        };
        self.set_zoom(self.zoom + step);
        true
    }

    /// Top-left of the board in viewport space.
    pub fn origin(&self) -> Point {
        self.origin
    }

    /// Records where the board is currently drawn (after layout or scroll).
    pub fn set_origin(&mut self, origin: Point) {
        self.origin = origin;
    }

    pub fn limits(&self) -> &ZoomSettings {
        &self.limits
    }

    /// Converts a viewport position to board coordinates.
    ///
    /// ```text
    /// board = (viewport - origin) / zoom
    /// ```
    pub fn to_board(&self, viewport: Point) -> Point {
        Point::new(
            (viewport.x - self.origin.x) / self.zoom,
            (viewport.y - self.origin.y) / self.zoom,
        )
    }

    /// Converts board coordinates to a viewport position.
    pub fn to_viewport(&self, board: Point) -> Point {
        Point::new(
            self.origin.x + board.x * self.zoom,
            self.origin.y + board.y * self.zoom,
        )
    }

    /// Converts a viewport displacement to a board displacement.
    pub fn delta_to_board(&self, dx: f64, dy: f64) -> (f64, f64) {
        (dx / self.zoom, dy / self.zoom)
    }
}

fn usable_limits(limits: ZoomSettings) -> ZoomSettings {
    let defaults = ZoomSettings::default();
    let positive = |v: f64| v.is_finite() && v > 0.0;

    let (min, max) = if positive(limits.min) && positive(limits.max) && limits.min <= limits.max {
        (limits.min, limits.max)
    } else {
        tracing::warn!(
            "Ignoring zoom range {} - {}, using {} - {}",
            limits.min,
            limits.max,
            defaults.min,
            defaults.max
        );
        (defaults.min, defaults.max)
    };

    ZoomSettings {
        min,
        max,
        step: if positive(limits.step) { limits.step } else { defaults.step },
        wheel_step: if positive(limits.wheel_step) {
            limits.wheel_step
        } else {
            defaults.wheel_step
        },
    }
}
