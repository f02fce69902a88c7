//! Engine-wide constants.
//!
//! These are the built-in defaults; `deskplan-settings` can override the
//! tunable ones per installation.

/// Smallest width or height (board units) a resize may produce.
pub const MIN_ITEM_SIZE: f64 = 20.0;

/// Lower zoom bound.
pub const ZOOM_MIN: f64 = 0.2;

/// Upper zoom bound.
pub const ZOOM_MAX: f64 = 3.0;

/// Zoom change applied by the explicit zoom in/out controls.
pub const ZOOM_STEP: f64 = 0.2;

/// Zoom change applied per modified scroll tick.
pub const WHEEL_ZOOM_STEP: f64 = 0.1;

/// Offset applied to duplicated items on both axes.
pub const DUPLICATE_OFFSET: f64 = 20.0;

/// Offset from the clipboard center used by paste when no cursor is known.
pub const PASTE_FALLBACK_OFFSET: f64 = 50.0;

/// Rotation increment used while the snap modifier is held.
pub const ROTATION_SNAP_DEGREES: f64 = 15.0;

/// How long a notification stays visible, in milliseconds.
pub const NOTIFICATION_TTL_MS: i64 = 3000;

/// Suffix appended to the label of a duplicated item.
pub const COPY_LABEL_SUFFIX: &str = " (Copy)";

/// Top-left of the random placement window for newly added items.
pub const ADD_ITEM_ORIGIN: (f64, f64) = (300.0, 200.0);

/// Size of the random placement window for newly added items.
pub const ADD_ITEM_JITTER: f64 = 50.0;
