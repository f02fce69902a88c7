//! # DeskPlan
//!
//! An interactive office floor-plan layout engine: a zoomable board with
//! pointer-driven move, resize and rotate, marquee selection, copy/paste and
//! duplication, a booking mode, and linear undo/redo over every change.
//!
//! ## Architecture
//!
//! DeskPlan is organized as a workspace with multiple crates:
//!
//! 1. **deskplan-core** - Data model (items, floor, employees), constants, errors
//! 2. **deskplan-settings** - Editor configuration loaded from TOML or JSON
//! 3. **deskplan-designer** - Coordinate mapping, selection, transforms, history, clipboard
//! 4. **deskplan** - This facade plus a binary that replays recorded input

pub mod report;

pub use deskplan_designer as designer;
pub use deskplan_settings as settings;

pub use deskplan_core::{
    Bounds, Category, Employee, Error, FloorConfig, ItemStatus, ItemType, Point, Result,
    WorkspaceItem,
};
pub use deskplan_designer::{
    parse_script, AppMode, DesignerState, InputEvent, KeyCommand, Modifiers, PointerTarget,
    TransformKind,
};
pub use deskplan_settings::{default_config_path, Config, SettingsError};
pub use report::LayoutReport;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Build date (set at compile time)
pub const BUILD_DATE: &str = env!("BUILD_DATE");

/// Initialize logging with the default configuration
///
/// Sets up structured logging with:
/// - Console output on stderr, so stdout stays machine-readable
/// - RUST_LOG environment variable support (INFO by default)
pub fn init_logging() -> anyhow::Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::prelude::*;
    use tracing_subscriber::EnvFilter;

    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_level(true)
        .with_line_number(true);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .try_init()?;

    Ok(())
}
