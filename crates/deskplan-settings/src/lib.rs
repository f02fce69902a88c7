//! DeskPlan Settings Crate
//!
//! Handles editor configuration and its persistence to JSON or TOML files.

pub mod config;
pub mod error;

pub use config::{default_config_path, Config, HistorySettings, PlacementSettings, ZoomSettings};
pub use error::{SettingsError, SettingsResult};
