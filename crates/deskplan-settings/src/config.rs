//! Configuration for the DeskPlan designer
//!
//! Provides configuration file handling and validation. Supports JSON and
//! TOML file formats; the default location is the platform config directory.
//!
//! Configuration is organized into sections:
//! - Zoom limits and step sizes
//! - Placement rules (minimum size, duplicate/paste offsets, rotation snap)
//! - History retention
//! - The default floor

use std::path::{Path, PathBuf};

use deskplan_core::constants::{
    DUPLICATE_OFFSET, MIN_ITEM_SIZE, PASTE_FALLBACK_OFFSET, ROTATION_SNAP_DEGREES,
    WHEEL_ZOOM_STEP, ZOOM_MAX, ZOOM_MIN, ZOOM_STEP,
};
use deskplan_core::FloorConfig;
use serde::{Deserialize, Serialize};

use crate::error::{SettingsError, SettingsResult};

/// Zoom limits and increments
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ZoomSettings {
    /// Smallest allowed zoom factor
    pub min: f64,
    /// Largest allowed zoom factor
    pub max: f64,
    /// Increment for the zoom in/out controls
    pub step: f64,
    /// Increment per modified scroll tick
    pub wheel_step: f64,
}

impl Default for ZoomSettings {
    fn default() -> Self {
        Self {
            min: ZOOM_MIN,
            max: ZOOM_MAX,
            step: ZOOM_STEP,
            wheel_step: WHEEL_ZOOM_STEP,
        }
    }
}

/// Placement rules applied by the transform engine and clipboard
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlacementSettings {
    /// Minimum width/height produced by a resize
    pub min_item_size: f64,
    /// Offset of duplicated items on both axes
    pub duplicate_offset: f64,
    /// Offset of pasted items when no cursor position is known
    pub paste_offset: f64,
    /// Rotation increment while snapping
    pub rotation_snap_degrees: f64,
}

impl Default for PlacementSettings {
    fn default() -> Self {
        Self {
            min_item_size: MIN_ITEM_SIZE,
            duplicate_offset: DUPLICATE_OFFSET,
            paste_offset: PASTE_FALLBACK_OFFSET,
            rotation_snap_degrees: ROTATION_SNAP_DEGREES,
        }
    }
}

/// History retention
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HistorySettings {
    /// Maximum number of snapshots kept; 0 keeps everything
    pub limit: usize,
}

/// Complete designer configuration
///
/// Aggregates all settings sections and provides file I/O operations.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub zoom: ZoomSettings,
    pub placement: PlacementSettings,
    pub history: HistorySettings,
    pub floor: FloorConfig,
}

impl Config {
    /// Create new config with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Load config from file (JSON or TOML)
    pub fn load_from_file(path: &Path) -> SettingsResult<Self> {
        let content = std::fs::read_to_string(path)?;

        let config: Self = match extension(path) {
            Some("json") => serde_json::from_str(&content)?,
            Some("toml") => toml::from_str(&content)?,
            other => {
                return Err(SettingsError::UnsupportedFormat(
                    other.unwrap_or("<none>").to_string(),
                ))
            }
        };

        config.validate()?;
        tracing::debug!("Loaded designer config from {}", path.display());
        Ok(config)
    }

    /// Load config from file, falling back to defaults when the file does not exist.
    pub fn load_or_default(path: &Path) -> SettingsResult<Self> {
        if !path.exists() {
            tracing::debug!("No config at {}, using defaults", path.display());
            return Ok(Self::default());
        }
        Self::load_from_file(path)
    }

    /// Save config to file (JSON or TOML)
    pub fn save_to_file(&self, path: &Path) -> SettingsResult<()> {
        self.validate()?;

        let content = match extension(path) {
            Some("json") => serde_json::to_string_pretty(self)?,
            Some("toml") => toml::to_string_pretty(self)?,
            other => {
                return Err(SettingsError::UnsupportedFormat(
                    other.unwrap_or("<none>").to_string(),
                ))
            }
        };

        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Validate configuration
    pub fn validate(&self) -> SettingsResult<()> {
        let zoom = &self.zoom;
        positive("zoom.min", zoom.min)?;
        positive("zoom.max", zoom.max)?;
        if zoom.max < zoom.min {
            return Err(SettingsError::invalid("zoom.max", "must be >= zoom.min"));
        }
        positive("zoom.step", zoom.step)?;
        positive("zoom.wheel_step", zoom.wheel_step)?;

        positive("placement.min_item_size", self.placement.min_item_size)?;
        positive(
            "placement.rotation_snap_degrees",
            self.placement.rotation_snap_degrees,
        )?;
        finite("placement.duplicate_offset", self.placement.duplicate_offset)?;
        finite("placement.paste_offset", self.placement.paste_offset)?;

        positive("floor.width", self.floor.width)?;
        positive("floor.height", self.floor.height)?;

        Ok(())
    }
}

/// Rejects NaN and infinities.
fn finite(key: &str, value: f64) -> SettingsResult<()> {
    if !value.is_finite() {
        return Err(SettingsError::invalid(key, "must be a finite number"));
    }
    Ok(())
}

/// Requires a finite value greater than zero.
fn positive(key: &str, value: f64) -> SettingsResult<()> {
    finite(key, value)?;
    if value <= 0.0 {
        return Err(SettingsError::invalid(key, "must be > 0"));
    }
    Ok(())
}

fn extension(path: &Path) -> Option<&str> {
    path.extension().and_then(|ext| ext.to_str())
}

/// Default config file location: `<platform config dir>/deskplan/config.toml`.
pub fn default_config_path() -> SettingsResult<PathBuf> {
    dirs::config_dir()
        .map(|dir| dir.join("deskplan").join("config.toml"))
        .ok_or_else(|| SettingsError::ConfigDirectory("no platform config directory".to_string()))
}
