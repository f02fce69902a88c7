use serde::{Deserialize, Serialize};

/// Board dimensions and display name.
///
/// Defines the extent of board space. Item coordinates are not clamped to it;
/// an item placed outside the floor is still valid.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FloorConfig {
    pub width: f64,
    pub height: f64,
    pub name: String,
}

impl Default for FloorConfig {
    fn default() -> Self {
        Self {
            width: 1600.0,
            height: 1200.0,
            name: "Level 4".to_string(),
        }
    }
}
