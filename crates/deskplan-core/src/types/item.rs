//! Placed workspace items and the people who occupy them.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::geometry::{Bounds, Point};
use crate::error::Error;

/// Kind of object placed on the floor plan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ItemType {
    Desk,
    LShape,
    Meeting,
    Lounge,
    Chair,
    Storage,
    Wall,
    ZoneBox,
    Divider,
}

impl ItemType {
    pub const ALL: [ItemType; 9] = [
        ItemType::Desk,
        ItemType::LShape,
        ItemType::Meeting,
        ItemType::Lounge,
        ItemType::Chair,
        ItemType::Storage,
        ItemType::Wall,
        ItemType::ZoneBox,
        ItemType::Divider,
    ];

    /// The wire name of the type (`"l-shape"`, `"zone-box"`, ...).
    pub fn as_str(&self) -> &'static str {
        match self {
            ItemType::Desk => "desk",
            ItemType::LShape => "l-shape",
            ItemType::Meeting => "meeting",
            ItemType::Lounge => "lounge",
            ItemType::Chair => "chair",
            ItemType::Storage => "storage",
            ItemType::Wall => "wall",
            ItemType::ZoneBox => "zone-box",
            ItemType::Divider => "divider",
        }
    }

    /// Prefix used when generating ids for new items of this type.
    pub fn id_prefix(&self) -> String {
        self.as_str().to_uppercase()
    }

    /// Default `(width, height)` for a freshly added item.
    pub fn default_size(&self) -> (f64, f64) {
        match self {
            ItemType::Wall => (400.0, 10.0),
            ItemType::ZoneBox => (300.0, 250.0),
            ItemType::Desk => (120.0, 70.0),
            ItemType::LShape => (160.0, 160.0),
            ItemType::Chair => (45.0, 45.0),
            ItemType::Storage => (80.0, 40.0),
            ItemType::Meeting => (250.0, 180.0),
            ItemType::Lounge => (200.0, 150.0),
            ItemType::Divider => (200.0, 6.0),
        }
    }

    /// The category the asset catalog files this type under.
    pub fn default_category(&self) -> Category {
        match self {
            ItemType::Wall | ItemType::Divider => Category::Structural,
            ItemType::ZoneBox | ItemType::Meeting | ItemType::Lounge => Category::Zone,
            ItemType::Desk | ItemType::LShape | ItemType::Chair | ItemType::Storage => {
                Category::Furniture
            }
        }
    }
}

impl fmt::Display for ItemType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ItemType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ItemType::ALL
            .iter()
            .copied()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| Error::UnknownItemType(s.to_string()))
    }
}

/// Grouping used for z-ordering and panel logic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Furniture,
    Zone,
    Structural,
}

impl Category {
    /// Paint order rank: structural at the bottom, furniture on top.
    pub fn z_rank(&self) -> u8 {
        match self {
            Category::Structural => 0,
            Category::Zone => 1,
            Category::Furniture => 2,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ItemStatus {
    #[default]
    Available,
    Occupied,
}

/// A person who can occupy an item. Items embed a snapshot of the person,
/// not a reference into a directory.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Employee {
    pub id: String,
    pub name: String,
    pub role: String,
    pub avatar: String,
    pub department: String,
}

impl Employee {
    /// The signed-in user, as recorded by the booking flow.
    pub fn current_user() -> Self {
        Self {
            id: "me".to_string(),
            name: "Current User".to_string(),
            role: "Employee".to_string(),
            avatar: "https://i.pravatar.cc/150?u=me".to_string(),
            department: "Engineering".to_string(),
        }
    }
}

/// An object placed on the floor plan.
///
/// Geometry is in board units: `x`/`y` is the unrotated top-left corner and
/// `rotation` (degrees, any range) turns the item about its own center.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkspaceItem {
    pub id: String,
    #[serde(rename = "type")]
    pub item_type: ItemType,
    pub category: Category,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub rotation: f64,
    pub label: String,
    #[serde(default)]
    pub status: ItemStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assignee: Option<Employee>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub locked: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub facilities: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
}

impl WorkspaceItem {
    /// Creates an unrotated, available item with no optional attributes.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        id: impl Into<String>,
        item_type: ItemType,
        category: Category,
        x: f64,
        y: f64,
        width: f64,
        height: f64,
        label: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            item_type,
            category,
            x,
            y,
            width,
            height,
            rotation: 0.0,
            label: label.into(),
            status: ItemStatus::Available,
            assignee: None,
            locked: None,
            facilities: None,
            color: None,
        }
    }

    pub fn is_locked(&self) -> bool {
        self.locked.unwrap_or(false)
    }

    /// Unrotated center point.
    pub fn center(&self) -> Point {
        Point::new(self.x + self.width / 2.0, self.y + self.height / 2.0)
    }

    /// Unrotated axis-aligned bounds.
    pub fn bounds(&self) -> Bounds {
        Bounds {
            min_x: self.x,
            min_y: self.y,
            max_x: self.x + self.width,
            max_y: self.y + self.height,
        }
    }

    /// Whether end users may book this item.
    pub fn is_bookable(&self) -> bool {
        self.category == Category::Furniture || self.item_type == ItemType::Meeting
    }

    pub fn has_facility(&self, facility: &str) -> bool {
        self.facilities
            .as_ref()
            .is_some_and(|f| f.iter().any(|name| name == facility))
    }
}
