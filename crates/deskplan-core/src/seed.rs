//! Seed layout loaded into a fresh designer.

use crate::types::{Category, ItemType, WorkspaceItem};

/// The starting floor plan: one desk inside an engineering zone next to a
/// meeting room.
pub fn initial_items() -> Vec<WorkspaceItem> {
    let mut desk = WorkspaceItem::new(
        "D-101",
        ItemType::Desk,
        Category::Furniture,
        400.0,
        150.0,
        120.0,
        70.0,
        "D-101",
    );
    desk.facilities = Some(vec![
        "Dual Monitor".to_string(),
        "Adjustable Height".to_string(),
    ]);

    let mut meeting = WorkspaceItem::new(
        "MEET-PRO",
        ItemType::Meeting,
        Category::Zone,
        100.0,
        100.0,
        250.0,
        180.0,
        "Glass Room",
    );
    meeting.facilities = Some(vec![
        "Video Conf".to_string(),
        "Whiteboard".to_string(),
        "Wheelchair Accessible".to_string(),
    ]);

    let mut zone = WorkspaceItem::new(
        "ZONE-ENG",
        ItemType::ZoneBox,
        Category::Zone,
        350.0,
        50.0,
        400.0,
        350.0,
        "Engineering Hub",
    );
    zone.color = Some("rgba(14, 113, 129, 0.03)".to_string());

    vec![desk, meeting, zone]
}

/// Id selected when the designer starts.
pub const INITIAL_SELECTION: &str = "D-101";

/// Facility tags offered by the properties panel.
pub const FACILITY_OPTIONS: [&str; 7] = [
    "Single Monitor",
    "Dual Monitor",
    "Docking Station",
    "Adjustable Height",
    "Video Conf",
    "Whiteboard",
    "Wheelchair Accessible",
];
