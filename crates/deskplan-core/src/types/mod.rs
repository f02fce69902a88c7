//! Floor-plan data model.

mod floor;
mod geometry;
mod item;

pub use floor::FloorConfig;
pub use geometry::{Bounds, Point};
pub use item::{Category, Employee, ItemStatus, ItemType, WorkspaceItem};
