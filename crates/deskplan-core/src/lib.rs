//! # DeskPlan Core
//!
//! Core types, constants and errors shared by every DeskPlan crate.
//! Provides the floor-plan data model (items, floor configuration,
//! employees) and the small geometry vocabulary the designer works in.

pub mod constants;
pub mod error;
pub mod seed;
pub mod types;

pub use error::{Error, Result};

pub use types::{
    Bounds, Category, Employee, FloorConfig, ItemStatus, ItemType, Point, WorkspaceItem,
};
