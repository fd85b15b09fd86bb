//! Player devices and index-layout preparation
//!
//! This module provides:
//! - Player entity records with canvas properties and zone maps
//! - Layout preparation (zone geometry to normalized display regions)
//! - An in-memory player registry backing the layout API

mod entity;
mod layout;
mod service;

pub use entity::{PlayerEntity, PlayerProperties, PlaylistMode, ZoneDef, ZoneExportUnit, ZoneSet};
pub use layout::{LayoutPreparer, PlayerLayout, Region, RegionDim};
pub use service::PlayerService;
