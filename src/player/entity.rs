//! Player entities and their stored zone definitions
//!
//! A player is a physical signage device. Its stored properties carry the
//! rendering canvas dimensions; multizone players additionally carry a map
//! of zone definitions with raw integer geometry.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// How a player's assigned playlist renders on the canvas
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum PlaylistMode {
    /// Single full-canvas region
    #[default]
    Master,
    /// Multiple independently defined regions
    Multizone,
}

/// Formatting mode applied when exporting stored zone geometry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ZoneExportUnit {
    /// Coordinates become strings with a trailing `%`
    #[default]
    Percent,
    /// Coordinates stay bare integers
    Pixel,
}

/// A multizone playlist's declared sub-area, stored with raw integer geometry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ZoneDef {
    pub zone_top: i64,
    pub zone_left: i64,
    pub zone_width: i64,
    pub zone_height: i64,
    #[serde(rename = "zone_z-index")]
    pub zone_z_index: i64,
    pub zone_bgcolor: String,
}

/// Zone map plus the unit its geometry exports in
///
/// Zone iteration order is the stored insertion order; region output follows it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ZoneSet {
    pub export_unit: ZoneExportUnit,
    pub zones: IndexMap<String, ZoneDef>,
}

/// Canvas properties stored on the player record
///
/// Dimensions are kept as strings and carried through to layouts unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerProperties {
    pub width: String,
    pub height: String,
}

/// A registered player device
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerEntity {
    pub player_id: u64,
    pub name: String,
    pub properties: PlayerProperties,
    pub playlist_mode: PlaylistMode,
    /// Only read when `playlist_mode` is `Multizone`
    pub zones: Option<ZoneSet>,
}

impl PlayerEntity {
    pub fn new(player_id: u64, name: impl Into<String>, width: &str, height: &str) -> Self {
        Self {
            player_id,
            name: name.into(),
            properties: PlayerProperties {
                width: width.to_string(),
                height: height.to_string(),
            },
            playlist_mode: PlaylistMode::Master,
            zones: None,
        }
    }

    pub fn with_zones(mut self, zones: ZoneSet) -> Self {
        self.playlist_mode = PlaylistMode::Multizone;
        self.zones = Some(zones);
        self
    }
}
