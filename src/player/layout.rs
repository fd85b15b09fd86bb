//! Layout preparation for player index generation
//!
//! Converts a player's stored zone definitions into the normalized region list
//! the rendering template consumes. Master mode yields the implicit full-canvas
//! region; multizone mode yields one region per declared zone, formatted
//! according to the zone set's export unit.

use serde::Serialize;

use super::entity::{PlayerEntity, PlaylistMode, ZoneExportUnit};

/// A region coordinate, formatted per the export unit
///
/// Pixel values serialize as bare integers, percent values as `"{n}%"` strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegionDim {
    Pixels(i64),
    Percent(i64),
}

impl RegionDim {
    fn from_zone_value(value: i64, unit: ZoneExportUnit) -> Self {
        match unit {
            ZoneExportUnit::Percent => RegionDim::Percent(value),
            ZoneExportUnit::Pixel => RegionDim::Pixels(value),
        }
    }
}

impl Serialize for RegionDim {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            RegionDim::Pixels(n) => serializer.serialize_i64(*n),
            RegionDim::Percent(n) => serializer.serialize_str(&format!("{}%", n)),
        }
    }
}

impl std::fmt::Display for RegionDim {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RegionDim::Pixels(n) => write!(f, "{}", n),
            RegionDim::Percent(n) => write!(f, "{}%", n),
        }
    }
}

/// One rectangular display area within the player's rendering canvas
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Region {
    #[serde(rename = "REGION_LEFT")]
    pub left: RegionDim,
    #[serde(rename = "REGION_TOP")]
    pub top: RegionDim,
    #[serde(rename = "REGION_WIDTH", skip_serializing_if = "Option::is_none")]
    pub width: Option<RegionDim>,
    #[serde(rename = "REGION_HEIGHT", skip_serializing_if = "Option::is_none")]
    pub height: Option<RegionDim>,
    #[serde(rename = "REGION_Z_INDEX")]
    pub z_index: i64,
    #[serde(rename = "REGION_BGCOLOR", skip_serializing_if = "Option::is_none")]
    pub background_color: Option<String>,
}

impl Region {
    /// The implicit master-mode region: full canvas, origin zero
    ///
    /// Width/height are left unset; the renderer defaults them to the canvas.
    fn full_canvas() -> Self {
        Self {
            left: RegionDim::Pixels(0),
            top: RegionDim::Pixels(0),
            width: None,
            height: None,
            z_index: 0,
            background_color: None,
        }
    }
}

/// One prepared layout: root canvas dimensions plus its ordered regions
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlayerLayout {
    #[serde(rename = "ROOT_LAYOUT_WIDTH")]
    pub root_width: String,
    #[serde(rename = "ROOT_LAYOUT_HEIGHT")]
    pub root_height: String,
    pub regions: Vec<Region>,
}

/// Prepares display layouts from a player entity's stored configuration
///
/// Constructed per player, invoked once; holds no state beyond the entity
/// reference. Pure transformation, no side effects.
pub struct LayoutPreparer<'a> {
    player: &'a PlayerEntity,
}

impl<'a> LayoutPreparer<'a> {
    pub fn new(player: &'a PlayerEntity) -> Self {
        Self { player }
    }

    /// Produce the layout list for this player
    ///
    /// Always exactly one layout, always at least one region. Multizone region
    /// order follows the zone map's insertion order; no z-index sorting here.
    pub fn prepare(&self) -> Vec<PlayerLayout> {
        let regions = match self.player.playlist_mode {
            PlaylistMode::Master => vec![Region::full_canvas()],
            PlaylistMode::Multizone => self.multizone_regions(),
        };

        vec![PlayerLayout {
            root_width: self.player.properties.width.clone(),
            root_height: self.player.properties.height.clone(),
            regions,
        }]
    }

    fn multizone_regions(&self) -> Vec<Region> {
        // Multizone players without stored zones degrade to the master region;
        // an empty zone map counts as none.
        let Some(zone_set) = self.player.zones.as_ref().filter(|set| !set.zones.is_empty()) else {
            return vec![Region::full_canvas()];
        };

        let unit = zone_set.export_unit;
        zone_set
            .zones
            .values()
            .map(|zone| Region {
                left: RegionDim::from_zone_value(zone.zone_left, unit),
                top: RegionDim::from_zone_value(zone.zone_top, unit),
                width: Some(RegionDim::from_zone_value(zone.zone_width, unit)),
                height: Some(RegionDim::from_zone_value(zone.zone_height, unit)),
                z_index: zone.zone_z_index,
                background_color: Some(zone.zone_bgcolor.clone()),
            })
            .collect()
    }
}
