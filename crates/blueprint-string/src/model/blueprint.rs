//! Blueprint payloads: entities, tiles and snapping.

use serde::{Deserialize, Serialize, Serializer};
use serde_json::{Map, Value};

use crate::model::Icon;

/// Item tag the game writes for blueprints.
pub const BLUEPRINT_ITEM: &str = "blueprint";

/// A map position in tiles.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Position {
    #[serde(serialize_with = "serialize_coordinate")]
    pub x: f64,
    #[serde(serialize_with = "serialize_coordinate")]
    pub y: f64,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Position {
    pub fn new(x: f64, y: f64) -> Self {
        Self {
            x,
            y,
            extra: Map::new(),
        }
    }
}

/// Writes whole coordinates as integers, the way the game writes them.
fn serialize_coordinate<S: Serializer>(value: &f64, serializer: S) -> Result<S::Ok, S::Error> {
    const EXACT: f64 = 9_007_199_254_740_992.0; // 2^53
    if value.fract() == 0.0 && value.abs() < EXACT {
        serializer.serialize_i64(*value as i64)
    } else {
        serializer.serialize_f64(*value)
    }
}

/// A placed entity.
///
/// Only the fields every entity has are typed; control behaviour, wires,
/// inventories and the like are carried in `extra`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Entity {
    pub entity_number: u32,
    pub name: String,
    pub position: Position,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub direction: Option<u8>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quality: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Entity {
    /// Creates an entity facing the default direction.
    pub fn new(entity_number: u32, name: impl Into<String>, position: Position) -> Self {
        Self {
            entity_number,
            name: name.into(),
            position,
            direction: None,
            quality: None,
            extra: Map::new(),
        }
    }
}

/// A placed tile.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tile {
    pub name: String,
    pub position: Position,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Tile {
    pub fn new(name: impl Into<String>, position: Position) -> Self {
        Self {
            name: name.into(),
            position,
            extra: Map::new(),
        }
    }
}

/// A single blueprint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Blueprint {
    pub item: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label_color: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub icons: Vec<Icon>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub entities: Vec<Entity>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tiles: Vec<Tile>,
    /// Train schedules, kept in the game's own shape.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub schedules: Vec<Value>,
    /// Blueprint parameterisation entries.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub parameters: Vec<Value>,
    #[serde(rename = "snap-to-grid", default, skip_serializing_if = "Option::is_none")]
    pub snap_to_grid: Option<Position>,
    #[serde(rename = "absolute-snapping", default, skip_serializing_if = "Option::is_none")]
    pub absolute_snapping: Option<bool>,
    #[serde(
        rename = "position-relative-to-grid",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub position_relative_to_grid: Option<Position>,
    /// Packed game version, see [`GameVersion`](crate::model::GameVersion).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<u64>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Default for Blueprint {
    fn default() -> Self {
        Self {
            item: BLUEPRINT_ITEM.to_string(),
            label: None,
            label_color: None,
            description: None,
            icons: Vec::new(),
            entities: Vec::new(),
            tiles: Vec::new(),
            schedules: Vec::new(),
            parameters: Vec::new(),
            snap_to_grid: None,
            absolute_snapping: None,
            position_relative_to_grid: None,
            version: None,
            extra: Map::new(),
        }
    }
}
