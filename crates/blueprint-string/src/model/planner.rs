//! Upgrade and deconstruction planners.
//!
//! Unlike blueprints and books, planners keep their description inside a
//! `settings` object next to their mappings or filters.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::model::{Icon, SignalId};

/// Item tag the game writes for upgrade planners.
pub const UPGRADE_PLANNER_ITEM: &str = "upgrade-planner";

/// Item tag the game writes for deconstruction planners.
pub const DECONSTRUCTION_PLANNER_ITEM: &str = "deconstruction-planner";

/// One from → to replacement rule of an upgrade planner.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UpgradeMapping {
    /// 0-based slot in the planner's mapping list.
    pub index: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub from: Option<SignalId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub to: Option<SignalId>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct UpgradeSettings {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub mappers: Vec<UpgradeMapping>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UpgradePlanner {
    pub item: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub icons: Vec<Icon>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub settings: Option<UpgradeSettings>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<u64>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Default for UpgradePlanner {
    fn default() -> Self {
        Self {
            item: UPGRADE_PLANNER_ITEM.to_string(),
            label: None,
            icons: Vec::new(),
            settings: None,
            version: None,
            extra: Map::new(),
        }
    }
}

/// Whether a filter list selects or excludes its entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum FilterMode {
    #[default]
    Whitelist,
    Blacklist,
}

impl TryFrom<u8> for FilterMode {
    type Error = String;

    fn try_from(v: u8) -> Result<Self, Self::Error> {
        match v {
            0 => Ok(FilterMode::Whitelist),
            1 => Ok(FilterMode::Blacklist),
            _ => Err(format!("invalid filter mode: {v}")),
        }
    }
}

impl From<FilterMode> for u8 {
    fn from(mode: FilterMode) -> Self {
        match mode {
            FilterMode::Whitelist => 0,
            FilterMode::Blacklist => 1,
        }
    }
}

/// How a deconstruction planner treats tiles in the selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum TileSelectionMode {
    #[default]
    Normal,
    Always,
    Never,
    Only,
}

impl TryFrom<u8> for TileSelectionMode {
    type Error = String;

    fn try_from(v: u8) -> Result<Self, Self::Error> {
        match v {
            0 => Ok(TileSelectionMode::Normal),
            1 => Ok(TileSelectionMode::Always),
            2 => Ok(TileSelectionMode::Never),
            3 => Ok(TileSelectionMode::Only),
            _ => Err(format!("invalid tile selection mode: {v}")),
        }
    }
}

impl From<TileSelectionMode> for u8 {
    fn from(mode: TileSelectionMode) -> Self {
        match mode {
            TileSelectionMode::Normal => 0,
            TileSelectionMode::Always => 1,
            TileSelectionMode::Never => 2,
            TileSelectionMode::Only => 3,
        }
    }
}

/// A named entry in a deconstruction filter list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NamedFilter {
    /// 1-based slot in the filter grid.
    pub index: u32,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quality: Option<String>,
    /// Newer fields such as `comparator`.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct DeconstructionSettings {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub entity_filters: Vec<NamedFilter>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tile_filters: Vec<NamedFilter>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub entity_filter_mode: Option<FilterMode>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tile_filter_mode: Option<FilterMode>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tile_selection_mode: Option<TileSelectionMode>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub trees_and_rocks_only: Option<bool>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeconstructionPlanner {
    pub item: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub icons: Vec<Icon>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub settings: Option<DeconstructionSettings>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<u64>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Default for DeconstructionPlanner {
    fn default() -> Self {
        Self {
            item: DECONSTRUCTION_PLANNER_ITEM.to_string(),
            label: None,
            icons: Vec::new(),
            settings: None,
            version: None,
            extra: Map::new(),
        }
    }
}
