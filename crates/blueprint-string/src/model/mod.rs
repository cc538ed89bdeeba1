//! Data model for blueprint strings.
//!
//! This module contains the document types carried by a token:
//! - Documents and blueprint books (the recursive part)
//! - Blueprints (entities, tiles, snapping)
//! - Upgrade and deconstruction planners
//! - Signals and icons
//! - Packed game versions
//! - Builders (ergonomic construction)

pub mod blueprint;
pub mod builder;
pub mod document;
pub mod planner;
pub mod signal;
pub mod version;

pub use blueprint::{Blueprint, Entity, Position, Tile, BLUEPRINT_ITEM};
pub use builder::{BlueprintBuilder, BookBuilder};
pub use document::{BlueprintBook, BookEntry, Document, DocumentKind, BLUEPRINT_BOOK_ITEM};
pub use planner::{
    DeconstructionPlanner, DeconstructionSettings, FilterMode, NamedFilter, TileSelectionMode,
    UpgradeMapping, UpgradePlanner, UpgradeSettings, DECONSTRUCTION_PLANNER_ITEM,
    UPGRADE_PLANNER_ITEM,
};
pub use signal::{Icon, SignalId};
pub use version::{parse_version, GameVersion};
