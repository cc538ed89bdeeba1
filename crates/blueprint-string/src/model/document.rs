//! The top-level document and blueprint books.
//!
//! A document holds exactly one of four variants. The wire form is a JSON
//! object keyed by the variant name:
//!
//! ```text
//! {"blueprint": {...}}
//! {"blueprint_book": {"blueprints": [{"index": 0, "blueprint": {...}}, ...]}}
//! {"upgrade_planner": {...}}
//! {"deconstruction_planner": {...}}
//! ```
//!
//! The variants are stored as optional fields rather than an enum so that a
//! decoded object with no known variant is still representable; the
//! accessor reports it as [`AccessError::NoRecognizedVariant`].
//!
//! [`AccessError::NoRecognizedVariant`]: crate::error::AccessError::NoRecognizedVariant

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::model::{Blueprint, DeconstructionPlanner, Icon, UpgradePlanner};

/// Item tag the game writes for blueprint books.
pub const BLUEPRINT_BOOK_ITEM: &str = "blueprint-book";

/// The four document kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DocumentKind {
    Blueprint,
    BlueprintBook,
    UpgradePlanner,
    DeconstructionPlanner,
}

impl DocumentKind {
    /// All kinds, in dispatch priority order.
    pub const ALL: [DocumentKind; 4] = [
        DocumentKind::Blueprint,
        DocumentKind::BlueprintBook,
        DocumentKind::UpgradePlanner,
        DocumentKind::DeconstructionPlanner,
    ];

    /// The JSON key holding this variant.
    pub fn key(self) -> &'static str {
        match self {
            DocumentKind::Blueprint => "blueprint",
            DocumentKind::BlueprintBook => "blueprint_book",
            DocumentKind::UpgradePlanner => "upgrade_planner",
            DocumentKind::DeconstructionPlanner => "deconstruction_planner",
        }
    }

    /// Returns true for the two planner kinds, which nest their description
    /// under `settings`.
    pub fn is_planner(self) -> bool {
        matches!(
            self,
            DocumentKind::UpgradePlanner | DocumentKind::DeconstructionPlanner
        )
    }
}

impl fmt::Display for DocumentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// A decoded blueprint string payload.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Document {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub blueprint: Option<Blueprint>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub blueprint_book: Option<BlueprintBook>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub upgrade_planner: Option<UpgradePlanner>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deconstruction_planner: Option<DeconstructionPlanner>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Document {
    /// Wraps a blueprint.
    pub fn from_blueprint(blueprint: Blueprint) -> Self {
        Self {
            blueprint: Some(blueprint),
            ..Self::default()
        }
    }

    /// Wraps a blueprint book.
    pub fn from_book(book: BlueprintBook) -> Self {
        Self {
            blueprint_book: Some(book),
            ..Self::default()
        }
    }

    /// Wraps an upgrade planner.
    pub fn from_upgrade_planner(planner: UpgradePlanner) -> Self {
        Self {
            upgrade_planner: Some(planner),
            ..Self::default()
        }
    }

    /// Wraps a deconstruction planner.
    pub fn from_deconstruction_planner(planner: DeconstructionPlanner) -> Self {
        Self {
            deconstruction_planner: Some(planner),
            ..Self::default()
        }
    }

    /// Children of this document if it is a book, empty otherwise.
    pub fn children(&self) -> &[BookEntry] {
        self.blueprint_book
            .as_ref()
            .map_or(&[], |book| book.blueprints.as_slice())
    }
}

/// A book: an ordered collection of child documents.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BlueprintBook {
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
    pub blueprints: Vec<BookEntry>,
    /// 0-based position of the selected child in `blueprints`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub active_index: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<u64>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Default for BlueprintBook {
    fn default() -> Self {
        Self {
            item: BLUEPRINT_BOOK_ITEM.to_string(),
            label: None,
            label_color: None,
            description: None,
            icons: Vec::new(),
            blueprints: Vec::new(),
            active_index: None,
            version: None,
            extra: Map::new(),
        }
    }
}

/// A slot in a book.
///
/// `index` is the game's own 0-based slot number; path addressing uses the
/// entry's position in the list instead.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BookEntry {
    pub index: u32,
    #[serde(flatten)]
    pub document: Document,
}

impl BookEntry {
    pub fn new(index: u32, document: Document) -> Self {
        Self { index, document }
    }
}
