//! Signal references and icon slots.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Reference to an item, fluid, virtual signal, entity or similar prototype.
///
/// The game omits `type` for items, so `kind` is optional.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignalId {
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    pub name: String,
    /// Quality tier name (e.g. `"rare"`); absent means normal quality.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quality: Option<String>,
    /// Fields such as a filter's `comparator`.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl SignalId {
    /// Creates a signal of the given kind.
    pub fn new(kind: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            kind: Some(kind.into()),
            name: name.into(),
            quality: None,
            extra: Map::new(),
        }
    }

    /// Creates an item signal (the kind the game leaves implicit).
    pub fn item(name: impl Into<String>) -> Self {
        Self::new("item", name)
    }

    /// Creates a virtual signal.
    pub fn virtual_signal(name: impl Into<String>) -> Self {
        Self::new("virtual", name)
    }

    /// Returns a copy with the given quality tier.
    pub fn with_quality(mut self, quality: impl Into<String>) -> Self {
        self.quality = Some(quality.into());
        self
    }
}

/// An icon shown on a blueprint, book or planner.
///
/// `index` is the 1-based slot. Values outside 1..=4 are kept as decoded;
/// see [`validate_document`](crate::validate::validate_document).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Icon {
    pub index: u32,
    pub signal: SignalId,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Icon {
    /// Creates an icon in the given slot.
    pub fn new(index: u32, signal: SignalId) -> Self {
        Self {
            index,
            signal,
            extra: Map::new(),
        }
    }
}
