//! Builder API for ergonomic document construction.
//!
//! # Example
//!
//! ```rust
//! use blueprint_string::model::builder::{BlueprintBuilder, BookBuilder};
//! use blueprint_string::model::{Position, SignalId};
//!
//! let doc = BookBuilder::new()
//!     .label("Main bus")
//!     .icon(1, SignalId::item("transport-belt"))
//!     .blueprint(
//!         BlueprintBuilder::new()
//!             .label("Belts")
//!             .entity("transport-belt", Position::new(0.5, 0.5))
//!             .build(),
//!     )
//!     .active_index(0)
//!     .build();
//!
//! assert_eq!(doc.children().len(), 1);
//! ```

use crate::model::{
    Blueprint, BlueprintBook, BookEntry, Document, Entity, Icon, Position, SignalId, Tile,
};

/// Builder for a blueprint document.
#[derive(Debug, Clone, Default)]
pub struct BlueprintBuilder {
    blueprint: Blueprint,
}

impl BlueprintBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the label.
    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.blueprint.label = Some(label.into());
        self
    }

    /// Sets the description.
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.blueprint.description = Some(description.into());
        self
    }

    /// Adds an icon in the given 1-based slot.
    pub fn icon(mut self, slot: u32, signal: SignalId) -> Self {
        self.blueprint.icons.push(Icon::new(slot, signal));
        self
    }

    /// Adds an entity, numbering it after the entities already present.
    pub fn entity(mut self, name: impl Into<String>, position: Position) -> Self {
        let number = self.blueprint.entities.len() as u32 + 1;
        self.blueprint
            .entities
            .push(Entity::new(number, name, position));
        self
    }

    /// Adds a tile.
    pub fn tile(mut self, name: impl Into<String>, position: Position) -> Self {
        self.blueprint.tiles.push(Tile::new(name, position));
        self
    }

    /// Sets the packed game version.
    pub fn version(mut self, version: u64) -> Self {
        self.blueprint.version = Some(version);
        self
    }

    /// Builds the blueprint without wrapping it in a document.
    pub fn build_blueprint(self) -> Blueprint {
        self.blueprint
    }

    /// Builds the document.
    pub fn build(self) -> Document {
        Document::from_blueprint(self.blueprint)
    }
}

/// Builder for a blueprint book document.
///
/// Children are given consecutive 0-based `index` values in the order they
/// are added.
#[derive(Debug, Clone, Default)]
pub struct BookBuilder {
    book: BlueprintBook,
}

impl BookBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the label.
    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.book.label = Some(label.into());
        self
    }

    /// Sets the description.
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.book.description = Some(description.into());
        self
    }

    /// Adds an icon in the given 1-based slot.
    pub fn icon(mut self, slot: u32, signal: SignalId) -> Self {
        self.book.icons.push(Icon::new(slot, signal));
        self
    }

    /// Appends a child document of any kind.
    pub fn blueprint(mut self, document: Document) -> Self {
        let index = self.book.blueprints.len() as u32;
        self.book.blueprints.push(BookEntry::new(index, document));
        self
    }

    /// Appends several child documents.
    pub fn blueprints(mut self, documents: impl IntoIterator<Item = Document>) -> Self {
        for document in documents {
            self = self.blueprint(document);
        }
        self
    }

    /// Sets the 0-based active child.
    pub fn active_index(mut self, index: u32) -> Self {
        self.book.active_index = Some(index);
        self
    }

    /// Sets the packed game version.
    pub fn version(mut self, version: u64) -> Self {
        self.book.version = Some(version);
        self
    }

    /// Builds the document.
    pub fn build(self) -> Document {
        Document::from_book(self.book)
    }
}
