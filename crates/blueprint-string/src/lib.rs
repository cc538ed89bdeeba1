//! Blueprint strings: the copy/paste token format for game blueprints.
//!
//! This crate decodes and encodes blueprint tokens, models the documents they
//! carry, and edits documents nested inside blueprint books by path.
//!
//! # Overview
//!
//! A token is the character `'0'` followed by base64 of a zlib stream whose
//! payload is JSON. The JSON holds exactly one of four document kinds:
//! - **Blueprint**: entities, tiles and snapping
//! - **Blueprint book**: an ordered, arbitrarily nested list of documents
//! - **Upgrade planner** and **deconstruction planner**
//!
//! # Quick Start
//!
//! ```rust
//! use blueprint_string::{decode_token, encode_token, update_at_path, extract};
//! use blueprint_string::{label_description_updater, BlueprintBuilder, BookBuilder, DocumentAccessor};
//!
//! let book = BookBuilder::new()
//!     .label("Starter")
//!     .blueprint(BlueprintBuilder::new().label("Smelting").build())
//!     .blueprint(BlueprintBuilder::new().label("Science").build())
//!     .build();
//!
//! let token = encode_token(&book).unwrap();
//! assert!(token.starts_with('0'));
//! assert_eq!(decode_token(&token).unwrap(), book);
//!
//! // Paths are 1-based positions among a book's children.
//! let edited = update_at_path(&book, "2", label_description_updater("Red science", "")).unwrap();
//! let science = DocumentAccessor::new(extract(&edited, "2").unwrap());
//! assert_eq!(science.label(), Ok(Some("Red science")));
//! ```
//!
//! # Modules
//!
//! - [`codec`]: token, JSON and zlib layers plus [`CompressionProfile`]
//! - [`model`]: document types, builders and packed versions
//! - [`access`]: variant-independent label/description/icon access
//! - [`tree`]: path navigation, copy-on-write editing, tree views
//! - [`validate`]: opt-in semantic checks
//! - [`session`]: a current root with swap-on-edit semantics
//! - [`error`]: error types
//! - [`limits`]: format constants and decode limits
//!
//! # Security
//!
//! Tokens are untrusted input. Inflated payloads are capped at
//! [`limits::MAX_DOCUMENT_SIZE`] and every failure is reported as an error
//! rather than a panic.

pub mod access;
pub mod codec;
pub mod error;
pub mod limits;
pub mod model;
pub mod session;
pub mod tree;
pub mod validate;

// Re-export commonly used types at crate root
pub use access::{populated_kinds, variant, DocumentAccessor, Variant};
pub use codec::{
    decode_token, document_to_text, encode_token, encode_token_with_profile, parse_document_text,
    CompressionProfile,
};
pub use error::{
    AccessError, DecodeError, EncodeError, PathError, ProfileError, SessionError, ValidationError,
};
pub use model::{
    parse_version, Blueprint, BlueprintBook, BlueprintBuilder, BookBuilder, BookEntry,
    DeconstructionPlanner, Document, DocumentKind, Entity, GameVersion, Icon, Position, SignalId,
    Tile, UpgradePlanner,
};
pub use session::Session;
pub use tree::{
    build_node, build_tree, extract, is_child_active, label_description_updater,
    try_update_at_path, update_at_path, Path, TreeNode,
};
pub use validate::validate_document;

/// Crate version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
