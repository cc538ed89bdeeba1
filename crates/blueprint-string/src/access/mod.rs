//! Uniform read/write access to a document's display fields.
//!
//! Label, description, icons and version live in different places depending
//! on the variant (planners keep their description under `settings`).
//! [`DocumentAccessor`] hides that behind one API.

pub mod dispatch;

pub use dispatch::{apply_description, apply_label, populated_kinds, variant, variant_mut, Variant, VariantMut};

use crate::codec::document_to_text;
use crate::error::{AccessError, EncodeError};
use crate::model::{Document, DocumentKind, Icon};

use self::dispatch::non_empty;

/// A working copy of a document with variant-independent getters/setters.
///
/// The accessor clones the document it is built from; setters only change
/// that copy.
#[derive(Debug, Clone, PartialEq)]
pub struct DocumentAccessor {
    document: Document,
}

impl DocumentAccessor {
    /// Creates an accessor over a private copy of `document`.
    pub fn new(document: &Document) -> Self {
        Self {
            document: document.clone(),
        }
    }

    /// Borrows the working copy.
    pub fn document(&self) -> &Document {
        &self.document
    }

    /// Consumes the accessor, returning the working copy.
    pub fn into_document(self) -> Document {
        self.document
    }

    fn resolve(&self) -> Result<Variant<'_>, AccessError> {
        variant(&self.document).ok_or(AccessError::NoRecognizedVariant)
    }

    pub fn kind(&self) -> Result<DocumentKind, AccessError> {
        self.resolve().map(Variant::kind)
    }

    pub fn label(&self) -> Result<Option<&str>, AccessError> {
        self.resolve().map(Variant::label)
    }

    pub fn description(&self) -> Result<Option<&str>, AccessError> {
        self.resolve().map(Variant::description)
    }

    /// Icons of the document; empty when it has none.
    pub fn icons(&self) -> Result<&[Icon], AccessError> {
        self.resolve().map(Variant::icons)
    }

    /// Packed game version, if the document carries one.
    pub fn version(&self) -> Result<Option<u64>, AccessError> {
        self.resolve().map(Variant::version)
    }

    /// Sets the label. An empty string clears it.
    ///
    /// Returns `false` (and changes nothing) if no variant is populated.
    pub fn set_label(&mut self, label: impl Into<String>) -> bool {
        apply_label(&mut self.document, non_empty(label))
    }

    /// Sets the description, creating a planner's `settings` object if
    /// needed. An empty string clears it.
    ///
    /// Returns `false` (and changes nothing) if no variant is populated.
    pub fn set_description(&mut self, description: impl Into<String>) -> bool {
        apply_description(&mut self.document, non_empty(description))
    }

    /// Serializes the working copy to the structured-text form.
    pub fn to_text(&self) -> Result<String, EncodeError> {
        document_to_text(&self.document)
    }
}

impl From<Document> for DocumentAccessor {
    fn from(document: Document) -> Self {
        Self { document }
    }
}
