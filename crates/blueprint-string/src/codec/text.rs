//! The structured-text (JSON) form of a document.
//!
//! This is the payload inside a token, and also the form storage
//! collaborators hash and persist.

use crate::error::{DecodeError, EncodeError};
use crate::model::Document;

/// Parses the JSON form of a document. Surrounding whitespace is ignored.
///
/// No variant checks are made here; see [`DocumentAccessor`] and
/// [`validate_document`].
///
/// [`DocumentAccessor`]: crate::access::DocumentAccessor
/// [`validate_document`]: crate::validate::validate_document
pub fn parse_document_text(text: &str) -> Result<Document, DecodeError> {
    serde_json::from_str(text.trim()).map_err(|e| DecodeError::MalformedDocument(e.to_string()))
}

/// Parses the JSON form from raw bytes, checking UTF-8 first.
pub fn parse_document_bytes(bytes: &[u8]) -> Result<Document, DecodeError> {
    let text = std::str::from_utf8(bytes).map_err(|_| DecodeError::InvalidUtf8)?;
    parse_document_text(text)
}

/// Serializes a document to its compact JSON form.
pub fn document_to_text(document: &Document) -> Result<String, EncodeError> {
    serde_json::to_string(document).map_err(|e| EncodeError::Serialization(e.to_string()))
}
