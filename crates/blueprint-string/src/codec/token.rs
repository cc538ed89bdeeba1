//! Blueprint token encoding/decoding.
//!
//! Wire format: the version marker `'0'` followed by standard padded base64
//! of a zlib stream whose payload is the document's JSON text.

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use tracing::debug;

use crate::codec::text::{document_to_text, parse_document_bytes};
use crate::codec::zlib::{deflate, inflate};
use crate::codec::CompressionProfile;
use crate::error::{DecodeError, EncodeError};
use crate::limits::FORMAT_MARKER;
use crate::model::Document;

// =============================================================================
// DECODING
// =============================================================================

/// Decodes a blueprint token into a document.
///
/// Trailing whitespace (e.g. the newline a paste picks up) is ignored. The
/// marker must be the very first character, so leading whitespace is an
/// unknown format. Fails with:
/// - [`DecodeError::UnknownFormat`] if the token is empty or does not start
///   with `'0'`
/// - [`DecodeError::InvalidEncoding`] if the body is not base64
/// - [`DecodeError::DecompressionError`] if the zlib stream is corrupt
/// - [`DecodeError::MalformedDocument`] if the payload is not a document
pub fn decode_token(token: &str) -> Result<Document, DecodeError> {
    let mut chars = token.chars();
    match chars.next() {
        Some(FORMAT_MARKER) => {}
        found => return Err(DecodeError::UnknownFormat { found }),
    }
    let body = chars.as_str().trim_end();

    let compressed = STANDARD
        .decode(body)
        .map_err(|e| DecodeError::InvalidEncoding(e.to_string()))?;
    let payload = inflate(&compressed)?;

    debug!(
        token_len = body.len() + 1,
        compressed_len = compressed.len(),
        payload_len = payload.len(),
        "decoded blueprint token"
    );

    parse_document_bytes(&payload)
}

// =============================================================================
// ENCODING
// =============================================================================

/// Encodes a document with the default [`CompressionProfile`].
pub fn encode_token(document: &Document) -> Result<String, EncodeError> {
    encode_token_with_profile(document, &CompressionProfile::default())
}

/// Encodes a document with the given profile.
///
/// The profile is validated before anything is compressed. The same
/// document and profile always produce the same token.
pub fn encode_token_with_profile(
    document: &Document,
    profile: &CompressionProfile,
) -> Result<String, EncodeError> {
    profile.validate()?;

    let text = document_to_text(document)?;
    let compressed = deflate(text.trim().as_bytes(), profile)?;

    let mut token = String::with_capacity(1 + compressed.len().div_ceil(3) * 4);
    token.push(FORMAT_MARKER);
    STANDARD.encode_string(&compressed, &mut token);

    debug!(
        payload_len = text.len(),
        compressed_len = compressed.len(),
        token_len = token.len(),
        level = profile.level,
        "encoded blueprint token"
    );

    Ok(token)
}
