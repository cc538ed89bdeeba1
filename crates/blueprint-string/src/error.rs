//! Error types for blueprint token decoding/encoding, document access,
//! path navigation and validation.

use thiserror::Error;

/// Error codes grouping the decode failures by pipeline stage.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    /// Missing or unsupported format marker.
    UnknownFormat,
    /// Token body is not valid base64.
    InvalidEncoding,
    /// Inflate failed or produced an oversized payload.
    Decompression,
    /// Payload is not valid UTF-8 or not a structured document.
    MalformedDocument,
}

impl ErrorCode {
    /// Returns a short stable identifier for the code.
    pub fn code(&self) -> &'static str {
        match self {
            ErrorCode::UnknownFormat => "unknown-format",
            ErrorCode::InvalidEncoding => "invalid-encoding",
            ErrorCode::Decompression => "decompression",
            ErrorCode::MalformedDocument => "malformed-document",
        }
    }
}

/// Error while turning a token (or structured text) into a [`Document`].
///
/// [`Document`]: crate::model::Document
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DecodeError {
    #[error("unknown blueprint format: {}", describe_marker(.found))]
    UnknownFormat { found: Option<char> },

    #[error("invalid base64 encoding: {0}")]
    InvalidEncoding(String),

    #[error("decompression failed: {0}")]
    DecompressionError(String),

    #[error("{field} length {len} exceeds maximum {max}")]
    LengthExceedsLimit {
        field: &'static str,
        len: usize,
        max: usize,
    },

    #[error("decompressed payload is not valid UTF-8")]
    InvalidUtf8,

    #[error("malformed document: {0}")]
    MalformedDocument(String),
}

impl DecodeError {
    /// Returns the stage that produced this error.
    pub fn code(&self) -> ErrorCode {
        match self {
            DecodeError::UnknownFormat { .. } => ErrorCode::UnknownFormat,
            DecodeError::InvalidEncoding(_) => ErrorCode::InvalidEncoding,
            DecodeError::DecompressionError(_) | DecodeError::LengthExceedsLimit { .. } => {
                ErrorCode::Decompression
            }
            DecodeError::InvalidUtf8 | DecodeError::MalformedDocument(_) => {
                ErrorCode::MalformedDocument
            }
        }
    }
}

fn describe_marker(found: &Option<char>) -> String {
    match found {
        Some(c) => format!("expected version marker '0', found {c:?}"),
        None => "empty token".to_string(),
    }
}

/// A compression parameter that violates the fixed wire constraints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ProfileError {
    #[error("raw deflate is not allowed: zlib headers are required")]
    RawDeflate,

    #[error("windowBits must be 15, found {found}")]
    WindowBits { found: u8 },

    #[error("strategy must be 0 (default), found {found}")]
    Strategy { found: u8 },

    #[error("level must be 8 or 9, found {found}")]
    Level { found: u32 },

    #[error("memLevel must be in 4..=9, found {found}")]
    MemLevel { found: u8 },
}

impl ProfileError {
    /// Name of the offending profile field.
    pub fn field(&self) -> &'static str {
        match self {
            ProfileError::RawDeflate => "raw",
            ProfileError::WindowBits { .. } => "windowBits",
            ProfileError::Strategy { .. } => "strategy",
            ProfileError::Level { .. } => "level",
            ProfileError::MemLevel { .. } => "memLevel",
        }
    }
}

/// Error while turning a [`Document`] into a token or structured text.
///
/// [`Document`]: crate::model::Document
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EncodeError {
    #[error("invalid compression profile: {0}")]
    InvalidProfile(#[from] ProfileError),

    #[error("zlib compression failed: {0}")]
    CompressionFailed(String),

    #[error("document serialization failed: {0}")]
    Serialization(String),
}

/// Error reading a document through the accessor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum AccessError {
    #[error("document has no recognized variant")]
    NoRecognizedVariant,
}

/// Error resolving a dot-separated child path.
///
/// `traversed` is the prefix that resolved successfully before the failure.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PathError {
    #[error("no blueprint book with children at {}", display_prefix(.traversed))]
    NoBookAtPath { traversed: String },

    #[error("invalid index token {token:?} at {}", display_prefix(.traversed))]
    InvalidIndexToken { token: String, traversed: String },

    #[error("index {token} out of bounds at {}: {}", display_prefix(.traversed), describe_bounds(.token, .len))]
    IndexOutOfBounds {
        /// The numeric token as written. It may be zero, negative or too
        /// large for any book.
        token: String,
        /// Number of children available at that level.
        len: usize,
        traversed: String,
    },
}

impl PathError {
    /// The successfully traversed prefix.
    pub fn traversed(&self) -> &str {
        match self {
            PathError::NoBookAtPath { traversed }
            | PathError::InvalidIndexToken { traversed, .. }
            | PathError::IndexOutOfBounds { traversed, .. } => traversed,
        }
    }

    /// Valid 1-based range for an out-of-bounds error, rendered as `1..=len`.
    pub fn valid_range(&self) -> Option<String> {
        match self {
            PathError::IndexOutOfBounds { token, len, .. } if is_positive(token) => {
                Some(format!("1..={len}"))
            }
            _ => None,
        }
    }
}

fn display_prefix(traversed: &str) -> String {
    if traversed.is_empty() {
        "root".to_string()
    } else {
        format!("path {traversed:?}")
    }
}

fn describe_bounds(token: &str, len: &usize) -> String {
    if is_positive(token) {
        format!("valid range is 1..={len}")
    } else {
        "index must be positive".to_string()
    }
}

fn is_positive(token: &str) -> bool {
    !token.starts_with('-') && token.bytes().any(|b| (b'1'..=b'9').contains(&b))
}

/// Error during semantic validation of a document tree.
///
/// `path` names the offending node using the same addressing as
/// [`extract`](crate::tree::extract); the root is `""`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("document at {} has no recognized variant", display_prefix(.path))]
    NoVariant { path: String },

    #[error("document at {} has multiple variants: {kinds:?}", display_prefix(.path))]
    MultipleVariants {
        path: String,
        kinds: Vec<&'static str>,
    },

    #[error("document at {} has {count} icons (max {max})", display_prefix(.path))]
    TooManyIcons {
        path: String,
        count: usize,
        max: usize,
    },

    #[error("icon slot {index} at {} outside 1..={max}", display_prefix(.path))]
    IconSlotOutOfRange {
        path: String,
        index: u32,
        max: usize,
    },

    #[error("book at {} has duplicate entry index {index}", display_prefix(.path))]
    DuplicateBookIndex { path: String, index: u32 },

    #[error("book at {} has active_index {active_index} but {len} children", display_prefix(.path))]
    ActiveIndexOutOfRange {
        path: String,
        active_index: u32,
        len: usize,
    },
}

/// Error surfaced by [`Session`](crate::session::Session) operations.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SessionError {
    #[error(transparent)]
    Decode(#[from] DecodeError),

    #[error(transparent)]
    Encode(#[from] EncodeError),

    #[error(transparent)]
    Path(#[from] PathError),

    #[error("path {path:?} no longer resolves in the current document")]
    StalePath { path: String },
}
