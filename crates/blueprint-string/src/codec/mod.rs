//! Blueprint token encoding/decoding.
//!
//! A token is `'0'` + base64(zlib(JSON)). The layers are exposed separately
//! for tooling: [`zlib`] for the compressed stream, [`text`] for the JSON
//! form, and [`token`] for the complete pipeline.

pub mod profile;
pub mod text;
pub mod token;
pub mod zlib;

pub use profile::CompressionProfile;
pub use text::{document_to_text, parse_document_bytes, parse_document_text};
pub use token::{decode_token, encode_token, encode_token_with_profile};
pub use zlib::{deflate, inflate};
