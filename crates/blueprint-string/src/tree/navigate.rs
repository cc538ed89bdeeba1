//! Path extraction.

use crate::error::PathError;
use crate::model::Document;
use crate::tree::path::{child_path, resolve_step, tokens};

/// Finds the document at `path` below `root`.
///
/// The empty path returns `root`. On failure the error names the prefix
/// that resolved before the failing token.
pub fn extract<'a>(root: &'a Document, path: &str) -> Result<&'a Document, PathError> {
    if path.is_empty() {
        return Ok(root);
    }

    let mut current = root;
    let mut traversed = String::new();
    for token in tokens(path) {
        let (index, entry) = resolve_step(current, token, &traversed)?;
        current = &entry.document;
        traversed = child_path(&traversed, index + 1);
    }
    Ok(current)
}
