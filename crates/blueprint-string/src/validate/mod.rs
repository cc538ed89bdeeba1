//! Semantic validation for documents.
//!
//! Decoding only checks that a token is well-formed; it accepts documents
//! the game would reject. [`validate_document`] is the opt-in check for the
//! shape rules the decoder leaves alone.

use std::collections::HashSet;

use crate::access::populated_kinds;
use crate::error::ValidationError;
use crate::limits::MAX_ICONS;
use crate::model::{BlueprintBook, Document, Icon};
use crate::tree::child_path;

/// Validates `doc` and every document below it.
///
/// Checks, per node:
/// - exactly one variant is populated
/// - at most four icons, each in slot 1..=4
/// - book entries have distinct `index` values
/// - `active_index` falls inside the child list
///
/// Stops at the first problem; the error names the node's path.
pub fn validate_document(doc: &Document) -> Result<(), ValidationError> {
    validate_node(doc, "")
}

fn validate_node(doc: &Document, path: &str) -> Result<(), ValidationError> {
    let kinds = populated_kinds(doc);
    match kinds.len() {
        0 => {
            return Err(ValidationError::NoVariant {
                path: path.to_string(),
            });
        }
        1 => {}
        _ => {
            return Err(ValidationError::MultipleVariants {
                path: path.to_string(),
                kinds: kinds.into_iter().map(|k| k.key()).collect(),
            });
        }
    }

    if let Some(bp) = &doc.blueprint {
        validate_icons(&bp.icons, path)?;
    }
    if let Some(planner) = &doc.upgrade_planner {
        validate_icons(&planner.icons, path)?;
    }
    if let Some(planner) = &doc.deconstruction_planner {
        validate_icons(&planner.icons, path)?;
    }
    if let Some(book) = &doc.blueprint_book {
        validate_icons(&book.icons, path)?;
        validate_book(book, path)?;
    }

    Ok(())
}

fn validate_icons(icons: &[Icon], path: &str) -> Result<(), ValidationError> {
    if icons.len() > MAX_ICONS {
        return Err(ValidationError::TooManyIcons {
            path: path.to_string(),
            count: icons.len(),
            max: MAX_ICONS,
        });
    }
    for icon in icons {
        if icon.index == 0 || icon.index as usize > MAX_ICONS {
            return Err(ValidationError::IconSlotOutOfRange {
                path: path.to_string(),
                index: icon.index,
                max: MAX_ICONS,
            });
        }
    }
    Ok(())
}

fn validate_book(book: &BlueprintBook, path: &str) -> Result<(), ValidationError> {
    let mut seen = HashSet::with_capacity(book.blueprints.len());
    for entry in &book.blueprints {
        if !seen.insert(entry.index) {
            return Err(ValidationError::DuplicateBookIndex {
                path: path.to_string(),
                index: entry.index,
            });
        }
    }

    // An empty book may still carry active_index 0.
    if let Some(active_index) = book.active_index {
        let len = book.blueprints.len();
        if len > 0 && active_index as usize >= len {
            return Err(ValidationError::ActiveIndexOutOfRange {
                path: path.to_string(),
                active_index,
                len,
            });
        }
    }

    for (i, entry) in book.blueprints.iter().enumerate() {
        validate_node(&entry.document, &child_path(path, i + 1))?;
    }
    Ok(())
}
