//! Copy-on-write editing at a path.
//!
//! Edits never touch the input tree. The result is a new root in which every
//! book on the path to the target is rebuilt with a new child list; siblings
//! off the path are cloned as-is.

use tracing::debug;

use crate::access::dispatch::non_empty;
use crate::access::{apply_description, apply_label};
use crate::error::PathError;
use crate::model::{BlueprintBook, BookEntry, Document};
use crate::tree::path::{child_path, resolve_step, tokens};

/// Replaces the document at `path` with `updater`'s result, returning the
/// new root.
///
/// The empty path applies `updater` to `root` itself. Returns `None` if the
/// path does not resolve; `root` is unchanged either way.
pub fn update_at_path<F>(root: &Document, path: &str, updater: F) -> Option<Document>
where
    F: FnOnce(&Document) -> Document,
{
    match try_update_at_path(root, path, updater) {
        Ok(document) => Some(document),
        Err(err) => {
            debug!(path, error = %err, "path edit rejected");
            None
        }
    }
}

/// Like [`update_at_path`], but reports why the path did not resolve.
pub fn try_update_at_path<F>(root: &Document, path: &str, updater: F) -> Result<Document, PathError>
where
    F: FnOnce(&Document) -> Document,
{
    if path.is_empty() {
        return Ok(updater(root));
    }
    let tokens: Vec<&str> = tokens(path).collect();
    rebuild(root, &tokens, String::new(), updater)
}

fn rebuild<F>(
    current: &Document,
    tokens: &[&str],
    traversed: String,
    updater: F,
) -> Result<Document, PathError>
where
    F: FnOnce(&Document) -> Document,
{
    let Some((token, rest)) = tokens.split_first() else {
        return Ok(updater(current));
    };

    let (index, entry) = resolve_step(current, token, &traversed)?;
    let replacement = rebuild(
        &entry.document,
        rest,
        child_path(&traversed, index + 1),
        updater,
    )?;

    Ok(with_child_replaced(current, index, replacement))
}

/// Copies `doc`, swapping the book child at 0-based `index` for
/// `replacement`. The entry keeps its own `index` field.
fn with_child_replaced(doc: &Document, index: usize, replacement: Document) -> Document {
    let mut replacement = Some(replacement);
    let book = doc.blueprint_book.as_ref().map(|book| {
        let blueprints = book
            .blueprints
            .iter()
            .enumerate()
            .map(|(i, entry)| match replacement.take_if(|_| i == index) {
                Some(document) => BookEntry::new(entry.index, document),
                None => entry.clone(),
            })
            .collect();

        BlueprintBook {
            item: book.item.clone(),
            label: book.label.clone(),
            label_color: book.label_color.clone(),
            description: book.description.clone(),
            icons: book.icons.clone(),
            blueprints,
            active_index: book.active_index,
            version: book.version,
            extra: book.extra.clone(),
        }
    });

    Document {
        blueprint: doc.blueprint.clone(),
        blueprint_book: book,
        upgrade_planner: doc.upgrade_planner.clone(),
        deconstruction_planner: doc.deconstruction_planner.clone(),
        extra: doc.extra.clone(),
    }
}

/// An updater that sets label and description, using the same variant
/// rules as [`DocumentAccessor`](crate::access::DocumentAccessor).
///
/// Empty strings clear the field.
pub fn label_description_updater(
    label: impl Into<String>,
    description: impl Into<String>,
) -> impl Fn(&Document) -> Document {
    let label = non_empty(label);
    let description = non_empty(description);
    move |doc: &Document| {
        let mut updated = doc.clone();
        apply_label(&mut updated, label.clone());
        apply_description(&mut updated, description.clone());
        updated
    }
}
