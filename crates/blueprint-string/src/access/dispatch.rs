//! Variant dispatch for documents.
//!
//! The only place that knows where each variant keeps its label,
//! description, icons and version. Everything else goes through
//! [`Variant`] / [`VariantMut`] or the accessor built on them.

use crate::model::{
    Blueprint, BlueprintBook, DeconstructionPlanner, Document, DocumentKind, Icon, UpgradePlanner,
};

/// Borrowed view of the populated variant.
#[derive(Debug, Clone, Copy)]
pub enum Variant<'a> {
    Blueprint(&'a Blueprint),
    BlueprintBook(&'a BlueprintBook),
    UpgradePlanner(&'a UpgradePlanner),
    DeconstructionPlanner(&'a DeconstructionPlanner),
}

/// Mutable view of the populated variant.
#[derive(Debug)]
pub enum VariantMut<'a> {
    Blueprint(&'a mut Blueprint),
    BlueprintBook(&'a mut BlueprintBook),
    UpgradePlanner(&'a mut UpgradePlanner),
    DeconstructionPlanner(&'a mut DeconstructionPlanner),
}

/// Resolves the variant of `doc`, checking kinds in [`DocumentKind::ALL`]
/// order. Returns `None` when no variant field is populated.
pub fn variant(doc: &Document) -> Option<Variant<'_>> {
    if let Some(bp) = &doc.blueprint {
        Some(Variant::Blueprint(bp))
    } else if let Some(book) = &doc.blueprint_book {
        Some(Variant::BlueprintBook(book))
    } else if let Some(planner) = &doc.upgrade_planner {
        Some(Variant::UpgradePlanner(planner))
    } else {
        doc.deconstruction_planner
            .as_ref()
            .map(Variant::DeconstructionPlanner)
    }
}

/// Mutable counterpart of [`variant`].
pub fn variant_mut(doc: &mut Document) -> Option<VariantMut<'_>> {
    if let Some(bp) = &mut doc.blueprint {
        Some(VariantMut::Blueprint(bp))
    } else if let Some(book) = &mut doc.blueprint_book {
        Some(VariantMut::BlueprintBook(book))
    } else if let Some(planner) = &mut doc.upgrade_planner {
        Some(VariantMut::UpgradePlanner(planner))
    } else {
        doc.deconstruction_planner
            .as_mut()
            .map(VariantMut::DeconstructionPlanner)
    }
}

/// Every kind whose field is populated, in [`DocumentKind::ALL`] order.
pub fn populated_kinds(doc: &Document) -> Vec<DocumentKind> {
    let present = [
        doc.blueprint.is_some(),
        doc.blueprint_book.is_some(),
        doc.upgrade_planner.is_some(),
        doc.deconstruction_planner.is_some(),
    ];
    DocumentKind::ALL
        .into_iter()
        .zip(present)
        .filter_map(|(kind, present)| present.then_some(kind))
        .collect()
}

impl<'a> Variant<'a> {
    pub fn kind(self) -> DocumentKind {
        match self {
            Variant::Blueprint(_) => DocumentKind::Blueprint,
            Variant::BlueprintBook(_) => DocumentKind::BlueprintBook,
            Variant::UpgradePlanner(_) => DocumentKind::UpgradePlanner,
            Variant::DeconstructionPlanner(_) => DocumentKind::DeconstructionPlanner,
        }
    }

    pub fn item(self) -> &'a str {
        match self {
            Variant::Blueprint(bp) => &bp.item,
            Variant::BlueprintBook(book) => &book.item,
            Variant::UpgradePlanner(planner) => &planner.item,
            Variant::DeconstructionPlanner(planner) => &planner.item,
        }
    }

    pub fn label(self) -> Option<&'a str> {
        match self {
            Variant::Blueprint(bp) => bp.label.as_deref(),
            Variant::BlueprintBook(book) => book.label.as_deref(),
            Variant::UpgradePlanner(planner) => planner.label.as_deref(),
            Variant::DeconstructionPlanner(planner) => planner.label.as_deref(),
        }
    }

    /// Top-level for blueprints and books, under `settings` for planners.
    pub fn description(self) -> Option<&'a str> {
        match self {
            Variant::Blueprint(bp) => bp.description.as_deref(),
            Variant::BlueprintBook(book) => book.description.as_deref(),
            Variant::UpgradePlanner(planner) => planner
                .settings
                .as_ref()
                .and_then(|s| s.description.as_deref()),
            Variant::DeconstructionPlanner(planner) => planner
                .settings
                .as_ref()
                .and_then(|s| s.description.as_deref()),
        }
    }

    pub fn icons(self) -> &'a [Icon] {
        match self {
            Variant::Blueprint(bp) => &bp.icons,
            Variant::BlueprintBook(book) => &book.icons,
            Variant::UpgradePlanner(planner) => &planner.icons,
            Variant::DeconstructionPlanner(planner) => &planner.icons,
        }
    }

    pub fn version(self) -> Option<u64> {
        match self {
            Variant::Blueprint(bp) => bp.version,
            Variant::BlueprintBook(book) => book.version,
            Variant::UpgradePlanner(planner) => planner.version,
            Variant::DeconstructionPlanner(planner) => planner.version,
        }
    }
}

impl VariantMut<'_> {
    pub fn set_label(&mut self, label: Option<String>) {
        match self {
            VariantMut::Blueprint(bp) => bp.label = label,
            VariantMut::BlueprintBook(book) => book.label = label,
            VariantMut::UpgradePlanner(planner) => planner.label = label,
            VariantMut::DeconstructionPlanner(planner) => planner.label = label,
        }
    }

    /// Writes the description, creating a planner's `settings` if missing.
    pub fn set_description(&mut self, description: Option<String>) {
        match self {
            VariantMut::Blueprint(bp) => bp.description = description,
            VariantMut::BlueprintBook(book) => book.description = description,
            VariantMut::UpgradePlanner(planner) => {
                planner.settings.get_or_insert_with(Default::default).description = description;
            }
            VariantMut::DeconstructionPlanner(planner) => {
                planner.settings.get_or_insert_with(Default::default).description = description;
            }
        }
    }
}

/// Applies a label to whichever variant is populated.
///
/// Returns `false` without touching `doc` when no variant is populated.
pub fn apply_label(doc: &mut Document, label: Option<String>) -> bool {
    match variant_mut(doc) {
        Some(mut v) => {
            v.set_label(label);
            true
        }
        None => false,
    }
}

/// Applies a description to whichever variant is populated.
///
/// Returns `false` without touching `doc` when no variant is populated.
pub fn apply_description(doc: &mut Document, description: Option<String>) -> bool {
    match variant_mut(doc) {
        Some(mut v) => {
            v.set_description(description);
            true
        }
        None => false,
    }
}

/// Maps an empty string to "no value" so cleared fields are omitted on
/// encode rather than written as `""`.
pub(crate) fn non_empty(value: impl Into<String>) -> Option<String> {
    let value = value.into();
    (!value.is_empty()).then_some(value)
}
