//! Property-based invariant tests for the codec and tree layers.
//!
//! Verifies:
//! 1. Text roundtrip: parse_document_text(document_to_text(d)) == d
//! 2. Token roundtrip: decode_token(encode_token(d)) == d, marker first
//! 3. Token determinism: the same document and profile give the same token
//! 4. Tree/extract consistency: every node path extracts that node's document
//! 5. Edit immutability: update_at_path never changes its input
//! 6. Edit targeting: only the target and its ancestors change
//! 7. Edit/extract agreement: an edit succeeds exactly when extract does
//! 8. Parsed paths: a path that parses resolves the same as its normalized form
//! 9. Version rendering: never ends in ".0" (except "0"), and unpacks losslessly
//!
//! Generated documents fill every modelled field and carry unknown fields at
//! every level, so the roundtrips also check that nothing is dropped.

use blueprint_string::codec::CompressionProfile;
use blueprint_string::model::{
    DeconstructionPlanner, DeconstructionSettings, FilterMode, NamedFilter, TileSelectionMode,
    UpgradeMapping, UpgradePlanner, UpgradeSettings,
};
use blueprint_string::{
    build_tree, decode_token, document_to_text, encode_token, encode_token_with_profile, extract,
    label_description_updater, parse_document_text, parse_version, update_at_path, Blueprint,
    BlueprintBook, BookEntry, Document, DocumentAccessor, Entity, GameVersion, Icon, Position,
    Path, SignalId, Tile, TreeNode,
};
use proptest::prelude::*;
use proptest::sample::Index;
use serde_json::{json, Map, Value};

// ── Strategy helpers ──────────────────────────────────────────────────

fn arb_label() -> impl Strategy<Value = Option<String>> {
    proptest::option::of("[A-Za-z0-9 ]{0,12}")
}

fn arb_text() -> impl Strategy<Value = Option<String>> {
    proptest::option::of("[A-Za-z0-9 .,:\\n\"äß]{0,24}")
}

fn arb_scalar() -> impl Strategy<Value = Value> {
    prop_oneof![
        any::<i64>().prop_map(Value::from),
        "[a-z =]{0,8}".prop_map(Value::from),
        any::<bool>().prop_map(Value::from),
        prop::collection::vec(0u8..10, 0..3).prop_map(Value::from),
    ]
}

/// Unknown fields. The `x_` prefix keeps them clear of every named field.
fn arb_extra() -> impl Strategy<Value = Map<String, Value>> {
    prop::collection::btree_map("x_[a-z]{1,6}", arb_scalar(), 0..3)
        .prop_map(|fields| fields.into_iter().collect())
}

fn arb_version() -> impl Strategy<Value = Option<u64>> {
    proptest::option::of(any::<u64>())
}

fn arb_position() -> impl Strategy<Value = Position> {
    // Half-tile positions survive the JSON float round-trip exactly.
    (-40i32..40, -40i32..40, arb_extra()).prop_map(|(x, y, extra)| Position {
        x: x as f64 / 2.0,
        y: y as f64 / 2.0,
        extra,
    })
}

fn arb_quality() -> impl Strategy<Value = Option<String>> {
    proptest::option::of(
        prop::sample::select(vec!["normal", "uncommon", "rare", "legendary"])
            .prop_map(str::to_string),
    )
}

fn arb_name() -> impl Strategy<Value = String> {
    prop::sample::select(vec![
        "inserter",
        "transport-belt",
        "assembling-machine-2",
        "stone-furnace",
        "signal-A",
    ])
    .prop_map(str::to_string)
}

fn arb_signal() -> impl Strategy<Value = SignalId> {
    (
        proptest::option::of(
            prop::sample::select(vec!["item", "entity", "virtual", "fluid"])
                .prop_map(str::to_string),
        ),
        arb_name(),
        arb_quality(),
        arb_extra(),
    )
        .prop_map(|(kind, name, quality, extra)| SignalId {
            kind,
            name,
            quality,
            extra,
        })
}

fn arb_icons() -> impl Strategy<Value = Vec<Icon>> {
    prop::collection::vec(
        (1u32..=4, arb_signal(), arb_extra()).prop_map(|(index, signal, extra)| Icon {
            index,
            signal,
            extra,
        }),
        0..3,
    )
}

fn arb_label_color() -> impl Strategy<Value = Option<Value>> {
    proptest::option::of((0u8..=4, 0u8..=4, 0u8..=4).prop_map(|(r, g, b)| {
        json!({"r": r as f64 / 4.0, "g": g as f64 / 4.0, "b": b as f64 / 4.0})
    }))
}

fn arb_entity() -> impl Strategy<Value = Entity> {
    (
        arb_name(),
        arb_position(),
        proptest::option::of(0u8..16),
        arb_quality(),
        arb_extra(),
    )
        .prop_map(|(name, position, direction, quality, extra)| Entity {
            direction,
            quality,
            extra,
            ..Entity::new(0, name, position)
        })
}

fn arb_tile() -> impl Strategy<Value = Tile> {
    (arb_name(), arb_position(), arb_extra()).prop_map(|(name, position, extra)| Tile {
        extra,
        ..Tile::new(name, position)
    })
}

fn arb_blueprint() -> impl Strategy<Value = Blueprint> {
    (
        (arb_label(), arb_text(), arb_label_color(), arb_icons()),
        (
            prop::collection::vec(arb_entity(), 0..4),
            prop::collection::vec(arb_tile(), 0..3),
        ),
        (
            proptest::option::of(arb_position()),
            proptest::option::of(any::<bool>()),
            arb_version(),
            arb_extra(),
        ),
    )
        .prop_map(
            |(
                (label, description, label_color, icons),
                (entities, tiles),
                (snap_to_grid, absolute_snapping, version, extra),
            )| {
                let entities = entities
                    .into_iter()
                    .zip(1u32..)
                    .map(|(entity, number)| Entity {
                        entity_number: number,
                        ..entity
                    })
                    .collect();
                Blueprint {
                    label,
                    label_color,
                    description,
                    icons,
                    entities,
                    tiles,
                    snap_to_grid,
                    absolute_snapping,
                    version,
                    extra,
                    ..Blueprint::default()
                }
            },
        )
}

fn arb_upgrade_planner() -> impl Strategy<Value = UpgradePlanner> {
    let mapping = (
        0u32..24,
        proptest::option::of(arb_signal()),
        proptest::option::of(arb_signal()),
        arb_extra(),
    )
        .prop_map(|(index, from, to, extra)| UpgradeMapping {
            index,
            from,
            to,
            extra,
        });
    let settings = (arb_text(), prop::collection::vec(mapping, 0..3), arb_extra()).prop_map(
        |(description, mappers, extra)| UpgradeSettings {
            description,
            mappers,
            extra,
        },
    );
    (
        arb_label(),
        arb_icons(),
        proptest::option::of(settings),
        arb_version(),
        arb_extra(),
    )
        .prop_map(|(label, icons, settings, version, extra)| UpgradePlanner {
            label,
            icons,
            settings,
            version,
            extra,
            ..UpgradePlanner::default()
        })
}

fn arb_deconstruction_planner() -> impl Strategy<Value = DeconstructionPlanner> {
    let filter = || {
        (1u32..=30, arb_name(), arb_quality(), arb_extra()).prop_map(
            |(index, name, quality, extra)| NamedFilter {
                index,
                name,
                quality,
                extra,
            },
        )
    };
    let mode = || {
        proptest::option::of(prop_oneof![
            Just(FilterMode::Whitelist),
            Just(FilterMode::Blacklist)
        ])
    };
    let selection = proptest::option::of(prop_oneof![
        Just(TileSelectionMode::Normal),
        Just(TileSelectionMode::Always),
        Just(TileSelectionMode::Never),
        Just(TileSelectionMode::Only),
    ]);
    let settings = (
        arb_text(),
        prop::collection::vec(filter(), 0..3),
        prop::collection::vec(filter(), 0..2),
        mode(),
        mode(),
        selection,
        proptest::option::of(any::<bool>()),
        arb_extra(),
    )
        .prop_map(
            |(
                description,
                entity_filters,
                tile_filters,
                entity_filter_mode,
                tile_filter_mode,
                tile_selection_mode,
                trees_and_rocks_only,
                extra,
            )| DeconstructionSettings {
                description,
                entity_filters,
                tile_filters,
                entity_filter_mode,
                tile_filter_mode,
                tile_selection_mode,
                trees_and_rocks_only,
                extra,
            },
        );
    (
        arb_label(),
        arb_icons(),
        proptest::option::of(settings),
        arb_version(),
        arb_extra(),
    )
        .prop_map(|(label, icons, settings, version, extra)| DeconstructionPlanner {
            label,
            icons,
            settings,
            version,
            extra,
            ..DeconstructionPlanner::default()
        })
}

fn arb_leaf() -> impl Strategy<Value = Document> {
    let variant = prop_oneof![
        3 => arb_blueprint().prop_map(Document::from_blueprint),
        1 => arb_upgrade_planner().prop_map(Document::from_upgrade_planner),
        1 => arb_deconstruction_planner().prop_map(Document::from_deconstruction_planner),
    ];
    (variant, arb_extra()).prop_map(|(document, extra)| Document { extra, ..document })
}

fn arb_document() -> impl Strategy<Value = Document> {
    arb_leaf().prop_recursive(3, 32, 4, |inner| {
        (
            (arb_label(), arb_text(), arb_label_color(), arb_icons()),
            prop::collection::vec(inner, 0..4),
            (any::<Index>(), any::<bool>()),
            (arb_version(), arb_extra(), arb_extra()),
        )
            .prop_map(
                |(
                    (label, description, label_color, icons),
                    children,
                    (active, has_active),
                    (version, extra, document_extra),
                )| {
                    let len = children.len();
                    let blueprints = children
                        .into_iter()
                        .zip(0u32..)
                        .map(|(child, index)| BookEntry::new(index, child))
                        .collect();
                    let book = BlueprintBook {
                        label,
                        label_color,
                        description,
                        icons,
                        blueprints,
                        active_index: (has_active && len > 0)
                            .then(|| active.index(len) as u32),
                        version,
                        extra,
                        ..BlueprintBook::default()
                    };
                    Document {
                        extra: document_extra,
                        ..Document::from_book(book)
                    }
                },
            )
    })
}

fn node_paths(node: &TreeNode<'_>, out: &mut Vec<String>) {
    out.push(node.path.clone());
    for child in &node.children {
        node_paths(child, out);
    }
}

fn all_paths(doc: &Document) -> Vec<String> {
    let mut paths = Vec::new();
    node_paths(&build_tree(doc), &mut paths);
    paths
}

fn is_prefix_path(ancestor: &str, path: &str) -> bool {
    ancestor.is_empty() || path == ancestor || path.starts_with(&format!("{ancestor}."))
}

// ── Codec ─────────────────────────────────────────────────────────────

proptest! {
    #[test]
    fn text_roundtrip(doc in arb_document()) {
        let text = document_to_text(&doc).expect("serialize");
        let back = parse_document_text(&text).expect("parse");
        prop_assert_eq!(doc, back, "roundtrip failed for text: {}", text);
    }

    #[test]
    fn token_roundtrip(doc in arb_document()) {
        let token = encode_token(&doc).expect("encode");
        prop_assert!(token.starts_with('0'));
        let back = decode_token(&token).expect("decode");
        prop_assert_eq!(doc, back);
    }

    #[test]
    fn token_deterministic(doc in arb_document(), level in 8u32..=9) {
        let profile = CompressionProfile::default().with_level(level);
        let first = encode_token_with_profile(&doc, &profile).expect("encode");
        let second = encode_token_with_profile(&doc, &profile).expect("encode");
        prop_assert_eq!(first, second);
    }

    #[test]
    fn decode_never_panics(token in "0?[A-Za-z0-9+/=]{0,64}") {
        let _ = decode_token(&token);
    }
}

// ── Tree ──────────────────────────────────────────────────────────────

proptest! {
    #[test]
    fn tree_paths_extract_same_node(doc in arb_document()) {
        fn check(node: &TreeNode<'_>, root: &Document) -> Result<(), TestCaseError> {
            let found = extract(root, &node.path).expect("node path resolves");
            prop_assert!(std::ptr::eq(found, node.document), "path {:?}", node.path);
            for child in &node.children {
                check(child, root)?;
            }
            Ok(())
        }
        check(&build_tree(&doc), &doc)?;
    }

    #[test]
    fn edit_leaves_input_untouched(doc in arb_document(), pick in any::<Index>()) {
        let paths = all_paths(&doc);
        let path = &paths[pick.index(paths.len())];
        let before = doc.clone();

        let updated = update_at_path(&doc, path, label_description_updater("edited", "note"))
            .expect("tree path resolves");

        prop_assert_eq!(&doc, &before);
        let target = DocumentAccessor::new(extract(&updated, path).expect("target"));
        prop_assert_eq!(target.label(), Ok(Some("edited")));
        prop_assert_eq!(target.description(), Ok(Some("note")));
    }

    #[test]
    fn edit_only_touches_target_and_ancestors(doc in arb_document(), pick in any::<Index>()) {
        let paths = all_paths(&doc);
        let target = &paths[pick.index(paths.len())];

        let updated = update_at_path(&doc, target, label_description_updater("edited", ""))
            .expect("tree path resolves");

        prop_assert_eq!(all_paths(&updated), paths.clone());
        for path in &paths {
            if is_prefix_path(path, target) {
                continue;
            }
            let old = extract(&doc, path).expect("old");
            let new = extract(&updated, path).expect("new");
            prop_assert_eq!(old, new, "node {:?} changed by edit at {:?}", path, target);
        }
    }

    #[test]
    fn edit_agrees_with_extract(doc in arb_document(), path in "[0-9]{1,2}(\\.[0-9x]{1,2}){0,3}") {
        let resolved = extract(&doc, &path).is_ok();
        let edited = update_at_path(&doc, &path, |d: &Document| d.clone()).is_some();
        prop_assert_eq!(resolved, edited, "path {:?}", path);
    }

    #[test]
    fn parsed_paths_resolve_like_strings(doc in arb_document(), path in "0?[0-9](\\.0?[0-9]){0,3}") {
        if let Ok(parsed) = Path::parse(&path) {
            let direct = extract(&doc, &path).ok().map(|d| d as *const Document);
            let normalized = extract(&doc, &parsed.to_string()).ok().map(|d| d as *const Document);
            prop_assert_eq!(direct, normalized, "path {:?} parsed as {}", path, parsed);
        } else {
            prop_assert!(extract(&doc, &path).is_err());
        }
    }
}

// ── Versions ──────────────────────────────────────────────────────────

proptest! {
    #[test]
    fn version_rendering(packed in any::<u64>()) {
        let rendered = parse_version(packed);
        prop_assert!(rendered == "0" || !rendered.ends_with(".0"), "rendered {}", rendered);
        prop_assert!(rendered.split('.').count() <= 4);
        prop_assert_eq!(GameVersion::from_packed(packed).to_packed(), packed);
    }

    #[test]
    fn version_fields_render_in_order(major in 1u16.., minor in any::<u16>(), patch in any::<u16>()) {
        let packed = GameVersion::new(major, minor, patch, 0).to_packed();
        let rendered = parse_version(packed);
        let prefix = format!("{major}");
        prop_assert!(rendered.starts_with(&prefix));
        if patch != 0 {
            prop_assert_eq!(rendered, format!("{major}.{minor}.{patch}"));
        }
    }
}
