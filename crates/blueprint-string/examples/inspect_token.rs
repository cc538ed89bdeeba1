//! Simple decoder to inspect blueprint tokens.
//!
//! Reads a token from the file given as the first argument, or from stdin.

use std::fs;
use std::io::{self, Read};

use blueprint_string::{
    decode_token, is_child_active, parse_version, validate_document, DocumentAccessor, TreeNode,
};

fn print_node(node: &TreeNode<'_>, parent: Option<&TreeNode<'_>>, depth: usize) {
    let accessor = DocumentAccessor::new(node.document);
    let kind = accessor
        .kind()
        .map_or_else(|e| format!("<{}>", e), |k| k.to_string());
    let label = accessor.label().ok().flatten().unwrap_or("");
    let marker = if is_child_active(node, parent) { " *" } else { "" };
    let path = if node.path.is_empty() { "root" } else { node.path.as_str() };

    print!("{:indent$}[{}] {} {:?}{}", "", path, kind, label, marker, indent = depth * 2);
    if let Ok(Some(version)) = accessor.version() {
        print!(" (v{})", parse_version(version));
    }
    println!();

    if let Some(bp) = &node.document.blueprint {
        if !bp.entities.is_empty() || !bp.tiles.is_empty() {
            println!(
                "{:indent$}  {} entities, {} tiles",
                "",
                bp.entities.len(),
                bp.tiles.len(),
                indent = depth * 2
            );
        }
    }

    for child in &node.children {
        print_node(child, Some(node), depth + 1);
    }
}

fn main() {
    let token = match std::env::args().nth(1) {
        Some(path) => {
            println!("Reading: {}", path);
            fs::read_to_string(&path).expect("Failed to read file")
        }
        None => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .expect("Failed to read stdin");
            buf
        }
    };
    println!("Token size: {} chars", token.trim().len());

    let document = decode_token(&token).expect("Failed to decode");
    let tree = blueprint_string::build_tree(&document);

    println!("\n=== Tree ({} nodes) ===", tree.node_count());
    print_node(&tree, None, 0);

    println!("\n=== Validation ===");
    match validate_document(&document) {
        Ok(()) => println!("OK"),
        Err(e) => println!("{}", e),
    }
}
