//! Path-labelled view of a document tree.
//!
//! Node paths are produced with the same numbering [`extract`] consumes, so
//! `extract(root, &node.path)` always finds `node.document`.
//!
//! [`extract`]: crate::tree::extract

use crate::access::variant;
use crate::model::{Document, DocumentKind};
use crate::tree::path::child_path;

/// A document together with its path and its children's nodes.
#[derive(Debug, Clone, PartialEq)]
pub struct TreeNode<'a> {
    pub path: String,
    pub document: &'a Document,
    pub children: Vec<TreeNode<'a>>,
}

/// Builds the node for `document` at `path`, recursing into book children.
pub fn build_node<'a>(document: &'a Document, path: &str) -> TreeNode<'a> {
    let children = document
        .children()
        .iter()
        .enumerate()
        .map(|(i, entry)| build_node(&entry.document, &child_path(path, i + 1)))
        .collect();

    TreeNode {
        path: path.to_string(),
        document,
        children,
    }
}

/// Builds the tree rooted at `document`.
pub fn build_tree(document: &Document) -> TreeNode<'_> {
    build_node(document, "")
}

/// True if `node` is the child `parent`'s book marks as active.
///
/// `active_index` is 0-based and is compared with the node's position in
/// `parent.children`, not with its 1-based path token.
pub fn is_child_active(node: &TreeNode<'_>, parent: Option<&TreeNode<'_>>) -> bool {
    let Some(parent) = parent else {
        return false;
    };
    let Some(active_index) = parent
        .document
        .blueprint_book
        .as_ref()
        .and_then(|book| book.active_index)
    else {
        return false;
    };

    parent
        .children
        .iter()
        .position(|child| child.path == node.path)
        .is_some_and(|position| position == active_index as usize)
}

impl<'a> TreeNode<'a> {
    /// Finds the node with the given path in this subtree.
    pub fn find(&self, path: &str) -> Option<&TreeNode<'a>> {
        if self.path == path {
            return Some(self);
        }
        self.children.iter().find_map(|child| child.find(path))
    }

    /// Number of nodes in this subtree, including this one.
    pub fn node_count(&self) -> usize {
        1 + self.children.iter().map(TreeNode::node_count).sum::<usize>()
    }

    pub fn kind(&self) -> Option<DocumentKind> {
        variant(self.document).map(|v| v.kind())
    }

    pub fn label(&self) -> Option<&'a str> {
        variant(self.document).and_then(|v| v.label())
    }

    /// The child this node's book marks as active, if any.
    pub fn active_child(&self) -> Option<&TreeNode<'a>> {
        self.children
            .iter()
            .find(|child| is_child_active(child, Some(self)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{BlueprintBuilder, BookBuilder};
    use crate::tree::extract;

    fn nested_book() -> Document {
        let inner = BookBuilder::new()
            .label("inner")
            .blueprint(BlueprintBuilder::new().label("a").build())
            .blueprint(BlueprintBuilder::new().label("b").build())
            .active_index(1)
            .build();
        BookBuilder::new()
            .label("outer")
            .blueprint(BlueprintBuilder::new().label("top").build())
            .blueprint(inner)
            .active_index(0)
            .build()
    }

    #[test]
    fn test_paths_are_one_based() {
        let root = nested_book();
        let tree = build_tree(&root);

        assert_eq!(tree.path, "");
        assert_eq!(tree.children[0].path, "1");
        assert_eq!(tree.children[1].path, "2");
        assert_eq!(tree.children[1].children[0].path, "2.1");
        assert_eq!(tree.children[1].children[1].path, "2.2");
        assert_eq!(tree.node_count(), 5);
    }

    #[test]
    fn test_node_paths_resolve_with_extract() {
        let root = nested_book();
        let tree = build_tree(&root);

        fn check(node: &TreeNode<'_>, root: &Document) {
            let found = extract(root, &node.path).unwrap();
            assert!(std::ptr::eq(found, node.document), "path {}", node.path);
            for child in &node.children {
                check(child, root);
            }
        }
        check(&tree, &root);
    }

    #[test]
    fn test_active_child_uses_zero_based_position() {
        let root = nested_book();
        let tree = build_tree(&root);

        assert!(is_child_active(&tree.children[0], Some(&tree)));
        assert!(!is_child_active(&tree.children[1], Some(&tree)));

        let inner = &tree.children[1];
        assert!(!is_child_active(&inner.children[0], Some(inner)));
        assert!(is_child_active(&inner.children[1], Some(inner)));
        assert_eq!(inner.active_child().and_then(TreeNode::label), Some("b"));
    }

    #[test]
    fn test_no_parent_or_no_active_index() {
        let root = nested_book();
        let tree = build_tree(&root);
        assert!(!is_child_active(&tree, None));

        let plain = BookBuilder::new()
            .blueprint(BlueprintBuilder::new().build())
            .build();
        let plain_tree = build_tree(&plain);
        assert!(!is_child_active(&plain_tree.children[0], Some(&plain_tree)));
    }

    #[test]
    fn test_find() {
        let root = nested_book();
        let tree = build_tree(&root);
        assert_eq!(tree.find("2.1").and_then(TreeNode::label), Some("a"));
        assert_eq!(tree.find("2").and_then(TreeNode::kind), Some(DocumentKind::BlueprintBook));
        assert!(tree.find("3").is_none());
    }
}
