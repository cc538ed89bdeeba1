//! Path-addressed navigation and editing of the book tree.
//!
//! - [`path`]: path syntax and the shared numbering rule
//! - [`navigate`]: read-only extraction
//! - [`edit`]: copy-on-write updates
//! - [`node`]: a path-labelled view for display

pub mod edit;
pub mod navigate;
pub mod node;
pub mod path;

pub use edit::{label_description_updater, try_update_at_path, update_at_path};
pub use navigate::extract;
pub use node::{build_node, build_tree, is_child_active, TreeNode};
pub use path::{child_path, Path};
