//! Hoeffding tree canonical representation.

/// Reference to a tree node: 1-based index into [`Tree::nodes`], `0` is null.
pub type NodeRef = u64;

mod node;
mod tree;

pub use node::{Children, Node, SplitNode};
pub use tree::{Tree, TreeValidationError};
