//! Hoeffding tree inference.

mod walker;

pub use walker::TreeWalker;
