//! Tree node types.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::NodeRef;

/// Child references of a split node.
///
/// Small index ranges (numerical splits, short vocabularies) are stored in
/// `dense`, addressed by position. Large or hashed ranges go to `sparse`.
/// Indices found in neither resolve to the null reference `0`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Children {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub dense: Vec<NodeRef>,
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub sparse: HashMap<u64, NodeRef>,
}

impl Children {
    /// Dense children only.
    pub fn dense(refs: impl Into<Vec<NodeRef>>) -> Self {
        Self {
            dense: refs.into(),
            sparse: HashMap::new(),
        }
    }

    /// Sparse children only.
    pub fn sparse(refs: impl IntoIterator<Item = (u64, NodeRef)>) -> Self {
        Self {
            dense: Vec::new(),
            sparse: refs.into_iter().collect(),
        }
    }

    /// Child reference for `index`, or `0` when there is none.
    ///
    /// The dense storage is checked first; the sparse map only serves
    /// indices at or beyond `dense.len()`.
    #[inline]
    pub fn get(&self, index: usize) -> NodeRef {
        if let Some(&child) = self.dense.get(index) {
            return child;
        }
        if self.sparse.is_empty() {
            return 0;
        }
        self.sparse.get(&(index as u64)).copied().unwrap_or(0)
    }

    /// All non-null child references, dense first.
    pub fn iter(&self) -> impl Iterator<Item = NodeRef> + '_ {
        self.dense
            .iter()
            .chain(self.sparse.values())
            .copied()
            .filter(|&r| r != 0)
    }

    /// Returns true if no child is set.
    pub fn is_empty(&self) -> bool {
        self.iter().next().is_none()
    }
}

/// Split on a single feature.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SplitNode {
    /// Name of the feature this node splits on.
    pub feature: String,
    /// Threshold for numerical splits: index 0 if `value < pivot`, else 1.
    #[serde(default)]
    pub pivot: f64,
    pub children: Children,
}

/// A node of a Hoeffding tree.
///
/// Every node carries the statistics observed while it was a leaf. Split
/// nodes keep theirs so traversal can stop at any depth.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Node {
    Leaf {
        #[serde(default)]
        stats: Vec<f64>,
    },
    Split {
        #[serde(default)]
        stats: Vec<f64>,
        split: SplitNode,
    },
}

impl Node {
    /// A leaf node.
    pub fn leaf(stats: impl Into<Vec<f64>>) -> Self {
        Node::Leaf { stats: stats.into() }
    }

    /// A numerical split `feature < pivot` with dense children `[lt, ge]`.
    pub fn numerical_split(
        feature: impl Into<String>,
        pivot: f64,
        children: [NodeRef; 2],
        stats: impl Into<Vec<f64>>,
    ) -> Self {
        Node::Split {
            stats: stats.into(),
            split: SplitNode {
                feature: feature.into(),
                pivot,
                children: Children::dense(children),
            },
        }
    }

    /// A categorical split with arbitrary children.
    pub fn categorical_split(
        feature: impl Into<String>,
        children: Children,
        stats: impl Into<Vec<f64>>,
    ) -> Self {
        Node::Split {
            stats: stats.into(),
            split: SplitNode {
                feature: feature.into(),
                pivot: 0.0,
                children,
            },
        }
    }

    /// Statistics stored at this node.
    #[inline]
    pub fn stats(&self) -> &[f64] {
        match self {
            Node::Leaf { stats } | Node::Split { stats, .. } => stats,
        }
    }

    /// The split, if this is a split node.
    #[inline]
    pub fn split(&self) -> Option<&SplitNode> {
        match self {
            Node::Leaf { .. } => None,
            Node::Split { split, .. } => Some(split),
        }
    }

    #[inline]
    pub fn is_leaf(&self) -> bool {
        matches!(self, Node::Leaf { .. })
    }
}
