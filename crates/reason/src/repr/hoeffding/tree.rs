//! Hoeffding tree storage and structural validation.

use serde::{Deserialize, Serialize};

use crate::model::Model;

use super::node::Node;
use super::NodeRef;

// ============================================================================
// Tree
// ============================================================================

/// A trained Hoeffding tree.
///
/// Nodes are addressed by 1-based [`NodeRef`]s; reference `0` means "no
/// node". The model is optional because a tree that never saw a training
/// example has none.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Tree {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model: Option<Model>,
    #[serde(default)]
    pub nodes: Vec<Node>,
    #[serde(default)]
    pub root: NodeRef,
}

impl Tree {
    pub fn new(model: Model, nodes: Vec<Node>, root: NodeRef) -> Self {
        Self {
            model: Some(model),
            nodes,
            root,
        }
    }

    /// Resolve a reference to a node.
    ///
    /// Returns `None` for the null reference and for references past the end.
    #[inline]
    pub fn node(&self, node_ref: NodeRef) -> Option<&Node> {
        let index = usize::try_from(node_ref).ok()?.checked_sub(1)?;
        self.nodes.get(index)
    }

    /// The root node, if any.
    #[inline]
    pub fn root_node(&self) -> Option<&Node> {
        self.node(self.root)
    }

    /// Number of nodes.
    #[inline]
    pub fn n_nodes(&self) -> usize {
        self.nodes.len()
    }

    /// Number of leaf nodes.
    pub fn n_leaves(&self) -> usize {
        self.nodes.iter().filter(|n| n.is_leaf()).count()
    }

    /// Check structural invariants.
    ///
    /// Traversal does not depend on this; it is meant for loaders that want
    /// to reject malformed trees up front. Every child reference must point
    /// past its parent, which also rules out cycles.
    pub fn validate(&self) -> Result<(), TreeValidationError> {
        let n_nodes = self.nodes.len();
        if n_nodes == 0 {
            return if self.root == 0 {
                Ok(())
            } else {
                Err(TreeValidationError::RootOutOfBounds {
                    root: self.root,
                    n_nodes,
                })
            };
        }
        if self.root_node().is_none() {
            return Err(TreeValidationError::RootOutOfBounds {
                root: self.root,
                n_nodes,
            });
        }

        for (index, node) in self.nodes.iter().enumerate() {
            let Some(split) = node.split() else {
                continue;
            };
            let node_ref = index as NodeRef + 1;

            if let Some(model) = &self.model {
                if model.feature(&split.feature).is_none() {
                    return Err(TreeValidationError::UnknownFeature {
                        node: node_ref,
                        feature: split.feature.clone(),
                    });
                }
            }

            for child in split.children.iter() {
                if self.node(child).is_none() {
                    return Err(TreeValidationError::ChildOutOfBounds {
                        node: node_ref,
                        child,
                        n_nodes,
                    });
                }
                if child <= node_ref {
                    return Err(TreeValidationError::BackwardReference {
                        node: node_ref,
                        child,
                    });
                }
            }
        }

        Ok(())
    }
}

// ============================================================================
// TreeValidationError
// ============================================================================

/// Structural validation errors for [`Tree`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TreeValidationError {
    /// The root reference does not resolve to a node.
    #[error("root reference {root} is out of bounds for {n_nodes} nodes")]
    RootOutOfBounds { root: NodeRef, n_nodes: usize },

    /// A child reference does not resolve to a node.
    #[error("node {node} references child {child}, out of bounds for {n_nodes} nodes")]
    ChildOutOfBounds {
        node: NodeRef,
        child: NodeRef,
        n_nodes: usize,
    },

    /// A child reference points at its parent or an earlier node.
    #[error("node {node} references earlier node {child}")]
    BackwardReference { node: NodeRef, child: NodeRef },

    /// A split refers to a feature the model does not define.
    #[error("node {node} splits on unknown feature {feature:?}")]
    UnknownFeature { node: NodeRef, feature: String },
}
