//! Hoeffding tree traversal.

use crate::data::{Example, ValueRef};
use crate::encoding::category_index;
use crate::model::{Feature, FeatureKind, Model};
use crate::repr::hoeffding::{NodeRef, SplitNode, Tree};
use crate::utils::Parallelism;

/// Read-only traversal of a Hoeffding tree.
///
/// Implemented for [`Tree`]. Traversal starts at the root and follows split
/// nodes until it reaches a leaf or cannot descend any further, in which case
/// the node it stopped at answers. It stops early when:
///
/// - the example has no usable value for the split feature,
/// - the value maps to no child index, or the index has no child,
/// - the model does not define the split feature, or a child reference is
///   dangling (both are malformed-model cases).
///
/// Child references are expected to point forward in the node array, which
/// the training side guarantees. A tree with a cycle would never terminate;
/// use [`Tree::validate`] to reject such trees at load time.
///
/// # Example
///
/// ```
/// use std::collections::HashMap;
/// use reason::data::Value;
/// use reason::inference::hoeffding::TreeWalker;
/// use reason::model::{Feature, Model};
/// use reason::repr::hoeffding::{Node, Tree};
///
/// let model = Model::new("y", [Feature::numerical("x"), Feature::numerical("y")]);
/// let tree = Tree::new(
///     model,
///     vec![
///         Node::numerical_split("x", 10.0, [2, 3], [0.0]),
///         Node::leaf([1.0]),
///         Node::leaf([2.0]),
///     ],
///     1,
/// );
///
/// let small: HashMap<String, Value> = [("x".to_string(), Value::from(5.0))].into();
/// assert_eq!(tree.lookup(&small), &[1.0]);
/// ```
pub trait TreeWalker {
    /// Reference of the node that answers for `example`.
    ///
    /// `None` if the tree has no model or its root does not resolve.
    fn traverse<E: Example + ?Sized>(&self, example: &E) -> Option<NodeRef>;

    /// Statistics of the node that answers for `example`.
    ///
    /// Empty if the tree has no model or no root.
    fn lookup<E: Example + ?Sized>(&self, example: &E) -> &[f64];

    /// Look up many examples, in input order.
    fn lookup_batch<E: Example + Sync>(
        &self,
        examples: &[E],
        parallelism: Parallelism,
    ) -> Vec<Vec<f64>>
    where
        Self: Sync,
    {
        parallelism.map_collect(examples, |example| self.lookup(example).to_vec())
    }
}

impl TreeWalker for Tree {
    fn traverse<E: Example + ?Sized>(&self, example: &E) -> Option<NodeRef> {
        let model = self.model.as_ref()?;
        let mut current = self.root;
        let mut node = self.node(current)?;

        while let Some(split) = node.split() {
            let child = next_child(model, split, example);
            if child == 0 {
                break;
            }
            match self.node(child) {
                Some(next) => {
                    current = child;
                    node = next;
                }
                None => {
                    log::trace!("node {current} references missing child {child}");
                    break;
                }
            }
        }

        Some(current)
    }

    fn lookup<E: Example + ?Sized>(&self, example: &E) -> &[f64] {
        self.traverse(example)
            .and_then(|node_ref| self.node(node_ref))
            .map(|node| node.stats())
            .unwrap_or(&[])
    }
}

/// Child reference selected by `example` at `split`, or `0` to stop.
fn next_child<E: Example + ?Sized>(model: &Model, split: &SplitNode, example: &E) -> NodeRef {
    let Some(feature) = model.feature(&split.feature) else {
        log::trace!("split on unknown feature {:?}", split.feature);
        return 0;
    };
    let Some(value) = example.value_of(&feature.name) else {
        return 0;
    };
    child_index(feature, split.pivot, value).map_or(0, |index| split.children.get(index))
}

/// Child index for a present value.
///
/// Categorical features resolve by strategy. Numerical features select 0 if
/// `value < pivot`, else 1, so NaN selects 1. Text selects nothing.
fn child_index(feature: &Feature, pivot: f64, value: ValueRef<'_>) -> Option<usize> {
    match feature.kind {
        FeatureKind::Categorical => category_index(feature, value),
        FeatureKind::Numerical => {
            let v = value.as_number()?;
            Some(if v < pivot { 0 } else { 1 })
        }
    }
}
