//! Helpers shared by unit tests, integration tests and benches.

use std::collections::HashMap;

use crate::data::Value;
use crate::model::{Feature, Model};
use crate::repr::ftrl::FtrlOptimizer;
use crate::repr::hoeffding::{Children, Node, Tree};

/// Default tolerance for comparing predictions.
pub const DEFAULT_TOLERANCE_F64: f64 = 1e-12;

/// Build a map-backed example from `(name, value)` pairs.
pub fn example(pairs: &[(&str, Value)]) -> HashMap<String, Value> {
    pairs
        .iter()
        .map(|(name, value)| ((*name).to_string(), value.clone()))
        .collect()
}

/// A model mixing every feature shape, with target `"label"`.
///
/// Layout (sorted): `age` (1 slot), `browser` (3 vocabulary + 8 buckets),
/// `country` (16 buckets), `device` (identity).
pub fn mixed_model() -> Model {
    Model::new(
        "label",
        [
            Feature::categorical("label", ["no", "yes"]),
            Feature::numerical("age"),
            Feature::categorical_vocabulary_hash_buckets(
                "browser",
                ["chrome", "firefox", "safari"],
                8,
            ),
            Feature::categorical_hash_buckets("country", 16),
            Feature::categorical_identity("device"),
        ],
    )
}

/// Optimizer state for [`mixed_model`] with deterministic, non-trivial weights.
pub fn mixed_optimizer() -> FtrlOptimizer {
    let n_slots = 1 + 11 + 16;
    let weights = (0..n_slots)
        .map(|i| {
            let i = i as f64;
            (i * 0.37).sin() * 3.0
        })
        .collect();
    let sums = (0..n_slots).map(|i| (i % 5) as f64 * 2.5).collect();
    FtrlOptimizer::new(mixed_model(), weights, sums)
}

/// A two-level classification tree over [`mixed_model`].
///
/// ```text
/// 1: split age < 30
///    2: split browser  (dense [chrome, firefox], sparse {safari, buckets...})
///       4: leaf  5: leaf  6: leaf
///    3: split device   (identity, sparse {7})
///       7: leaf
/// ```
pub fn mixed_tree() -> Tree {
    let nodes = vec![
        Node::numerical_split("age", 30.0, [2, 3], [10.0, 10.0]),
        Node::categorical_split(
            "browser",
            Children {
                dense: vec![4, 5],
                sparse: [(2, 6)].into_iter().collect(),
            },
            [6.0, 4.0],
        ),
        Node::categorical_split("device", Children::sparse([(7, 7)]), [4.0, 6.0]),
        Node::leaf([3.0, 1.0]),
        Node::leaf([1.0, 2.0]),
        Node::leaf([2.0, 1.0]),
        Node::leaf([0.0, 5.0]),
    ];
    Tree::new(mixed_model(), nodes, 1)
}
