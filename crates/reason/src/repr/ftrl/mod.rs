//! FTRL-proximal optimizer state.

use serde::{Deserialize, Serialize};

use crate::model::Model;

/// Trained state of an FTRL-proximal linear model.
///
/// `weights` holds the per-slot `z` accumulators and `sums` the per-slot sums
/// of squared gradients. Both are indexed by the slot layout derived from
/// `model` (see [`SlotLayout`](crate::inference::ftrl::SlotLayout)).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FtrlOptimizer {
    pub model: Model,
    pub weights: Vec<f64>,
    pub sums: Vec<f64>,
}

impl FtrlOptimizer {
    pub fn new(model: Model, weights: Vec<f64>, sums: Vec<f64>) -> Self {
        Self { model, weights, sums }
    }

    /// A zero-initialized state with `n_slots` slots.
    pub fn zeros(model: Model, n_slots: usize) -> Self {
        Self::new(model, vec![0.0; n_slots], vec![0.0; n_slots])
    }

    /// Number of slots.
    #[inline]
    pub fn n_slots(&self) -> usize {
        self.weights.len()
    }
}
