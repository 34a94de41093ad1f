//! FTRL-proximal prediction.

use crate::data::Example;
use crate::encoding::{encode, Encoded};
use crate::inference::common::BinaryPrediction;
use crate::model::ModelError;
use crate::repr::ftrl::FtrlOptimizer;
use crate::utils::{sigmoid, Parallelism};

use super::config::{ConfigError, FtrlConfig};
use super::layout::{PredictorSlot, SlotLayout};

/// Errors raised while building a [`FtrlScorer`].
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ScorerError {
    #[error("invalid config: {0}")]
    Config(#[from] ConfigError),

    #[error("invalid model: {0}")]
    Model(#[from] ModelError),

    #[error("weights and sums differ in length: {weights} vs {sums}")]
    LengthMismatch { weights: usize, sums: usize },

    #[error("layout needs {n_slots} slots but the optimizer has {available}")]
    TooFewSlots { n_slots: usize, available: usize },
}

/// Read-only FTRL-proximal scorer.
///
/// Holds the optimizer state, the hyperparameters and the slot layout
/// computed once at construction. All prediction methods take `&self`, so a
/// scorer can be shared across threads (for example behind an `Arc`). To
/// switch model versions, build a new scorer and swap the shared reference.
///
/// # Example
///
/// ```
/// use std::collections::HashMap;
/// use reason::data::Value;
/// use reason::inference::ftrl::{FtrlConfig, FtrlScorer};
/// use reason::model::{Feature, Model};
/// use reason::repr::ftrl::FtrlOptimizer;
///
/// let model = Model::new("y", [Feature::numerical("x"), Feature::numerical("y")]);
/// let optimizer = FtrlOptimizer::new(model, vec![0.5], vec![4.0]);
/// let config = FtrlConfig::builder().alpha(0.1).beta(1.0).l1(0.1).l2(0.1).build().unwrap();
/// let scorer = FtrlScorer::new(optimizer, config).unwrap();
///
/// let example: HashMap<String, Value> = [("x".to_string(), Value::from(2.0))].into();
/// let p = scorer.predict(&example);
/// assert!((p - 0.4934).abs() < 1e-4);
/// ```
#[derive(Debug, Clone)]
pub struct FtrlScorer {
    optimizer: FtrlOptimizer,
    config: FtrlConfig,
    layout: SlotLayout,
}

impl FtrlScorer {
    /// Build a scorer, validating the config, the model and the vector
    /// lengths.
    ///
    /// A model without predictors is accepted; every prediction is then 0.5.
    pub fn new(optimizer: FtrlOptimizer, config: FtrlConfig) -> Result<Self, ScorerError> {
        config.validate()?;
        optimizer.model.validate()?;

        let (weights, sums) = (optimizer.weights.len(), optimizer.sums.len());
        if weights != sums {
            return Err(ScorerError::LengthMismatch { weights, sums });
        }

        let layout = SlotLayout::new(&optimizer.model);
        if layout.n_slots() > weights {
            return Err(ScorerError::TooFewSlots {
                n_slots: layout.n_slots(),
                available: weights,
            });
        }

        if layout.is_empty() {
            log::warn!(
                "FTRL model with target {:?} has no predictors",
                optimizer.model.target
            );
        } else {
            log::debug!(
                "FTRL layout: {} predictors over {} slots",
                layout.n_predictors(),
                layout.n_slots()
            );
        }

        Ok(Self {
            optimizer,
            config,
            layout,
        })
    }

    /// The slot layout.
    #[inline]
    pub fn layout(&self) -> &SlotLayout {
        &self.layout
    }

    /// The hyperparameters.
    #[inline]
    pub fn config(&self) -> &FtrlConfig {
        &self.config
    }

    /// The optimizer state.
    #[inline]
    pub fn optimizer(&self) -> &FtrlOptimizer {
        &self.optimizer
    }

    /// Raw linear sum `w·x` over all predictors, before clamping.
    pub fn margin<E: Example + ?Sized>(&self, example: &E) -> f64 {
        self.layout
            .predictors()
            .iter()
            .map(|predictor| self.contribution(example, predictor))
            .sum()
    }

    /// Probability of the positive outcome, strictly inside `(0, 1)`.
    #[inline]
    pub fn predict<E: Example + ?Sized>(&self, example: &E) -> f64 {
        sigmoid(self.margin(example))
    }

    /// Prediction as a binary classification.
    #[inline]
    pub fn predict_binary<E: Example + ?Sized>(&self, example: &E) -> BinaryPrediction {
        BinaryPrediction::new(self.predict(example))
    }

    /// Predict many examples, in input order.
    pub fn predict_batch<E: Example + Sync>(
        &self,
        examples: &[E],
        parallelism: Parallelism,
    ) -> Vec<f64> {
        parallelism.map_collect(examples, |example| self.predict(example))
    }

    /// Contribution of one predictor.
    ///
    /// Missing values, mistyped values and unknown categories without hash
    /// buckets contribute nothing.
    fn contribution<E: Example + ?Sized>(&self, example: &E, predictor: &PredictorSlot) -> f64 {
        let feature = &predictor.feature;
        let (slot, value) = match encode(feature, example.value_of(&feature.name)) {
            Some(Encoded::Category(index)) => (predictor.offset + index, 1.0),
            Some(Encoded::Number(value)) => (predictor.offset, value),
            None => return 0.0,
        };

        let z = self.optimizer.weights[slot];
        let abs = z.abs();
        if abs <= self.config.l1 {
            return 0.0;
        }

        let sign = if z < 0.0 { -1.0 } else { 1.0 };
        let n = self.optimizer.sums[slot];
        sign * (self.config.l1 - abs) / self.config.denominator(n) * value
    }
}
