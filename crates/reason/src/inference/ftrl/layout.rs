//! Slot layout of the flat FTRL weight vector.

use crate::model::{Feature, Model};

/// A predictor and the first slot of its range.
#[derive(Debug, Clone, PartialEq)]
pub struct PredictorSlot {
    pub feature: Feature,
    pub offset: usize,
}

impl PredictorSlot {
    /// Number of slots this predictor occupies.
    #[inline]
    pub fn width(&self) -> usize {
        self.feature.width()
    }
}

/// Mapping from predictor to base offset in the weight vector.
///
/// Predictors are all non-target features in ascending name order. Each
/// occupies `1` slot if numerical and `hash_buckets + |vocabulary|` slots if
/// categorical, laid out back to back. The training side uses the same
/// rule; a different order or width silently misaligns every weight.
///
/// ```text
/// model: a (cat, vocab=[x, y], buckets=2), b (num), y (target)
///
/// slot:  0    1    2    3    4
///        a=x  a=y  a#0  a#1  b
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SlotLayout {
    predictors: Vec<PredictorSlot>,
    n_slots: usize,
}

impl SlotLayout {
    /// Compute the layout for `model`.
    pub fn new(model: &Model) -> Self {
        let mut predictors = Vec::with_capacity(model.n_features().saturating_sub(1));
        let mut offset = 0;

        for name in model.predictors() {
            // Predictor names come from the model itself.
            let Some(feature) = model.feature(name) else {
                continue;
            };
            predictors.push(PredictorSlot {
                feature: feature.clone(),
                offset,
            });
            offset += feature.width();
        }

        Self {
            predictors,
            n_slots: offset,
        }
    }

    /// Predictors in layout order.
    #[inline]
    pub fn predictors(&self) -> &[PredictorSlot] {
        &self.predictors
    }

    /// Base offset of a predictor by name.
    pub fn offset_of(&self, name: &str) -> Option<usize> {
        self.predictors
            .iter()
            .find(|p| p.feature.name == name)
            .map(|p| p.offset)
    }

    /// Total number of slots.
    #[inline]
    pub fn n_slots(&self) -> usize {
        self.n_slots
    }

    /// Number of predictors.
    #[inline]
    pub fn n_predictors(&self) -> usize {
        self.predictors.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.predictors.is_empty()
    }
}
