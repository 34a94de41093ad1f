//! The feature directory shared by all scoring engines.
//!
//! A [`Model`] maps feature names to [`Feature`] definitions and names the
//! target feature, which is never used as a predictor. Models are produced by
//! a training pipeline and treated as immutable here.

mod feature;

use std::collections::{BTreeMap, HashSet};

use serde::{Deserialize, Serialize};

pub use feature::{CategoricalStrategy, Feature, FeatureKind};

/// Errors reported by [`Model::validate`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ModelError {
    /// A map key differs from the name stored in its feature.
    #[error("feature stored under {key:?} is named {name:?}")]
    NameMismatch { key: String, name: String },

    /// A vocabulary contains the same value twice.
    #[error("feature {feature:?} has duplicate vocabulary value {value:?}")]
    DuplicateVocabulary { feature: String, value: String },
}

/// Feature directory: feature definitions by name plus the target name.
///
/// Features are kept in a `BTreeMap`, so iteration is in ascending byte order
/// of the names. That order defines the linear slot layout.
///
/// # Example
///
/// ```
/// use reason::model::{Feature, Model};
///
/// let model = Model::new("y", [
///     Feature::numerical("y"),
///     Feature::numerical("b"),
///     Feature::categorical("a", ["x", "z"]),
/// ]);
/// assert_eq!(model.predictors().collect::<Vec<_>>(), ["a", "b"]);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Model {
    /// Name of the target feature.
    pub target: String,
    /// Features by name.
    pub features: BTreeMap<String, Feature>,
}

impl Model {
    /// Create a model from a target name and a list of features.
    ///
    /// Later features replace earlier ones with the same name.
    pub fn new(target: impl Into<String>, features: impl IntoIterator<Item = Feature>) -> Self {
        Self {
            target: target.into(),
            features: features.into_iter().map(|f| (f.name.clone(), f)).collect(),
        }
    }

    /// Look up a feature by name.
    #[inline]
    pub fn feature(&self, name: &str) -> Option<&Feature> {
        self.features.get(name)
    }

    /// The target feature, if defined.
    #[inline]
    pub fn target_feature(&self) -> Option<&Feature> {
        self.features.get(&self.target)
    }

    /// Names of all non-target features in ascending order.
    pub fn predictors(&self) -> impl Iterator<Item = &str> + '_ {
        self.features
            .keys()
            .map(String::as_str)
            .filter(move |name| *name != self.target)
    }

    /// Number of features, including the target.
    #[inline]
    pub fn n_features(&self) -> usize {
        self.features.len()
    }

    /// Check the structural invariants a training pipeline must uphold.
    pub fn validate(&self) -> Result<(), ModelError> {
        for (key, feature) in &self.features {
            if *key != feature.name {
                return Err(ModelError::NameMismatch {
                    key: key.clone(),
                    name: feature.name.clone(),
                });
            }

            let mut seen = HashSet::with_capacity(feature.vocabulary.len());
            for value in &feature.vocabulary {
                if !seen.insert(value.as_str()) {
                    return Err(ModelError::DuplicateVocabulary {
                        feature: key.clone(),
                        value: value.clone(),
                    });
                }
            }
        }
        Ok(())
    }
}
