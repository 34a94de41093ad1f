//! Feature encoding shared by the linear scorer and the tree walker.
//!
//! Categorical values map to a slot within the feature's range: the
//! vocabulary position when the value is known, otherwise
//! `|vocabulary| + HASH(value) % hash_buckets`. Numerical values pass
//! through unchanged.
//!
//! The hash function (XXH64, seed 0, over the UTF-8 bytes) and the
//! vocabulary order are part of the contract with the training side.

mod hashing;

use crate::data::ValueRef;
use crate::model::{CategoricalStrategy, Feature, FeatureKind};

pub use hashing::{bucket_hash, hash_str};

/// Result of encoding one feature value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Encoded {
    /// Slot within a categorical feature's range, `0..width`.
    Category(usize),
    /// Value of a numerical feature.
    Number(f64),
}

/// Encode a raw value for `feature`.
///
/// Returns `None` when the value is absent, has the wrong type for the
/// feature, or is an unknown category of a feature without hash buckets.
///
/// # Example
///
/// ```
/// use reason::data::ValueRef;
/// use reason::encoding::{encode, Encoded};
/// use reason::model::Feature;
///
/// let color = Feature::categorical_vocabulary_hash_buckets("color", ["a", "b"], 4);
/// assert_eq!(encode(&color, Some(ValueRef::Text("a"))), Some(Encoded::Category(0)));
/// assert_eq!(encode(&color, Some(ValueRef::Text("z"))), Some(Encoded::Category(2)));
/// assert_eq!(encode(&color, None), None);
/// ```
pub fn encode(feature: &Feature, value: Option<ValueRef<'_>>) -> Option<Encoded> {
    let value = value?;
    match feature.kind {
        FeatureKind::Numerical => value.as_number().map(Encoded::Number),
        FeatureKind::Categorical => category_of(feature, value).map(Encoded::Category),
    }
}

/// Vocabulary position of a value, falling back to its hash bucket.
///
/// Ignores the feature's strategy and kind.
pub fn category_of(feature: &Feature, value: ValueRef<'_>) -> Option<usize> {
    let text = value.to_text();
    if let Some(index) = feature.vocabulary_index(&text) {
        return Some(index);
    }
    bucket_hash(&text, feature.hash_buckets).map(|bucket| feature.vocabulary.len() + bucket)
}

/// Child index of a categorical value, honouring the feature's strategy.
///
/// [`CategoricalStrategy::Identity`] uses the value itself as the index;
/// the other strategies go through [`category_of`]. Negative identity values
/// have no index.
pub fn category_index(feature: &Feature, value: ValueRef<'_>) -> Option<usize> {
    match feature.strategy {
        CategoricalStrategy::Identity => value.to_index().and_then(|i| usize::try_from(i).ok()),
        CategoricalStrategy::Vocabulary | CategoricalStrategy::Expandable => {
            category_of(feature, value)
        }
    }
}
