//! Feature definitions.

use serde::{Deserialize, Serialize};

/// Kind of a model feature.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FeatureKind {
    /// Discrete values addressed through a vocabulary and/or hash buckets.
    #[default]
    Categorical,
    /// Continuous values used as-is.
    Numerical,
}

impl FeatureKind {
    /// Returns true if categorical.
    #[inline]
    pub fn is_categorical(self) -> bool {
        matches!(self, Self::Categorical)
    }

    /// Returns true if numerical.
    #[inline]
    pub fn is_numerical(self) -> bool {
        matches!(self, Self::Numerical)
    }
}

/// How a categorical value is turned into a child index by the tree walker.
///
/// The linear scorer ignores the strategy and always uses vocabulary lookup
/// with hash-bucket fallback.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CategoricalStrategy {
    /// Vocabulary lookup, then hash buckets.
    #[default]
    Vocabulary,
    /// Same as [`Vocabulary`](Self::Vocabulary) at inference time. Training may
    /// append unseen values to the vocabulary; this crate never does.
    Expandable,
    /// The raw value is the integer index itself.
    Identity,
}

/// A single named feature of a [`Model`](super::Model).
///
/// Immutable once built. The vocabulary order is part of the weight layout
/// contract with the training side and must not be reordered.
///
/// # Example
///
/// ```
/// use reason::model::Feature;
///
/// let color = Feature::categorical_vocabulary_hash_buckets("color", ["red", "green"], 4);
/// assert_eq!(color.num_categories(), Some(6));
/// assert_eq!(color.label_of(1), "green");
/// assert_eq!(color.label_of(3), "#1");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Feature {
    pub name: String,
    pub kind: FeatureKind,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub vocabulary: Vec<String>,
    #[serde(default)]
    pub hash_buckets: u32,
    #[serde(default)]
    pub strategy: CategoricalStrategy,
}

impl Feature {
    /// A numerical feature.
    pub fn numerical(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: FeatureKind::Numerical,
            vocabulary: Vec::new(),
            hash_buckets: 0,
            strategy: CategoricalStrategy::default(),
        }
    }

    /// A categorical feature with a fixed vocabulary.
    pub fn categorical<I, S>(name: impl Into<String>, vocabulary: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::categorical_vocabulary_hash_buckets(name, vocabulary, 0)
    }

    /// A categorical feature whose vocabulary may grow during training.
    pub fn categorical_expandable<I, S>(name: impl Into<String>, vocabulary: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            strategy: CategoricalStrategy::Expandable,
            ..Self::categorical(name, vocabulary)
        }
    }

    /// A categorical feature whose values are integer indices.
    pub fn categorical_identity(name: impl Into<String>) -> Self {
        Self {
            strategy: CategoricalStrategy::Identity,
            ..Self::categorical_hash_buckets(name, 0)
        }
    }

    /// A categorical feature addressed only via `HASH(value) % n`.
    pub fn categorical_hash_buckets(name: impl Into<String>, n: u32) -> Self {
        Self::categorical_vocabulary_hash_buckets(name, std::iter::empty::<String>(), n)
    }

    /// A categorical feature with a vocabulary and `n` hash buckets for
    /// unknown values, which map to `HASH(value) % n + len(vocabulary)`.
    pub fn categorical_vocabulary_hash_buckets<I, S>(
        name: impl Into<String>,
        vocabulary: I,
        n: u32,
    ) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            name: name.into(),
            kind: FeatureKind::Categorical,
            vocabulary: vocabulary.into_iter().map(Into::into).collect(),
            hash_buckets: n,
            strategy: CategoricalStrategy::Vocabulary,
        }
    }

    /// Number of categories this feature can produce.
    ///
    /// Returns `Some(0)` for numerical features and `None` for
    /// [`CategoricalStrategy::Identity`], where the range is unknown.
    pub fn num_categories(&self) -> Option<usize> {
        match (self.kind, self.strategy) {
            (FeatureKind::Numerical, _) => Some(0),
            (FeatureKind::Categorical, CategoricalStrategy::Identity) => None,
            (FeatureKind::Categorical, _) => Some(self.width()),
        }
    }

    /// Number of weight slots this feature occupies in a linear layout.
    #[inline]
    pub fn width(&self) -> usize {
        match self.kind {
            FeatureKind::Numerical => 1,
            FeatureKind::Categorical => self.hash_buckets as usize + self.vocabulary.len(),
        }
    }

    /// Position of `value` in the vocabulary, if present.
    #[inline]
    pub fn vocabulary_index(&self, value: &str) -> Option<usize> {
        self.vocabulary.iter().position(|v| v == value)
    }

    /// Human-readable label of a category index.
    ///
    /// Vocabulary slots return their string, hash-bucket slots return
    /// `"#<bucket>"`, identity features return the index itself. Anything
    /// else is `"?"`.
    pub fn label_of(&self, category: usize) -> String {
        if !self.kind.is_categorical() {
            return "?".to_string();
        }
        if self.strategy == CategoricalStrategy::Identity {
            return category.to_string();
        }
        if let Some(value) = self.vocabulary.get(category) {
            return value.clone();
        }
        match category - self.vocabulary.len() {
            bucket if bucket < self.hash_buckets as usize => format!("#{bucket}"),
            _ => "?".to_string(),
        }
    }
}
