//! Interpretation of raw engine outputs.
//!
//! The scorer produces a probability and the tree walker an opaque
//! statistics vector. These types read them as classification or regression
//! results.

mod prediction;

pub use prediction::{BinaryPrediction, ClassificationStats, RegressionStats};
