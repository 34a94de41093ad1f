//! reason: read-only inference for online-learning models.
//!
//! Two scoring engines share one feature encoding:
//!
//! - [`FtrlScorer`] - FTRL-proximal linear model, returns a probability
//! - [`TreeWalker`] - Hoeffding tree traversal, returns leaf statistics
//!
//! # Key Types
//!
//! - [`Model`] / [`Feature`] - The feature directory produced by training
//! - [`Example`] - Anything that can return a value by feature name
//! - [`FtrlOptimizer`] / [`Tree`] - Trained state consumed by the engines
//!
//! Categorical values are mapped to slots by vocabulary position, falling
//! back to `XXH64(value) % hash_buckets` past the end of the vocabulary. See
//! the [`encoding`] module.
//!
//! Nothing here mutates a model. Build a scorer once per model version and
//! share it; to switch versions, build a new one and swap the reference.

// Re-export approx traits for users who want to compare predictions
pub use approx;

pub mod data;
pub mod encoding;
pub mod inference;
pub mod model;
pub mod repr;
pub mod testing;
pub mod utils;

// =============================================================================
// Convenience Re-exports
// =============================================================================

pub use data::{Example, Value, ValueRef};
pub use inference::{
    BinaryPrediction, ClassificationStats, FtrlConfig, FtrlScorer, RegressionStats, TreeWalker,
};
pub use model::{CategoricalStrategy, Feature, FeatureKind, Model, ModelError};
pub use repr::ftrl::FtrlOptimizer;
pub use repr::hoeffding::{Node, NodeRef, Tree};
pub use utils::Parallelism;
