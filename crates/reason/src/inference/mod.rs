//! Prediction for trained models.
//!
//! # Module Structure
//!
//! - [`common`]: Interpretation of outputs (binary, classification, regression)
//! - [`ftrl`]: FTRL-proximal linear scoring
//! - [`hoeffding`]: Hoeffding tree traversal
//!
//! Both engines are pure functions of (model, trained state, example). They
//! hold no mutable state and can be shared freely across threads.

pub mod common;
pub mod ftrl;
pub mod hoeffding;

pub use common::{BinaryPrediction, ClassificationStats, RegressionStats};
pub use ftrl::{FtrlConfig, FtrlScorer};
pub use hoeffding::TreeWalker;
