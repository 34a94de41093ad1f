//! Canonical in-memory representations of trained models.
//!
//! - [`ftrl`]: FTRL-proximal optimizer state (weights and squared-gradient sums)
//! - [`hoeffding`]: Hoeffding tree node arrays
//!
//! These are plain data produced by a training pipeline. Prediction lives in
//! [`crate::inference`].

pub mod ftrl;
pub mod hoeffding;
