//! FTRL-proximal linear model inference.
//!
//! - [`FtrlConfig`]: hyperparameters (`alpha`, `beta`, `l1`, `l2`)
//! - [`SlotLayout`]: predictor offsets into the flat weight vector
//! - [`FtrlScorer`]: the scorer itself

mod config;
mod layout;
mod scorer;

pub use config::{ConfigError, FtrlConfig, FtrlConfigBuilder};
pub use layout::{PredictorSlot, SlotLayout};
pub use scorer::{FtrlScorer, ScorerError};
