//! FTRL-proximal hyperparameters with builder pattern.
//!
//! # Example
//!
//! ```
//! use reason::inference::ftrl::FtrlConfig;
//!
//! // All defaults
//! let config = FtrlConfig::builder().build().unwrap();
//! assert_eq!(config.l1, 1.0);
//!
//! // Customize regularization
//! let config = FtrlConfig::builder().l1(0.1).l2(0.1).build().unwrap();
//!
//! // Invalid values are rejected at build time
//! assert!(FtrlConfig::builder().alpha(0.0).build().is_err());
//! ```

use bon::Builder;
use serde::{Deserialize, Serialize};

// =============================================================================
// ConfigError
// =============================================================================

/// Errors that can occur during configuration validation.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConfigError {
    /// Alpha must be positive and finite.
    #[error("alpha must be > 0, got {0}")]
    InvalidAlpha(f64),

    /// Beta, L1 and L2 must be non-negative and finite.
    #[error("{field} must be >= 0, got {value}")]
    NegativeParameter { field: &'static str, value: f64 },
}

// =============================================================================
// FtrlConfig
// =============================================================================

/// Hyperparameters of the FTRL-proximal prediction rule.
///
/// They must match the values used during training; the optimizer state
/// alone does not record them.
#[derive(Debug, Clone, Copy, PartialEq, Builder, Serialize, Deserialize)]
#[builder(
    derive(Clone, Debug),
    finish_fn(vis = "", name = __build_internal)
)]
pub struct FtrlConfig {
    /// Learning rate scale. Default: 0.1.
    #[builder(default = 0.1)]
    pub alpha: f64,

    /// Learning rate smoothing. Default: 1.0.
    #[builder(default = 1.0)]
    pub beta: f64,

    /// L1 regularization; weights with `|z| <= l1` are zero. Default: 1.0.
    #[builder(default = 1.0)]
    pub l1: f64,

    /// L2 regularization. Default: 0.1.
    #[builder(default = 0.1)]
    pub l2: f64,
}

impl Default for FtrlConfig {
    fn default() -> Self {
        Self {
            alpha: 0.1,
            beta: 1.0,
            l1: 1.0,
            l2: 0.1,
        }
    }
}

/// Custom finishing function that validates the config.
impl<S: ftrl_config_builder::IsComplete> FtrlConfigBuilder<S> {
    /// Build and validate the configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if `alpha <= 0` or any other parameter is
    /// negative. Non-finite values are rejected as well.
    pub fn build(self) -> Result<FtrlConfig, ConfigError> {
        let config = self.__build_internal();
        config.validate()?;
        Ok(config)
    }
}

impl FtrlConfig {
    /// Validate the configuration.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.alpha.is_finite() && self.alpha > 0.0) {
            return Err(ConfigError::InvalidAlpha(self.alpha));
        }
        for (field, value) in [("beta", self.beta), ("l1", self.l1), ("l2", self.l2)] {
            if !(value.is_finite() && value >= 0.0) {
                return Err(ConfigError::NegativeParameter { field, value });
            }
        }
        Ok(())
    }

    /// Per-coordinate learning rate denominator: `l2 + (beta + sqrt(n)) / alpha`.
    #[inline]
    pub(crate) fn denominator(&self, sum_squared_gradients: f64) -> f64 {
        self.l2 + (self.beta + sum_squared_gradients.sqrt()) / self.alpha
    }
}
