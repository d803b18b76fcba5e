//! Detector thresholds and bankroll.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::domain::{Edge, Stake};
use crate::error::ConfigError;

/// Configuration for the surebet detector.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct DetectorConfig {
    /// Total capital distributed across the legs of each opportunity.
    #[serde(default = "default_bankroll")]
    pub bankroll: Stake,

    /// Minimum edge a candidate needs to be reported.
    /// e.g. 0.0005 means the implied sum must be at most 0.9995.
    #[serde(default)]
    pub min_edge: Edge,
}

fn default_bankroll() -> Stake {
    Decimal::new(1000, 0)
}

impl Default for DetectorConfig {
    fn default() -> Self {
        Self {
            bankroll: default_bankroll(),
            min_edge: Decimal::ZERO,
        }
    }
}

impl DetectorConfig {
    /// Create a validated configuration.
    ///
    /// # Errors
    ///
    /// See [`DetectorConfig::validate`].
    pub fn new(bankroll: Stake, min_edge: Edge) -> Result<Self, ConfigError> {
        let config = Self { bankroll, min_edge };
        config.validate()?;
        Ok(config)
    }

    /// Check that `bankroll > 0` and `0 <= min_edge < 1`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] naming the offending field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.bankroll <= Decimal::ZERO {
            return Err(ConfigError::InvalidValue {
                field: "bankroll",
                reason: "must be greater than 0".to_string(),
            });
        }
        if self.min_edge < Decimal::ZERO || self.min_edge >= Decimal::ONE {
            return Err(ConfigError::InvalidValue {
                field: "min_edge",
                reason: "must be in [0, 1)".to_string(),
            });
        }
        Ok(())
    }
}
