//! DE configuration.

use crate::error::{EngineError, Result};

/// Configuration for differential evolution.
///
/// # Examples
///
/// ```
/// use polyheur::de::DeConfig;
///
/// let config = DeConfig::default().with_weight(0.5).with_crossover(0.7);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, Copy)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DeConfig {
    /// Differential weight F applied to the partner difference vector.
    ///
    /// Typical range: 0.4–1.0.
    pub weight: f64,

    /// Crossover probability CR per dimension.
    pub crossover: f64,
}

impl Default for DeConfig {
    fn default() -> Self {
        Self {
            weight: 0.8,
            crossover: 0.9,
        }
    }
}

impl DeConfig {
    pub fn with_weight(mut self, weight: f64) -> Self {
        self.weight = weight;
        self
    }

    pub fn with_crossover(mut self, crossover: f64) -> Self {
        self.crossover = crossover;
        self
    }

    pub fn validate(&self) -> Result<()> {
        if self.weight <= 0.0 || self.weight > 2.0 {
            return Err(EngineError::InvalidConfig(format!(
                "differential weight must be in (0, 2], got {}",
                self.weight
            )));
        }
        if !(0.0..=1.0).contains(&self.crossover) {
            return Err(EngineError::InvalidConfig(format!(
                "crossover probability must be in [0, 1], got {}",
                self.crossover
            )));
        }
        Ok(())
    }
}
