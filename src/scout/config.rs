//! Scout search configuration.

use crate::error::{EngineError, Result};

/// Configuration for scout/neighborhood search.
#[derive(Debug, Clone, Copy)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScoutConfig {
    /// Number of scouts: the best K candidates that each explore a local
    /// neighborhood. Must not exceed the population size.
    pub scouts: usize,

    /// Per-gene perturbation radius for neighborhood members.
    pub proximity: f64,
}

impl Default for ScoutConfig {
    fn default() -> Self {
        Self {
            scouts: 4,
            proximity: 0.1,
        }
    }
}

impl ScoutConfig {
    pub fn with_scouts(mut self, scouts: usize) -> Self {
        self.scouts = scouts;
        self
    }

    pub fn with_proximity(mut self, proximity: f64) -> Self {
        self.proximity = proximity;
        self
    }

    pub fn validate(&self) -> Result<()> {
        if self.scouts == 0 {
            return Err(EngineError::InvalidConfig(
                "scout count must be at least 1".into(),
            ));
        }
        if self.proximity <= 0.0 || self.proximity > 1.0 {
            return Err(EngineError::InvalidConfig(format!(
                "proximity must be in (0, 1], got {}",
                self.proximity
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_validates() {
        assert!(ScoutConfig::default().validate().is_ok());
    }

    #[test]
    fn test_zero_scouts_rejected() {
        assert!(ScoutConfig::default().with_scouts(0).validate().is_err());
    }

    #[test]
    fn test_bad_proximity_rejected() {
        assert!(ScoutConfig::default().with_proximity(0.0).validate().is_err());
        assert!(ScoutConfig::default().with_proximity(1.5).validate().is_err());
    }
}
