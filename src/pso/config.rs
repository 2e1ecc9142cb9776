//! PSO configuration.

use crate::error::{EngineError, Result};

/// Configuration for particle swarm optimization.
///
/// # Examples
///
/// ```
/// use polyheur::pso::PsoConfig;
///
/// let config = PsoConfig::default().with_inertia(0.6).with_max_velocity(0.5);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, Copy)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PsoConfig {
    /// Inertia weight ω on the previous velocity.
    pub inertia: f64,

    /// Cognitive coefficient c1 pulling toward the personal best.
    pub cognitive: f64,

    /// Social coefficient c2 pulling toward the global best.
    pub social: f64,

    /// Per-dimension velocity magnitude cap.
    pub max_velocity: f64,
}

impl Default for PsoConfig {
    fn default() -> Self {
        Self {
            inertia: 0.7,
            cognitive: 1.5,
            social: 1.5,
            max_velocity: 1.0,
        }
    }
}

impl PsoConfig {
    pub fn with_inertia(mut self, inertia: f64) -> Self {
        self.inertia = inertia;
        self
    }

    pub fn with_cognitive(mut self, cognitive: f64) -> Self {
        self.cognitive = cognitive;
        self
    }

    pub fn with_social(mut self, social: f64) -> Self {
        self.social = social;
        self
    }

    pub fn with_max_velocity(mut self, max_velocity: f64) -> Self {
        self.max_velocity = max_velocity;
        self
    }

    pub fn validate(&self) -> Result<()> {
        if !(0.0..=1.0).contains(&self.inertia) {
            return Err(EngineError::InvalidConfig(format!(
                "inertia must be in [0, 1], got {}",
                self.inertia
            )));
        }
        if self.cognitive < 0.0 || self.social < 0.0 {
            return Err(EngineError::InvalidConfig(
                "cognitive and social coefficients must be non-negative".into(),
            ));
        }
        if self.max_velocity <= 0.0 {
            return Err(EngineError::InvalidConfig(format!(
                "max_velocity must be positive, got {}",
                self.max_velocity
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
        assert!(PsoConfig::default().validate().is_ok());
    }

    #[test]
    fn test_bad_inertia_rejected() {
        assert!(PsoConfig::default().with_inertia(1.5).validate().is_err());
        assert!(PsoConfig::default().with_inertia(-0.1).validate().is_err());
    }

    #[test]
    fn test_bad_velocity_rejected() {
        assert!(PsoConfig::default().with_max_velocity(0.0).validate().is_err());
    }

    #[test]
    fn test_negative_coefficients_rejected() {
        assert!(PsoConfig::default().with_cognitive(-1.0).validate().is_err());
        assert!(PsoConfig::default().with_social(-1.0).validate().is_err());
    }
}
