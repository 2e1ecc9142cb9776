//! Nelder-Mead coefficients.

use crate::error::{EngineError, Result};

/// Configuration for the Nelder-Mead simplex strategy.
#[derive(Debug, Clone, Copy)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NelderMeadConfig {
    /// Reflection coefficient α.
    pub reflection: f64,

    /// Contraction coefficient β.
    pub contraction: f64,

    /// Expansion coefficient γ.
    pub expansion: f64,
}

impl Default for NelderMeadConfig {
    fn default() -> Self {
        Self {
            reflection: 1.0,
            contraction: 0.5,
            expansion: 2.0,
        }
    }
}

impl NelderMeadConfig {
    pub fn with_reflection(mut self, reflection: f64) -> Self {
        self.reflection = reflection;
        self
    }

    pub fn with_contraction(mut self, contraction: f64) -> Self {
        self.contraction = contraction;
        self
    }

    pub fn with_expansion(mut self, expansion: f64) -> Self {
        self.expansion = expansion;
        self
    }

    pub fn validate(&self) -> Result<()> {
        if self.reflection <= 0.0 {
            return Err(EngineError::InvalidConfig(format!(
                "reflection coefficient must be positive, got {}",
                self.reflection
            )));
        }
        if self.contraction <= 0.0 || self.contraction >= 1.0 {
            return Err(EngineError::InvalidConfig(format!(
                "contraction coefficient must be in (0, 1), got {}",
                self.contraction
            )));
        }
        if self.expansion <= 1.0 {
            return Err(EngineError::InvalidConfig(format!(
                "expansion coefficient must exceed 1, got {}",
                self.expansion
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
        assert!(NelderMeadConfig::default().validate().is_ok());
    }

    #[test]
    fn test_bad_coefficients_rejected() {
        assert!(NelderMeadConfig::default().with_reflection(0.0).validate().is_err());
        assert!(NelderMeadConfig::default().with_contraction(1.0).validate().is_err());
        assert!(NelderMeadConfig::default().with_expansion(0.9).validate().is_err());
    }
}
