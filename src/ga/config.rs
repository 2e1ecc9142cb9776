//! GA configuration.

use super::selection::Selection;
use crate::error::{EngineError, Result};

/// Configuration for the genetic algorithm.
///
/// # Examples
///
/// ```
/// use polyheur::ga::{GaConfig, Selection};
///
/// let config = GaConfig::default()
///     .with_elitism(0.2)
///     .with_selection(Selection::StochasticUniversal)
///     .with_mutation_rate(0.05);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, Copy)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GaConfig {
    /// Fraction of the population copied unchanged into the next
    /// generation. Typical range: 0.05–0.2.
    pub elitism: f64,

    /// Fraction of the population selected as parents and carried into the
    /// next generation alongside their offspring.
    pub selection_rate: f64,

    /// Probability that a parent pair undergoes blend crossover; otherwise
    /// both parents pass through unchanged.
    pub crossover_rate: f64,

    /// Fraction of offspring genes mutated per generation.
    pub mutation_rate: f64,

    /// Probability that a mutated gene is reset to a fresh random value
    /// instead of being perturbed by a bounded delta.
    pub reset_probability: f64,

    /// Largest per-gene perturbation delta. Perturbed values are redrawn
    /// until they stay inside the unit interval.
    pub max_step: f64,

    /// Parent-selection operator.
    pub selection: Selection,
}

impl Default for GaConfig {
    fn default() -> Self {
        Self {
            elitism: 0.1,
            selection_rate: 0.5,
            crossover_rate: 0.9,
            mutation_rate: 0.1,
            reset_probability: 0.5,
            max_step: 0.1,
            selection: Selection::default(),
        }
    }
}

impl GaConfig {
    pub fn with_elitism(mut self, elitism: f64) -> Self {
        self.elitism = elitism;
        self
    }

    pub fn with_selection_rate(mut self, rate: f64) -> Self {
        self.selection_rate = rate;
        self
    }

    pub fn with_crossover_rate(mut self, rate: f64) -> Self {
        self.crossover_rate = rate;
        self
    }

    pub fn with_mutation_rate(mut self, rate: f64) -> Self {
        self.mutation_rate = rate;
        self
    }

    pub fn with_reset_probability(mut self, probability: f64) -> Self {
        self.reset_probability = probability;
        self
    }

    pub fn with_max_step(mut self, step: f64) -> Self {
        self.max_step = step;
        self
    }

    pub fn with_selection(mut self, selection: Selection) -> Self {
        self.selection = selection;
        self
    }

    pub fn validate(&self) -> Result<()> {
        for (name, value) in [
            ("elitism", self.elitism),
            ("selection_rate", self.selection_rate),
            ("crossover_rate", self.crossover_rate),
            ("mutation_rate", self.mutation_rate),
            ("reset_probability", self.reset_probability),
        ] {
            if !(0.0..=1.0).contains(&value) {
                return Err(EngineError::InvalidConfig(format!(
                    "{name} must be in [0, 1], got {value}"
                )));
            }
        }
        if self.max_step <= 0.0 || self.max_step > 1.0 {
            return Err(EngineError::InvalidConfig(format!(
                "max_step must be in (0, 1], got {}",
                self.max_step
            )));
        }
        if let Selection::Tournament(k) = self.selection {
            if k == 0 {
                return Err(EngineError::InvalidConfig(
                    "tournament size must be at least 1".into(),
                ));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_validates() {
        assert!(GaConfig::default().validate().is_ok());
    }

    #[test]
    fn test_rate_out_of_range_rejected() {
        assert!(GaConfig::default().with_elitism(1.5).validate().is_err());
        assert!(GaConfig::default().with_mutation_rate(-0.1).validate().is_err());
    }

    #[test]
    fn test_bad_max_step_rejected() {
        assert!(GaConfig::default().with_max_step(0.0).validate().is_err());
        assert!(GaConfig::default().with_max_step(1.5).validate().is_err());
    }

    #[test]
    fn test_zero_tournament_rejected() {
        let config = GaConfig::default().with_selection(Selection::Tournament(0));
        assert!(config.validate().is_err());
    }
}
