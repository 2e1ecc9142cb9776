//! Bacterial foraging configuration.

use crate::error::{EngineError, Result};

/// Configuration for bacterial foraging optimization.
///
/// One engine iteration runs the complete reproduction/chemotaxis
/// structure, so the loop counts here directly scale the cost of a single
/// step.
#[derive(Debug, Clone, Copy)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BfoConfig {
    /// Tumble/swim step size `ci` applied along the unit direction.
    pub step_size: f64,

    /// Chemotaxis passes `nc` per reproduction round.
    pub chemotaxis_steps: usize,

    /// Maximum swim steps `ns` while the cost keeps improving.
    pub swim_steps: usize,

    /// Reproduction rounds `nre` per engine iteration.
    pub reproduction_rounds: usize,

    /// Probability `ped` that a bacterium is relocated to a uniformly
    /// random position after the reproduction rounds.
    pub dispersal_probability: f64,
}

impl Default for BfoConfig {
    fn default() -> Self {
        Self {
            step_size: 0.05,
            chemotaxis_steps: 10,
            swim_steps: 4,
            reproduction_rounds: 4,
            dispersal_probability: 0.1,
        }
    }
}

impl BfoConfig {
    pub fn with_step_size(mut self, step_size: f64) -> Self {
        self.step_size = step_size;
        self
    }

    pub fn with_chemotaxis_steps(mut self, steps: usize) -> Self {
        self.chemotaxis_steps = steps;
        self
    }

    pub fn with_swim_steps(mut self, steps: usize) -> Self {
        self.swim_steps = steps;
        self
    }

    pub fn with_reproduction_rounds(mut self, rounds: usize) -> Self {
        self.reproduction_rounds = rounds;
        self
    }

    pub fn with_dispersal_probability(mut self, probability: f64) -> Self {
        self.dispersal_probability = probability;
        self
    }

    pub fn validate(&self) -> Result<()> {
        if self.step_size <= 0.0 || self.step_size > 1.0 {
            return Err(EngineError::InvalidConfig(format!(
                "step_size must be in (0, 1], got {}",
                self.step_size
            )));
        }
        if self.chemotaxis_steps == 0 {
            return Err(EngineError::InvalidConfig(
                "chemotaxis_steps must be at least 1".into(),
            ));
        }
        if self.reproduction_rounds == 0 {
            return Err(EngineError::InvalidConfig(
                "reproduction_rounds must be at least 1".into(),
            ));
        }
        if !(0.0..=1.0).contains(&self.dispersal_probability) {
            return Err(EngineError::InvalidConfig(format!(
                "dispersal_probability must be in [0, 1], got {}",
                self.dispersal_probability
            )));
        }
        Ok(())
    }
}
