//! Metropolis walk with geometric cooling.

use super::config::SaConfig;
use crate::core::{clamp_unit, Candidate, Population};
use crate::engine::{StepContext, Strategy};
use crate::error::{EngineError, Result};
use rand::Rng;

/// Simulated annealing over a single current solution.
///
/// Each iteration perturbs every dimension by a delta scaled to a fifth of
/// the incumbent cost, applies the Metropolis acceptance rule, and cools
/// the temperature geometrically. Every sample is offered to the incumbent
/// tracker whether or not the walk accepts it; the current solution is
/// mirrored into population slot 0.
#[derive(Debug)]
pub struct SimulatedAnnealing {
    config: SaConfig,
    current: Option<Candidate>,
    temperature: f64,
}

impl SimulatedAnnealing {
    pub fn new(config: SaConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            temperature: config.initial_temperature,
            config,
            current: None,
        })
    }
}

/// Metropolis acceptance: improvements always pass; worsening moves pass
/// with probability `exp(-delta / temperature)`.
pub(crate) fn metropolis<R: Rng>(
    current_cost: f64,
    proposed_cost: f64,
    temperature: f64,
    rng: &mut R,
) -> bool {
    if proposed_cost < current_cost {
        return true;
    }
    if temperature <= 0.0 {
        return false;
    }
    (-(proposed_cost - current_cost) / temperature).exp() > rng.random_range(0.0..1.0)
}

impl Strategy for SimulatedAnnealing {
    fn name(&self) -> &'static str {
        "simulated-annealing"
    }

    fn initialize(&mut self, population: &Population, _ctx: &mut StepContext<'_>) -> Result<()> {
        self.current = population.best().cloned();
        self.temperature = self.config.initial_temperature;
        Ok(())
    }

    fn step(&mut self, population: &mut Population, ctx: &mut StepContext<'_>) -> Result<()> {
        let current = self.current.as_ref().ok_or(EngineError::NotInitialized)?;

        let best_cost = ctx.best.best_cost();
        let scale = if best_cost.is_finite() {
            best_cost / 5.0
        } else {
            1.0
        };

        let genes = current
            .genes()
            .iter()
            .map(|&g| clamp_unit(g + ctx.rng.random_range(-1.0..1.0) * scale))
            .collect();
        let mut neighbor = Candidate::from_genes(genes);
        neighbor.set_cost(ctx.objective.cost(neighbor.genes()));

        // Every sample feeds the incumbent, accepted or not.
        ctx.best.set_if_better(&neighbor);

        if metropolis(current.cost(), neighbor.cost(), self.temperature, ctx.rng) {
            self.current = Some(neighbor);
        }
        self.temperature *= self.config.alpha;

        if let Some(current) = &self.current {
            population.replace(0, current.clone());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::IterationLimit;
    use crate::engine::Engine;
    use crate::random::create_rng;

    fn bowl(genes: &[f64]) -> f64 {
        genes.iter().map(|x| (x - 0.5) * (x - 0.5)).sum()
    }

    #[test]
    fn test_metropolis_always_accepts_improvement() {
        let mut rng = create_rng(42);
        for _ in 0..100 {
            assert!(metropolis(10.0, 5.0, 1e-9, &mut rng));
        }
    }

    #[test]
    fn test_metropolis_rejects_at_zero_temperature() {
        let mut rng = create_rng(42);
        assert!(!metropolis(5.0, 10.0, 0.0, &mut rng));
    }

    #[test]
    fn test_metropolis_accepts_uphill_at_high_temperature() {
        let mut rng = create_rng(42);
        let accepted = (0..1000)
            .filter(|_| metropolis(5.0, 6.0, 1e8, &mut rng))
            .count();
        assert!(
            accepted > 950,
            "at extreme temperature nearly every move should pass, got {accepted}/1000"
        );
    }

    #[test]
    fn test_metropolis_deterministic_under_fixed_seed() {
        let decide = |seed: u64| -> Vec<bool> {
            let mut rng = create_rng(seed);
            (0..50)
                .map(|i| metropolis(1.0, 1.0 + (i as f64) * 0.1, 2.0, &mut rng))
                .collect()
        };
        assert_eq!(decide(42), decide(42));
        assert_ne!(decide(42), decide(43), "different seeds should diverge");
    }

    #[test]
    fn test_walk_improves_on_bowl() {
        let mut engine = Engine::builder(2)
            .objective(bowl)
            .strategy(SimulatedAnnealing::new(SaConfig::default()).expect("valid config"))
            .population_size(1)
            .seed(42)
            .build()
            .expect("engine builds");
        engine.init().expect("init succeeds");
        let initial = engine.best().expect("incumbent primed").cost();
        let result = engine
            .compute(&[&IterationLimit(500)])
            .expect("compute succeeds");
        assert!(
            result.best_cost < initial,
            "expected improvement from {initial}, got {}",
            result.best_cost
        );
    }

    #[test]
    fn test_samples_stay_in_bounds() {
        let mut engine = Engine::builder(4)
            .objective(|genes: &[f64]| genes.iter().sum::<f64>() + 10.0)
            .strategy(SimulatedAnnealing::new(SaConfig::default()).expect("valid config"))
            .population_size(1)
            .seed(7)
            .build()
            .expect("engine builds");
        engine.init().expect("init succeeds");
        engine
            .compute(&[&IterationLimit(200)])
            .expect("compute succeeds");
        for candidate in engine.population() {
            assert!(candidate.genes().iter().all(|&g| (0.0..=1.0).contains(&g)));
        }
    }
}
