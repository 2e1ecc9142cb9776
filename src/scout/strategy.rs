//! Scout neighborhood update.

use super::config::ScoutConfig;
use crate::core::{Candidate, Population};
use crate::engine::{StepContext, Strategy};
use crate::error::{EngineError, Result};
use crate::random::{create_rng, task_seeds};

/// Scout/neighborhood search.
///
/// Each iteration the K best candidates become scouts. Every scout spawns
/// a neighborhood of `N/K − 1` perturbed copies (parallel per-scout tasks)
/// and is replaced by the neighborhood's best; all remaining slots refill
/// with fresh random candidates, keeping exploration pressure constant.
#[derive(Debug, Default)]
pub struct ScoutSearch {
    config: ScoutConfig,
}

impl ScoutSearch {
    pub fn new(config: ScoutConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }
}

impl Strategy for ScoutSearch {
    fn name(&self) -> &'static str {
        "scout-search"
    }

    fn initialize(&mut self, population: &Population, _ctx: &mut StepContext<'_>) -> Result<()> {
        if self.config.scouts > population.len() {
            return Err(EngineError::InvalidConfig(format!(
                "{} scouts exceed the population size {}",
                self.config.scouts,
                population.len()
            )));
        }
        Ok(())
    }

    fn step(&mut self, population: &mut Population, ctx: &mut StepContext<'_>) -> Result<()> {
        population.sort();
        let size = population.len();
        let scouts = self.config.scouts;
        let neighborhood = (size / scouts).saturating_sub(1);
        let proximity = self.config.proximity;
        let objective = ctx.objective;
        let best = ctx.best;
        let factory = ctx.factory;

        let leaders = population.best_prefix(scouts);
        let items: Vec<(Candidate, u64)> = leaders
            .into_iter()
            .zip(task_seeds(ctx.rng, scouts))
            .collect();

        let winners = ctx.executor.scatter(items, |(scout, seed)| {
            let mut rng = create_rng(seed);
            let mut winner = scout.clone();
            for _ in 0..neighborhood {
                let mut member = factory.neighbor(&scout, proximity, &mut rng);
                member.set_cost(objective.cost(member.genes()));
                best.set_if_better(&member);
                if member.cost() < winner.cost() {
                    winner = member;
                }
            }
            Ok(winner)
        })?;

        population.fill(winners);
        population.restore_capacity(factory, ctx.rng);
        let evaluated = ctx.evaluate_all(population.snapshot())?;
        population.fill(evaluated);
        population.sort();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::IterationLimit;
    use crate::engine::Engine;

    fn bowl(genes: &[f64]) -> f64 {
        genes.iter().map(|x| (x - 0.5) * (x - 0.5)).sum()
    }

    #[test]
    fn test_more_scouts_than_population_rejected() {
        let mut engine = Engine::builder(2)
            .objective(bowl)
            .strategy(ScoutSearch::new(ScoutConfig::default().with_scouts(9)).expect("valid config"))
            .population_size(4)
            .build()
            .expect("engine builds");
        assert!(matches!(engine.init(), Err(EngineError::InvalidConfig(_))));
    }

    #[test]
    fn test_population_size_preserved() {
        // 3 scouts over 10 slots: neighborhoods of 2, plus random refills.
        let mut engine = Engine::builder(2)
            .objective(bowl)
            .strategy(ScoutSearch::new(ScoutConfig::default().with_scouts(3)).expect("valid config"))
            .population_size(10)
            .seed(42)
            .build()
            .expect("engine builds");
        engine.init().expect("init succeeds");
        engine
            .compute(&[&IterationLimit(5)])
            .expect("compute succeeds");
        assert_eq!(engine.population().len(), 10);
    }

    #[test]
    fn test_scout_winner_at_least_as_good_as_scout() {
        let mut engine = Engine::builder(3)
            .objective(bowl)
            .strategy(ScoutSearch::new(ScoutConfig::default()).expect("valid config"))
            .population_size(12)
            .seed(7)
            .build()
            .expect("engine builds");
        engine.init().expect("init succeeds");
        let best_before = engine.best().expect("incumbent primed").cost();
        let next = engine.iterations() + 1;
        let result = engine
            .compute(&[&IterationLimit(next)])
            .expect("compute succeeds");
        // The best scout keeps itself unless a neighbor improves on it.
        assert!(result.best_cost <= best_before);
    }

    #[test]
    fn test_converges_on_bowl() {
        let mut engine = Engine::builder(2)
            .objective(bowl)
            .strategy(ScoutSearch::new(ScoutConfig::default()).expect("valid config"))
            .population_size(20)
            .seed(42)
            .build()
            .expect("engine builds");
        engine.init().expect("init succeeds");
        let result = engine
            .compute(&[&IterationLimit(200)])
            .expect("compute succeeds");
        assert!(
            result.best_cost < 1e-2,
            "expected scout search to close in on the bowl minimum, got {}",
            result.best_cost
        );
    }
}
