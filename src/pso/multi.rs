//! Multi-swarm PSO: independent sub-swarms with a shared global incumbent.

use super::config::PsoConfig;
use super::strategy::advance_particle;
use crate::core::{Candidate, Population};
use crate::engine::{StepContext, Strategy};
use crate::error::{EngineError, Result};
use crate::random::{create_rng, task_seeds};

/// Configuration for multi-swarm PSO.
#[derive(Debug, Clone, Copy)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MultiSwarmConfig {
    /// Base velocity-update parameters shared by all swarms.
    pub pso: PsoConfig,

    /// Number of independent swarms the population is partitioned into.
    pub swarm_count: usize,

    /// Attraction coefficient c3 toward the particle's swarm best.
    pub swarm_attraction: f64,
}

impl Default for MultiSwarmConfig {
    fn default() -> Self {
        Self {
            pso: PsoConfig::default(),
            swarm_count: 4,
            swarm_attraction: 1.0,
        }
    }
}

impl MultiSwarmConfig {
    pub fn with_pso(mut self, pso: PsoConfig) -> Self {
        self.pso = pso;
        self
    }

    pub fn with_swarm_count(mut self, count: usize) -> Self {
        self.swarm_count = count;
        self
    }

    pub fn with_swarm_attraction(mut self, attraction: f64) -> Self {
        self.swarm_attraction = attraction;
        self
    }

    pub fn validate(&self) -> Result<()> {
        self.pso.validate()?;
        if self.swarm_count == 0 {
            return Err(EngineError::InvalidConfig(
                "swarm_count must be at least 1".into(),
            ));
        }
        if self.swarm_attraction < 0.0 {
            return Err(EngineError::InvalidConfig(format!(
                "swarm_attraction must be non-negative, got {}",
                self.swarm_attraction
            )));
        }
        Ok(())
    }
}

/// Multi-swarm particle swarm optimization.
///
/// The population is partitioned into contiguous swarms; each particle is
/// pulled toward its personal best, its swarm best, and the global
/// incumbent. After every move the three bests update in that order.
/// Swarm bests are owned copies, never aliases of population slots.
#[derive(Debug, Default)]
pub struct MultiSwarm {
    config: MultiSwarmConfig,
    velocities: Vec<Vec<f64>>,
    personal_best: Vec<Candidate>,
    swarm_best: Vec<Candidate>,
    assignment: Vec<usize>,
}

impl MultiSwarm {
    pub fn new(config: MultiSwarmConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            config,
            velocities: Vec::new(),
            personal_best: Vec::new(),
            swarm_best: Vec::new(),
            assignment: Vec::new(),
        })
    }
}

impl Strategy for MultiSwarm {
    fn name(&self) -> &'static str {
        "multi-swarm-pso"
    }

    fn initialize(&mut self, population: &Population, ctx: &mut StepContext<'_>) -> Result<()> {
        let len = population.len();
        let swarms = self.config.swarm_count;
        if swarms > len {
            return Err(EngineError::InvalidConfig(format!(
                "{swarms} swarms cannot partition a population of {len}"
            )));
        }

        let dim = ctx.factory.dim();
        self.velocities = vec![vec![0.0; dim]; len];
        self.personal_best = population.snapshot();

        // Contiguous balanced partition; every swarm gets at least one slot.
        self.assignment = (0..len).map(|i| i * swarms / len).collect();
        self.swarm_best = vec![Candidate::from_genes(vec![0.0; dim]); swarms];
        let mut seen = vec![false; swarms];
        for (i, &swarm) in self.assignment.iter().enumerate() {
            let member = &population[i];
            if !seen[swarm] || member.cost() < self.swarm_best[swarm].cost() {
                self.swarm_best[swarm] = member.clone();
                seen[swarm] = true;
            }
        }
        Ok(())
    }

    fn step(&mut self, population: &mut Population, ctx: &mut StepContext<'_>) -> Result<()> {
        let snapshot = population.snapshot();
        let global = ctx.best.get().ok_or(EngineError::NotInitialized)?;
        let config = self.config;
        let objective = ctx.objective;
        let velocities = &self.velocities;
        let personal = &self.personal_best;
        let swarm_best = &self.swarm_best;
        let assignment = &self.assignment;

        let items: Vec<(usize, u64)> = task_seeds(ctx.rng, snapshot.len())
            .into_iter()
            .enumerate()
            .collect();

        let moves = ctx.executor.scatter(items, |(particle, seed)| {
            let mut rng = create_rng(seed);
            let position = snapshot[particle].genes();
            let attractors = [
                (personal[particle].genes(), config.pso.cognitive),
                (swarm_best[assignment[particle]].genes(), config.swarm_attraction),
                (global.genes(), config.pso.social),
            ];
            let (genes, velocity) = advance_particle(
                position,
                &velocities[particle],
                &attractors,
                &config.pso,
                &mut rng,
            );
            let mut moved = Candidate::from_genes(genes);
            moved.set_cost(objective.cost(moved.genes()));
            Ok((particle, moved, velocity))
        })?;

        // Apply order per particle: personal best, swarm best, global.
        for (particle, moved, velocity) in moves {
            self.velocities[particle] = velocity;
            if moved.cost() < self.personal_best[particle].cost() {
                self.personal_best[particle] = moved.clone();
            }
            let swarm = self.assignment[particle];
            if moved.cost() < self.swarm_best[swarm].cost() {
                self.swarm_best[swarm] = moved.clone();
            }
            ctx.best.set_if_better(&moved);
            population.replace(particle, moved);
        }
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
    fn test_more_swarms_than_particles_rejected() {
        let mut engine = Engine::builder(2)
            .objective(bowl)
            .strategy(
                MultiSwarm::new(MultiSwarmConfig::default().with_swarm_count(10))
                    .expect("valid config"),
            )
            .population_size(4)
            .build()
            .expect("engine builds");
        assert!(matches!(engine.init(), Err(EngineError::InvalidConfig(_))));
    }

    #[test]
    fn test_partition_covers_every_swarm() {
        let mut engine = Engine::builder(2)
            .objective(bowl)
            .strategy(
                MultiSwarm::new(MultiSwarmConfig::default().with_swarm_count(3))
                    .expect("valid config"),
            )
            .population_size(10)
            .seed(42)
            .build()
            .expect("engine builds");
        engine.init().expect("init succeeds");
        engine
            .compute(&[&IterationLimit(3)])
            .expect("compute succeeds");
        assert_eq!(engine.population().len(), 10);
    }

    #[test]
    fn test_zero_swarms_rejected_at_construction() {
        assert!(MultiSwarm::new(MultiSwarmConfig::default().with_swarm_count(0)).is_err());
    }

    #[test]
    fn test_converges_on_bowl() {
        let mut engine = Engine::builder(3)
            .objective(bowl)
            .strategy(MultiSwarm::new(MultiSwarmConfig::default()).expect("valid config"))
            .population_size(16)
            .seed(42)
            .build()
            .expect("engine builds");
        engine.init().expect("init succeeds");
        let result = engine
            .compute(&[&IterationLimit(300)])
            .expect("compute succeeds");
        assert!(
            result.best_cost < 1e-2,
            "expected multi-swarm PSO to reach < 1e-2, got {}",
            result.best_cost
        );
    }
}
