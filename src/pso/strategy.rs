//! Single-swarm velocity/position update.

use super::config::PsoConfig;
use crate::core::{clamp_unit, Candidate, Population};
use crate::engine::{StepContext, Strategy};
use crate::error::{EngineError, Result};
use crate::random::{create_rng, task_seeds};
use rand::Rng;

/// Particle swarm optimization.
///
/// Particle state (velocity, personal best) lives inside the strategy;
/// population slots mirror the particle positions. Personal bests are
/// owned copies — they never alias a population slot's gene buffer, so a
/// later slot replacement cannot corrupt them.
#[derive(Debug, Default)]
pub struct ParticleSwarm {
    config: PsoConfig,
    velocities: Vec<Vec<f64>>,
    personal_best: Vec<Candidate>,
}

impl ParticleSwarm {
    pub fn new(config: PsoConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            config,
            velocities: Vec::new(),
            personal_best: Vec::new(),
        })
    }
}

/// One particle's velocity and position update.
pub(super) fn advance_particle<R: Rng>(
    position: &[f64],
    velocity: &[f64],
    attractors: &[(&[f64], f64)],
    config: &PsoConfig,
    rng: &mut R,
) -> (Vec<f64>, Vec<f64>) {
    let dim = position.len();
    let mut next_velocity = Vec::with_capacity(dim);
    let mut next_position = Vec::with_capacity(dim);
    for d in 0..dim {
        let mut v = config.inertia * velocity[d];
        for (target, coefficient) in attractors {
            v += rng.random_range(0.0..1.0) * coefficient * (target[d] - position[d]);
        }
        let v = v.clamp(-config.max_velocity, config.max_velocity);
        next_position.push(clamp_unit(position[d] + v));
        next_velocity.push(v);
    }
    (next_position, next_velocity)
}

impl Strategy for ParticleSwarm {
    fn name(&self) -> &'static str {
        "particle-swarm"
    }

    fn initialize(&mut self, population: &Population, ctx: &mut StepContext<'_>) -> Result<()> {
        let dim = ctx.factory.dim();
        self.velocities = vec![vec![0.0; dim]; population.len()];
        self.personal_best = population.snapshot();
        Ok(())
    }

    fn step(&mut self, population: &mut Population, ctx: &mut StepContext<'_>) -> Result<()> {
        let snapshot = population.snapshot();
        let global = ctx.best.get().ok_or(EngineError::NotInitialized)?;
        let config = self.config;
        let objective = ctx.objective;
        let velocities = &self.velocities;
        let personal = &self.personal_best;

        let items: Vec<(usize, u64)> = task_seeds(ctx.rng, snapshot.len())
            .into_iter()
            .enumerate()
            .collect();

        let moves = ctx.executor.scatter(items, |(particle, seed)| {
            let mut rng = create_rng(seed);
            let position = snapshot[particle].genes();
            let attractors = [
                (personal[particle].genes(), config.cognitive),
                (global.genes(), config.social),
            ];
            let (genes, velocity) = advance_particle(
                position,
                &velocities[particle],
                &attractors,
                &config,
                &mut rng,
            );
            let mut moved = Candidate::from_genes(genes);
            moved.set_cost(objective.cost(moved.genes()));
            Ok((particle, moved, velocity))
        })?;

        for (particle, moved, velocity) in moves {
            self.velocities[particle] = velocity;
            if moved.cost() < self.personal_best[particle].cost() {
                self.personal_best[particle] = moved.clone();
            }
            ctx.best.set_if_better(&moved);
            population.replace(particle, moved);
        }
        Ok(())
    }
}
