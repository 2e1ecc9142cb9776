//! DE/rand/1/bin update rule.

use super::config::DeConfig;
use crate::core::{clamp_unit, Candidate, Population};
use crate::engine::{StepContext, Strategy};
use crate::error::{EngineError, Result};
use crate::random::{create_rng, task_seeds};
use rand::Rng;

/// Differential evolution with binomial crossover and greedy per-slot
/// selection.
///
/// Each iteration builds one trial per slot on the worker pool: three
/// distinct partners (none equal to the slot itself) supply the mutant
/// vector, one forced dimension guarantees at least one mutated gene, and
/// the trial replaces the slot only when its cost is strictly lower.
#[derive(Debug, Default)]
pub struct DifferentialEvolution {
    config: DeConfig,
}

impl DifferentialEvolution {
    pub fn new(config: DeConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }
}

/// Three distinct partner indices, all different from `exclude`.
fn pick_partners<R: Rng>(rng: &mut R, len: usize, exclude: usize) -> [usize; 3] {
    let mut chosen = [exclude; 3];
    let mut filled = 0;
    while filled < 3 {
        let index = rng.random_range(0..len);
        if index != exclude && !chosen[..filled].contains(&index) {
            chosen[filled] = index;
            filled += 1;
        }
    }
    chosen
}

impl Strategy for DifferentialEvolution {
    fn name(&self) -> &'static str {
        "differential-evolution"
    }

    fn initialize(&mut self, population: &Population, _ctx: &mut StepContext<'_>) -> Result<()> {
        if population.len() < 4 {
            return Err(EngineError::InvalidConfig(format!(
                "differential evolution needs a population of at least 4, got {}",
                population.len()
            )));
        }
        Ok(())
    }

    fn step(&mut self, population: &mut Population, ctx: &mut StepContext<'_>) -> Result<()> {
        let snapshot = population.snapshot();
        let len = snapshot.len();
        let dim = ctx.factory.dim();
        let config = self.config;
        let objective = ctx.objective;

        let items: Vec<(usize, u64)> =
            task_seeds(ctx.rng, len).into_iter().enumerate().collect();

        let replacements = ctx.executor.scatter(items, |(slot, seed)| {
            let mut rng = create_rng(seed);
            let [r1, r2, r3] = pick_partners(&mut rng, len, slot);
            let base = &snapshot[slot];
            let (a, b, c) = (&snapshot[r1], &snapshot[r2], &snapshot[r3]);

            let forced = rng.random_range(0..dim);
            let mut genes = Vec::with_capacity(dim);
            for d in 0..dim {
                let gene = if d == forced || rng.random_range(0.0..1.0) < config.crossover {
                    a.genes()[d] + config.weight * (b.genes()[d] - c.genes()[d])
                } else {
                    base.genes()[d]
                };
                genes.push(clamp_unit(gene));
            }

            let mut trial = Candidate::from_genes(genes);
            trial.set_cost(objective.cost(trial.genes()));

            // Greedy per-slot selection: strictly lower cost replaces.
            Ok((trial.cost() < base.cost()).then_some((slot, trial)))
        })?;

        for (slot, trial) in replacements.into_iter().flatten() {
            population.replace(slot, trial);
        }
        Ok(())
    }
}
