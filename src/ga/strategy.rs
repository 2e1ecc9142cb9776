//! GA generational update: elites, parents, blend crossover, bounded
//! mutation, reassembly.

use super::config::GaConfig;
use crate::core::{Candidate, Population};
use crate::engine::{StepContext, Strategy};
use crate::error::Result;
use rand::Rng;

/// Generational genetic algorithm over real-valued encodings.
///
/// Each generation: the elite prefix survives unchanged, parents are
/// selected by inverse-cost pressure, blend crossover produces offspring,
/// a configurable share of offspring genes mutates, and the working set is
/// padded or truncated back to the configured size before re-evaluation.
#[derive(Debug, Default)]
pub struct GeneticAlgorithm {
    config: GaConfig,
}

impl GeneticAlgorithm {
    pub fn new(config: GaConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }
}

/// Per-gene arithmetic blend; both children stay inside the parents' hull.
///
/// # Panics
/// Panics if the parents have different lengths.
fn blend<R: Rng>(a: &[f64], b: &[f64], rng: &mut R) -> (Vec<f64>, Vec<f64>) {
    assert_eq!(a.len(), b.len(), "parents must have equal length");
    let mut first = Vec::with_capacity(a.len());
    let mut second = Vec::with_capacity(a.len());
    for (&x, &y) in a.iter().zip(b) {
        let share: f64 = rng.random_range(0.0..1.0);
        first.push(share * x + (1.0 - share) * y);
        second.push(share * y + (1.0 - share) * x);
    }
    (first, second)
}

fn mutate<R: Rng>(offspring: &mut [Vec<f64>], config: &GaConfig, rng: &mut R) {
    if offspring.is_empty() {
        return;
    }
    let dim = offspring[0].len();
    let total_genes = offspring.len() * dim;
    let mutations = (config.mutation_rate * total_genes as f64).round() as usize;
    for _ in 0..mutations {
        let child = rng.random_range(0..offspring.len());
        let gene = rng.random_range(0..dim);
        if rng.random_range(0.0..1.0) < config.reset_probability {
            offspring[child][gene] = rng.random_range(0.0..1.0);
        } else {
            // Reject-and-retry: redraw the delta until the gene stays in bounds.
            loop {
                let perturbed =
                    offspring[child][gene] + rng.random_range(-config.max_step..config.max_step);
                if (0.0..=1.0).contains(&perturbed) {
                    offspring[child][gene] = perturbed;
                    break;
                }
            }
        }
    }
}

impl Strategy for GeneticAlgorithm {
    fn name(&self) -> &'static str {
        "genetic-algorithm"
    }

    fn step(&mut self, population: &mut Population, ctx: &mut StepContext<'_>) -> Result<()> {
        population.sort();
        let size = population.len();
        let config = self.config;

        let elite_count = (config.elitism * size as f64) as usize;
        let parent_count = (config.selection_rate * size as f64) as usize;

        let elites = population.best_prefix(elite_count);
        let parent_indices = config
            .selection
            .select_parents(population, parent_count, ctx.rng);
        let parents: Vec<Candidate> = parent_indices
            .iter()
            .map(|&i| population[i].clone())
            .collect();

        let offspring_needed = size.saturating_sub(elite_count + parents.len());
        let mut offspring: Vec<Vec<f64>> = Vec::with_capacity(offspring_needed);
        if parents.len() >= 2 {
            let mut pair = 0usize;
            while offspring.len() < offspring_needed {
                let p1 = &parents[pair % parents.len()];
                let p2 = &parents[(pair + 1) % parents.len()];
                pair += 2;
                if ctx.rng.random_range(0.0..1.0) < config.crossover_rate {
                    let (c1, c2) = blend(p1.genes(), p2.genes(), ctx.rng);
                    offspring.push(c1);
                    if offspring.len() < offspring_needed {
                        offspring.push(c2);
                    }
                } else {
                    offspring.push(p1.genes().to_vec());
                    if offspring.len() < offspring_needed {
                        offspring.push(p2.genes().to_vec());
                    }
                }
            }
        }

        mutate(&mut offspring, &config, ctx.rng);

        let mut next = elites;
        next.extend(parents);
        next.extend(offspring.into_iter().map(Candidate::from_genes));

        population.fill(next);
        population.restore_capacity(ctx.factory, ctx.rng);
        let evaluated = ctx.evaluate_all(population.snapshot())?;
        population.fill(evaluated);
        population.sort();
        Ok(())
    }
}
