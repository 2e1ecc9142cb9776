//! Chemotaxis, swimming, reproduction, and elimination-dispersal.

use super::config::BfoConfig;
use crate::core::{clamp_unit, Candidate, Population};
use crate::engine::{StepContext, Strategy};
use crate::error::Result;
use crate::random::{create_rng, task_seeds};
use rand::Rng;

/// Bacterial foraging optimization.
///
/// One engine iteration runs the full structure: `nre` reproduction
/// rounds, each containing `nc` chemotaxis passes over all bacteria
/// (parallel per-bacterium tasks), followed by health-ranked reproduction;
/// then one elimination-dispersal sweep. Termination criteria only apply
/// between engine iterations, so a large configuration makes individual
/// iterations long — an accepted bound of the design.
///
/// Tumble directions are normalized by their true L2 norm; a zero-norm
/// draw leaves the bacterium in place instead of dividing by zero.
#[derive(Debug, Default)]
pub struct BacterialForaging {
    config: BfoConfig,
}

impl BacterialForaging {
    pub fn new(config: BfoConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }
}

/// Random direction of unit L2 length, or `None` for a zero-norm draw.
fn tumble_direction<R: Rng>(rng: &mut R, dim: usize) -> Option<Vec<f64>> {
    let raw: Vec<f64> = (0..dim).map(|_| rng.random_range(-1.0..1.0)).collect();
    let norm = raw.iter().map(|d| d * d).sum::<f64>().sqrt();
    if norm <= f64::EPSILON {
        return None;
    }
    Some(raw.into_iter().map(|d| d / norm).collect())
}

/// Moves `step_size` along `direction`, clamped to the unit hypercube.
fn advance(genes: &[f64], direction: &[f64], step_size: f64) -> Vec<f64> {
    genes
        .iter()
        .zip(direction)
        .map(|(&g, &d)| clamp_unit(g + step_size * d))
        .collect()
}

impl Strategy for BacterialForaging {
    fn name(&self) -> &'static str {
        "bacterial-foraging"
    }

    fn step(&mut self, population: &mut Population, ctx: &mut StepContext<'_>) -> Result<()> {
        let size = population.len();
        let dim = ctx.factory.dim();
        let config = self.config;
        let objective = ctx.objective;
        let best = ctx.best;

        for _round in 0..config.reproduction_rounds {
            // Health from the final chemotaxis pass ranks reproduction.
            let mut health = vec![0.0f64; size];

            for _pass in 0..config.chemotaxis_steps {
                let snapshot = population.snapshot();
                let items: Vec<(usize, u64)> = task_seeds(ctx.rng, size)
                    .into_iter()
                    .enumerate()
                    .collect();

                let moved = ctx.executor.scatter(items, |(index, seed)| {
                    let mut rng = create_rng(seed);
                    let mut current = snapshot[index].clone();
                    let mut accumulated = 0.0f64;

                    match tumble_direction(&mut rng, dim) {
                        None => {
                            // Degenerate draw: stay put, count the standing cost.
                            accumulated += current.cost();
                        }
                        Some(direction) => {
                            let mut previous = current.cost();
                            let mut next = Candidate::from_genes(advance(
                                current.genes(),
                                &direction,
                                config.step_size,
                            ));
                            next.set_cost(objective.cost(next.genes()));
                            best.set_if_better(&next);
                            accumulated += next.cost();
                            current = next;

                            // Swim while the cost keeps improving; the last
                            // step is kept even when it fails to improve.
                            let mut swims = 0;
                            while swims < config.swim_steps && current.cost() < previous {
                                previous = current.cost();
                                let mut next = Candidate::from_genes(advance(
                                    current.genes(),
                                    &direction,
                                    config.step_size,
                                ));
                                next.set_cost(objective.cost(next.genes()));
                                best.set_if_better(&next);
                                accumulated += next.cost();
                                current = next;
                                swims += 1;
                            }
                        }
                    }
                    Ok((index, current, accumulated))
                })?;

                for (index, bacterium, accumulated) in moved {
                    population.replace(index, bacterium);
                    health[index] = accumulated;
                }
            }

            // Reproduction: the healthier half replaces the other half with
            // copies of itself.
            let mut order: Vec<usize> = (0..size).collect();
            order.sort_by(|&a, &b| {
                health[a]
                    .partial_cmp(&health[b])
                    .unwrap_or(std::cmp::Ordering::Equal)
            });
            let survivor_count = (size / 2).max(1);
            let survivors: Vec<Candidate> = order[..survivor_count]
                .iter()
                .map(|&i| population[i].clone())
                .collect();
            let next: Vec<Candidate> = (0..size)
                .map(|slot| survivors[slot % survivor_count].clone())
                .collect();
            population.fill(next);
        }

        // Elimination-dispersal: each bacterium relocates with probability
        // `ped`.
        let mut relocated = Vec::new();
        for index in 0..size {
            if ctx.rng.random_range(0.0..1.0) < config.dispersal_probability {
                relocated.push((index, ctx.factory.random(ctx.rng)));
            }
        }
        if !relocated.is_empty() {
            let evaluated = ctx.executor.scatter(relocated, |(index, mut bacterium)| {
                bacterium.set_cost(objective.cost(bacterium.genes()));
                best.set_if_better(&bacterium);
                Ok((index, bacterium))
            })?;
            for (index, bacterium) in evaluated {
                population.replace(index, bacterium);
            }
        }

        population.sort();
        Ok(())
    }
}
