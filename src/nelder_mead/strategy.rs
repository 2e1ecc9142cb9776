//! Simplex reflect/expand/contract/shrink update.

use super::config::NelderMeadConfig;
use crate::core::{clamp_unit, Candidate, Population};
use crate::engine::{StepContext, Strategy};
use crate::error::{EngineError, Result};

/// Nelder-Mead ("amoeba") simplex search.
///
/// The population is the simplex, kept in ascending-cost order. Each
/// iteration reflects the worst vertex through the centroid of the rest;
/// depending on how the reflected point ranks, the step expands, accepts,
/// contracts, or shrinks the whole simplex toward the best vertex. A
/// degenerate simplex (all vertices identical) makes no progress but
/// raises no error.
#[derive(Debug, Default)]
pub struct NelderMead {
    config: NelderMeadConfig,
}

impl NelderMead {
    pub fn new(config: NelderMeadConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }
}

/// `origin + factor · (target − origin)` per dimension, clamped.
fn move_toward(origin: &[f64], target: &[f64], factor: f64) -> Vec<f64> {
    origin
        .iter()
        .zip(target)
        .map(|(&o, &t)| clamp_unit(o + factor * (t - o)))
        .collect()
}

impl Strategy for NelderMead {
    fn name(&self) -> &'static str {
        "nelder-mead"
    }

    fn initialize(&mut self, population: &Population, _ctx: &mut StepContext<'_>) -> Result<()> {
        if population.len() < 3 {
            return Err(EngineError::InvalidConfig(format!(
                "the simplex needs at least 3 vertices, got {}",
                population.len()
            )));
        }
        Ok(())
    }

    fn step(&mut self, population: &mut Population, ctx: &mut StepContext<'_>) -> Result<()> {
        population.sort();
        let len = population.len();
        let dim = ctx.factory.dim();
        let worst = len - 1;

        // Centroid of every vertex except the worst.
        let mut centroid = vec![0.0; dim];
        for vertex in population.iter().take(worst) {
            for (c, &g) in centroid.iter_mut().zip(vertex.genes()) {
                *c += g;
            }
        }
        for c in centroid.iter_mut() {
            *c /= worst as f64;
        }

        let worst_genes = population[worst].genes().to_vec();
        let worst_cost = population[worst].cost();
        let best_cost = population[0].cost();
        let second_worst_cost = population[len - 2].cost();

        let evaluate = |genes: Vec<f64>| -> Candidate {
            let mut candidate = Candidate::from_genes(genes);
            candidate.set_cost(ctx.objective.cost(candidate.genes()));
            candidate
        };

        // Reflect the worst vertex through the centroid.
        let reflected = evaluate(move_toward(&centroid, &worst_genes, -self.config.reflection));

        if reflected.cost() < best_cost {
            // Strong direction; try stretching further out.
            let expanded = evaluate(move_toward(&centroid, reflected.genes(), self.config.expansion));
            let replacement = if expanded.cost() < reflected.cost() {
                expanded
            } else {
                reflected
            };
            population.replace(worst, replacement);
        } else if reflected.cost() < second_worst_cost {
            population.replace(worst, reflected);
        } else {
            let contracted = evaluate(move_toward(&centroid, &worst_genes, self.config.contraction));
            if contracted.cost() < worst_cost {
                population.replace(worst, contracted);
            } else {
                // Shrink every non-best vertex halfway toward the best.
                let best_genes = population[0].genes().to_vec();
                for vertex in 1..len {
                    let shrunk = evaluate(move_toward(
                        population[vertex].genes(),
                        &best_genes,
                        0.5,
                    ));
                    population.replace(vertex, shrunk);
                }
            }
        }

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
    fn test_move_toward_midpoint() {
        let moved = move_toward(&[0.0, 1.0], &[1.0, 0.0], 0.5);
        assert_eq!(moved, vec![0.5, 0.5]);
    }

    #[test]
    fn test_move_toward_clamps() {
        let moved = move_toward(&[0.9, 0.1], &[0.1, 0.9], -2.0);
        assert!(moved.iter().all(|&g| (0.0..=1.0).contains(&g)));
    }

    #[test]
    fn test_tiny_simplex_rejected() {
        let mut engine = Engine::builder(2)
            .objective(bowl)
            .strategy(NelderMead::default())
            .population_size(2)
            .build()
            .expect("engine builds");
        assert!(matches!(engine.init(), Err(EngineError::InvalidConfig(_))));
    }

    #[test]
    fn test_degenerate_simplex_no_error() {
        // All vertices identical: reflection matches the worst cost, the
        // contraction cannot improve, and the shrink leaves everything in
        // place. The step must simply make no progress.
        let mut engine = Engine::builder(3)
            .objective(bowl)
            .strategy(NelderMead::default())
            .population_size(4)
            .seed(42)
            .build()
            .expect("engine builds");
        let point = vec![0.25, 0.75, 0.5];
        engine
            .init_with_seeds(vec![point.clone(), point.clone(), point.clone(), point.clone()])
            .expect("seeded init succeeds");
        let before = engine.best().expect("incumbent primed").cost();
        let result = engine
            .compute(&[&IterationLimit(5)])
            .expect("degenerate simplex must not error");
        assert_eq!(result.best_cost, before);
    }

    #[test]
    fn test_converges_on_bowl() {
        let mut engine = Engine::builder(2)
            .objective(bowl)
            .strategy(NelderMead::default())
            .population_size(5)
            .seed(42)
            .build()
            .expect("engine builds");
        engine.init().expect("init succeeds");
        let result = engine
            .compute(&[&IterationLimit(200)])
            .expect("compute succeeds");
        assert!(
            result.best_cost < 1e-3,
            "expected simplex convergence on the bowl, got {}",
            result.best_cost
        );
    }
}
