//! Parent selection for the genetic algorithm.
//!
//! Both operators assume minimization and weight candidates by inverse
//! cost: the lowest-cost candidate has the highest selection pressure.
//!
//! # References
//!
//! - Goldberg & Deb (1991), "A Comparative Analysis of Selection Schemes
//!   Used in Genetic Algorithms"
//! - Baker (1987), "Reducing Bias and Inefficiency in the Selection
//!   Algorithm" (stochastic universal sampling)

use crate::core::{Candidate, Population};
use rand::Rng;

/// Parent-selection operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Selection {
    /// Pick `k` candidates at random, keep the cheapest. Higher `k` means
    /// stronger selection pressure; 2–5 is typical.
    Tournament(usize),

    /// Stochastic universal sampling over inverse-cost weights: one wheel
    /// spin with evenly spaced pointers picks the whole parent set, which
    /// bounds the spread between expected and actual selection counts.
    StochasticUniversal,
}

impl Default for Selection {
    fn default() -> Self {
        Selection::Tournament(3)
    }
}

impl Selection {
    /// Selects `count` parent indices (with replacement).
    ///
    /// # Panics
    /// Panics if the population is empty.
    pub fn select_parents<R: Rng>(
        &self,
        population: &Population,
        count: usize,
        rng: &mut R,
    ) -> Vec<usize> {
        assert!(
            !population.is_empty(),
            "cannot select from an empty population"
        );
        if count == 0 {
            return Vec::new();
        }
        match self {
            Selection::Tournament(k) => (0..count)
                .map(|_| tournament(population, (*k).max(1), rng))
                .collect(),
            Selection::StochasticUniversal => stochastic_universal(population, count, rng),
        }
    }
}

fn tournament<R: Rng>(population: &Population, k: usize, rng: &mut R) -> usize {
    let len = population.len();
    let mut best = rng.random_range(0..len);
    for _ in 1..k {
        let contender = rng.random_range(0..len);
        if population[contender].cost() < population[best].cost() {
            best = contender;
        }
    }
    best
}

/// Inverse-cost weight: the cheapest candidate gets the largest share.
fn inverse_cost_weights(population: &Population) -> Vec<f64> {
    let costs: Vec<f64> = population.iter().map(Candidate::cost).collect();
    let max_cost = costs.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
    let epsilon = 1e-10;
    costs
        .iter()
        .map(|&c| {
            let w = max_cost - c + epsilon;
            if w.is_finite() && w > 0.0 {
                w
            } else {
                epsilon
            }
        })
        .collect()
}

fn stochastic_universal<R: Rng>(population: &Population, count: usize, rng: &mut R) -> Vec<usize> {
    let weights = inverse_cost_weights(population);
    let total: f64 = weights.iter().sum();
    if total <= 0.0 || !total.is_finite() {
        // Degenerate weights; fall back to uniform picks.
        return (0..count)
            .map(|_| rng.random_range(0..population.len()))
            .collect();
    }

    let step = total / count as f64;
    let start = rng.random_range(0.0..step);

    let mut picks = Vec::with_capacity(count);
    let mut cumulative = weights[0];
    let mut index = 0;
    for j in 0..count {
        let pointer = start + j as f64 * step;
        while cumulative < pointer && index + 1 < weights.len() {
            index += 1;
            cumulative += weights[index];
        }
        picks.push(index);
    }
    picks
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::create_rng;

    fn population(costs: &[f64]) -> Population {
        let mut p = Population::new(costs.len()).expect("capacity > 0");
        p.fill(
            costs
                .iter()
                .map(|&c| {
                    let mut candidate = Candidate::from_genes(vec![0.5]);
                    candidate.set_cost(c);
                    candidate
                })
                .collect(),
        );
        p
    }

    #[test]
    fn test_tournament_favors_cheapest() {
        let pop = population(&[10.0, 5.0, 1.0, 8.0]);
        let mut rng = create_rng(42);
        let picks = Selection::Tournament(4).select_parents(&pop, 10_000, &mut rng);
        let best_count = picks.iter().filter(|&&i| i == 2).count();
        assert!(
            best_count > 6000,
            "expected the cheapest candidate in >60% of picks, got {best_count}/10000"
        );
    }

    #[test]
    fn test_tournament_size_one_is_uniform() {
        let pop = population(&[10.0, 5.0, 1.0, 8.0]);
        let mut rng = create_rng(42);
        let picks = Selection::Tournament(1).select_parents(&pop, 10_000, &mut rng);
        for slot in 0..4 {
            let count = picks.iter().filter(|&&i| i == slot).count();
            assert!(
                count > 1500,
                "expected roughly uniform picks, slot {slot} got {count}"
            );
        }
    }

    #[test]
    fn test_sus_favors_cheapest() {
        let pop = population(&[100.0, 50.0, 1.0, 80.0]);
        let mut rng = create_rng(42);
        let mut best = 0usize;
        let mut worst = 0usize;
        for _ in 0..1000 {
            let picks = Selection::StochasticUniversal.select_parents(&pop, 4, &mut rng);
            best += picks.iter().filter(|&&i| i == 2).count();
            worst += picks.iter().filter(|&&i| i == 0).count();
        }
        assert!(
            best > worst,
            "cheapest candidate should be picked more often: best={best}, worst={worst}"
        );
    }

    #[test]
    fn test_sus_pick_count_exact() {
        let pop = population(&[4.0, 3.0, 2.0, 1.0]);
        let mut rng = create_rng(7);
        for count in [1usize, 2, 7, 16] {
            let picks = Selection::StochasticUniversal.select_parents(&pop, count, &mut rng);
            assert_eq!(picks.len(), count);
            assert!(picks.iter().all(|&i| i < 4));
        }
    }

    #[test]
    fn test_zero_count_selects_nothing() {
        let pop = population(&[1.0, 2.0]);
        let mut rng = create_rng(7);
        assert!(Selection::default()
            .select_parents(&pop, 0, &mut rng)
            .is_empty());
    }

    #[test]
    #[should_panic(expected = "cannot select from an empty population")]
    fn test_empty_population_panics() {
        let pop = Population::new(1).expect("capacity > 0");
        let mut rng = create_rng(7);
        Selection::Tournament(3).select_parents(&pop, 1, &mut rng);
    }
}
