//! Fixed-capacity ordered population container.
//!
//! Slots are index-addressable and hold owned candidates; ascending-cost
//! sort puts the best candidate at position 0. Operations that shrink or
//! grow the working set restore the configured size before the next
//! iteration via [`Population::restore_capacity`].

use super::candidate::{Candidate, CandidateFactory};
use crate::error::{EngineError, Result};
use rand::Rng;
use std::cmp::Ordering;
use std::ops::Index;

/// An ordered, fixed-capacity collection of candidates.
#[derive(Debug, Clone)]
pub struct Population {
    slots: Vec<Candidate>,
    capacity: usize,
}

fn by_cost(a: &Candidate, b: &Candidate) -> Ordering {
    a.cost().partial_cmp(&b.cost()).unwrap_or(Ordering::Equal)
}

impl Population {
    /// Creates an empty population with the given fixed capacity.
    pub fn new(capacity: usize) -> Result<Self> {
        if capacity == 0 {
            return Err(EngineError::InvalidConfig(
                "population size must be at least 1".into(),
            ));
        }
        Ok(Self {
            slots: Vec::with_capacity(capacity),
            capacity,
        })
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    pub fn get(&self, index: usize) -> &Candidate {
        &self.slots[index]
    }

    /// Replaces the candidate at `index`, taking ownership of the new value.
    ///
    /// # Panics
    /// Panics if `index` is out of range.
    pub fn replace(&mut self, index: usize, candidate: Candidate) {
        assert!(
            index < self.slots.len(),
            "slot index {index} out of range for population of {}",
            self.slots.len()
        );
        self.slots[index] = candidate;
    }

    /// Discards all slots and installs `candidates` as the new working set.
    ///
    /// The caller is expected to bring the set back to capacity with
    /// [`restore_capacity`](Self::restore_capacity) before the next step if
    /// the count differs.
    pub fn fill(&mut self, candidates: Vec<Candidate>) {
        self.slots = candidates;
    }

    /// Pads with fresh random (unevaluated) candidates or truncates the
    /// tail so the working set matches the configured capacity again.
    pub fn restore_capacity<R: Rng>(&mut self, factory: &CandidateFactory, rng: &mut R) {
        self.slots.truncate(self.capacity);
        while self.slots.len() < self.capacity {
            self.slots.push(factory.random(rng));
        }
    }

    /// Sorts ascending by cost; position 0 is the best candidate.
    pub fn sort(&mut self) {
        self.slots.sort_by(by_cost);
    }

    /// The lowest-cost candidate, independent of sort order.
    pub fn best(&self) -> Option<&Candidate> {
        self.slots.iter().min_by(|a, b| by_cost(a, b))
    }

    /// Clones of the `count` lowest-cost candidates.
    ///
    /// # Panics
    /// Panics if `count` exceeds the current working-set size — a selection
    /// pool smaller than the requested selections is a configuration error.
    pub fn best_prefix(&self, count: usize) -> Vec<Candidate> {
        assert!(
            count <= self.slots.len(),
            "requested {count} best candidates from a population of {}",
            self.slots.len()
        );
        let mut order: Vec<usize> = (0..self.slots.len()).collect();
        order.sort_by(|&a, &b| by_cost(&self.slots[a], &self.slots[b]));
        order[..count].iter().map(|&i| self.slots[i].clone()).collect()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Candidate> {
        self.slots.iter()
    }

    /// Clones every candidate — the immutable snapshot handed to parallel
    /// tasks so they never read the live storage.
    pub fn snapshot(&self) -> Vec<Candidate> {
        self.slots.to_vec()
    }

    /// Drops all candidates, leaving an empty working set.
    pub fn clear(&mut self) {
        self.slots.clear();
    }
}

impl Index<usize> for Population {
    type Output = Candidate;

    fn index(&self, index: usize) -> &Candidate {
        &self.slots[index]
    }
}

impl<'a> IntoIterator for &'a Population {
    type Item = &'a Candidate;
    type IntoIter = std::slice::Iter<'a, Candidate>;

    fn into_iter(self) -> Self::IntoIter {
        self.slots.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::create_rng;

    fn candidate(cost: f64) -> Candidate {
        let mut c = Candidate::from_genes(vec![0.5]);
        c.set_cost(cost);
        c
    }

    fn population(costs: &[f64]) -> Population {
        let mut p = Population::new(costs.len()).expect("capacity > 0");
        p.fill(costs.iter().map(|&c| candidate(c)).collect());
        p
    }

    #[test]
    fn test_zero_capacity_rejected() {
        assert!(Population::new(0).is_err());
    }

    #[test]
    fn test_sort_ascending_cost() {
        let mut p = population(&[3.0, 1.0, 2.0]);
        p.sort();
        assert_eq!(p[0].cost(), 1.0);
        assert_eq!(p[1].cost(), 2.0);
        assert_eq!(p[2].cost(), 3.0);
    }

    #[test]
    fn test_best_ignores_sort_order() {
        let p = population(&[3.0, 0.5, 2.0]);
        assert_eq!(p.best().expect("non-empty").cost(), 0.5);
    }

    #[test]
    fn test_best_prefix_returns_clones() {
        let mut p = population(&[3.0, 1.0, 2.0]);
        let top = p.best_prefix(2);
        assert_eq!(top[0].cost(), 1.0);
        assert_eq!(top[1].cost(), 2.0);
        // Mutating the population afterwards must not touch the extracted copies.
        p.replace(1, candidate(99.0));
        assert_eq!(top[0].cost(), 1.0);
    }

    #[test]
    #[should_panic(expected = "requested 4 best candidates")]
    fn test_best_prefix_pool_too_small() {
        population(&[1.0, 2.0]).best_prefix(4);
    }

    #[test]
    fn test_restore_capacity_pads_with_randoms() {
        let factory = CandidateFactory::new(1).expect("valid dim");
        let mut rng = create_rng(42);
        let mut p = Population::new(5).expect("capacity > 0");
        p.fill(vec![candidate(1.0), candidate(2.0)]);
        p.restore_capacity(&factory, &mut rng);
        assert_eq!(p.len(), 5);
        assert!(!p[4].is_evaluated());
    }

    #[test]
    fn test_restore_capacity_truncates() {
        let factory = CandidateFactory::new(1).expect("valid dim");
        let mut rng = create_rng(42);
        let mut p = Population::new(2).expect("capacity > 0");
        p.fill(vec![candidate(1.0), candidate(2.0), candidate(3.0)]);
        p.restore_capacity(&factory, &mut rng);
        assert_eq!(p.len(), 2);
    }

    #[test]
    fn test_snapshot_is_detached() {
        let mut p = population(&[1.0, 2.0]);
        let snap = p.snapshot();
        p.replace(0, candidate(50.0));
        assert_eq!(snap[0].cost(), 1.0);
    }

    #[test]
    #[should_panic(expected = "slot index 5 out of range")]
    fn test_replace_out_of_range_panics() {
        let mut p = population(&[1.0, 2.0]);
        p.replace(5, candidate(0.0));
    }
}
