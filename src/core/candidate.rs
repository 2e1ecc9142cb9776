//! Candidate solutions and the encoding factory.
//!
//! A [`Candidate`] pairs a fixed-length real-valued encoding with its cached
//! cost. Candidates are value-copied whenever they move between population
//! slots, into the best tracker, or across task boundaries — no two slots
//! ever alias the same gene buffer. The gene buffer is only readable through
//! a shared borrow; mutation happens by constructing a new candidate.

use crate::error::{EngineError, Result};
use rand::Rng;

/// Clamp a gene to the unit interval.
pub(crate) fn clamp_unit(x: f64) -> f64 {
    x.clamp(0.0, 1.0)
}

/// A point in the search space plus its cached cost.
///
/// The cost is `f64::INFINITY` until the candidate is first evaluated.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Candidate {
    genes: Vec<f64>,
    cost: f64,
}

impl Candidate {
    /// Wraps an encoding with the unevaluated cost sentinel.
    pub fn from_genes(genes: Vec<f64>) -> Self {
        Self {
            genes,
            cost: f64::INFINITY,
        }
    }

    /// Read-only view of the encoding.
    pub fn genes(&self) -> &[f64] {
        &self.genes
    }

    /// Cached cost, `f64::INFINITY` if not yet evaluated.
    pub fn cost(&self) -> f64 {
        self.cost
    }

    pub fn set_cost(&mut self, cost: f64) {
        self.cost = cost;
    }

    /// Whether a cost has been cached for this candidate.
    pub fn is_evaluated(&self) -> bool {
        self.cost < f64::INFINITY
    }

    /// Encoding length.
    pub fn len(&self) -> usize {
        self.genes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.genes.is_empty()
    }
}

impl From<Vec<f64>> for Candidate {
    fn from(genes: Vec<f64>) -> Self {
        Candidate::from_genes(genes)
    }
}

/// Explicit constructor object for candidates of a fixed dimensionality.
///
/// The factory is the single authority for producing encodings: uniform
/// random points, caller-supplied elements, and bounded neighbors. Passing
/// it at construction keeps the engine encoding-generic without any
/// reflective instantiation.
#[derive(Debug, Clone)]
pub struct CandidateFactory {
    dim: usize,
}

impl CandidateFactory {
    /// Creates a factory for `dim`-dimensional encodings.
    pub fn new(dim: usize) -> Result<Self> {
        if dim == 0 {
            return Err(EngineError::InvalidConfig(
                "dimension must be at least 1".into(),
            ));
        }
        Ok(Self { dim })
    }

    pub fn dim(&self) -> usize {
        self.dim
    }

    /// Uniform random point in `[0,1]^dim`.
    pub fn random<R: Rng>(&self, rng: &mut R) -> Candidate {
        let genes = (0..self.dim).map(|_| rng.random_range(0.0..1.0)).collect();
        Candidate::from_genes(genes)
    }

    /// Wraps caller-supplied elements.
    ///
    /// The element count must match the configured dimension.
    pub fn from_elements(&self, genes: Vec<f64>) -> Result<Candidate> {
        if genes.len() != self.dim {
            return Err(EngineError::InvalidConfig(format!(
                "encoding length {} does not match dimension {}",
                genes.len(),
                self.dim
            )));
        }
        Ok(Candidate::from_genes(genes))
    }

    /// Perturbs every gene of `base` by a uniform delta within ±`proximity`,
    /// clamped to the unit interval. The result carries no cached cost.
    pub fn neighbor<R: Rng>(&self, base: &Candidate, proximity: f64, rng: &mut R) -> Candidate {
        if proximity <= 0.0 {
            return Candidate::from_genes(base.genes().to_vec());
        }
        let genes = base
            .genes()
            .iter()
            .map(|&g| clamp_unit(g + rng.random_range(-proximity..proximity)))
            .collect();
        Candidate::from_genes(genes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::create_rng;

    #[test]
    fn test_round_trip_construction() {
        let genes = vec![0.1, 0.2, 0.3, 0.4];
        let candidate = Candidate::from_genes(genes.clone());
        assert_eq!(candidate.genes(), genes.as_slice());
        assert!(!candidate.is_evaluated());
        assert_eq!(candidate.cost(), f64::INFINITY);
    }

    #[test]
    fn test_from_conversion() {
        let candidate = Candidate::from(vec![0.3, 0.7]);
        assert_eq!(candidate.genes(), &[0.3, 0.7]);
        assert_eq!(candidate.cost(), f64::INFINITY);
    }

    #[test]
    fn test_no_aliasing_with_source_buffer() {
        let mut genes = vec![0.5, 0.5];
        let candidate = Candidate::from_genes(genes.clone());
        genes[0] = 0.9;
        assert_eq!(candidate.genes(), &[0.5, 0.5]);
    }

    #[test]
    fn test_clone_is_deep() {
        let a = Candidate::from_genes(vec![0.1, 0.9]);
        let mut b = a.clone();
        b.set_cost(3.0);
        assert!(!a.is_evaluated());
        assert_eq!(a.genes(), b.genes());
    }

    #[test]
    fn test_factory_rejects_zero_dimension() {
        assert!(CandidateFactory::new(0).is_err());
    }

    #[test]
    fn test_factory_random_in_bounds() {
        let factory = CandidateFactory::new(8).expect("valid dim");
        let mut rng = create_rng(42);
        for _ in 0..100 {
            let c = factory.random(&mut rng);
            assert_eq!(c.len(), 8);
            assert!(c.genes().iter().all(|&g| (0.0..=1.0).contains(&g)));
        }
    }

    #[test]
    fn test_from_elements_length_mismatch() {
        let factory = CandidateFactory::new(3).expect("valid dim");
        assert!(factory.from_elements(vec![0.1, 0.2]).is_err());
        assert!(factory.from_elements(vec![0.1, 0.2, 0.3]).is_ok());
    }

    #[test]
    fn test_neighbor_stays_in_bounds() {
        let factory = CandidateFactory::new(4).expect("valid dim");
        let mut rng = create_rng(7);
        let base = factory.from_elements(vec![0.0, 1.0, 0.5, 0.01]).expect("len ok");
        for _ in 0..100 {
            let nb = factory.neighbor(&base, 0.3, &mut rng);
            assert!(nb.genes().iter().all(|&g| (0.0..=1.0).contains(&g)));
        }
    }

    #[test]
    fn test_neighbor_zero_proximity_is_copy() {
        let factory = CandidateFactory::new(2).expect("valid dim");
        let mut rng = create_rng(7);
        let base = factory.from_elements(vec![0.2, 0.8]).expect("len ok");
        let nb = factory.neighbor(&base, 0.0, &mut rng);
        assert_eq!(nb.genes(), base.genes());
    }
}
