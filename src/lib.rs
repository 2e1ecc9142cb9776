//! Population-based metaheuristic optimization engine.
//!
//! Given a black-box cost function over a fixed-length real-valued search
//! space (each dimension normalized to [0,1]), the engine searches for a
//! low-cost point using one of several interchangeable strategies:
//!
//! - **Differential Evolution (DE)**: mutant vectors from partner triples,
//!   binomial crossover, greedy per-slot selection.
//! - **Genetic Algorithm (GA)**: elitism, inverse-cost selection, blend
//!   crossover, bounded gene mutation.
//! - **Simulated Annealing (SA)**: Metropolis walk with geometric cooling.
//! - **Particle Swarm (PSO)** and **multi-swarm PSO**: velocity updates
//!   pulled toward personal, swarm, and global bests.
//! - **Nelder-Mead**: downhill simplex over the population.
//! - **Scout search**: the best K candidates explore perturbation
//!   neighborhoods; the rest re-seed randomly.
//! - **Bacterial foraging**: chemotaxis, swimming, health-ranked
//!   reproduction, elimination-dispersal.
//!
//! # Architecture
//!
//! One generic [`engine::Engine`] owns the population, the best-incumbent
//! tracker, a worker pool, and a boxed [`engine::Strategy`]. Strategies
//! fan independent per-candidate work out through the scatter/gather
//! executor and apply all population mutations sequentially after the
//! join; the incumbent tracker is the only shared resource, guarded by a
//! mutex and updated only on strict improvement. The engine guarantees a
//! monotonically non-increasing best cost and termination under the
//! configured criteria — not global optimality.
//!
//! # Example
//!
//! ```
//! use polyheur::core::{CostTarget, IterationLimit};
//! use polyheur::de::{DeConfig, DifferentialEvolution};
//! use polyheur::engine::Engine;
//!
//! let mut engine = Engine::builder(4)
//!     .objective(|genes: &[f64]| genes.iter().map(|x| (x - 0.5) * (x - 0.5)).sum())
//!     .strategy(DifferentialEvolution::new(DeConfig::default()).unwrap())
//!     .population_size(20)
//!     .seed(42)
//!     .build()
//!     .unwrap();
//! engine.init().unwrap();
//! // Stop at the target cost or after 500 iterations, whichever fires first.
//! let result = engine.compute(&[&CostTarget(1e-3), &IterationLimit(500)]).unwrap();
//! assert!(result.iterations <= 500);
//! ```

pub mod bfo;
pub mod core;
pub mod de;
pub mod engine;
pub mod exec;
pub mod ga;
pub mod nelder_mead;
pub mod pso;
pub mod sa;
pub mod scout;

mod error;
mod random;

pub use error::{EngineError, Result};
pub use random::{create_rng, EngineRng};
