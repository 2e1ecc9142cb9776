//! The generic optimization engine.
//!
//! One engine owns one population, one incumbent tracker, one worker pool,
//! and one pluggable [`Strategy`]. The run loop is single-threaded and
//! synchronous: each iteration invokes the strategy once, offers the
//! population's best to the tracker, and evaluates the stopping criteria.
//! The only suspension points are the scatter/gather joins inside a step.
//!
//! # Example
//!
//! ```
//! use polyheur::core::IterationLimit;
//! use polyheur::engine::Engine;
//!
//! let mut engine = Engine::builder(4)
//!     .objective(|genes: &[f64]| genes.iter().map(|x| (x - 0.5) * (x - 0.5)).sum())
//!     .population_size(20)
//!     .seed(42)
//!     .build()
//!     .unwrap();
//! engine.init().unwrap();
//! let result = engine.compute(&[&IterationLimit(50)]).unwrap();
//! assert!(result.best_cost.is_finite());
//! ```

mod runner;
mod strategy;

pub use runner::{Engine, EngineBuilder, RunResult};
pub use strategy::{StepContext, Strategy};
