//! Generational genetic algorithm.
//!
//! Elitism carries the best candidates unchanged; inverse-cost selection
//! picks parents; blend crossover and bounded gene mutation produce
//! offspring; the working set is restored to the configured size before
//! re-evaluation.
//!
//! # References
//!
//! - Holland (1975), *Adaptation in Natural and Artificial Systems*
//! - Goldberg (1989), *Genetic Algorithms in Search, Optimization, and
//!   Machine Learning*

mod config;
mod selection;
mod strategy;

pub use config::GaConfig;
pub use selection::Selection;
pub use strategy::GeneticAlgorithm;
