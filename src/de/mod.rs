//! Differential evolution (DE/rand/1/bin).
//!
//! For each slot, three distinct partners supply a mutant vector
//! `a + F·(b − c)`; binomial crossover with one forced dimension mixes it
//! with the slot's current genes; the trial replaces the slot only on
//! strict cost improvement.
//!
//! # References
//!
//! - Storn & Price (1997), "Differential Evolution — A Simple and Efficient
//!   Heuristic for Global Optimization over Continuous Spaces"

mod config;
mod strategy;

pub use config::DeConfig;
pub use strategy::DifferentialEvolution;
