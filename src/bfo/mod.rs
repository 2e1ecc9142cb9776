//! Bacterial foraging optimization.
//!
//! Bacteria tumble in random unit directions, swim while the cost keeps
//! improving, reproduce by health rank, and occasionally disperse to
//! random positions. The incumbent tracker is fed at every evaluation.
//!
//! # References
//!
//! - Passino (2002), "Biomimicry of Bacterial Foraging for Distributed
//!   Optimization and Control"

mod config;
mod strategy;

pub use config::BfoConfig;
pub use strategy::BacterialForaging;
