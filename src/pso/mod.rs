//! Particle swarm optimization, single- and multi-swarm.
//!
//! Particles carry velocity and a personal best; each move blends inertia
//! with random pulls toward the personal best and the global incumbent
//! (plus the swarm best in the multi-swarm variant), capped per dimension
//! and clamped to the unit hypercube.
//!
//! # References
//!
//! - Kennedy & Eberhart (1995), "Particle Swarm Optimization"
//! - Blackwell & Branke (2004), "Multi-swarm Optimization in Dynamic
//!   Environments"

mod config;
mod multi;
mod strategy;

pub use config::PsoConfig;
pub use multi::{MultiSwarm, MultiSwarmConfig};
pub use strategy::ParticleSwarm;
