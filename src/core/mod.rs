//! Shared candidate, population, incumbent, and termination abstractions.
//!
//! Every strategy operates on the same contracts defined here:
//!
//! - [`Candidate`]: a point in the search space plus its cached cost
//! - [`CandidateFactory`]: the explicit constructor object for encodings
//! - [`Population`]: fixed-capacity, index-addressable, ascending-cost order
//! - [`BestTracker`]: the mutex-guarded incumbent, strict-improvement only
//! - [`Objective`]: the externally supplied cost function
//! - [`StopCriterion`]: OR-combined stopping predicates

mod best;
mod candidate;
mod objective;
mod population;
mod termination;

pub use best::BestTracker;
pub use candidate::{Candidate, CandidateFactory};
pub use objective::Objective;
pub use population::Population;
pub use termination::{
    CostTarget, ElapsedTime, IterationLimit, RunProgress, Stagnation, StopCriterion,
};

pub(crate) use candidate::clamp_unit;
