//! Stopping criteria for the run loop.
//!
//! Criteria are predicate objects evaluated once per iteration over a
//! [`RunProgress`] snapshot. Supplying several composes them as a logical
//! OR: the run stops as soon as any criterion fires. With none supplied,
//! the engine falls back to [`ElapsedTime::default`] (100 ms).

use std::sync::Mutex;
use std::time::Duration;

/// Snapshot of run progress handed to stopping criteria each iteration.
#[derive(Debug, Clone, Copy)]
pub struct RunProgress {
    /// Cost of the current incumbent.
    pub best_cost: f64,
    /// Wall-clock time since the run started.
    pub elapsed: Duration,
    /// Completed iterations.
    pub iterations: usize,
}

/// A stopping predicate evaluated at iteration boundaries.
///
/// Criteria are only consulted between iterations — a long-running single
/// iteration cannot be interrupted mid-flight.
pub trait StopCriterion: Send + Sync {
    fn should_stop(&self, progress: &RunProgress) -> bool;
}

/// Stop once the elapsed wall-clock time reaches the limit.
#[derive(Debug, Clone, Copy)]
pub struct ElapsedTime(pub Duration);

impl Default for ElapsedTime {
    /// The engine's default criterion: 100 ms of wall-clock time.
    fn default() -> Self {
        Self(Duration::from_millis(100))
    }
}

impl StopCriterion for ElapsedTime {
    fn should_stop(&self, progress: &RunProgress) -> bool {
        progress.elapsed >= self.0
    }
}

/// Stop after a fixed number of iterations.
#[derive(Debug, Clone, Copy)]
pub struct IterationLimit(pub usize);

impl StopCriterion for IterationLimit {
    fn should_stop(&self, progress: &RunProgress) -> bool {
        progress.iterations >= self.0
    }
}

/// Stop once the best cost drops to or below the target.
#[derive(Debug, Clone, Copy)]
pub struct CostTarget(pub f64);

impl StopCriterion for CostTarget {
    fn should_stop(&self, progress: &RunProgress) -> bool {
        progress.best_cost <= self.0
    }
}

/// Stop after `window` consecutive iterations without strict improvement.
#[derive(Debug)]
pub struct Stagnation {
    window: usize,
    state: Mutex<StagnationState>,
}

#[derive(Debug)]
struct StagnationState {
    last_best: f64,
    stalled: usize,
}

impl Stagnation {
    pub fn new(window: usize) -> Self {
        Self {
            window: window.max(1),
            state: Mutex::new(StagnationState {
                last_best: f64::INFINITY,
                stalled: 0,
            }),
        }
    }
}

impl StopCriterion for Stagnation {
    fn should_stop(&self, progress: &RunProgress) -> bool {
        let mut state = self.state.lock().expect("stagnation state lock poisoned");
        if progress.best_cost < state.last_best {
            state.last_best = progress.best_cost;
            state.stalled = 0;
        } else {
            state.stalled += 1;
        }
        state.stalled >= self.window
    }
}
