//! Shared best-incumbent tracker.
//!
//! The tracker holds the single best candidate seen during a run. It is the
//! only resource shared between worker tasks without snapshotting, so every
//! access goes through a mutex. Writes use strict-improvement comparison,
//! which makes them commutative: the final incumbent is the minimum of all
//! offered candidates regardless of arrival order.

use super::candidate::Candidate;
use std::sync::Mutex;

/// Mutex-guarded incumbent slot.
///
/// Candidates are copied in on write and copied out on read; the tracker
/// never hands out a reference into its internal slot.
#[derive(Debug, Default)]
pub struct BestTracker {
    slot: Mutex<Option<Candidate>>,
}

impl BestTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Installs `candidate` as the incumbent if no incumbent exists or the
    /// candidate's cost is strictly lower. Ties never replace.
    ///
    /// Returns `true` if the incumbent changed.
    pub fn set_if_better(&self, candidate: &Candidate) -> bool {
        let mut slot = self.slot.lock().expect("best tracker lock poisoned");
        let improved = match slot.as_ref() {
            None => true,
            Some(incumbent) => candidate.cost() < incumbent.cost(),
        };
        if improved {
            *slot = Some(candidate.clone());
        }
        improved
    }

    /// Copy of the current incumbent, if any.
    pub fn get(&self) -> Option<Candidate> {
        self.slot.lock().expect("best tracker lock poisoned").clone()
    }

    /// Incumbent cost, `f64::INFINITY` when empty.
    pub fn best_cost(&self) -> f64 {
        self.slot
            .lock()
            .expect("best tracker lock poisoned")
            .as_ref()
            .map_or(f64::INFINITY, Candidate::cost)
    }

    pub fn clear(&self) {
        *self.slot.lock().expect("best tracker lock poisoned") = None;
    }
}
