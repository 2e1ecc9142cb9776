//! The pluggable per-iteration update contract.

use crate::core::{BestTracker, Candidate, CandidateFactory, Objective, Population};
use crate::error::Result;
use crate::exec::StepExecutor;
use crate::random::EngineRng;

/// Engine services handed to a strategy for one call.
///
/// Everything here is borrowed from the engine: strategies never own the
/// objective, the tracker, or the pool, so all strategies of one engine
/// share them.
pub struct StepContext<'a> {
    pub objective: &'a dyn Objective,
    pub factory: &'a CandidateFactory,
    pub best: &'a BestTracker,
    pub executor: &'a StepExecutor,
    pub rng: &'a mut EngineRng,
    /// Completed iterations before this step.
    pub iteration: usize,
}

impl StepContext<'_> {
    /// Evaluates every candidate lacking a cached cost, in parallel, and
    /// offers each fresh evaluation to the incumbent tracker.
    ///
    /// Already-evaluated candidates pass through untouched — the objective
    /// is pure, so a cached cost is identical to a recomputed one.
    pub fn evaluate_all(&self, candidates: Vec<Candidate>) -> Result<Vec<Candidate>> {
        let objective = self.objective;
        let best = self.best;
        self.executor.scatter(candidates, move |mut candidate| {
            if !candidate.is_evaluated() {
                candidate.set_cost(objective.cost(candidate.genes()));
                best.set_if_better(&candidate);
            }
            Ok(candidate)
        })
    }
}

/// One pluggable algorithm's per-iteration update rule.
///
/// The engine owns the population and the run loop; a strategy mutates the
/// population in place each step and may keep private state between steps
/// (velocities, temperature, swarm assignments). State is rebuilt by
/// [`initialize`](Strategy::initialize) whenever the engine (re)initializes.
pub trait Strategy: Send {
    /// Name used in logs and diagnostics.
    fn name(&self) -> &'static str;

    /// Called once after the initial population is built and evaluated.
    ///
    /// The default does nothing. Strategies with population-size
    /// requirements reject unusable populations here, before the loop runs.
    fn initialize(&mut self, _population: &Population, _ctx: &mut StepContext<'_>) -> Result<()> {
        Ok(())
    }

    /// Runs one iteration, mutating the population in place.
    fn step(&mut self, population: &mut Population, ctx: &mut StepContext<'_>) -> Result<()>;
}
