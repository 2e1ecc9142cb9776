//! Generic run loop: initialization, iteration, incumbent tracking,
//! termination.

use crate::core::{
    BestTracker, Candidate, CandidateFactory, ElapsedTime, Objective, Population, RunProgress,
    StopCriterion,
};
use crate::de::DifferentialEvolution;
use crate::error::{EngineError, Result};
use crate::exec::StepExecutor;
use crate::random::{create_rng, EngineRng};
use std::sync::Arc;
use std::time::{Duration, Instant};

use super::strategy::{StepContext, Strategy};

/// Result of a `compute` call.
///
/// Statistics accumulate across repeated `compute` calls on the same
/// engine and are cleared only by [`Engine::reset`].
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct RunResult {
    /// The best candidate found so far in this run.
    pub best: Candidate,

    /// Cost of the best candidate (same as `best.cost()`).
    pub best_cost: f64,

    /// Total iterations executed.
    pub iterations: usize,

    /// Total wall-clock time spent inside `compute`.
    pub elapsed: Duration,

    /// Best cost after each iteration, append-only.
    pub cost_history: Vec<f64>,
}

/// Builder for [`Engine`].
///
/// The objective is mandatory: building without one fails with
/// [`EngineError::MissingObjective`] before any loop runs. The strategy
/// defaults to differential evolution with its default parameters.
pub struct EngineBuilder {
    dimension: usize,
    population_size: usize,
    seed: Option<u64>,
    threads: Option<usize>,
    objective: Option<Arc<dyn Objective>>,
    strategy: Option<Box<dyn Strategy>>,
}

impl EngineBuilder {
    pub fn objective<O: Objective + 'static>(mut self, objective: O) -> Self {
        self.objective = Some(Arc::new(objective));
        self
    }

    pub fn strategy<S: Strategy + 'static>(mut self, strategy: S) -> Self {
        self.strategy = Some(Box::new(strategy));
        self
    }

    pub fn population_size(mut self, size: usize) -> Self {
        self.population_size = size;
        self
    }

    /// Seed for the engine RNG; omitting it draws a fresh seed per engine.
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Worker pool size; defaults to available parallelism.
    pub fn threads(mut self, threads: usize) -> Self {
        self.threads = Some(threads);
        self
    }

    pub fn build(self) -> Result<Engine> {
        let objective = self.objective.ok_or(EngineError::MissingObjective)?;
        let factory = CandidateFactory::new(self.dimension)?;
        let population = Population::new(self.population_size)?;
        let executor = StepExecutor::new(self.threads)?;
        let strategy = self
            .strategy
            .unwrap_or_else(|| Box::new(DifferentialEvolution::default()));
        let rng = match self.seed {
            Some(seed) => create_rng(seed),
            None => create_rng(rand::random()),
        };
        Ok(Engine {
            objective,
            strategy,
            factory,
            population,
            best: BestTracker::new(),
            executor,
            rng,
            iterations: 0,
            elapsed: Duration::ZERO,
            cost_history: Vec::new(),
            initialized: false,
        })
    }
}

/// The optimization engine: one population, one strategy, one worker pool.
///
/// Lifecycle: [`init`](Engine::init) (or
/// [`init_with_seeds`](Engine::init_with_seeds)) builds and evaluates the
/// initial population and primes the incumbent; [`compute`](Engine::compute)
/// iterates the strategy until a stopping criterion fires;
/// [`reset`](Engine::reset) discards population, incumbent, and statistics.
pub struct Engine {
    objective: Arc<dyn Objective>,
    strategy: Box<dyn Strategy>,
    factory: CandidateFactory,
    population: Population,
    best: BestTracker,
    executor: StepExecutor,
    rng: EngineRng,
    iterations: usize,
    elapsed: Duration,
    cost_history: Vec<f64>,
    initialized: bool,
}

impl Engine {
    /// Starts a builder for `dimension`-dimensional search.
    pub fn builder(dimension: usize) -> EngineBuilder {
        EngineBuilder {
            dimension,
            population_size: 50,
            seed: None,
            threads: None,
            objective: None,
            strategy: None,
        }
    }

    /// Builds and evaluates a fresh random population.
    pub fn init(&mut self) -> Result<()> {
        self.init_with_seeds(Vec::new())
    }

    /// Builds the initial population from caller-supplied encodings,
    /// padding with random candidates when fewer seeds than capacity are
    /// given. Supplying more seeds than capacity, or a seed of the wrong
    /// length, is a configuration error.
    pub fn init_with_seeds(&mut self, seeds: Vec<Vec<f64>>) -> Result<()> {
        let capacity = self.population.capacity();
        if seeds.len() > capacity {
            return Err(EngineError::InvalidConfig(format!(
                "{} seed vectors exceed the population size {capacity}",
                seeds.len()
            )));
        }

        let mut candidates = Vec::with_capacity(capacity);
        for genes in seeds {
            candidates.push(self.factory.from_elements(genes)?);
        }
        while candidates.len() < capacity {
            candidates.push(self.factory.random(&mut self.rng));
        }

        self.best.clear();
        self.iterations = 0;
        self.elapsed = Duration::ZERO;
        self.cost_history.clear();

        let evaluated = evaluate_batch(
            &self.executor,
            self.objective.as_ref(),
            &self.best,
            candidates,
        )?;
        self.population.fill(evaluated);

        let mut ctx = StepContext {
            objective: self.objective.as_ref(),
            factory: &self.factory,
            best: &self.best,
            executor: &self.executor,
            rng: &mut self.rng,
            iteration: 0,
        };
        self.strategy.initialize(&self.population, &mut ctx)?;

        self.initialized = true;
        tracing::debug!(
            strategy = self.strategy.name(),
            population = self.population.len(),
            best_cost = self.best.best_cost(),
            "engine initialized"
        );
        Ok(())
    }

    /// Repeats strategy iterations until any criterion fires.
    ///
    /// With no criteria supplied, a single default wall-clock criterion of
    /// 100 ms applies. Criteria are checked only at iteration boundaries;
    /// a long-running single iteration runs to completion.
    pub fn compute(&mut self, criteria: &[&dyn StopCriterion]) -> Result<RunResult> {
        if !self.initialized {
            return Err(EngineError::NotInitialized);
        }

        let default_criterion = ElapsedTime::default();
        let default_list: [&dyn StopCriterion; 1] = [&default_criterion];
        let active: &[&dyn StopCriterion] = if criteria.is_empty() {
            &default_list
        } else {
            criteria
        };

        tracing::debug!(
            strategy = self.strategy.name(),
            criteria = active.len(),
            "compute started"
        );
        let started = Instant::now();

        loop {
            let mut ctx = StepContext {
                objective: self.objective.as_ref(),
                factory: &self.factory,
                best: &self.best,
                executor: &self.executor,
                rng: &mut self.rng,
                iteration: self.iterations,
            };
            self.strategy.step(&mut self.population, &mut ctx)?;

            if let Some(best) = self.population.best() {
                self.best.set_if_better(best);
            }
            self.iterations += 1;
            let best_cost = self.best.best_cost();
            self.cost_history.push(best_cost);

            let progress = RunProgress {
                best_cost,
                elapsed: self.elapsed + started.elapsed(),
                iterations: self.iterations,
            };
            tracing::trace!(
                iteration = progress.iterations,
                best_cost,
                "iteration complete"
            );
            if active.iter().any(|c| c.should_stop(&progress)) {
                break;
            }
        }

        self.elapsed += started.elapsed();
        let best = self.best.get().ok_or(EngineError::NotInitialized)?;
        tracing::debug!(
            iterations = self.iterations,
            best_cost = best.cost(),
            elapsed_ms = self.elapsed.as_millis() as u64,
            "compute finished"
        );
        Ok(RunResult {
            best_cost: best.cost(),
            best,
            iterations: self.iterations,
            elapsed: self.elapsed,
            cost_history: self.cost_history.clone(),
        })
    }

    /// Discards the population, the incumbent, and all statistics. The
    /// engine must be re-initialized before the next `compute`.
    pub fn reset(&mut self) {
        self.population.clear();
        self.best.clear();
        self.iterations = 0;
        self.elapsed = Duration::ZERO;
        self.cost_history.clear();
        self.initialized = false;
    }

    /// Copy of the current incumbent, if initialized.
    pub fn best(&self) -> Option<Candidate> {
        self.best.get()
    }

    /// Iterations completed since the last `init`/`reset`.
    pub fn iterations(&self) -> usize {
        self.iterations
    }

    /// Read access to the current population.
    pub fn population(&self) -> &Population {
        &self.population
    }
}

/// Evaluates unevaluated candidates in parallel, offering each to the
/// tracker.
fn evaluate_batch(
    executor: &StepExecutor,
    objective: &dyn Objective,
    best: &BestTracker,
    candidates: Vec<Candidate>,
) -> Result<Vec<Candidate>> {
    executor.scatter(candidates, move |mut candidate| {
        if !candidate.is_evaluated() {
            candidate.set_cost(objective.cost(candidate.genes()));
            best.set_if_better(&candidate);
        }
        Ok(candidate)
    })
}
