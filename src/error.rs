//! Engine error taxonomy.
//!
//! All fallible operations in the crate report through [`EngineError`].
//! Configuration problems are surfaced at construction or at the first
//! offending call, never silently truncated or deferred into the run loop.

/// Errors raised by engine construction and the run loop.
#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    /// A parameter or input failed validation.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// The engine was built without a cost function.
    #[error("no objective configured")]
    MissingObjective,

    /// `compute` was called before `init`.
    #[error("engine not initialized; call init() first")]
    NotInitialized,

    /// A worker task failed or panicked during a scatter/gather step.
    ///
    /// The whole batch is aborted; the population is never left with a
    /// stale or duplicated slot.
    #[error("parallel step failed: {0}")]
    TaskFailed(String),
}

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, EngineError>;
