//! Scatter/gather execution on an engine-owned worker pool.
//!
//! Many strategies structure an iteration as N independent per-candidate
//! update tasks. [`StepExecutor`] fans those tasks out on a rayon pool and
//! joins before returning (bulk-synchronous barrier): no task observes
//! another task's result from the same batch, and all population mutation
//! happens sequentially on the calling thread afterwards.
//!
//! The pool is built once at engine construction, reused across iterations
//! and strategies, and shut down when the engine is dropped.

use crate::error::{EngineError, Result};
use rayon::prelude::*;
use std::any::Any;
use std::panic::{catch_unwind, AssertUnwindSafe};

/// Engine-owned worker pool with a single scatter/gather operation.
pub struct StepExecutor {
    pool: rayon::ThreadPool,
}

impl std::fmt::Debug for StepExecutor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StepExecutor")
            .field("threads", &self.pool.current_num_threads())
            .finish()
    }
}

impl StepExecutor {
    /// Builds the pool. `None` sizes it to available parallelism.
    pub fn new(threads: Option<usize>) -> Result<Self> {
        let mut builder = rayon::ThreadPoolBuilder::new();
        if let Some(n) = threads {
            if n == 0 {
                return Err(EngineError::InvalidConfig(
                    "thread count must be at least 1".into(),
                ));
            }
            builder = builder.num_threads(n);
        }
        let pool = builder
            .build()
            .map_err(|e| EngineError::InvalidConfig(format!("worker pool: {e}")))?;
        Ok(Self { pool })
    }

    pub fn threads(&self) -> usize {
        self.pool.current_num_threads()
    }

    /// Runs one task per item on the pool and joins before returning.
    ///
    /// Results come back in item order. Any task error — including a panic,
    /// caught at the join — aborts the whole batch with
    /// [`EngineError::TaskFailed`], so a failed task can never leave a
    /// stale or duplicated slot behind.
    pub fn scatter<T, U, F>(&self, items: Vec<T>, task: F) -> Result<Vec<U>>
    where
        T: Send,
        U: Send,
        F: Fn(T) -> Result<U> + Send + Sync,
    {
        let joined = catch_unwind(AssertUnwindSafe(|| {
            self.pool
                .install(|| items.into_par_iter().map(|item| task(item)).collect())
        }));
        match joined {
            Ok(result) => result,
            Err(payload) => Err(EngineError::TaskFailed(panic_message(payload.as_ref()))),
        }
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "worker task panicked".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[test]
    fn test_scatter_preserves_item_order() {
        let executor = StepExecutor::new(Some(4)).expect("pool builds");
        let items: Vec<usize> = (0..100).collect();
        let doubled = executor
            .scatter(items, |i| Ok(i * 2))
            .expect("all tasks succeed");
        assert_eq!(doubled, (0..100).map(|i| i * 2).collect::<Vec<_>>());
    }

    #[test]
    fn test_scatter_runs_every_task_once() {
        let executor = StepExecutor::new(None).expect("pool builds");
        let counter = AtomicUsize::new(0);
        executor
            .scatter((0..64).collect::<Vec<_>>(), |_| {
                counter.fetch_add(1, Ordering::Relaxed);
                Ok(())
            })
            .expect("all tasks succeed");
        assert_eq!(counter.load(Ordering::Relaxed), 64);
    }

    #[test]
    fn test_failing_task_aborts_batch() {
        let executor = StepExecutor::new(Some(2)).expect("pool builds");
        let result = executor.scatter((0..16).collect::<Vec<usize>>(), |i| {
            if i == 7 {
                Err(EngineError::TaskFailed("task 7 exploded".into()))
            } else {
                Ok(i)
            }
        });
        assert!(matches!(result, Err(EngineError::TaskFailed(_))));
    }

    #[test]
    fn test_panicking_task_becomes_error() {
        let executor = StepExecutor::new(Some(2)).expect("pool builds");
        let result = executor.scatter(vec![0usize], |_| -> Result<usize> {
            panic!("boom");
        });
        match result {
            Err(EngineError::TaskFailed(msg)) => assert!(msg.contains("boom")),
            other => panic!("expected TaskFailed, got {other:?}"),
        }
    }

    #[test]
    fn test_zero_threads_rejected() {
        assert!(StepExecutor::new(Some(0)).is_err());
    }
}
