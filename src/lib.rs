//! # arbormark
//!
//! A binary-tree allocation microbenchmark in the style of the benchmarks
//! game `binary-trees` workload, used to compare memory-management
//! strategies.
//!
//! ## Workload
//!
//! 1. **Stretch tree**: one tree of depth `max_depth + 1`, built and
//!    discarded once to exercise peak allocation
//! 2. **Batch tasks**: for each even depth in `[4, max_depth]`, build and
//!    checksum `2^(max_depth − depth + 4)` independent trees
//! 3. **Long-lived tree**: one tree of depth `max_depth`, retained for the
//!    whole run and counted last
//!
//! Batches run in parallel over a worker pool; the emitted lines are always
//! in depth order regardless of completion order.
//!
//! ## Usage Example
//!
//! ```
//! use arbormark::{driver, Workload};
//!
//! let workload = Workload::from_size(10);
//! let lines = driver::run(&workload);
//! assert_eq!(lines[0], "stretch tree of depth 11\t check: 4095");
//! ```

#![warn(missing_docs, missing_debug_implementations)]

pub mod arena;
pub mod driver;
pub mod task;
pub mod tree;

pub use arena::{NodeArena, NodeId};
pub use task::{Task, TaskKind, TaskResult};
pub use tree::Node;

use thiserror::Error;

/// Smallest batch depth; also the clamping floor for `max_depth` together
/// with the `+ 2` headroom below.
pub const MIN_DEPTH: u32 = 4;

/// Errors surfaced at startup.
///
/// Allocation failure is deliberately absent: it aborts the process and is
/// never caught or retried.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum WorkloadError {
    /// The command-line size argument was not a valid integer.
    #[error("invalid workload size '{0}': expected an integer")]
    InvalidSize(String),
}

/// Parse the problem-size argument.
///
/// Malformed input is rejected rather than silently defaulted; a *missing*
/// argument defaults to 0 at the CLI layer.
pub fn parse_size(arg: &str) -> Result<i64, WorkloadError> {
    arg.trim()
        .parse()
        .map_err(|_| WorkloadError::InvalidSize(arg.to_string()))
}

/// Derived workload parameters for one run.
///
/// All tasks are a pure function of the single size parameter `n`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Workload {
    /// Smallest batch depth (always [`MIN_DEPTH`]).
    pub min_depth: u32,

    /// Deepest batch depth, and the depth of the long-lived tree.
    pub max_depth: u32,
}

impl Workload {
    /// Derive parameters from the problem size.
    ///
    /// `max_depth = max(n, min_depth + 2)`; sizes below 6 (including
    /// negative ones) are clamped, never rejected.
    pub fn from_size(n: i64) -> Self {
        let min_depth = MIN_DEPTH;
        let max_depth = n.max((min_depth + 2) as i64) as u32;
        Self { min_depth, max_depth }
    }

    /// Depth of the stretch tree.
    pub fn stretch_depth(&self) -> u32 {
        self.max_depth + 1
    }

    /// Batch depths: `min_depth, min_depth + 2, …, max_depth`.
    pub fn batch_depths(&self) -> impl Iterator<Item = u32> {
        (self.min_depth..=self.max_depth).step_by(2)
    }

    /// Trees per batch at the given depth: `2^(max_depth − depth + min_depth)`.
    ///
    /// Shallow batches build many small trees, deep batches few large ones,
    /// so every batch allocates roughly the same number of nodes.
    pub fn iterations_for(&self, depth: u32) -> u64 {
        1u64 << (self.max_depth - depth + self.min_depth)
    }

    /// Derive the full task list, sorted by output order key:
    /// stretch first, batches by ascending depth, long-lived last.
    pub fn tasks(&self) -> Vec<Task> {
        let mut tasks = Vec::with_capacity(self.batch_depths().count() + 2);
        tasks.push(Task::new(TaskKind::Stretch {
            depth: self.stretch_depth(),
        }));
        for depth in self.batch_depths() {
            tasks.push(Task::new(TaskKind::Batch {
                depth,
                iterations: self.iterations_for(depth),
            }));
        }
        tasks.push(Task::new(TaskKind::LongLived {
            depth: self.max_depth,
        }));
        tasks.sort_by_key(Task::order_key);
        tasks
    }
}
