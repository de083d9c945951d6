//! Task model: one schedulable unit of tree work.
//!
//! A run consists of one stretch task, one batch task per even depth, and
//! one long-lived task. Each produces exactly one output line; the order
//! key fixes where that line lands in the final output, independent of
//! completion order.

use crate::tree;

/// What a task does.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskKind {
    /// Build one tree of `depth`, checksum it, discard it.
    Stretch {
        /// Tree depth (`max_depth + 1`).
        depth: u32,
    },
    /// Build and checksum `iterations` independent trees of `depth`,
    /// summing the checksums.
    Batch {
        /// Tree depth.
        depth: u32,
        /// Number of build+checksum cycles.
        iterations: u64,
    },
    /// Build one tree of `depth` and retain it for the whole run; it is
    /// checksummed only after every batch has finished.
    LongLived {
        /// Tree depth (`max_depth`).
        depth: u32,
    },
}

/// A unit of scheduled work, executed exactly once.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Task {
    /// What to do.
    pub kind: TaskKind,
}

impl Task {
    /// Wrap a kind in a task.
    pub fn new(kind: TaskKind) -> Self {
        Self { kind }
    }

    /// Sort key for final output: stretch first, batches by ascending
    /// depth, long-lived last.
    pub fn order_key(&self) -> u32 {
        match self.kind {
            TaskKind::Stretch { .. } => 0,
            TaskKind::Batch { depth, .. } => depth,
            TaskKind::LongLived { .. } => u32::MAX,
        }
    }

    /// Execute the task to completion, building and counting its trees.
    ///
    /// The driver does not dispatch long-lived tasks through this method:
    /// their tree must outlive the parallel phase, so it is built up front
    /// and counted only after all batches join.
    pub fn run(&self) -> TaskResult {
        match self.kind {
            TaskKind::Stretch { depth } => {
                let check = tree::build(depth).checksum();
                TaskResult::stretch(depth, check)
            }
            TaskKind::Batch { depth, iterations } => {
                let mut check = 0;
                for _ in 0..iterations {
                    check += tree::build(depth).checksum();
                }
                TaskResult::batch(depth, iterations, check)
            }
            TaskKind::LongLived { depth } => {
                let check = tree::build(depth).checksum();
                TaskResult::long_lived(depth, check)
            }
        }
    }
}

/// One completed task: its order key and formatted output line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskResult {
    /// Position of `line` in the final output.
    pub order: u32,
    /// The formatted, tab-separated result line.
    pub line: String,
}

impl TaskResult {
    /// Result line for the stretch tree.
    pub fn stretch(depth: u32, check: u64) -> Self {
        Self {
            order: 0,
            line: format!("stretch tree of depth {depth}\t check: {check}"),
        }
    }

    /// Result line for a batch of trees at one depth.
    pub fn batch(depth: u32, iterations: u64, check: u64) -> Self {
        Self {
            order: depth,
            line: format!("{iterations}\t trees of depth {depth}\t check: {check}"),
        }
    }

    /// Result line for the long-lived tree.
    pub fn long_lived(depth: u32, check: u64) -> Self {
        Self {
            order: u32::MAX,
            line: format!("long lived tree of depth {depth}\t check: {check}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stretch_line_format() {
        let result = Task::new(TaskKind::Stretch { depth: 11 }).run();
        assert_eq!(result.order, 0);
        assert_eq!(result.line, "stretch tree of depth 11\t check: 4095");
    }

    #[test]
    fn batch_sums_checksums_over_iterations() {
        let result = Task::new(TaskKind::Batch { depth: 4, iterations: 1024 }).run();
        assert_eq!(result.order, 4);
        assert_eq!(result.line, "1024\t trees of depth 4\t check: 31744");
    }

    #[test]
    fn long_lived_line_format() {
        let result = TaskResult::long_lived(10, 2047);
        assert_eq!(result.order, u32::MAX);
        assert_eq!(result.line, "long lived tree of depth 10\t check: 2047");
    }

    #[test]
    fn running_a_task_twice_is_deterministic() {
        let task = Task::new(TaskKind::Batch { depth: 6, iterations: 32 });
        assert_eq!(task.run(), task.run());
    }
}
