//! Workload scheduler: derive tasks, fan them out, collect ordered lines.
//!
//! Stretch and batch tasks are dispatched over the rayon worker pool (sized
//! to the processor count by default). Each task writes its line into its
//! own pre-allocated slot, indexed by output position, so collection needs
//! no synchronization and no channel-close bookkeeping; the final line
//! order is fixed at derivation time and independent of completion order.
//!
//! The long-lived tree is built before dispatch, retained across the whole
//! parallel phase, and counted last, once every batch has joined.

use rayon::prelude::*;
use tracing::debug;

use crate::task::{TaskKind, TaskResult};
use crate::{tree, Workload};

/// Execute the whole workload and return the output lines in their final,
/// deterministic order.
pub fn run(workload: &Workload) -> Vec<String> {
    let tasks = workload.tasks();
    debug!(
        tasks = tasks.len(),
        max_depth = workload.max_depth,
        "dispatching tree tasks"
    );

    // Retained until after the parallel phase; counted last.
    let long_lived = tree::build(workload.max_depth);

    // One slot per task, in order-key order. Each parallel task owns
    // exactly one slot.
    let mut slots: Vec<Option<TaskResult>> = (0..tasks.len()).map(|_| None).collect();
    tasks
        .par_iter()
        .zip(slots.par_iter_mut())
        .for_each(|(task, slot)| {
            if !matches!(task.kind, TaskKind::LongLived { .. }) {
                *slot = Some(task.run());
                debug!(order = task.order_key(), "task complete");
            }
        });

    // All batches have joined; the long-lived tree is counted last.
    for (task, slot) in tasks.iter().zip(slots.iter_mut()) {
        if let TaskKind::LongLived { depth } = task.kind {
            *slot = Some(TaskResult::long_lived(depth, long_lived.checksum()));
        }
    }

    slots
        .into_iter()
        .flatten()
        .map(|result| result.line)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn emits_one_line_per_task() {
        let workload = Workload::from_size(6);
        let lines = run(&workload);
        // stretch + batches at depths 4, 6 + long-lived
        assert_eq!(lines.len(), 4);
        assert!(lines[0].starts_with("stretch tree of depth 7"));
        assert!(lines[3].starts_with("long lived tree of depth 6"));
    }

    #[test]
    fn lines_are_in_order_key_order() {
        let workload = Workload::from_size(10);
        let lines = run(&workload);
        assert_eq!(lines.len(), 6);
        for (line, depth) in lines[1..5].iter().zip([4u32, 6, 8, 10]) {
            assert!(
                line.contains(&format!("trees of depth {depth}")),
                "unexpected line at depth {depth}: {line}"
            );
        }
    }
}
