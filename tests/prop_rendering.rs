// tests/prop_rendering.rs

use proptest::prelude::*;

use dagqueue::{Queue, TaskId};
use dagqueue_test_utils::builders::succeeding;

// Build a queue of `num_tasks` tasks with the given parent edges attached.
// Edges are sanitized to backward references (parent queued before child),
// which `add_parent` always accepts; anything it still rejects (duplicates)
// is simply skipped, mirroring how a caller would build a valid graph.
fn build_queue(num_tasks: usize, raw_edges: &[(usize, usize)]) -> (Queue, Vec<TaskId>) {
    let mut q = Queue::new();
    let ids: Vec<TaskId> = (0..num_tasks)
        .map(|i| q.append(succeeding(&format!("task_{i}"), i as i64)))
        .collect();

    for &(child, parent) in raw_edges {
        let child = child % num_tasks;
        if child == 0 {
            continue;
        }
        let parent = parent % child;
        let _ = q.add_parent(ids[child], ids[parent]);
    }

    (q, ids)
}

proptest! {
    #[test]
    fn infostr_is_idempotent(
        num_tasks in 1..12usize,
        raw_edges in proptest::collection::vec((any::<usize>(), any::<usize>()), 0..30),
        use_task_name in any::<bool>(),
    ) {
        let (q, _ids) = build_queue(num_tasks, &raw_edges);
        prop_assert_eq!(q.infostr(use_task_name), q.infostr(use_task_name));
    }

    #[test]
    fn add_then_remove_parent_restores_rendering(
        num_tasks in 2..12usize,
        raw_edges in proptest::collection::vec((any::<usize>(), any::<usize>()), 0..30),
        child_pick in any::<usize>(),
        parent_pick in any::<usize>(),
    ) {
        let (mut q, ids) = build_queue(num_tasks, &raw_edges);

        let child = 1 + child_pick % (num_tasks - 1);
        let parent = parent_pick % child;

        // Only exercise the round-trip when the edge is actually new.
        prop_assume!(!q[ids[child]].parents().contains(&ids[parent]));

        let before = q.infostr(true);
        q.add_parent(ids[child], ids[parent]).unwrap();
        let last = q[ids[child]].parents().len() - 1;
        q.remove_parent(ids[child], last).unwrap();
        prop_assert_eq!(before, q.infostr(true));
    }
}
