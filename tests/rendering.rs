// tests/rendering.rs

use dagqueue::{DagQueueError, Queue, RunOptions};
use dagqueue_test_utils::builders::{raising, succeeding};
use dagqueue_test_utils::init_tracing;

#[test]
fn empty_queue_report_fails_explicitly() {
    init_tracing();
    let q = Queue::new();
    assert!(matches!(q.report(), Err(DagQueueError::EmptyQueue)));
}

#[test]
fn infostr_renders_chain_with_synthetic_names() {
    init_tracing();
    let mut q = Queue::new();
    let t0 = q.append(dagqueue::Task::new(noop));
    let t1 = q.append(dagqueue::Task::new(noop));

    assert_eq!(q.infostr(true), "Task0() --> Task1()");

    q.add_parent(t1, t0).unwrap();
    assert_eq!(q.infostr(true), "Task0() --> Task1(Task0)");

    q.remove_parent(t1, 0).unwrap();
    assert_eq!(q.infostr(true), "Task0() --> Task1()");
}

#[test]
fn infostr_anonymous_mode_renders_queue_positions() {
    init_tracing();
    let mut q = Queue::new();
    let a = q.append(succeeding("Init", 1));
    let b = q.append(succeeding("B", 2));
    let c = q.append(succeeding("C", 3));
    q.add_parents(c, [b, a]).unwrap();

    assert_eq!(q.infostr(false), "Task-0() --> Task-1() --> Task-2(Task-1,Task-0)");
    assert_eq!(q.infostr(true), "Init() --> B() --> C(B,Init)");
}

#[test]
fn infostr_is_idempotent() {
    init_tracing();
    let mut q = Queue::new();
    let a = q.append(succeeding("A", 1));
    let b = q.append(succeeding("B", 2));
    q.add_parent(b, a).unwrap();

    assert_eq!(q.infostr(true), q.infostr(true));
    assert_eq!(q.to_string(), q.infostr(true));
}

#[test]
fn long_chains_wrap_to_a_new_visual_line() {
    init_tracing();
    let mut q = Queue::new();
    for i in 0..20 {
        q.append(succeeding(&format!("a_rather_long_task_name_{i}"), i));
    }
    let rendered = q.infostr(true);
    assert!(rendered.contains("... \n ... --> "));
}

#[test]
fn report_lists_every_task_with_flag_and_error() {
    init_tracing();
    let mut q = Queue::new();
    q.append(succeeding("good", 1));
    q.append(raising("bad", "exploded"));

    q.run(None, RunOptions::default()).unwrap();
    let report = q.report().unwrap();

    assert!(report.contains("Queue report"));
    assert!(report.contains("good"));
    assert!(report.contains("succeeded"));
    assert!(report.contains("bad"));
    assert!(report.contains("error"));
    assert!(report.contains("err: exploded"));
}

#[test]
fn report_on_fresh_queue_shows_not_started_without_timestamps() {
    init_tracing();
    let mut q = Queue::new();
    q.append(succeeding("pending", 1));

    let report = q.report().unwrap();
    assert!(report.contains("not_started"));
    assert!(report.contains("(- - -)"));
}

fn noop(
    _flag: dagqueue::TaskFlag,
    _input: &dagqueue::Payload,
    _config: &dagqueue::Payload,
) -> anyhow::Result<dagqueue::BodyOutput> {
    Ok(dagqueue::BodyOutput::default())
}
