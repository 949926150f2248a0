#![allow(dead_code)]

//! Deterministic task bodies for tests.

use std::cell::RefCell;
use std::rc::Rc;

use anyhow::anyhow;
use dagqueue::{BodyOutput, Payload, Task, TaskFlag};
use serde_json::json;

/// Task whose body always succeeds with `{"result": value}`.
pub fn succeeding(name: &str, value: i64) -> Task {
    Task::from_fn(
        name,
        move |_flag: TaskFlag, _input: &Payload, _config: &Payload| {
            let mut out = Payload::new();
            out.insert("result".to_string(), json!(value));
            Ok(BodyOutput::success(out))
        },
    )
}

/// Task whose body always reports failure, with `{"result": 0}` as output.
pub fn failing(name: &str) -> Task {
    Task::from_fn(
        name,
        |_flag: TaskFlag, _input: &Payload, _config: &Payload| {
            let mut out = Payload::new();
            out.insert("result".to_string(), json!(0));
            Ok(BodyOutput::failure(out))
        },
    )
}

/// Task whose body always raises with the given message.
pub fn raising(name: &str, msg: impl Into<String>) -> Task {
    let msg = msg.into();
    Task::from_fn(
        name,
        move |_flag: TaskFlag, _input: &Payload, _config: &Payload| {
            Err(anyhow!("{msg}"))
        },
    )
}

/// Task whose body succeeds and echoes its input payload as output.
pub fn echo(name: &str) -> Task {
    Task::from_fn(
        name,
        |_flag: TaskFlag, input: &Payload, _config: &Payload| {
            Ok(BodyOutput::success(input.clone()))
        },
    )
}

/// Recorded `(flag, input)` pairs from every invocation of a probed task.
pub type Probe = Rc<RefCell<Vec<(TaskFlag, Payload)>>>;

/// Task that records what it was invoked with and echoes its input.
///
/// `success` decides the reported outcome. The queue is single-threaded by
/// contract, so an `Rc` probe is fine here.
pub fn probed(name: &str, success: bool) -> (Task, Probe) {
    let probe: Probe = Rc::new(RefCell::new(Vec::new()));
    let recorder = Rc::clone(&probe);
    let task = Task::from_fn(
        name,
        move |flag: TaskFlag, input: &Payload, _config: &Payload| {
            recorder.borrow_mut().push((flag, input.clone()));
            Ok(if success {
                BodyOutput::success(input.clone())
            } else {
                BodyOutput::failure(input.clone())
            })
        },
    );
    (task, probe)
}
