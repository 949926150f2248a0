// src/task/mod.rs

//! Tasks: identity, dependency handles and per-run state.

pub mod body;

pub use body::{BodyOutput, TaskBody};

use std::fmt;

use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::types::{Payload, TaskFlag};

/// Handle to a task inside a [`Queue`](crate::queue::Queue).
///
/// Ids are allocated by the owning queue, start at 0 per queue and are
/// stable for the queue's lifetime (tasks are never removed). They double
/// as the task's position in execution order. A handle is only meaningful
/// for the queue that issued it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct TaskId(pub(crate) usize);

impl TaskId {
    /// Position of the task in the queue's execution order.
    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A single unit of work: a name, a user-supplied body, dependency edges
/// and the mutable state left behind by the last invocation.
///
/// Tasks are built standalone and appended to a [`Queue`](crate::queue::Queue),
/// which assigns the id and a synthetic `Task{id}` name if none was given.
/// Parent edges are attached through the queue, which owns all tasks;
/// `parents` holds handles, not references, so dependency edges are never
/// ownership edges.
pub struct Task {
    pub(crate) name: Option<String>,
    pub(crate) body: Box<dyn TaskBody>,
    pub(crate) flag: TaskFlag,
    pub(crate) output: Payload,
    pub(crate) error: Option<anyhow::Error>,
    pub(crate) start_time: Option<DateTime<Local>>,
    pub(crate) end_time: Option<DateTime<Local>>,
    pub(crate) parents: Vec<TaskId>,
}

impl Task {
    /// Create an unnamed task; the queue names it `Task{id}` on append.
    pub fn new(body: impl TaskBody + 'static) -> Self {
        Self {
            name: None,
            body: Box::new(body),
            flag: TaskFlag::NotStarted,
            output: Payload::new(),
            error: None,
            start_time: None,
            end_time: None,
            parents: Vec::new(),
        }
    }

    /// Create a named task.
    pub fn with_name(body: impl TaskBody + 'static, name: impl Into<String>) -> Self {
        let mut task = Self::new(body);
        task.name = Some(name.into());
        task
    }

    /// Convenience constructor wrapping a closure body.
    pub fn from_fn<F>(name: impl Into<String>, f: F) -> Self
    where
        F: FnMut(TaskFlag, &Payload, &Payload) -> anyhow::Result<BodyOutput> + 'static,
    {
        Self::with_name(f, name)
    }

    /// Task name. Empty until the queue has assigned one, if the task was
    /// built without an explicit name.
    pub fn name(&self) -> &str {
        self.name.as_deref().unwrap_or("")
    }

    pub fn flag(&self) -> TaskFlag {
        self.flag
    }

    /// Output of the last successful or failed invocation; empty after an
    /// error or before the first run.
    pub fn output(&self) -> &Payload {
        &self.output
    }

    /// Failure captured from the last invocation, if the body raised.
    pub fn error(&self) -> Option<&anyhow::Error> {
        self.error.as_ref()
    }

    pub fn start_time(&self) -> Option<DateTime<Local>> {
        self.start_time
    }

    pub fn end_time(&self) -> Option<DateTime<Local>> {
        self.end_time
    }

    /// Parent handles in attachment order. The run-time fallback scan tries
    /// parents in exactly this order.
    pub fn parents(&self) -> &[TaskId] {
        &self.parents
    }

    pub fn has_parents(&self) -> bool {
        !self.parents.is_empty()
    }

    /// Invoke the body and record the outcome on the task.
    ///
    /// The start timestamp is taken before the call, the end timestamp
    /// unconditionally after it, raised or not. A raised failure is
    /// captured, never propagated from here; the runner decides whether to
    /// promote it.
    pub(crate) fn invoke(&mut self, flag: TaskFlag, input: &Payload, config: &Payload) {
        self.start_time = Some(Local::now());
        match self.body.call(flag, input, config) {
            Ok(out) => {
                self.flag = if out.success {
                    TaskFlag::Succeeded
                } else {
                    TaskFlag::Failed
                };
                self.output = out.output;
                self.error = None;
            }
            Err(err) => {
                debug!(task = %self.name(), error = %err, "task body raised");
                self.flag = TaskFlag::Error;
                self.output = Payload::new();
                self.error = Some(err);
            }
        }
        self.end_time = Some(Local::now());
    }

    /// Move the captured failure out of the task (used when `stop_on_error`
    /// promotes it to the run's error channel).
    pub(crate) fn take_error(&mut self) -> Option<anyhow::Error> {
        self.error.take()
    }
}

impl fmt::Display for Task {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.error {
            Some(err) => write!(f, "{} (flag={}, err_msg={})", self.name(), self.flag, err),
            None => write!(f, "{} (flag={})", self.name(), self.flag),
        }
    }
}

impl fmt::Debug for Task {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Task")
            .field("name", &self.name)
            .field("flag", &self.flag)
            .field("output", &self.output)
            .field("parents", &self.parents)
            .field("start_time", &self.start_time)
            .field("end_time", &self.end_time)
            .finish_non_exhaustive()
    }
}
