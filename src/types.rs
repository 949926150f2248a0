// src/types.rs

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Input/output payload passed between tasks.
///
/// A `BTreeMap` keeps key order deterministic, which matters for rendering
/// and for tests.
pub type Payload = BTreeMap<String, serde_json::Value>;

/// Timestamp format used in reports.
pub const DATETIME_FMT: &str = "%Y-%m-%d %H:%M:%S";

/// Status of a task's last invocation.
///
/// - `NotStarted`: the task has not been invoked in this queue's lifetime.
/// - `Failed`: the body ran and reported an unsuccessful outcome.
/// - `Succeeded`: the body ran and reported success.
/// - `Error`: the body raised; the failure is captured on the task.
/// - `None`: sentinel meaning "no prior status". Never a terminal state;
///   it is only fed as the flag argument to the very first task of a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskFlag {
    NotStarted,
    Failed,
    Succeeded,
    Error,
    None,
}

impl TaskFlag {
    /// Lowercase label used in reports and rendering.
    pub fn label(self) -> &'static str {
        match self {
            TaskFlag::NotStarted => "not_started",
            TaskFlag::Failed => "failed",
            TaskFlag::Succeeded => "succeeded",
            TaskFlag::Error => "error",
            TaskFlag::None => "none",
        }
    }
}

impl fmt::Display for TaskFlag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Options for [`Queue::run`](crate::queue::Queue::run).
#[derive(Debug, Clone, Default)]
pub struct RunOptions {
    /// When `true`, the first body-raised failure aborts the whole run and
    /// propagates to the caller. Later tasks stay `NotStarted`.
    pub stop_on_error: bool,
    /// Narrate the run at `info` level. Diagnostic only; no semantic effect.
    pub verbose: bool,
    /// Free-form configuration forwarded verbatim to every body invocation.
    pub config: Payload,
}
