// src/task/body.rs

//! The task body seam.
//!
//! A body is the user-supplied unit of work a [`Task`](crate::task::Task)
//! wraps. The engine treats it as opaque: it is invoked with the previous
//! status flag, an input payload and free-form configuration, and either
//! returns a [`BodyOutput`] or raises an [`anyhow::Error`].
//!
//! Both historical call shapes — a plain function and an object exposing a
//! `run` entry point — collapse into the single [`TaskBody`] trait; closures
//! get it for free through the blanket impl.

use crate::types::{Payload, TaskFlag};

/// Canonical return value of a task body.
#[derive(Debug, Clone, Default)]
pub struct BodyOutput {
    /// Whether the body considers its work successful. `false` maps to
    /// [`TaskFlag::Failed`], `true` to [`TaskFlag::Succeeded`].
    pub success: bool,
    /// Output payload fed to dependents that select this task as parent.
    pub output: Payload,
}

impl BodyOutput {
    pub fn success(output: Payload) -> Self {
        Self {
            success: true,
            output,
        }
    }

    pub fn failure(output: Payload) -> Self {
        Self {
            success: false,
            output,
        }
    }
}

/// A unit of work executable by the queue.
pub trait TaskBody {
    /// Invoke the body.
    ///
    /// `flag` is the status of the selected predecessor (`TaskFlag::None`
    /// for the first task of a run, `TaskFlag::Failed` when every parent
    /// fell through). `config` is the run-wide configuration from
    /// [`RunOptions`](crate::types::RunOptions).
    ///
    /// A returned `Err` marks the task [`TaskFlag::Error`] and is captured
    /// on the task; it never unwinds.
    fn call(
        &mut self,
        flag: TaskFlag,
        input: &Payload,
        config: &Payload,
    ) -> anyhow::Result<BodyOutput>;
}

impl<F> TaskBody for F
where
    F: FnMut(TaskFlag, &Payload, &Payload) -> anyhow::Result<BodyOutput>,
{
    fn call(
        &mut self,
        flag: TaskFlag,
        input: &Payload,
        config: &Payload,
    ) -> anyhow::Result<BodyOutput> {
        self(flag, input, config)
    }
}
