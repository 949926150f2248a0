// src/queue/runner.rs

//! The sequential execution pass.
//!
//! Tasks run once each, in insertion order, on the calling thread. Each
//! task's input is resolved from its parents by a first-succeeding-parent
//! scan in attachment order; when no parent succeeded the task still runs,
//! just with degraded input.

use anyhow::anyhow;
use tracing::{debug, info, warn};

use crate::errors::{DagQueueError, Result};
use crate::queue::graph::Queue;
use crate::task::TaskId;
use crate::types::{Payload, RunOptions, TaskFlag};

/// Per-task record of a finished (or aborted) run, in execution order.
#[derive(Debug, Clone)]
pub struct RunEntry {
    pub id: TaskId,
    pub name: String,
    pub flag: TaskFlag,
    pub output: Payload,
}

impl Queue {
    /// Execute all tasks in insertion order, once each, synchronously.
    ///
    /// Input resolution per task:
    /// 1. The first task receives the sentinel flag [`TaskFlag::None`] and
    ///    `initial_input` (empty if not provided).
    /// 2. A parent-less task at a later index receives the flag left by the
    ///    previous iteration and an empty payload. Flow state chains across
    ///    parent-less tasks on purpose.
    /// 3. A task with parents is fed from the first parent in attachment
    ///    order whose flag is `Succeeded`: that parent's output, merged
    ///    over `initial_input`, plus that parent's flag. Scanning stops at
    ///    the first success. If no parent succeeded the task is invoked
    ///    anyway with flag [`TaskFlag::Failed`] and `initial_input` alone.
    ///
    /// Body-raised failures are captured per task and the pass continues,
    /// unless `options.stop_on_error` promotes the first one to a
    /// [`DagQueueError::Body`] returned from here, leaving later tasks
    /// `NotStarted`.
    ///
    /// Returns one [`RunEntry`] per executed task.
    pub fn run(&mut self, initial_input: Option<Payload>, options: RunOptions) -> Result<Vec<RunEntry>> {
        self.check()?;

        let initial = initial_input.unwrap_or_default();
        let ntasks = self.tasks.len();
        let mut history = Vec::with_capacity(ntasks);
        let mut last_flag = TaskFlag::None;

        for index in 0..ntasks {
            let name = self.tasks[index].name().to_string();
            if options.verbose {
                info!(step = index + 1, total = ntasks, task = %name, "running task");
            } else {
                debug!(step = index + 1, total = ntasks, task = %name, "running task");
            }

            let (flag_in, input) = self.resolve_input(index, last_flag, &initial, &options);

            let task = &mut self.tasks[index];
            task.invoke(flag_in, &input, &options.config);

            if task.flag == TaskFlag::Error && options.stop_on_error {
                let source = task
                    .take_error()
                    .unwrap_or_else(|| anyhow!("task body raised"));
                warn!(task = %name, "aborting run: stop_on_error is set");
                return Err(DagQueueError::Body { task: name, source });
            }

            last_flag = task.flag;
            history.push(RunEntry {
                id: TaskId(index),
                name,
                flag: task.flag,
                output: task.output.clone(),
            });

            if options.verbose {
                info!(task = %self.tasks[index].name(), flag = %last_flag, "task finished");
            }
        }

        Ok(history)
    }

    /// Decide the flag and input payload for the task at `index`.
    fn resolve_input(
        &self,
        index: usize,
        last_flag: TaskFlag,
        initial: &Payload,
        options: &RunOptions,
    ) -> (TaskFlag, Payload) {
        let task = &self.tasks[index];

        if !task.has_parents() {
            return if index == 0 {
                (TaskFlag::None, initial.clone())
            } else {
                (last_flag, Payload::new())
            };
        }

        for pid in task.parents() {
            let parent = &self.tasks[pid.0];
            if options.verbose {
                info!(task = %task.name(), parent = %parent.name(), "trying parent");
            } else {
                debug!(task = %task.name(), parent = %parent.name(), "trying parent");
            }
            if parent.flag == TaskFlag::Succeeded {
                // First succeeded parent wins; initial input is the base
                // layer, parent output overrides on key collisions.
                let mut input = initial.clone();
                input.extend(parent.output.clone());
                return (parent.flag, input);
            }
        }

        warn!(task = %task.name(), "no parent succeeded; running with degraded input");
        (TaskFlag::Failed, initial.clone())
    }
}
