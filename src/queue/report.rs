// src/queue/report.rs

//! Presentation of finished queue state. No engine logic, no mutation.

use std::fmt;

use chrono::{DateTime, Local};

use crate::errors::{DagQueueError, Result};
use crate::queue::graph::Queue;
use crate::style;
use crate::types::{DATETIME_FMT, TaskFlag};

/// Wrap the dependency chain onto a new visual line past this width.
const MAX_LINE_LENGTH: usize = 123;

impl Queue {
    /// One status line per task: name, coloured flag, start/end timestamps
    /// and the captured failure's description when present.
    ///
    /// Fails with [`DagQueueError::EmptyQueue`] on a queue with no tasks
    /// rather than producing misleading blank output.
    pub fn report(&self) -> Result<String> {
        let width = self
            .tasks
            .iter()
            .map(|t| t.name().len())
            .max()
            .ok_or(DagQueueError::EmptyQueue)?
            + 2;

        let mut out = String::from("------------\nQueue report\n------------\n");
        for task in &self.tasks {
            let flag_str = match task.flag() {
                TaskFlag::Failed | TaskFlag::Error => style::fail(task.flag().label()),
                TaskFlag::Succeeded => style::ok(task.flag().label()),
                other => other.label().to_string(),
            };
            out.push_str(&format!(
                "{:>w$}: {:<18} ({} - {})",
                task.name(),
                flag_str,
                fmt_time(task.start_time()),
                fmt_time(task.end_time()),
                w = width,
            ));
            if let Some(err) = task.error() {
                out.push_str(&format!(" err: {err}"));
            }
            out.push('\n');
        }
        Ok(out)
    }

    /// Print [`Queue::report`] to stdout.
    pub fn print_report(&self) -> Result<()> {
        print!("{}", self.report()?);
        Ok(())
    }

    /// Render the dependency chain, e.g. `Init() --> B(Init) --> C(B,Init)`.
    ///
    /// With `use_task_name == false`, tasks render by queue position as
    /// `Task-{index}` instead. Long chains wrap once the accumulated text
    /// exceeds a line-width threshold. Purely cosmetic and idempotent.
    pub fn infostr(&self, use_task_name: bool) -> String {
        let ntasks = self.tasks.len();
        let mut out = String::new();
        let mut nlines = 1;

        for (itask, task) in self.tasks.iter().enumerate() {
            if use_task_name {
                out.push_str(task.name());
            } else {
                out.push_str(&format!("Task-{itask}"));
            }
            out.push('(');
            let nparents = task.parents().len();
            for (iparent, pid) in task.parents().iter().enumerate() {
                if use_task_name {
                    out.push_str(self.tasks[pid.index()].name());
                } else {
                    out.push_str(&format!("Task-{}", pid.index()));
                }
                if iparent != nparents - 1 {
                    out.push(',');
                }
            }
            out.push(')');

            if itask != ntasks - 1 {
                out.push_str(" --> ");
                if out.len() > nlines * MAX_LINE_LENGTH {
                    nlines += 1;
                    out.push_str("... \n ... --> ");
                }
            }
        }

        out
    }

    /// Print the dependency chain to stdout.
    pub fn info(&self) {
        println!("{}", self.infostr(true));
    }
}

impl fmt::Display for Queue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.infostr(true))
    }
}

fn fmt_time(t: Option<DateTime<Local>>) -> String {
    match t {
        Some(t) => t.format(DATETIME_FMT).to_string(),
        None => "-".to_string(),
    }
}
