// src/lib.rs

//! dagqueue — a lightweight, strictly sequential task-graph execution
//! engine.
//!
//! A [`Queue`] owns an ordered list of [`Task`]s; running the queue invokes
//! every task once, in insertion order, resolving each task's input from
//! its parents with a first-succeeding-parent fallback scan. Parents are
//! lightweight [`TaskId`] handles into the queue, so dependency edges are
//! never ownership edges.
//!
//! ```
//! use dagqueue::{BodyOutput, Payload, Queue, RunOptions, Task, TaskFlag};
//! use serde_json::json;
//!
//! let mut queue = Queue::new();
//! let init = queue.append(Task::from_fn(
//!     "Init",
//!     |_flag: TaskFlag, _input: &Payload, _config: &Payload| {
//!         let mut out = Payload::new();
//!         out.insert("result".to_string(), json!(1));
//!         Ok(BodyOutput::success(out))
//!     },
//! ));
//! let next = queue.append(Task::from_fn(
//!     "Next",
//!     |_flag: TaskFlag, input: &Payload, _config: &Payload| {
//!         Ok(BodyOutput::success(input.clone()))
//!     },
//! ));
//! queue.add_parent(next, init)?;
//!
//! let history = queue.run(None, RunOptions::default())?;
//! assert_eq!(history.len(), 2);
//! assert_eq!(queue[next].flag(), TaskFlag::Succeeded);
//! assert_eq!(queue.infostr(true), "Init() --> Next(Init)");
//! # Ok::<(), dagqueue::DagQueueError>(())
//! ```

pub mod errors;
pub mod logging;
pub mod queue;
pub mod style;
pub mod task;
pub mod types;

pub use errors::{DagQueueError, Result};
pub use queue::{Queue, RunEntry};
pub use task::{BodyOutput, Task, TaskBody, TaskId};
pub use types::{Payload, RunOptions, TaskFlag};
