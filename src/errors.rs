// src/errors.rs

//! Crate-wide error taxonomy and `Result` alias.

use thiserror::Error;

use crate::task::TaskId;

#[derive(Error, Debug)]
pub enum DagQueueError {
    #[error("task '{task}' cannot be added as its own parent")]
    SelfReference { task: String },

    #[error(
        "parent '{parent}' of task '{child}' must have no parents of its own \
         or be queued before the child"
    )]
    ParentOrdering { child: String, parent: String },

    #[error("task '{parent}' is already a parent of '{child}'")]
    DuplicateParent { child: String, parent: String },

    #[error("all tasks in a queue must have distinct names; '{name}' appears more than once")]
    DuplicateName { name: String },

    #[error("task id {id} is not part of this queue")]
    UnknownTask { id: TaskId },

    #[error("parent index {index} out of range for task '{task}' ({len} parents)")]
    ParentIndexOutOfRange {
        task: String,
        index: usize,
        len: usize,
    },

    #[error("no parent named '{name}' on task '{task}'")]
    ParentNotFound { task: String, name: String },

    #[error("queue is empty; nothing to report")]
    EmptyQueue,

    /// A task body raised, promoted to a run-aborting error by
    /// `stop_on_error`.
    #[error("task '{task}' raised: {source}")]
    Body {
        task: String,
        #[source]
        source: anyhow::Error,
    },
}

pub type Result<T> = std::result::Result<T, DagQueueError>;
