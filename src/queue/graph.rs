// src/queue/graph.rs

//! Ordered task storage and parent-edge management.

use std::collections::HashSet;
use std::ops::Index;

use tracing::debug;

use crate::errors::{DagQueueError, Result};
use crate::task::{Task, TaskId};
use crate::types::{Payload, TaskFlag};

/// An ordered collection of tasks: insertion order is execution order.
///
/// The queue is the sole owner of its tasks and the sole issuer of
/// [`TaskId`] handles; ids restart at 0 for every queue, so independently
/// constructed queues never interfere (there is no process-wide counter).
#[derive(Debug, Default)]
pub struct Queue {
    pub(crate) tasks: Vec<Task>,
}

impl Queue {
    /// Create an empty queue for incremental building via [`Queue::append`].
    pub fn new() -> Self {
        Self { tasks: Vec::new() }
    }

    /// Create a queue from tasks in execution order, assigning ids 0..n.
    pub fn from_tasks(tasks: impl IntoIterator<Item = Task>) -> Self {
        let mut queue = Self::new();
        for task in tasks {
            queue.append(task);
        }
        queue
    }

    /// Append a task at the end of the execution order and hand back its id.
    ///
    /// An unnamed task gets the synthetic name `Task{id}` here. The
    /// appended task becomes eligible as a parent for later tasks.
    pub fn append(&mut self, mut task: Task) -> TaskId {
        let id = TaskId(self.tasks.len());
        if task.name.is_none() {
            task.name = Some(format!("Task{id}"));
        }
        debug!(task = %task.name(), id = %id, "appending task to queue");
        self.tasks.push(task);
        id
    }

    /// Number of tasks.
    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Task for a handle, or `None` if the handle was not issued by this
    /// queue.
    pub fn get(&self, id: TaskId) -> Option<&Task> {
        self.tasks.get(id.0)
    }

    /// Task for a handle, rejecting foreign handles with
    /// [`DagQueueError::UnknownTask`].
    pub fn task(&self, id: TaskId) -> Result<&Task> {
        self.tasks.get(id.0).ok_or(DagQueueError::UnknownTask { id })
    }

    fn task_mut(&mut self, id: TaskId) -> Result<&mut Task> {
        self.tasks
            .get_mut(id.0)
            .ok_or(DagQueueError::UnknownTask { id })
    }

    /// Handles of all tasks, in execution order.
    pub fn ids(&self) -> impl Iterator<Item = TaskId> + '_ {
        (0..self.tasks.len()).map(TaskId)
    }

    /// Tasks in execution order.
    pub fn tasks(&self) -> impl Iterator<Item = &Task> {
        self.tasks.iter()
    }

    /// Attach `parent` as a dependency of `child`.
    ///
    /// Fails with:
    /// - [`DagQueueError::SelfReference`] if `child == parent`;
    /// - [`DagQueueError::UnknownTask`] if either handle is not part of
    ///   this queue;
    /// - [`DagQueueError::DuplicateParent`] if the edge already exists;
    /// - [`DagQueueError::ParentOrdering`] if the parent both has parents
    ///   of its own and was queued after the child.
    ///
    /// The ordering rule is a cheap guard against forward references deep
    /// in a chain, not a full cycle check: it rejects some valid DAGs and
    /// is not a guaranteed-acyclic property.
    ///
    /// On success the parent is appended to the child's parent list; the
    /// run-time fallback scan tries parents in attachment order.
    pub fn add_parent(&mut self, child: TaskId, parent: TaskId) -> Result<()> {
        if child == parent {
            return Err(DagQueueError::SelfReference {
                task: self.task(child)?.name().to_string(),
            });
        }
        // Validate both handles before touching anything.
        let parent_has_parents = self.task(parent)?.has_parents();
        let child_task = self.task(child)?;

        if child_task.parents.contains(&parent) {
            return Err(DagQueueError::DuplicateParent {
                child: child_task.name().to_string(),
                parent: self.tasks[parent.0].name().to_string(),
            });
        }
        if parent.0 > child.0 && parent_has_parents {
            return Err(DagQueueError::ParentOrdering {
                child: child_task.name().to_string(),
                parent: self.tasks[parent.0].name().to_string(),
            });
        }

        debug!(
            child = %self.tasks[child.0].name(),
            parent = %self.tasks[parent.0].name(),
            "adding parent edge"
        );
        self.tasks[child.0].parents.push(parent);
        Ok(())
    }

    /// Attach several parents in order.
    ///
    /// The first failure aborts the remaining additions; parents added
    /// before the failure stay attached, so callers must treat an error as
    /// "some parents may have been added".
    pub fn add_parents(
        &mut self,
        child: TaskId,
        parents: impl IntoIterator<Item = TaskId>,
    ) -> Result<()> {
        for parent in parents {
            self.add_parent(child, parent)?;
        }
        Ok(())
    }

    /// Remove the parent at `index` in the child's attachment order.
    pub fn remove_parent(&mut self, child: TaskId, index: usize) -> Result<()> {
        let task = self.task_mut(child)?;
        let len = task.parents.len();
        if index >= len {
            return Err(DagQueueError::ParentIndexOutOfRange {
                task: task.name().to_string(),
                index,
                len,
            });
        }
        task.parents.remove(index);
        Ok(())
    }

    /// Remove the first parent whose name matches. Linear scan.
    pub fn remove_parent_by_name(&mut self, child: TaskId, name: &str) -> Result<()> {
        let position = self
            .task(child)?
            .parents
            .iter()
            .position(|pid| self.tasks[pid.0].name() == name);
        match position {
            Some(index) => {
                self.tasks[child.0].parents.remove(index);
                Ok(())
            }
            None => Err(DagQueueError::ParentNotFound {
                task: self.tasks[child.0].name().to_string(),
                name: name.to_string(),
            }),
        }
    }

    /// Verify the queue is runnable: all task names pairwise distinct.
    ///
    /// Called by [`Queue::run`](Queue::run) before any invocation; a
    /// failing check prevents the run from starting at all.
    pub fn check(&self) -> Result<()> {
        let mut seen = HashSet::new();
        for task in &self.tasks {
            if !seen.insert(task.name()) {
                return Err(DagQueueError::DuplicateName {
                    name: task.name().to_string(),
                });
            }
        }
        Ok(())
    }

    /// Overwrite a task's flag. Intended for manual test setup only; during
    /// a run the engine owns all flag transitions.
    pub fn set_flag(&mut self, id: TaskId, flag: TaskFlag) -> Result<()> {
        self.task_mut(id)?.flag = flag;
        Ok(())
    }

    /// Overwrite a task's output. Intended for manual test setup only.
    pub fn set_output(&mut self, id: TaskId, output: Payload) -> Result<()> {
        self.task_mut(id)?.output = output;
        Ok(())
    }
}

impl Index<TaskId> for Queue {
    type Output = Task;

    fn index(&self, id: TaskId) -> &Task {
        &self.tasks[id.0]
    }
}
