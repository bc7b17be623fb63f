//! In-memory task store with conflict detection
//!
//! One store holds one day's tasks for one interactive session. Callers
//! construct it explicitly and pass it where needed; there is no global
//! instance. All operations are synchronous and leave the store unchanged
//! on failure.

use tracing::{info, warn};

use super::observer::ConflictSink;
use super::types::{Priority, ScheduleError, Task};

/// Ordered collection of tasks for one day, rejecting time-overlapping
/// insertions and notifying registered sinks about the rejects.
#[derive(Default)]
pub struct TaskStore {
    tasks: Vec<Task>,
    sinks: Vec<Box<dyn ConflictSink>>,
}

impl TaskStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a conflict sink. Sinks are invoked synchronously, in
    /// registration order, once per rejected insertion.
    pub fn add_sink(&mut self, sink: Box<dyn ConflictSink>) {
        self.sinks.push(sink);
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Insert a task unless its interval overlaps an existing one.
    ///
    /// On overlap, every registered sink is notified with a message naming
    /// the first conflicting task and the store is left unchanged.
    pub fn add_task(&mut self, task: Task) -> Result<(), ScheduleError> {
        if let Some(existing) = self.tasks.iter().find(|t| t.overlaps(&task)) {
            let err = ScheduleError::Conflict {
                existing: existing.description.clone(),
            };
            let message = err.to_string();
            warn!(task = %task.description, "{message}");
            for sink in &self.sinks {
                sink.on_conflict(&message);
            }
            return Err(err);
        }

        info!(task = %task.description, "task added");
        self.tasks.push(task);
        Ok(())
    }

    /// Remove the first task whose description matches, ignoring letter case.
    /// Returns the removed task.
    pub fn remove_task(&mut self, description: &str) -> Result<Task, ScheduleError> {
        match self
            .tasks
            .iter()
            .position(|t| t.matches_description(description))
        {
            Some(index) => {
                let removed = self.tasks.remove(index);
                info!(task = %removed.description, "task removed");
                Ok(removed)
            }
            None => {
                warn!(%description, "remove failed: no matching task");
                Err(ScheduleError::NotFound {
                    description: description.trim().to_string(),
                })
            }
        }
    }

    /// Replace the first matching task wholesale, keeping its position.
    ///
    /// The replacement is not re-checked against the other tasks' intervals,
    /// so an edit can introduce overlaps that an insertion would reject.
    pub fn edit_task(&mut self, description: &str, replacement: Task) -> Result<(), ScheduleError> {
        match self
            .tasks
            .iter_mut()
            .find(|t| t.matches_description(description))
        {
            Some(slot) => {
                info!(task = %description, replacement = %replacement.description, "task updated");
                *slot = replacement;
                Ok(())
            }
            None => {
                warn!(%description, "edit failed: no matching task");
                Err(ScheduleError::NotFound {
                    description: description.trim().to_string(),
                })
            }
        }
    }

    /// Mark the first matching task completed. Re-marking an already
    /// completed task succeeds silently.
    pub fn mark_completed(&mut self, description: &str) -> Result<(), ScheduleError> {
        match self
            .tasks
            .iter_mut()
            .find(|t| t.matches_description(description))
        {
            Some(task) => {
                task.complete();
                info!(task = %task.description, "task completed");
                Ok(())
            }
            None => {
                warn!(%description, "complete failed: no matching task");
                Err(ScheduleError::NotFound {
                    description: description.trim().to_string(),
                })
            }
        }
    }

    /// All tasks ordered ascending by start time. The sort is stable, so
    /// tasks sharing a start time keep their prior relative order.
    pub fn tasks_by_start(&self) -> Vec<&Task> {
        let mut view: Vec<&Task> = self.tasks.iter().collect();
        view.sort_by_key(|t| t.start);
        view
    }

    /// Tasks with the given priority, ordered ascending by start time with
    /// the same stability rule as [`tasks_by_start`](Self::tasks_by_start).
    pub fn tasks_with_priority(&self, priority: Priority) -> Vec<&Task> {
        let mut view: Vec<&Task> = self
            .tasks
            .iter()
            .filter(|t| t.priority == priority)
            .collect();
        view.sort_by_key(|t| t.start);
        view
    }
}
