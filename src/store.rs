use thiserror::Error;

use crate::models::{Filter, Task};
use crate::storage::{Storage, StorageError};

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Task description cannot be empty")]
    EmptyDescription,
    #[error("No task with ID {0}")]
    TaskNotFound(u64),
    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),
}

/// In-memory task collection backed by a storage file.
///
/// Every mutating operation writes the full collection back to storage
/// before returning, so callers never observe the two diverging. If the
/// write itself fails the in-memory mutation stands and the error is
/// reported; there is no rollback.
pub struct TaskStore {
    tasks: Vec<Task>,
    storage: Storage,
}

impl TaskStore {
    /// Open the store, loading whatever the storage file holds.
    pub fn open(storage: Storage) -> Result<Self, StoreError> {
        let tasks = storage.load()?;
        Ok(Self { tasks, storage })
    }

    /// Add a new task and persist the collection.
    ///
    /// The description is trimmed and must be non-empty. The priority
    /// defaults to "medium" and is stored as given otherwise; a blank
    /// due date is treated as absent.
    ///
    /// New IDs are positional: current collection size plus one. After
    /// deletions this can reissue an ID that is still in use, and the
    /// collection keeps both tasks. Listing order is the only thing
    /// that tells them apart.
    pub fn add(
        &mut self,
        description: &str,
        priority: Option<&str>,
        due_date: Option<&str>,
    ) -> Result<Task, StoreError> {
        let description = description.trim();
        if description.is_empty() {
            return Err(StoreError::EmptyDescription);
        }

        let mut task = Task::new(self.tasks.len() as u64 + 1, description.to_string());
        if let Some(priority) = priority {
            task.priority = priority.to_string();
        }
        task.due_date = due_date
            .map(str::trim)
            .filter(|d| !d.is_empty())
            .map(str::to_string);

        self.tasks.push(task.clone());
        self.storage.save(&self.tasks)?;
        Ok(task)
    }

    /// List tasks matching the filter, in insertion order.
    pub fn list(&self, filter: Filter) -> Vec<&Task> {
        self.tasks.iter().filter(|t| filter.matches(t)).collect()
    }

    /// Mark the first task with the given ID as completed and persist.
    ///
    /// Completing an already-completed task is a no-op that still
    /// writes. An unknown ID is an error and nothing is written.
    pub fn complete(&mut self, id: u64) -> Result<(), StoreError> {
        let task = self
            .tasks
            .iter_mut()
            .find(|t| t.id == id)
            .ok_or(StoreError::TaskNotFound(id))?;
        task.completed = true;
        self.storage.save(&self.tasks)?;
        Ok(())
    }

    /// Remove every task with the given ID and persist.
    ///
    /// An ID with no matching task is not an error; the collection is
    /// unchanged but the snapshot is still written.
    pub fn delete(&mut self, id: u64) -> Result<(), StoreError> {
        self.tasks.retain(|t| t.id != id);
        self.storage.save(&self.tasks)?;
        Ok(())
    }

    /// Remove all completed tasks and persist, even when none were
    /// completed.
    pub fn clear_completed(&mut self) -> Result<(), StoreError> {
        self.tasks.retain(|t| !t.completed);
        self.storage.save(&self.tasks)?;
        Ok(())
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }
}
