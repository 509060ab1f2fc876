use std::str::FromStr;

use super::storage::{StorageError, TaskStore};
use super::task::{Task, DEFAULT_PRIORITY};

/// Which tasks a list query returns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Filter {
    #[default]
    All,
    Completed,
    Pending,
}

impl Filter {
    pub fn matches(&self, task: &Task) -> bool {
        match self {
            Filter::All => true,
            Filter::Completed => task.completed,
            Filter::Pending => !task.completed,
        }
    }
}

impl FromStr for Filter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "all" => Ok(Filter::All),
            "completed" => Ok(Filter::Completed),
            "pending" => Ok(Filter::Pending),
            _ => Err(format!(
                "Invalid filter '{}'. Valid options are: all, completed, pending",
                s
            )),
        }
    }
}

/// Replacement fields for [`TaskList::update`]. `None` and empty strings
/// both mean "leave the field alone".
#[derive(Debug, Clone, Default)]
pub struct TaskPatch {
    pub description: Option<String>,
    pub priority: Option<String>,
    pub category: Option<String>,
}

/// The in-memory task list over a pluggable store.
///
/// Every mutating operation writes the whole list back to the store before
/// returning. A failed write is returned as the operation's error, but the
/// in-memory change stands: callers are expected to warn the user and carry
/// on, and the write is simply lost. There is no rollback or retry.
pub struct TaskList {
    tasks: Vec<Task>,
    store: Box<dyn TaskStore>,
}

impl TaskList {
    /// Wraps an already-loaded task vector. Used when the caller wants to
    /// handle load errors itself (report, then start empty).
    pub fn new(store: Box<dyn TaskStore>, tasks: Vec<Task>) -> Self {
        Self { tasks, store }
    }

    /// Loads the list from the store.
    pub fn open(store: Box<dyn TaskStore>) -> Result<Self, StorageError> {
        let tasks = store.load()?;
        Ok(Self { tasks, store })
    }

    /// Appends a new pending task and persists the list.
    ///
    /// The id is the current list length plus one, so ids are not unique
    /// across deletions: removing a task and adding again can hand out an id
    /// that is still in the list.
    ///
    /// A `None` or blank priority falls back to `"normal"`.
    pub fn add(
        &mut self,
        description: String,
        priority: Option<String>,
    ) -> Result<Task, StorageError> {
        let priority = match priority {
            Some(p) if !p.trim().is_empty() => p,
            _ => DEFAULT_PRIORITY.to_string(),
        };

        let task = Task::new(self.tasks.len() as u64 + 1, description, priority);
        self.tasks.push(task.clone());
        self.persist()?;
        Ok(task)
    }

    /// Removes the first task with the given id. `Ok(None)` when no task
    /// matches; nothing is written in that case.
    pub fn remove(&mut self, id: u64) -> Result<Option<Task>, StorageError> {
        match self.tasks.iter().position(|t| t.id == id) {
            Some(index) => {
                let removed = self.tasks.remove(index);
                self.persist()?;
                Ok(Some(removed))
            }
            None => Ok(None),
        }
    }

    /// Sets the completed flag on the first task with the given id and
    /// returns the updated task. `Ok(None)` when no task matches.
    pub fn set_completed(
        &mut self,
        id: u64,
        completed: bool,
    ) -> Result<Option<Task>, StorageError> {
        let updated = match self.tasks.iter_mut().find(|t| t.id == id) {
            Some(task) => {
                task.completed = completed;
                task.clone()
            }
            None => return Ok(None),
        };

        self.persist()?;
        Ok(Some(updated))
    }

    /// Drops every completed task and reports how many were removed.
    pub fn clear_completed(&mut self) -> Result<usize, StorageError> {
        let before = self.tasks.len();
        self.tasks.retain(|t| !t.completed);
        let removed = before - self.tasks.len();
        self.persist()?;
        Ok(removed)
    }

    /// Applies the provided patch fields to the first task with the given
    /// id; fields that are `None` or empty keep their current value.
    /// `Ok(None)` when no task matches.
    pub fn update(&mut self, id: u64, patch: TaskPatch) -> Result<Option<Task>, StorageError> {
        let updated = match self.tasks.iter_mut().find(|t| t.id == id) {
            Some(task) => {
                if let Some(description) = patch.description.filter(|v| !v.trim().is_empty()) {
                    task.description = description;
                }
                if let Some(priority) = patch.priority.filter(|v| !v.trim().is_empty()) {
                    task.priority = priority;
                }
                if let Some(category) = patch.category.filter(|v| !v.trim().is_empty()) {
                    task.category = category;
                }
                task.clone()
            }
            None => return Ok(None),
        };

        self.persist()?;
        Ok(Some(updated))
    }

    /// Returns the tasks matching `filter`, preserving their stored order.
    pub fn list(&self, filter: Filter) -> Vec<&Task> {
        self.tasks.iter().filter(|t| filter.matches(t)).collect()
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

    fn persist(&self) -> Result<(), StorageError> {
        if let Err(err) = self.store.save(&self.tasks) {
            log::error!("failed to persist task list: {}", err);
            return Err(err);
        }
        Ok(())
    }
}
