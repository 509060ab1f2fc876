use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use thiserror::Error;

use super::task::Task;

#[derive(Error, Debug)]
pub enum StorageError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
    #[error("Storage error: {0}")]
    Storage(String),
}

/// Persistence seam for the task list. Implementations read and write the
/// whole ordered list at once; there is no partial update.
pub trait TaskStore: Send + Sync {
    /// Loads the stored list. A store that has never been written to yields
    /// an empty list, not an error.
    fn load(&self) -> Result<Vec<Task>, StorageError>;

    /// Overwrites the stored list with `tasks`.
    fn save(&self, tasks: &[Task]) -> Result<(), StorageError>;
}

/// Flat-file store: one JSON array of task objects, rewritten in full on
/// every save. Indentation is cosmetic only.
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// Builds a store from user input, expanding a leading `~`.
    pub fn from_user_path(path: &str) -> Self {
        Self::new(PathBuf::from(shellexpand::tilde(path).to_string()))
    }

    /// Default task file location: `~/.config/deskmate/tasks.json`, falling
    /// back to `tasks.json` in the working directory when no home directory
    /// is known.
    pub fn default_path() -> PathBuf {
        match dirs::home_dir() {
            Some(home) => home.join(".config").join("deskmate").join("tasks.json"),
            None => PathBuf::from("tasks.json"),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl TaskStore for JsonFileStore {
    fn load(&self) -> Result<Vec<Task>, StorageError> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }

        let contents = fs::read_to_string(&self.path)?;
        if contents.trim().is_empty() {
            return Ok(Vec::new());
        }

        let tasks: Vec<Task> = serde_json::from_str(&contents)?;
        Ok(tasks)
    }

    fn save(&self, tasks: &[Task]) -> Result<(), StorageError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }

        let json = serde_json::to_string_pretty(tasks)?;
        fs::write(&self.path, json)?;
        log::debug!("saved {} task(s) to {}", tasks.len(), self.path.display());
        Ok(())
    }
}

/// In-memory store, used by tests and callers that do not want a file.
#[derive(Debug, Default)]
pub struct MemoryStore {
    tasks: Mutex<Vec<Task>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_tasks(tasks: Vec<Task>) -> Self {
        Self {
            tasks: Mutex::new(tasks),
        }
    }
}

impl TaskStore for MemoryStore {
    fn load(&self) -> Result<Vec<Task>, StorageError> {
        let tasks = self
            .tasks
            .lock()
            .map_err(|e| StorageError::Storage(format!("Failed to lock store: {}", e)))?;
        Ok(tasks.clone())
    }

    fn save(&self, tasks: &[Task]) -> Result<(), StorageError> {
        let mut slot = self
            .tasks
            .lock()
            .map_err(|e| StorageError::Storage(format!("Failed to lock store: {}", e)))?;
        *slot = tasks.to_vec();
        Ok(())
    }
}
