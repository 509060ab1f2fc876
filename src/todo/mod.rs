//! The to-do half of the crate: an ordered task list loaded from a JSON
//! file at startup, mutated through [`TaskList`] and rewritten in full on
//! every change, plus the interactive numbered menu that drives it.

pub mod list;
pub mod menu;
pub mod storage;
pub mod task;

pub use list::{Filter, TaskList, TaskPatch};
pub use storage::{JsonFileStore, MemoryStore, StorageError, TaskStore};
pub use task::{Task, DEFAULT_CATEGORY, DEFAULT_PRIORITY};
