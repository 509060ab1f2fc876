//! Two small desk utilities in one crate: a multiple-choice quiz runner
//! and a JSON-file-backed to-do list.
//!
//! The halves are independent of each other. Each ships as its own binary
//! (`quiz` and `todo`), and each interactive loop runs over any
//! `BufRead`/`Write` pair, which is also how the tests drive them.
//!
//! ```no_run
//! use deskmate::todo::{JsonFileStore, TaskList};
//!
//! fn main() -> Result<(), deskmate::todo::StorageError> {
//!     let store = JsonFileStore::new(JsonFileStore::default_path());
//!     let mut list = TaskList::open(Box::new(store))?;
//!     list.add("Buy milk".to_string(), None)?;
//!     Ok(())
//! }
//! ```

pub mod quiz;
pub mod todo;
