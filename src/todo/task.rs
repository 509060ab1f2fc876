use serde::{Deserialize, Serialize};

/// Priority assigned when the user leaves the prompt empty.
pub const DEFAULT_PRIORITY: &str = "normal";

/// Category assigned to every new task. The menu never asks for one, so in
/// practice all stored tasks carry this value.
pub const DEFAULT_CATEGORY: &str = "general";

/// A single to-do entry, stored verbatim as one JSON object.
///
/// `priority` and `category` are free-form strings, not enums: the stored
/// file accepts whatever text was entered and older files keep whatever they
/// contain.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    /// Assigned as list length + 1 at insertion. Not unique across
    /// deletions: removing a task and adding a new one can repeat an id
    /// that is still in the list.
    pub id: u64,
    pub description: String,
    pub priority: String,
    pub completed: bool,
    pub category: String,
}

impl Task {
    /// Creates a pending task in the default category.
    pub fn new(id: u64, description: String, priority: String) -> Self {
        Self {
            id,
            description,
            priority,
            completed: false,
            category: DEFAULT_CATEGORY.to_string(),
        }
    }
}
