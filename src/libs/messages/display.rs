//! Display implementation for taskbook messages.
//!
//! Every user-facing diagnostic is written here so the wording lives in one
//! place. Validation messages name the offending field or value so the caller
//! can tell the user what to fix.

use super::types::Message;
use crate::libs::task::{Priority, Status};
use std::fmt::{Display, Formatter, Result};

impl Display for Message {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        let s = match self {
            // === VALIDATION MESSAGES ===
            Message::FieldEmpty(field) => format!("Field '{}' must be a non-empty string", field),
            Message::DateInvalidFormat(value) => format!("Invalid due date '{}'. Expected format: dd.mm.yyyy", value),
            Message::PriorityInvalid(value) => format!(
                "Invalid priority '{}'. Expected one of: {}",
                value,
                Priority::ALL.iter().map(|p| p.label()).collect::<Vec<_>>().join(", ")
            ),
            Message::StatusInvalid(value) => format!(
                "Invalid status '{}'. Expected one of: {}",
                value,
                Status::ALL.iter().map(|s| s.label()).collect::<Vec<_>>().join(", ")
            ),

            // === STORAGE MESSAGES ===
            Message::TasksLoaded(count) => format!("Loaded {} task(s)", count),
            Message::TasksFileNotFound(path) => format!("Tasks file '{}' not found. A new one will be created", path),
            Message::TasksFileCorrupted(path, err) => {
                format!("Tasks file '{}' could not be parsed and was ignored: {}", path, err)
            }
            Message::TasksFileReadFailed(path, err) => format!("Failed to read tasks file '{}': {}", path, err),
            Message::TasksSaved(path) => format!("Tasks saved to '{}'", path),
            Message::TasksSaveFailed(path, err) => format!("Failed to save tasks to '{}': {}", path, err),
            Message::NextIdAdjusted(next_id) => format!("Stored next id was behind existing tasks, continuing from {}", next_id),

            // === TASK MESSAGES ===
            Message::TaskCreated(id) => format!("Task {} created", id),
            Message::TaskUpdated(id) => format!("Task {} updated", id),
            Message::TaskDeleted(id) => format!("Task {} deleted", id),
            Message::TaskNotFoundWithId(id) => format!("Task with ID {} not found", id),
            Message::TaskIdsExhausted => "No task IDs left to assign".to_string(),
            Message::NoChangesRequested(id) => format!("No changes given for task {}", id),
            Message::TasksDeletedInCategory(category, count) => {
                format!("Deleted {} task(s) in category '{}'", count, category)
            }
            Message::TasksNotFoundInCategory(category) => format!("No tasks found in category '{}'", category),
            Message::NoDeleteTarget => "Neither a task ID nor a category was given for deletion".to_string(),
            Message::TaskCreateFailed => "Failed to create task".to_string(),
            Message::TaskUpdateFailed => "Failed to update task".to_string(),
            Message::TaskDeleteFailed => "Failed to delete task".to_string(),
            Message::TasksNotFound => "No tasks found".to_string(),
            Message::NoTasksToDisplay => "No tasks to display".to_string(),
            Message::CategoryHeader(category) => format!("Category: '{}'", category),
            Message::SearchResultsHeader(count) => format!("Found {} task(s)", count),

            // === CONFIGURATION MESSAGES ===
            Message::ConfigSaved(path) => format!("Configuration saved. Tasks file: {}", path),
        };
        write!(f, "{}", s)
    }
}
