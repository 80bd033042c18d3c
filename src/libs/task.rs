//! Task entity and the value types the store operations accept.
//!
//! Priorities and statuses are closed enums. Their persisted form is the
//! localized label (`Средний`, `Не выполнена`, ...), and the English names are
//! accepted as aliases when parsing user input.

use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Priority {
    #[serde(rename = "Низкий", alias = "Low")]
    Low,
    #[serde(rename = "Средний", alias = "Medium")]
    Medium,
    #[serde(rename = "Высокий", alias = "High")]
    High,
}

impl Priority {
    pub const ALL: [Priority; 3] = [Priority::Low, Priority::Medium, Priority::High];

    /// Canonical label, as stored on disk.
    pub fn label(&self) -> &'static str {
        match self {
            Priority::Low => "Низкий",
            Priority::Medium => "Средний",
            Priority::High => "Высокий",
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Priority::Low => "Low",
            Priority::Medium => "Medium",
            Priority::High => "High",
        }
    }

    /// Exact match against the canonical label or the English name.
    pub fn from_label(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|p| p.label() == value || p.name() == value)
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Status {
    #[serde(rename = "Выполнена", alias = "Done")]
    Done,
    #[default]
    #[serde(rename = "Не выполнена", alias = "Not done")]
    NotDone,
}

impl Status {
    pub const ALL: [Status; 2] = [Status::Done, Status::NotDone];

    pub fn label(&self) -> &'static str {
        match self {
            Status::Done => "Выполнена",
            Status::NotDone => "Не выполнена",
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Status::Done => "Done",
            Status::NotDone => "Not done",
        }
    }

    pub fn from_label(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.label() == value || s.name() == value)
    }

    /// Case-insensitive comparison against either label, used by search.
    pub fn matches(&self, value: &str) -> bool {
        let value = value.to_lowercase();
        self.label().to_lowercase() == value || self.name().to_lowercase() == value
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A single to-do item. The `id` is assigned by the store and never changes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub id: u32,
    pub title: String,
    pub description: String,
    pub category: String,
    pub due_date: String,
    pub priority: Priority,
    pub status: Status,
}

impl Task {
    pub fn new(id: u32, title: &str, description: &str, category: &str, due_date: &str, priority: Priority) -> Self {
        Task {
            id,
            title: title.to_string(),
            description: description.to_string(),
            category: category.to_string(),
            due_date: due_date.to_string(),
            priority,
            status: Status::default(),
        }
    }
}

/// Per-field changes for an update. `None` leaves the field untouched; a
/// supplied value is validated, so `Some(String::new())` is rejected rather
/// than clearing the field.
#[derive(Debug, Clone, Default)]
pub struct TaskUpdate {
    pub title: Option<String>,
    pub description: Option<String>,
    pub category: Option<String>,
    pub due_date: Option<String>,
    pub priority: Option<String>,
    pub status: Option<String>,
}

impl TaskUpdate {
    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.description.is_none()
            && self.category.is_none()
            && self.due_date.is_none()
            && self.priority.is_none()
            && self.status.is_none()
    }
}

/// Search filters, combined with AND. Omitted filters match everything.
#[derive(Debug, Clone, Default)]
pub struct SearchQuery {
    pub task_id: Option<u32>,
    pub keyword: Option<String>,
    pub category: Option<String>,
    pub status: Option<String>,
}

impl SearchQuery {
    pub fn by_id(task_id: u32) -> Self {
        SearchQuery {
            task_id: Some(task_id),
            ..Default::default()
        }
    }

    pub fn keyword(mut self, keyword: &str) -> Self {
        self.keyword = Some(keyword.to_string());
        self
    }

    pub fn category(mut self, category: &str) -> Self {
        self.category = Some(category.to_string());
        self
    }

    pub fn status(mut self, status: &str) -> Self {
        self.status = Some(status.to_string());
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeleteTarget {
    Id(u32),
    /// Every task whose category equals this one, ignoring case.
    Category(String),
}

impl DeleteTarget {
    /// Builds a target from loose arguments. An id takes precedence over a
    /// category; with neither there is nothing to delete.
    pub fn from_args(task_id: Option<u32>, category: Option<&str>) -> Option<Self> {
        match (task_id, category) {
            (Some(id), _) => Some(DeleteTarget::Id(id)),
            (None, Some(category)) => Some(DeleteTarget::Category(category.to_string())),
            (None, None) => None,
        }
    }
}

/// Tasks sharing one exact category value, in insertion order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryGroup {
    pub category: String,
    pub tasks: Vec<Task>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_priority_from_label() {
        assert_eq!(Priority::from_label("Высокий"), Some(Priority::High));
        assert_eq!(Priority::from_label("Low"), Some(Priority::Low));
        assert_eq!(Priority::from_label("высокий"), None);
        assert_eq!(Priority::from_label("Urgent"), None);
    }

    #[test]
    fn test_status_matches_ignores_case() {
        assert!(Status::NotDone.matches("не выполнена"));
        assert!(Status::Done.matches("DONE"));
        assert!(!Status::Done.matches("Не выполнена"));
    }

    #[test]
    fn test_task_serializes_with_labels() {
        let task = Task::new(1, "Задача 1", "Описание задачи 1", "Работа", "05.12.2024", Priority::Medium);
        let value = serde_json::to_value(&task).unwrap();
        assert_eq!(value["priority"], "Средний");
        assert_eq!(value["status"], "Не выполнена");
    }

    #[test]
    fn test_task_deserializes_english_aliases() {
        let json = r#"{"id":2,"title":"t","description":"d","category":"c","due_date":"01.01.2025","priority":"High","status":"Done"}"#;
        let task: Task = serde_json::from_str(json).unwrap();
        assert_eq!(task.priority, Priority::High);
        assert_eq!(task.status, Status::Done);
    }

    #[test]
    fn test_task_update_is_empty() {
        assert!(TaskUpdate::default().is_empty());
        let changes = TaskUpdate {
            due_date: Some("01.01.2025".to_string()),
            ..Default::default()
        };
        assert!(!changes.is_empty());
    }

    #[test]
    fn test_delete_target_prefers_id() {
        assert_eq!(DeleteTarget::from_args(Some(3), Some("Work")), Some(DeleteTarget::Id(3)));
        assert_eq!(
            DeleteTarget::from_args(None, Some("Work")),
            Some(DeleteTarget::Category("Work".to_string()))
        );
        assert_eq!(DeleteTarget::from_args(None, None), None);
    }
}
