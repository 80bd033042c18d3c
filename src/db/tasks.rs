//! File-backed task store.
//!
//! The store keeps every task in memory in insertion order, together with the
//! counter for the next id, and mirrors both to a pretty-printed JSON file.
//! Every successful mutation rewrites the whole file before returning.
//!
//! ## File format
//!
//! ```json
//! {
//!     "tasks": [
//!         {
//!             "id": 1,
//!             "title": "Задача 1",
//!             "description": "Описание задачи 1",
//!             "category": "Работа",
//!             "due_date": "05.12.2024",
//!             "priority": "Средний",
//!             "status": "Не выполнена"
//!         }
//!     ],
//!     "next_id": 2
//! }
//! ```
//!
//! ## Outcomes
//!
//! Operations return `bool` rather than `Result`: a `false` from a mutating
//! operation means either that nothing changed (invalid input, nothing
//! matched) or that the in-memory change was made but could not be written.
//! A diagnostic describing which one is emitted in both cases.

use crate::libs::error::StoreError;
use crate::libs::messages::Message;
use crate::libs::task::{CategoryGroup, DeleteTarget, Priority, SearchQuery, Status, Task, TaskUpdate};
use crate::libs::validate::{parse_priority, parse_status, validate_date, validate_nonempty_text};
use crate::libs::view::View;
use crate::{msg_debug, msg_error, msg_info, msg_warning};
use serde::{Deserialize, Serialize};
use serde_json::ser::{PrettyFormatter, Serializer};
use std::collections::HashSet;
use std::fs::File;
use std::io::{BufReader, BufWriter, ErrorKind, Write};
use std::path::{Path, PathBuf};

const FIRST_ID: u32 = 1;

fn first_id() -> u32 {
    FIRST_ID
}

#[derive(Deserialize)]
struct TasksFile {
    #[serde(default)]
    tasks: Vec<Task>,
    #[serde(default = "first_id")]
    next_id: u32,
}

#[derive(Serialize)]
struct TasksFileRef<'a> {
    tasks: &'a [Task],
    next_id: u32,
}

/// Supplied update fields that passed validation.
struct CheckedUpdate<'a> {
    title: Option<&'a str>,
    description: Option<&'a str>,
    category: Option<&'a str>,
    due_date: Option<&'a str>,
    priority: Option<Priority>,
    status: Option<Status>,
}

#[derive(Debug)]
pub struct TaskStore {
    path: PathBuf,
    tasks: Vec<Task>,
    next_id: u32,
}

impl TaskStore {
    /// Opens the store backed by `path`, loading whatever it holds.
    ///
    /// A missing or unreadable file yields an empty store.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let mut store = TaskStore {
            path: path.into(),
            tasks: Vec::new(),
            next_id: FIRST_ID,
        };
        store.load();
        store
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn next_id(&self) -> u32 {
        self.next_id
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    pub fn get(&self, task_id: u32) -> Option<&Task> {
        self.tasks.iter().find(|task| task.id == task_id)
    }

    /// Replaces the in-memory state with the file contents.
    ///
    /// Returns `false` and leaves the store empty when the file is missing,
    /// cannot be read, or cannot be parsed. The file itself is never touched.
    pub fn load(&mut self) -> bool {
        self.tasks.clear();
        self.next_id = FIRST_ID;

        let path = self.path.display().to_string();
        match self.read_file() {
            Ok(Some(file)) => {
                self.next_id = file.next_id;
                self.tasks = file.tasks;
                msg_debug!(Message::TasksLoaded(self.tasks.len()));
                true
            }
            Ok(None) => {
                msg_info!(Message::TasksFileNotFound(path));
                false
            }
            Err(err @ (StoreError::Json(_) | StoreError::InvalidRecords(_))) => {
                msg_error!(Message::TasksFileCorrupted(path, err.to_string()));
                false
            }
            Err(StoreError::Io(err)) => {
                msg_error!(Message::TasksFileReadFailed(path, err.to_string()));
                false
            }
        }
    }

    /// Rewrites the whole file from the in-memory state.
    pub fn save(&self) -> bool {
        match self.write_file() {
            Ok(()) => {
                msg_debug!(Message::TasksSaved(self.path.display().to_string()));
                true
            }
            Err(err) => {
                msg_error!(Message::TasksSaveFailed(self.path.display().to_string(), err.to_string()));
                false
            }
        }
    }

    fn read_file(&self) -> Result<Option<TasksFile>, StoreError> {
        let file = match File::open(&self.path) {
            Ok(file) => file,
            Err(err) if err.kind() == ErrorKind::NotFound => return Ok(None),
            Err(err) => return Err(err.into()),
        };
        let mut tasks_file: TasksFile = serde_json::from_reader(BufReader::new(file))?;
        tasks_file.next_id = Self::checked_next_id(&tasks_file)?;
        Ok(Some(tasks_file))
    }

    fn write_file(&self) -> Result<(), StoreError> {
        let file = File::create(&self.path)?;
        let mut writer = BufWriter::new(file);
        let mut serializer = Serializer::with_formatter(&mut writer, PrettyFormatter::with_indent(b"    "));
        TasksFileRef {
            tasks: &self.tasks,
            next_id: self.next_id,
        }
        .serialize(&mut serializer)?;
        writer.write_all(b"\n")?;
        writer.flush()?;
        Ok(())
    }

    /// Checks that ids are positive and unique, and returns a counter above
    /// every stored id. A stale counter is raised rather than rejected.
    fn checked_next_id(file: &TasksFile) -> Result<u32, StoreError> {
        let mut seen = HashSet::with_capacity(file.tasks.len());
        for task in &file.tasks {
            if task.id < FIRST_ID {
                return Err(StoreError::InvalidRecords(format!("task id {} is not positive", task.id)));
            }
            if !seen.insert(task.id) {
                return Err(StoreError::InvalidRecords(format!("task id {} appears more than once", task.id)));
            }
        }

        let floor = match file.tasks.iter().map(|task| task.id).max() {
            Some(max) => max
                .checked_add(1)
                .ok_or_else(|| StoreError::InvalidRecords(format!("task id {} leaves no id for new tasks", max)))?,
            None => FIRST_ID,
        };
        if file.next_id < floor {
            msg_warning!(Message::NextIdAdjusted(floor));
            return Ok(floor);
        }
        Ok(file.next_id)
    }

    fn position(&self, task_id: u32) -> Option<usize> {
        self.tasks.iter().position(|task| task.id == task_id)
    }

    /// Validates the fields, appends a new not-done task and persists.
    ///
    /// Fields are checked in argument order and the first failure stops the
    /// call without touching the store.
    pub fn add(&mut self, title: &str, description: &str, category: &str, due_date: &str, priority: &str) -> bool {
        let Some(following_id) = self.next_id.checked_add(1) else {
            msg_error!(Message::TaskIdsExhausted);
            return false;
        };
        if !validate_nonempty_text(Some(title), "Title")
            || !validate_nonempty_text(Some(description), "Description")
            || !validate_nonempty_text(Some(category), "Category")
            || !validate_date(due_date)
        {
            return false;
        }
        let Some(priority) = parse_priority(priority) else {
            return false;
        };

        let task = Task::new(self.next_id, title, description, category, due_date, priority);
        tracing::debug!(id = task.id, "task created");
        self.tasks.push(task);
        self.next_id = following_id;

        self.save()
    }

    /// Applies the supplied fields to the task with `task_id` and persists.
    ///
    /// Nothing is applied unless every supplied field is valid.
    pub fn update(&mut self, task_id: u32, changes: &TaskUpdate) -> bool {
        let Some(index) = self.position(task_id) else {
            msg_warning!(Message::TaskNotFoundWithId(task_id));
            return false;
        };
        let Some(checked) = Self::check_update(changes) else {
            return false;
        };

        let task = &mut self.tasks[index];
        if let Some(title) = checked.title {
            task.title = title.to_string();
        }
        if let Some(description) = checked.description {
            task.description = description.to_string();
        }
        if let Some(category) = checked.category {
            task.category = category.to_string();
        }
        if let Some(due_date) = checked.due_date {
            task.due_date = due_date.to_string();
        }
        if let Some(priority) = checked.priority {
            task.priority = priority;
        }
        if let Some(status) = checked.status {
            task.status = status;
        }
        tracing::debug!(id = task_id, "task updated");

        self.save()
    }

    fn check_update(changes: &TaskUpdate) -> Option<CheckedUpdate<'_>> {
        let title = checked_text(&changes.title, "Title")?;
        let description = checked_text(&changes.description, "Description")?;
        let category = checked_text(&changes.category, "Category")?;
        let due_date = match changes.due_date.as_deref() {
            Some(due_date) if !validate_date(due_date) => return None,
            other => other,
        };
        let priority = match changes.priority.as_deref() {
            Some(priority) => Some(parse_priority(priority)?),
            None => None,
        };
        let status = match changes.status.as_deref() {
            Some(status) => Some(parse_status(status)?),
            None => None,
        };

        Some(CheckedUpdate {
            title,
            description,
            category,
            due_date,
            priority,
            status,
        })
    }

    /// Deletes by id, or else by category. With neither nothing happens.
    pub fn delete(&mut self, task_id: Option<u32>, category: Option<&str>) -> bool {
        match DeleteTarget::from_args(task_id, category) {
            Some(target) => self.delete_target(&target),
            None => {
                msg_error!(Message::NoDeleteTarget);
                false
            }
        }
    }

    pub fn delete_target(&mut self, target: &DeleteTarget) -> bool {
        match target {
            DeleteTarget::Id(task_id) => {
                let Some(index) = self.position(*task_id) else {
                    msg_warning!(Message::TaskNotFoundWithId(*task_id));
                    return false;
                };
                self.tasks.remove(index);
                tracing::debug!(id = *task_id, "task deleted");
            }
            DeleteTarget::Category(category) => {
                let needle = category.to_lowercase();
                let before = self.tasks.len();
                self.tasks.retain(|task| task.category.to_lowercase() != needle);
                let removed = before - self.tasks.len();
                if removed == 0 {
                    msg_warning!(Message::TasksNotFoundInCategory(category.clone()));
                    return false;
                }
                tracing::debug!(category = %category, removed, "tasks deleted");
            }
        }

        self.save()
    }

    /// Returns the tasks matching every supplied filter, in insertion order.
    ///
    /// Empty filter strings count as omitted.
    pub fn search(&self, query: &SearchQuery) -> Vec<Task> {
        let mut results: Vec<&Task> = self.tasks.iter().collect();

        if let Some(task_id) = query.task_id {
            results.retain(|task| task.id == task_id);
            if results.is_empty() {
                msg_warning!(Message::TaskNotFoundWithId(task_id));
                return Vec::new();
            }
        }
        if let Some(keyword) = non_empty(&query.keyword) {
            let keyword = keyword.to_lowercase();
            results.retain(|task| {
                task.title.to_lowercase().contains(&keyword) || task.description.to_lowercase().contains(&keyword)
            });
        }
        if let Some(category) = non_empty(&query.category) {
            let category = category.to_lowercase();
            results.retain(|task| task.category.to_lowercase().contains(&category));
        }
        if let Some(status) = non_empty(&query.status) {
            results.retain(|task| task.status.matches(status));
        }

        results.into_iter().cloned().collect()
    }

    /// Groups tasks by exact category, keeping first-seen category order.
    pub fn group_by_category(&self) -> Vec<CategoryGroup> {
        let mut groups: Vec<CategoryGroup> = Vec::new();
        for task in &self.tasks {
            match groups.iter_mut().find(|group| group.category == task.category) {
                Some(group) => group.tasks.push(task.clone()),
                None => groups.push(CategoryGroup {
                    category: task.category.clone(),
                    tasks: vec![task.clone()],
                }),
            }
        }
        groups
    }

    pub fn display(&self) -> bool {
        View::display(&self.tasks)
    }

    pub fn display_grouped(&self) -> bool {
        View::display_grouped(&self.group_by_category())
    }
}

/// `Some(value)` when the field is omitted or valid, `None` when it fails.
fn checked_text<'a>(value: &'a Option<String>, field: &str) -> Option<Option<&'a str>> {
    match value.as_deref() {
        Some(text) if !validate_nonempty_text(Some(text), field) => None,
        other => Some(other),
    }
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|value| !value.is_empty())
}
