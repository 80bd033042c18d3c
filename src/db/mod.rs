//! Persistence layer.
//!
//! Tasks live in a single JSON file owned by [`tasks::TaskStore`]; the store
//! also carries the validated add/update/delete/search operations.
//!
//! ```rust,no_run
//! use taskbook::db::tasks::TaskStore;
//!
//! let mut store = TaskStore::open("tasks.json");
//! store.add("Review code", "Check PR #123", "Work", "05.12.2024", "Высокий");
//! ```

pub mod tasks;
