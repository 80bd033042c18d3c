//! Core library modules for taskbook.
//!
//! - **Model**: task entity and operation inputs (`task`)
//! - **Validation**: boundary checks for raw field text (`validate`)
//! - **Presentation**: line and table rendering (`view`), user messages (`messages`)
//! - **Infrastructure**: configuration, data directory, error types
//!
//! ## Usage
//!
//! ```rust
//! use taskbook::libs::task::{Priority, Task};
//!
//! let task = Task::new(1, "Implement feature", "Add user authentication", "Work", "05.12.2024", Priority::High);
//! assert_eq!(task.priority.label(), "Высокий");
//! ```

pub mod config;
pub mod data_storage;
pub mod error;
pub mod messages;
pub mod task;
pub mod validate;
pub mod view;
