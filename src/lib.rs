//! # Taskbook
//!
//! A small command-line utility for tracking personal tasks in a local JSON
//! file.
//!
//! ## Features
//!
//! - **Validated Input**: Non-empty text fields, `dd.mm.yyyy` due dates,
//!   closed priority and status sets
//! - **Persistence**: Every change rewrites the tasks file in full
//! - **Search**: Filter by id, keyword, category and status
//! - **Grouping**: View tasks grouped by category
//!
//! ## Usage
//!
//! ```rust,no_run
//! use taskbook::commands::Cli;
//!
//! fn main() -> anyhow::Result<()> {
//!     Cli::menu()
//! }
//! ```

pub mod commands;
pub mod db;
pub mod libs;
