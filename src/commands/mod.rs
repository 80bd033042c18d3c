pub mod delete;
pub mod init;
pub mod list;
pub mod search;
pub mod task;

use crate::db::tasks::TaskStore;
use crate::libs::config::Config;
use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Subcommand)]
enum Commands {
    #[command(about = "Save the tasks file location to the configuration")]
    Init(init::InitArgs),
    #[command(about = "Show all tasks")]
    List(list::ListArgs),
    #[command(about = "Create task")]
    Add(task::AddArgs),
    #[command(about = "Edit task fields", arg_required_else_help = true)]
    Update(task::UpdateArgs),
    #[command(about = "Mark task as done")]
    Done(task::StatusArgs),
    #[command(about = "Mark task as not done")]
    Undone(task::StatusArgs),
    #[command(about = "Delete a task by ID or all tasks in a category", arg_required_else_help = true)]
    Delete(delete::DeleteArgs),
    #[command(about = "Search tasks")]
    Search(search::SearchArgs),
}

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
#[command(arg_required_else_help(true))]
pub struct Cli {
    /// Tasks file to use instead of the configured one
    #[arg(long, global = true)]
    file: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub fn menu() -> Result<()> {
        Self::parse().run()
    }

    pub fn run(self) -> Result<()> {
        let command = match self.command {
            Commands::Init(args) => return init::cmd(args),
            command => command,
        };

        let path = match self.file {
            Some(path) => path,
            None => Config::read()?.tasks_path()?,
        };
        let mut store = TaskStore::open(path);

        match command {
            Commands::Init(_) => Ok(()),
            Commands::List(args) => list::cmd(&store, args),
            Commands::Add(args) => task::add(&mut store, args),
            Commands::Update(args) => task::update(&mut store, args),
            Commands::Done(args) => task::set_status(&mut store, args, true),
            Commands::Undone(args) => task::set_status(&mut store, args, false),
            Commands::Delete(args) => delete::cmd(&mut store, args),
            Commands::Search(args) => search::cmd(&store, args),
        }
    }
}
