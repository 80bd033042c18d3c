use crate::db::tasks::TaskStore;
use crate::libs::messages::Message;
use crate::libs::task::{Status, TaskUpdate};
use crate::{msg_error, msg_info, msg_success};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct AddArgs {
    title: String,
    description: String,
    category: String,
    /// Due date, dd.mm.yyyy
    due_date: String,
    /// Низкий, Средний, Высокий (or Low, Medium, High)
    priority: String,
}

#[derive(Debug, Args)]
pub struct UpdateArgs {
    id: u32,
    #[arg(long)]
    title: Option<String>,
    #[arg(long)]
    description: Option<String>,
    #[arg(long)]
    category: Option<String>,
    #[arg(long)]
    due_date: Option<String>,
    #[arg(long)]
    priority: Option<String>,
    #[arg(long)]
    status: Option<String>,
}

#[derive(Debug, Args)]
pub struct StatusArgs {
    id: u32,
}

pub fn add(store: &mut TaskStore, args: AddArgs) -> Result<()> {
    let id = store.next_id();
    if store.add(&args.title, &args.description, &args.category, &args.due_date, &args.priority) {
        msg_success!(Message::TaskCreated(id));
    } else {
        msg_error!(Message::TaskCreateFailed);
    }
    Ok(())
}

pub fn update(store: &mut TaskStore, args: UpdateArgs) -> Result<()> {
    // An empty flag value means "leave as is", like a blank answer at a prompt.
    let changes = TaskUpdate {
        title: supplied(args.title),
        description: supplied(args.description),
        category: supplied(args.category),
        due_date: supplied(args.due_date),
        priority: supplied(args.priority),
        status: supplied(args.status),
    };
    if changes.is_empty() {
        msg_info!(Message::NoChangesRequested(args.id));
        return Ok(());
    }
    report_update(store.update(args.id, &changes), args.id);
    Ok(())
}

pub fn set_status(store: &mut TaskStore, args: StatusArgs, done: bool) -> Result<()> {
    let status = if done { Status::Done } else { Status::NotDone };
    let changes = TaskUpdate {
        status: Some(status.label().to_string()),
        ..Default::default()
    };
    report_update(store.update(args.id, &changes), args.id);
    Ok(())
}

fn report_update(updated: bool, id: u32) {
    if updated {
        msg_success!(Message::TaskUpdated(id));
    } else {
        msg_error!(Message::TaskUpdateFailed);
    }
}

fn supplied(value: Option<String>) -> Option<String> {
    value.filter(|value| !value.is_empty())
}
