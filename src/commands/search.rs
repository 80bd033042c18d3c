use crate::db::tasks::TaskStore;
use crate::libs::messages::Message;
use crate::libs::task::SearchQuery;
use crate::libs::view::View;
use crate::msg_print;
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct SearchArgs {
    #[arg(long)]
    id: Option<u32>,
    /// Substring of the title or description
    #[arg(short, long)]
    keyword: Option<String>,
    /// Substring of the category
    #[arg(short, long)]
    category: Option<String>,
    #[arg(short, long)]
    status: Option<String>,
}

pub fn cmd(store: &TaskStore, args: SearchArgs) -> Result<()> {
    let query = SearchQuery {
        task_id: args.id,
        keyword: args.keyword,
        category: args.category,
        status: args.status,
    };
    let tasks = store.search(&query);
    if !tasks.is_empty() {
        msg_print!(Message::SearchResultsHeader(tasks.len()), true);
    }
    View::display(&tasks);
    Ok(())
}
