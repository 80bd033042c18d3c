use crate::db::tasks::TaskStore;
use crate::libs::view::View;
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct ListArgs {
    /// Group tasks by category
    #[arg(short, long)]
    grouped: bool,
    /// Render as a table
    #[arg(short, long, conflicts_with = "grouped")]
    table: bool,
}

pub fn cmd(store: &TaskStore, args: ListArgs) -> Result<()> {
    if args.grouped {
        store.display_grouped();
    } else if args.table {
        View::display_table(store.tasks());
    } else {
        store.display();
    }
    Ok(())
}
