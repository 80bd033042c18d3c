use crate::db::tasks::TaskStore;
use crate::libs::messages::Message;
use crate::libs::task::DeleteTarget;
use crate::{msg_error, msg_success};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct DeleteArgs {
    /// Task ID to delete
    #[arg(long, conflicts_with = "category")]
    id: Option<u32>,
    /// Delete every task in this category (case-insensitive)
    #[arg(long)]
    category: Option<String>,
}

pub fn cmd(store: &mut TaskStore, args: DeleteArgs) -> Result<()> {
    let Some(target) = DeleteTarget::from_args(args.id, args.category.as_deref()) else {
        msg_error!(Message::NoDeleteTarget);
        return Ok(());
    };

    let before = store.len();
    if store.delete_target(&target) {
        match target {
            DeleteTarget::Id(id) => msg_success!(Message::TaskDeleted(id)),
            DeleteTarget::Category(category) => {
                msg_success!(Message::TasksDeletedInCategory(category, before - store.len()))
            }
        }
    } else {
        msg_error!(Message::TaskDeleteFailed);
    }
    Ok(())
}
