use crate::libs::{config::Config, messages::Message};
use crate::msg_success;
use anyhow::Result;
use clap::Args;
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct InitArgs {
    /// Tasks file location
    tasks_file: PathBuf,
}

pub fn cmd(args: InitArgs) -> Result<()> {
    let config = Config {
        tasks_file: Some(args.tasks_file),
    };
    config.save()?;

    msg_success!(Message::ConfigSaved(config.tasks_path()?.display().to_string()));
    Ok(())
}
