//! Configuration stored as `config.json` in the data directory.
//!
//! The only setting today is where the tasks file lives. Without a config
//! file the tasks file defaults to `tasks.json` next to it.
//!
//! ```rust,no_run
//! use taskbook::libs::config::Config;
//!
//! let config = Config::read()?;
//! let tasks_path = config.tasks_path()?;
//! # Ok::<(), anyhow::Error>(())
//! ```

use super::data_storage::DataStorage;
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs::{self, File};
use std::path::PathBuf;

pub const CONFIG_FILE_NAME: &str = "config.json";
pub const TASKS_FILE_NAME: &str = "tasks.json";

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct Config {
    /// Explicit location of the tasks file.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tasks_file: Option<PathBuf>,
}

impl Config {
    /// Reads the configuration, falling back to defaults when none is saved.
    pub fn read() -> Result<Config> {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;
        if !config_file_path.exists() {
            return Ok(Config::default());
        }

        let config_str = fs::read_to_string(config_file_path)?;
        let config: Config = serde_json::from_str(&config_str)?;
        Ok(config)
    }

    pub fn save(&self) -> Result<()> {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;
        let config_file = File::create(config_file_path)?;
        serde_json::to_writer_pretty(&config_file, &self)?;
        Ok(())
    }

    /// Resolves the backing file for the task store.
    pub fn tasks_path(&self) -> Result<PathBuf> {
        match &self.tasks_file {
            Some(path) => Ok(path.clone()),
            None => DataStorage::new().get_path(TASKS_FILE_NAME),
        }
    }
}
