//! Configuration management for taskdash.
//!
//! Settings are stored as pretty-printed JSON in `config.json` inside the
//! platform data directory (see [`DataStorage`]). A missing file is not an
//! error: every module is optional and falls back to its defaults, so the
//! application works without any setup.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use taskdash::libs::config::Config;
//!
//! let config = Config::read()?;
//! let tasks = config.tasks_or_default();
//! println!("New tasks are due in {} days", tasks.default_due_days);
//! # Ok::<(), anyhow::Error>(())
//! ```

use super::data_storage::DataStorage;
use crate::libs::messages::Message;
use crate::libs::task::DEFAULT_DUE_DAYS;
use crate::msg_print;
use anyhow::Result;
use dialoguer::{theme::ColorfulTheme, Input};
use serde::{Deserialize, Serialize};
use std::fs::{self, File};
use std::path::{Path, PathBuf};

pub const CONFIG_FILE_NAME: &str = "config.json";

/// Number of import errors shown to the user by default.
pub const DEFAULT_IMPORT_ERROR_LIMIT: usize = 5;

/// Defaults applied when tasks are created or imported.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct TaskConfig {
    /// Days after today used as the due date when none is supplied, and
    /// when an imported due date cannot be parsed.
    pub default_due_days: i64,

    /// How many per-line errors an import prints before summarizing the rest.
    pub import_error_limit: usize,
}

impl Default for TaskConfig {
    fn default() -> Self {
        TaskConfig {
            default_due_days: DEFAULT_DUE_DAYS,
            import_error_limit: DEFAULT_IMPORT_ERROR_LIMIT,
        }
    }
}

/// Root configuration object.
///
/// Unconfigured modules are `None` and are omitted from the JSON file.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct Config {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tasks: Option<TaskConfig>,
}

impl Config {
    /// Location of the configuration file in the platform data directory.
    pub fn path() -> Result<PathBuf> {
        DataStorage::new().get_path(CONFIG_FILE_NAME)
    }

    /// Reads the configuration, returning defaults when no file exists.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn read() -> Result<Config> {
        Self::read_from(&Self::path()?)
    }

    pub fn read_from(path: &Path) -> Result<Config> {
        if !path.exists() {
            return Ok(Config::default());
        }

        let config_str = fs::read_to_string(path)?;
        let config: Config = serde_json::from_str(&config_str)?;
        Ok(config)
    }

    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::path()?)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        let config_file = File::create(path)?;
        serde_json::to_writer_pretty(&config_file, &self)?;
        Ok(())
    }

    /// Removes the configuration file if present.
    pub fn delete() -> Result<()> {
        let path = Self::path()?;
        if path.exists() {
            fs::remove_file(path)?;
        }
        Ok(())
    }

    pub fn tasks_or_default(&self) -> TaskConfig {
        self.tasks.clone().unwrap_or_default()
    }

    /// Interactive setup wizard.
    ///
    /// Starts from the stored configuration so existing values are offered
    /// as defaults, and returns the updated configuration without saving it.
    pub fn init() -> Result<Self> {
        let mut config = Config::read()?;
        let current = config.tasks_or_default();

        msg_print!(Message::ConfigModuleTasks, true);

        let default_due_days: i64 = Input::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptDefaultDueDays.to_string())
            .default(current.default_due_days)
            .validate_with(|days: &i64| if *days >= 0 { Ok(()) } else { Err("must not be negative") })
            .interact_text()?;

        let import_error_limit: usize = Input::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptImportErrorLimit.to_string())
            .default(current.import_error_limit)
            .interact_text()?;

        config.tasks = Some(TaskConfig {
            default_due_days,
            import_error_limit,
        });

        Ok(config)
    }
}
