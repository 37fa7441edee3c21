//! Configuration management for the challenge board.
//!
//! The configuration says where the records document lives and how the
//! board is displayed. It is stored as pretty-printed JSON in the
//! platform-specific application data directory:
//!
//! - **Windows**: `%LOCALAPPDATA%\lacodda\challenge-board\config.json`
//! - **macOS**: `~/Library/Application Support/lacodda/challenge-board/config.json`
//! - **Linux**: `~/.local/share/lacodda/challenge-board/config.json`
//!
//! ## Source Resolution
//!
//! The records source is resolved in this order:
//! 1. `--source` command-line flag
//! 2. `CHALLENGE_BOARD_SOURCE` environment variable (a `.env` file is honoured)
//! 3. `source` from the configuration file
//! 4. `records.json` in the working directory
//!
//! ## Usage Examples
//!
//! ```rust,no_run
//! use challenge_board::libs::config::Config;
//!
//! let config = Config::read()?;
//! let source = config.resolve_source(None);
//! # Ok::<(), anyhow::Error>(())
//! ```

use super::data_storage::DataStorage;
use crate::libs::messages::Message;
use crate::msg_warning;
use anyhow::Result;
use chrono::FixedOffset;
use dialoguer::{theme::ColorfulTheme, Confirm, Input};
use serde::{Deserialize, Serialize};
use std::env;
use std::fs::{self, File};

/// Configuration file name inside the data directory.
pub const CONFIG_FILE_NAME: &str = "config.json";

/// Records document used when nothing else is configured.
pub const DEFAULT_SOURCE: &str = "records.json";

/// Environment variable overriding the configured source.
pub const SOURCE_ENV_VAR: &str = "CHALLENGE_BOARD_SOURCE";

/// Board configuration.
///
/// Every field has a default, so a partially written file still loads.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Config {
    /// Path or HTTP(S) URL of the records document.
    #[serde(default = "default_source")]
    pub source: String,

    /// Show failure reasons in the past list.
    #[serde(default = "default_show_failure_reason")]
    pub show_failure_reason: bool,

    /// Fixed display offset from UTC in minutes. Local time when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub utc_offset: Option<i32>,
}

fn default_source() -> String {
    DEFAULT_SOURCE.to_string()
}

fn default_show_failure_reason() -> bool {
    true
}

impl Default for Config {
    fn default() -> Self {
        Config {
            source: default_source(),
            show_failure_reason: default_show_failure_reason(),
            utc_offset: None,
        }
    }
}

impl Config {
    /// Reads configuration from the filesystem.
    ///
    /// A missing file yields the default configuration; a file that exists
    /// but cannot be read or parsed is an error.
    pub fn read() -> Result<Config> {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;

        if !config_file_path.exists() {
            return Ok(Config::default());
        }

        let config_str = fs::read_to_string(config_file_path)?;
        let config: Config = serde_json::from_str(&config_str)?;
        Ok(config)
    }

    /// Saves the configuration as pretty-printed JSON, overwriting any previous file.
    pub fn save(&self) -> Result<()> {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;

        let config_file = File::create(config_file_path)?;
        serde_json::to_writer_pretty(&config_file, &self)?;
        Ok(())
    }

    /// Removes the configuration file. Returns `false` when there was none.
    pub fn delete() -> Result<bool> {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;

        if !config_file_path.exists() {
            return Ok(false);
        }

        fs::remove_file(config_file_path)?;
        Ok(true)
    }

    /// Runs the interactive configuration wizard, starting from the current values.
    pub fn init() -> Result<Self> {
        let current = Self::read().unwrap_or_default();

        let source: String = Input::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptRecordsSource.to_string())
            .default(current.source.clone())
            .interact_text()?;

        let show_failure_reason = Confirm::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptShowFailureReason.to_string())
            .default(current.show_failure_reason)
            .interact()?;

        let utc_offset: String = Input::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptUtcOffset.to_string())
            .default(current.utc_offset.map(|minutes| minutes.to_string()).unwrap_or_default())
            .allow_empty(true)
            .validate_with(|input: &String| -> Result<(), String> {
                match input.trim() {
                    "" => Ok(()),
                    text => text.parse::<i32>().map(|_| ()).map_err(|e| e.to_string()),
                }
            })
            .interact_text()?;

        Ok(Config {
            source: source.trim().to_string(),
            show_failure_reason,
            utc_offset: utc_offset.trim().parse().ok(),
        })
    }

    /// Resolves the records source: flag, then environment, then file.
    pub fn resolve_source(&self, flag: Option<&str>) -> String {
        if let Some(source) = flag.map(str::trim).filter(|source| !source.is_empty()) {
            return source.to_string();
        }

        match env::var(SOURCE_ENV_VAR) {
            Ok(source) if !source.trim().is_empty() => source.trim().to_string(),
            _ => self.source.clone(),
        }
    }

    /// The fixed display offset, or `None` for the local time zone.
    ///
    /// Offsets outside ±24h are reported and ignored.
    pub fn display_offset(&self) -> Option<FixedOffset> {
        let minutes = self.utc_offset?;
        let offset = minutes.checked_mul(60).and_then(FixedOffset::east_opt);
        if offset.is_none() {
            msg_warning!(Message::ConfigInvalidUtcOffset(minutes));
        }
        offset
    }
}
