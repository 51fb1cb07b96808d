//! Configuration management for the contact book.
//!
//! This module handles loading and validating configuration from environment
//! variables. A `.env` file in the working directory is loaded first if present.

use crate::error::{ConfigError, ConfigResult};
use std::env;
use std::path::{Path, PathBuf};

/// Log levels accepted by `LOG_LEVEL`.
const LOG_LEVELS: [&str; 6] = ["trace", "debug", "info", "warn", "error", "off"];

/// Configuration for the contact book.
#[derive(Debug, Clone)]
pub struct Config {
    /// Location of the JSON store file (default: "contacts.json")
    pub contacts_path: PathBuf,

    /// Log level used when `RUST_LOG` is unset (default: "warn")
    pub log_level: String,

    /// Whether reports are printed with terminal colors (default: true)
    pub color: bool,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Optional environment variables:
    /// - `CONTACTS_PATH`: Path of the store file (default: "contacts.json")
    /// - `LOG_LEVEL`: Logging level (default: "warn")
    /// - `NO_COLOR`: Disable colored output when set to any value
    pub fn from_env() -> ConfigResult<Self> {
        // Loading .env is best-effort; a missing file is not an error.
        let _ = dotenvy::dotenv();

        let defaults = Self::default();

        let contacts_path = match env::var("CONTACTS_PATH") {
            Ok(val) if val.trim().is_empty() => {
                return Err(ConfigError::InvalidValue {
                    var: "CONTACTS_PATH".to_string(),
                    reason: "Cannot be empty".to_string(),
                });
            }
            Ok(val) => PathBuf::from(val),
            Err(_) => defaults.contacts_path,
        };

        let log_level = Self::parse_log_level("LOG_LEVEL", &defaults.log_level)?;
        let color = env::var_os("NO_COLOR").is_none();

        Ok(Config {
            contacts_path,
            log_level,
            color,
        })
    }

    /// Replace the store location.
    pub fn with_contacts_path(mut self, path: impl AsRef<Path>) -> Self {
        self.contacts_path = path.as_ref().to_path_buf();
        self
    }

    /// Parse a log level variable, falling back to `default` when unset.
    fn parse_log_level(var_name: &str, default: &str) -> ConfigResult<String> {
        match env::var(var_name) {
            Ok(val) => {
                let level = val.trim().to_ascii_lowercase();
                if LOG_LEVELS.contains(&level.as_str()) {
                    Ok(level)
                } else {
                    Err(ConfigError::InvalidValue {
                        var: var_name.to_string(),
                        reason: format!("Must be one of {}, got: {}", LOG_LEVELS.join("|"), val),
                    })
                }
            }
            Err(_) => Ok(default.to_string()),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            contacts_path: PathBuf::from("contacts.json"),
            log_level: "warn".to_string(),
            color: true,
        }
    }
}
