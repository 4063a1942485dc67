use crate::error::{ContactsError, Result};
use crate::store::fs::DEFAULT_FILENAME;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILENAME: &str = "config.json";
const DEFAULT_LOG_LEVEL: &str = "warn";
const LOG_LEVELS: &[&str] = &["off", "error", "warn", "info", "debug", "trace"];

pub const KEY_DATA_FILE: &str = "data-file";
pub const KEY_LOG_LEVEL: &str = "log-level";
pub const KEY_LOG_DIR: &str = "log-dir";
pub const KEYS: &[&str] = &[KEY_DATA_FILE, KEY_LOG_LEVEL, KEY_LOG_DIR];

/// User configuration, stored as `config.json` in the config directory.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ContactsConfig {
    /// Backing file for the contact list. Relative paths resolve against the working directory.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data_file: Option<PathBuf>,

    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// When set, logs go to rotating files here instead of stderr.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub log_dir: Option<PathBuf>,
}

fn default_log_level() -> String {
    DEFAULT_LOG_LEVEL.to_string()
}

impl Default for ContactsConfig {
    fn default() -> Self {
        Self {
            data_file: None,
            log_level: default_log_level(),
            log_dir: None,
        }
    }
}

impl ContactsConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(ContactsError::Io)?;
        let config: ContactsConfig =
            serde_json::from_str(&content).map_err(ContactsError::Serialization)?;
        Ok(config)
    }

    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();

        if !config_dir.exists() {
            fs::create_dir_all(config_dir).map_err(ContactsError::Io)?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);
        let content = serde_json::to_string_pretty(self).map_err(ContactsError::Serialization)?;
        fs::write(config_path, content).map_err(ContactsError::Io)?;
        Ok(())
    }

    pub fn data_file(&self) -> PathBuf {
        self.data_file
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_FILENAME))
    }

    pub fn get(&self, key: &str) -> Result<String> {
        match key {
            KEY_DATA_FILE => Ok(self.data_file().display().to_string()),
            KEY_LOG_LEVEL => Ok(self.log_level.clone()),
            KEY_LOG_DIR => Ok(self
                .log_dir
                .as_ref()
                .map(|p| p.display().to_string())
                .unwrap_or_default()),
            other => Err(unknown_key(other)),
        }
    }

    /// Set a key from its string form. An empty value clears optional paths.
    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        match key {
            KEY_DATA_FILE => self.data_file = optional_path(value),
            KEY_LOG_LEVEL => {
                let level = value.to_lowercase();
                if !LOG_LEVELS.contains(&level.as_str()) {
                    return Err(ContactsError::Config(format!(
                        "Invalid log level '{}' (expected one of: {})",
                        value,
                        LOG_LEVELS.join(", ")
                    )));
                }
                self.log_level = level;
            }
            KEY_LOG_DIR => self.log_dir = optional_path(value),
            other => return Err(unknown_key(other)),
        }
        Ok(())
    }
}

fn optional_path(value: &str) -> Option<PathBuf> {
    (!value.is_empty()).then(|| PathBuf::from(value))
}

fn unknown_key(key: &str) -> ContactsError {
    ContactsError::Config(format!(
        "Unknown config key: {} (expected one of: {})",
        key,
        KEYS.join(", ")
    ))
}

/// Picks the backing file: explicit flag, then environment, then config, then the default.
pub fn resolve_data_file(
    flag: Option<PathBuf>,
    env: Option<PathBuf>,
    config: &ContactsConfig,
) -> PathBuf {
    flag.or(env).unwrap_or_else(|| config.data_file())
}
