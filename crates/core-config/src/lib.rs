//! Configuration loading and parsing.
//!
//! Parses `stackpad.toml` (or an override path provided by the binary). Two
//! sections are recognized:
//!
//! ```toml
//! [history]
//! undo = "literal"   # or "inverse"
//! redo = "retain"    # or "clear-on-edit"
//!
//! [log]
//! file = "stackpad.log"
//! ```
//!
//! A missing file yields defaults silently; a file that fails to parse yields
//! defaults with a warning. Unknown fields are ignored.

use anyhow::Result;
use core_state::{HistoryPolicy, RedoPolicy, UndoStrategy};
use serde::Deserialize;
use std::{fs, path::PathBuf};
use tracing::{info, warn};

pub const CONFIG_FILE_NAME: &str = "stackpad.toml";
pub const DEFAULT_LOG_FILE: &str = "stackpad.log";

#[derive(Debug, Deserialize, Default, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum UndoSetting {
    #[default]
    Literal,
    Inverse,
}

#[derive(Debug, Deserialize, Default, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum RedoSetting {
    #[default]
    Retain,
    ClearOnEdit,
}

#[derive(Debug, Deserialize, Default, Clone)]
pub struct HistoryConfig {
    #[serde(default)]
    pub undo: UndoSetting,
    #[serde(default)]
    pub redo: RedoSetting,
}

#[derive(Debug, Deserialize, Clone)]
pub struct LogConfig {
    #[serde(default = "LogConfig::default_file")]
    pub file: PathBuf,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            file: Self::default_file(),
        }
    }
}

impl LogConfig {
    fn default_file() -> PathBuf {
        PathBuf::from(DEFAULT_LOG_FILE)
    }
}

#[derive(Debug, Deserialize, Default, Clone)]
pub struct ConfigFile {
    #[serde(default)]
    pub history: HistoryConfig,
    #[serde(default)]
    pub log: LogConfig,
}

#[derive(Debug, Clone, Default)]
pub struct Config {
    pub raw: Option<String>, // raw file contents when parsed
    pub path: Option<PathBuf>,
    pub file: ConfigFile,
}

/// Best-effort config path: working directory first, then the platform config dir.
pub fn discover() -> PathBuf {
    let local = PathBuf::from(CONFIG_FILE_NAME);
    if local.exists() {
        return local;
    }
    if let Some(dir) = dirs::config_dir() {
        return dir.join("stackpad").join(CONFIG_FILE_NAME);
    }
    local
}

pub fn load_from(path: Option<PathBuf>) -> Result<Config> {
    let path = path.unwrap_or_else(discover);
    let Ok(content) = fs::read_to_string(&path) else {
        return Ok(Config::default());
    };
    match toml::from_str::<ConfigFile>(&content) {
        Ok(file) => Ok(Config {
            raw: Some(content),
            path: Some(path),
            file,
        }),
        Err(e) => {
            warn!(target: "config", path = %path.display(), error = %e, "config_parse_failed_using_defaults");
            Ok(Config::default())
        }
    }
}

impl Config {
    /// History policy selected by the `[history]` section.
    pub fn history_policy(&self) -> HistoryPolicy {
        let undo = match self.file.history.undo {
            UndoSetting::Literal => UndoStrategy::Literal,
            UndoSetting::Inverse => UndoStrategy::Inverse,
        };
        let redo = match self.file.history.redo {
            RedoSetting::Retain => RedoPolicy::Retain,
            RedoSetting::ClearOnEdit => RedoPolicy::ClearOnEdit,
        };
        let policy = HistoryPolicy { undo, redo };
        info!(target: "config", ?undo, ?redo, "history_policy");
        policy
    }

    pub fn log_file(&self) -> &std::path::Path {
        &self.file.log.file
    }
}
