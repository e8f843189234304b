use crate::error::{Result, TextBuddyError};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILENAME: &str = "config.json";
const DEFAULT_PROMPT: &str = "command: ";

/// Configuration for textbuddy, stored as JSON
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TextBuddyConfig {
    /// Text shown before each command is read
    #[serde(default = "default_prompt")]
    pub prompt: String,

    /// Style feedback by message level (only applies on a terminal)
    #[serde(default = "default_color")]
    pub color: bool,
}

fn default_prompt() -> String {
    DEFAULT_PROMPT.to_string()
}

fn default_color() -> bool {
    true
}

impl Default for TextBuddyConfig {
    fn default() -> Self {
        Self {
            prompt: default_prompt(),
            color: default_color(),
        }
    }
}

impl TextBuddyConfig {
    /// Default location: `config.json` in the platform config directory.
    pub fn default_path() -> Option<PathBuf> {
        ProjectDirs::from("com", "textbuddy", "textbuddy")
            .map(|dirs| dirs.config_dir().join(CONFIG_FILENAME))
    }

    /// Load config from the given file, or return defaults if not found
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)
            .map_err(|e| TextBuddyError::Config(format!("{}: {}", path.display(), e)))?;
        let config: TextBuddyConfig = serde_json::from_str(&content)?;
        Ok(config)
    }
}
