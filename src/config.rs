use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

/// Validated settings for a `ChatBot`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatBotConfig {
    /// How many words each report carries (K).
    pub top_words: usize,
    /// Time between report-and-reset cycles.
    pub flush_interval: Duration,
}

impl ChatBotConfig {
    pub fn new(top_words: usize, flush_interval: Duration) -> Result<Self, ConfigError> {
        if top_words == 0 {
            return Err(ConfigError::InvalidTopWords(top_words));
        }
        if flush_interval.is_zero() {
            return Err(ConfigError::InvalidInterval);
        }

        Ok(Self {
            top_words,
            flush_interval,
        })
    }
}

/// On-disk configuration, `~/.config/topwords/config.toml` by default.
///
/// ```toml
/// top_words = 10
/// flush_interval_ms = 60000
///
/// [display]
/// json = false
/// color = true
/// ```
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct ConfigFile {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub top_words: Option<usize>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub flush_interval_ms: Option<u64>,

    /// Display settings
    #[serde(default)]
    pub display: DisplayConfig,
}

/// Display configuration options
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DisplayConfig {
    /// Print reports as JSON lines (default: false)
    #[serde(default)]
    pub json: bool,

    /// Colorize terminal reports (default: true)
    #[serde(default = "default_true")]
    pub color: bool,
}

fn default_true() -> bool {
    true
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            json: false,
            color: true,
        }
    }
}

impl ConfigFile {
    /// Load config from custom path or default XDG location.
    ///
    /// A missing default file is not an error; a missing custom path is.
    pub fn load(custom_path: Option<&PathBuf>) -> Result<Self, ConfigError> {
        let path = if let Some(p) = custom_path {
            p.clone()
        } else {
            match Self::default_config_path() {
                Ok(p) => p,
                Err(_) => return Ok(Self::default()),
            }
        };

        if custom_path.is_none() && !path.exists() {
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(&path)
            .map_err(|e| ConfigError::Io(path.clone(), e))?;

        Self::parse(&contents).map_err(|e| ConfigError::Parse(path.clone(), e))
    }

    pub fn parse(contents: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(contents)
    }

    /// Get default config path: ~/.config/topwords/config.toml
    pub fn default_config_path() -> Result<PathBuf, ConfigError> {
        let config_dir = dirs::config_dir().ok_or(ConfigError::NoConfigDir)?;

        Ok(config_dir.join("topwords").join("config.toml"))
    }

    /// Merge command-line overrides on top of file values and validate.
    /// Both settings are required; neither has a built-in default.
    pub fn resolve(
        &self,
        top_words: Option<usize>,
        flush_interval_ms: Option<u64>,
    ) -> Result<ChatBotConfig, ConfigError> {
        let top_words = top_words
            .or(self.top_words)
            .ok_or(ConfigError::Missing("top_words"))?;
        let interval_ms = flush_interval_ms
            .or(self.flush_interval_ms)
            .ok_or(ConfigError::Missing("flush_interval_ms"))?;

        ChatBotConfig::new(top_words, Duration::from_millis(interval_ms))
    }
}

#[derive(Debug)]
pub enum ConfigError {
    NoConfigDir,
    Io(PathBuf, std::io::Error),
    Parse(PathBuf, toml::de::Error),
    Missing(&'static str),
    InvalidTopWords(usize),
    InvalidInterval,
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::NoConfigDir => write!(f, "Could not determine config directory"),
            ConfigError::Io(path, e) => {
                write!(f, "Failed to read config at {}: {}", path.display(), e)
            }
            ConfigError::Parse(path, e) => {
                write!(f, "Failed to parse config at {}: {}", path.display(), e)
            }
            ConfigError::Missing(field) => {
                write!(f, "Missing required setting `{}` (config file or flag)", field)
            }
            ConfigError::InvalidTopWords(n) => {
                write!(f, "Invalid top_words: {}. Must be at least 1", n)
            }
            ConfigError::InvalidInterval => write!(f, "Flush interval must be greater than zero"),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::Io(_, e) => Some(e),
            ConfigError::Parse(_, e) => Some(e),
            _ => None,
        }
    }
}
