//! Configuration management.
//!
//! Supports configuration from:
//! - TOML config files (`<config dir>/ctff/config.toml` by default)
//! - Environment variables
//! - CLI arguments (applied by the binary on top of the above)

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::error::{CtffError, Result};

/// Main configuration struct
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Dictionary lookup
    #[serde(default)]
    pub dictionary: DictionaryConfig,

    /// Codec and file naming
    #[serde(default)]
    pub codec: CodecConfig,
}

impl Config {
    /// Load configuration from a TOML file
    pub fn from_file(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let content = std::fs::read_to_string(&path)
            .map_err(|e| CtffError::Config(format!("Failed to read config file: {e}")))?;

        Ok(toml::from_str(&content)?)
    }

    /// Default config file location
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("ctff").join("config.toml"))
    }

    /// Load the default config file if it exists, else defaults
    pub fn load_default() -> Result<Self> {
        match Self::default_path() {
            Some(path) if path.is_file() => {
                tracing::debug!("Loading config from {}", path.display());
                Self::from_file(path)
            },
            _ => Ok(Self::default()),
        }
    }

    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Ok(dir) = std::env::var("CTFF_DICT_DIR") {
            config.dictionary.dir = Some(PathBuf::from(dir));
        }
        if let Ok(name) = std::env::var("CTFF_DICT") {
            config.dictionary.default_name = name;
        }
        if let Ok(val) = std::env::var("CTFF_UNESCAPE_EXPANSIONS") {
            config.codec.unescape_expansions = val.parse().ok();
        }

        config
    }

    /// Merge with another config (other takes precedence where it differs
    /// from the defaults)
    pub fn merge(self, other: Self) -> Self {
        let dict_defaults = DictionaryConfig::default();
        let codec_defaults = CodecConfig::default();

        Self {
            dictionary: DictionaryConfig {
                dir: other.dictionary.dir.or(self.dictionary.dir),
                default_name: if other.dictionary.default_name != dict_defaults.default_name {
                    other.dictionary.default_name
                } else {
                    self.dictionary.default_name
                },
                extension: if other.dictionary.extension != dict_defaults.extension {
                    other.dictionary.extension
                } else {
                    self.dictionary.extension
                },
            },
            codec: CodecConfig {
                compressed_extension: if other.codec.compressed_extension
                    != codec_defaults.compressed_extension
                {
                    other.codec.compressed_extension
                } else {
                    self.codec.compressed_extension
                },
                plain_extension: if other.codec.plain_extension != codec_defaults.plain_extension
                {
                    other.codec.plain_extension
                } else {
                    self.codec.plain_extension
                },
                unescape_expansions: other
                    .codec
                    .unescape_expansions
                    .or(self.codec.unescape_expansions),
            },
        }
    }
}

/// Dictionary lookup configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DictionaryConfig {
    /// Directory holding dictionary files (default: `dict/` next to the
    /// executable)
    pub dir: Option<PathBuf>,

    /// Dictionary used when none is named
    pub default_name: String,

    /// Dictionary file extension
    pub extension: String,
}

impl Default for DictionaryConfig {
    fn default() -> Self {
        Self {
            dir: None,
            default_name: "english".to_string(),
            extension: "txt".to_string(),
        }
    }
}

/// Codec configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CodecConfig {
    /// Extension of compressed files
    pub compressed_extension: String,

    /// Extension given to decompressed files
    pub plain_extension: String,

    /// Unescape dictionary expansions a second time when decoding (unset
    /// means off, and lets a lower-precedence source decide)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unescape_expansions: Option<bool>,
}

impl CodecConfig {
    /// Whether the second unescape is enabled
    pub fn unescape_expansions(&self) -> bool {
        self.unescape_expansions.unwrap_or(false)
    }
}

impl Default for CodecConfig {
    fn default() -> Self {
        Self {
            compressed_extension: "ctff".to_string(),
            plain_extension: "txt".to_string(),
            unescape_expansions: None,
        }
    }
}
