//! Configuration for the `typelore` report.
//!
//! Read from `~/.typelore/config.toml`:
//!
//! ```toml
//! [output]
//! format = "json"   # or "text"
//! y_calls = 3     # at most MAX_Y_CALLS
//! ```
//!
//! `TYPELORE_FORMAT` overrides `output.format`. A missing, unreadable, or
//! malformed file falls back to defaults.

use std::path::{Path, PathBuf};
use std::{env, fs};

use serde::Deserialize;
use typelore_types::Declaration;

pub const FORMAT_ENV: &str = "TYPELORE_FORMAT";
pub const DEFAULT_Y_CALLS: usize = 3;
/// Upper bound on how many times the report invokes `y`.
pub const MAX_Y_CALLS: usize = Declaration::MAX_CALLS;

#[derive(Debug, Default, Deserialize)]
pub struct LoreConfig {
    pub output: Option<OutputConfig>,
}

#[derive(Debug, Default, Deserialize)]
pub struct OutputConfig {
    pub format: Option<String>,
    pub y_calls: Option<usize>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl OutputFormat {
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "text" | "plain" => Some(OutputFormat::Text),
            "json" => Some(OutputFormat::Json),
            _ => None,
        }
    }

    fn from_config(config: Option<&LoreConfig>) -> Option<Self> {
        let raw = config
            .and_then(|cfg| cfg.output.as_ref())
            .and_then(|output| output.format.as_ref())?;
        let parsed = Self::parse(raw);
        if parsed.is_none() {
            tracing::warn!("Unknown output format in config: {}", raw);
        }
        parsed
    }

    /// Format named by `TYPELORE_FORMAT`, if set and recognized.
    #[must_use]
    pub fn from_env() -> Option<Self> {
        let raw = env::var(FORMAT_ENV).ok()?;
        let parsed = Self::parse(&raw);
        if parsed.is_none() {
            tracing::warn!("Unknown output format in {}: {}", FORMAT_ENV, raw);
        }
        parsed
    }
}

/// Effective settings after merging env, file, and defaults.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Settings {
    pub format: OutputFormat,
    pub y_calls: usize,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            format: OutputFormat::default(),
            y_calls: DEFAULT_Y_CALLS,
        }
    }
}

impl Settings {
    /// Env > config file > default.
    #[must_use]
    pub fn resolve(config: Option<&LoreConfig>) -> Self {
        Self::resolve_with(config, OutputFormat::from_env())
    }

    #[must_use]
    pub fn resolve_with(config: Option<&LoreConfig>, env_format: Option<OutputFormat>) -> Self {
        let format = env_format
            .or_else(|| OutputFormat::from_config(config))
            .unwrap_or_default();
        let y_calls = config
            .and_then(|cfg| cfg.output.as_ref())
            .and_then(|output| output.y_calls)
            .map_or(DEFAULT_Y_CALLS, |requested| {
                if requested > MAX_Y_CALLS {
                    tracing::warn!(
                        "output.y_calls = {} exceeds {}, clamping",
                        requested,
                        MAX_Y_CALLS
                    );
                }
                requested.min(MAX_Y_CALLS)
            });
        Self { format, y_calls }
    }
}

impl LoreConfig {
    pub fn load() -> Option<Self> {
        let path = config_path()?;
        Self::load_from(&path)
    }

    pub fn load_from(path: &Path) -> Option<Self> {
        if !path.exists() {
            tracing::debug!("No config at {:?}", path);
            return None;
        }

        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(err) => {
                tracing::warn!("Failed to read config at {:?}: {}", path, err);
                return None;
            }
        };

        match toml::from_str(&content) {
            Ok(config) => Some(config),
            Err(err) => {
                tracing::warn!("Failed to parse config at {:?}: {}", path, err);
                None
            }
        }
    }

}

fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(".typelore").join("config.toml"))
}
