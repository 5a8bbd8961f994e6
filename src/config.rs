//! User configuration — indicator properties and persistence.
//!
//! Properties are stored as a simple key-value text file at
//! `$XDG_CONFIG_HOME/dot-ring/config.toml` (default `~/.config/dot-ring/config.toml`).

use std::path::PathBuf;
use std::time::Duration;

use thiserror::Error;

use crate::core::{
    color::{ColorParseError, Rgb},
    geometry::Size,
    indicator::{IndicatorSettings, MAX_DOT_COUNT, MIN_DOT_COUNT},
};

/// A single rejected `key = value` line.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("`{key}`: expected a whole number, got `{value}`")]
    InvalidNumber { key: String, value: String },
    #[error("`{key}`: expected `true` or `false`, got `{value}`")]
    InvalidBool { key: String, value: String },
    #[error("`{key}`: {source}")]
    InvalidColor {
        key: String,
        #[source]
        source: ColorParseError,
    },
}

// ───────────────────────────────────────── config ────────────

/// Application configuration — the indicator's design-time properties.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct AppConfig {
    pub indicator: IndicatorSettings,
}

impl AppConfig {
    // ── persistence ─────────────────────────────────────────────

    /// Load config from disk, falling back to defaults.
    pub fn load() -> Self {
        let path = config_path();
        if path.exists() {
            match std::fs::read_to_string(&path) {
                Ok(contents) => return Self::parse_config(&contents),
                Err(e) => tracing::warn!(path = %path.display(), "cannot read config: {e}"),
            }
        }
        Self::default()
    }

    /// Persist current config to disk.
    pub fn save(&self) -> anyhow::Result<()> {
        let path = config_path();
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(&path, self.serialise())?;
        tracing::debug!(path = %path.display(), "config saved");
        Ok(())
    }

    /// Parse the config text.  Bad lines are logged and skipped; the
    /// affected property keeps its default.
    pub fn parse_config(s: &str) -> Self {
        let mut config = Self::default();

        for line in s.lines() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') || line.starts_with('[') {
                continue;
            }
            let Some((key, value)) = line.split_once('=') else {
                continue;
            };
            if let Err(e) = config.apply(key.trim(), value.trim()) {
                tracing::warn!("ignoring config line: {e}");
            }
        }

        config
    }

    fn apply(&mut self, key: &str, value: &str) -> Result<(), ConfigError> {
        let ind = &mut self.indicator;
        match key {
            "interval_ms" => ind.interval = Duration::from_millis(number(key, value)?),
            "dot_diameter" => ind.dot_diameter = number(key, value)?,
            // Clamped again by the indicator; kept sane here for `save`.
            "dot_count" => {
                ind.dot_count = number::<usize>(key, value)?.clamp(MIN_DOT_COUNT, MAX_DOT_COUNT)
            }
            "size" => ind.size = Size::square(number(key, value)?),
            "active_color" => ind.active_color = color(key, value)?,
            "idle_color" => ind.idle_color = color(key, value)?,
            "background_color" => ind.background = color(key, value)?,
            "enabled" => ind.enabled = boolean(key, value)?,
            _ => {}
        }
        Ok(())
    }

    fn serialise(&self) -> String {
        let ind = &self.indicator;
        let lines = vec![
            "# dot-ring configuration".to_string(),
            String::new(),
            "# Animation".to_string(),
            format!("interval_ms = {}", ind.interval.as_millis()),
            format!("enabled = {}", ind.enabled),
            String::new(),
            "# Geometry (logical units; the control is always square)".to_string(),
            format!("size = {}", ind.size.width),
            format!("dot_diameter = {}", ind.dot_diameter),
            format!("dot_count = {}", ind.dot_count),
            String::new(),
            "# Colours: #rrggbb, r,g,b or a name (gray, yellowgreen, ...)".to_string(),
            format!("active_color = \"{}\"", ind.active_color),
            format!("idle_color = \"{}\"", ind.idle_color),
            format!("background_color = \"{}\"", ind.background),
            String::new(),
        ];
        lines.join("\n")
    }
}

fn number<T: std::str::FromStr>(key: &str, value: &str) -> Result<T, ConfigError> {
    value.parse().map_err(|_| ConfigError::InvalidNumber {
        key: key.to_string(),
        value: value.to_string(),
    })
}

fn boolean(key: &str, value: &str) -> Result<bool, ConfigError> {
    value.parse().map_err(|_| ConfigError::InvalidBool {
        key: key.to_string(),
        value: value.to_string(),
    })
}

fn color(key: &str, value: &str) -> Result<Rgb, ConfigError> {
    value.parse().map_err(|source| ConfigError::InvalidColor {
        key: key.to_string(),
        source,
    })
}

/// Return the config file path (`$XDG_CONFIG_HOME/dot-ring/config.toml`).
fn config_path() -> PathBuf {
    let config_dir = std::env::var("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| {
            let home = std::env::var("HOME").unwrap_or_else(|_| ".".into());
            PathBuf::from(home).join(".config")
        });
    config_dir.join("dot-ring").join("config.toml")
}
