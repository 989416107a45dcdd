//! Landing page configuration.
//!
//! Values are layered: built-in defaults, then an optional TOML file, then
//! environment variables, then explicit overrides supplied by the CLI.

use std::fs::read_to_string;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::Deserialize;
use thiserror::Error;

use crate::carousel::DEFAULT_ADVANCE_INTERVAL;
use crate::catalog::{CatalogError, Slide, SlideCatalog};

/// Path of a TOML config file.
pub const ENV_CONFIG_PATH: &str = "VIBE_STUDIO_CONFIG";
/// Auto-advance interval as a human duration (`3500ms`, `4s`).
pub const ENV_ADVANCE_INTERVAL: &str = "VIBE_ADVANCE_INTERVAL";
/// Whether hovering the carousel pauses it (`1/0`, `true/false`, `yes/no`).
pub const ENV_PAUSE_ON_HOVER: &str = "VIBE_PAUSE_ON_HOVER";

/// Failure to produce a [`LandingConfig`].
#[derive(Debug, Error)]
pub enum ConfigLoadError {
    /// The config file could not be read.
    #[error("failed to read config file {path}: {source}")]
    Read {
        /// File that failed.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The config file is not valid TOML for this schema.
    #[error("failed to parse config file {path}: {source}")]
    Parse {
        /// File that failed.
        path: PathBuf,
        /// Parser error with location.
        #[source]
        source: toml::de::Error,
    },

    /// An interval could not be parsed as a duration.
    #[error("invalid duration {value:?}: {source}")]
    InvalidDuration {
        /// Raw input.
        value: String,
        /// Parser error.
        #[source]
        source: humantime::DurationError,
    },

    /// The interval parsed to zero.
    #[error("advance interval must be greater than zero")]
    ZeroInterval,

    /// A boolean setting had an unrecognised value.
    #[error("{key} expects a boolean (1/0, true/false, yes/no), got {value:?}")]
    InvalidFlag {
        /// Variable or key being parsed.
        key: &'static str,
        /// Raw input.
        value: String,
    },

    /// `visible_cards = 0` in the config file.
    #[error("visible_cards must be at least 1")]
    ZeroVisibleCards,

    /// The configured slides were rejected.
    #[error("invalid slide catalog: {0}")]
    Catalog(#[from] CatalogError),
}

/// Resolved configuration for one landing page session.
#[derive(Debug, Clone, PartialEq)]
pub struct LandingConfig {
    /// Time between auto-advance ticks.
    pub advance_interval: Duration,
    /// Pause auto-advance while the pointer is over the carousel.
    pub pause_on_hover: bool,
    /// Cards shown at once in the carousel strip.
    pub visible_cards: usize,
    /// Initial window width in logical pixels.
    pub window_width: f32,
    /// Initial window height in logical pixels.
    pub window_height: f32,
    /// Slides to rotate through.
    pub catalog: SlideCatalog,
}

impl Default for LandingConfig {
    fn default() -> Self {
        Self {
            advance_interval: DEFAULT_ADVANCE_INTERVAL,
            pause_on_hover: true,
            visible_cards: 3,
            window_width: 1280.0,
            window_height: 720.0,
            catalog: SlideCatalog::builtin(),
        }
    }
}

/// Raw shape of the TOML file; every key is optional.
#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct FileConfig {
    advance_interval: Option<String>,
    pause_on_hover: Option<bool>,
    visible_cards: Option<usize>,
    window_width: Option<f32>,
    window_height: Option<f32>,
    slides: Option<Vec<Slide>>,
}

/// Environment-sourced overrides, captured once so loading stays pure.
#[derive(Debug, Clone, Default)]
pub struct EnvConfig {
    /// `VIBE_STUDIO_CONFIG`
    pub config_path: Option<PathBuf>,
    /// `VIBE_ADVANCE_INTERVAL`, unparsed.
    pub advance_interval: Option<String>,
    /// `VIBE_PAUSE_ON_HOVER`, unparsed.
    pub pause_on_hover: Option<String>,
}

impl EnvConfig {
    /// Read the variables from the current process. Blank values count as unset.
    pub fn from_process() -> Self {
        let non_blank = |key: &str| {
            std::env::var(key)
                .ok()
                .filter(|value| !value.trim().is_empty())
        };
        Self {
            config_path: non_blank(ENV_CONFIG_PATH).map(PathBuf::from),
            advance_interval: non_blank(ENV_ADVANCE_INTERVAL),
            pause_on_hover: non_blank(ENV_PAUSE_ON_HOVER),
        }
    }
}

/// Builder that resolves a [`LandingConfig`] from its layers.
#[derive(Debug, Clone, Default)]
pub struct ConfigLoader {
    path: Option<PathBuf>,
    env: EnvConfig,
    interval_override: Option<String>,
}

impl ConfigLoader {
    /// Loader with no file, no environment and no overrides.
    pub fn new() -> Self {
        Self::default()
    }

    /// Explicit config file; wins over `VIBE_STUDIO_CONFIG`.
    pub fn with_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.path = Some(path.into());
        self
    }

    /// Environment layer, usually [`EnvConfig::from_process`].
    pub fn with_env(mut self, env: EnvConfig) -> Self {
        self.env = env;
        self
    }

    /// Interval that wins over every other layer.
    pub fn with_interval_override(mut self, raw: impl Into<String>) -> Self {
        self.interval_override = Some(raw.into());
        self
    }

    /// Resolve all layers.
    pub fn load(&self) -> Result<LandingConfig, ConfigLoadError> {
        let mut config = LandingConfig::default();

        if let Some(path) = self.path.as_ref().or(self.env.config_path.as_ref()) {
            let file = read_file_config(path)?;
            apply_file(&mut config, file)?;
            log::debug!("Loaded landing config from {}", path.display());
        }

        if let Some(raw) = self.env.advance_interval.as_deref() {
            config.advance_interval = parse_interval(raw)?;
        }
        if let Some(raw) = self.env.pause_on_hover.as_deref() {
            config.pause_on_hover =
                parse_flag(raw).ok_or_else(|| ConfigLoadError::InvalidFlag {
                    key: ENV_PAUSE_ON_HOVER,
                    value: raw.to_string(),
                })?;
        }

        if let Some(raw) = self.interval_override.as_deref() {
            config.advance_interval = parse_interval(raw)?;
        }

        Ok(config)
    }
}

fn read_file_config(path: &Path) -> Result<FileConfig, ConfigLoadError> {
    let contents = read_to_string(path).map_err(|source| ConfigLoadError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    toml::from_str(&contents).map_err(|source| ConfigLoadError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

fn apply_file(config: &mut LandingConfig, file: FileConfig) -> Result<(), ConfigLoadError> {
    if let Some(raw) = file.advance_interval.as_deref() {
        config.advance_interval = parse_interval(raw)?;
    }
    if let Some(pause_on_hover) = file.pause_on_hover {
        config.pause_on_hover = pause_on_hover;
    }
    if let Some(visible_cards) = file.visible_cards {
        if visible_cards == 0 {
            return Err(ConfigLoadError::ZeroVisibleCards);
        }
        config.visible_cards = visible_cards;
    }
    if let Some(width) = file.window_width {
        config.window_width = width;
    }
    if let Some(height) = file.window_height {
        config.window_height = height;
    }
    if let Some(slides) = file.slides {
        config.catalog = SlideCatalog::new(slides)?;
    }
    Ok(())
}

/// Parse a human duration such as `3500ms` or `4s`. Zero is rejected.
pub fn parse_interval(raw: &str) -> Result<Duration, ConfigLoadError> {
    let interval = humantime::parse_duration(raw.trim()).map_err(|source| {
        ConfigLoadError::InvalidDuration {
            value: raw.to_string(),
            source,
        }
    })?;
    if interval.is_zero() {
        return Err(ConfigLoadError::ZeroInterval);
    }
    Ok(interval)
}

fn parse_flag(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" => Some(true),
        "0" | "false" | "no" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_landing_page() {
        let config = ConfigLoader::new().load().unwrap();
        assert_eq!(config.advance_interval, Duration::from_millis(3500));
        assert!(config.pause_on_hover);
        assert_eq!(config.visible_cards, 3);
        assert_eq!(config.catalog, SlideCatalog::builtin());
    }

    #[test]
    fn interval_parsing() {
        assert_eq!(parse_interval("3500ms").unwrap(), Duration::from_millis(3500));
        assert_eq!(parse_interval(" 2s ").unwrap(), Duration::from_secs(2));
        assert!(matches!(parse_interval("0s"), Err(ConfigLoadError::ZeroInterval)));
        assert!(matches!(
            parse_interval("soon"),
            Err(ConfigLoadError::InvalidDuration { .. })
        ));
    }

    #[test]
    fn flag_parsing_accepts_common_spellings() {
        assert_eq!(parse_flag("YES"), Some(true));
        assert_eq!(parse_flag("1"), Some(true));
        assert_eq!(parse_flag("false"), Some(false));
        assert_eq!(parse_flag("maybe"), None);
    }

    #[test]
    fn env_overrides_defaults() {
        let env = EnvConfig {
            advance_interval: Some("5s".into()),
            pause_on_hover: Some("no".into()),
            ..EnvConfig::default()
        };
        let config = ConfigLoader::new().with_env(env).load().unwrap();
        assert_eq!(config.advance_interval, Duration::from_secs(5));
        assert!(!config.pause_on_hover);
    }

    #[test]
    fn cli_override_beats_env() {
        let env = EnvConfig {
            advance_interval: Some("5s".into()),
            ..EnvConfig::default()
        };
        let config = ConfigLoader::new()
            .with_env(env)
            .with_interval_override("750ms")
            .load()
            .unwrap();
        assert_eq!(config.advance_interval, Duration::from_millis(750));
    }

    #[test]
    fn bad_env_flag_is_reported() {
        let env = EnvConfig {
            pause_on_hover: Some("sometimes".into()),
            ..EnvConfig::default()
        };
        let err = ConfigLoader::new().with_env(env).load().unwrap_err();
        assert!(matches!(
            err,
            ConfigLoadError::InvalidFlag {
                key: ENV_PAUSE_ON_HOVER,
                ..
            }
        ));
    }
}
