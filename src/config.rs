use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::debug;

use crate::delay::{DATA_LOADED, DEFAULT_DELAY_MS};
use crate::error::ConfigError;

/// Environment variable naming an explicit config file.
pub const CONFIG_ENV: &str = "FEATURE_TOUR_CONFIG";

/// Config file picked up from the working directory when present.
pub const DEFAULT_CONFIG_FILE: &str = "tour.toml";

/// Upper bound for `parallel_sources`.
pub const MAX_PARALLEL_SOURCES: usize = 64;

/// Tunables for the demo binaries. Every key is optional.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TourConfig {
    /// Nominal delay of the mocked operation.
    pub delay_ms: u64,
    /// Payload the mocked operation resolves with.
    pub message: String,
    /// How many sources the parallel composition demo runs.
    pub parallel_sources: usize,
    /// `tracing` filter directive, overridden by `RUST_LOG`.
    pub log_filter: String,
}

impl Default for TourConfig {
    fn default() -> Self {
        Self {
            delay_ms: DEFAULT_DELAY_MS,
            message: DATA_LOADED.to_string(),
            parallel_sources: 3,
            log_filter: "info".to_string(),
        }
    }
}

impl TourConfig {
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: TourConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        debug!(path = %path.display(), "loaded config file");
        Self::from_toml_str(&content)
    }

    /// Resolve the config: `$FEATURE_TOUR_CONFIG`, then `./tour.toml`,
    /// then defaults.
    pub fn load() -> Result<Self, ConfigError> {
        let explicit = std::env::var_os(CONFIG_ENV).map(PathBuf::from);
        Self::load_from(explicit.as_deref(), Path::new(DEFAULT_CONFIG_FILE))
    }

    /// An explicit path must exist; the fallback path is optional.
    pub fn load_from(explicit: Option<&Path>, fallback: &Path) -> Result<Self, ConfigError> {
        match explicit {
            Some(path) => Self::from_file(path),
            None if fallback.is_file() => Self::from_file(fallback),
            None => Ok(Self::default()),
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.parallel_sources == 0 {
            return Err(ConfigError::Invalid {
                field: "parallel_sources",
                reason: "must be at least 1".to_string(),
            });
        }
        if self.parallel_sources > MAX_PARALLEL_SOURCES {
            return Err(ConfigError::Invalid {
                field: "parallel_sources",
                reason: format!("must be at most {MAX_PARALLEL_SOURCES}"),
            });
        }
        if self.message.is_empty() {
            return Err(ConfigError::Invalid {
                field: "message",
                reason: "must not be empty".to_string(),
            });
        }
        Ok(())
    }

    pub fn delay(&self) -> Duration {
        Duration::from_millis(self.delay_ms)
    }
}
