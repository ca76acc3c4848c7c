//! Optional configuration for waitkit defaults.
//!
//! A suite can ship a `waitkit.toml` to tune the default timeout and poll
//! interval, and slow CI machines can stretch every timeout with a scale
//! factor:
//!
//! ```toml
//! [poll]
//! timeout_ms = 5000
//! interval_ms = 10
//! timeout_scale = 1.0
//! ```
//!
//! Lookup order for [`WaitConfig::load`]: the file named by `WAITKIT_CONFIG`,
//! then `./waitkit.toml`, then `~/.waitkit/config.toml`. A missing file is
//! not an error; an unreadable or invalid one is logged and ignored.

use std::path::{Path, PathBuf};
use std::time::Duration;
use std::{env, fs, io};

use serde::Deserialize;
use thiserror::Error;
use toml::de::Error as TomlError;
use waitkit_types::PollOptions;

pub const CONFIG_ENV: &str = "WAITKIT_CONFIG";
pub const TIMEOUT_SCALE_ENV: &str = "WAITKIT_TIMEOUT_SCALE";
const LOCAL_CONFIG_FILE: &str = "waitkit.toml";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config at {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to parse config: {0}")]
    Parse(#[from] TomlError),
    #[error("poll interval must be greater than zero")]
    ZeroInterval,
    #[error("timeout scale must be a positive finite number, got {0}")]
    InvalidScale(f64),
}

#[derive(Debug, Default, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct WaitConfig {
    pub poll: Option<PollSection>,
}

#[derive(Debug, Default, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PollSection {
    pub timeout_ms: Option<u64>,
    pub interval_ms: Option<u64>,
    pub timeout_scale: Option<f64>,
}

impl WaitConfig {
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&content)
    }

    /// Load the first config file found, or `None` when there is none.
    ///
    /// Unreadable or malformed files are logged and treated as absent.
    pub fn load() -> Option<Self> {
        let path = config_path()?;
        match Self::load_from(&path) {
            Ok(config) => Some(config),
            Err(err) => {
                tracing::warn!("Ignoring waitkit config at {}: {}", path.display(), err);
                None
            }
        }
    }

    /// Resolve poll options from this config, falling back to the built-in
    /// defaults for missing fields.
    ///
    /// `WAITKIT_TIMEOUT_SCALE`, when set, takes precedence over the file's
    /// `timeout_scale`.
    pub fn poll_options(&self) -> Result<PollOptions, ConfigError> {
        let env_scale = env::var(TIMEOUT_SCALE_ENV).ok();
        self.poll_options_with_scale_override(env_scale.as_deref())
    }

    fn poll_options_with_scale_override(
        &self,
        scale_override: Option<&str>,
    ) -> Result<PollOptions, ConfigError> {
        let section = self.poll.clone().unwrap_or_default();
        let mut options = PollOptions::new();

        if let Some(timeout_ms) = section.timeout_ms {
            options = options.timeout(Duration::from_millis(timeout_ms));
        }
        if let Some(interval_ms) = section.interval_ms {
            if interval_ms == 0 {
                return Err(ConfigError::ZeroInterval);
            }
            options = options.interval(Duration::from_millis(interval_ms));
        }

        let scale = match scale_override.map(str::trim).filter(|s| !s.is_empty()) {
            Some(raw) => match raw.parse::<f64>() {
                Ok(scale) => Some(scale),
                Err(_) => {
                    tracing::warn!("Ignoring unparsable {TIMEOUT_SCALE_ENV}={raw:?}");
                    section.timeout_scale
                }
            },
            None => section.timeout_scale,
        };

        if let Some(scale) = scale {
            if !scale.is_finite() || scale <= 0.0 {
                return Err(ConfigError::InvalidScale(scale));
            }
            options = options.scale_timeout(scale);
        }

        tracing::debug!(
            timeout_ms = options.timeout_duration().as_millis(),
            interval_ms = options.interval_duration().as_millis(),
            "Resolved waitkit poll options"
        );
        Ok(options)
    }
}

/// Poll options from the discovered config file, or the defaults.
///
/// Invalid values are logged and replaced by the defaults.
#[must_use]
pub fn default_poll_options() -> PollOptions {
    let config = WaitConfig::load().unwrap_or_default();
    match config.poll_options() {
        Ok(options) => options,
        Err(err) => {
            tracing::warn!("Invalid waitkit config, using defaults: {}", err);
            PollOptions::new()
        }
    }
}

/// Locate the config file to load.
///
/// A `WAITKIT_CONFIG` path that does not exist means "no config": the other
/// locations are not consulted.
#[must_use]
pub fn config_path() -> Option<PathBuf> {
    if let Some(path) = env::var_os(CONFIG_ENV).filter(|p| !p.is_empty()) {
        let path = PathBuf::from(path);
        if path.exists() {
            return Some(path);
        }
        tracing::debug!("{CONFIG_ENV} names a missing file: {}", path.display());
        return None;
    }
    let local = PathBuf::from(LOCAL_CONFIG_FILE);
    if local.exists() {
        return Some(local);
    }
    dirs::home_dir()
        .map(|home| home.join(".waitkit").join("config.toml"))
        .filter(|path| path.exists())
}
