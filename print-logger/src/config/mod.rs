//! Threshold configuration: the process-wide severity setter/getter pair and
//! the serde/env-backed [`LoggerConfig`].

mod threshold;

pub use threshold::Threshold;

use crate::error::ConfigError;
use crate::severity::Severity;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::debug;

/// Environment variable read by [`LoggerConfig::from_env`].
pub const LEVEL_ENV_VAR: &str = "PRINT_LOG_LEVEL";

/// Sets the process-wide threshold.
pub fn set_log_level(level: Severity) {
    Threshold::global().set(level);
}

/// Sets the process-wide threshold from a case-insensitive name.
///
/// `None`, empty, and unrecognized names all select `INFO`.
pub fn set_log_level_str(name: Option<&str>) {
    Threshold::global().set_from_name(name);
}

/// Current process-wide threshold.
pub fn log_level() -> Severity {
    Threshold::global().get()
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoggerConfig {
    #[serde(default)]
    pub level: Severity,
}

impl LoggerConfig {
    pub fn new(level: Severity) -> Self {
        Self { level }
    }

    /// Reads `PRINT_LOG_LEVEL`, loading a `.env` file from the working
    /// directory first when one exists.
    pub fn from_env() -> Self {
        dotenv::dotenv().ok();
        let raw = std::env::var(LEVEL_ENV_VAR).ok();
        let config = Self::new(Severity::from_name_or_default(raw.as_deref()));
        debug!("Resolved log level {} from {}", config.level, LEVEL_ENV_VAR);
        config
    }

    /// Reads `PRINT_LOG_LEVEL` from a `.env`-style file without touching the
    /// process environment. A file without the key yields the default.
    pub fn from_env_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let to_error = |source| ConfigError::EnvFile {
            path: path.to_path_buf(),
            source,
        };

        let mut raw = None;
        for entry in dotenv::from_path_iter(path).map_err(to_error)? {
            let (key, value) = entry.map_err(to_error)?;
            if key == LEVEL_ENV_VAR {
                raw = Some(value);
            }
        }

        let config = Self::new(Severity::from_name_or_default(raw.as_deref()));
        debug!("Loaded log level {} from {}", config.level, path.display());
        Ok(config)
    }

    pub fn apply(&self, threshold: &Threshold) {
        threshold.set(self.level);
    }

    pub fn apply_global(&self) {
        self.apply(Threshold::global());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_default_level() {
        assert_eq!(LoggerConfig::default().level, Severity::Info);
    }

    #[test]
    fn test_apply_to_injected_threshold() {
        let threshold = Threshold::new(Severity::Trace);
        LoggerConfig::new(Severity::Warn).apply(&threshold);
        assert_eq!(threshold.get(), Severity::Warn);
    }
}
