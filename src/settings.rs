use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};
use simplelog::LevelFilter;
use thiserror::Error;

use crate::config::{DEFAULT_TICK_INTERVAL_MS, MIN_TICK_INTERVAL_MS};

const APP_DIR_NAME: &str = "grid-snake";
const SETTINGS_FILE_NAME: &str = "settings.json";

/// Runtime settings read from an optional JSON file.
///
/// Every field may be omitted; command-line flags override file values.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    pub tick_interval_ms: u64,
    /// Seed for a reproducible game; `None` draws from OS entropy.
    pub seed: Option<u64>,
    /// File the log is written to. No logger is installed when unset.
    pub log_file: Option<PathBuf>,
    pub log_level: LogLevel,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            tick_interval_ms: DEFAULT_TICK_INTERVAL_MS,
            seed: None,
            log_file: None,
            log_level: LogLevel::Info,
        }
    }
}

impl Settings {
    /// Returns the platform-correct settings file path, if a config
    /// directory exists.
    #[must_use]
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|base| base.join(APP_DIR_NAME).join(SETTINGS_FILE_NAME))
    }

    /// Reads settings from `path`. A missing file yields the defaults when
    /// `allow_missing` is set.
    ///
    /// # Errors
    ///
    /// Returns `Err` when the file cannot be read or does not parse.
    pub fn load(path: &Path, allow_missing: bool) -> Result<Self, SettingsError> {
        let raw = match fs::read_to_string(path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == io::ErrorKind::NotFound && allow_missing => {
                return Ok(Self::default());
            }
            Err(e) => {
                return Err(SettingsError::Read {
                    path: path.to_path_buf(),
                    source: e,
                });
            }
        };

        serde_json::from_str(&raw).map_err(|source| SettingsError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// The tick interval, never shorter than `MIN_TICK_INTERVAL_MS`.
    #[must_use]
    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_interval_ms.max(MIN_TICK_INTERVAL_MS))
    }
}

/// Log verbosity as written in the settings file.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Off,
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Off => LevelFilter::Off,
            LogLevel::Error => LevelFilter::Error,
            LogLevel::Warn => LevelFilter::Warn,
            LogLevel::Info => LevelFilter::Info,
            LogLevel::Debug => LevelFilter::Debug,
            LogLevel::Trace => LevelFilter::Trace,
        }
    }
}

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("failed to read settings file {}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to parse settings file {}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

#[cfg(test)]
mod tests {
    use std::fs;
    use std::path::PathBuf;
    use std::time::{Duration, SystemTime, UNIX_EPOCH};

    use super::{LogLevel, Settings, SettingsError};
    use crate::config::{DEFAULT_TICK_INTERVAL_MS, MIN_TICK_INTERVAL_MS};

    #[test]
    fn missing_file_yields_defaults() {
        let path = unique_test_path("missing");

        let settings = Settings::load(&path, true).expect("missing file should be allowed");

        assert_eq!(settings, Settings::default());
        assert_eq!(settings.tick_interval_ms, DEFAULT_TICK_INTERVAL_MS);
    }

    #[test]
    fn missing_file_is_an_error_when_required() {
        let path = unique_test_path("required");

        assert!(matches!(
            Settings::load(&path, false),
            Err(SettingsError::Read { .. })
        ));
    }

    #[test]
    fn partial_file_keeps_other_defaults() {
        let path = unique_test_path("partial");
        write_test_file(&path, r#"{ "seed": 42, "log_level": "debug" }"#);

        let settings = Settings::load(&path, true).expect("partial file should parse");

        assert_eq!(settings.seed, Some(42));
        assert_eq!(settings.log_level, LogLevel::Debug);
        assert_eq!(settings.tick_interval_ms, DEFAULT_TICK_INTERVAL_MS);
        assert_eq!(settings.log_file, None);
        cleanup_test_path(&path);
    }

    #[test]
    fn malformed_file_returns_error() {
        let path = unique_test_path("malformed");
        write_test_file(&path, "not-json");

        assert!(matches!(
            Settings::load(&path, true),
            Err(SettingsError::Parse { .. })
        ));
        cleanup_test_path(&path);
    }

    #[test]
    fn unknown_keys_are_rejected() {
        let path = unique_test_path("unknown");
        write_test_file(&path, r#"{ "grid_size": 30 }"#);

        assert!(Settings::load(&path, true).is_err());
        cleanup_test_path(&path);
    }

    #[test]
    fn tick_interval_is_clamped() {
        let settings = Settings {
            tick_interval_ms: 1,
            ..Settings::default()
        };

        assert_eq!(
            settings.tick_interval(),
            Duration::from_millis(MIN_TICK_INTERVAL_MS)
        );
    }

    fn unique_test_path(label: &str) -> PathBuf {
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .expect("system time should be after epoch")
            .as_nanos();

        std::env::temp_dir()
            .join("grid-snake-settings-tests")
            .join(format!("{label}-{nanos}.json"))
    }

    fn write_test_file(path: &PathBuf, contents: &str) {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("test parent directory should be creatable");
        }
        fs::write(path, contents).expect("test file write should succeed");
    }

    fn cleanup_test_path(path: &PathBuf) {
        let _ = fs::remove_file(path);
        if let Some(parent) = path.parent() {
            let _ = fs::remove_dir(parent);
        }
    }
}
