//! Runtime configuration: `config/tableside.toml` and environment variables.
//!
//! Load order: the TOML file first (if present), then an explicitly passed file, then
//! `TABLESIDE__*` environment variables on top (`TABLESIDE__POLL_INTERVAL_MS=2000`). Every key is
//! optional; anything missing keeps its default.

use serde::Deserialize;
use std::path::PathBuf;
use std::time::Duration;

/// Settings for the whole restaurant system.
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default)]
pub struct RestaurantConfig {
    /// Request channel capacity of each actor.
    pub channel_capacity: usize,
    /// How often displays (and feeds) refresh, in milliseconds.
    pub poll_interval_ms: u64,
    /// Log filter used when `RUST_LOG` is not set.
    pub log_filter: String,
}

impl Default for RestaurantConfig {
    fn default() -> Self {
        Self {
            channel_capacity: 32,
            poll_interval_ms: 5000,
            log_filter: "info".to_string(),
        }
    }
}

impl RestaurantConfig {
    pub fn poll_interval(&self) -> Duration {
        Duration::from_millis(self.poll_interval_ms)
    }
}

/// Loads the configuration; environment variables `TABLESIDE__*` override file values.
///
/// 1. `config/tableside.toml` (or `../config/tableside.toml`) when it exists
/// 2. `config_path` when given and present
/// 3. `TABLESIDE__*` environment variables
pub fn load_config(config_path: Option<PathBuf>) -> Result<RestaurantConfig, config::ConfigError> {
    let mut builder = config::Config::builder();

    for name in ["config/tableside", "../config/tableside"] {
        if std::path::Path::new(&format!("{}.toml", name)).exists() {
            builder = builder.add_source(config::File::with_name(name).required(false));
            break;
        }
    }

    if let Some(ref path) = config_path {
        if path.exists() {
            builder = builder.add_source(config::File::from(path.clone()).required(false));
        }
    }

    builder = builder.add_source(
        config::Environment::with_prefix("TABLESIDE")
            .separator("__")
            .try_parsing(true),
    );

    let loaded: RestaurantConfig = builder.build()?.try_deserialize()?;

    if loaded.channel_capacity == 0 {
        return Err(config::ConfigError::Message(
            "channel_capacity must be at least 1".to_string(),
        ));
    }
    if loaded.poll_interval_ms == 0 {
        return Err(config::ConfigError::Message(
            "poll_interval_ms must be at least 1".to_string(),
        ));
    }
    Ok(loaded)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_toml(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_missing_file_gives_defaults() {
        let loaded = load_config(Some(PathBuf::from("does/not/exist.toml"))).unwrap();
        assert_eq!(loaded.channel_capacity, 32);
        assert_eq!(loaded.poll_interval(), Duration::from_secs(5));
    }

    #[test]
    fn test_file_overrides_some_keys() {
        let file = write_toml("channel_capacity = 8\n");
        let loaded = load_config(Some(file.path().to_path_buf())).unwrap();
        assert_eq!(loaded.channel_capacity, 8);
        assert_eq!(loaded.poll_interval_ms, 5000);
    }

    #[test]
    fn test_zero_capacity_is_rejected() {
        let file = write_toml("channel_capacity = 0\n");
        assert!(load_config(Some(file.path().to_path_buf())).is_err());
    }

    #[test]
    fn test_environment_overrides_file() {
        // process-wide: no other test may assert on log_filter
        std::env::set_var("TABLESIDE__LOG_FILTER", "tableside=debug");
        let file = write_toml("log_filter = \"warn\"\n");
        let loaded = load_config(Some(file.path().to_path_buf()));
        std::env::remove_var("TABLESIDE__LOG_FILTER");

        assert_eq!(loaded.unwrap().log_filter, "tableside=debug");
    }
}
