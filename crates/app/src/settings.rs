//! Layered settings: defaults, then `vellum.toml`, then `VELLUM_*`
//! environment variables.

use std::path::Path;

use config::{Config, ConfigError, Environment, File, FileFormat};
use serde::Deserialize;
use vellum_infrastructure::DispatchConfig;
use vellum_infrastructure::dispatch::DEFAULT_LANE_THRESHOLD_BYTES;

/// Settings file read from the working directory when `--config` is absent.
pub const DEFAULT_CONFIG_FILE: &str = "vellum.toml";

/// Prefix of environment variable overrides.
pub const ENV_PREFIX: &str = "VELLUM";

/// Runtime settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Payloads of at least this many bytes use the large lane.
    pub lane_threshold_bytes: usize,
    /// Log filter used when `RUST_LOG` is unset.
    pub log_filter: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            lane_threshold_bytes: DEFAULT_LANE_THRESHOLD_BYTES,
            log_filter: "warn".to_string(),
        }
    }
}

impl Settings {
    /// Loads settings. An explicit `path` must exist; the default file is
    /// optional.
    ///
    /// # Errors
    ///
    /// Returns an error when a file cannot be read or a value has the
    /// wrong type.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let file = match path {
            Some(path) => File::from(path).format(FileFormat::Toml).required(true),
            None => File::new(DEFAULT_CONFIG_FILE, FileFormat::Toml).required(false),
        };

        Config::builder()
            .add_source(file)
            .add_source(Environment::with_prefix(ENV_PREFIX).try_parsing(true))
            .build()?
            .try_deserialize()
    }

    /// Dispatch queue settings.
    #[must_use]
    pub const fn dispatch(&self) -> DispatchConfig {
        DispatchConfig::with_threshold(self.lane_threshold_bytes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_file_overrides_defaults() {
        let mut file = tempfile::Builder::new()
            .suffix(".toml")
            .tempfile()
            .expect("temp file");
        writeln!(file, "lane_threshold_bytes = 2048").expect("write");

        let settings = Settings::load(Some(file.path())).expect("valid settings");
        assert_eq!(settings.lane_threshold_bytes, 2048);
        assert_eq!(settings.log_filter, "warn");
        assert_eq!(settings.dispatch(), DispatchConfig::with_threshold(2048));
    }

    #[test]
    fn test_explicit_file_must_exist() {
        let result = Settings::load(Some(Path::new("/definitely/missing/vellum.toml")));
        assert!(result.is_err());
    }
}
