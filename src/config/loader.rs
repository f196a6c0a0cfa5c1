// src/config/loader.rs
//! Configuration loader with validation

use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::config::{constants::paths, FirmwareConfig};
use crate::error::ConfigError;

/// Loads the firmware configuration from disk
///
/// The loader reads a single TOML file into [`FirmwareConfig`], filling
/// every missing key with its documented default and running the
/// cross-field consistency checks. A missing file on the default search
/// paths is not an error; the built-in defaults apply.
pub struct ConfigLoader {
    config_paths: Vec<PathBuf>,
}

impl ConfigLoader {
    /// Create a loader using the default search paths
    pub fn new() -> Self {
        Self {
            config_paths: vec![
                PathBuf::from(paths::DEFAULT_CONFIG_FILE),
                PathBuf::from(paths::LOCAL_CONFIG_FILE),
            ],
        }
    }

    /// Create a loader that reads exactly one file
    pub fn with_path<P: Into<PathBuf>>(path: P) -> Self {
        Self {
            config_paths: vec![path.into()],
        }
    }

    /// Load the configuration, falling back to defaults when no file exists.
    ///
    /// The first existing path wins; later paths are not merged on top.
    pub fn load(&self) -> Result<FirmwareConfig, ConfigError> {
        for path in &self.config_paths {
            if path.exists() {
                info!(path = %path.display(), "loading firmware configuration");
                return Self::load_file(path);
            }
            debug!(path = %path.display(), "no configuration file, skipping");
        }

        debug!("no configuration file found, using defaults");
        Ok(FirmwareConfig::default())
    }

    /// Load a configuration file that must exist
    pub fn load_file<P: AsRef<Path>>(path: P) -> Result<FirmwareConfig, ConfigError> {
        let path = path.as_ref();

        if !path.exists() {
            return Err(ConfigError::FileNotFound {
                path: path.display().to_string(),
            });
        }

        let content = std::fs::read_to_string(path)?;
        let config: FirmwareConfig = toml::from_str(&content)?;

        config
            .validate_consistency()
            .map_err(|issues| ConfigError::Validation { issues })?;

        Ok(config)
    }

    /// Validate a configuration file without keeping the result
    pub fn validate_file<P: AsRef<Path>>(&self, path: P) -> Result<(), ConfigError> {
        Self::load_file(path).map(|_| ())
    }

    /// Export a configuration to a TOML file
    pub fn export_config<P: AsRef<Path>>(
        &self,
        path: P,
        config: &FirmwareConfig,
    ) -> Result<(), ConfigError> {
        let toml_content = toml::to_string_pretty(config)?;
        std::fs::write(path, toml_content)?;
        Ok(())
    }
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::BoardClass;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_missing_file_falls_back_to_defaults() {
        let loader = ConfigLoader::with_path("/nonexistent/glove.toml");
        let config = loader.load().expect("defaults must load");
        assert_eq!(config, FirmwareConfig::default());
    }

    #[test]
    fn test_load_file_requires_existing_path() {
        let err = ConfigLoader::load_file("/nonexistent/glove.toml").unwrap_err();
        assert!(matches!(err, ConfigError::FileNotFound { .. }));
    }

    #[test]
    fn test_load_valid_config_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        writeln!(
            temp_file,
            r#"
[timing]
loop_delay_ms = 2
calibration_loops = 100

[analog]
board = "avr"
clamp_flexion = true
        "#
        )
        .unwrap();

        let config = ConfigLoader::load_file(temp_file.path()).unwrap();
        assert_eq!(config.timing.loop_delay_ms, 2);
        assert_eq!(config.timing.calibration_loops, 100);
        assert_eq!(config.analog.board, BoardClass::Avr);
        assert!(config.analog.clamp_flexion);
    }

    #[test]
    fn test_invalid_toml_is_a_parse_error() {
        let mut temp_file = NamedTempFile::new().unwrap();
        writeln!(temp_file, "not valid toml [").unwrap();

        let err = ConfigLoader::load_file(temp_file.path()).unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_inconsistent_config_is_rejected() {
        let mut temp_file = NamedTempFile::new().unwrap();
        writeln!(
            temp_file,
            r#"
[timing]
calibration_loops = -5
        "#
        )
        .unwrap();

        let err = ConfigLoader::load_file(temp_file.path()).unwrap_err();
        assert!(matches!(err, ConfigError::Validation { .. }));
    }

    #[test]
    fn test_config_export_round_trips() {
        let loader = ConfigLoader::new();
        let temp_file = NamedTempFile::new().unwrap();

        let mut config = FirmwareConfig::default();
        config.analog.board = BoardClass::Custom;
        config.analog.analog_max = Some(2047);

        loader.export_config(temp_file.path(), &config).unwrap();
        let reloaded = ConfigLoader::load_file(temp_file.path()).unwrap();

        assert_eq!(config, reloaded);
    }
}
