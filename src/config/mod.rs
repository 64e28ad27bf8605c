//! Configuration management for LazyTable.
//!
//! This module loads the configuration file, which holds the application
//! settings and the table's column configuration.
//!
//! The file lives at `<config_dir>/lazytable/config.toml` unless the
//! `LAZYTABLE_CONFIG` environment variable names another path. A missing
//! file is not an error: the defaults are used.

mod settings;
mod table;

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;
use tracing::{debug, info, warn};

pub use settings::{Settings, DEFAULT_TICK_RATE_MS};
pub use table::{parse_field_list, TableConfig};

/// Environment variable overriding the configuration file path.
pub const CONFIG_PATH_ENV: &str = "LAZYTABLE_CONFIG";

/// Errors that can occur while loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The platform configuration directory could not be determined.
    #[error("Could not determine configuration directory")]
    NoConfigDir,

    /// The configuration file could not be read.
    #[error("Failed to read configuration file: {0}")]
    ReadError(#[source] io::Error),

    /// The configuration file is not valid TOML for [`Config`].
    #[error("Failed to parse configuration file: {0}")]
    ParseError(#[from] toml::de::Error),
}

/// Result type for configuration operations.
pub type Result<T> = std::result::Result<T, ConfigError>;

/// The full configuration file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Config {
    /// Application settings.
    #[serde(default)]
    pub settings: Settings,
    /// Table column configuration.
    #[serde(default)]
    pub table: TableConfig,
}

impl Config {
    /// Load the configuration from `path`, falling back to defaults when the
    /// file does not exist.
    pub fn load_from(path: &Path) -> Result<Self> {
        let contents = match fs::read_to_string(path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                debug!(path = %path.display(), "No configuration file, using defaults");
                return Ok(Self::default());
            }
            Err(e) => return Err(ConfigError::ReadError(e)),
        };

        let config: Config = toml::from_str(&contents)?;
        info!(path = %path.display(), "Configuration loaded");
        Ok(config)
    }

    /// Log table configuration entries that cannot have a visible effect.
    ///
    /// These are not rejected; the table simply renders without them.
    pub fn warn_inconsistencies(&self) {
        for name in self.table.unknown_names() {
            warn!(field = %name, "Table configuration names an unknown field");
        }
        for name in self.table.dead_sort_keys() {
            warn!(field = %name, "Sortable field has no visible column");
        }
    }
}

/// The configuration file path.
///
/// Uses `LAZYTABLE_CONFIG` when set, otherwise the platform configuration
/// directory.
pub fn config_path() -> Result<PathBuf> {
    if let Some(path) = std::env::var_os(CONFIG_PATH_ENV) {
        return Ok(PathBuf::from(path));
    }
    let base = dirs::config_dir().ok_or(ConfigError::NoConfigDir)?;
    Ok(base.join("lazytable").join("config.toml"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::Field;
    use serial_test::serial;
    use tempfile::tempdir;

    #[test]
    fn test_missing_file_gives_defaults() {
        let dir = tempdir().unwrap();
        let config = Config::load_from(&dir.path().join("config.toml")).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_load_table_section() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(
            &path,
            r#"
[settings]
data_source = "people.json"

[table]
columns = ["email", "status"]
sort = ["email"]
"#,
        )
        .unwrap();

        let config = Config::load_from(&path).unwrap();
        assert_eq!(config.settings.data_source, "people.json");
        assert_eq!(config.settings.theme, "dark");
        assert!(config.table.shows(Field::Email));
        assert!(!config.table.shows(Field::Id));
        assert!(config.table.is_sortable(Field::Email));
        assert!(!config.table.is_sortable(Field::Status));
    }

    #[test]
    fn test_missing_table_section_is_full_table() {
        let config: Config = toml::from_str("[settings]\nvim_mode = false").unwrap();
        assert!(!config.settings.vim_mode);
        assert_eq!(config.table, TableConfig::default());
    }

    #[test]
    fn test_invalid_toml() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "[table\ncolumns = 3").unwrap();
        assert!(matches!(
            Config::load_from(&path),
            Err(ConfigError::ParseError(_))
        ));
    }

    #[test]
    #[serial]
    fn test_config_path_env_override() {
        std::env::set_var(CONFIG_PATH_ENV, "/tmp/lazytable-test.toml");
        let path = config_path().unwrap();
        std::env::remove_var(CONFIG_PATH_ENV);
        assert_eq!(path, PathBuf::from("/tmp/lazytable-test.toml"));
    }

    #[test]
    #[serial]
    fn test_config_path_default() {
        std::env::remove_var(CONFIG_PATH_ENV);
        if let Ok(path) = config_path() {
            assert!(path.ends_with("lazytable/config.toml"));
        }
    }
}
