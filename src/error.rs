//! Centralized error types for LazyTable.
//!
//! These are the failures that stop the application before or while the
//! terminal is in use. Load failures never reach this type; they are logged
//! by the loader task and the table stays empty.

use thiserror::Error;

use crate::config::ConfigError;

/// The main application error type.
#[derive(Debug, Error)]
pub enum AppError {
    /// Configuration-related errors.
    #[error("{0}")]
    Config(#[from] ConfigError),

    /// IO errors while drawing or restoring the terminal.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The terminal could not be put into raw mode.
    #[error("Terminal error: {0}")]
    Terminal(String),
}

impl AppError {
    /// Create a terminal error.
    pub fn terminal(msg: impl Into<String>) -> Self {
        AppError::Terminal(msg.into())
    }

    /// Get a user-friendly message for display.
    pub fn user_message(&self) -> String {
        match self {
            AppError::Config(e) => match e {
                ConfigError::NoConfigDir => {
                    "Could not find configuration directory. Please check your system settings."
                        .to_string()
                }
                ConfigError::ReadError(_) => {
                    "Could not read configuration file. Please check the file is readable."
                        .to_string()
                }
                ConfigError::ParseError(_) => {
                    "Configuration file is invalid. Please check the file format.".to_string()
                }
            },
            AppError::Io(_) => "The terminal stopped responding.".to_string(),
            AppError::Terminal(msg) => format!("Terminal error: {}", msg),
        }
    }

    /// Get a suggested action for the user.
    pub fn suggested_action(&self) -> Option<&'static str> {
        match self {
            AppError::Config(ConfigError::ParseError(_)) => {
                Some("Fix the file or point LAZYTABLE_CONFIG / --config at another one.")
            }
            AppError::Config(ConfigError::NoConfigDir) => {
                Some("Pass a configuration file with --config.")
            }
            AppError::Terminal(_) => Some("Run lazytable in an interactive terminal."),
            _ => None,
        }
    }
}

/// Result type for application operations.
pub type Result<T> = std::result::Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_error_from_config_error() {
        let app_err: AppError = ConfigError::NoConfigDir.into();
        assert!(matches!(app_err, AppError::Config(ConfigError::NoConfigDir)));
        assert!(app_err.suggested_action().unwrap().contains("--config"));
    }

    #[test]
    fn test_user_message_parse_config() {
        let toml_err = toml::from_str::<crate::config::Config>("settings = 3").unwrap_err();
        let err = AppError::Config(ConfigError::ParseError(toml_err));
        assert!(err.user_message().contains("invalid"));
        assert!(err.suggested_action().unwrap().contains("LAZYTABLE_CONFIG"));
    }

    #[test]
    fn test_user_message_read_config() {
        let io_err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err = AppError::Config(ConfigError::ReadError(io_err));
        assert!(err.user_message().contains("readable"));
        assert!(err.suggested_action().is_none());
    }

    #[test]
    fn test_io_error() {
        let err: AppError = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "pipe").into();
        assert!(matches!(err, AppError::Io(_)));
        assert!(err.to_string().contains("pipe"));
    }

    #[test]
    fn test_terminal_error() {
        let err = AppError::terminal("not a tty");
        assert_eq!(err.user_message(), "Terminal error: not a tty");
        assert!(err.suggested_action().is_some());
    }
}
