//! Application settings configuration.

use serde::Deserialize;

use crate::data::DEFAULT_DATA_SOURCE;

/// Default event loop tick rate in milliseconds.
pub const DEFAULT_TICK_RATE_MS: u64 = 100;

/// Application-wide settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// File path or URL of the record collection.
    pub data_source: String,
    /// The UI theme to use.
    pub theme: String,
    /// Whether to use vim-style keybindings.
    pub vim_mode: bool,
    /// Whether mouse clicks are captured.
    pub mouse: bool,
    /// Event loop tick rate in milliseconds.
    pub tick_rate_ms: u64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            data_source: DEFAULT_DATA_SOURCE.to_string(),
            theme: "dark".to_string(),
            vim_mode: true,
            mouse: true,
            tick_rate_ms: DEFAULT_TICK_RATE_MS,
        }
    }
}
