//! File logging.
//!
//! The terminal belongs to the table view, so tracing output goes to a daily
//! file under the local data directory (`~/.local/share/lazytable/logs/` on
//! Linux). `RUST_LOG` overrides the default filter, e.g.
//! `RUST_LOG=lazytable=debug`.

use std::path::{Path, PathBuf};

use anyhow::Context;
use tracing::info;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{filter::EnvFilter, fmt, prelude::*};

use crate::config::Config;

/// Filter used when `RUST_LOG` is not set.
const DEFAULT_LOG_FILTER: &str = "lazytable=info,warn";

const LOG_FILE_PREFIX: &str = "lazytable.log";

/// Install the file subscriber.
///
/// Returns the directory the log files are written to.
///
/// ```no_run
/// let log_dir = lazytable::logging::init().expect("Failed to initialize logging");
/// println!("logging to {}", log_dir.display());
/// ```
pub fn init() -> anyhow::Result<PathBuf> {
    let dir = log_dir()?;
    std::fs::create_dir_all(&dir)
        .with_context(|| format!("Could not create log directory {}", dir.display()))?;

    let appender = RollingFileAppender::new(Rotation::DAILY, &dir, LOG_FILE_PREFIX);
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_writer(appender)
                .with_ansi(false)
                .with_target(true)
                .with_line_number(true),
        )
        .with(filter)
        .try_init()?;

    Ok(dir)
}

/// Record where this run reads its configuration and records from, and
/// which columns end up on screen after command-line overrides.
pub fn log_startup(config_path: &Path, config: &Config) {
    info!(
        version = env!("CARGO_PKG_VERSION"),
        config = %config_path.display(),
        data_source = %config.settings.data_source,
        columns = %name_list(config.table.columns.as_deref()),
        sort = %name_list(config.table.sort.as_deref()),
        mouse = config.settings.mouse,
        "LazyTable starting up"
    );
}

/// Log application shutdown.
pub fn shutdown() {
    info!("LazyTable shutting down");
}

fn log_dir() -> anyhow::Result<PathBuf> {
    let base = dirs::data_local_dir().context("Could not determine local data directory")?;
    Ok(base.join("lazytable").join("logs"))
}

/// Render a configured field list for a log line.
fn name_list(names: Option<&[String]>) -> String {
    match names {
        None => "<unset>".to_string(),
        Some([]) => "<none>".to_string(),
        Some(names) => names.join(","),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_dir_is_under_app_name() {
        if let Ok(dir) = log_dir() {
            assert!(dir.ends_with("lazytable/logs"));
        }
    }

    #[test]
    fn test_name_list() {
        assert_eq!(name_list(None), "<unset>");
        assert_eq!(name_list(Some(&[] as &[String])), "<none>");
        let names = vec!["id".to_string(), "email".to_string()];
        assert_eq!(name_list(Some(names.as_slice())), "id,email");
    }
}
