//! Command-line interface.

use std::path::PathBuf;

use clap::Parser;

use crate::config::{parse_field_list, Config};

/// A terminal-based sortable table viewer for JSON record fixtures.
#[derive(Debug, Parser)]
#[command(name = "lazytable", version, about)]
pub struct Cli {
    /// Data file path or http(s) URL of the record list.
    #[arg(short, long, value_name = "SOURCE")]
    pub data: Option<String>,

    /// Configuration file to use instead of the default location.
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Comma-separated fields to show, e.g. "id,email,status".
    #[arg(long, value_name = "FIELDS")]
    pub columns: Option<String>,

    /// Comma-separated fields that get a sort control.
    #[arg(long, value_name = "FIELDS")]
    pub sort: Option<String>,

    /// Color theme ("dark" or "light").
    #[arg(long)]
    pub theme: Option<String>,

    /// Do not capture the mouse.
    #[arg(long)]
    pub no_mouse: bool,
}

impl Cli {
    /// Override configuration values with the ones given on the command line.
    pub fn apply_to(&self, config: &mut Config) {
        if let Some(data) = &self.data {
            config.settings.data_source = data.clone();
        }
        if let Some(columns) = &self.columns {
            config.table.columns = Some(parse_field_list(columns));
        }
        if let Some(sort) = &self.sort {
            config.table.sort = Some(parse_field_list(sort));
        }
        if let Some(theme) = &self.theme {
            config.settings.theme = theme.clone();
        }
        if self.no_mouse {
            config.settings.mouse = false;
        }
    }
}
