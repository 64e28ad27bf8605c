//! LazyTable - a terminal-based sortable table for JSON record fixtures.
//!
//! The records are loaded once at startup; columns and sort controls come
//! from the configuration. Sorting and row highlighting happen in memory.

pub mod app;
pub mod cli;
pub mod config;
pub mod data;
pub mod error;
pub mod events;
pub mod logging;
pub mod table;
pub mod tasks;
pub mod ui;
