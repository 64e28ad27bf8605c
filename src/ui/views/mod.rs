//! Application views (screens).

mod help;

pub use help::{HelpAction, HelpView};
