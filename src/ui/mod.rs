//! User interface components and views.
//!
//! This module contains all TUI rendering logic: the table widget, the
//! footer and the help panel.

mod components;
pub mod theme;
mod views;

pub use components::{render_status_bar, DataTable, TableHit};
pub use theme::Theme;
pub use views::{HelpAction, HelpView};
