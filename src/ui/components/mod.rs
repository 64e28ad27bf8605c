//! Reusable UI components.

mod data_table;
mod help_bar;

pub use data_table::{DataTable, TableHit};
pub use help_bar::render_status_bar;
