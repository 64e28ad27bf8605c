//! The sortable table core.
//!
//! Sorting, view state and the render model. Nothing in here touches the
//! terminal; see `ui::components::DataTable` for drawing.

mod compare;
pub mod model;
mod sort;
mod state;

pub use compare::{compare_by_key, compare_field, TextCollator};
pub use sort::{initial_direction, sorted, Direction, SortKey, SortToggles};
pub use state::{TableAction, TableState};
