//! Table view state and its reducer.
//!
//! All changes to the working data set, the sort toggles and the highlighted
//! row go through [`TableState::apply`].

use tracing::debug;

use crate::data::{Record, RecordId};

use super::sort::{sorted, Direction, SortKey, SortToggles};

/// A change to the table view state.
#[derive(Debug, Clone, PartialEq)]
pub enum TableAction {
    /// Replace the working data set.
    Load(Vec<Record>),
    /// Trigger the sort control of a column.
    ToggleSort(SortKey),
    /// Trigger the Action cell of the row with this id.
    Highlight(RecordId),
}

/// The state owned by the table for one mount.
#[derive(Debug, Clone, Default)]
pub struct TableState {
    /// The working data set in display order.
    rows: Vec<Record>,
    /// Direction of the next sort, per field.
    toggles: SortToggles,
    /// The highlighted record id.
    highlighted: Option<RecordId>,
    /// The most recently applied sort.
    last_sort: Option<(SortKey, Direction)>,
}

impl TableState {
    /// Create an empty table state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a table state holding `rows`.
    pub fn with_rows(rows: Vec<Record>) -> Self {
        Self {
            rows,
            ..Self::default()
        }
    }

    /// Apply an action.
    pub fn apply(&mut self, action: TableAction) {
        match action {
            TableAction::Load(rows) => {
                debug!(count = rows.len(), "Replacing working data set");
                self.rows = rows;
            }
            TableAction::ToggleSort(key) => {
                let direction = self.toggles.advance(&key);
                debug!(key = %key, ?direction, "Sorting rows");
                self.rows = sorted(&self.rows, &key, direction);
                self.last_sort = Some((key, direction));
            }
            TableAction::Highlight(id) => {
                debug!(id, "Highlighting row");
                self.highlighted = Some(id);
            }
        }
    }

    /// The working data set in display order.
    pub fn rows(&self) -> &[Record] {
        &self.rows
    }

    /// The highlighted record id, if any.
    pub fn highlighted(&self) -> Option<RecordId> {
        self.highlighted
    }

    /// Whether `record` is the highlighted row.
    pub fn is_highlighted(&self, record: &Record) -> bool {
        self.highlighted == Some(record.id)
    }

    /// The per-field sort toggles.
    pub fn toggles(&self) -> &SortToggles {
        &self.toggles
    }

    /// The most recently applied sort.
    pub fn last_sort(&self) -> Option<&(SortKey, Direction)> {
        self.last_sort.as_ref()
    }

    /// Number of rows in the working data set.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Whether the working data set is empty.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}
