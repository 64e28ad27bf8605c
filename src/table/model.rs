//! The render model: what cells the table shows for a given state.
//!
//! These functions are pure. The terminal widget turns their output into
//! ratatui rows and styles.

use crate::config::TableConfig;
use crate::data::{Field, Record, RecordId};

use super::state::TableState;

/// Label of the trailing header cell.
pub const ACTION_HEADER: &str = "Action";

/// Text of every row's Action cell.
pub const ACTION_TEXT: &str = "Change BG";

/// Marker rendered for a sort control.
pub const SORT_CONTROL: &str = "⇅";

/// One header cell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderCell {
    /// The field of this column, `None` for the Action column.
    pub field: Option<Field>,
    /// Header text without the sort control.
    pub label: &'static str,
    /// Whether the cell carries a sort control.
    pub sortable: bool,
}

impl HeaderCell {
    /// Header text including the sort control, if any.
    pub fn text(&self) -> String {
        if self.sortable {
            format!("{} {}", self.label, SORT_CONTROL)
        } else {
            self.label.to_string()
        }
    }
}

/// Visual class of a status cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusClass {
    Positive,
    Negative,
}

/// The kind of a body cell, which selects its style.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellKind {
    Plain,
    Email,
    Status(StatusClass),
    Action,
}

/// One body cell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BodyCell {
    pub text: String,
    pub kind: CellKind,
}

/// One body row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BodyRow {
    pub id: RecordId,
    pub highlighted: bool,
    pub cells: Vec<BodyCell>,
}

/// Fields with a rendered column, in display order.
pub fn visible_fields(config: &TableConfig) -> Vec<Field> {
    Field::ALL
        .into_iter()
        .filter(|field| config.shows(*field))
        .collect()
}

/// The header row, ending with the Action header.
pub fn header_cells(config: &TableConfig) -> Vec<HeaderCell> {
    visible_fields(config)
        .into_iter()
        .map(|field| HeaderCell {
            field: Some(field),
            label: field.label(),
            sortable: config.is_sortable(field),
        })
        .chain(std::iter::once(HeaderCell {
            field: None,
            label: ACTION_HEADER,
            sortable: false,
        }))
        .collect()
}

/// Visual class for a status value.
///
/// Only the exact string `"true"` is positive.
pub fn status_class(value: &str) -> StatusClass {
    if value == "true" {
        StatusClass::Positive
    } else {
        StatusClass::Negative
    }
}

/// The body row for one record.
pub fn body_row(record: &Record, config: &TableConfig, highlighted: bool) -> BodyRow {
    let mut cells: Vec<BodyCell> = visible_fields(config)
        .into_iter()
        .map(|field| {
            let text = record.text(field).into_owned();
            let kind = match field {
                Field::Email => CellKind::Email,
                Field::Status => CellKind::Status(status_class(&text)),
                _ => CellKind::Plain,
            };
            BodyCell { text, kind }
        })
        .collect();

    cells.push(BodyCell {
        text: ACTION_TEXT.to_string(),
        kind: CellKind::Action,
    });

    BodyRow {
        id: record.id,
        highlighted,
        cells,
    }
}

/// All body rows for the current state.
pub fn body_rows(state: &TableState, config: &TableConfig) -> Vec<BodyRow> {
    state
        .rows()
        .iter()
        .map(|record| body_row(record, config, state.is_highlighted(record)))
        .collect()
}
