//! The sortable data table widget.
//!
//! Draws the render model from `table::model` with ratatui and keeps the
//! terminal-only state: the row cursor, the focused column and the layout of
//! the last frame, which is used to map mouse clicks back to sort controls
//! and Action cells.

use ratatui::{
    layout::{Constraint, Flex, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, HighlightSpacing, Row, Table, TableState as ScrollState},
    Frame,
};

use crate::config::TableConfig;
use crate::data::{Field, Record, RecordId};
use crate::table::model::{self, HeaderCell, SORT_CONTROL};
use crate::table::TableState;
use crate::ui::theme::Theme;

/// Spacing between columns.
const COLUMN_SPACING: u16 = 1;

/// What a mouse click landed on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TableHit {
    /// A header cell carrying a sort control.
    SortControl(Field),
    /// The Action cell of the row with this id.
    Action(RecordId),
}

/// Screen geometry of the last rendered frame.
#[derive(Debug, Clone)]
struct FrameLayout {
    header_y: u16,
    body: Rect,
    /// Horizontal extent and header cell of each column.
    columns: Vec<(u16, u16, HeaderCell)>,
}

/// The table widget and its navigation state.
#[derive(Debug, Default)]
pub struct DataTable {
    /// Index of the cursor row in the working data set.
    cursor: usize,
    /// Index of the focused column among the rendered field columns.
    focus: usize,
    /// Scroll state handed to ratatui.
    scroll: ScrollState,
    /// Geometry of the last frame.
    layout: Option<FrameLayout>,
}

impl DataTable {
    /// Create a new table widget.
    pub fn new() -> Self {
        Self::default()
    }

    /// The cursor row index.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// The focused column index.
    pub fn focus(&self) -> usize {
        self.focus
    }

    /// Move the cursor up one row.
    pub fn move_up(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    /// Move the cursor down one row.
    pub fn move_down(&mut self, row_count: usize) {
        if self.cursor + 1 < row_count {
            self.cursor += 1;
        }
    }

    /// Move the cursor to the first row.
    pub fn move_to_start(&mut self) {
        self.cursor = 0;
    }

    /// Move the cursor to the last row.
    pub fn move_to_end(&mut self, row_count: usize) {
        self.cursor = row_count.saturating_sub(1);
    }

    /// Move the column focus left.
    pub fn focus_left(&mut self) {
        self.focus = self.focus.saturating_sub(1);
    }

    /// Move the column focus right.
    pub fn focus_right(&mut self, column_count: usize) {
        if self.focus + 1 < column_count {
            self.focus += 1;
        }
    }

    /// Keep the cursor and focus inside the current data and columns.
    pub fn clamp(&mut self, row_count: usize, column_count: usize) {
        self.cursor = self.cursor.min(row_count.saturating_sub(1));
        self.focus = self.focus.min(column_count.saturating_sub(1));
    }

    /// The field of the focused column.
    pub fn focused_field(&self, config: &TableConfig) -> Option<Field> {
        model::visible_fields(config).get(self.focus).copied()
    }

    /// The record under the cursor.
    pub fn cursor_record<'a>(&self, state: &'a TableState) -> Option<&'a Record> {
        state.rows().get(self.cursor)
    }

    /// Map a screen position to a sort control or Action cell.
    ///
    /// Uses the geometry of the last rendered frame; returns `None` before
    /// the first render or when the position hits neither.
    pub fn hit_test(&self, column: u16, row: u16, state: &TableState) -> Option<TableHit> {
        let layout = self.layout.as_ref()?;
        let (_, _, cell) = layout
            .columns
            .iter()
            .find(|(x, width, _)| column >= *x && column < x + width)?;

        if row == layout.header_y {
            return match (cell.field, cell.sortable) {
                (Some(field), true) => Some(TableHit::SortControl(field)),
                _ => None,
            };
        }

        let body = layout.body;
        if cell.field.is_some() || row < body.y || row >= body.y + body.height {
            return None;
        }

        let index = self.scroll.offset() + usize::from(row - body.y);
        state.rows().get(index).map(|r| TableHit::Action(r.id))
    }

    /// Render the table into `area`.
    pub fn render(
        &mut self,
        frame: &mut Frame,
        area: Rect,
        state: &TableState,
        config: &TableConfig,
        theme: &Theme,
    ) {
        let headers = model::header_cells(config);
        let rows = model::body_rows(state, config);
        self.clamp(rows.len(), headers.len().saturating_sub(1));

        let widths: Vec<Constraint> = headers.iter().map(|h| column_width(h.field)).collect();

        let header = Row::new(
            headers
                .iter()
                .enumerate()
                .map(|(i, h)| self.header_cell(i, h, theme)),
        )
        .style(theme.header_style())
        .height(1);

        let body = rows.iter().map(|row| {
            Row::new(
                row.cells
                    .iter()
                    .map(|cell| Cell::from(cell.text.clone()).style(theme.cell_style(cell.kind))),
            )
            .style(theme.row_style(row.highlighted))
        });

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme.muted))
            .title(" Records ");
        let inner = block.inner(area);

        let table = Table::new(body, widths.clone())
            .header(header)
            .block(block)
            .column_spacing(COLUMN_SPACING)
            .flex(Flex::Start)
            .highlight_spacing(HighlightSpacing::Never)
            .highlight_style(Style::default().add_modifier(Modifier::REVERSED));

        self.scroll
            .select(if rows.is_empty() { None } else { Some(self.cursor) });
        frame.render_stateful_widget(table, area, &mut self.scroll);

        self.layout = Some(frame_layout(inner, &widths, headers));
    }

    fn header_cell(&self, index: usize, header: &HeaderCell, theme: &Theme) -> Cell<'static> {
        let mut label_style = Style::default();
        if header.field.is_some() && index == self.focus {
            label_style = label_style.add_modifier(Modifier::UNDERLINED);
        }

        let mut spans = vec![Span::styled(header.label, label_style)];
        if header.sortable {
            spans.push(Span::raw(" "));
            spans.push(Span::styled(
                SORT_CONTROL,
                Style::default().fg(theme.control),
            ));
        }
        Cell::from(Line::from(spans))
    }
}

/// Width constraint of a column.
fn column_width(field: Option<Field>) -> Constraint {
    match field {
        Some(Field::Id) => Constraint::Length(6),
        Some(Field::FirstName) | Some(Field::LastName) => Constraint::Length(14),
        Some(Field::Email) => Constraint::Min(26),
        Some(Field::Gender) => Constraint::Length(12),
        Some(Field::Mobile) => Constraint::Length(16),
        Some(Field::Status) => Constraint::Length(9),
        None => Constraint::Length(10),
    }
}

/// Compute the same column geometry ratatui uses for the table.
fn frame_layout(inner: Rect, widths: &[Constraint], headers: Vec<HeaderCell>) -> FrameLayout {
    let rects = Layout::horizontal(widths.iter().copied())
        .flex(Flex::Start)
        .spacing(COLUMN_SPACING)
        .split(Rect::new(inner.x, inner.y, inner.width, 1));

    let columns = rects
        .iter()
        .zip(headers)
        .map(|(rect, header)| (rect.x, rect.width, header))
        .collect();

    FrameLayout {
        header_y: inner.y,
        body: Rect::new(
            inner.x,
            inner.y.saturating_add(1),
            inner.width,
            inner.height.saturating_sub(1),
        ),
        columns,
    }
}
