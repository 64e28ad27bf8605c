//! Footer status bar component.
//!
//! Displays the row count, the last sort, and keyboard shortcut hints at the
//! bottom of the screen.

use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::table::TableState;

/// Render the footer for the table view.
pub fn render_status_bar(frame: &mut Frame, area: Rect, state: &TableState, hints: &str) {
    let mut spans = vec![Span::styled(
        format!(" {} ", status_text(state)),
        Style::default().fg(Color::Black).bg(Color::Cyan),
    )];
    spans.push(Span::raw(" "));
    spans.extend(parse_hints_to_spans(hints));

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

/// Row count and the last applied sort.
fn status_text(state: &TableState) -> String {
    let rows = match state.len() {
        1 => "1 row".to_string(),
        n => format!("{} rows", n),
    };
    match state.last_sort() {
        Some((key, direction)) => format!("{} · {} {}", rows, key, direction.arrow()),
        None => rows,
    }
}

/// Parse hint text into styled spans.
///
/// Highlights the key portion (in brackets) differently from the description.
fn parse_hints_to_spans(hints: &str) -> Vec<Span<'static>> {
    let mut spans = Vec::new();
    let mut current = String::new();
    let mut in_bracket = false;

    for c in hints.chars() {
        match c {
            '[' => {
                if !current.is_empty() {
                    spans.push(Span::styled(
                        std::mem::take(&mut current),
                        Style::default().fg(Color::DarkGray),
                    ));
                }
                in_bracket = true;
                current.push(c);
            }
            ']' => {
                current.push(c);
                if in_bracket {
                    spans.push(Span::styled(
                        std::mem::take(&mut current),
                        Style::default().fg(Color::Cyan),
                    ));
                    in_bracket = false;
                }
            }
            _ => current.push(c),
        }
    }

    if !current.is_empty() {
        spans.push(Span::styled(current, Style::default().fg(Color::DarkGray)));
    }

    spans
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::{Field, Record};
    use crate::table::TableAction;

    #[test]
    fn test_parse_hints_to_spans_simple() {
        let spans = parse_hints_to_spans("[j/k] rows");
        assert_eq!(spans.len(), 2);
    }

    #[test]
    fn test_parse_hints_to_spans_multiple_keys() {
        let spans = parse_hints_to_spans("[j/k] rows  [s] sort  [?] help");
        // [j/k], " rows  ", [s], " sort  ", [?], " help"
        assert_eq!(spans.len(), 6);
    }

    #[test]
    fn test_parse_hints_to_spans_empty() {
        assert!(parse_hints_to_spans("").is_empty());
    }

    #[test]
    fn test_status_text_counts_rows() {
        assert_eq!(status_text(&TableState::new()), "0 rows");
        assert_eq!(status_text(&TableState::with_rows(vec![Record::new(1)])), "1 row");
    }

    #[test]
    fn test_status_text_shows_last_sort() {
        let mut state = TableState::with_rows(vec![Record::new(1), Record::new(2)]);
        state.apply(TableAction::ToggleSort(Field::Id.into()));
        assert_eq!(status_text(&state), "2 rows · id ▼");
    }
}
