//! Help panel view displaying keyboard shortcuts.
//!
//! The panel is opened with '?' and closed with '?', 'q', or Escape. Long
//! content scrolls with j/k or the arrow keys.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    layout::{Alignment, Constraint, Flex, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::events::KeyBindings;
use crate::ui::theme::Theme;

/// Actions that can be returned from the help view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HelpAction {
    /// Close the help panel.
    Close,
}

/// The help panel view.
pub struct HelpView {
    /// Key and description pairs.
    entries: Vec<(&'static str, &'static str)>,
    /// Current scroll position.
    scroll: usize,
    /// Visible height (updated on render).
    visible_height: usize,
}

impl HelpView {
    /// Create a help view for the given bindings.
    pub fn new(keys: &KeyBindings) -> Self {
        Self {
            entries: keys.help_entries(),
            scroll: 0,
            visible_height: 0,
        }
    }

    /// Reset scroll position to top.
    pub fn reset_scroll(&mut self) {
        self.scroll = 0;
    }

    /// Total number of content lines, including the footer.
    fn total_lines(&self) -> usize {
        self.entries.len() + 2
    }

    fn max_scroll(&self) -> usize {
        self.total_lines().saturating_sub(self.visible_height)
    }

    /// Handle keyboard input for the help view.
    ///
    /// Returns `Some(HelpAction)` if an action should be taken, `None` otherwise.
    pub fn handle_input(&mut self, key_event: KeyEvent) -> Option<HelpAction> {
        match (key_event.code, key_event.modifiers) {
            (KeyCode::Char('?'), _)
            | (KeyCode::Char('q'), KeyModifiers::NONE)
            | (KeyCode::Esc, KeyModifiers::NONE) => Some(HelpAction::Close),

            (KeyCode::Char('j'), KeyModifiers::NONE) | (KeyCode::Down, KeyModifiers::NONE) => {
                self.scroll = (self.scroll + 1).min(self.max_scroll());
                None
            }

            (KeyCode::Char('k'), KeyModifiers::NONE) | (KeyCode::Up, KeyModifiers::NONE) => {
                self.scroll = self.scroll.saturating_sub(1);
                None
            }

            // Consume all other input when help is open
            _ => None,
        }
    }

    /// Render the help panel centered in `area`.
    pub fn render(&mut self, frame: &mut Frame, area: Rect, theme: &Theme) {
        let [popup] = Layout::horizontal([Constraint::Length(60)])
            .flex(Flex::Center)
            .areas(area);
        let [popup] = Layout::vertical([Constraint::Length(self.total_lines() as u16 + 2)])
            .flex(Flex::Center)
            .areas(popup);

        frame.render_widget(Clear, popup);

        let block = Block::default()
            .title(" Help - Keyboard Shortcuts ")
            .title_alignment(Alignment::Center)
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme.control));

        let inner = block.inner(popup);
        frame.render_widget(block, popup);

        self.visible_height = inner.height as usize;
        self.scroll = self.scroll.min(self.max_scroll());

        let paragraph = Paragraph::new(self.build_content_lines(theme))
            .scroll((self.scroll as u16, 0))
            .alignment(Alignment::Left);

        frame.render_widget(paragraph, inner);
    }

    fn build_content_lines(&self, theme: &Theme) -> Vec<Line<'static>> {
        let mut lines: Vec<Line<'static>> = self
            .entries
            .iter()
            .map(|(key, description)| {
                Line::from(vec![
                    Span::styled(
                        format!("{:>14}", key),
                        Style::default().fg(theme.positive).add_modifier(Modifier::BOLD),
                    ),
                    Span::raw("  "),
                    Span::raw(*description),
                ])
            })
            .collect();

        lines.push(Line::from(""));
        lines.push(Line::from(vec![Span::styled(
            "Press ?, q, or Esc to close",
            Style::default().fg(theme.muted),
        )]));

        lines
    }
}
