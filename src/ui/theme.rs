//! Theme and styling configuration.

use ratatui::style::{Color, Modifier, Style};
use tracing::warn;

use crate::table::model::{CellKind, StatusClass};

/// Color theme for the application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Theme {
    /// Primary foreground color.
    pub fg: Color,
    /// Header text color.
    pub header: Color,
    /// Sort control color.
    pub control: Color,
    /// Background of the highlighted row.
    pub highlight_bg: Color,
    /// Foreground of the highlighted row.
    pub highlight_fg: Color,
    /// Email link color.
    pub link: Color,
    /// Action cell color.
    pub action: Color,
    /// Status color for `"true"`.
    pub positive: Color,
    /// Status color for anything else.
    pub negative: Color,
    /// Borders and secondary text.
    pub muted: Color,
}

impl Theme {
    /// The dark theme.
    pub fn dark() -> Self {
        Self {
            fg: Color::White,
            header: Color::White,
            control: Color::Cyan,
            highlight_bg: Color::LightCyan,
            highlight_fg: Color::Black,
            link: Color::LightBlue,
            action: Color::Cyan,
            positive: Color::Green,
            negative: Color::Red,
            muted: Color::DarkGray,
        }
    }

    /// The light theme.
    pub fn light() -> Self {
        Self {
            fg: Color::Black,
            header: Color::Black,
            control: Color::Blue,
            highlight_bg: Color::Cyan,
            highlight_fg: Color::Black,
            link: Color::Blue,
            action: Color::Blue,
            positive: Color::Green,
            negative: Color::Red,
            muted: Color::Gray,
        }
    }

    /// Look up a theme by name, falling back to the dark theme.
    pub fn named(name: &str) -> Self {
        match name {
            "dark" => Self::dark(),
            "light" => Self::light(),
            other => {
                warn!(theme = %other, "Unknown theme, using dark");
                Self::dark()
            }
        }
    }

    /// Style of a body cell.
    pub fn cell_style(&self, kind: CellKind) -> Style {
        match kind {
            CellKind::Plain => Style::default(),
            CellKind::Email => Style::default()
                .fg(self.link)
                .add_modifier(Modifier::UNDERLINED),
            CellKind::Status(StatusClass::Positive) => {
                Style::default().fg(self.positive).add_modifier(Modifier::BOLD)
            }
            CellKind::Status(StatusClass::Negative) => {
                Style::default().fg(self.negative).add_modifier(Modifier::BOLD)
            }
            CellKind::Action => Style::default().fg(self.action).add_modifier(Modifier::BOLD),
        }
    }

    /// Style of a body row.
    pub fn row_style(&self, highlighted: bool) -> Style {
        if highlighted {
            Style::default().bg(self.highlight_bg).fg(self.highlight_fg)
        } else {
            Style::default().fg(self.fg)
        }
    }

    /// Style of the header row.
    pub fn header_style(&self) -> Style {
        Style::default().fg(self.header).add_modifier(Modifier::BOLD)
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::dark()
    }
}
