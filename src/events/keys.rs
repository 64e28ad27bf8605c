//! Key binding definitions.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// A command triggered from the keyboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyCommand {
    /// Exit the application.
    Quit,
    /// Show or hide the help panel.
    ToggleHelp,
    /// Move the row cursor up.
    RowUp,
    /// Move the row cursor down.
    RowDown,
    /// Jump to the first row.
    FirstRow,
    /// Jump to the last row.
    LastRow,
    /// Move the column focus left.
    FocusLeft,
    /// Move the column focus right.
    FocusRight,
    /// Trigger the sort control of the focused column.
    SortFocused,
    /// Trigger the sort control of the n-th rendered column (0-based).
    SortColumn(usize),
    /// Trigger the Action cell of the cursor row.
    Highlight,
    /// Open the cursor row's email address.
    OpenMail,
}

/// Key binding configuration.
pub struct KeyBindings {
    /// Whether vim-style bindings are enabled.
    pub vim_mode: bool,
}

impl KeyBindings {
    /// Create new key bindings.
    pub fn new(vim_mode: bool) -> Self {
        Self { vim_mode }
    }

    /// Resolve a key press to a command.
    pub fn resolve(&self, key: KeyEvent) -> Option<KeyCommand> {
        if key.modifiers == KeyModifiers::CONTROL {
            return match key.code {
                KeyCode::Char('c') => Some(KeyCommand::Quit),
                _ => None,
            };
        }

        let command = match key.code {
            KeyCode::Char('q') | KeyCode::Esc => KeyCommand::Quit,
            KeyCode::Char('?') => KeyCommand::ToggleHelp,
            KeyCode::Up => KeyCommand::RowUp,
            KeyCode::Down => KeyCommand::RowDown,
            KeyCode::Left => KeyCommand::FocusLeft,
            KeyCode::Right => KeyCommand::FocusRight,
            KeyCode::Home => KeyCommand::FirstRow,
            KeyCode::End => KeyCommand::LastRow,
            KeyCode::Char('s') | KeyCode::Enter => KeyCommand::SortFocused,
            KeyCode::Char(' ') | KeyCode::Char('b') => KeyCommand::Highlight,
            KeyCode::Char('m') => KeyCommand::OpenMail,
            KeyCode::Char(c @ '1'..='9') => {
                KeyCommand::SortColumn((c as usize) - ('1' as usize))
            }
            KeyCode::Char(c) if self.vim_mode => match c {
                'k' => KeyCommand::RowUp,
                'j' => KeyCommand::RowDown,
                'h' => KeyCommand::FocusLeft,
                'l' => KeyCommand::FocusRight,
                'g' => KeyCommand::FirstRow,
                'G' => KeyCommand::LastRow,
                _ => return None,
            },
            _ => return None,
        };
        Some(command)
    }

    /// Key and description pairs for the help panel.
    pub fn help_entries(&self) -> Vec<(&'static str, &'static str)> {
        let (rows, columns, ends) = if self.vim_mode {
            ("j/k ↑/↓", "h/l ←/→", "g/G Home/End")
        } else {
            ("↑/↓", "←/→", "Home/End")
        };

        vec![
            (rows, "Move row cursor"),
            (columns, "Move column focus"),
            (ends, "First / last row"),
            ("s Enter", "Sort focused column"),
            ("1-9", "Sort n-th column"),
            ("Space b", "Highlight cursor row"),
            ("m", "Email cursor row"),
            ("click", "Sort header ⇅ / highlight via Action"),
            ("?", "Toggle help"),
            ("q Esc", "Quit"),
        ]
    }

    /// Short hint text for the footer.
    pub fn footer_hints(&self) -> &'static str {
        if self.vim_mode {
            "[j/k] rows  [h/l] columns  [s] sort  [Space] highlight  [m] mail  [?] help  [q] quit"
        } else {
            "[↑/↓] rows  [←/→] columns  [s] sort  [Space] highlight  [m] mail  [?] help  [q] quit"
        }
    }
}

impl Default for KeyBindings {
    fn default() -> Self {
        Self::new(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_common_bindings() {
        let keys = KeyBindings::default();
        assert_eq!(keys.resolve(key(KeyCode::Char('q'))), Some(KeyCommand::Quit));
        assert_eq!(keys.resolve(key(KeyCode::Esc)), Some(KeyCommand::Quit));
        assert_eq!(keys.resolve(key(KeyCode::Char('s'))), Some(KeyCommand::SortFocused));
        assert_eq!(keys.resolve(key(KeyCode::Enter)), Some(KeyCommand::SortFocused));
        assert_eq!(keys.resolve(key(KeyCode::Char(' '))), Some(KeyCommand::Highlight));
        assert_eq!(keys.resolve(key(KeyCode::Char('m'))), Some(KeyCommand::OpenMail));
        assert_eq!(keys.resolve(key(KeyCode::Down)), Some(KeyCommand::RowDown));
    }

    #[test]
    fn test_ctrl_c_quits() {
        let keys = KeyBindings::default();
        let event = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(keys.resolve(event), Some(KeyCommand::Quit));
        let event = KeyEvent::new(KeyCode::Char('s'), KeyModifiers::CONTROL);
        assert_eq!(keys.resolve(event), None);
    }

    #[test]
    fn test_digit_sorts_column() {
        let keys = KeyBindings::default();
        assert_eq!(
            keys.resolve(key(KeyCode::Char('1'))),
            Some(KeyCommand::SortColumn(0))
        );
        assert_eq!(
            keys.resolve(key(KeyCode::Char('7'))),
            Some(KeyCommand::SortColumn(6))
        );
        assert_eq!(keys.resolve(key(KeyCode::Char('0'))), None);
    }

    #[test]
    fn test_vim_bindings() {
        let keys = KeyBindings::new(true);
        assert_eq!(keys.resolve(key(KeyCode::Char('j'))), Some(KeyCommand::RowDown));
        assert_eq!(keys.resolve(key(KeyCode::Char('h'))), Some(KeyCommand::FocusLeft));
        assert_eq!(keys.resolve(key(KeyCode::Char('G'))), Some(KeyCommand::LastRow));
    }

    #[test]
    fn test_vim_bindings_disabled() {
        let keys = KeyBindings::new(false);
        assert_eq!(keys.resolve(key(KeyCode::Char('j'))), None);
        assert_eq!(keys.resolve(key(KeyCode::Char('l'))), None);
        assert_eq!(keys.resolve(key(KeyCode::Right)), Some(KeyCommand::FocusRight));
    }

    #[test]
    fn test_help_entries_follow_vim_mode() {
        assert!(KeyBindings::new(true).help_entries()[0].0.contains("j/k"));
        assert!(!KeyBindings::new(false).help_entries()[0].0.contains("j/k"));
        assert!(KeyBindings::new(false).footer_hints().contains("[↑/↓]"));
    }
}
