//! Event handling for the application.
//!
//! This module handles keyboard and mouse input and the periodic tick.

mod handler;
mod keys;

use crossterm::event::{KeyEvent, MouseEvent};

pub use handler::EventHandler;
pub use keys::{KeyBindings, KeyCommand};

/// An application event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// A key press.
    Key(KeyEvent),
    /// A mouse event.
    Mouse(MouseEvent),
    /// The terminal was resized.
    Resize(u16, u16),
    /// No input within the tick rate.
    Tick,
    /// Request to exit.
    Quit,
}
