//! Event handler implementation.
//!
//! Polls for terminal events and converts them to application events.

use std::time::Duration;

use crossterm::event::{self, Event as CrosstermEvent, KeyEventKind};

use super::Event;

/// Handles application events by polling crossterm for terminal events.
pub struct EventHandler {
    /// The tick rate duration.
    tick_rate: Duration,
}

impl EventHandler {
    /// Create a new event handler with a custom tick rate.
    pub fn with_tick_rate(tick_rate_ms: u64) -> Self {
        Self {
            tick_rate: Duration::from_millis(tick_rate_ms),
        }
    }

    /// Poll for the next event.
    ///
    /// This method blocks until an event is available or the tick rate elapses.
    /// Returns `Event::Tick` if no event occurred within the tick rate.
    pub fn next(&self) -> std::io::Result<Event> {
        if event::poll(self.tick_rate)? {
            Ok(convert(event::read()?))
        } else {
            Ok(Event::Tick)
        }
    }
}

/// Convert a crossterm event into an application event.
fn convert(event: CrosstermEvent) -> Event {
    match event {
        // Key releases are reported on some platforms; only presses act.
        CrosstermEvent::Key(key_event) if key_event.kind == KeyEventKind::Release => Event::Tick,
        CrosstermEvent::Key(key_event) => Event::Key(key_event),
        CrosstermEvent::Mouse(mouse_event) => Event::Mouse(mouse_event),
        CrosstermEvent::Resize(width, height) => Event::Resize(width, height),
        CrosstermEvent::FocusGained | CrosstermEvent::FocusLost => Event::Tick,
        CrosstermEvent::Paste(_) => Event::Tick,
    }
}
