use std::time::Duration;

use anyhow::{Context, Result};
use crossterm::event::{self, Event, KeyEventKind};

use super::{InputEvent, InputHandler, InputSource};

/// Reads key presses from the terminal without blocking
pub struct TerminalInput {
    handler: InputHandler,
}

impl TerminalInput {
    pub fn new() -> Self {
        Self {
            handler: InputHandler::new(),
        }
    }

    fn translate(&self, event: Event) -> Option<InputEvent> {
        match event {
            // Only process key press events, not release
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                self.handler.handle_key_event(key)
            }
            _ => None,
        }
    }
}

impl Default for TerminalInput {
    fn default() -> Self {
        Self::new()
    }
}

impl InputSource for TerminalInput {
    fn poll(&mut self) -> Result<Vec<InputEvent>> {
        let mut events = Vec::new();
        while event::poll(Duration::ZERO).context("Failed to poll terminal events")? {
            let event = event::read().context("Failed to read terminal event")?;
            events.extend(self.translate(event));
        }
        Ok(events)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::Direction;
    use crossterm::event::{KeyCode, KeyEvent, KeyEventState, KeyModifiers};

    fn key(code: KeyCode, kind: KeyEventKind) -> Event {
        Event::Key(KeyEvent {
            code,
            modifiers: KeyModifiers::NONE,
            kind,
            state: KeyEventState::NONE,
        })
    }

    #[test]
    fn test_presses_are_translated() {
        let input = TerminalInput::new();
        assert_eq!(
            input.translate(key(KeyCode::Up, KeyEventKind::Press)),
            Some(InputEvent::DirectionPressed(Direction::Up))
        );
    }

    #[test]
    fn test_releases_and_other_events_are_ignored() {
        let input = TerminalInput::new();
        assert_eq!(input.translate(key(KeyCode::Up, KeyEventKind::Release)), None);
        assert_eq!(input.translate(Event::Resize(80, 24)), None);
        assert_eq!(input.translate(Event::FocusLost), None);
    }
}
