//! Keyboard input: key mapping and a non-blocking terminal event source.

pub mod handler;
pub mod terminal;

pub use handler::InputHandler;
pub use terminal::TerminalInput;

use anyhow::Result;

use crate::game::Direction;

/// Discrete input the game reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    Quit,
    DirectionPressed(Direction),
}

/// Source of player input, drained once per tick
pub trait InputSource {
    /// Every event that arrived since the last poll. Never blocks; an empty
    /// vector means nothing happened.
    fn poll(&mut self) -> Result<Vec<InputEvent>>;
}
