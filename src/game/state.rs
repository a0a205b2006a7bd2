use super::entities::{Apple, Rock};
use super::snake::Snake;

/// A grid-aligned position on the playing field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// Complete game state
#[derive(Debug, Clone, PartialEq)]
pub struct GameState {
    pub snake: Snake,
    pub apple: Apple,
    pub rocks: Vec<Rock>,
    /// Ticks since the game started
    pub ticks: u64,
    pub apples_eaten: u32,
    pub deaths: u32,
}

impl GameState {
    /// Create a new game state
    pub fn new(snake: Snake, apple: Apple, rocks: Vec<Rock>) -> Self {
        Self {
            snake,
            apple,
            rocks,
            ticks: 0,
            apples_eaten: 0,
            deaths: 0,
        }
    }
}
