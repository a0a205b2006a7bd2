//! Core game logic module for Snake
//!
//! The simulation itself (grid, perishables, snake, collisions, engine) has no
//! I/O. [`GameLoop`] sequences a tick against the input and render traits.

pub mod clock;
pub mod collision;
pub mod config;
pub mod direction;
pub mod engine;
pub mod entities;
pub mod game_loop;
pub mod grid;
pub mod palette;
pub mod perishable;
pub mod snake;
pub mod state;

// Re-export commonly used types
pub use clock::{Clock, pacing_delay};
pub use collision::{CollisionType, Death};
pub use config::{GameConfig, LifeSpan};
pub use direction::Direction;
pub use engine::{GameEngine, StepInfo, StepResult};
pub use entities::{Apple, Rock};
pub use game_loop::{GameLoop, TickControl};
pub use grid::{Axis, Grid};
pub use palette::Rgb;
pub use perishable::{Blinkable, LifeEvent, Perishable, PerishableState, Tint};
pub use snake::{Movement, Snake};
pub use state::{GameState, Position};
