//! Rock Snake - a terminal Snake with perishable apples and deadly rocks
//!
//! This library provides:
//! - Core simulation (game module): grid, lifecycles, snake, collisions
//! - Keyboard input (input module)
//! - TUI rendering (render module)
//! - Session metrics (metrics module)
//! - The interactive mode (modes module)

pub mod game;
pub mod input;
pub mod metrics;
pub mod modes;
pub mod render;
