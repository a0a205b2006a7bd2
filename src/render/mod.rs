//! Drawing surface for the game.
//!
//! The game paints cells incrementally, like on a retained framebuffer:
//! whatever it does not repaint or clear stays on screen.

pub mod canvas;
pub mod renderer;

pub use canvas::Canvas;
pub use renderer::TerminalRenderer;

use anyhow::Result;

use crate::game::{Position, Rgb};

/// Status shown next to the field
#[derive(Debug, Clone, PartialEq)]
pub struct Hud {
    pub length: usize,
    pub speed: f32,
    pub apples_eaten: u32,
    pub deaths: u32,
    pub elapsed: String,
}

pub trait Renderer {
    /// Paint one cell, with the border accent around it
    fn fill_cell(&mut self, position: Position, color: Rgb);

    /// Paint one cell with the background color
    fn clear_cell(&mut self, position: Position);

    /// Flush everything painted so far to the screen
    fn present(&mut self, hud: &Hud) -> Result<()>;
}
