use rand::Rng;

use super::config::GameConfig;
use super::direction::Direction;
use super::state::Position;

/// Axis selector for wrap-around
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    X,
    Y,
}

/// The playing field: a torus of `cols x rows` cells, each `cell_size` wide.
///
/// Positions are measured in surface units and are always multiples of
/// `cell_size` inside `[0, width) x [0, height)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Grid {
    width: i32,
    height: i32,
    cell_size: i32,
}

impl Grid {
    /// Create a grid of `cols x rows` cells
    pub fn new(cols: u32, rows: u32, cell_size: u32) -> Self {
        debug_assert!(cols > 0 && rows > 0 && cell_size > 0);
        let cell_size = cell_size as i32;
        Self {
            width: cols as i32 * cell_size,
            height: rows as i32 * cell_size,
            cell_size,
        }
    }

    pub fn from_config(config: &GameConfig) -> Self {
        Self::new(config.grid_width, config.grid_height, config.cell_size)
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    pub fn cell_size(&self) -> i32 {
        self.cell_size
    }

    pub fn cols(&self) -> usize {
        (self.width / self.cell_size) as usize
    }

    pub fn rows(&self) -> usize {
        (self.height / self.cell_size) as usize
    }

    /// Wrap a raw coordinate back into `[0, extent)` of the given axis
    pub fn wrap(&self, coord: i32, axis: Axis) -> i32 {
        let extent = match axis {
            Axis::X => self.width,
            Axis::Y => self.height,
        };
        coord.rem_euclid(extent)
    }

    /// The cell one step away in `direction`, wrapped on both axes
    pub fn step(&self, from: Position, direction: Direction) -> Position {
        let (dx, dy) = direction.delta();
        Position::new(
            self.wrap(from.x + dx * self.cell_size, Axis::X),
            self.wrap(from.y + dy * self.cell_size, Axis::Y),
        )
    }

    /// Grid-aligned center of the field
    pub fn center(&self) -> Position {
        Position::new(
            (self.cols() / 2) as i32 * self.cell_size,
            (self.rows() / 2) as i32 * self.cell_size,
        )
    }

    /// Check that a position is on the field and aligned to a cell
    pub fn contains(&self, pos: Position) -> bool {
        (0..self.width).contains(&pos.x)
            && (0..self.height).contains(&pos.y)
            && pos.x % self.cell_size == 0
            && pos.y % self.cell_size == 0
    }

    /// A uniformly random cell anywhere on the field
    pub fn random_position<R: Rng + ?Sized>(&self, rng: &mut R) -> Position {
        let col = rng.gen_range(0..self.cols()) as i32;
        let row = rng.gen_range(0..self.rows()) as i32;
        Position::new(col * self.cell_size, row * self.cell_size)
    }

    /// Column and row of the cell holding `pos`
    pub fn cell_index(&self, pos: Position) -> (usize, usize) {
        (
            (pos.x / self.cell_size) as usize,
            (pos.y / self.cell_size) as usize,
        )
    }
}
