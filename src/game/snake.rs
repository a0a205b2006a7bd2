use super::direction::Direction;
use super::grid::Grid;
use super::state::Position;

/// Result of moving the snake one cell
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Movement {
    /// New head position
    pub head: Position,
    /// Tail cell left behind, to be erased; `None` when the snake grew
    pub vacated: Option<Position>,
    pub grew: bool,
}

/// The player-controlled snake
#[derive(Debug, Clone, PartialEq)]
pub struct Snake {
    /// Body segments, with head at index 0
    pub segments: Vec<Position>,
    /// Current direction of movement
    pub direction: Direction,
    /// Turn requested since the last move
    pub pending_direction: Option<Direction>,
    /// Next move extends the tail instead of dropping it
    pub growth_pending: bool,
    /// Moves per second
    pub speed: f32,
    spawn: Position,
    base_speed: f32,
    speed_step: f32,
}

impl Snake {
    pub const INITIAL_DIRECTION: Direction = Direction::Right;

    /// Create a one-segment snake at `spawn`, heading right
    pub fn new(spawn: Position, base_speed: f32, speed_step: f32) -> Self {
        Self {
            segments: vec![spawn],
            direction: Self::INITIAL_DIRECTION,
            pending_direction: None,
            growth_pending: false,
            speed: base_speed,
            spawn,
            base_speed,
            speed_step,
        }
    }

    /// Get the head position
    pub fn head(&self) -> Position {
        self.segments[0]
    }

    /// Get the tail position (last segment)
    pub fn tail(&self) -> Position {
        self.segments[self.segments.len() - 1]
    }

    /// Get body segments (excluding head)
    pub fn body_segments(&self) -> &[Position] {
        &self.segments[1..]
    }

    /// Check if position collides with snake body (excluding head)
    pub fn collides_with_body(&self, pos: Position) -> bool {
        self.body_segments().contains(&pos)
    }

    /// Get the length of the snake
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    /// True when the snake has no segments
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Record a turn for the next move. A turn straight back into the neck is
    /// dropped.
    pub fn queue_direction(&mut self, direction: Direction) {
        if !self.direction.is_opposite(direction) {
            self.pending_direction = Some(direction);
        }
    }

    /// Commit the queued turn, if any
    pub fn apply_pending_direction(&mut self) {
        if let Some(direction) = self.pending_direction.take() {
            self.direction = direction;
        }
    }

    /// Mark the next move as a growing one
    pub fn feed(&mut self) {
        self.growth_pending = true;
    }

    /// Advance one cell along `direction`, wrapping around the grid edges
    pub fn move_on(&mut self, grid: &Grid) -> Movement {
        let head = grid.step(self.head(), self.direction);
        self.segments.insert(0, head);

        if self.growth_pending {
            self.growth_pending = false;
            self.speed += self.speed_step;
            return Movement {
                head,
                vacated: None,
                grew: true,
            };
        }

        let vacated = self.segments.pop();
        Movement {
            head,
            vacated,
            grew: false,
        }
    }

    /// Head sits on one of its own body segments
    pub fn bitten_itself(&self) -> bool {
        self.collides_with_body(self.head())
    }

    /// Back to a single segment at the spawn cell, heading right, base speed
    pub fn reset(&mut self) {
        self.segments.clear();
        self.segments.push(self.spawn);
        self.direction = Self::INITIAL_DIRECTION;
        self.pending_direction = None;
        self.growth_pending = false;
        self.speed = self.base_speed;
    }
}
