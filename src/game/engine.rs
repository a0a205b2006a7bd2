use rand::SeedableRng;
use rand_pcg::Pcg32;

use super::{
    collision::{self, CollisionType, Death},
    config::GameConfig,
    direction::Direction,
    entities::{Apple, Rock},
    grid::Grid,
    perishable::{LifeEvent, Perishable},
    snake::{Movement, Snake},
    state::{GameState, Position},
};

/// Information about a step
#[derive(Debug, Clone, PartialEq)]
pub struct StepInfo {
    /// Whether the snake picked up the apple this step
    pub ate_apple: bool,
    /// Type of collision if the snake died
    pub collision_type: Option<CollisionType>,
}

/// Everything a headless step changed
#[derive(Debug, Clone, PartialEq)]
pub struct StepResult {
    pub info: StepInfo,
    pub movement: Movement,
    /// Cells left by apples and rocks that expired or were eaten
    pub respawned_from: Vec<Position>,
    /// Cells of the snake that died this step
    pub cleared: Vec<Position>,
}

/// The game engine that handles all game logic.
///
/// A tick runs in this order: [`advance_lifecycle`](Self::advance_lifecycle),
/// [`resolve_pickup`](Self::resolve_pickup), [`steer`](Self::steer),
/// [`advance_snake`](Self::advance_snake),
/// [`resolve_collisions`](Self::resolve_collisions).
pub struct GameEngine {
    config: GameConfig,
    grid: Grid,
    rng: Pcg32,
}

impl GameEngine {
    /// Create a new game engine with the given configuration
    pub fn new(config: GameConfig) -> Self {
        let seed = config.seed.unwrap_or_else(rand::random);
        log::debug!("engine seeded with {seed}");

        Self {
            grid: Grid::from_config(&config),
            config,
            rng: Pcg32::seed_from_u64(seed),
        }
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Create the snake, the apple and the rocks. They live for the whole
    /// game and are only reset or respawned afterwards.
    pub fn new_game(&mut self) -> GameState {
        let snake = Snake::new(
            self.grid.center(),
            self.config.base_speed,
            self.config.speed_step,
        );
        let apple = Apple::spawn(&self.config, &self.grid, &mut self.rng);
        let rocks = (0..self.config.rock_count)
            .map(|_| Rock::spawn(&self.config, &self.grid, &mut self.rng))
            .collect();

        GameState::new(snake, apple, rocks)
    }

    /// Start a tick: age the apple and every rock.
    ///
    /// Returns the cells left by entities that expired and respawned.
    pub fn advance_lifecycle(&mut self, state: &mut GameState) -> Vec<Position> {
        state.ticks += 1;
        log::trace!("tick {}", state.ticks);

        let grid = self.grid;
        let perishables = std::iter::once(&mut state.apple as &mut dyn Perishable).chain(
            state
                .rocks
                .iter_mut()
                .map(|rock| rock as &mut dyn Perishable),
        );

        let mut respawned_from = Vec::new();
        for perishable in perishables {
            if let LifeEvent::Respawned { from } = perishable.tick(&grid, &mut self.rng) {
                log::trace!("{:?} expired, respawned at {:?}", from, perishable.position());
                respawned_from.push(from);
            }
        }
        respawned_from
    }

    /// Pre-move apple check; returns the cell the eaten apple left
    pub fn resolve_pickup(&mut self, state: &mut GameState) -> Option<Position> {
        let eaten_at = collision::resolve_pickup(
            &mut state.snake,
            &mut state.apple,
            &self.grid,
            &mut self.rng,
        )?;

        state.apples_eaten += 1;
        log::debug!(
            "apple eaten at {:?}, next at {:?}",
            eaten_at,
            state.apple.position()
        );
        Some(eaten_at)
    }

    /// Feed a direction intent to the snake; reversals are ignored
    pub fn steer(&self, state: &mut GameState, direction: Direction) {
        state.snake.queue_direction(direction);
    }

    /// Commit the queued turn and move one cell
    pub fn advance_snake(&self, state: &mut GameState) -> Movement {
        state.snake.apply_pending_direction();
        let movement = state.snake.move_on(&self.grid);
        if movement.grew {
            log::debug!(
                "snake grew to {} at speed {}",
                state.snake.len(),
                state.snake.speed
            );
        }
        movement
    }

    /// Post-move self and rock checks; a hit resets the snake
    pub fn resolve_collisions(&self, state: &mut GameState) -> Option<Death> {
        let length = state.snake.len();
        let death = collision::resolve_post_move(&mut state.snake, &state.rocks)?;

        state.deaths += 1;
        log::info!(
            "snake died ({:?}) at length {length}, deaths so far: {}",
            death.cause,
            state.deaths
        );
        Some(death)
    }

    /// Execute one full tick without input polling or rendering. Runs the same
    /// phases, in the same order, as `GameLoop::tick`.
    pub fn step(&mut self, state: &mut GameState, intents: &[Direction]) -> StepResult {
        let mut respawned_from = self.advance_lifecycle(state);

        let eaten_at = self.resolve_pickup(state);
        respawned_from.extend(eaten_at);

        for &direction in intents {
            self.steer(state, direction);
        }

        let movement = self.advance_snake(state);
        let death = self.resolve_collisions(state);

        let (collision_type, cleared) = match death {
            Some(Death { cause, cleared }) => (Some(cause), cleared),
            None => (None, Vec::new()),
        };

        StepResult {
            info: StepInfo {
                ate_apple: eaten_at.is_some(),
                collision_type,
            },
            movement,
            respawned_from,
            cleared,
        }
    }
}
