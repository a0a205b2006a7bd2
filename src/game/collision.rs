//! Interaction rules between the snake and everything else on the field.
//!
//! Apple pickup is checked against the head *before* the snake moves, so a
//! pickup feeds the upcoming move. Deadly contacts are checked *after* the
//! move against the new head.

use rand::RngCore;

use super::entities::{Apple, Rock};
use super::grid::Grid;
use super::perishable::Perishable;
use super::snake::Snake;
use super::state::Position;

/// Type of collision that killed the snake
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CollisionType {
    /// Snake ran into a rock
    Rock,
    /// Snake hit itself
    SelfBite,
}

/// A death and the cells the dead snake occupied
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Death {
    pub cause: CollisionType,
    pub cleared: Vec<Position>,
}

/// Feed the snake and respawn the apple if the head is on it.
///
/// Returns the cell the apple left.
pub fn resolve_pickup(
    snake: &mut Snake,
    apple: &mut Apple,
    grid: &Grid,
    rng: &mut dyn RngCore,
) -> Option<Position> {
    if snake.head() != apple.position() {
        return None;
    }

    snake.feed();
    Some(apple.respawn(grid, rng))
}

/// Check the post-move head against the body, then against every rock.
///
/// The first hit resets the snake; the remaining checks then see a
/// one-segment snake and cannot fire again.
pub fn resolve_post_move(snake: &mut Snake, rocks: &[Rock]) -> Option<Death> {
    let mut death = None;

    if snake.bitten_itself() {
        death = Some(kill(snake, CollisionType::SelfBite));
    }

    if death.is_none() && rocks.iter().any(|rock| rock.position() == snake.head()) {
        // Rocks stay where they are; only their own countdown moves them.
        death = Some(kill(snake, CollisionType::Rock));
    }

    death
}

fn kill(snake: &mut Snake, cause: CollisionType) -> Death {
    let cleared = snake.segments.clone();
    snake.reset();
    Death { cause, cleared }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{Direction, GameConfig};
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    fn config() -> GameConfig {
        GameConfig::small()
    }

    fn snake_at(head: Position) -> Snake {
        let mut snake = Snake::new(Grid::from_config(&config()).center(), 5.0, 0.5);
        snake.segments = vec![head];
        snake
    }

    #[test]
    fn test_pickup_feeds_and_respawns() {
        let config = config();
        let grid = Grid::from_config(&config);
        let mut rng = Pcg32::seed_from_u64(2);
        let mut snake = snake_at(Position::new(60, 60));
        let mut apple = Apple::placed(&config, Position::new(60, 60), 50);

        let left = resolve_pickup(&mut snake, &mut apple, &grid, &mut rng);

        assert_eq!(left, Some(Position::new(60, 60)));
        assert!(snake.growth_pending);
        assert!(config.apple_life.contains(apple.life.remaining_life));
    }

    #[test]
    fn test_no_pickup_elsewhere() {
        let config = config();
        let grid = Grid::from_config(&config);
        let mut rng = Pcg32::seed_from_u64(2);
        let mut snake = snake_at(Position::new(60, 60));
        let mut apple = Apple::placed(&config, Position::new(80, 60), 50);

        assert_eq!(resolve_pickup(&mut snake, &mut apple, &grid, &mut rng), None);
        assert!(!snake.growth_pending);
        assert_eq!(apple.life.remaining_life, 50);
    }

    #[test]
    fn test_rock_kills() {
        let config = config();
        let mut snake = snake_at(Position::new(40, 40));
        snake.segments.push(Position::new(20, 40));
        snake.speed = 7.0;
        let rocks = vec![
            Rock::placed(&config, Position::new(0, 0), 90),
            Rock::placed(&config, Position::new(40, 40), 90),
        ];

        let death = resolve_post_move(&mut snake, &rocks).unwrap();

        assert_eq!(death.cause, CollisionType::Rock);
        assert_eq!(
            death.cleared,
            vec![Position::new(40, 40), Position::new(20, 40)]
        );
        assert_eq!(snake.len(), 1);
        assert_eq!(snake.head(), Position::new(100, 100));
        assert_eq!(snake.speed, 5.0);
        assert_eq!(rocks[1].position(), Position::new(40, 40));
        assert_eq!(rocks[1].life.remaining_life, 90);
    }

    #[test]
    fn test_self_bite_kills() {
        let grid = Grid::from_config(&config());
        let mut snake = snake_at(Position::new(100, 100));
        snake.segments = vec![
            Position::new(100, 100),
            Position::new(80, 100),
            Position::new(80, 120),
            Position::new(100, 120),
            Position::new(120, 120),
        ];
        snake.direction = Direction::Up;
        snake.move_on(&grid);
        snake.queue_direction(Direction::Left);
        snake.apply_pending_direction();
        snake.move_on(&grid);
        snake.queue_direction(Direction::Down);
        snake.apply_pending_direction();
        snake.move_on(&grid);
        // Head back on (80, 100), still part of the body
        assert_eq!(snake.head(), Position::new(80, 100));

        let death = resolve_post_move(&mut snake, &[]).unwrap();

        assert_eq!(death.cause, CollisionType::SelfBite);
        assert_eq!(snake.len(), 1);
        assert_eq!(snake.head(), grid.center());
    }

    #[test]
    fn test_one_death_per_tick() {
        let config = config();
        let mut snake = snake_at(Position::new(40, 40));
        snake.segments = vec![
            Position::new(40, 40),
            Position::new(40, 40),
            Position::new(20, 40),
        ];
        // A rock sits on the spawn cell; the reset snake must not die twice.
        let rocks = vec![
            Rock::placed(&config, Position::new(40, 40), 90),
            Rock::placed(&config, Position::new(100, 100), 90),
        ];

        let death = resolve_post_move(&mut snake, &rocks).unwrap();

        assert_eq!(death.cause, CollisionType::SelfBite);
        assert_eq!(death.cleared.len(), 3);
        assert_eq!(snake.len(), 1);
    }

    #[test]
    fn test_no_collision() {
        let config = config();
        let mut snake = snake_at(Position::new(40, 40));
        let rocks = vec![Rock::placed(&config, Position::new(60, 40), 90)];
        assert_eq!(resolve_post_move(&mut snake, &rocks), None);
        assert_eq!(snake.head(), Position::new(40, 40));
    }
}
