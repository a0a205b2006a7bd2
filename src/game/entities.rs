use rand::RngCore;

use super::config::GameConfig;
use super::grid::Grid;
use super::palette::{self, Rgb};
use super::perishable::{Blinkable, Perishable, PerishableState};
use super::state::Position;

/// Collectible that makes the snake grow
#[derive(Debug, Clone, PartialEq)]
pub struct Apple {
    pub life: PerishableState,
}

impl Apple {
    pub fn spawn(config: &GameConfig, grid: &Grid, rng: &mut dyn RngCore) -> Self {
        Self {
            life: PerishableState::spawn(
                config.apple_life,
                config.apple_blink_period,
                config.low_life_threshold,
                grid,
                rng,
            ),
        }
    }

    /// Apple at a fixed cell, used to set up scenarios
    pub fn placed(config: &GameConfig, position: Position, remaining_life: u32) -> Self {
        Self {
            life: PerishableState::placed(
                position,
                remaining_life,
                config.apple_life,
                config.apple_blink_period,
                config.low_life_threshold,
            ),
        }
    }
}

impl Perishable for Apple {
    fn life(&self) -> &PerishableState {
        &self.life
    }

    fn life_mut(&mut self) -> &mut PerishableState {
        &mut self.life
    }
}

impl Blinkable for Apple {
    fn base_color(&self) -> Rgb {
        palette::APPLE
    }
}

/// Hazard that kills the snake on contact
#[derive(Debug, Clone, PartialEq)]
pub struct Rock {
    pub life: PerishableState,
}

impl Rock {
    pub fn spawn(config: &GameConfig, grid: &Grid, rng: &mut dyn RngCore) -> Self {
        Self {
            life: PerishableState::spawn(
                config.rock_life,
                config.rock_blink_period,
                config.low_life_threshold,
                grid,
                rng,
            ),
        }
    }

    /// Rock at a fixed cell, used to set up scenarios
    pub fn placed(config: &GameConfig, position: Position, remaining_life: u32) -> Self {
        Self {
            life: PerishableState::placed(
                position,
                remaining_life,
                config.rock_life,
                config.rock_blink_period,
                config.low_life_threshold,
            ),
        }
    }
}

impl Perishable for Rock {
    fn life(&self) -> &PerishableState {
        &self.life
    }

    fn life_mut(&mut self) -> &mut PerishableState {
        &mut self.life
    }
}

impl Blinkable for Rock {
    fn base_color(&self) -> Rgb {
        palette::ROCK
    }
}
