//! Lifecycle shared by apples and rocks.
//!
//! A perishable entity never disappears: when its countdown runs out it jumps
//! to a new random cell with a freshly drawn lifespan. While its life is low it
//! flashes between its own color and [`palette::BLINK`].

use rand::{Rng, RngCore};

use super::config::LifeSpan;
use super::grid::Grid;
use super::palette::{self, Rgb};
use super::state::Position;

/// Which of the two blink colors is showing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tint {
    #[default]
    Base,
    Highlight,
}

/// What a single lifecycle tick did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LifeEvent {
    /// Countdown advanced, nothing visible changed
    Aged,
    /// Countdown advanced inside the low-life window
    Blinked,
    /// Life ran out; the entity moved away from `from`
    Respawned { from: Position },
}

/// Countdown and blink fields of a perishable entity
#[derive(Debug, Clone, PartialEq)]
pub struct PerishableState {
    pub position: Position,
    pub remaining_life: u32,
    pub span: LifeSpan,
    pub low_life_threshold: u32,
    pub blink_period: u32,
    pub blink_phase: u32,
    pub tint: Tint,
}

impl PerishableState {
    /// Fresh state at a random cell with a random lifespan
    pub fn spawn(
        span: LifeSpan,
        blink_period: u32,
        low_life_threshold: u32,
        grid: &Grid,
        rng: &mut dyn RngCore,
    ) -> Self {
        let mut state = Self::placed(
            Position::new(0, 0),
            span.min,
            span,
            blink_period,
            low_life_threshold,
        );
        state.respawn(grid, rng);
        state
    }

    /// State at a known cell with a known remaining life
    pub fn placed(
        position: Position,
        remaining_life: u32,
        span: LifeSpan,
        blink_period: u32,
        low_life_threshold: u32,
    ) -> Self {
        Self {
            position,
            remaining_life,
            span,
            low_life_threshold,
            blink_period,
            blink_phase: 0,
            tint: Tint::Base,
        }
    }

    /// Advance the countdown by one tick
    pub fn tick(&mut self, grid: &Grid, rng: &mut dyn RngCore) -> LifeEvent {
        self.remaining_life = self.remaining_life.saturating_sub(1);

        if self.remaining_life == 0 {
            let from = self.respawn(grid, rng);
            return LifeEvent::Respawned { from };
        }

        if self.remaining_life <= self.low_life_threshold {
            self.advance_blink();
            return LifeEvent::Blinked;
        }

        LifeEvent::Aged
    }

    /// Move to a new random cell with a new lifespan; returns the old cell
    pub fn respawn(&mut self, grid: &Grid, rng: &mut dyn RngCore) -> Position {
        let from = self.position;
        self.remaining_life = rng.gen_range(self.span.min..=self.span.max);
        self.position = grid.random_position(rng);
        self.blink_phase = 0;
        self.tint = Tint::Base;
        debug_assert!(self.remaining_life > 0, "respawned with no life left");
        from
    }

    /// Phase runs 0..=period; odd phases show the highlight, reaching the
    /// period snaps back to base and restarts the cycle.
    fn advance_blink(&mut self) {
        if self.blink_phase == self.blink_period {
            self.tint = Tint::Base;
            self.blink_phase = 0;
        } else if self.blink_phase % 2 == 0 {
            self.blink_phase += 1;
            self.tint = Tint::Base;
        } else {
            self.blink_phase += 1;
            self.tint = Tint::Highlight;
        }
    }
}

/// An entity that carries a lifespan
pub trait Perishable {
    fn life(&self) -> &PerishableState;

    fn life_mut(&mut self) -> &mut PerishableState;

    fn position(&self) -> Position {
        self.life().position
    }

    fn tick(&mut self, grid: &Grid, rng: &mut dyn RngCore) -> LifeEvent {
        self.life_mut().tick(grid, rng)
    }

    /// Respawn right now regardless of the countdown; returns the old cell
    fn respawn(&mut self, grid: &Grid, rng: &mut dyn RngCore) -> Position {
        self.life_mut().respawn(grid, rng)
    }
}

/// An entity whose color flashes while its life is low
pub trait Blinkable: Perishable {
    fn base_color(&self) -> Rgb;

    fn color(&self) -> Rgb {
        match self.life().tint {
            Tint::Base => self.base_color(),
            Tint::Highlight => palette::BLINK,
        }
    }
}
