use std::time::Duration;

use anyhow::Result;

use super::{
    clock::pacing_delay,
    config::GameConfig,
    engine::GameEngine,
    palette,
    perishable::Blinkable,
    state::GameState,
};
use crate::input::{InputEvent, InputSource};
use crate::render::Renderer;

/// What the runner should do after a tick
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TickControl {
    /// Wait this long, present the frame, tick again
    Continue(Duration),
    Quit,
}

/// Drives one game tick against an input source and a renderer
pub struct GameLoop {
    engine: GameEngine,
    state: GameState,
}

impl GameLoop {
    pub fn new(config: GameConfig) -> Self {
        let mut engine = GameEngine::new(config);
        let state = engine.new_game();
        Self { engine, state }
    }

    pub fn engine(&self) -> &GameEngine {
        &self.engine
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn state_mut(&mut self) -> &mut GameState {
        &mut self.state
    }

    /// Paint the snake before the first tick
    pub fn draw_initial(&self, renderer: &mut dyn Renderer) {
        draw_snake(&self.state, renderer);
    }

    /// Run one tick. A quit event stops the tick before the snake moves.
    pub fn tick(
        &mut self,
        input: &mut dyn InputSource,
        renderer: &mut dyn Renderer,
    ) -> Result<TickControl> {
        draw_perishables(&self.state, renderer);

        for cell in self.engine.advance_lifecycle(&mut self.state) {
            renderer.clear_cell(cell);
        }

        if let Some(cell) = self.engine.resolve_pickup(&mut self.state) {
            renderer.clear_cell(cell);
        }

        for event in input.poll()? {
            match event {
                InputEvent::Quit => {
                    log::info!("quit requested after {} ticks", self.state.ticks);
                    return Ok(TickControl::Quit);
                }
                InputEvent::DirectionPressed(direction) => {
                    self.engine.steer(&mut self.state, direction);
                }
            }
        }

        let movement = self.engine.advance_snake(&mut self.state);
        draw_snake(&self.state, renderer);
        if let Some(vacated) = movement.vacated {
            renderer.clear_cell(vacated);
        }

        if let Some(death) = self.engine.resolve_collisions(&mut self.state) {
            for cell in death.cleared {
                renderer.clear_cell(cell);
            }
        }

        Ok(TickControl::Continue(pacing_delay(self.state.snake.speed)))
    }
}

fn draw_perishables(state: &GameState, renderer: &mut dyn Renderer) {
    renderer.fill_cell(state.apple.life.position, state.apple.color());
    for rock in &state.rocks {
        renderer.fill_cell(rock.life.position, rock.color());
    }
}

fn draw_snake(state: &GameState, renderer: &mut dyn Renderer) {
    for &segment in &state.snake.segments {
        renderer.fill_cell(segment, palette::SNAKE);
    }
}
