use anyhow::{Context, Result};
use crossterm::{
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::{Stderr, stderr};

use crate::game::{Clock, GameConfig, GameLoop, TickControl};
use crate::input::TerminalInput;
use crate::metrics::GameMetrics;
use crate::render::{Hud, Renderer, TerminalRenderer};

type StderrRenderer = TerminalRenderer<CrosstermBackend<Stderr>>;

pub struct HumanMode {
    game: GameLoop,
    metrics: GameMetrics,
    input: TerminalInput,
}

impl HumanMode {
    pub fn new(config: GameConfig) -> Self {
        Self {
            game: GameLoop::new(config),
            metrics: GameMetrics::new(),
            input: TerminalInput::new(),
        }
    }

    pub async fn run(&mut self) -> Result<()> {
        // Setup terminal
        enable_raw_mode().context("Failed to enable raw mode")?;
        let mut stderr = stderr();
        execute!(stderr, EnterAlternateScreen).context("Failed to enter alternate screen")?;
        let backend = CrosstermBackend::new(stderr);
        let mut terminal = Terminal::new(backend).context("Failed to create terminal")?;
        terminal.hide_cursor().context("Failed to hide cursor")?;
        terminal.clear().context("Failed to clear terminal")?;

        let mut renderer = TerminalRenderer::new(terminal, *self.game.engine().grid());

        // Run game loop with cleanup
        let result = self.run_game_loop(&mut renderer).await;

        // Cleanup terminal
        self.cleanup_terminal(&mut renderer)?;

        result
    }

    async fn run_game_loop(&mut self, renderer: &mut StderrRenderer) -> Result<()> {
        log::info!(
            "starting on a {}x{} grid with {} rocks",
            self.game.engine().config().grid_width,
            self.game.engine().config().grid_height,
            self.game.state().rocks.len()
        );

        let mut clock = Clock::new();
        self.game.draw_initial(renderer);

        loop {
            if let TickControl::Quit = self.game.tick(&mut self.input, renderer)? {
                break;
            }

            tokio::select! {
                _ = tokio::time::sleep(clock.remaining(self.game.state().snake.speed)) => {}

                // Handle Ctrl+C
                _ = tokio::signal::ctrl_c() => {
                    log::info!("interrupted");
                    break;
                }
            }
            clock.restart();

            self.metrics.update();
            renderer.present(&self.hud())?;
        }

        Ok(())
    }

    fn hud(&self) -> Hud {
        let state = self.game.state();
        Hud {
            length: state.snake.len(),
            speed: state.snake.speed,
            apples_eaten: state.apples_eaten,
            deaths: state.deaths,
            elapsed: self.metrics.format_time(),
        }
    }

    fn cleanup_terminal(&mut self, renderer: &mut StderrRenderer) -> Result<()> {
        let terminal = renderer.terminal_mut();
        disable_raw_mode().context("Failed to disable raw mode")?;
        execute!(terminal.backend_mut(), LeaveAlternateScreen)
            .context("Failed to leave alternate screen")?;
        terminal.show_cursor().context("Failed to show cursor")?;
        Ok(())
    }
}
