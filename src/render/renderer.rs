use anyhow::{Context, Result};
use ratatui::{
    Frame, Terminal,
    backend::Backend,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
};

use super::{Canvas, Hud, Renderer};
use crate::game::{Grid, Position, Rgb};

/// Draws the canvas into a ratatui terminal
pub struct TerminalRenderer<B: Backend> {
    terminal: Terminal<B>,
    canvas: Canvas,
}

impl<B: Backend> TerminalRenderer<B> {
    pub fn new(terminal: Terminal<B>, grid: Grid) -> Self {
        Self {
            terminal,
            canvas: Canvas::new(grid),
        }
    }

    pub fn canvas(&self) -> &Canvas {
        &self.canvas
    }

    pub fn terminal_mut(&mut self) -> &mut Terminal<B> {
        &mut self.terminal
    }
}

impl<B: Backend> Renderer for TerminalRenderer<B> {
    fn fill_cell(&mut self, position: Position, color: Rgb) {
        self.canvas.fill(position, color);
    }

    fn clear_cell(&mut self, position: Position) {
        self.canvas.clear(position);
    }

    fn present(&mut self, hud: &Hud) -> Result<()> {
        let canvas = &self.canvas;
        self.terminal
            .draw(|frame| render(frame, canvas, hud))
            .context("Failed to draw frame")?;
        Ok(())
    }
}

fn render(frame: &mut Frame, canvas: &Canvas, hud: &Hud) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(0),    // Game area
            Constraint::Length(3), // Footer
        ])
        .split(frame.area());

    frame.render_widget(render_stats(hud), chunks[0]);

    let game_area = centered(chunks[1], canvas.grid());
    frame.render_widget(render_grid(canvas), game_area);

    frame.render_widget(render_controls(), chunks[2]);
}

/// Field plus its double border, centered in `area`
fn centered(area: Rect, grid: &Grid) -> Rect {
    let width = to_u16(grid.cols().saturating_mul(2).saturating_add(2)).min(area.width);
    let height = to_u16(grid.rows().saturating_add(2)).min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

fn to_u16(value: usize) -> u16 {
    u16::try_from(value).unwrap_or(u16::MAX)
}

fn render_grid(canvas: &Canvas) -> Paragraph<'static> {
    Paragraph::new(canvas.lines()).block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Double)
            .border_style(Style::default().fg(Color::White))
            .title(" Snake "),
    )
}

fn render_stats(hud: &Hud) -> Paragraph<'static> {
    let label = Style::default().fg(Color::Yellow);
    let value = Style::default().fg(Color::White);

    let text = vec![Line::from(vec![
        Span::styled("Length: ", label),
        Span::styled(hud.length.to_string(), value.add_modifier(Modifier::BOLD)),
        Span::raw("    "),
        Span::styled("Speed: ", label),
        Span::styled(format!("{:.1}", hud.speed), value),
        Span::raw("    "),
        Span::styled("Apples: ", label),
        Span::styled(hud.apples_eaten.to_string(), value),
        Span::raw("    "),
        Span::styled("Deaths: ", label),
        Span::styled(hud.deaths.to_string(), value),
        Span::raw("    "),
        Span::styled("Time: ", label),
        Span::styled(hud.elapsed.clone(), value),
    ])];

    Paragraph::new(text).alignment(Alignment::Center)
}

fn render_controls() -> Paragraph<'static> {
    let text = vec![Line::from(vec![
        Span::styled("↑↓←→", Style::default().fg(Color::Cyan)),
        Span::raw(" or "),
        Span::styled("WASD", Style::default().fg(Color::Cyan)),
        Span::raw(" to move | "),
        Span::styled("Q", Style::default().fg(Color::Red)),
        Span::raw(" to quit"),
    ])];

    Paragraph::new(text).alignment(Alignment::Center)
}
