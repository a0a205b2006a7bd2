use ratatui::{
    style::{Color, Style},
    text::{Line, Span},
};

use crate::game::{Grid, Position, Rgb, palette};

/// Retained cell colors of the whole field
#[derive(Debug, Clone, PartialEq)]
pub struct Canvas {
    grid: Grid,
    cells: Vec<Rgb>,
}

impl Canvas {
    pub fn new(grid: Grid) -> Self {
        Self {
            grid,
            cells: vec![palette::BACKGROUND; grid.cols() * grid.rows()],
        }
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn fill(&mut self, position: Position, color: Rgb) {
        if let Some(index) = self.index(position) {
            self.cells[index] = color;
        }
    }

    pub fn clear(&mut self, position: Position) {
        self.fill(position, palette::BACKGROUND);
    }

    /// Color currently painted at `position`
    pub fn get(&self, position: Position) -> Option<Rgb> {
        self.index(position).map(|index| self.cells[index])
    }

    /// One line per grid row, two terminal columns per cell
    pub fn lines(&self) -> Vec<Line<'static>> {
        self.cells
            .chunks(self.grid.cols())
            .map(|row| row.iter().map(|&color| cell_span(color)).collect::<Line>())
            .collect()
    }

    fn index(&self, position: Position) -> Option<usize> {
        debug_assert!(
            self.grid.contains(position),
            "painting off-grid cell {:?}",
            position
        );
        if !self.grid.contains(position) {
            return None;
        }
        let (col, row) = self.grid.cell_index(position);
        Some(row * self.grid.cols() + col)
    }
}

fn to_color(Rgb(r, g, b): Rgb) -> Color {
    Color::Rgb(r, g, b)
}

fn cell_span(color: Rgb) -> Span<'static> {
    if color == palette::BACKGROUND {
        return Span::styled("  ", Style::default().bg(to_color(palette::BACKGROUND)));
    }
    Span::styled(
        "[]",
        Style::default()
            .fg(to_color(palette::BORDER))
            .bg(to_color(color)),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fill_and_clear() {
        let mut canvas = Canvas::new(Grid::new(4, 3, 20));
        let pos = Position::new(60, 40);

        assert_eq!(canvas.get(pos), Some(palette::BACKGROUND));
        canvas.fill(pos, palette::APPLE);
        assert_eq!(canvas.get(pos), Some(palette::APPLE));
        canvas.clear(pos);
        assert_eq!(canvas.get(pos), Some(palette::BACKGROUND));
    }

    #[test]
    fn test_lines_match_grid() {
        let mut canvas = Canvas::new(Grid::new(4, 3, 20));
        canvas.fill(Position::new(20, 40), palette::SNAKE);

        let lines = canvas.lines();

        assert_eq!(lines.len(), 3);
        assert!(lines.iter().all(|line| line.spans.len() == 4));
        assert_eq!(lines[2].spans[1].content, "[]");
        assert_eq!(lines[2].spans[1].style.bg, Some(Color::Rgb(0, 255, 0)));
        assert_eq!(lines[2].spans[1].style.fg, Some(Color::Rgb(93, 216, 228)));
        assert_eq!(lines[0].spans[0].content, "  ");
    }
}
