//! The render surface: a fixed grid of colored character cells addressed in
//! logical 700x400 units. Scenes draw into it; the terminal layer copies it
//! out once per frame.

use crate::assets::Sprite;
use crate::core::constants::{CELL_HEIGHT, CELL_WIDTH};
use ratatui::{
    style::{Color, Style},
    text::{Line, Span},
};

/// Cell in the render buffer with foreground and background colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    pub ch: char,
    pub fg: Color,
    pub bg: Color,
}

impl Default for Cell {
    fn default() -> Self {
        Self {
            ch: ' ',
            fg: Color::Reset,
            bg: Color::Reset,
        }
    }
}

/// Logical position to cell coordinates (may be off-grid).
pub fn to_cell(x: f32, y: f32) -> (i32, i32) {
    (
        (x / CELL_WIDTH).floor() as i32,
        (y / CELL_HEIGHT).floor() as i32,
    )
}

#[derive(Debug, Clone)]
pub struct Canvas {
    cols: u16,
    rows: u16,
    cells: Vec<Cell>,
}

impl Canvas {
    pub fn new(cols: u16, rows: u16) -> Self {
        Self {
            cols,
            rows,
            cells: vec![Cell::default(); cols as usize * rows as usize],
        }
    }

    pub fn cols(&self) -> u16 {
        self.cols
    }

    pub fn rows(&self) -> u16 {
        self.rows
    }

    pub fn clear(&mut self) {
        self.cells.fill(Cell::default());
    }

    pub fn get(&self, col: u16, row: u16) -> Option<Cell> {
        self.index(col as i32, row as i32).map(|i| self.cells[i])
    }

    /// Write a cell; positions outside the grid are clipped.
    pub fn set(&mut self, col: i32, row: i32, cell: Cell) {
        if let Some(i) = self.index(col, row) {
            self.cells[i] = cell;
        }
    }

    /// Fill whole rows from `from_row` to the bottom.
    pub fn fill_rows_from(&mut self, from_row: u16, cell: Cell) {
        let start = (from_row.min(self.rows) as usize) * self.cols as usize;
        self.cells[start..].fill(cell);
    }

    /// Draw the opaque cells of `sprite` with its top-left corner at logical
    /// `(x, y)`. Background colors already on the canvas show through.
    pub fn blit(&mut self, sprite: &Sprite, x: f32, y: f32, fg: Color) {
        let (col0, row0) = to_cell(x, y);
        for (c, r, ch) in sprite.opaque_cells() {
            let (col, row) = (col0 + c as i32, row0 + r as i32);
            if let Some(i) = self.index(col, row) {
                let bg = self.cells[i].bg;
                self.cells[i] = Cell { ch, fg, bg };
            }
        }
    }

    /// Draw text starting at logical `(x, y)`.
    pub fn draw_text(&mut self, text: &str, x: f32, y: f32, fg: Color) {
        let (col0, row) = to_cell(x, y);
        for (i, ch) in text.chars().enumerate() {
            let col = col0 + i as i32;
            if let Some(idx) = self.index(col, row) {
                let bg = self.cells[idx].bg;
                self.cells[idx] = Cell { ch, fg, bg };
            }
        }
    }

    /// Draw text centered on logical `(center_x, center_y)`.
    pub fn draw_text_centered(&mut self, text: &str, center_x: f32, center_y: f32, fg: Color) {
        let half = text.chars().count() as f32 / 2.0 * CELL_WIDTH;
        self.draw_text(text, center_x - half, center_y, fg);
    }

    /// Plain characters of one row (for tests and debugging).
    pub fn row_text(&self, row: u16) -> String {
        if row >= self.rows {
            return String::new();
        }
        let start = row as usize * self.cols as usize;
        self.cells[start..start + self.cols as usize]
            .iter()
            .map(|c| c.ch)
            .collect()
    }

    /// One styled line per row. Neighbouring cells with the same colors
    /// share a span.
    pub fn lines(&self) -> Vec<Line<'static>> {
        self.cells
            .chunks(self.cols.max(1) as usize)
            .map(|row| {
                let mut runs: Vec<(Style, String)> = Vec::new();
                for cell in row {
                    let style = Style::default().fg(cell.fg).bg(cell.bg);
                    if let Some((last, text)) = runs.last_mut() {
                        if *last == style {
                            text.push(cell.ch);
                            continue;
                        }
                    }
                    runs.push((style, cell.ch.to_string()));
                }
                Line::from(
                    runs.into_iter()
                        .map(|(style, text)| Span::styled(text, style))
                        .collect::<Vec<_>>(),
                )
            })
            .collect()
    }

    fn index(&self, col: i32, row: i32) -> Option<usize> {
        if col < 0 || row < 0 || col >= self.cols as i32 || row >= self.rows as i32 {
            return None;
        }
        Some(row as usize * self.cols as usize + col as usize)
    }
}
