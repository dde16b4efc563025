//! Character-cell sprites parsed from plain text.
//!
//! Each line of the file is one row of cells. Spaces are transparent; rows
//! shorter than the widest one are padded with spaces. One cell covers
//! `CELL_WIDTH` x `CELL_HEIGHT` logical units.

use crate::core::constants::{CELL_HEIGHT, CELL_WIDTH};
use anyhow::bail;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sprite {
    cells: Vec<Vec<char>>,
    cols: u16,
}

impl Sprite {
    pub fn parse(text: &str) -> anyhow::Result<Self> {
        let mut lines: Vec<&str> = text.lines().map(|l| l.trim_end_matches('\r')).collect();
        while lines.last().is_some_and(|l| l.trim().is_empty()) {
            lines.pop();
        }
        if lines.is_empty() {
            bail!("sprite is empty");
        }
        if let Some(row) = lines.iter().position(|l| l.contains('\t')) {
            bail!("tab character on row {}", row + 1);
        }

        let cols = lines.iter().map(|l| l.chars().count()).max().unwrap_or(0);
        if cols == 0 {
            bail!("sprite has no visible cells");
        }
        if cols > u16::MAX as usize || lines.len() > u16::MAX as usize {
            bail!("sprite is too large");
        }

        let cells = lines
            .iter()
            .map(|l| {
                let mut row: Vec<char> = l.chars().collect();
                row.resize(cols, ' ');
                row
            })
            .collect();

        Ok(Self {
            cells,
            cols: cols as u16,
        })
    }

    pub fn cols(&self) -> u16 {
        self.cols
    }

    pub fn rows(&self) -> u16 {
        self.cells.len() as u16
    }

    /// Width in logical units.
    pub fn width(&self) -> f32 {
        self.cols as f32 * CELL_WIDTH
    }

    /// Height in logical units.
    pub fn height(&self) -> f32 {
        self.rows() as f32 * CELL_HEIGHT
    }

    /// Opaque cells as `(col, row, ch)`.
    pub fn opaque_cells(&self) -> impl Iterator<Item = (u16, u16, char)> + '_ {
        self.cells.iter().enumerate().flat_map(|(r, row)| {
            row.iter()
                .enumerate()
                .filter(|&(_, &ch)| ch != ' ')
                .map(move |(c, &ch)| (c as u16, r as u16, ch))
        })
    }
}
