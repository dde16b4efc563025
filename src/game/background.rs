//! Parallax background: a static sky plus layers that scroll at increasing
//! speeds, nearer layers faster.

use crate::core::constants::*;

#[derive(Debug, Clone, PartialEq)]
pub struct ParallaxLayer {
    /// Horizontal offset of the first tile (zero or negative).
    pub offset: f32,
    pub tile_width: f32,
    /// Scroll per frame.
    pub speed: f32,
}

impl ParallaxLayer {
    /// Layer `index` (0 = farthest) scrolls `index + 1` units per frame.
    pub fn new(index: usize, tile_width: f32) -> Self {
        Self {
            offset: 0.0,
            tile_width: tile_width.max(CELL_WIDTH),
            speed: (index + 1) as f32,
        }
    }

    pub fn advance(&mut self) {
        self.offset -= self.speed;
        if self.offset.abs() > self.tile_width {
            self.offset = 0.0;
        }
    }

    /// Copies needed so no gap shows at any offset.
    pub fn tile_count(&self) -> usize {
        tiles_to_cover(self.tile_width) + 1
    }

    /// Left edge of every tile to draw this frame.
    pub fn tile_positions(&self) -> impl Iterator<Item = f32> + '_ {
        (0..self.tile_count()).map(move |i| self.offset + i as f32 * self.tile_width)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Background {
    pub sky_width: f32,
    pub layers: Vec<ParallaxLayer>,
}

impl Default for Background {
    fn default() -> Self {
        Self::new(&[WIDTH; BACKGROUND_LAYERS], WIDTH)
    }
}

impl Background {
    /// One scrolling layer per entry of `tile_widths`, farthest first.
    pub fn new(tile_widths: &[f32], sky_width: f32) -> Self {
        Self {
            sky_width: sky_width.max(CELL_WIDTH),
            layers: tile_widths
                .iter()
                .enumerate()
                .map(|(i, &w)| ParallaxLayer::new(i, w))
                .collect(),
        }
    }

    pub fn advance(&mut self) {
        for layer in &mut self.layers {
            layer.advance();
        }
    }

    /// Sky tiles never move.
    pub fn sky_tile_positions(&self) -> impl Iterator<Item = f32> + '_ {
        (0..tiles_to_cover(self.sky_width)).map(move |i| i as f32 * self.sky_width)
    }
}

fn tiles_to_cover(tile_width: f32) -> usize {
    (WIDTH / tile_width).ceil() as usize
}
