//! Isometric projection between tile coordinates and screen pixels
//!
//! Screen coordinates are relative to the top corner of tile (0, 0).
//! Columns run down-right and rows run down-left.

use crate::io::configuration::{MAXIMUM_SCALE_FACTOR, MINIMUM_SCALE_FACTOR, TILE_HEIGHT};

/// Scaled tile geometry for converting between tile and screen space
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IsoProjection {
    scale_factor: f32,
    tile_width: i32,
    tile_height: i32,
}

impl Default for IsoProjection {
    fn default() -> Self {
        Self::new(MAXIMUM_SCALE_FACTOR)
    }
}

impl IsoProjection {
    /// Create a projection at the given zoom
    pub fn new(scale_factor: f32) -> Self {
        let mut projection = Self {
            scale_factor: 0.0,
            tile_width: 0,
            tile_height: 0,
        };
        projection.set_scale_factor(MAXIMUM_SCALE_FACTOR);
        projection.set_scale_factor(scale_factor);
        projection
    }

    /// Change the zoom, returning whether the scaled tile size changed
    ///
    /// The zoom is clamped to the supported range. Tile height is kept even
    /// so half-tile offsets stay on whole pixels, and width is twice height.
    /// A non-finite zoom is ignored.
    pub fn set_scale_factor(&mut self, scale_factor: f32) -> bool {
        if !scale_factor.is_finite() {
            return false;
        }
        self.scale_factor = scale_factor.clamp(MINIMUM_SCALE_FACTOR, MAXIMUM_SCALE_FACTOR);
        let height = (self.scale_factor * (TILE_HEIGHT / 2) as f32).round() as i32 * 2;
        if height == self.tile_height {
            return false;
        }
        self.tile_height = height;
        self.tile_width = height * 2;
        true
    }

    /// Zoom requested by the caller, before tile size rounding
    pub const fn scale_factor(&self) -> f32 {
        self.scale_factor
    }

    /// Scaled tile width in pixels
    pub const fn tile_width(&self) -> i32 {
        self.tile_width
    }

    /// Scaled tile height in pixels
    pub const fn tile_height(&self) -> i32 {
        self.tile_height
    }

    /// Screen position of a tile's top corner
    pub const fn tile_to_screen(&self, row: i32, col: i32) -> [i32; 2] {
        [
            (self.tile_width / 2) * (col - row),
            (self.tile_height / 2) * (col + row),
        ]
    }

    /// Screen position of a fractional tile coordinate, rounded to pixels
    pub fn point_to_screen(&self, row: f32, col: f32) -> [i32; 2] {
        [
            ((self.tile_width / 2) as f32 * (col - row)).round() as i32,
            ((self.tile_height / 2) as f32 * (col + row)).round() as i32,
        ]
    }

    /// Fractional (row, col) under a screen position
    pub fn screen_to_tile(&self, x: i32, y: i32) -> (f32, f32) {
        let y_part = y as f32 / self.tile_height as f32;
        let x_part = x as f32 / self.tile_width as f32;
        (y_part - x_part, y_part + x_part)
    }

    /// Whether a tile whose top corner sits at (`x`, `y`) overlaps a
    /// `view_width` x `view_height` view
    pub const fn is_tile_visible(&self, x: i32, y: i32, view_width: i32, view_height: i32) -> bool {
        !(y >= view_height
            || y + self.tile_height < 0
            || x + self.tile_width / 2 < 0
            || x - self.tile_width / 2 >= view_width)
    }
}

/// Whether a fractional tile coordinate falls inside a `rows` x `cols` grid
pub fn is_tile_valid(row: f32, col: f32, rows: usize, cols: usize) -> bool {
    row >= 0.0 && col >= 0.0 && row < rows as f32 && col < cols as f32
}
