use crate::grid::GridPos;
use macroquad::math::{vec2, Rect, Vec2};

/// Screen placement of a grid: uniform square tiles centered in the viewport.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Layout {
    /// Side of one tile, in viewport units
    pub tile_size: f32,
    /// Top-left corner of the grid inside the viewport
    pub offset: Vec2,
}

impl Layout {
    /// Fit `columns × rows` square tiles into `viewport` without clipping.
    pub fn fit(viewport: Vec2, columns: usize, rows: usize) -> Self {
        let dims = vec2(columns as f32, rows as f32);
        let tile_size = (viewport.x / dims.x).min(viewport.y / dims.y);
        let offset = (viewport - dims * tile_size) / 2.0;
        Self { tile_size, offset }
    }

    /// Top-left corner of a cell.
    #[inline]
    pub fn cell_origin(&self, pos: GridPos) -> Vec2 {
        self.offset + vec2(pos.x as f32, pos.y as f32) * self.tile_size
    }

    /// Tile edge rounded to whole pixels, as used for built boxes.
    #[inline]
    pub fn pixel_tile_size(&self) -> f32 {
        self.tile_size.round()
    }

    /// Bounding box of a cell.
    pub fn cell_rect(&self, pos: GridPos) -> Rect {
        let origin = self.cell_origin(pos);
        let side = self.pixel_tile_size();
        Rect::new(origin.x, origin.y, side, side)
    }
}
