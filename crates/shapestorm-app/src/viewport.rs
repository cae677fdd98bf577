//! Mapping between world coordinates and terminal cells.
//!
//! The whole playfield is stretched over the terminal, so cells are
//! usually not square in world units.

use glam::Vec2;

use shapestorm_core::types::Bounds;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    bounds: Bounds,
    cols: u16,
    rows: u16,
}

impl Viewport {
    /// A zero-sized terminal is treated as a single cell.
    pub fn new(bounds: Bounds, cols: u16, rows: u16) -> Self {
        Self {
            bounds,
            cols: cols.max(1),
            rows: rows.max(1),
        }
    }

    pub fn cols(&self) -> u16 {
        self.cols
    }

    pub fn rows(&self) -> u16 {
        self.rows
    }

    pub fn resize(&mut self, cols: u16, rows: u16) {
        *self = Self::new(self.bounds, cols, rows);
    }

    /// World-space size of one cell.
    pub fn cell_size(&self) -> Vec2 {
        Vec2::new(
            self.bounds.width() / self.cols as f32,
            self.bounds.height() / self.rows as f32,
        )
    }

    /// Fractional cell coordinates of a world point; may lie off screen.
    pub fn to_cell_space(&self, p: Vec2) -> Vec2 {
        (p - self.bounds.min) / self.cell_size()
    }

    /// Cell containing `p`, or `None` if it is off screen. Points on the
    /// far edges belong to the last row or column.
    pub fn world_to_cell(&self, p: Vec2) -> Option<(u16, u16)> {
        if !self.bounds.contains(p) {
            return None;
        }
        let c = self.to_cell_space(p).floor().max(Vec2::ZERO);
        let col = c.x.min(self.cols as f32 - 1.0);
        let row = c.y.min(self.rows as f32 - 1.0);
        Some((col as u16, row as u16))
    }

    /// World position of a cell's centre.
    pub fn cell_to_world(&self, col: u16, row: u16) -> Vec2 {
        self.bounds.min + (Vec2::new(col as f32, row as f32) + 0.5) * self.cell_size()
    }
}
