// render.rs - Pixel-block rendering of the grid

use egui::{Color32, Painter, Rect, Vec2};
use life_grid::Grid;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Palette {
    pub live: Color32,
    pub dead: Color32,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            live: Color32::from_rgb(0x9b, 0x59, 0xb6),
            dead: Color32::BLACK,
        }
    }
}

impl Palette {
    pub fn color(&self, alive: bool) -> Color32 {
        if alive { self.live } else { self.dead }
    }
}

/// One filled rectangle of a frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Fill {
    pub rect: Rect,
    pub color: Color32,
}

/// Side length of one cell on a square surface.
pub fn cell_size(surface: Rect, grid_size: usize) -> f32 {
    surface.width() / grid_size as f32
}

/// Builds a full frame: one fill clearing the whole surface, then one
/// block per cell in row-major order.
pub fn frame(grid: &Grid, surface: Rect, palette: &Palette) -> Vec<Fill> {
    let size = cell_size(surface, grid.size());
    let mut fills = Vec::with_capacity(grid.size() * grid.size() + 1);

    fills.push(Fill { rect: surface, color: palette.dead });

    for (row, col, alive) in grid.cells() {
        let min = surface.min + Vec2::new(col as f32 * size, row as f32 * size);
        fills.push(Fill {
            rect: Rect::from_min_size(min, Vec2::splat(size)),
            color: palette.color(alive),
        });
    }
    fills
}

pub fn paint(painter: &Painter, fills: &[Fill]) {
    for fill in fills {
        painter.rect_filled(fill.rect, 0.0, fill.color);
    }
}
