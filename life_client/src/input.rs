// input.rs - Pointer position to cell coordinate mapping

use egui::{Pos2, Rect};

use crate::render::cell_size;

/// Maps a pointer position to the `(row, col)` under it.
///
/// Positions are floored, so a point exactly on a boundary belongs to the
/// cell to its right/below. Anything outside the surface maps to `None`.
pub fn cell_at(pointer: Pos2, surface: Rect, grid_size: usize) -> Option<(usize, usize)> {
    if grid_size == 0 || surface.width() <= 0.0 {
        return None;
    }

    let local = pointer - surface.min;
    let size = cell_size(surface, grid_size);
    let col = (local.x / size).floor();
    let row = (local.y / size).floor();

    // Also rejects NaN
    if !(row >= 0.0 && col >= 0.0) {
        return None;
    }

    let (row, col) = (row as usize, col as usize);
    (row < grid_size && col < grid_size).then_some((row, col))
}

#[cfg(test)]
mod tests {
    use egui::{Vec2, pos2};

    use super::*;

    fn surface() -> Rect {
        Rect::from_min_size(pos2(10.0, 20.0), Vec2::splat(100.0))
    }

    #[test]
    fn subtracts_the_surface_offset() {
        assert_eq!(cell_at(pos2(10.0, 20.0), surface(), 2), Some((0, 0)));
        assert_eq!(cell_at(pos2(59.9, 69.9), surface(), 2), Some((0, 0)));
        assert_eq!(cell_at(pos2(109.9, 20.0), surface(), 2), Some((0, 1)));
    }

    #[test]
    fn boundary_floors_into_the_next_cell() {
        assert_eq!(cell_at(pos2(60.0, 70.0), surface(), 2), Some((1, 1)));
        assert_eq!(cell_at(pos2(60.0, 20.0), surface(), 2), Some((0, 1)));
    }

    #[test]
    fn outside_the_surface_is_none() {
        assert_eq!(cell_at(pos2(110.0, 50.0), surface(), 2), None);
        assert_eq!(cell_at(pos2(50.0, 120.0), surface(), 2), None);
        assert_eq!(cell_at(pos2(9.9, 50.0), surface(), 2), None);
        assert_eq!(cell_at(pos2(f32::NAN, 50.0), surface(), 2), None);
        assert_eq!(cell_at(pos2(50.0, 50.0), surface(), 0), None);
    }

    #[test]
    fn every_pixel_maps_in_range() {
        let surface = Rect::from_min_size(Pos2::ZERO, Vec2::splat(700.0));
        for px in 0..700 {
            let (row, col) = cell_at(pos2(px as f32, px as f32), surface, 50).unwrap();
            assert!(row < 50 && col < 50);
        }
        assert_eq!(cell_at(pos2(700.0, 0.0), surface, 50), None);
    }
}
