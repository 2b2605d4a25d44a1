// grid.rs - Grid store for Conway's Game of Life

use serde::{Deserialize, Serialize};

use crate::GridError;

/// Default grid dimension (50x50 playing area).
pub const DEFAULT_GRID_SIZE: usize = 50;

pub type Row = Vec<bool>;

/// A square matrix of cells, indexed `[row][col]`.
///
/// Always exactly `size` rows of exactly `size` cells. Every constructor
/// and mutator preserves that shape, so renderers and the step rule can
/// walk it without bounds surprises.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "Vec<Row>", try_from = "Vec<Row>")]
pub struct Grid {
    cells: Vec<Row>,
}

impl Grid {
    /// An all-dead grid of `size` x `size` cells.
    pub fn new(size: usize) -> Self {
        Self { cells: vec![vec![false; size]; size] }
    }

    /// Builds a grid from raw rows, rejecting empty or non-square input.
    pub fn from_rows(rows: Vec<Row>) -> Result<Self, GridError> {
        let expected = rows.len();
        if expected == 0 {
            return Err(GridError::Empty);
        }
        if let Some((row, cells)) = rows.iter().enumerate().find(|(_, r)| r.len() != expected) {
            return Err(GridError::Ragged { row, len: cells.len(), expected });
        }
        Ok(Self { cells: rows })
    }

    /// Side length N.
    pub fn size(&self) -> usize {
        self.cells.len()
    }

    /// Read-only view of the current generation.
    pub fn rows(&self) -> &[Row] {
        &self.cells
    }

    pub fn get(&self, row: usize, col: usize) -> Option<bool> {
        self.cells.get(row).and_then(|r| r.get(col)).copied()
    }

    /// Flips one cell. Coordinates outside the grid are ignored and
    /// reported as `false`.
    pub fn toggle(&mut self, row: usize, col: usize) -> bool {
        match self.cells.get_mut(row).and_then(|r| r.get_mut(col)) {
            Some(cell) => {
                *cell = !*cell;
                true
            }
            None => false,
        }
    }

    /// Swaps in a whole new generation. The incoming grid must have the
    /// same dimension; on mismatch the current grid is left untouched.
    pub fn replace(&mut self, next: Grid) -> Result<(), GridError> {
        if next.size() != self.size() {
            return Err(GridError::Size { expected: self.size(), actual: next.size() });
        }
        self.cells = next.cells;
        Ok(())
    }

    pub fn live_count(&self) -> usize {
        self.cells.iter().map(|r| r.iter().filter(|&&c| c).count()).sum()
    }

    /// Iterates `(row, col, alive)` in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = (usize, usize, bool)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .flat_map(|(row, r)| r.iter().enumerate().map(move |(col, &alive)| (row, col, alive)))
    }
}

impl Default for Grid {
    fn default() -> Self {
        Self::new(DEFAULT_GRID_SIZE)
    }
}

impl TryFrom<Vec<Row>> for Grid {
    type Error = GridError;

    fn try_from(rows: Vec<Row>) -> Result<Self, Self::Error> {
        Self::from_rows(rows)
    }
}

impl From<Grid> for Vec<Row> {
    fn from(grid: Grid) -> Self {
        grid.cells
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_grid_is_square_and_dead() {
        let grid = Grid::new(50);
        assert_eq!(grid.size(), 50);
        assert!(grid.rows().iter().all(|r| r.len() == 50));
        assert_eq!(grid.live_count(), 0);
    }

    #[test]
    fn toggle_flips_only_the_target_cell() {
        let mut grid = Grid::new(4);
        for row in 0..4 {
            for col in 0..4 {
                let before = grid.clone();
                assert!(grid.toggle(row, col));
                for (r, c, alive) in grid.cells() {
                    let prior = before.get(r, c).unwrap();
                    if (r, c) == (row, col) {
                        assert_eq!(alive, !prior);
                    } else {
                        assert_eq!(alive, prior);
                    }
                }
            }
        }
        assert_eq!(grid.live_count(), 16);
    }

    #[test]
    fn toggle_twice_restores_the_cell() {
        let mut grid = Grid::new(3);
        grid.toggle(1, 2);
        grid.toggle(1, 2);
        assert_eq!(grid, Grid::new(3));
    }

    #[test]
    fn toggle_out_of_range_is_ignored() {
        let mut grid = Grid::new(2);
        assert!(!grid.toggle(2, 0));
        assert!(!grid.toggle(0, 2));
        assert!(!grid.toggle(usize::MAX, usize::MAX));
        assert_eq!(grid, Grid::new(2));
    }

    #[test]
    fn toggle_scenario_two_by_two() {
        let mut grid = Grid::new(2);
        grid.toggle(0, 0);
        assert_eq!(grid.rows(), &[vec![true, false], vec![false, false]]);
    }

    #[test]
    fn replace_then_read_is_identity() {
        let mut grid = Grid::new(2);
        let next = Grid::from_rows(vec![vec![false, true], vec![true, false]]).unwrap();
        grid.replace(next.clone()).unwrap();
        assert_eq!(grid, next);
        assert_eq!(grid.rows(), &[vec![false, true], vec![true, false]]);
    }

    #[test]
    fn replace_rejects_other_dimensions() {
        let mut grid = Grid::new(3);
        grid.toggle(1, 1);
        let before = grid.clone();

        let err = grid.replace(Grid::new(4)).unwrap_err();
        assert_eq!(err, GridError::Size { expected: 3, actual: 4 });
        assert_eq!(grid, before);
    }

    #[test]
    fn from_rows_rejects_empty_and_ragged() {
        assert_eq!(Grid::from_rows(Vec::new()).unwrap_err(), GridError::Empty);

        let err = Grid::from_rows(vec![vec![true, false], vec![true]]).unwrap_err();
        assert_eq!(err, GridError::Ragged { row: 1, len: 1, expected: 2 });

        // Rectangular is still not square
        let rows = vec![vec![true, false, true], vec![true, false, true]];
        let err = Grid::from_rows(rows).unwrap_err();
        assert_eq!(err, GridError::Ragged { row: 0, len: 3, expected: 2 });
    }

    #[test]
    fn serializes_as_bare_matrix() {
        let mut grid = Grid::new(2);
        grid.toggle(0, 0);
        let json = serde_json::to_string(&grid).unwrap();
        assert_eq!(json, "[[true,false],[false,false]]");
    }

    #[test]
    fn deserialize_validates_shape() {
        let grid: Grid = serde_json::from_str("[[false,true],[true,false]]").unwrap();
        assert_eq!(grid.get(0, 1), Some(true));

        assert!(serde_json::from_str::<Grid>("[[false,true],[true]]").is_err());
        assert!(serde_json::from_str::<Grid>("[]").is_err());
        assert!(serde_json::from_str::<Grid>("[[1,0],[0,1]]").is_err());
    }
}
