// rule.rs - Conway's B3/S23 rule on a wrapping (toroidal) grid

use crate::Grid;

const NEIGHBORS: [(usize, usize); 8] = [
    (0, 0), (0, 1), (0, 2),
    (1, 0),         (1, 2),
    (2, 0), (2, 1), (2, 2),
];

impl Grid {
    /// Computes the next generation. Edges wrap, so a glider leaving the
    /// bottom row re-enters at the top.
    pub fn next_generation(&self) -> Grid {
        let size = self.size();
        let mut next = Grid::new(size);

        for (row, col, alive) in self.cells() {
            let count = self.live_neighbors(row, col);
            let next_state = match (alive, count) {
                (true, 2) | (true, 3) => true,   // Survival
                (false, 3)            => true,   // Birth
                _                     => false,  // Death or stays dead
            };
            if next_state {
                next.toggle(row, col);
            }
        }
        next
    }

    fn live_neighbors(&self, row: usize, col: usize) -> usize {
        let size = self.size();
        // Offsets are shifted by one so everything stays unsigned
        NEIGHBORS
            .iter()
            .filter(|&&(dr, dc)| {
                let r = (row + size + dr - 1) % size;
                let c = (col + size + dc - 1) % size;
                self.get(r, c).unwrap_or(false)
            })
            .count()
    }
}
