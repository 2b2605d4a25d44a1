/// Ways a matrix can fail to be a usable grid.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GridError {
    /// The matrix has no rows.
    #[error("grid has no rows")]
    Empty,

    /// A row does not have as many cells as there are rows.
    #[error("row {row} has {len} cells, expected {expected}")]
    Ragged {
        /// Index of the first offending row.
        row: usize,
        /// Length of that row.
        len: usize,
        /// The grid dimension.
        expected: usize,
    },

    /// A well-formed grid of the wrong dimension.
    #[error("grid is {actual}x{actual}, expected {expected}x{expected}")]
    Size {
        /// Dimension of the grid being held.
        expected: usize,
        /// Dimension of the grid that was offered.
        actual: usize,
    },
}
