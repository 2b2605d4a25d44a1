// lib.rs - Grid store and step rule for Conway's Game of Life
//
// The grid is the only state shared between the desktop client and the
// step server. It travels over the wire as a bare JSON matrix of booleans.

mod error;
mod grid;
mod rule;

pub use error::GridError;
pub use grid::{DEFAULT_GRID_SIZE, Grid, Row};
