//! Board model: the tile grid, unit occupancy, and connectivity search.

pub mod grid;
pub mod path;

pub use grid::{Board, Occupant, Tile};
pub use path::connected;
