//! Grid positions and the two adjacency relations.
//!
//! The board uses two distinct neighbor relations that must not be
//! conflated:
//!
//! - **Orthogonal** (4-directional): unit movement steps.
//! - **Chebyshev** (8-directional): tile placement legality, connection
//!   scanning on reveal, combat range, and gate-to-gate path connectivity.

use serde::{Deserialize, Serialize};

/// A (row, column) coordinate on the tile grid.
///
/// Serializes as a `(row, col)` pair to match the wire shape of
/// placement and movement payloads.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "(i16, i16)", into = "(i16, i16)")]
pub struct Position {
    /// Row index, 0 at the top edge.
    pub row: i16,
    /// Column index, 0 at the left edge.
    pub col: i16,
}

impl Position {
    /// Create a new position.
    #[must_use]
    pub const fn new(row: i16, col: i16) -> Self {
        Self { row, col }
    }

    /// The four orthogonal neighbors (up, down, left, right).
    ///
    /// Movement steps use this relation.
    #[must_use]
    pub fn orthogonal_neighbors(self) -> [Position; 4] {
        [
            Position::new(self.row - 1, self.col),
            Position::new(self.row + 1, self.col),
            Position::new(self.row, self.col - 1),
            Position::new(self.row, self.col + 1),
        ]
    }

    /// The eight Chebyshev neighbors (orthogonal plus diagonal).
    ///
    /// Placement legality, reveal scanning, combat range, and path
    /// connectivity use this relation.
    pub fn chebyshev_neighbors(self) -> impl Iterator<Item = Position> {
        let center = self;
        (-1..=1).flat_map(move |dr| {
            (-1..=1).filter_map(move |dc| {
                if dr == 0 && dc == 0 {
                    None
                } else {
                    Some(Position::new(center.row + dr, center.col + dc))
                }
            })
        })
    }

    /// Chebyshev (king-move) distance to another position.
    #[must_use]
    pub fn chebyshev_distance(self, other: Position) -> i16 {
        let dr = (self.row - other.row).abs();
        let dc = (self.col - other.col).abs();
        dr.max(dc)
    }

    /// Whether `other` is exactly one orthogonal step away.
    #[must_use]
    pub fn is_orthogonal_step(self, other: Position) -> bool {
        let dr = (self.row - other.row).abs();
        let dc = (self.col - other.col).abs();
        dr + dc == 1
    }
}

impl From<(i16, i16)> for Position {
    fn from((row, col): (i16, i16)) -> Self {
        Self::new(row, col)
    }
}

impl From<Position> for (i16, i16) {
    fn from(pos: Position) -> Self {
        (pos.row, pos.col)
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}
