//! The tile grid and its occupants.
//!
//! A `Board` maps positions to placed tiles (a gate or ruin card plus a
//! face-up flag) and, separately, to the units standing there. A position
//! holds at most one tile; it may hold any number of occupants.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::cards::{CardId, InstanceId};
use crate::core::player::PlayerId;
use crate::core::position::Position;

/// A placed tile: a gate or ruin card and its revealed state.
///
/// Face-down tiles do not count toward placement adjacency or path
/// connectivity.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tile {
    /// The gate or ruin card occupying this position.
    pub card: CardId,
    /// Whether the tile has been revealed.
    pub face_up: bool,
}

/// A unit standing on a tile.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Occupant {
    /// The player controlling the unit.
    pub owner: PlayerId,
    /// The unit instance.
    pub unit: InstanceId,
}

/// The game board: a bounded grid of tiles plus a multi-occupancy map.
#[derive(Clone, Debug, Default)]
pub struct Board {
    rows: i16,
    cols: i16,
    tiles: FxHashMap<Position, Tile>,
    occupants: FxHashMap<Position, Vec<Occupant>>,
}

impl Board {
    /// Create an empty board with the given dimensions.
    #[must_use]
    pub fn new(rows: i16, cols: i16) -> Self {
        assert!(rows > 0 && cols > 0, "Board must have positive dimensions");
        Self {
            rows,
            cols,
            tiles: FxHashMap::default(),
            occupants: FxHashMap::default(),
        }
    }

    /// Number of rows.
    #[must_use]
    pub fn rows(&self) -> i16 {
        self.rows
    }

    /// Number of columns.
    #[must_use]
    pub fn cols(&self) -> i16 {
        self.cols
    }

    /// Whether a position lies on the grid.
    #[must_use]
    pub fn in_bounds(&self, pos: Position) -> bool {
        (0..self.rows).contains(&pos.row) && (0..self.cols).contains(&pos.col)
    }

    /// Whether any tile has been placed yet.
    #[must_use]
    pub fn has_tiles(&self) -> bool {
        !self.tiles.is_empty()
    }

    /// Get the tile at a position, if one has been placed.
    #[must_use]
    pub fn tile(&self, pos: Position) -> Option<&Tile> {
        self.tiles.get(&pos)
    }

    /// Place a tile at an empty position.
    ///
    /// Panics if the position already holds a tile; callers validate
    /// occupancy before placing.
    pub fn place_tile(&mut self, pos: Position, card: CardId, face_up: bool) {
        let previous = self.tiles.insert(pos, Tile { card, face_up });
        assert!(previous.is_none(), "Position {pos} already holds a tile");
    }

    /// Whether any Chebyshev neighbor of `pos` holds a face-up tile.
    ///
    /// This is the placement-legality check; it looks only at immediate
    /// neighbors, independent of full path connectivity.
    #[must_use]
    pub fn has_face_up_neighbor(&self, pos: Position) -> bool {
        pos.chebyshev_neighbors()
            .any(|n| self.tiles.get(&n).is_some_and(|t| t.face_up))
    }

    /// Flip every face-down tile face-up.
    ///
    /// Returns the newly revealed tiles in deterministic (row, col) order.
    pub fn reveal_all(&mut self) -> Vec<(Position, CardId)> {
        let mut revealed: Vec<(Position, CardId)> = self
            .tiles
            .iter_mut()
            .filter(|(_, tile)| !tile.face_up)
            .map(|(pos, tile)| {
                tile.face_up = true;
                (*pos, tile.card)
            })
            .collect();
        revealed.sort_by_key(|(pos, _)| (pos.row, pos.col));
        revealed
    }

    /// The occupants at a position, in arrival order.
    #[must_use]
    pub fn occupants_at(&self, pos: Position) -> &[Occupant] {
        self.occupants.get(&pos).map_or(&[], Vec::as_slice)
    }

    /// Add a unit to a position's occupant list.
    pub fn add_occupant(&mut self, pos: Position, owner: PlayerId, unit: InstanceId) {
        self.occupants
            .entry(pos)
            .or_default()
            .push(Occupant { owner, unit });
    }

    /// Remove a unit from a position's occupant list.
    ///
    /// Returns true if the unit was standing there.
    pub fn remove_occupant(&mut self, pos: Position, unit: InstanceId) -> bool {
        if let Some(list) = self.occupants.get_mut(&pos) {
            if let Some(idx) = list.iter().position(|o| o.unit == unit) {
                list.remove(idx);
                return true;
            }
        }
        false
    }

    /// Find the position a unit is standing at, if any.
    #[must_use]
    pub fn unit_position(&self, unit: InstanceId) -> Option<Position> {
        self.occupants
            .iter()
            .find(|(_, list)| list.iter().any(|o| o.unit == unit))
            .map(|(pos, _)| *pos)
    }

    /// First occupant at `pos` controlled by `player`.
    #[must_use]
    pub fn first_friendly(&self, pos: Position, player: PlayerId) -> Option<InstanceId> {
        self.occupants_at(pos)
            .iter()
            .find(|o| o.owner == player)
            .map(|o| o.unit)
    }

    /// First occupant at `pos` not controlled by `player`.
    #[must_use]
    pub fn first_enemy(&self, pos: Position, player: PlayerId) -> Option<InstanceId> {
        self.occupants_at(pos)
            .iter()
            .find(|o| o.owner != player)
            .map(|o| o.unit)
    }

    /// Whether another unit hostile to `player` shares `pos` with `unit`.
    ///
    /// Used by the Backline screen check.
    #[must_use]
    pub fn has_other_enemy_at(&self, pos: Position, player: PlayerId, unit: InstanceId) -> bool {
        self.occupants_at(pos)
            .iter()
            .any(|o| o.owner != player && o.unit != unit)
    }

    /// Iterate over all (position, occupant) pairs.
    pub fn all_occupants(&self) -> impl Iterator<Item = (Position, Occupant)> + '_ {
        self.occupants
            .iter()
            .flat_map(|(pos, list)| list.iter().map(move |o| (*pos, *o)))
    }

    /// Iterate over all placed tiles.
    pub fn all_tiles(&self) -> impl Iterator<Item = (Position, &Tile)> {
        self.tiles.iter().map(|(pos, tile)| (*pos, tile))
    }
}
