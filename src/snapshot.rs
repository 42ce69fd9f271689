//! Read-only state snapshots for the presentation boundary.
//!
//! A `Snapshot` is captured after any mutating step and handed to
//! observers. It resolves card names so a renderer needs no catalog
//! access, and it exposes only public information plus each side's own
//! counts.

use serde::{Deserialize, Serialize};

use crate::cards::{CardId, InstanceId};
use crate::core::player::{PlayerId, PlayerPair};
use crate::core::position::Position;
use crate::core::state::GameState;

/// One placed tile, as seen by a renderer.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TileView {
    pub pos: Position,
    pub card: CardId,
    pub name: String,
    pub face_up: bool,
}

/// One unit standing on the board.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct OccupantView {
    pub pos: Position,
    pub owner: PlayerId,
    pub unit: InstanceId,
    pub name: String,
    pub health: i32,
}

/// One player's public zone counts.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerView {
    pub echoes: u32,
    pub hand_size: usize,
    pub explore_deck_size: usize,
    pub adventure_deck_size: usize,
    pub staging_size: usize,
    pub relic_count: usize,
    pub hero_health: Option<i32>,
    pub gate_health: i32,
    pub gate_position: Option<Position>,
}

/// A read-only snapshot of the whole game state.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    pub turn: u32,
    pub active: PlayerId,
    pub rows: i16,
    pub cols: i16,
    pub tiles: Vec<TileView>,
    pub occupants: Vec<OccupantView>,
    pub players: PlayerPair<PlayerView>,
}

impl Snapshot {
    /// Capture the current state.
    #[must_use]
    pub fn capture(state: &GameState) -> Self {
        let mut tiles: Vec<TileView> = state
            .board
            .all_tiles()
            .map(|(pos, tile)| TileView {
                pos,
                card: tile.card,
                name: state.def(tile.card).name.clone(),
                face_up: tile.face_up,
            })
            .collect();
        tiles.sort_by_key(|t| (t.pos.row, t.pos.col));

        let mut occupants: Vec<OccupantView> = state
            .board
            .all_occupants()
            .map(|(pos, occ)| OccupantView {
                pos,
                owner: occ.owner,
                unit: occ.unit,
                name: state.name_of(occ.unit).to_string(),
                health: state.unit(occ.unit).map_or(0, |u| u.health),
            })
            .collect();
        occupants.sort_by_key(|o| (o.pos.row, o.pos.col, o.unit.raw()));

        let players = PlayerPair::from_fn(|player| {
            let zones = state.player(player);
            PlayerView {
                echoes: zones.echoes,
                hand_size: zones.hand.len(),
                explore_deck_size: zones.explore_deck.len(),
                adventure_deck_size: zones.adventure_deck.len(),
                staging_size: zones.staging.len(),
                relic_count: zones.relic_area.len(),
                hero_health: zones
                    .hero_area
                    .and_then(|hero| state.unit(hero))
                    .map(|u| u.health),
                gate_health: state.unit(zones.gate).map_or(0, |u| u.health),
                gate_position: state.gate_position(player),
            }
        });

        Self {
            turn: state.turn,
            active: state.active,
            rows: state.board.rows(),
            cols: state.board.cols(),
            tiles,
            occupants,
            players,
        }
    }
}
