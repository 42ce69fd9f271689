//! Win-condition queries.
//!
//! Pure functions over `GameState`, evaluated by the driver after each
//! turn; the phase engines never invoke them.

use serde::{Deserialize, Serialize};

use crate::core::player::PlayerId;
use crate::core::state::GameState;

/// Echo count that wins the game outright.
pub const ECHO_VICTORY_THRESHOLD: u32 = 50;

/// How a game was won.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VictoryCondition {
    /// The loser's gate health reached zero.
    GateDestroyed,
    /// The winner's hero stands on the loser's gate.
    GateOccupied,
    /// The winner reached the echo threshold.
    EchoThreshold,
    /// The loser's adventure deck ran out.
    DeckExhausted,
    /// The explore phase completed a gate-to-gate path.
    PathCompleted,
}

/// A decided game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Victory {
    pub winner: PlayerId,
    pub condition: VictoryCondition,
}

/// Evaluate the adventure win conditions, in priority order.
///
/// Gate destruction, then hero occupation of the enemy gate, then the
/// echo threshold, then adventure-deck exhaustion. Returns `None` while
/// the game continues.
#[must_use]
pub fn adventure_victory(state: &GameState) -> Option<Victory> {
    for player in PlayerId::both() {
        let gate = state.player(player).gate;
        if state.unit(gate).is_some_and(|g| g.health <= 0) {
            return Some(Victory {
                winner: player.opponent(),
                condition: VictoryCondition::GateDestroyed,
            });
        }
    }

    for player in PlayerId::both() {
        let hero = state.player(player).hero;
        let Some(gate_pos) = state.gate_position(player.opponent()) else {
            continue;
        };
        let occupying = state
            .board
            .occupants_at(gate_pos)
            .iter()
            .any(|o| o.owner == player && o.unit == hero);
        if occupying {
            return Some(Victory {
                winner: player,
                condition: VictoryCondition::GateOccupied,
            });
        }
    }

    for player in PlayerId::both() {
        if state.player(player).echoes >= ECHO_VICTORY_THRESHOLD {
            return Some(Victory {
                winner: player,
                condition: VictoryCondition::EchoThreshold,
            });
        }
    }

    for player in PlayerId::both() {
        if state.player(player).adventure_deck.is_empty() {
            return Some(Victory {
                winner: player.opponent(),
                condition: VictoryCondition::DeckExhausted,
            });
        }
    }

    None
}
