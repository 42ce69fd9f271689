//! The session driver.
//!
//! Holds the shared state and both decision policies, broadcasts
//! snapshots before each mutating phase, and sequences the phase
//! engines. Both engines stay independently callable: the driver offers
//! the original explore-until-connected session and a full match that
//! continues into adventure turns.

use tracing::info;

use crate::core::player::PlayerId;
use crate::core::state::GameState;
use crate::phases::{AdventurePhase, ExploreOutcome, ExplorePhase, PhaseKind};
use crate::policy::DecisionPolicy;
use crate::snapshot::Snapshot;
use crate::victory::{adventure_victory, Victory};
use serde::{Deserialize, Serialize};

/// Terminal result of a session.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameEnd {
    pub winner: PlayerId,
    pub phase: PhaseKind,
}

/// Drives a two-player session over the phase engines.
pub struct Driver {
    state: GameState,
    policies: [Box<dyn DecisionPolicy>; 2],
}

impl Driver {
    /// Create a driver over a prepared state and both policies.
    #[must_use]
    pub fn new(
        state: GameState,
        first: Box<dyn DecisionPolicy>,
        second: Box<dyn DecisionPolicy>,
    ) -> Self {
        Self {
            state,
            policies: [first, second],
        }
    }

    /// The current game state.
    #[must_use]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Consume the driver and return the final state.
    #[must_use]
    pub fn into_state(self) -> GameState {
        self.state
    }

    fn broadcast_snapshot(&mut self) {
        let snapshot = Snapshot::capture(&self.state);
        for policy in &mut self.policies {
            policy.observe(&snapshot);
        }
    }

    /// Run one explore round, snapshotting first.
    pub fn run_explore_round(&mut self) -> ExploreOutcome {
        self.broadcast_snapshot();
        let [first, second] = &mut self.policies;
        ExplorePhase::new(&mut self.state, [first.as_mut(), second.as_mut()]).run()
    }

    /// Run one adventure turn for the active player, snapshotting first.
    pub fn run_adventure_turn(&mut self) {
        self.broadcast_snapshot();
        let [first, second] = &mut self.policies;
        AdventurePhase::new(&mut self.state, [first.as_mut(), second.as_mut()]).run();
    }

    /// Repeat explore rounds until the gates connect.
    ///
    /// The session ends there, the player holding the next turn taking
    /// the win.
    pub fn run_explore_session(&mut self) -> GameEnd {
        loop {
            let outcome = self.run_explore_round();
            if outcome.path_connected {
                let end = GameEnd {
                    winner: self.state.active,
                    phase: PhaseKind::Explore,
                };
                self.broadcast_snapshot();
                info!(winner = %end.winner, "explore session complete");
                return end;
            }
        }
    }

    /// Play a full match: explore until the gates connect, then
    /// adventure turns until a win condition fires.
    ///
    /// Deck exhaustion guarantees termination: every adventure turn
    /// draws while the deck lasts, and an empty deck decides the game.
    pub fn run_match(&mut self) -> GameEnd {
        loop {
            let outcome = self.run_explore_round();
            if outcome.path_connected {
                break;
            }
        }
        info!("gates connected, entering adventure phase");

        loop {
            self.run_adventure_turn();
            if let Some(victory) = adventure_victory(&self.state) {
                self.broadcast_snapshot();
                let Victory { winner, condition } = victory;
                info!(%winner, ?condition, "match complete");
                return GameEnd {
                    winner,
                    phase: PhaseKind::Adventure,
                };
            }
        }
    }
}
