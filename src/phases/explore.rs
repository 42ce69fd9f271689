//! The Explore Phase engine.
//!
//! One run is one full round of board revelation: gate placement (first
//! round only), drawing, alternating face-down tile placement, reveal
//! with connection effects, and the gate-to-gate path check. The engine
//! reports the path result and leaves acting on it to the driver.

use tracing::{debug, info, warn};

use crate::board::path;
use crate::core::player::{PlayerId, PlayerPair};
use crate::core::position::Position;
use crate::core::state::GameState;
use crate::policy::{DecisionPolicy, PlacementChoice, PlacementPrompt, StepNotice};

/// Result of one explore round.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExploreOutcome {
    /// Whether a face-up path now connects the two gates.
    pub path_connected: bool,
    /// Connection-effect descriptions triggered during reveal.
    pub triggered_effects: Vec<String>,
}

/// Runs one round of the Explore Phase.
pub struct ExplorePhase<'a> {
    state: &'a mut GameState,
    policies: [&'a mut dyn DecisionPolicy; 2],
}

impl<'a> ExplorePhase<'a> {
    /// Create the engine over shared state and both players' policies.
    pub fn new(state: &'a mut GameState, policies: [&'a mut dyn DecisionPolicy; 2]) -> Self {
        Self { state, policies }
    }

    /// Run the six-step round and advance the turn.
    pub fn run(&mut self) -> ExploreOutcome {
        info!(turn = self.state.turn, "explore round start");

        self.step_gate_placement();
        self.step_draw();
        self.step_placement();
        let triggered_effects = self.step_reveal_and_resolve();
        let path_connected = self.step_path_check();

        self.state.advance_turn();
        info!(turn = self.state.turn, path_connected, "explore round end");

        ExploreOutcome {
            path_connected,
            triggered_effects,
        }
    }

    fn notify_both(&mut self, notice: &StepNotice) {
        for policy in &mut self.policies {
            policy.notify(notice);
        }
    }

    /// Place both gates and heroes on an empty board.
    ///
    /// Idempotent: only the first round finds the board without tiles.
    /// Player 1's gate sits bottom-center, player 2's top-center.
    fn step_gate_placement(&mut self) {
        if !self.state.board.has_tiles() {
            let rows = self.state.board.rows();
            let cols = self.state.board.cols();
            let positions = PlayerPair::new(
                Position::new(rows - 1, cols / 2),
                Position::new(0, cols / 2),
            );

            for player in PlayerId::both() {
                let pos = positions[player];
                let gate = self.state.player(player).gate;
                let hero = self.state.player(player).hero;
                let gate_card = self.state.card_of(gate);

                self.state.board.place_tile(pos, gate_card, true);
                self.state.board.add_occupant(pos, player, hero);
                self.state.set_gate_position(player, pos);
            }
            debug!("both gates placed");
        }

        self.notify_both(&StepNotice::GatePlacement);
    }

    /// Each player draws up to their gate's explore hand target.
    fn step_draw(&mut self) {
        for player in PlayerId::both() {
            let hand_size = self.state.draw_explore_cards(player);
            self.policies[player.index()]
                .notify(&StepNotice::ExploreDraw { player, hand_size });
        }
        debug!("explore draw step complete");
    }

    /// Alternating face-down ruin placement until both players pass.
    ///
    /// The active player leads. An out-of-range hand index forces a pass
    /// for the rest of the round; an illegal target (occupied, out of
    /// bounds, no adjacent face-up tile) is rejected without a forced
    /// pass and without touching the hand. The round also ends when a
    /// full pass of prompting produced no placement.
    fn step_placement(&mut self) {
        let mut order = [PlayerId::ONE, PlayerId::TWO];
        if self.state.active == PlayerId::TWO {
            order.reverse();
        }

        let mut passed = PlayerPair::new(false, false);
        let mut any_placed = true;

        while any_placed && !(passed[PlayerId::ONE] && passed[PlayerId::TWO]) {
            any_placed = false;
            for &player in &order {
                if passed[player] {
                    continue;
                }

                let choice = self.policies[player.index()]
                    .choose_placement(&PlacementPrompt { player });

                let (card_index, pos) = match choice {
                    PlacementChoice::Pass { .. } => {
                        passed[player] = true;
                        debug!(%player, "passed on placing a ruin");
                        continue;
                    }
                    PlacementChoice::Place { card_index, pos } => (card_index, pos),
                };

                if card_index >= self.state.player(player).hand.len() {
                    warn!(%player, card_index, "invalid hand index, forced pass");
                    passed[player] = true;
                    continue;
                }
                if !self.state.board.in_bounds(pos) {
                    warn!(%player, %pos, "placement out of bounds, rejected");
                    continue;
                }
                if self.state.board.tile(pos).is_some() {
                    warn!(%player, %pos, "position already holds a tile, rejected");
                    continue;
                }
                if !self.state.board.has_face_up_neighbor(pos) {
                    debug!(%player, %pos, "no face-up neighbor, rejected");
                    continue;
                }

                let Some(instance) = self.state.player_mut(player).take_from_hand(card_index)
                else {
                    continue;
                };
                let Some(card) = self.state.consume_instance(instance) else {
                    continue;
                };

                // Face down, no occupants yet
                self.state.board.place_tile(pos, card, false);
                any_placed = true;
                debug!(%player, card = %card, %pos, "placed a ruin face down");
            }
        }

        // Mulligan: remaining hand cards return to the deck bottom
        for player in PlayerId::both() {
            self.state.player_mut(player).mulligan_hand();
        }
    }

    /// Flip every face-down tile and resolve connection effects.
    ///
    /// A newly revealed tile checks each face-up Chebyshev neighbor in
    /// both directions: either card may declare a connection bonus that
    /// the other's terrain or sub-terrain satisfies. The triggered
    /// descriptions are informational and broadcast to both players.
    fn step_reveal_and_resolve(&mut self) -> Vec<String> {
        let revealed = self.state.board.reveal_all();
        let mut effects = Vec::new();

        for &(pos, card) in &revealed {
            for neighbor in pos.chebyshev_neighbors() {
                let Some(tile) = self.state.board.tile(neighbor) else {
                    continue;
                };
                if !tile.face_up {
                    continue;
                }

                let card_def = self.state.def(card);
                let neighbor_def = self.state.def(tile.card);

                for terrain in card_def.connection_bonuses() {
                    if neighbor_def.kind.terrain() == Some(terrain)
                        || neighbor_def.kind.sub_terrain() == Some(terrain)
                    {
                        effects.push(format!(
                            "{} connected to {:?}",
                            card_def.name, terrain
                        ));
                    }
                }
                for terrain in neighbor_def.connection_bonuses() {
                    if card_def.kind.terrain() == Some(terrain)
                        || card_def.kind.sub_terrain() == Some(terrain)
                    {
                        effects.push(format!(
                            "{} connected to {:?}",
                            neighbor_def.name, terrain
                        ));
                    }
                }
            }
        }

        debug!(revealed = revealed.len(), effects = effects.len(), "reveal step complete");
        self.notify_both(&StepNotice::Reveal {
            effects: effects.clone(),
        });
        effects
    }

    /// Check for a face-up path between the two gates.
    fn step_path_check(&mut self) -> bool {
        let (Some(start), Some(goal)) = (
            self.state.gate_position(PlayerId::ONE),
            self.state.gate_position(PlayerId::TWO),
        ) else {
            return false;
        };

        let connected = path::connected(&self.state.board, start, goal);
        debug!(connected, "path check between gates");
        connected
    }
}
