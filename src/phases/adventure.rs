//! The Adventure Phase engine.
//!
//! One run is one active player's turn: echo gain, drawing, upkeep,
//! summoning, movement, combat, and the end step. Steps execute in that
//! fixed order; a rejected sub-action never aborts the turn.

use tracing::{debug, info, warn};

use crate::cards::{CardKind, InstanceId, Keyword, Terrain};
use crate::core::player::PlayerId;
use crate::core::position::Position;
use crate::core::state::GameState;
use crate::phases::combat;
use crate::phases::upkeep;
use crate::policy::{
    CombatPrompt, DecisionPolicy, MoveOrder, MovementPrompt, StepNotice, SummonPrompt,
};

/// Runs one Adventure Phase turn for the active player.
pub struct AdventurePhase<'a> {
    state: &'a mut GameState,
    policies: [&'a mut dyn DecisionPolicy; 2],
}

impl<'a> AdventurePhase<'a> {
    /// Create the engine over shared state and both players' policies.
    pub fn new(state: &'a mut GameState, policies: [&'a mut dyn DecisionPolicy; 2]) -> Self {
        Self { state, policies }
    }

    /// Run the seven-step turn and advance to the opponent.
    pub fn run(&mut self) {
        let player = self.state.active;
        info!(%player, turn = self.state.turn, "adventure turn start");

        self.step_echo_gain(player);
        self.step_draw(player);
        self.step_maintenance(player);
        self.step_summoning(player);
        self.step_movement(player);
        self.step_combat(player);
        self.step_end(player);

        self.state.advance_turn();
        info!(%player, "adventure turn end");
    }

    /// The active player gains echoes equal to the turn number.
    fn step_echo_gain(&mut self, player: PlayerId) {
        self.state.gain_echoes();
        let amount = self.state.player(player).turn_echo_gain;
        self.policies[player.index()].notify(&StepNotice::EchoGain { player, amount });
        debug!(%player, amount, "gained echoes");
    }

    /// Draw up to the hero's adventure hand target.
    fn step_draw(&mut self, player: PlayerId) {
        let hand_size = self.state.draw_adventure_cards(player);
        self.policies[player.index()]
            .notify(&StepNotice::AdventureDraw { player, hand_size });
        debug!(%player, hand_size, "drew adventure cards");
    }

    /// Apply upkeep costs to every in-play card.
    fn step_maintenance(&mut self, player: PlayerId) {
        upkeep::pay_upkeep(self.state, player);
        self.policies[player.index()].notify(&StepNotice::Maintenance { player });
        debug!(%player, "maintenance complete");
    }

    /// Play cards from hand, routed by kind.
    ///
    /// Indices refer to the hand as it stands when each one is applied.
    /// An invalid index or an unaffordable cost skips that card; minions
    /// and the hero enter play at the gate and are tracked as summoned
    /// this turn.
    fn step_summoning(&mut self, player: PlayerId) {
        self.state.just_summoned.clear();

        let choice = self.policies[player.index()].choose_summons(&SummonPrompt { player });
        let mut summoned: Vec<String> = Vec::new();

        for index in choice.indices() {
            let hand = &self.state.player(player).hand;
            let Some(&instance) = hand.get(index) else {
                debug!(%player, index, "summon index out of range, skipped");
                continue;
            };

            let def = self.state.def_of(instance);
            let name = def.name.clone();
            let cost = def.kind.cost();
            let kind = match def.kind {
                CardKind::Minion(_) => SummonRoute::Minion,
                CardKind::Hero(_) => SummonRoute::Hero,
                CardKind::Relic(_) | CardKind::Gear(_) => SummonRoute::RelicHold,
                CardKind::Spell(_) | CardKind::Glyph(_) => SummonRoute::Immediate,
                CardKind::Gate(_) | CardKind::Ruin(_) => {
                    warn!(%player, card = %name, "unplayable kind in hand, skipped");
                    continue;
                }
            };

            if self.state.player(player).echoes < cost {
                debug!(%player, card = %name, cost, "cannot afford summon, skipped");
                continue;
            }

            match kind {
                SummonRoute::Minion => {
                    let Some(gate_pos) = self.state.gate_position(player) else {
                        warn!(%player, "no gate position, summon skipped");
                        continue;
                    };
                    self.state.player_mut(player).spend_echoes(cost);
                    self.state.player_mut(player).take_from_hand(index);
                    self.state.player_mut(player).staging.push(instance);
                    self.state.board.add_occupant(gate_pos, player, instance);
                    self.state.just_summoned.insert(instance);
                    summoned.push(name);
                }
                SummonRoute::Hero => {
                    if self.state.player(player).hero_area.is_some() {
                        debug!(%player, "hero already in play, summon skipped");
                        continue;
                    }
                    let Some(gate_pos) = self.state.gate_position(player) else {
                        warn!(%player, "no gate position, summon skipped");
                        continue;
                    };
                    self.state.player_mut(player).spend_echoes(cost);
                    self.state.player_mut(player).take_from_hand(index);
                    self.state.player_mut(player).hero_area = Some(instance);
                    self.state.board.add_occupant(gate_pos, player, instance);
                    self.state.just_summoned.insert(instance);
                    summoned.push(name);
                }
                SummonRoute::RelicHold => {
                    let capacity = self.relic_capacity(player);
                    self.state.player_mut(player).spend_echoes(cost);
                    self.state.player_mut(player).take_from_hand(index);
                    let evicted = self.state.player_mut(player).stash_relic(instance, capacity);
                    if let Some(old) = evicted {
                        debug!(%player, evicted = self.state.name_of(old), "relic hold full");
                        self.state.player_mut(player).adventure_discard.push_back(old);
                    }
                    summoned.push(name);
                }
                SummonRoute::Immediate => {
                    // Resolves on cast and goes straight to the discard
                    self.state.player_mut(player).spend_echoes(cost);
                    self.state.player_mut(player).take_from_hand(index);
                    self.state
                        .player_mut(player)
                        .adventure_discard
                        .push_back(instance);
                    summoned.push(name);
                }
            }
        }

        debug!(%player, ?summoned, "summoning complete");
    }

    fn relic_capacity(&self, player: PlayerId) -> usize {
        match &self.state.def_of(self.state.player(player).gate).kind {
            CardKind::Gate(g) => g.relic_hold,
            _ => 0,
        }
    }

    /// Execute the requested unit moves.
    ///
    /// Each move is a single orthogonal step onto a placed tile. The
    /// allowance is recomputed from the unit's base movement per move,
    /// halved when leaving Wetlands without the matching trait; the cost
    /// defaults to 1, raised by entry/exit penalties and zeroed by free
    /// movement.
    fn step_movement(&mut self, player: PlayerId) {
        self.state.moved_units.clear();

        let orders = self.policies[player.index()]
            .choose_moves(&MovementPrompt { player })
            .orders();
        if orders.is_empty() {
            debug!(%player, "no movement declared");
        }

        for order in orders {
            let Some(unit) = self.resolve_mover(player, &order) else {
                debug!(%player, from = %order.from, "no friendly unit at origin, skipped");
                continue;
            };

            if !self.state.board.in_bounds(order.to) {
                debug!(%player, to = %order.to, "destination out of bounds, skipped");
                continue;
            }
            if !order.from.is_orthogonal_step(order.to) {
                debug!(%player, from = %order.from, to = %order.to, "not an orthogonal step, skipped");
                continue;
            }
            if self.state.board.tile(order.to).is_none() {
                debug!(%player, to = %order.to, "no tile at destination, skipped");
                continue;
            }

            let cost = self.move_cost(unit, order.from, order.to);
            let remaining = self.move_allowance(unit, order.from);
            if remaining < cost {
                debug!(
                    %player,
                    unit = self.state.name_of(unit),
                    cost,
                    remaining,
                    "insufficient movement, skipped"
                );
                continue;
            }

            self.state.board.remove_occupant(order.from, unit);
            self.state.board.add_occupant(order.to, player, unit);
            self.state.moved_units.insert(unit);
            debug!(
                %player,
                unit = self.state.name_of(unit),
                from = %order.from,
                to = %order.to,
                "unit moved"
            );
        }
    }

    /// Resolve the acting unit at a move's origin.
    ///
    /// A unit name disambiguates stacked friendly units; otherwise the
    /// first friendly occupant acts.
    fn resolve_mover(&self, player: PlayerId, order: &MoveOrder) -> Option<InstanceId> {
        match &order.unit {
            Some(name) => self
                .state
                .board
                .occupants_at(order.from)
                .iter()
                .find(|o| o.owner == player && self.state.name_of(o.unit) == name)
                .map(|o| o.unit),
            None => self.state.board.first_friendly(order.from, player),
        }
    }

    /// Movement allowance for one move, from the unit's base stat.
    ///
    /// Leaving Wetlands without the matching trait forfeits half the
    /// allowance, rounded up.
    fn move_allowance(&self, unit: InstanceId, origin: Position) -> u32 {
        let kind = &self.state.def_of(unit).kind;
        let mut remaining = kind.movement();

        let origin_terrain = self
            .state
            .board
            .tile(origin)
            .and_then(|t| self.state.def(t.card).kind.terrain());
        if origin_terrain == Some(Terrain::Wetlands)
            && !kind.special_movement().contains(&Terrain::Wetlands)
        {
            remaining -= remaining.div_ceil(2);
        }
        remaining
    }

    /// Cost of one move between two tiles.
    fn move_cost(&self, unit: InstanceId, from: Position, to: Position) -> u32 {
        let special = self.state.def_of(unit).kind.special_movement();
        let mut cost = 1;

        if let Some(tile) = self.state.board.tile(from) {
            let def = self.state.def(tile.card);
            if let Some(exit_cost) = def.exit_penalty() {
                let exempt = def.kind.terrain().is_some_and(|t| special.contains(&t));
                if !exempt {
                    cost = cost.max(exit_cost);
                }
            }
        }
        if let Some(tile) = self.state.board.tile(to) {
            let def = self.state.def(tile.card);
            if let Some(entry_cost) = def.entry_penalty() {
                let exempt = def.kind.terrain().is_some_and(|t| special.contains(&t));
                if !exempt {
                    cost = cost.max(entry_cost);
                }
            }
        }

        let free = [from, to].iter().any(|&pos| {
            self.state
                .board
                .tile(pos)
                .is_some_and(|t| self.state.def(t.card).grants_free_movement())
        });
        if free {
            cost = 0;
        }
        cost
    }

    /// Resolve the declared attacks.
    ///
    /// An attack with no defender at the target strikes the opponent's
    /// gate if the target is its position. Unit combat rejects summoning
    /// sickness (without Bloodlust), screened Backline defenders, and
    /// targets beyond Chebyshev range 1.
    fn step_combat(&mut self, player: PlayerId) {
        self.state.attacked_units.clear();

        let orders = self.policies[player.index()]
            .choose_attacks(&CombatPrompt { player })
            .orders();
        if orders.is_empty() {
            debug!(%player, "no attacks declared");
        }

        for order in orders {
            let Some(attacker) = self.state.board.first_friendly(order.from, player) else {
                debug!(%player, from = %order.from, "no attacker at origin, skipped");
                continue;
            };

            let Some(defender) = self.state.board.first_enemy(order.to, player) else {
                let opponent = player.opponent();
                if self.state.gate_position(opponent) == Some(order.to) {
                    combat::resolve_gate_strike(self.state, attacker, opponent);
                    self.state.attacked_units.insert(attacker);
                }
                continue;
            };

            if self.state.just_summoned.contains(&attacker)
                && !self.state.def_of(attacker).has_keyword(Keyword::Bloodlust)
            {
                debug!(
                    attacker = self.state.name_of(attacker),
                    "summoned this turn without Bloodlust, cannot attack"
                );
                continue;
            }
            if self.state.def_of(defender).has_keyword(Keyword::Backline)
                && self
                    .state
                    .board
                    .has_other_enemy_at(order.to, player, defender)
            {
                debug!(
                    defender = self.state.name_of(defender),
                    "Backline defender is screened, cannot target"
                );
                continue;
            }
            if order.from.chebyshev_distance(order.to) > 1 {
                debug!(from = %order.from, to = %order.to, "defender out of range, skipped");
                continue;
            }

            let outcome = combat::resolve_unit_combat(self.state, attacker, defender);
            self.state.attacked_units.insert(attacker);
            debug!(%player, ?outcome, "combat resolved");
        }
    }

    /// Grant Fortify buffs, then run end-of-turn cleanup.
    ///
    /// Fortify: every active-player occupant with the keyword that
    /// neither moved nor attacked gains +1 defense until the opponent's
    /// end step. Cleanup discards down to the adventure hand size,
    /// strips the buff from the opponent's units (granted one full turn
    /// ago), and clears the fortified set.
    fn step_end(&mut self, player: PlayerId) {
        let mut to_fortify = Vec::new();
        for (_, occupant) in self.state.board.all_occupants() {
            if occupant.owner != player {
                continue;
            }
            if !self.state.def_of(occupant.unit).has_keyword(Keyword::Fortify) {
                continue;
            }
            if self.state.moved_units.contains(&occupant.unit)
                || self.state.attacked_units.contains(&occupant.unit)
            {
                continue;
            }
            to_fortify.push(occupant.unit);
        }
        for unit in to_fortify {
            if let Some(instance) = self.state.unit_mut(unit) {
                instance.temp_defense = 1;
            }
            self.state.fortified_units.insert(unit);
            debug!(unit = self.state.name_of(unit), "fortified");
        }

        let limit = self.state.adventure_hand_target(player);
        self.state.player_mut(player).discard_down_to(limit);

        // The opponent's buffs were granted at their own end step and
        // have now lasted one full turn
        let opponent = player.opponent();
        let mut expired: Vec<InstanceId> =
            self.state.player(opponent).hero_area.into_iter().collect();
        expired.extend(self.state.player(opponent).staging.iter().copied());
        for unit in expired {
            if let Some(instance) = self.state.unit_mut(unit) {
                instance.temp_defense = 0;
            }
        }
        self.state.fortified_units.clear();

        self.policies[player.index()].notify(&StepNotice::EndStep { player });
        debug!(%player, "end of turn cleanup complete");
    }
}

/// Routing for a summoned card, derived from its kind.
#[derive(Clone, Copy, Debug)]
enum SummonRoute {
    Minion,
    Hero,
    RelicHold,
    Immediate,
}
