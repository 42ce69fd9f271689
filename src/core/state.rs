//! Game state: the board, the instance arena, and per-player zones.
//!
//! One `GameState` is created at game start from the catalog and the two
//! players' deck choices, mutated exclusively by the phase engines, and
//! dropped when the driver ends the session. Card instances live in an
//! arena keyed by `InstanceId`; zones and occupant lists refer to them by
//! id, so every instance is in exactly one place at a time.
//!
//! The four turn-scoped sets (`moved_units`, `attacked_units`,
//! `just_summoned`, `fortified_units`) are explicit fields; each is reset
//! at the start of the step that owns it.

use rustc_hash::{FxHashMap, FxHashSet};

use crate::board::Board;
use crate::cards::{CardCatalog, CardDefinition, CardId, CardInstance, CardKind, InstanceId};
use crate::core::player::{PlayerId, PlayerPair};
use crate::core::position::Position;
use crate::core::rng::GameRng;
use crate::error::SetupError;
use crate::zones::PlayerZones;

/// Board dimensions and deck size for a game.
#[derive(Clone, Copy, Debug)]
pub struct GameOptions {
    pub rows: i16,
    pub cols: i16,
    /// Cards sampled into each explore and adventure deck.
    pub deck_size: usize,
}

impl Default for GameOptions {
    fn default() -> Self {
        Self {
            rows: 7,
            cols: 7,
            deck_size: 40,
        }
    }
}

/// One player's deck choice: a hero and a gate from the catalog.
#[derive(Clone, Copy, Debug)]
pub struct PlayerSetup {
    pub hero: CardId,
    pub gate: CardId,
}

/// Complete game state shared by both phase engines.
#[derive(Clone, Debug)]
pub struct GameState {
    /// Turn counter, starting at 1.
    pub turn: u32,

    /// The player whose turn it is.
    pub active: PlayerId,

    /// The tile grid and its occupants.
    pub board: Board,

    /// Gate positions, set once during gate placement.
    gate_positions: PlayerPair<Option<Position>>,

    players: PlayerPair<PlayerZones>,

    /// Instance arena: every card instance in the game.
    units: FxHashMap<InstanceId, CardInstance>,

    catalog: CardCatalog,

    /// Deck-building RNG.
    pub rng: GameRng,

    /// Units that moved this turn; reset at the start of the movement step.
    pub moved_units: FxHashSet<InstanceId>,

    /// Units that attacked this turn; reset at the start of the combat step.
    pub attacked_units: FxHashSet<InstanceId>,

    /// Units put into play this turn; reset at the start of the summoning
    /// step. Drives the summoning-sickness check.
    pub just_summoned: FxHashSet<InstanceId>,

    /// Units granted a Fortify buff this turn; reset during end-of-turn
    /// cleanup.
    pub fortified_units: FxHashSet<InstanceId>,

    next_instance: u32,
}

fn spawn_into(
    units: &mut FxHashMap<InstanceId, CardInstance>,
    next_instance: &mut u32,
    catalog: &CardCatalog,
    card: CardId,
    owner: PlayerId,
) -> InstanceId {
    let health = catalog.def(card).kind.starting_health();
    let id = InstanceId::new(*next_instance);
    *next_instance += 1;
    units.insert(id, CardInstance::new(id, card, owner, health));
    id
}

impl GameState {
    /// Create a game from the catalog and both players' deck choices.
    ///
    /// Builds and shuffles each player's explore deck (distinct ruins)
    /// and adventure deck (distinct cards whose element requirements fit
    /// the chosen hero). Fails if the catalog cannot supply full decks.
    pub fn new(
        catalog: CardCatalog,
        setups: PlayerPair<PlayerSetup>,
        options: GameOptions,
        seed: u64,
    ) -> Result<Self, SetupError> {
        let mut units = FxHashMap::default();
        let mut next_instance = 0u32;
        let mut rng = GameRng::new(seed);

        let mut build_player = |player: PlayerId| -> Result<PlayerZones, SetupError> {
            let setup = setups[player];

            let hero_def = catalog
                .get(setup.hero)
                .filter(|d| matches!(d.kind, CardKind::Hero(_)))
                .ok_or(SetupError::NotAHero(setup.hero))?;
            let gate_def = catalog
                .get(setup.gate)
                .filter(|d| matches!(d.kind, CardKind::Gate(_)))
                .ok_or(SetupError::NotAGate(setup.gate))?;

            let starting_echoes = match &gate_def.kind {
                CardKind::Gate(g) => g.starting_echoes,
                _ => unreachable!(),
            };
            let hero_elements = match &hero_def.kind {
                CardKind::Hero(h) => h.elements.clone(),
                _ => unreachable!(),
            };

            if catalog.ruins().len() < options.deck_size {
                return Err(SetupError::NotEnoughRuins {
                    needed: options.deck_size,
                    available: catalog.ruins().len(),
                });
            }

            let eligible: Vec<CardId> = catalog
                .adventure_pool()
                .iter()
                .copied()
                .filter(|&id| {
                    catalog
                        .def(id)
                        .kind
                        .elements()
                        .iter()
                        .all(|e| hero_elements.contains(e))
                })
                .collect();

            if eligible.len() < options.deck_size {
                return Err(SetupError::NotEnoughAdventureCards {
                    needed: options.deck_size,
                    available: eligible.len(),
                });
            }

            let hero = spawn_into(&mut units, &mut next_instance, &catalog, setup.hero, player);
            let gate = spawn_into(&mut units, &mut next_instance, &catalog, setup.gate, player);

            let mut zones = PlayerZones::new(hero, gate, starting_echoes);

            for card in rng.sample(catalog.ruins(), options.deck_size) {
                let instance =
                    spawn_into(&mut units, &mut next_instance, &catalog, card, player);
                zones.explore_deck.push_back(instance);
            }
            for card in rng.sample(&eligible, options.deck_size) {
                let instance =
                    spawn_into(&mut units, &mut next_instance, &catalog, card, player);
                zones.adventure_deck.push_back(instance);
            }

            Ok(zones)
        };

        let first = build_player(PlayerId::ONE)?;
        let second = build_player(PlayerId::TWO)?;

        Ok(Self {
            turn: 1,
            active: PlayerId::ONE,
            board: Board::new(options.rows, options.cols),
            gate_positions: PlayerPair::default(),
            players: PlayerPair::new(first, second),
            units,
            catalog,
            rng,
            moved_units: FxHashSet::default(),
            attacked_units: FxHashSet::default(),
            just_summoned: FxHashSet::default(),
            fortified_units: FxHashSet::default(),
            next_instance,
        })
    }

    /// Each player draws up to their gate's explore hand target.
    pub fn deal_starting_hands(&mut self) {
        for player in PlayerId::both() {
            let target = self.explore_hand_target(player);
            let zones = &mut self.players[player];
            while zones.hand.len() < target && zones.draw_explore().is_some() {}
        }
    }

    // === Lookups ===

    /// The immutable card catalog.
    #[must_use]
    pub fn catalog(&self) -> &CardCatalog {
        &self.catalog
    }

    /// Definition of a catalog card.
    #[must_use]
    pub fn def(&self, card: CardId) -> &CardDefinition {
        self.catalog.def(card)
    }

    /// Get a card instance.
    #[must_use]
    pub fn unit(&self, id: InstanceId) -> Option<&CardInstance> {
        self.units.get(&id)
    }

    /// Get a mutable card instance.
    pub fn unit_mut(&mut self, id: InstanceId) -> Option<&mut CardInstance> {
        self.units.get_mut(&id)
    }

    /// Definition backing an instance.
    ///
    /// Instance ids are only ever minted by this state, so a miss is a
    /// logic bug.
    #[must_use]
    pub fn def_of(&self, id: InstanceId) -> &CardDefinition {
        let instance = self.units.get(&id).expect("Unknown card instance");
        self.catalog.def(instance.card)
    }

    /// Display name of an instance, for logging.
    #[must_use]
    pub fn name_of(&self, id: InstanceId) -> &str {
        &self.def_of(id).name
    }

    /// The catalog card an instance was drawn from.
    #[must_use]
    pub fn card_of(&self, id: InstanceId) -> CardId {
        self.units.get(&id).expect("Unknown card instance").card
    }

    /// Mint a new instance of a catalog card.
    pub fn spawn(&mut self, card: CardId, owner: PlayerId) -> InstanceId {
        let health = self.catalog.def(card).kind.starting_health();
        let id = InstanceId::new(self.next_instance);
        self.next_instance += 1;
        self.units.insert(id, CardInstance::new(id, card, owner, health));
        id
    }

    /// Retire an instance from the arena, returning its catalog card.
    ///
    /// Used when a ruin leaves the hand and becomes a board tile: the
    /// tile records the definition, and the instance's life ends there.
    pub fn consume_instance(&mut self, id: InstanceId) -> Option<CardId> {
        self.units.remove(&id).map(|instance| instance.card)
    }

    /// A player's zones.
    #[must_use]
    pub fn player(&self, player: PlayerId) -> &PlayerZones {
        &self.players[player]
    }

    /// A player's zones, mutably.
    pub fn player_mut(&mut self, player: PlayerId) -> &mut PlayerZones {
        &mut self.players[player]
    }

    /// A player's gate position, once placed.
    #[must_use]
    pub fn gate_position(&self, player: PlayerId) -> Option<Position> {
        self.gate_positions[player]
    }

    /// Record a player's gate position during gate placement.
    pub fn set_gate_position(&mut self, player: PlayerId, pos: Position) {
        self.gate_positions[player] = Some(pos);
    }

    // === Hand targets ===

    /// The explore draw target from a player's gate.
    #[must_use]
    pub fn explore_hand_target(&self, player: PlayerId) -> usize {
        match &self.def_of(self.players[player].gate).kind {
            CardKind::Gate(g) => g.explore_hand,
            _ => 0,
        }
    }

    /// The adventure draw target from a player's hero.
    #[must_use]
    pub fn adventure_hand_target(&self, player: PlayerId) -> usize {
        match &self.def_of(self.players[player].hero).kind {
            CardKind::Hero(h) => h.adventure_hand,
            _ => 0,
        }
    }

    // === Turn operations ===

    /// The active player gains echoes equal to the turn number.
    pub fn gain_echoes(&mut self) {
        let gain = self.turn;
        let zones = &mut self.players[self.active];
        zones.echoes += gain;
        zones.turn_echo_gain = gain;
    }

    /// Draw explore cards for a player under the replenish rule.
    ///
    /// At or above the hand target: draw exactly one card if the deck
    /// allows. Below it: draw up to the target or until the deck empties.
    /// Returns the resulting hand size.
    pub fn draw_explore_cards(&mut self, player: PlayerId) -> usize {
        let target = self.explore_hand_target(player);
        let zones = &mut self.players[player];
        if zones.hand.len() >= target {
            zones.draw_explore();
        } else {
            while zones.hand.len() < target && zones.draw_explore().is_some() {}
        }
        zones.hand.len()
    }

    /// Draw adventure cards for a player under the replenish rule.
    ///
    /// Returns the resulting hand size.
    pub fn draw_adventure_cards(&mut self, player: PlayerId) -> usize {
        let target = self.adventure_hand_target(player);
        let zones = &mut self.players[player];
        if zones.hand.len() >= target {
            zones.draw_adventure();
        } else {
            while zones.hand.len() < target && zones.draw_adventure().is_some() {}
        }
        zones.hand.len()
    }

    /// Remove a unit or item from play entirely.
    ///
    /// Clears it from any occupant list and in-play area, then puts it
    /// in its owner's adventure discard.
    pub fn remove_from_play(&mut self, id: InstanceId) {
        if let Some(pos) = self.board.unit_position(id) {
            self.board.remove_occupant(pos, id);
        }
        let owner = match self.units.get(&id) {
            Some(instance) => instance.owner,
            None => return,
        };
        let zones = &mut self.players[owner];
        zones.remove_from_play_areas(id);
        zones.adventure_discard.push_back(id);
    }

    /// Flip the active player and increment the turn counter.
    pub fn advance_turn(&mut self) {
        self.active = self.active.opponent();
        self.turn += 1;
    }
}
