//! Per-player zones.
//!
//! Each player owns two deck/discard pairs (explore and adventure), a
//! hand, an echo counter, and three in-play areas: the staging area for
//! minions, the bounded relic area, and the hero area holding at most
//! the hero. Zones store instance ids; the instances themselves live in
//! the `GameState` arena.
//!
//! Deck order: the front of a deck is the next draw; mulliganed cards
//! return to the back.

use std::collections::VecDeque;

use serde::{Deserialize, Serialize};

use crate::cards::InstanceId;

/// All zones owned by one player.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct PlayerZones {
    /// The player's hero instance (wherever it currently is).
    pub hero: InstanceId,

    /// The player's gate instance.
    pub gate: InstanceId,

    /// Explore deck of ruins; front = next draw.
    pub explore_deck: VecDeque<InstanceId>,

    /// Explore discard pile.
    pub explore_discard: VecDeque<InstanceId>,

    /// Adventure deck; front = next draw.
    pub adventure_deck: VecDeque<InstanceId>,

    /// Adventure discard pile.
    pub adventure_discard: VecDeque<InstanceId>,

    /// Hand; order preserved for deterministic discards.
    pub hand: Vec<InstanceId>,

    /// Spendable echo counter.
    pub echoes: u32,

    /// Echoes gained this turn (informational).
    pub turn_echo_gain: u32,

    /// Minions in play.
    pub staging: Vec<InstanceId>,

    /// Relics and gear in play; front = oldest, evicted first.
    pub relic_area: VecDeque<InstanceId>,

    /// The hero once summoned; at most one element.
    pub hero_area: Option<InstanceId>,
}

impl PlayerZones {
    /// Create the zones for a player.
    ///
    /// The hero starts in the hero area; decks are filled by game setup.
    #[must_use]
    pub fn new(hero: InstanceId, gate: InstanceId, starting_echoes: u32) -> Self {
        Self {
            hero,
            gate,
            explore_deck: VecDeque::new(),
            explore_discard: VecDeque::new(),
            adventure_deck: VecDeque::new(),
            adventure_discard: VecDeque::new(),
            hand: Vec::new(),
            echoes: starting_echoes,
            turn_echo_gain: 0,
            staging: Vec::new(),
            relic_area: VecDeque::new(),
            hero_area: Some(hero),
        }
    }

    /// Draw the next explore card into the hand.
    ///
    /// Returns the drawn instance, or `None` if the deck is empty.
    pub fn draw_explore(&mut self) -> Option<InstanceId> {
        let card = self.explore_deck.pop_front()?;
        self.hand.push(card);
        Some(card)
    }

    /// Draw the next adventure card into the hand.
    ///
    /// Returns the drawn instance, or `None` if the deck is empty.
    pub fn draw_adventure(&mut self) -> Option<InstanceId> {
        let card = self.adventure_deck.pop_front()?;
        self.hand.push(card);
        Some(card)
    }

    /// Return every card left in hand to the bottom of the explore deck.
    ///
    /// The explore round's mulligan step.
    pub fn mulligan_hand(&mut self) {
        for card in self.hand.drain(..) {
            self.explore_deck.push_back(card);
        }
    }

    /// Remove the card at `index` from the hand.
    ///
    /// Returns `None` without touching the hand if the index is out of
    /// range.
    pub fn take_from_hand(&mut self, index: usize) -> Option<InstanceId> {
        if index < self.hand.len() {
            Some(self.hand.remove(index))
        } else {
            None
        }
    }

    /// Spend echoes if the balance covers the cost.
    ///
    /// Returns false (and spends nothing) otherwise.
    pub fn spend_echoes(&mut self, cost: u32) -> bool {
        if self.echoes >= cost {
            self.echoes -= cost;
            true
        } else {
            false
        }
    }

    /// Put a relic or gear into the relic area.
    ///
    /// If the area is at `capacity` the oldest held item is evicted and
    /// returned; the caller routes it to the discard.
    pub fn stash_relic(&mut self, item: InstanceId, capacity: usize) -> Option<InstanceId> {
        let evicted = if self.relic_area.len() >= capacity {
            self.relic_area.pop_front()
        } else {
            None
        };
        self.relic_area.push_back(item);
        evicted
    }

    /// Remove a unit or item from every in-play area it occupies.
    pub fn remove_from_play_areas(&mut self, instance: InstanceId) {
        if self.hero_area == Some(instance) {
            self.hero_area = None;
        }
        self.staging.retain(|&u| u != instance);
        self.relic_area.retain(|&u| u != instance);
    }

    /// Discard from the end of the hand down to `limit` cards.
    pub fn discard_down_to(&mut self, limit: usize) {
        while self.hand.len() > limit {
            if let Some(card) = self.hand.pop() {
                self.adventure_discard.push_back(card);
            }
        }
    }
}
