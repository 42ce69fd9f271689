//! Card instances - runtime card state.
//!
//! A `CardInstance` is one copy of a catalog card inside a running game.
//! Instances live in an arena on `GameState` and are addressed by
//! `InstanceId`; zones and occupant lists store ids, never the cards
//! themselves, so a card can only ever be in one place.
//!
//! The catalog definition stays immutable; the instance carries the
//! mutable fields (current health, the transient Fortify defense buff).

use serde::{Deserialize, Serialize};

use super::definition::CardId;
use crate::core::player::PlayerId;

/// Stable identifier for a card instance within one game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct InstanceId(pub u32);

impl InstanceId {
    /// Create a new instance ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for InstanceId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Instance({})", self.0)
    }
}

/// One card instance in a running game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardInstance {
    /// Unique id of this instance.
    pub id: InstanceId,

    /// The catalog definition this instance was drawn from.
    pub card: CardId,

    /// Owning player. Ownership never changes.
    pub owner: PlayerId,

    /// Current health. Starts at the kind's printed health; gates start
    /// at their printed gate health. Zero for cards without health.
    pub health: i32,

    /// Transient defense buff granted by Fortify; stripped at the end of
    /// the opponent's next turn.
    pub temp_defense: i32,
}

impl CardInstance {
    /// Create an instance with the given starting health.
    #[must_use]
    pub fn new(id: InstanceId, card: CardId, owner: PlayerId, health: i32) -> Self {
        Self {
            id,
            card,
            owner,
            health,
            temp_defense: 0,
        }
    }

    /// Apply damage to this instance.
    pub fn apply_damage(&mut self, amount: i32) {
        self.health -= amount;
    }

    /// Whether this instance's health has been reduced to zero or below.
    #[must_use]
    pub fn is_dead(&self) -> bool {
        self.health <= 0
    }
}
