//! Structured card effects.
//!
//! Abilities are carried as a list of tagged effect variants on each
//! card definition and evaluated by typed handlers: the upkeep step reads
//! the periodic costs, the movement step reads the terrain penalties, and
//! the reveal step reads the connection bonuses. Nothing in the engine
//! inspects ability prose.

use serde::{Deserialize, Serialize};

use super::definition::Terrain;

/// One tagged ability effect on a card definition.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum CardEffect {
    /// Recurring echo cost paid during the controller's maintenance step.
    /// If the cost cannot be paid the card leaves play.
    UpkeepEchoCost {
        amount: u32,
    },

    /// Recurring health loss applied during the controller's maintenance
    /// step. On relics and gear the loss is redirected to the hero.
    UpkeepHealthLoss {
        amount: i32,
    },

    /// Entering this tile costs `cost` movement instead of 1, unless the
    /// moving unit's special movement covers the tile's terrain.
    EntryPenalty {
        cost: u32,
    },

    /// Leaving this tile costs `cost` movement instead of 1, unless the
    /// moving unit's special movement covers the tile's terrain.
    ExitPenalty {
        cost: u32,
    },

    /// Moving into or out of this tile costs no movement.
    FreeMovement,

    /// Revealing this tile next to a face-up tile of the named terrain
    /// (or sub-terrain) triggers an informational connection effect.
    ConnectionBonus {
        terrain: Terrain,
    },
}

impl CardEffect {
    /// Entry cost declared by this effect, if it is an entry penalty.
    #[must_use]
    pub fn entry_cost(&self) -> Option<u32> {
        match self {
            CardEffect::EntryPenalty { cost } => Some(*cost),
            _ => None,
        }
    }

    /// Exit cost declared by this effect, if it is an exit penalty.
    #[must_use]
    pub fn exit_cost(&self) -> Option<u32> {
        match self {
            CardEffect::ExitPenalty { cost } => Some(*cost),
            _ => None,
        }
    }
}
