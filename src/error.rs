//! Error types for catalog loading and game setup.
//!
//! Runtime rule violations (illegal placements, unaffordable summons,
//! out-of-range attacks) are not errors: the engines reject them as
//! logged no-ops and keep going. Only load-time and setup-time integrity
//! problems are fatal.

use thiserror::Error;

use crate::cards::CardId;

/// Catalog integrity failure, fatal at load time.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CatalogError {
    /// Two definitions share an ID.
    #[error("card {0} registered twice")]
    DuplicateCard(CardId),

    /// A gate with an explore hand target of zero can never draw.
    #[error("gate {0} has a zero explore hand target")]
    ZeroExploreHand(CardId),

    /// A hero with an adventure hand target of zero can never draw.
    #[error("hero {0} has a zero adventure hand target")]
    ZeroAdventureHand(CardId),
}

/// Game setup failure, fatal before the first turn.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SetupError {
    /// The chosen hero ID does not name a hero.
    #[error("{0} is not a hero")]
    NotAHero(CardId),

    /// The chosen gate ID does not name a gate.
    #[error("{0} is not a gate")]
    NotAGate(CardId),

    /// Not enough distinct ruins to build an explore deck.
    #[error("explore deck needs {needed} ruins, catalog has {available}")]
    NotEnoughRuins { needed: usize, available: usize },

    /// Not enough element-eligible cards to build an adventure deck.
    #[error("adventure deck needs {needed} eligible cards, catalog has {available}")]
    NotEnoughAdventureCards { needed: usize, available: usize },
}
