//! Card catalog: validated, immutable definition lookup.
//!
//! The catalog holds four collections keyed by kind: Gates, Ruins,
//! Heroes, and the combined Adventure pool (minions, relics, gear,
//! spells, glyphs). Every record is validated when the catalog is built;
//! integrity failures are fatal at load time and can never surface
//! mid-turn.

use rustc_hash::FxHashMap;

use super::definition::{CardDefinition, CardId, CardKind};
use crate::error::CatalogError;

/// Immutable catalog of card definitions.
///
/// ## Example
///
/// ```
/// use gatefall::cards::{CardCatalog, CardDefinition, CardId, CardKind, RuinStats, Terrain};
///
/// let ruin = CardDefinition::new(
///     CardId::new(1),
///     "Fallen Arch",
///     CardKind::Ruin(RuinStats {
///         terrain: Terrain::Fields,
///         sub_terrain: None,
///         occupancy: 2,
///     }),
/// );
///
/// let catalog = CardCatalog::new(vec![ruin]).unwrap();
/// assert_eq!(catalog.def(CardId::new(1)).name, "Fallen Arch");
/// assert_eq!(catalog.ruins().len(), 1);
/// ```
#[derive(Clone, Debug, Default)]
pub struct CardCatalog {
    cards: FxHashMap<CardId, CardDefinition>,
    gates: Vec<CardId>,
    ruins: Vec<CardId>,
    heroes: Vec<CardId>,
    adventure: Vec<CardId>,
}

impl CardCatalog {
    /// Build a catalog from a list of definitions.
    ///
    /// Routes each definition into its kind collection and validates
    /// record integrity. Returns a `CatalogError` on the first problem.
    pub fn new(definitions: Vec<CardDefinition>) -> Result<Self, CatalogError> {
        let mut catalog = Self::default();

        for def in definitions {
            if catalog.cards.contains_key(&def.id) {
                return Err(CatalogError::DuplicateCard(def.id));
            }

            match &def.kind {
                CardKind::Gate(gate) => {
                    if gate.explore_hand == 0 {
                        return Err(CatalogError::ZeroExploreHand(def.id));
                    }
                    catalog.gates.push(def.id);
                }
                CardKind::Ruin(_) => catalog.ruins.push(def.id),
                CardKind::Hero(hero) => {
                    if hero.adventure_hand == 0 {
                        return Err(CatalogError::ZeroAdventureHand(def.id));
                    }
                    catalog.heroes.push(def.id);
                }
                CardKind::Minion(_)
                | CardKind::Relic(_)
                | CardKind::Gear(_)
                | CardKind::Spell(_)
                | CardKind::Glyph(_) => catalog.adventure.push(def.id),
            }

            catalog.cards.insert(def.id, def);
        }

        Ok(catalog)
    }

    /// Get a card definition by ID.
    #[must_use]
    pub fn get(&self, id: CardId) -> Option<&CardDefinition> {
        self.cards.get(&id)
    }

    /// Get a card definition by ID, panicking if not found.
    ///
    /// Game state only ever holds IDs routed through a validated
    /// catalog, so a miss is a logic bug, not a data problem.
    #[must_use]
    pub fn def(&self, id: CardId) -> &CardDefinition {
        self.cards.get(&id).expect("Card not found in catalog")
    }

    /// Gate definitions available for setup.
    #[must_use]
    pub fn gates(&self) -> &[CardId] {
        &self.gates
    }

    /// Ruin definitions available for explore decks.
    #[must_use]
    pub fn ruins(&self) -> &[CardId] {
        &self.ruins
    }

    /// Hero definitions available for setup.
    #[must_use]
    pub fn heroes(&self) -> &[CardId] {
        &self.heroes
    }

    /// The combined adventure pool (minions, relics, gear, spells, glyphs).
    #[must_use]
    pub fn adventure_pool(&self) -> &[CardId] {
        &self.adventure
    }

    /// Get the number of registered cards.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Check if the catalog is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Iterate over all card definitions.
    pub fn iter(&self) -> impl Iterator<Item = &CardDefinition> {
        self.cards.values()
    }
}
