//! Card definitions - static card data.
//!
//! `CardDefinition` holds the immutable properties of a card: its name,
//! its kind-specific stats, and its structured ability effects. The kinds
//! form a closed tagged variant (Gate, Ruin, Hero, Minion, Relic, Gear,
//! Spell, Glyph); summoning and combat dispatch on the variant
//! exhaustively.
//!
//! Per-instance runtime state (current health, transient defense buffs)
//! lives in `CardInstance`, never here.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::effect::CardEffect;

/// Unique identifier for a card definition.
///
/// Identifies the catalog entry, not a specific instance in a game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CardId(pub u32);

impl CardId {
    /// Create a new card ID.
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

impl std::fmt::Display for CardId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Card({})", self.0)
    }
}

/// Terrain printed on gates and ruins.
///
/// Wetlands is the only terrain with a hardcoded rule (movement halving
/// on exit); the rest participate in data-driven penalties and
/// connection bonuses.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Terrain {
    Fields,
    Woodlands,
    Wetlands,
    Highlands,
    Caverns,
    Ruins,
    Gate,
}

/// Elemental affinity used for adventure-deck eligibility.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Element {
    Fire,
    Water,
    Earth,
    Air,
    Light,
    Shadow,
}

/// Combat keywords carried by heroes and minions.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Keyword {
    /// May attack on the turn it is summoned.
    Bloodlust,
    /// Cannot be targeted while another friendly unit shares its tile.
    Backline,
    /// Gains +1 defense for one opposing turn if it neither moved nor
    /// attacked.
    Fortify,
}

/// Gate stats: each player's home card.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GateStats {
    pub terrain: Terrain,
    /// Echoes the player starts the game with.
    pub starting_echoes: u32,
    /// Hand target for the explore draw step.
    pub explore_hand: usize,
    /// Capacity of the relic area.
    pub relic_hold: usize,
    pub gate_defense: i32,
    pub gate_health: i32,
}

/// Ruin stats: a placeable terrain tile.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuinStats {
    pub terrain: Terrain,
    pub sub_terrain: Option<Terrain>,
    /// Printed occupancy limit (informational in the current rule set).
    pub occupancy: u32,
}

/// Hero stats.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeroStats {
    pub health: i32,
    pub attack: i32,
    pub defense: i32,
    pub speed: i32,
    pub movement: u32,
    /// Hand target for the adventure draw step.
    pub adventure_hand: usize,
    /// Elemental affinity; adventure cards must fit within it.
    pub elements: SmallVec<[Element; 2]>,
    /// Terrains traversed without penalty.
    pub special_movement: SmallVec<[Terrain; 2]>,
    pub keywords: SmallVec<[Keyword; 2]>,
}

/// Minion stats.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MinionStats {
    pub cost: u32,
    pub health: i32,
    pub attack: i32,
    pub defense: i32,
    pub speed: i32,
    pub movement: u32,
    /// Terrains traversed without penalty.
    pub special_movement: SmallVec<[Terrain; 2]>,
    pub keywords: SmallVec<[Keyword; 2]>,
}

/// Relic stats.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RelicStats {
    pub cost: u32,
    pub elements: SmallVec<[Element; 2]>,
}

/// Gear stats.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GearStats {
    pub cost: u32,
    pub elements: SmallVec<[Element; 2]>,
}

/// Spell stats.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpellStats {
    pub cost: u32,
    pub elements: SmallVec<[Element; 2]>,
}

/// Glyph stats.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GlyphStats {
    pub cost: u32,
    pub elements: SmallVec<[Element; 2]>,
}

/// The closed set of card kinds with their kind-specific stats.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum CardKind {
    Gate(GateStats),
    Ruin(RuinStats),
    Hero(HeroStats),
    Minion(MinionStats),
    Relic(RelicStats),
    Gear(GearStats),
    Spell(SpellStats),
    Glyph(GlyphStats),
}

impl CardKind {
    /// Kind name for display and logging.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            CardKind::Gate(_) => "Gate",
            CardKind::Ruin(_) => "Ruin",
            CardKind::Hero(_) => "Hero",
            CardKind::Minion(_) => "Minion",
            CardKind::Relic(_) => "Relic",
            CardKind::Gear(_) => "Gear",
            CardKind::Spell(_) => "Spell",
            CardKind::Glyph(_) => "Glyph",
        }
    }

    /// Summoning cost in echoes. Gates, ruins, and heroes cost nothing.
    #[must_use]
    pub fn cost(&self) -> u32 {
        match self {
            CardKind::Gate(_) | CardKind::Ruin(_) | CardKind::Hero(_) => 0,
            CardKind::Minion(m) => m.cost,
            CardKind::Relic(r) => r.cost,
            CardKind::Gear(g) => g.cost,
            CardKind::Spell(s) => s.cost,
            CardKind::Glyph(g) => g.cost,
        }
    }

    /// Printed terrain, for tile cards (gates and ruins).
    #[must_use]
    pub fn terrain(&self) -> Option<Terrain> {
        match self {
            CardKind::Gate(g) => Some(g.terrain),
            CardKind::Ruin(r) => Some(r.terrain),
            _ => None,
        }
    }

    /// Printed sub-terrain, for ruins.
    #[must_use]
    pub fn sub_terrain(&self) -> Option<Terrain> {
        match self {
            CardKind::Ruin(r) => r.sub_terrain,
            _ => None,
        }
    }

    /// Elemental requirements for adventure-deck eligibility.
    ///
    /// Minions have none and are always eligible.
    #[must_use]
    pub fn elements(&self) -> &[Element] {
        match self {
            CardKind::Relic(r) => &r.elements,
            CardKind::Gear(g) => &g.elements,
            CardKind::Spell(s) => &s.elements,
            CardKind::Glyph(g) => &g.elements,
            _ => &[],
        }
    }

    /// Whether this kind is a board unit (hero or minion).
    #[must_use]
    pub fn is_unit(&self) -> bool {
        matches!(self, CardKind::Hero(_) | CardKind::Minion(_))
    }

    /// Starting health for an instance of this kind.
    ///
    /// Gates track their printed gate health; non-unit cards have none.
    #[must_use]
    pub fn starting_health(&self) -> i32 {
        match self {
            CardKind::Gate(g) => g.gate_health,
            CardKind::Hero(h) => h.health,
            CardKind::Minion(m) => m.health,
            _ => 0,
        }
    }

    /// Attack stat for units.
    #[must_use]
    pub fn attack(&self) -> i32 {
        match self {
            CardKind::Hero(h) => h.attack,
            CardKind::Minion(m) => m.attack,
            _ => 0,
        }
    }

    /// Printed defense stat for units.
    #[must_use]
    pub fn defense(&self) -> i32 {
        match self {
            CardKind::Hero(h) => h.defense,
            CardKind::Minion(m) => m.defense,
            _ => 0,
        }
    }

    /// Speed stat for units.
    #[must_use]
    pub fn speed(&self) -> i32 {
        match self {
            CardKind::Hero(h) => h.speed,
            CardKind::Minion(m) => m.speed,
            _ => 0,
        }
    }

    /// Base movement allowance for units.
    #[must_use]
    pub fn movement(&self) -> u32 {
        match self {
            CardKind::Hero(h) => h.movement,
            CardKind::Minion(m) => m.movement,
            _ => 0,
        }
    }

    /// Keywords for units; empty for everything else.
    #[must_use]
    pub fn keywords(&self) -> &[Keyword] {
        match self {
            CardKind::Hero(h) => &h.keywords,
            CardKind::Minion(m) => &m.keywords,
            _ => &[],
        }
    }

    /// Terrains this unit traverses without penalty.
    #[must_use]
    pub fn special_movement(&self) -> &[Terrain] {
        match self {
            CardKind::Hero(h) => &h.special_movement,
            CardKind::Minion(m) => &m.special_movement,
            _ => &[],
        }
    }
}

/// Static card definition.
///
/// ## Example
///
/// ```
/// use gatefall::cards::{CardDefinition, CardEffect, CardId, CardKind, RuinStats, Terrain};
///
/// let marsh = CardDefinition::new(
///     CardId::new(7),
///     "Sunken Causeway",
///     CardKind::Ruin(RuinStats {
///         terrain: Terrain::Wetlands,
///         sub_terrain: None,
///         occupancy: 3,
///     }),
/// )
/// .with_effect(CardEffect::EntryPenalty { cost: 2 });
///
/// assert_eq!(marsh.kind.terrain(), Some(Terrain::Wetlands));
/// assert_eq!(marsh.entry_penalty(), Some(2));
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardDefinition {
    /// Unique identifier for this definition.
    pub id: CardId,

    /// Card name (for display/logging).
    pub name: String,

    /// Kind and kind-specific stats.
    pub kind: CardKind,

    /// Structured ability effects.
    pub effects: SmallVec<[CardEffect; 2]>,
}

impl CardDefinition {
    /// Create a new card definition with no effects.
    #[must_use]
    pub fn new(id: CardId, name: impl Into<String>, kind: CardKind) -> Self {
        Self {
            id,
            name: name.into(),
            kind,
            effects: SmallVec::new(),
        }
    }

    /// Add an effect (builder pattern).
    #[must_use]
    pub fn with_effect(mut self, effect: CardEffect) -> Self {
        self.effects.push(effect);
        self
    }

    /// Entry-penalty cost declared on this card, if any.
    #[must_use]
    pub fn entry_penalty(&self) -> Option<u32> {
        self.effects.iter().find_map(CardEffect::entry_cost)
    }

    /// Exit-penalty cost declared on this card, if any.
    #[must_use]
    pub fn exit_penalty(&self) -> Option<u32> {
        self.effects.iter().find_map(CardEffect::exit_cost)
    }

    /// Whether this card grants free movement in and out.
    #[must_use]
    pub fn grants_free_movement(&self) -> bool {
        self.effects.contains(&CardEffect::FreeMovement)
    }

    /// Terrains this card declares connection bonuses for.
    pub fn connection_bonuses(&self) -> impl Iterator<Item = Terrain> + '_ {
        self.effects.iter().filter_map(|e| match e {
            CardEffect::ConnectionBonus { terrain } => Some(*terrain),
            _ => None,
        })
    }

    /// Whether a unit carries the given keyword.
    #[must_use]
    pub fn has_keyword(&self, keyword: Keyword) -> bool {
        self.kind.keywords().contains(&keyword)
    }
}
