//! # gatefall
//!
//! Authoritative rules engine for a two-player exploration-and-combat
//! board game. Players alternately reveal a hidden grid of terrain tiles
//! until a continuous path connects their two home Gates, then fight
//! through a summoning / movement / combat turn loop with resource
//! accrual, upkeep costs, and keyword-driven combat rules.
//!
//! ## Design Principles
//!
//! 1. **Typed effects**: Card abilities are structured effect lists
//!    evaluated by typed handlers, never parsed from prose.
//!
//! 2. **Arena-owned instances**: Zones and occupant lists hold instance
//!    ids; the instances live in one arena on `GameState`, so a card is
//!    in exactly one place at a time.
//!
//! 3. **Replaceable decisions**: The engines fix the shape of each
//!    prompt and the validation of each reply; the policy answering them
//!    is external (UI, bot, AI).
//!
//! 4. **Rejections are not errors**: Malformed or illegal decisions are
//!    logged no-ops. Engines always complete their fixed step sequence;
//!    only catalog and setup integrity failures are fatal.
//!
//! ## Modules
//!
//! - `core`: Players, positions, RNG, and the shared game state
//! - `cards`: Definitions, structured effects, instances, catalog
//! - `zones`: Per-player decks, hand, and in-play areas
//! - `board`: Tile grid, occupancy, and connectivity search
//! - `phases`: The explore round and adventure turn engines
//! - `policy`: The decision boundary and a scripted reference policy
//! - `snapshot`: Read-only views for presentation
//! - `victory`: Pure win-condition queries
//! - `driver`: Session sequencing over the phase engines

pub mod board;
pub mod cards;
pub mod core;
pub mod driver;
pub mod error;
pub mod phases;
pub mod policy;
pub mod snapshot;
pub mod victory;
pub mod zones;

// Re-export commonly used types
pub use crate::core::{
    GameOptions, GameRng, GameState, PlayerId, PlayerPair, PlayerSetup, Position,
};

pub use crate::cards::{
    CardCatalog, CardDefinition, CardEffect, CardId, CardInstance, CardKind, Element, GateStats,
    GearStats, GlyphStats, HeroStats, InstanceId, Keyword, MinionStats, RelicStats, RuinStats,
    SpellStats, Terrain,
};

pub use crate::board::{connected, Board, Occupant, Tile};

pub use crate::zones::PlayerZones;

pub use crate::phases::{
    pay_upkeep, strike_damage, AdventurePhase, CombatOutcome, ExploreOutcome, ExplorePhase,
    PhaseKind,
};

pub use crate::policy::{
    AttackOrder, CombatChoice, CombatPrompt, DecisionPolicy, MoveOrder, MovementChoice,
    MovementPrompt, PlacementChoice, PlacementPrompt, ScriptedPolicy, StepNotice, SummonChoice,
    SummonPrompt,
};

pub use crate::snapshot::{OccupantView, PlayerView, Snapshot, TileView};

pub use crate::victory::{
    adventure_victory, Victory, VictoryCondition, ECHO_VICTORY_THRESHOLD,
};

pub use crate::driver::{Driver, GameEnd};

pub use crate::error::{CatalogError, SetupError};
