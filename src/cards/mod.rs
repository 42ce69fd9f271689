//! Card system: definitions, structured effects, instances, and catalog.
//!
//! ## Key Types
//!
//! - `CardId`: Identifier for catalog definitions
//! - `CardKind`: Closed tagged variant of the eight card kinds
//! - `CardEffect`: Structured ability effects (no prose parsing)
//! - `CardInstance` / `InstanceId`: Runtime card state in the arena
//! - `CardCatalog`: Validated immutable definition lookup

pub mod catalog;
pub mod definition;
pub mod effect;
pub mod instance;

pub use catalog::CardCatalog;
pub use definition::{
    CardDefinition, CardId, CardKind, Element, GateStats, GearStats, GlyphStats, HeroStats,
    Keyword, MinionStats, RelicStats, RuinStats, SpellStats, Terrain,
};
pub use effect::CardEffect;
pub use instance::{CardInstance, InstanceId};
