//! Zone system: the per-player decks, hand, and in-play areas.

pub mod player;

pub use player::PlayerZones;
