//! Core types: players, positions, RNG, and the shared game state.

pub mod player;
pub mod position;
pub mod rng;
pub mod state;

pub use player::{PlayerId, PlayerPair};
pub use position::Position;
pub use rng::GameRng;
pub use state::{GameOptions, GameState, PlayerSetup};
