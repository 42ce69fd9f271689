//! Phase engines: the explore round, the adventure turn, and their
//! combat and upkeep rules.

pub mod adventure;
pub mod combat;
pub mod explore;
pub mod upkeep;

use serde::{Deserialize, Serialize};

pub use adventure::AdventurePhase;
pub use combat::{resolve_gate_strike, resolve_unit_combat, strike_damage, CombatOutcome};
pub use explore::{ExploreOutcome, ExplorePhase};
pub use upkeep::pay_upkeep;

/// Which phase of the game a result belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PhaseKind {
    Explore,
    Adventure,
}
