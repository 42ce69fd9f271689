//! The decision-policy boundary.
//!
//! Each phase step that needs a player decision sends a prompt and
//! blocks on a structured reply. The policy behind the prompt is
//! replaceable: a human UI, a scripted bot, or an AI. The engine only
//! fixes the shape of the request and the validation of the response.
//!
//! Reply types mirror the wire shapes the protocol accepts: summon
//! replies may be a bare index list, `{cards: [...]}`, or
//! `{card_index: n}`; movement and combat replies may be a batch or a
//! single bare order. All of them deserialize through untagged enums.

pub mod scripted;

use serde::{Deserialize, Serialize};

use crate::core::player::PlayerId;
use crate::core::position::Position;
use crate::snapshot::Snapshot;

pub use scripted::ScriptedPolicy;

/// Notification of an engine step that made no decision request.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "step", rename_all = "snake_case")]
pub enum StepNotice {
    /// Both gates (and heroes) were placed.
    GatePlacement,
    /// A player finished the explore draw step.
    ExploreDraw { player: PlayerId, hand_size: usize },
    /// All face-down tiles were revealed; connection effects triggered.
    Reveal { effects: Vec<String> },
    /// The active player gained echoes.
    EchoGain { player: PlayerId, amount: u32 },
    /// The active player finished the adventure draw step.
    AdventureDraw { player: PlayerId, hand_size: usize },
    /// Upkeep costs were applied.
    Maintenance { player: PlayerId },
    /// The active player's end step ran.
    EndStep { player: PlayerId },
}

/// Prompt for the explore placement step.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlacementPrompt {
    pub player: PlayerId,
}

/// Prompt for the adventure summoning step.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SummonPrompt {
    pub player: PlayerId,
}

/// Prompt for the adventure movement step.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MovementPrompt {
    pub player: PlayerId,
}

/// Prompt for the adventure combat step.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CombatPrompt {
    pub player: PlayerId,
}

/// Reply to a placement prompt: pass, or place one hand card.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PlacementChoice {
    /// Place the hand card at `card_index` face-down at `pos`.
    Place { card_index: usize, pos: Position },
    /// Decline to place for the rest of the round.
    Pass { pass: bool },
}

impl PlacementChoice {
    /// A pass reply.
    #[must_use]
    pub fn pass() -> Self {
        Self::Pass { pass: true }
    }

    /// A placement reply.
    #[must_use]
    pub fn place(card_index: usize, pos: Position) -> Self {
        Self::Place { card_index, pos }
    }

    /// Whether this reply declines to place.
    #[must_use]
    pub fn is_pass(&self) -> bool {
        matches!(self, Self::Pass { .. })
    }
}

/// Reply to a summoning prompt: hand indices to play, in order.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SummonChoice {
    /// A bare list of hand indices.
    Indices(Vec<usize>),
    /// `{cards: [...]}`.
    Cards { cards: Vec<usize> },
    /// `{card_index: n}`.
    Single { card_index: usize },
}

impl SummonChoice {
    /// An empty reply.
    #[must_use]
    pub fn none() -> Self {
        Self::Indices(Vec::new())
    }

    /// The hand indices to play, in submission order.
    #[must_use]
    pub fn indices(self) -> Vec<usize> {
        match self {
            Self::Indices(list) => list,
            Self::Cards { cards } => cards,
            Self::Single { card_index } => vec![card_index],
        }
    }
}

impl Default for SummonChoice {
    fn default() -> Self {
        Self::none()
    }
}

/// One requested unit move.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveOrder {
    #[serde(alias = "origin", alias = "start")]
    pub from: Position,
    #[serde(alias = "dest", alias = "end")]
    pub to: Position,
    /// Optional unit name to disambiguate stacked friendly units.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unit: Option<String>,
}

impl MoveOrder {
    /// A move with no unit disambiguation.
    #[must_use]
    pub fn new(from: Position, to: Position) -> Self {
        Self {
            from,
            to,
            unit: None,
        }
    }
}

/// Reply to a movement prompt: a batch of moves or a single bare move.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum MovementChoice {
    Batch { moves: Vec<MoveOrder> },
    Single(MoveOrder),
}

impl MovementChoice {
    /// An empty reply.
    #[must_use]
    pub fn none() -> Self {
        Self::Batch { moves: Vec::new() }
    }

    /// The requested moves, in submission order.
    #[must_use]
    pub fn orders(self) -> Vec<MoveOrder> {
        match self {
            Self::Batch { moves } => moves,
            Self::Single(order) => vec![order],
        }
    }
}

impl Default for MovementChoice {
    fn default() -> Self {
        Self::none()
    }
}

/// One requested attack.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttackOrder {
    #[serde(alias = "attacker_pos")]
    pub from: Position,
    #[serde(alias = "defender_pos")]
    pub to: Position,
}

impl AttackOrder {
    #[must_use]
    pub fn new(from: Position, to: Position) -> Self {
        Self { from, to }
    }
}

/// Reply to a combat prompt: a batch of attacks or a single bare attack.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CombatChoice {
    Batch { attacks: Vec<AttackOrder> },
    Single(AttackOrder),
}

impl CombatChoice {
    /// An empty reply.
    #[must_use]
    pub fn none() -> Self {
        Self::Batch {
            attacks: Vec::new(),
        }
    }

    /// The requested attacks, in submission order.
    #[must_use]
    pub fn orders(self) -> Vec<AttackOrder> {
        match self {
            Self::Batch { attacks } => attacks,
            Self::Single(order) => vec![order],
        }
    }
}

impl Default for CombatChoice {
    fn default() -> Self {
        Self::none()
    }
}

/// A player's decision policy.
///
/// The engines call these synchronously: send the prompt, block until a
/// reply. Timeouts and cancellation are the driver's concern, not the
/// engine's.
pub trait DecisionPolicy {
    /// Receive a step notification. Default: ignore.
    fn notify(&mut self, _notice: &StepNotice) {}

    /// Receive a read-only state snapshot. Default: ignore.
    fn observe(&mut self, _snapshot: &Snapshot) {}

    /// Choose a tile placement or pass.
    fn choose_placement(&mut self, prompt: &PlacementPrompt) -> PlacementChoice;

    /// Choose hand indices to summon.
    fn choose_summons(&mut self, prompt: &SummonPrompt) -> SummonChoice;

    /// Choose unit moves.
    fn choose_moves(&mut self, prompt: &MovementPrompt) -> MovementChoice;

    /// Choose attacks.
    fn choose_attacks(&mut self, prompt: &CombatPrompt) -> CombatChoice;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_placement_choice_wire_shapes() {
        let pass: PlacementChoice = serde_json::from_str(r#"{"pass": true}"#).unwrap();
        assert!(pass.is_pass());

        let place: PlacementChoice =
            serde_json::from_str(r#"{"card_index": 2, "pos": [3, 4]}"#).unwrap();
        assert_eq!(place, PlacementChoice::place(2, Position::new(3, 4)));
    }

    #[test]
    fn test_summon_choice_wire_shapes() {
        let bare: SummonChoice = serde_json::from_str("[0, 2, 1]").unwrap();
        assert_eq!(bare.indices(), vec![0, 2, 1]);

        let keyed: SummonChoice = serde_json::from_str(r#"{"cards": [1]}"#).unwrap();
        assert_eq!(keyed.indices(), vec![1]);

        let single: SummonChoice = serde_json::from_str(r#"{"card_index": 3}"#).unwrap();
        assert_eq!(single.indices(), vec![3]);

        assert_eq!(SummonChoice::none().indices(), Vec::<usize>::new());
    }

    #[test]
    fn test_movement_choice_wire_shapes() {
        let batch: MovementChoice =
            serde_json::from_str(r#"{"moves": [{"from": [1, 1], "to": [1, 2]}]}"#).unwrap();
        assert_eq!(batch.orders().len(), 1);

        let single: MovementChoice =
            serde_json::from_str(r#"{"from": [1, 1], "to": [2, 1]}"#).unwrap();
        let orders = single.orders();
        assert_eq!(orders[0].to, Position::new(2, 1));

        // The original protocol's alternate key names still parse
        let aliased: MovementChoice =
            serde_json::from_str(r#"{"origin": [0, 0], "dest": [0, 1], "unit": "Warden"}"#)
                .unwrap();
        let orders = aliased.orders();
        assert_eq!(orders[0].from, Position::new(0, 0));
        assert_eq!(orders[0].unit.as_deref(), Some("Warden"));
    }

    #[test]
    fn test_combat_choice_wire_shapes() {
        let batch: CombatChoice =
            serde_json::from_str(r#"{"attacks": [{"from": [1, 1], "to": [1, 2]}]}"#).unwrap();
        assert_eq!(batch.orders().len(), 1);

        let aliased: CombatChoice =
            serde_json::from_str(r#"{"attacker_pos": [1, 1], "defender_pos": [2, 2]}"#).unwrap();
        assert_eq!(
            aliased.orders(),
            vec![AttackOrder::new(Position::new(1, 1), Position::new(2, 2))]
        );
    }

    #[test]
    fn test_step_notice_serialization() {
        let notice = StepNotice::ExploreDraw {
            player: PlayerId::ONE,
            hand_size: 5,
        };
        let json = serde_json::to_string(&notice).unwrap();
        assert!(json.contains(r#""step":"explore_draw""#));

        let back: StepNotice = serde_json::from_str(&json).unwrap();
        assert_eq!(notice, back);
    }
}
