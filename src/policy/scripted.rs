//! Scripted decision policy.
//!
//! Plays back queued replies in order and falls back to pass/empty when
//! its script runs out. The reference policy for integration tests and
//! simple bots.

use std::collections::VecDeque;

use super::{
    CombatChoice, CombatPrompt, DecisionPolicy, MovementChoice, MovementPrompt, PlacementChoice,
    PlacementPrompt, StepNotice, SummonChoice, SummonPrompt,
};

/// A policy that replays a fixed script of choices.
#[derive(Debug, Default)]
pub struct ScriptedPolicy {
    placements: VecDeque<PlacementChoice>,
    summons: VecDeque<SummonChoice>,
    moves: VecDeque<MovementChoice>,
    attacks: VecDeque<CombatChoice>,
    /// Every notice received, in order.
    pub notices: Vec<StepNotice>,
}

impl ScriptedPolicy {
    /// A policy with an empty script: passes every decision.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a placement reply.
    pub fn queue_placement(&mut self, choice: PlacementChoice) -> &mut Self {
        self.placements.push_back(choice);
        self
    }

    /// Queue a summoning reply.
    pub fn queue_summons(&mut self, choice: SummonChoice) -> &mut Self {
        self.summons.push_back(choice);
        self
    }

    /// Queue a movement reply.
    pub fn queue_moves(&mut self, choice: MovementChoice) -> &mut Self {
        self.moves.push_back(choice);
        self
    }

    /// Queue a combat reply.
    pub fn queue_attacks(&mut self, choice: CombatChoice) -> &mut Self {
        self.attacks.push_back(choice);
        self
    }
}

impl DecisionPolicy for ScriptedPolicy {
    fn notify(&mut self, notice: &StepNotice) {
        self.notices.push(notice.clone());
    }

    fn choose_placement(&mut self, _prompt: &PlacementPrompt) -> PlacementChoice {
        self.placements
            .pop_front()
            .unwrap_or_else(PlacementChoice::pass)
    }

    fn choose_summons(&mut self, _prompt: &SummonPrompt) -> SummonChoice {
        self.summons.pop_front().unwrap_or_default()
    }

    fn choose_moves(&mut self, _prompt: &MovementPrompt) -> MovementChoice {
        self.moves.pop_front().unwrap_or_default()
    }

    fn choose_attacks(&mut self, _prompt: &CombatPrompt) -> CombatChoice {
        self.attacks.pop_front().unwrap_or_default()
    }
}
