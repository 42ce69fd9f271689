//! Combat resolution.
//!
//! Deterministic damage and ordering rules invoked by the adventure
//! turn's combat step. The higher-speed combatant strikes first; equal
//! speed resolves with the attacker striking first. A combatant slain by
//! the first strike never counterstrikes.

use tracing::debug;

use crate::cards::InstanceId;
use crate::core::player::PlayerId;
use crate::core::state::GameState;

/// Damage dealt by one strike.
///
/// Equal attack and defense always chip for exactly 1, whatever the
/// magnitude (0 vs 0 included); otherwise damage is attack minus
/// defense, floored at 0.
#[must_use]
pub fn strike_damage(attack: i32, defense: i32) -> i32 {
    if attack == defense {
        1
    } else {
        (attack - defense).max(0)
    }
}

/// How a resolved unit combat ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CombatOutcome {
    /// The defender died to the first strike; no counterstrike.
    DefenderSlain,
    /// The attacker died; the defender survived.
    AttackerSlain,
    /// Both units survived the exchange.
    BothSurvived,
}

#[derive(Clone, Copy)]
struct Combatant {
    id: InstanceId,
    attack: i32,
    defense: i32,
    speed: i32,
}

fn combatant(state: &GameState, id: InstanceId) -> Combatant {
    let kind = &state.def_of(id).kind;
    let temp = state.unit(id).map_or(0, |u| u.temp_defense);
    Combatant {
        id,
        attack: kind.attack(),
        // Defense includes any active Fortify buff
        defense: kind.defense() + temp,
        speed: kind.speed(),
    }
}

/// Apply one strike; returns true if the target died and left play.
fn strike(state: &mut GameState, striker: Combatant, target: Combatant) -> bool {
    let damage = strike_damage(striker.attack, target.defense);
    if damage > 0 {
        if let Some(unit) = state.unit_mut(target.id) {
            unit.apply_damage(damage);
        }
    }
    if state.unit(target.id).is_some_and(|u| u.is_dead()) {
        debug!(
            striker = state.name_of(striker.id),
            slain = state.name_of(target.id),
            damage,
            "unit slain"
        );
        state.remove_from_play(target.id);
        true
    } else {
        false
    }
}

/// Resolve a declared attack between two units.
///
/// Strike order follows speed, attacker winning ties. The caller has
/// already validated range, summoning sickness, and Backline screening.
pub fn resolve_unit_combat(
    state: &mut GameState,
    attacker: InstanceId,
    defender: InstanceId,
) -> CombatOutcome {
    let atk = combatant(state, attacker);
    let def = combatant(state, defender);

    if atk.speed >= def.speed {
        if strike(state, atk, def) {
            return CombatOutcome::DefenderSlain;
        }
        if strike(state, def, atk) {
            return CombatOutcome::AttackerSlain;
        }
    } else {
        if strike(state, def, atk) {
            return CombatOutcome::AttackerSlain;
        }
        if strike(state, atk, def) {
            return CombatOutcome::DefenderSlain;
        }
    }
    CombatOutcome::BothSurvived
}

/// Resolve a direct strike against a player's gate.
///
/// Gates have no speed and never strike back. Returns the damage dealt;
/// gate health is floored at zero.
pub fn resolve_gate_strike(
    state: &mut GameState,
    attacker: InstanceId,
    gate_owner: PlayerId,
) -> i32 {
    let attack = state.def_of(attacker).kind.attack();
    let gate = state.player(gate_owner).gate;
    let gate_defense = match &state.def_of(gate).kind {
        crate::cards::CardKind::Gate(g) => g.gate_defense,
        _ => 0,
    };

    let damage = strike_damage(attack, gate_defense);
    if let Some(instance) = state.unit_mut(gate) {
        instance.health = (instance.health - damage).max(0);
    }
    debug!(
        attacker = state.name_of(attacker),
        %gate_owner,
        damage,
        "gate struck"
    );
    damage
}
