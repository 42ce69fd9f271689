//! The upkeep interpreter.
//!
//! Applies recurring costs during the maintenance step by walking each
//! in-play card's structured effect list. Two patterns exist: an echo
//! cost that removes the card from play when it cannot be paid, and a
//! health loss that kills at zero. Relics and gear have no health of
//! their own, so their health loss is redirected to the hero.

use tracing::debug;

use crate::cards::{CardEffect, InstanceId};
use crate::core::player::PlayerId;
use crate::core::state::GameState;

/// Pay all upkeep costs for a player's in-play cards.
///
/// Processes the hero area and staging area first, then the relic area.
/// A card that fails its echo cost or dies to its health cost moves to
/// the adventure discard and skips its remaining effects.
pub fn pay_upkeep(state: &mut GameState, player: PlayerId) {
    let mut units: Vec<InstanceId> = state.player(player).hero_area.into_iter().collect();
    units.extend(state.player(player).staging.iter().copied());

    for unit in units {
        let effects = state.def_of(unit).effects.clone();
        for effect in effects {
            match effect {
                CardEffect::UpkeepEchoCost { amount } => {
                    if !state.player_mut(player).spend_echoes(amount) {
                        debug!(
                            unit = state.name_of(unit),
                            cost = amount,
                            "upkeep unpaid, unit leaves play"
                        );
                        state.remove_from_play(unit);
                        break;
                    }
                }
                CardEffect::UpkeepHealthLoss { amount } => {
                    if let Some(instance) = state.unit_mut(unit) {
                        instance.apply_damage(amount);
                    }
                    if state.unit(unit).is_some_and(|u| u.is_dead()) {
                        debug!(
                            unit = state.name_of(unit),
                            loss = amount,
                            "upkeep health loss killed unit"
                        );
                        state.remove_from_play(unit);
                        break;
                    }
                }
                _ => {}
            }
        }
    }

    let items: Vec<InstanceId> = state.player(player).relic_area.iter().copied().collect();
    for item in items {
        let effects = state.def_of(item).effects.clone();
        for effect in effects {
            match effect {
                CardEffect::UpkeepEchoCost { amount } => {
                    if !state.player_mut(player).spend_echoes(amount) {
                        debug!(
                            item = state.name_of(item),
                            cost = amount,
                            "upkeep unpaid, item leaves play"
                        );
                        state.remove_from_play(item);
                        break;
                    }
                }
                CardEffect::UpkeepHealthLoss { amount } => {
                    // No health field on items: the hero takes the loss
                    let Some(hero) = state.player(player).hero_area else {
                        continue;
                    };
                    if let Some(instance) = state.unit_mut(hero) {
                        instance.apply_damage(amount);
                    }
                    if state.unit(hero).is_some_and(|u| u.is_dead()) {
                        debug!(
                            item = state.name_of(item),
                            loss = amount,
                            "item upkeep killed the hero"
                        );
                        state.remove_from_play(hero);
                    }
                }
                _ => {}
            }
        }
    }
}
