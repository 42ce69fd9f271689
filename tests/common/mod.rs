//! Shared fixtures for the integration suites.
//!
//! Builds a small but complete catalog: one gate, one hero, forty plain
//! ruins, forty filler minions, and a handful of special cards the
//! suites summon or place directly.
#![allow(dead_code)]

use gatefall::{
    CardCatalog, CardDefinition, CardEffect, CardId, CardKind, GameOptions, GameState, GateStats,
    HeroStats, Keyword, MinionStats, PlayerId, PlayerPair, PlayerSetup, RelicStats, RuinStats,
    SpellStats, Terrain,
};
use smallvec::smallvec;

pub const GATE: CardId = CardId::new(1);
pub const HERO: CardId = CardId::new(2);

/// First of the forty plain filler ruins.
pub const PLAIN_RUIN: CardId = CardId::new(100);
/// Ruin with a connection bonus toward Gate terrain.
pub const ECHO_SHRINE: CardId = CardId::new(150);
/// Wetlands ruin.
pub const MIRE: CardId = CardId::new(151);
/// Ruin that costs 2 movement to enter.
pub const BRAMBLE_COURT: CardId = CardId::new(152);
/// Ruin that grants free movement.
pub const OLD_ROAD: CardId = CardId::new(153);

/// Plain 2/1 minion, speed 2, movement 2, cost 2.
pub const SKIRMISHER: CardId = CardId::new(300);
/// Bloodlust minion.
pub const RAVAGER: CardId = CardId::new(301);
/// Backline minion.
pub const VEILED_ARCHER: CardId = CardId::new(302);
/// Fortify minion.
pub const BULWARK: CardId = CardId::new(303);
/// Slow, hard-hitting minion.
pub const JUGGERNAUT: CardId = CardId::new(304);
/// Fast glass cannon.
pub const OUTRIDER: CardId = CardId::new(305);
/// Minion with movement 1.
pub const PLODDER: CardId = CardId::new(306);
/// Unaffordable minion.
pub const TITAN: CardId = CardId::new(307);
/// Relic with no upkeep.
pub const KEEPSAKE: CardId = CardId::new(310);
/// Spell, resolves immediately.
pub const EMBERFALL: CardId = CardId::new(311);

fn minion(
    id: CardId,
    name: &str,
    cost: u32,
    health: i32,
    attack: i32,
    defense: i32,
    speed: i32,
    movement: u32,
    keywords: &[Keyword],
) -> CardDefinition {
    CardDefinition::new(
        id,
        name,
        CardKind::Minion(MinionStats {
            cost,
            health,
            attack,
            defense,
            speed,
            movement,
            special_movement: smallvec![],
            keywords: keywords.iter().copied().collect(),
        }),
    )
}

fn ruin(id: CardId, name: &str, terrain: Terrain) -> CardDefinition {
    CardDefinition::new(
        id,
        name,
        CardKind::Ruin(RuinStats {
            terrain,
            sub_terrain: None,
            occupancy: 3,
        }),
    )
}

pub fn catalog() -> CardCatalog {
    let mut defs = vec![
        CardDefinition::new(
            GATE,
            "Basalt Gate",
            CardKind::Gate(GateStats {
                terrain: Terrain::Gate,
                starting_echoes: 3,
                explore_hand: 5,
                relic_hold: 2,
                gate_defense: 3,
                gate_health: 10,
            }),
        ),
        CardDefinition::new(
            HERO,
            "Warden of the Vale",
            CardKind::Hero(HeroStats {
                health: 10,
                attack: 3,
                defense: 2,
                speed: 3,
                movement: 3,
                adventure_hand: 5,
                elements: smallvec![],
                special_movement: smallvec![],
                keywords: smallvec![],
            }),
        ),
        ruin(ECHO_SHRINE, "Echo Shrine", Terrain::Fields)
            .with_effect(CardEffect::ConnectionBonus {
                terrain: Terrain::Gate,
            }),
        ruin(MIRE, "Drowned Mire", Terrain::Wetlands),
        ruin(BRAMBLE_COURT, "Bramble Court", Terrain::Woodlands)
            .with_effect(CardEffect::EntryPenalty { cost: 2 }),
        ruin(OLD_ROAD, "Old Road", Terrain::Fields).with_effect(CardEffect::FreeMovement),
        minion(SKIRMISHER, "Skirmisher", 2, 3, 2, 1, 2, 2, &[]),
        minion(RAVAGER, "Gate Ravager", 2, 3, 3, 0, 2, 2, &[Keyword::Bloodlust]),
        minion(VEILED_ARCHER, "Veiled Archer", 2, 2, 2, 0, 2, 2, &[Keyword::Backline]),
        minion(BULWARK, "Stone Bulwark", 2, 4, 1, 2, 1, 1, &[Keyword::Fortify]),
        minion(JUGGERNAUT, "Juggernaut", 4, 6, 5, 2, 1, 1, &[]),
        minion(OUTRIDER, "Outrider", 3, 2, 4, 0, 4, 3, &[]),
        minion(PLODDER, "Plodder", 1, 2, 1, 1, 1, 1, &[]),
        minion(TITAN, "Dormant Titan", 99, 9, 9, 9, 1, 1, &[]),
        CardDefinition::new(
            KEEPSAKE,
            "Traveler's Keepsake",
            CardKind::Relic(RelicStats {
                cost: 1,
                elements: smallvec![],
            }),
        ),
        CardDefinition::new(
            EMBERFALL,
            "Emberfall",
            CardKind::Spell(SpellStats {
                cost: 1,
                elements: smallvec![],
            }),
        ),
    ];

    for i in 0..40 {
        defs.push(ruin(
            CardId::new(100 + i),
            &format!("Crumbled Hall {i}"),
            Terrain::Fields,
        ));
    }
    for i in 0..40 {
        defs.push(minion(
            CardId::new(200 + i),
            &format!("Conscript {i}"),
            1,
            1,
            1,
            0,
            1,
            1,
            &[],
        ));
    }

    CardCatalog::new(defs).unwrap()
}

pub fn new_state(seed: u64) -> GameState {
    let setup = PlayerSetup {
        hero: HERO,
        gate: GATE,
    };
    GameState::new(
        catalog(),
        PlayerPair::new(setup, setup),
        GameOptions::default(),
        seed,
    )
    .unwrap()
}

/// Hand a player a specific card at the front of their hand.
pub fn give_card(state: &mut GameState, player: PlayerId, card: CardId) -> gatefall::InstanceId {
    let instance = state.spawn(card, player);
    state.player_mut(player).hand.insert(0, instance);
    instance
}

/// Put a minion straight into play at a position.
pub fn field_unit(
    state: &mut GameState,
    player: PlayerId,
    card: CardId,
    pos: gatefall::Position,
) -> gatefall::InstanceId {
    let instance = state.spawn(card, player);
    state.player_mut(player).staging.push(instance);
    state.board.add_occupant(pos, player, instance);
    instance
}
