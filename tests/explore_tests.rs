//! Explore Phase integration tests.

mod common;

use common::{give_card, new_state, ECHO_SHRINE, GATE};
use gatefall::{
    CardKind, ExplorePhase, PlacementChoice, PlayerId, Position, ScriptedPolicy, StepNotice,
};

fn run_round(
    state: &mut gatefall::GameState,
    first: &mut ScriptedPolicy,
    second: &mut ScriptedPolicy,
) -> gatefall::ExploreOutcome {
    ExplorePhase::new(state, [first, second]).run()
}

#[test]
fn gate_placement_uses_opposite_centered_edges() {
    let mut state = new_state(42);
    let mut p1 = ScriptedPolicy::new();
    let mut p2 = ScriptedPolicy::new();

    run_round(&mut state, &mut p1, &mut p2);

    // 7x7 board: bottom-center and top-center
    let p1_pos = Position::new(6, 3);
    let p2_pos = Position::new(0, 3);
    assert_eq!(state.gate_position(PlayerId::ONE), Some(p1_pos));
    assert_eq!(state.gate_position(PlayerId::TWO), Some(p2_pos));

    for (player, pos) in [(PlayerId::ONE, p1_pos), (PlayerId::TWO, p2_pos)] {
        let tile = state.board.tile(pos).expect("gate tile placed");
        assert!(tile.face_up);
        assert!(matches!(state.def(tile.card).kind, CardKind::Gate(_)));

        // The hero is the sole occupant of its own gate
        let occupants = state.board.occupants_at(pos);
        assert_eq!(occupants.len(), 1);
        assert_eq!(occupants[0].owner, player);
        assert_eq!(occupants[0].unit, state.player(player).hero);
    }

    assert!(p1.notices.contains(&StepNotice::GatePlacement));
    assert!(p2.notices.contains(&StepNotice::GatePlacement));
}

#[test]
fn gate_placement_only_happens_once() {
    let mut state = new_state(42);
    let mut p1 = ScriptedPolicy::new();
    let mut p2 = ScriptedPolicy::new();

    run_round(&mut state, &mut p1, &mut p2);
    let tiles_after_first: Vec<_> = state.board.all_tiles().map(|(p, _)| p).collect();

    run_round(&mut state, &mut p1, &mut p2);

    assert_eq!(state.gate_position(PlayerId::ONE), Some(Position::new(6, 3)));
    let tiles_after_second: Vec<_> = state.board.all_tiles().map(|(p, _)| p).collect();
    assert_eq!(tiles_after_first.len(), tiles_after_second.len());
}

#[test]
fn draw_step_fills_an_empty_hand_to_the_gate_target() {
    let mut state = new_state(42);
    let mut p1 = ScriptedPolicy::new();
    let mut p2 = ScriptedPolicy::new();

    run_round(&mut state, &mut p1, &mut p2);

    // Empty hand, 40-card deck, explore hand target 5
    assert!(p1.notices.contains(&StepNotice::ExploreDraw {
        player: PlayerId::ONE,
        hand_size: 5,
    }));
    assert!(p2.notices.contains(&StepNotice::ExploreDraw {
        player: PlayerId::TWO,
        hand_size: 5,
    }));
}

#[test]
fn passed_round_mulligans_every_drawn_card() {
    let mut state = new_state(42);
    let mut p1 = ScriptedPolicy::new();
    let mut p2 = ScriptedPolicy::new();

    run_round(&mut state, &mut p1, &mut p2);

    for player in PlayerId::both() {
        assert!(state.player(player).hand.is_empty());
        assert_eq!(state.player(player).explore_deck.len(), 40);
    }
}

#[test]
fn legal_placement_spends_one_hand_card() {
    let mut state = new_state(42);
    let mut p1 = ScriptedPolicy::new();
    let mut p2 = ScriptedPolicy::new();
    // Adjacent to player 1's own gate
    p1.queue_placement(PlacementChoice::place(0, Position::new(5, 3)));

    run_round(&mut state, &mut p1, &mut p2);

    let tile = state.board.tile(Position::new(5, 3)).expect("ruin placed");
    // Reveal step flipped it face-up
    assert!(tile.face_up);
    assert!(matches!(state.def(tile.card).kind, CardKind::Ruin(_)));
    // 40 - 5 drawn + 4 mulliganed back
    assert_eq!(state.player(PlayerId::ONE).explore_deck.len(), 39);
}

#[test]
fn placement_without_adjacent_face_up_tile_is_rejected() {
    let mut state = new_state(42);
    let mut p1 = ScriptedPolicy::new();
    let mut p2 = ScriptedPolicy::new();
    // Nowhere near either gate
    p1.queue_placement(PlacementChoice::place(0, Position::new(3, 0)));

    run_round(&mut state, &mut p1, &mut p2);

    assert!(state.board.tile(Position::new(3, 0)).is_none());
    // The hand card was not consumed
    assert_eq!(state.player(PlayerId::ONE).explore_deck.len(), 40);
}

#[test]
fn placement_onto_occupied_position_is_rejected() {
    let mut state = new_state(42);
    let mut p1 = ScriptedPolicy::new();
    let mut p2 = ScriptedPolicy::new();
    // Player 1's own gate position
    p1.queue_placement(PlacementChoice::place(0, Position::new(6, 3)));

    run_round(&mut state, &mut p1, &mut p2);

    let tile = state.board.tile(Position::new(6, 3)).unwrap();
    assert_eq!(tile.card, GATE);
    assert_eq!(state.player(PlayerId::ONE).explore_deck.len(), 40);
}

#[test]
fn placement_out_of_bounds_is_rejected() {
    let mut state = new_state(42);
    let mut p1 = ScriptedPolicy::new();
    let mut p2 = ScriptedPolicy::new();
    p1.queue_placement(PlacementChoice::place(0, Position::new(7, 3)));

    run_round(&mut state, &mut p1, &mut p2);

    assert_eq!(state.player(PlayerId::ONE).explore_deck.len(), 40);
}

#[test]
fn invalid_hand_index_forces_a_pass() {
    let mut state = new_state(42);
    let mut p1 = ScriptedPolicy::new();
    let mut p2 = ScriptedPolicy::new();
    p1.queue_placement(PlacementChoice::place(99, Position::new(5, 3)));
    // A follow-up that would be legal, but the pass already stands
    p1.queue_placement(PlacementChoice::place(0, Position::new(5, 3)));

    run_round(&mut state, &mut p1, &mut p2);

    assert!(state.board.tile(Position::new(5, 3)).is_none());
    assert_eq!(state.player(PlayerId::ONE).explore_deck.len(), 40);
}

#[test]
fn alternation_lets_both_players_place() {
    let mut state = new_state(42);
    let mut p1 = ScriptedPolicy::new();
    let mut p2 = ScriptedPolicy::new();
    // Face-down tiles grant no adjacency, so every placement this round
    // must neighbor a face-up gate
    p1.queue_placement(PlacementChoice::place(0, Position::new(5, 3)));
    p1.queue_placement(PlacementChoice::place(0, Position::new(6, 2)));
    p2.queue_placement(PlacementChoice::place(0, Position::new(1, 3)));

    run_round(&mut state, &mut p1, &mut p2);

    assert!(state.board.tile(Position::new(5, 3)).is_some());
    assert!(state.board.tile(Position::new(6, 2)).is_some());
    assert!(state.board.tile(Position::new(1, 3)).is_some());
    assert_eq!(state.player(PlayerId::ONE).explore_deck.len(), 38);
    assert_eq!(state.player(PlayerId::TWO).explore_deck.len(), 39);
}

#[test]
fn reveal_triggers_declared_connection_effects() {
    let mut state = new_state(42);
    let mut p1 = ScriptedPolicy::new();
    let mut p2 = ScriptedPolicy::new();

    // A shrine that declares a bonus when connecting to Gate terrain,
    // placed right next to player 1's gate
    give_card(&mut state, PlayerId::ONE, ECHO_SHRINE);
    p1.queue_placement(PlacementChoice::place(0, Position::new(5, 3)));

    let outcome = run_round(&mut state, &mut p1, &mut p2);

    assert!(outcome
        .triggered_effects
        .iter()
        .any(|e| e.contains("Echo Shrine") && e.contains("Gate")));
    assert!(p2.notices.iter().any(|n| matches!(
        n,
        StepNotice::Reveal { effects } if !effects.is_empty()
    )));
}

#[test]
fn path_check_reports_connection_without_acting_on_it() {
    let mut state = new_state(42);
    let mut p1 = ScriptedPolicy::new();
    let mut p2 = ScriptedPolicy::new();

    let outcome = run_round(&mut state, &mut p1, &mut p2);
    assert!(!outcome.path_connected);

    // Lay a face-up column between the gates by hand
    for row in 1..6 {
        state
            .board
            .place_tile(Position::new(row, 3), ECHO_SHRINE, true);
    }

    let outcome = run_round(&mut state, &mut p1, &mut p2);
    assert!(outcome.path_connected);
}

#[test]
fn round_advances_the_turn() {
    let mut state = new_state(42);
    let mut p1 = ScriptedPolicy::new();
    let mut p2 = ScriptedPolicy::new();

    assert_eq!(state.turn, 1);
    assert_eq!(state.active, PlayerId::ONE);

    run_round(&mut state, &mut p1, &mut p2);

    assert_eq!(state.turn, 2);
    assert_eq!(state.active, PlayerId::TWO);
}
