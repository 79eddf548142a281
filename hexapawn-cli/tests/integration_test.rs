//! Integration tests for Hexapawn
//!
//! Tests the full stack: notation, rules engine, move selection and
//! configuration, the way the console driver uses them.

use hexapawn_core::{
    board::Square,
    game::{GameResult, GameState, Move, Player},
    ai::{Decision, MatchboxAi, MoveSelector},
    GameConfig, MoveError,
};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

// ============================================================================
// TEST FIXTURES
// ============================================================================

/// Parse and play a list of "from->to" moves, returning the last result
fn play_moves(game: &mut GameState, moves: &[&str]) -> GameResult {
    let mut result = game.result();
    for text in moves {
        let mv = Move::parse(text, game.dimension()).unwrap();
        result = game.apply_move(mv).unwrap();
    }
    result
}

// ============================================================================
// GAME LOGIC TESTS
// ============================================================================

#[test]
fn test_classic_three_by_three_opening() {
    let game = GameState::new(3).unwrap();

    // B1 -> B2 is a straight step into an empty cell
    let straight = Move::parse("B1->B2", 3).unwrap();
    assert!(game.is_legal(Player::One, straight));

    // A1 -> B2 needs an enemy pawn on B2
    let diagonal = Move::parse("A1->B2", 3).unwrap();
    assert!(!game.is_legal(Player::One, diagonal));

    let capture = GameState::from_position("PPP/_c_/c_c", Player::One).unwrap();
    assert!(capture.is_legal(Player::One, diagonal));
}

#[test]
fn test_full_game_player_one() {
    let mut game = GameState::new(3).unwrap();
    let result = play_moves(&mut game, &["B1->B2", "C3->C2", "B2->A3"]);

    assert_eq!(result, GameResult::PlayerOneWins);
    assert_eq!(game.board().to_position(), "P_P/__C/PC_");
}

#[test]
fn test_full_game_player_two() {
    let mut game = GameState::new(3).unwrap();
    let result = play_moves(
        &mut game,
        &["B1->B2", "A3->B2", "C1->B2", "C3->C2", "A1->A2", "C2->C1"],
    );

    assert_eq!(result, GameResult::PlayerTwoWins);
    assert_eq!(game.winner(), Some(Player::Two));
}

#[test]
fn test_elimination_on_larger_board() {
    // Player Two's last pawn is captured away from the goal row
    let mut game = GameState::from_position("P___/_P__/C___/____", Player::One).unwrap();
    let result = play_moves(&mut game, &["B2->A3"]);

    assert_eq!(result, GameResult::PlayerOneWins);
    assert_eq!(game.board().pawn_count(Player::Two), 0);
}

#[test]
fn test_blockade_is_judged_on_the_blocked_players_turn() {
    let mut game = GameState::from_position("_P_/___/_C_", Player::One).unwrap();

    // B1 -> B2 leaves Player Two's only pawn facing a pawn head-on
    let result = play_moves(&mut game, &["B1->B2"]);
    assert_eq!(result, GameResult::PlayerOneWins);
    assert!(game.legal_moves(Player::Two).is_empty());
}

#[test]
fn test_finished_game_rejects_moves_until_reset() {
    let mut game = GameState::new(3).unwrap();
    play_moves(&mut game, &["B1->B2", "C3->C2", "B2->A3"]);

    let late = Move::new(Square::new(0, 0), Square::new(1, 0));
    assert_eq!(game.apply_move(late), Err(MoveError::GameOver));

    game.reset();
    assert_eq!(game.result(), GameResult::Ongoing);
    assert!(game.apply_move(late).is_ok());
}

// ============================================================================
// MOVE SELECTION TESTS
// ============================================================================

#[test]
fn test_matchbox_defers_for_a_whole_game() {
    let mut ai = MatchboxAi::new();
    let mut game = GameState::new(4).unwrap();
    let mut rng = ChaCha8Rng::seed_from_u64(7);

    while !game.is_over() {
        let player = game.current_player();
        assert_eq!(ai.select_move(&game, player).unwrap(), Decision::Defer);

        let moves = game.legal_moves(player);
        let mv = moves[rng.gen_range(0..moves.len())];
        game.apply_move(mv).unwrap();
    }

    assert!(game.winner().is_some());
    assert!(ai.deferrals() > 0);
}

// ============================================================================
// MATCH TESTS
// ============================================================================

#[test]
fn test_random_match_has_no_draws() {
    let config = GameConfig::default();
    let mut game = GameState::new(config.dimension).unwrap();
    let mut rng = ChaCha8Rng::seed_from_u64(42);
    let mut wins = [0usize; 2];

    for _ in 0..config.rounds {
        while !game.is_over() {
            let moves = game.legal_moves(game.current_player());
            let mv = moves[rng.gen_range(0..moves.len())];
            game.apply_move(mv).unwrap();
        }
        match game.result() {
            GameResult::PlayerOneWins => wins[0] += 1,
            GameResult::PlayerTwoWins => wins[1] += 1,
            GameResult::Ongoing => panic!("round ended without a winner"),
        }
        game.reset();
    }

    assert_eq!(wins[0] + wins[1], 12);
}
