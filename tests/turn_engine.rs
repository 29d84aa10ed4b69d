//! Turn engine integration tests.
//!
//! Drives whole turns through the public API: clicks, rotation budgets,
//! turn passing, captures and victory.

#![allow(missing_docs)]
#![allow(clippy::unwrap_used)]

use banneret::game::{
    FACING_PRECISION, NO_ROTATION, PieceFilter, SlideStop, check_invariants,
};
use banneret::{
    Board, ClickOutcome, Direction, PieceId, PieceKind, Player, PlayerId, Position, TurnPhase,
};

/// A base that grants two rotations per turn.
const WARLORD: PieceKind = PieceKind::new("W2", 0, NO_ROTATION, 0, 2);

fn duel() -> Board {
    Board::new(8, 8, vec![Player::new(1, "Thane"), Player::new(2, "Stacey")]).unwrap()
}

fn put(board: &mut Board, kind: PieceKind, owner: PlayerId, x: i32, y: i32, deg: f64) -> PieceId {
    board
        .place(kind, owner, Position::new(x, y), Direction::from_degrees(deg))
        .unwrap()
}

fn moved_result(outcome: ClickOutcome) -> banneret::game::SlideResult {
    match outcome {
        ClickOutcome::Moved(result) => result,
        other => panic!("expected a move, got {other:?}"),
    }
}

#[test]
fn test_head_on_rotating_piece_is_engaged() {
    let mut board = duel();
    put(&mut board, PieceKind::B0, 1, -4, -4, 0.0);
    let a = put(&mut board, PieceKind::O1, 1, 0, 0, 0.0);
    let b = put(&mut board, PieceKind::O1, 2, 1, 0, 180.0);
    put(&mut board, PieceKind::B0, 2, 3, 3, 0.0);

    let result = moved_result(board.click_piece(a));
    assert_eq!(result.stop, SlideStop::Engaged(b));
    assert!(result.captured.is_empty());
    assert_eq!(board.piece(a).unwrap().position(), Position::new(0, 0));
    assert!(board.piece(b).is_some());
}

#[test]
fn test_head_on_base_is_captured() {
    let mut board = duel();
    put(&mut board, PieceKind::B0, 1, -4, -4, 0.0);
    let a = put(&mut board, PieceKind::O1, 1, 0, 0, 0.0);
    let base = put(&mut board, PieceKind::B0, 2, 1, 0, 180.0);
    put(&mut board, PieceKind::B0, 2, 3, 3, 0.0);

    let result = moved_result(board.click_piece(a));
    assert_eq!(result.captured, vec![base]);
    assert_eq!(board.piece(a).unwrap().position(), Position::new(1, 0));
    assert!(board.piece(base).is_none());
}

#[test]
fn test_side_on_rotating_piece_is_captured() {
    let mut board = duel();
    put(&mut board, PieceKind::B0, 1, -4, -4, 0.0);
    let a = put(&mut board, PieceKind::O2, 1, 0, 0, 0.0);
    let b = put(&mut board, PieceKind::O1, 2, 1, 0, 90.0);
    put(&mut board, PieceKind::B0, 2, 3, 3, 0.0);

    let result = moved_result(board.click_piece(a));
    assert_eq!(result.captured, vec![b]);
    assert_eq!(result.to, Position::new(2, 0));
    assert_eq!(result.stop, SlideStop::Exhausted);
}

#[test]
fn test_move_marks_moved_even_when_blocked() {
    let mut board = duel();
    put(&mut board, PieceKind::B0, 1, -4, -4, 0.0);
    let a = put(&mut board, PieceKind::O1, 1, 3, 0, 0.0);
    put(&mut board, PieceKind::B0, 2, 3, 3, 0.0);

    let result = moved_result(board.click_piece(a));
    assert_eq!(result.stop, SlideStop::OutOfBounds);
    assert!(!result.displaced());
    let piece = board.piece(a).unwrap();
    assert!(piece.moved());
    assert_eq!(piece.remaining_move(), 0);

    // A second click neither moves nor refunds
    assert!(!matches!(board.click_piece(a), ClickOutcome::Moved(_)));
    assert_eq!(board.piece(a).unwrap().remaining_move(), 0);
}

#[test]
fn test_rotation_budget_of_two() {
    let mut board = duel();
    put(&mut board, WARLORD, 1, -4, -4, 0.0);
    let a = put(&mut board, PieceKind::O1, 1, -2, 0, 90.0);
    let b = put(&mut board, PieceKind::O1, 1, 0, 0, 90.0);
    let c = put(&mut board, PieceKind::O1, 1, 2, 0, 90.0);
    put(&mut board, PieceKind::B0, 2, 3, 3, 0.0);

    for id in [a, b, c] {
        moved_result(board.click_piece(id));
    }
    assert_eq!(board.rotation_budget().remaining(), 2);

    assert_eq!(board.click_piece(a), ClickOutcome::Rotated(a));
    // Rotating the same piece again uses no extra charge
    assert_eq!(board.click_piece(a), ClickOutcome::Rotated(a));
    assert_eq!(board.rotation_budget().remaining(), 1);

    assert_eq!(board.click_piece(b), ClickOutcome::Rotated(b));
    assert_eq!(board.rotation_budget().remaining(), 0);

    // Budget spent: fresh pieces are refused, rotated ones keep cycling
    assert_eq!(board.click_piece(c), ClickOutcome::Ignored);
    assert!(!board.piece(c).unwrap().rotated());
    assert_eq!(board.click_piece(b), ClickOutcome::Rotated(b));
    assert!(board.piece(b).unwrap().rotated());
    assert_eq!(board.phase(), TurnPhase::Rotating);
}

#[test]
fn test_full_cycle_frees_a_charge() {
    let mut board = duel();
    put(&mut board, PieceKind::B0, 1, -4, -4, 0.0);
    let a = put(&mut board, PieceKind::O1, 1, 0, 0, 90.0);
    put(&mut board, PieceKind::B0, 2, 3, 3, 0.0);

    moved_result(board.click_piece(a));
    for _ in 0..4 {
        assert_eq!(board.click_piece(a), ClickOutcome::Rotated(a));
    }
    let piece = board.piece(a).unwrap();
    assert!(!piece.rotated());
    assert!(piece.facing().approx_eq(Direction::from_degrees(90.0), FACING_PRECISION));
    assert_eq!(board.rotation_budget().remaining(), 1);
}

#[test]
fn test_pass_turn_rotates_queue_and_clears_state() {
    let mut board = duel();
    put(&mut board, PieceKind::B0, 1, -4, -4, 0.0);
    let a = put(&mut board, PieceKind::O2, 1, 0, 0, 90.0);
    let base = put(&mut board, PieceKind::B0, 2, 3, 3, 0.0);

    moved_result(board.click_piece(a));
    board.click_piece(a);
    board.pass_turn();

    let order: Vec<PlayerId> = board.turn_order().map(|p| p.id).collect();
    assert_eq!(order, [2, 1]);
    assert_eq!(board.active_player().id, 2);

    for piece in board.pieces().iter() {
        assert!(!piece.rotated());
        assert_eq!(piece.remaining_move(), piece.kind().speed());
        assert_eq!(piece.moved(), piece.kind().speed() == 0);
    }
    assert!(board.piece(base).unwrap().moved());

    board.pass_turn();
    assert_eq!(board.active_player().id, 1);
    assert_eq!(board.turn_number(), 2);
}

#[test]
fn test_clicks_only_act_for_active_player() {
    let mut board = duel();
    put(&mut board, PieceKind::B0, 1, -4, -4, 0.0);
    put(&mut board, PieceKind::O1, 1, -2, -2, 0.0);
    let theirs = put(&mut board, PieceKind::O1, 2, 0, 0, 0.0);
    put(&mut board, PieceKind::B0, 2, 3, 3, 0.0);

    assert_eq!(board.click_piece(theirs), ClickOutcome::Ignored);
    board.pass_turn();
    moved_result(board.click_piece(theirs));
}

#[test]
fn test_elimination_with_three_seats() {
    let mut board = Board::new(
        8,
        8,
        vec![Player::new(1, "a"), Player::new(2, "b"), Player::new(3, "c")],
    )
    .unwrap();
    put(&mut board, PieceKind::B0, 1, -4, -4, 0.0);
    let striker = put(&mut board, PieceKind::O1, 1, 0, 0, 0.0);
    put(&mut board, PieceKind::B0, 2, 1, 0, 0.0);
    put(&mut board, PieceKind::O2, 2, 2, 2, 0.0);
    put(&mut board, PieceKind::B0, 3, 2, 0, 0.0);

    moved_result(board.click_piece(striker));
    assert_eq!(board.check_victory(), vec![2]);
    assert!(!board.is_game_over());
    assert!(board.pieces().filter(&PieceFilter::new().owner(2)).is_empty());
    assert!(board.check_victory().is_empty());

    // The eliminated seat keeps its place in the rotation with nothing to do
    board.pass_turn();
    assert_eq!(board.active_player().id, 2);
    assert_eq!(board.phase(), TurnPhase::TurnEnded);
    board.pass_turn();
    assert_eq!(board.active_player().id, 3);
    board.pass_turn();
    assert_eq!(board.active_player().id, 1);

    let result = moved_result(board.click_piece(striker));
    assert_eq!(result.to, Position::new(2, 0));
    assert_eq!(board.check_victory(), vec![3]);
    assert!(board.is_game_over());
    assert_eq!(board.winner(), Some(1));
    assert!(check_invariants(&board).is_empty());
}

#[test]
fn test_victory_when_last_commander_falls() {
    let mut board = duel();
    put(&mut board, PieceKind::B0, 1, -4, -4, 0.0);
    let striker = put(&mut board, PieceKind::O2, 1, 0, 0, 90.0);
    put(&mut board, PieceKind::B0, 2, 0, 2, 0.0);
    put(&mut board, PieceKind::O1, 2, 3, 3, 0.0);
    put(&mut board, PieceKind::D1, 2, -3, 3, 315.0);

    let result = moved_result(board.click_piece(striker));
    assert_eq!(result.captured.len(), 1);
    assert!(!board.is_game_over());

    assert_eq!(board.check_victory(), vec![2]);
    assert!(board.is_game_over());
    assert_eq!(board.winner(), Some(1));
    assert_eq!(board.pieces().len(), 2);
    assert_eq!(board.phase(), TurnPhase::GameOver);
    assert!(board.highlights().is_empty());
}
