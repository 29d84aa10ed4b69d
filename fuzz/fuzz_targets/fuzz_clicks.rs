#![no_main]

//! Click sequence fuzzer.
//!
//! Places fuzzer-chosen pieces on a small board, then plays a fuzzer-chosen
//! sequence of clicks and passes. Every board invariant must hold after each
//! action.

use arbitrary::Arbitrary;
use banneret::game::check_invariants;
use banneret::{Board, Direction, PieceKind, Player, Position};
use libfuzzer_sys::fuzz_target;

/// A fuzzer-generated piece.
#[derive(Arbitrary, Debug)]
struct FuzzPiece {
    kind: u8,
    owner: u8,
    x: u8,
    y: u8,
    octant: u8,
}

/// A fuzzer-generated action.
#[derive(Arbitrary, Debug, Clone, Copy)]
enum FuzzAction {
    /// Click whatever stands on this corner-origin square.
    Click { x: u8, y: u8 },
    /// End the turn.
    Pass,
}

/// Structured input for click fuzzing.
#[derive(Arbitrary, Debug)]
struct ClickInput {
    players: u8,
    pieces: Vec<FuzzPiece>,
    actions: Vec<FuzzAction>,
}

fuzz_target!(|input: ClickInput| {
    let seats = 2 + input.players % 3;
    let players = (1..=seats).map(|id| Player::new(id, format!("p{id}"))).collect();
    let Ok(mut board) = Board::new(8, 8, players) else {
        return;
    };
    let bounds = board.bounds();

    for piece in input.pieces.iter().take(32) {
        let kind = PieceKind::STANDARD[usize::from(piece.kind) % PieceKind::STANDARD.len()];
        let owner = 1 + piece.owner % seats;
        let position = Position::from_file(i32::from(piece.x % 8), i32::from(piece.y % 8), bounds);
        let facing = Direction::from_degrees(f64::from(piece.octant % 8) * 45.0);
        // Taken squares are simply skipped
        let _ = board.place(kind, owner, position, facing);
    }

    for action in input.actions.into_iter().take(200) {
        match action {
            FuzzAction::Click { x, y } => {
                let square = Position::from_file(i32::from(x % 8), i32::from(y % 8), bounds);
                let hovered = board.pieces().piece_at(square).map(|p| p.id());
                board.select(hovered);
                board.click();
            }
            FuzzAction::Pass => board.pass_turn(),
        }
        board.check_victory();

        let violations = check_invariants(&board);
        assert!(violations.is_empty(), "Invariant violations: {violations:?}");
    }
});
