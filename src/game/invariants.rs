//! Board invariants - sanity checks that detect bugs.
//!
//! No sequence of clicks and passes should ever violate these. They are used
//! by the `validate` command, the fuzz target and the property tests.

use std::collections::HashSet;

use thiserror::Error;

use crate::game::Board;

/// Invariant violation error.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Invariant violation: {message}")]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    pub message: String,
}

impl InvariantViolation {
    fn new(message: String) -> Self {
        Self { message }
    }
}

/// Check all board invariants.
///
/// Returns a list of violations found, or empty if all invariants hold.
#[must_use]
pub fn check_invariants(board: &Board) -> Vec<InvariantViolation> {
    let mut violations = Vec::new();
    let mut occupied = HashSet::new();
    let bounds = board.bounds();

    for piece in board.pieces().iter() {
        let id = piece.id();
        let pos = piece.position();

        if !bounds.contains(pos) {
            violations.push(InvariantViolation::new(format!(
                "Piece {id} at {pos} is off the {}x{} board",
                bounds.width, bounds.height
            )));
        }

        if !occupied.insert(pos) {
            violations.push(InvariantViolation::new(format!(
                "Piece {id} shares square {pos} with another piece"
            )));
        }

        if piece.kind().speed() == 0 && !piece.moved() {
            violations.push(InvariantViolation::new(format!(
                "Immobile piece {id} is not marked as moved"
            )));
        }

        if piece.remaining_move() > piece.kind().speed() {
            violations.push(InvariantViolation::new(format!(
                "Piece {id} has {} squares left but speed {}",
                piece.remaining_move(),
                piece.kind().speed()
            )));
        }

        if board.player(piece.owner()).is_none() {
            violations.push(InvariantViolation::new(format!(
                "Piece {id} belongs to unknown player {}",
                piece.owner()
            )));
        }
    }

    let outlived = board
        .winner()
        .filter(|&winner| board.pieces().iter().any(|p| p.owner() != winner));
    if let Some(winner) = outlived {
        violations.push(InvariantViolation::new(format!(
            "Game is over but pieces of players other than {winner} remain"
        )));
    }

    violations
}
