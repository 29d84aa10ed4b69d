//! Turn bookkeeping derived from piece state.
//!
//! There is no stored state machine. The phase of a turn is recomputed from
//! the active player's pieces whenever it is needed.

use crate::game::{PieceFilter, PieceId, Selection, SlideResult};

/// Where the active player stands within their turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TurnPhase {
    /// Some own piece has not attempted its move yet.
    Moving,
    /// Every piece has moved and a rotation click could still change the
    /// board.
    Rotating,
    /// No click can change the board; only passing remains.
    TurnEnded,
    /// The game is decided.
    GameOver,
}

/// What a click did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClickOutcome {
    /// Nothing happened.
    Ignored,
    /// The selected piece attempted its move.
    Moved(SlideResult),
    /// The selected piece turned one step.
    Rotated(PieceId),
}

/// Rotation charges for one side during one turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RotationBudget {
    /// Sum of command counts over the side's commanders.
    pub limit: u32,
    /// Pieces currently rotated away from their turn-start facing.
    pub used: u32,
}

impl RotationBudget {
    /// Compute the budget for a side from its pieces.
    #[must_use]
    pub fn of(side: &Selection<'_>) -> Self {
        let limit = side.filter(&PieceFilter::new().commands(true)).command_total();
        let used = side.filter(&PieceFilter::new().rotated(true)).len();
        Self {
            limit,
            used: u32::try_from(used).unwrap_or(u32::MAX),
        }
    }

    /// Charges left. Negative when commanders were lost after rotating.
    #[must_use]
    pub fn remaining(self) -> i64 {
        i64::from(self.limit) - i64::from(self.used)
    }
}

/// Why a square should be highlighted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HighlightKind {
    /// The selected piece belongs to the active player.
    Selected,
    /// The piece still has to attempt its move.
    ToMove,
    /// The piece marks a rotation charge: an unused commander or an already
    /// rotated piece.
    Rotation,
}

/// A render hint for one piece's square.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Highlight {
    /// The piece to highlight.
    pub piece: PieceId,
    /// Why.
    pub kind: HighlightKind,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{Direction, Piece, PieceKind, PieceList, Position};

    #[test]
    fn test_budget_counts_commanders_and_rotations() {
        let mut pieces: PieceList = [
            (PieceKind::B0, 0),
            (PieceKind::B0, 1),
            (PieceKind::O1, 2),
            (PieceKind::O1, 3),
        ]
        .into_iter()
        .enumerate()
        .map(|(i, (kind, x))| {
            Piece::new(PieceId(u32::try_from(i).unwrap()), kind, 1, Position::new(x, 0), Direction::EAST)
        })
        .collect();

        let budget = RotationBudget::of(&pieces.all());
        assert_eq!(budget, RotationBudget { limit: 2, used: 0 });
        assert_eq!(budget.remaining(), 2);

        if let Some(p) = pieces.get_mut(PieceId(2)) {
            p.rotate();
        }
        assert_eq!(RotationBudget::of(&pieces.all()).remaining(), 1);
    }

    #[test]
    fn test_budget_can_go_negative() {
        let budget = RotationBudget { limit: 0, used: 2 };
        assert_eq!(budget.remaining(), -2);
    }
}
