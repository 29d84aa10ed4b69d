//! Sliding movement and capture.
//!
//! A move slides a piece square by square along its facing until its budget
//! runs out or something stops it. Every step rescans the board, so a piece
//! captured earlier in the same slide no longer blocks later steps.

use tracing::{debug, trace};

use crate::game::{Bounds, PieceId, PieceList, Position};

/// Why a slide stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlideStop {
    /// The movement budget for this turn is spent.
    Exhausted,
    /// The next square is off the board.
    OutOfBounds,
    /// A piece of the same side holds the next square.
    Friendly(PieceId),
    /// An opposing piece faces the mover head-on and cannot be taken.
    Engaged(PieceId),
}

/// Outcome of one move attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlideResult {
    /// The piece that moved.
    pub piece: PieceId,
    /// Square the slide started on.
    pub from: Position,
    /// Square the slide ended on.
    pub to: Position,
    /// Squares actually travelled.
    pub squares: u8,
    /// Opposing pieces removed along the way, in order.
    pub captured: Vec<PieceId>,
    /// What ended the slide.
    pub stop: SlideStop,
}

impl SlideResult {
    /// Whether the piece changed square.
    #[must_use]
    pub fn displaced(&self) -> bool {
        self.squares > 0
    }
}

/// Attempt to move piece `id` along its facing.
///
/// The piece is marked as moved even when it cannot leave its square. Each
/// square costs one unit of the turn's movement budget, and a blocked or
/// out-of-bounds step still costs its unit. An opposing piece on the next
/// square is captured unless it faces the mover head-on and can itself
/// rotate; pieces that cannot rotate are always capturable.
///
/// Returns `None` if no piece with `id` is on the board.
pub fn slide(pieces: &mut PieceList, id: PieceId, bounds: Bounds) -> Option<SlideResult> {
    let from = pieces.get(id)?.position();
    let mut result = SlideResult {
        piece: id,
        from,
        to: from,
        squares: 0,
        captured: Vec::new(),
        stop: SlideStop::Exhausted,
    };

    loop {
        let Some(mover) = pieces.get_mut(id) else {
            break;
        };
        if !mover.begin_step() {
            result.stop = SlideStop::Exhausted;
            break;
        }

        let owner = mover.owner();
        let facing = mover.facing();
        let target = mover.position() + facing.to_unit_step();

        if !bounds.contains(target) {
            trace!(piece = %id, %target, "slide stopped at board edge");
            result.stop = SlideStop::OutOfBounds;
            break;
        }

        if let Some(occupant) = pieces.piece_at(target) {
            let occupant_id = occupant.id();
            if occupant.owner() == owner {
                trace!(piece = %id, blocker = %occupant_id, "slide blocked by own piece");
                result.stop = SlideStop::Friendly(occupant_id);
                break;
            }
            if occupant.facing().is_opposite(facing) && occupant.kind().can_rotate() {
                trace!(piece = %id, blocker = %occupant_id, "slide blocked by engaged piece");
                result.stop = SlideStop::Engaged(occupant_id);
                break;
            }
            pieces.remove(occupant_id);
            debug!(piece = %id, captured = %occupant_id, %target, "capture");
            result.captured.push(occupant_id);
        }

        if let Some(mover) = pieces.get_mut(id) {
            mover.set_position(target);
        }
        result.to = target;
        result.squares += 1;
    }

    Some(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{Direction, Piece, PieceKind};

    const BOUNDS: Bounds = Bounds::new(8, 8);

    fn place(
        pieces: &mut PieceList,
        id: u32,
        kind: PieceKind,
        owner: u8,
        x: i32,
        y: i32,
        degrees: f64,
    ) -> PieceId {
        let id = PieceId(id);
        pieces.push(Piece::new(
            id,
            kind,
            owner,
            Position::new(x, y),
            Direction::from_degrees(degrees),
        ));
        id
    }

    #[test]
    fn test_slide_full_speed() {
        let mut pieces = PieceList::new();
        let id = place(&mut pieces, 0, PieceKind::O2, 1, 0, 0, 0.0);

        let result = slide(&mut pieces, id, BOUNDS).unwrap();
        assert_eq!(result.to, Position::new(2, 0));
        assert_eq!(result.squares, 2);
        assert_eq!(result.stop, SlideStop::Exhausted);

        let piece = pieces.get(id).unwrap();
        assert!(piece.moved());
        assert_eq!(piece.remaining_move(), 0);
    }

    #[test]
    fn test_slide_stops_at_edge_without_refund() {
        let mut pieces = PieceList::new();
        let id = place(&mut pieces, 0, PieceKind::O2, 1, 3, 0, 0.0);

        let result = slide(&mut pieces, id, BOUNDS).unwrap();
        assert!(!result.displaced());
        assert_eq!(result.stop, SlideStop::OutOfBounds);

        let piece = pieces.get(id).unwrap();
        assert!(piece.moved());
        assert_eq!(piece.remaining_move(), 1);
    }

    #[test]
    fn test_slide_blocked_by_friend() {
        let mut pieces = PieceList::new();
        let id = place(&mut pieces, 0, PieceKind::O2, 1, 0, 0, 0.0);
        let friend = place(&mut pieces, 1, PieceKind::O1, 1, 2, 0, 180.0);

        let result = slide(&mut pieces, id, BOUNDS).unwrap();
        assert_eq!(result.to, Position::new(1, 0));
        assert_eq!(result.stop, SlideStop::Friendly(friend));
        assert_eq!(pieces.len(), 2);
    }

    #[test]
    fn test_engaged_piece_blocks() {
        let mut pieces = PieceList::new();
        let a = place(&mut pieces, 0, PieceKind::O1, 1, 0, 0, 0.0);
        let b = place(&mut pieces, 1, PieceKind::O1, 2, 1, 0, 180.0);

        let result = slide(&mut pieces, a, BOUNDS).unwrap();
        assert_eq!(result.stop, SlideStop::Engaged(b));
        assert!(result.captured.is_empty());
        assert_eq!(pieces.get(a).unwrap().position(), Position::new(0, 0));
        assert!(pieces.get(a).unwrap().moved());
    }

    #[test]
    fn test_head_on_base_is_captured() {
        let mut pieces = PieceList::new();
        let a = place(&mut pieces, 0, PieceKind::O1, 1, 0, 0, 0.0);
        let base = place(&mut pieces, 1, PieceKind::B0, 2, 1, 0, 180.0);

        let result = slide(&mut pieces, a, BOUNDS).unwrap();
        assert_eq!(result.captured, vec![base]);
        assert_eq!(result.to, Position::new(1, 0));
        assert!(pieces.get(base).is_none());
    }

    #[test]
    fn test_side_on_piece_is_captured() {
        let mut pieces = PieceList::new();
        let a = place(&mut pieces, 0, PieceKind::O1, 1, 0, 0, 0.0);
        let b = place(&mut pieces, 1, PieceKind::O1, 2, 1, 0, 90.0);

        let result = slide(&mut pieces, a, BOUNDS).unwrap();
        assert_eq!(result.captured, vec![b]);
        assert_eq!(pieces.len(), 1);
    }

    #[test]
    fn test_two_captures_in_one_slide() {
        let mut pieces = PieceList::new();
        let a = place(&mut pieces, 0, PieceKind::O2, 1, 0, 0, 90.0);
        let b = place(&mut pieces, 1, PieceKind::O1, 2, 0, 1, 0.0);
        let c = place(&mut pieces, 2, PieceKind::B0, 2, 0, 2, 0.0);

        let result = slide(&mut pieces, a, BOUNDS).unwrap();
        assert_eq!(result.captured, vec![b, c]);
        assert_eq!(result.to, Position::new(0, 2));
        assert_eq!(pieces.len(), 1);
    }

    #[test]
    fn test_diagonal_slide() {
        let mut pieces = PieceList::new();
        let id = place(&mut pieces, 0, PieceKind::D1, 1, 0, 0, 135.0);

        let result = slide(&mut pieces, id, BOUNDS).unwrap();
        assert_eq!(result.to, Position::new(-1, 1));
    }

    #[test]
    fn test_spent_budget_stays_put() {
        let mut pieces = PieceList::new();
        let id = place(&mut pieces, 0, PieceKind::O1, 1, 0, 0, 0.0);
        slide(&mut pieces, id, BOUNDS).unwrap();

        let again = slide(&mut pieces, id, BOUNDS).unwrap();
        assert!(!again.displaced());
        assert_eq!(again.stop, SlideStop::Exhausted);
        assert_eq!(pieces.get(id).unwrap().position(), Position::new(1, 0));
    }

    #[test]
    fn test_unknown_piece() {
        let mut pieces = PieceList::new();
        assert!(slide(&mut pieces, PieceId(9), BOUNDS).is_none());
    }
}
