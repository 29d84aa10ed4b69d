//! Game layer for Banneret.
//!
//! Implements the turn and movement rules:
//! - Board squares and piece facings
//! - Pieces and the piece-kind table
//! - Filter queries over the piece collection
//! - Sliding movement with capture
//! - Click handling, rotation budgets, turn passing and victory

mod board;
mod geometry;
mod invariants;
mod layout;
mod movement;
mod piece;
mod pieces;
mod player;
mod turn;

pub use board::{
    Board, DEFAULT_HEIGHT, DEFAULT_WIDTH, MAX_PLAYERS, MIN_PLAYERS, SelectionProvider,
};
pub use geometry::{Bounds, Direction, FACING_PRECISION, Position, Step};
pub use invariants::{InvariantViolation, check_invariants};
pub use layout::{BoardLayout, PieceRecord, Placement};
pub use movement::{SlideResult, SlideStop, slide};
pub use piece::{NO_ROTATION, Piece, PieceId, PieceKind};
pub use pieces::{PieceFilter, PieceList, Selection};
pub use player::{Player, PlayerId};
pub use turn::{ClickOutcome, Highlight, HighlightKind, RotationBudget, TurnPhase};
