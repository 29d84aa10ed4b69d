// Allow unwrap in tests (test code is not production)
#![cfg_attr(test, allow(clippy::unwrap_used))]
//! Banneret: turn and movement engine for a Banneret-style strategy game.
//!
//! Two to eight players take turns on a rectangular board. On each turn the
//! active player must attempt a move with every piece, then may rotate as
//! many pieces as their commanders allow. Pieces slide along their facing,
//! capturing enemies in their path. A side that loses all its commanders is
//! removed from the board; the last side standing wins.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────┐
//! │   CLI: show / validate / play /     │
//! │        simulate                     │
//! ├─────────────────────────────────────┤
//! │   Scripted play, random self-play   │
//! ├─────────────────────────────────────┤
//! │   Game: board, turn engine, pieces  │
//! └─────────────────────────────────────┘
//! ```

pub mod config;
pub mod error;
pub mod game;
pub mod render;
pub mod script;
pub mod sim;

pub use config::GameConfig;
pub use error::{BanneretResult, SetupError};

// Re-export key game types at crate root for convenience
pub use game::{
    Board, BoardLayout, ClickOutcome, Direction, Piece, PieceId, PieceKind, Player, PlayerId,
    Position, TurnPhase,
};
