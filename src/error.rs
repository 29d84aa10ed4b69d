//! Error types for board setup.
//!
//! Only setup can fail. Rule violations during play are absorbed by the
//! turn engine and never surface as errors.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::game::PlayerId;

/// Errors raised while configuring a board or loading its initial state.
#[derive(Debug, Error)]
pub enum SetupError {
    /// A board or config file could not be read.
    #[error("failed to read {}: {source}", path.display())]
    Io {
        /// The file that was being read.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },

    /// A board or config file is not valid JSON for its schema.
    #[error("invalid file contents: {0}")]
    Parse(#[from] serde_json::Error),

    /// A layout names a piece class that does not exist.
    #[error("unknown piece class `{0}`")]
    UnknownPieceClass(String),

    /// A layout refers to a player index past the end of the roster.
    #[error("player index {index} out of range ({count} players)")]
    UnknownPlayer {
        /// Index given in the layout.
        index: usize,
        /// Number of players on the board.
        count: usize,
    },

    /// A piece was assigned to a player id the board does not know.
    #[error("no player with id {0}")]
    NoSuchPlayer(PlayerId),

    /// A piece was placed outside the board.
    #[error("square ({x}, {y}) is off the {width}x{height} board")]
    OutOfBounds {
        /// Centered x coordinate.
        x: i32,
        /// Centered y coordinate.
        y: i32,
        /// Board width.
        width: u16,
        /// Board height.
        height: u16,
    },

    /// Two pieces were placed on the same square.
    #[error("square ({x}, {y}) is already occupied")]
    Occupied {
        /// Centered x coordinate.
        x: i32,
        /// Centered y coordinate.
        y: i32,
    },

    /// Board dimensions must be positive and even so the board centers on a
    /// square corner.
    #[error("board dimensions must be positive and even, got {width}x{height}")]
    InvalidDimensions {
        /// Requested width.
        width: u16,
        /// Requested height.
        height: u16,
    },

    /// A layout placed no pieces at all.
    #[error("board layout contains no pieces")]
    EmptyLayout,

    /// More players than the board supports.
    #[error("a board supports at most {max} players, got {got}")]
    TooManyPlayers {
        /// Maximum number of players.
        max: usize,
        /// Number of players given.
        got: usize,
    },

    /// Not enough players to play a game.
    #[error("a board needs at least {min} players, got {got}")]
    TooFewPlayers {
        /// Minimum number of players.
        min: usize,
        /// Number of players given.
        got: usize,
    },

    /// Two seats share a player id.
    #[error("player id {0} appears more than once")]
    DuplicatePlayer(PlayerId),
}

/// Result type for setup operations.
pub type BanneretResult<T> = Result<T, SetupError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_setup_error_display() {
        let err = SetupError::UnknownPieceClass("Q9".to_string());
        assert_eq!(err.to_string(), "unknown piece class `Q9`");

        let err = SetupError::OutOfBounds {
            x: 4,
            y: 0,
            width: 8,
            height: 8,
        };
        assert!(err.to_string().contains("8x8"));

        let err = SetupError::DuplicatePlayer(3);
        assert_eq!(err.to_string(), "player id 3 appears more than once");
    }

    #[test]
    fn test_io_error_mentions_path() {
        let err = SetupError::Io {
            path: PathBuf::from("boards/missing.board"),
            source: io::Error::new(io::ErrorKind::NotFound, "not found"),
        };
        assert!(err.to_string().contains("boards/missing.board"));
    }
}
