//! CLI command implementations for Banneret.

pub(crate) mod play;
pub(crate) mod show;
pub(crate) mod simulate;
pub(crate) mod validate;

mod output;

use banneret::{Board, BoardLayout, GameConfig, SetupError};
use clap::ValueEnum;
use std::error::Error;
use std::fmt;
use std::path::Path;
use tracing::debug;

/// Output format for commands that print results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub(crate) enum OutputFormat {
    /// Human-readable text output.
    Text,
    /// Machine-readable JSON output.
    Json,
}

/// CLI error type.
#[derive(Debug)]
pub(crate) struct CliError {
    message: String,
}

impl CliError {
    /// Create a new CLI error.
    pub(crate) fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl Error for CliError {}

impl From<std::io::Error> for CliError {
    fn from(e: std::io::Error) -> Self {
        Self::new(e.to_string())
    }
}

impl From<SetupError> for CliError {
    fn from(e: SetupError) -> Self {
        Self::new(e.to_string())
    }
}

impl From<serde_json::Error> for CliError {
    fn from(e: serde_json::Error) -> Self {
        Self::new(format!("JSON serialization failed: {e}"))
    }
}

/// Read the config file, or fall back to defaults.
pub(crate) fn load_config(path: Option<&Path>) -> Result<GameConfig, CliError> {
    match path {
        Some(path) => Ok(GameConfig::from_file(path)?),
        None => Ok(GameConfig::default()),
    }
}

/// Build a board from `config` and load the named layout onto it.
pub(crate) fn load_board(config: &GameConfig, name: &str) -> Result<Board, CliError> {
    let path = config.board_path(name);
    debug!(path = %path.display(), "loading board");
    let layout = BoardLayout::load(&path)?;
    let mut board = Board::from_config(config)?;
    board.load_state(&layout)?;
    Ok(board)
}
