//! Scripted play.
//!
//! A script is a JSON list of actions applied to a loaded board, standing in
//! for a player with a mouse:
//!
//! ```json
//! [{"click": [3, 1]}, {"click": [4, 1]}, "pass"]
//! ```
//!
//! Click squares are corner-origin, like board files. The board is updated
//! (selection refreshed, victory checked) after every action, as the
//! interactive game does once per frame.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::error::{BanneretResult, SetupError};
use crate::game::{Board, ClickOutcome, Piece, PieceId, Position, SelectionProvider};

/// One scripted input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Action {
    /// Hover the given square and click.
    Click([i32; 2]),
    /// End the turn.
    Pass,
}

/// Selection provider that reports whatever stands on one square.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SquareSelection(pub Position);

impl SelectionProvider for SquareSelection {
    fn hovered(&self, board: &Board) -> Option<PieceId> {
        board.pieces().piece_at(self.0).map(Piece::id)
    }
}

/// Nothing under the cursor.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NoSelection;

impl SelectionProvider for NoSelection {
    fn hovered(&self, _board: &Board) -> Option<PieceId> {
        None
    }
}

/// What one action did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StepReport {
    /// A click and its outcome.
    Click(ClickOutcome),
    /// The turn passed.
    Passed,
    /// The action arrived after the game ended and was skipped.
    Skipped,
}

/// A sequence of actions.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Script {
    /// Actions in order.
    pub actions: Vec<Action>,
}

impl Script {
    /// Parse a script from JSON text.
    ///
    /// # Errors
    ///
    /// Returns an error if the text is not a valid script.
    pub fn from_json(json: &str) -> BanneretResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Read a script file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load(path: &Path) -> BanneretResult<Self> {
        let text = fs::read_to_string(path).map_err(|source| SetupError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&text)
    }

    /// Apply every action to `board`, one report per action.
    pub fn apply(&self, board: &mut Board) -> Vec<StepReport> {
        board.update(&NoSelection);
        self.actions
            .iter()
            .map(|action| {
                let report = apply_action(board, *action);
                trace!(?action, ?report, "script step");
                report
            })
            .collect()
    }
}

fn apply_action(board: &mut Board, action: Action) -> StepReport {
    if board.is_game_over() {
        return StepReport::Skipped;
    }
    let report = match action {
        Action::Click([x, y]) => {
            let square = Position::from_file(x, y, board.bounds());
            if board.bounds().contains(square) {
                board.update(&SquareSelection(square));
                StepReport::Click(board.click())
            } else {
                StepReport::Click(ClickOutcome::Ignored)
            }
        }
        Action::Pass => {
            board.pass_turn();
            StepReport::Passed
        }
    };
    board.update(&NoSelection);
    report
}
