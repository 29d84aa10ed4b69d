//! Output formatting utilities for CLI.

use banneret::game::{BoardLayout, Bounds, PieceRecord, SlideStop};
use banneret::render::render_ascii;
use banneret::script::StepReport;
use banneret::sim::SimResult;
use banneret::{Board, ClickOutcome, Player, PlayerId, Position};
use serde::Serialize;
use std::fmt::Write;

/// JSON-serializable board state.
#[derive(Debug, Serialize)]
pub(super) struct JsonBoard {
    /// Board width in squares.
    width: u16,
    /// Board height in squares.
    height: u16,
    /// Turns passed since load.
    turn: u32,
    /// Player whose turn it is.
    active_player: PlayerId,
    /// Whether the game is decided.
    game_over: bool,
    /// Winning player (null while undecided).
    winner: Option<PlayerId>,
    /// Per-player summary in seat order.
    players: Vec<JsonPlayer>,
    /// Pieces in board-file form.
    pieces: Vec<PieceRecord>,
}

/// JSON-serializable player summary.
#[derive(Debug, Serialize)]
pub(super) struct JsonPlayer {
    /// Player ID.
    id: PlayerId,
    /// Display name.
    name: String,
    /// Pieces left on the board.
    pieces: usize,
}

impl JsonBoard {
    /// Snapshot a board.
    pub(super) fn from_board(board: &Board) -> Self {
        Self {
            width: board.width(),
            height: board.height(),
            turn: board.turn_number(),
            active_player: board.active_player().id,
            game_over: board.is_game_over(),
            winner: board.winner(),
            players: board
                .roster()
                .iter()
                .map(|p| JsonPlayer {
                    id: p.id,
                    name: p.name.clone(),
                    pieces: count_pieces(board, p.id),
                })
                .collect(),
            pieces: BoardLayout::capture(board).pieces,
        }
    }
}

fn count_pieces(board: &Board, player: PlayerId) -> usize {
    board.pieces().iter().filter(|p| p.owner() == player).count()
}

/// Format a board as human-readable text.
pub(super) fn format_board_text(board: &Board) -> String {
    let mut output = String::new();

    let _ = writeln!(
        output,
        "Board {}x{}, turn {}",
        board.width(),
        board.height(),
        board.turn_number()
    );
    for player in board.roster() {
        let _ = write!(output, "  {player}: {} pieces", count_pieces(board, player.id));
        if !board.is_game_over() && board.active_player().id == player.id {
            output.push_str(" [to move]");
        }
        output.push('\n');
    }
    if let Some(winner) = board.winner().and_then(|id| board.player(id)) {
        let _ = writeln!(output, "  Winner: {winner}");
    } else if board.is_game_over() {
        output.push_str("  Game over: no pieces left\n");
    }
    output.push('\n');
    output.push_str(&render_ascii(board));
    output
}

/// One line describing a script step.
pub(super) fn format_step(index: usize, report: &StepReport) -> String {
    let what = match report {
        StepReport::Click(ClickOutcome::Ignored) => "click ignored".to_string(),
        StepReport::Click(ClickOutcome::Rotated(id)) => format!("rotated {id}"),
        StepReport::Click(ClickOutcome::Moved(result)) => {
            let mut line = format!(
                "moved {} {} -> {} ({} squares)",
                result.piece, result.from, result.to, result.squares
            );
            for captured in &result.captured {
                let _ = write!(line, ", captured {captured}");
            }
            match result.stop {
                SlideStop::Exhausted => {}
                SlideStop::OutOfBounds => line.push_str(", stopped at edge"),
                SlideStop::Friendly(id) => {
                    let _ = write!(line, ", blocked by {id}");
                }
                SlideStop::Engaged(id) => {
                    let _ = write!(line, ", engaged with {id}");
                }
            }
            line
        }
        StepReport::Passed => "turn passed".to_string(),
        StepReport::Skipped => "skipped (game over)".to_string(),
    };
    format!("{:>3}: {what}", index + 1)
}

/// JSON-serializable script step.
#[derive(Debug, Serialize)]
#[serde(tag = "result", rename_all = "snake_case")]
pub(super) enum JsonStep {
    /// Click had no effect.
    Ignored,
    /// A piece attempted its move.
    Moved {
        /// Moving piece.
        piece: u32,
        /// Start square.
        from: [i32; 2],
        /// End square.
        to: [i32; 2],
        /// Pieces removed on the way.
        captured: Vec<u32>,
    },
    /// A piece turned one step.
    Rotated {
        /// Rotated piece.
        piece: u32,
    },
    /// Turn passed.
    Passed,
    /// Action arrived after the game ended.
    Skipped,
}

impl JsonStep {
    /// Convert a step report. Squares are corner-origin, as in board files.
    pub(super) fn from_report(report: &StepReport, bounds: Bounds) -> Self {
        let square = |pos: Position| {
            let (x, y) = pos.to_file(bounds);
            [x, y]
        };
        match report {
            StepReport::Click(ClickOutcome::Ignored) => Self::Ignored,
            StepReport::Click(ClickOutcome::Moved(result)) => Self::Moved {
                piece: result.piece.0,
                from: square(result.from),
                to: square(result.to),
                captured: result.captured.iter().map(|id| id.0).collect(),
            },
            StepReport::Click(ClickOutcome::Rotated(id)) => Self::Rotated { piece: id.0 },
            StepReport::Passed => Self::Passed,
            StepReport::Skipped => Self::Skipped,
        }
    }
}

/// JSON-serializable result of the `play` command.
#[derive(Debug, Serialize)]
pub(super) struct JsonPlayResult {
    /// What each action did.
    pub(super) steps: Vec<JsonStep>,
    /// Board after the last action.
    pub(super) board: JsonBoard,
}

/// Aggregated self-play statistics.
#[derive(Debug, Default)]
pub(super) struct SimStats {
    /// Total games played.
    pub(super) games_played: u64,
    /// Seat ids, in roster order.
    seats: Vec<PlayerId>,
    /// Win count per seat.
    pub(super) wins: Vec<u64>,
    /// Games that hit the turn limit.
    pub(super) draws: u64,
    /// Total turns across all games.
    total_turns: u64,
    /// Total captures across all games.
    total_captures: u64,
}

impl SimStats {
    /// Create empty stats for the given seats.
    pub(super) fn new(roster: &[Player]) -> Self {
        Self {
            seats: roster.iter().map(|p| p.id).collect(),
            wins: vec![0; roster.len()],
            ..Self::default()
        }
    }

    /// Add a game result to the stats.
    pub(super) fn add_result(&mut self, result: &SimResult) {
        self.games_played += 1;
        self.total_turns += u64::from(result.turns_played);
        self.total_captures += u64::from(result.captures);

        match result
            .winner
            .and_then(|w| self.seats.iter().position(|&id| id == w))
        {
            Some(idx) => self.wins[idx] += 1,
            None => self.draws += 1,
        }
    }

    /// Merge another accumulator into this one.
    pub(super) fn merge(&mut self, other: &Self) {
        self.games_played += other.games_played;
        self.draws += other.draws;
        self.total_turns += other.total_turns;
        self.total_captures += other.total_captures;
        for (a, b) in self.wins.iter_mut().zip(&other.wins) {
            *a += b;
        }
    }

    /// Get win rate for a seat (0.0-1.0).
    #[allow(clippy::cast_precision_loss)]
    pub(super) fn win_rate(&self, seat: usize) -> f64 {
        if self.games_played == 0 {
            return 0.0;
        }
        self.wins.get(seat).copied().unwrap_or(0) as f64 / self.games_played as f64
    }

    /// Get average game length.
    #[allow(clippy::cast_precision_loss)]
    pub(super) fn avg_turns(&self) -> f64 {
        if self.games_played == 0 {
            return 0.0;
        }
        self.total_turns as f64 / self.games_played as f64
    }

    /// Get average captures per game.
    #[allow(clippy::cast_precision_loss)]
    pub(super) fn avg_captures(&self) -> f64 {
        if self.games_played == 0 {
            return 0.0;
        }
        self.total_captures as f64 / self.games_played as f64
    }
}

/// Format simulation statistics as human-readable text.
pub(super) fn format_sim_text(stats: &SimStats, roster: &[Player]) -> String {
    let mut output = String::new();

    let _ = writeln!(output, "Simulation Results ({} games)", stats.games_played);
    output.push_str("========================================\n\n");

    for (i, player) in roster.iter().enumerate() {
        let _ = writeln!(
            output,
            "  {player}: {} wins ({:.1}%)",
            stats.wins.get(i).copied().unwrap_or(0),
            stats.win_rate(i) * 100.0
        );
    }
    let _ = writeln!(output, "  Draws: {}", stats.draws);
    output.push('\n');
    let _ = writeln!(output, "  Avg turns:    {:.1}", stats.avg_turns());
    let _ = writeln!(output, "  Avg captures: {:.1}", stats.avg_captures());

    output
}

/// JSON-serializable simulation result.
#[derive(Debug, Serialize)]
pub(super) struct JsonSimResult {
    /// Total games played.
    games_played: u64,
    /// Per-player statistics.
    players: Vec<JsonSimPlayer>,
    /// Number of draws.
    draws: u64,
    /// Average game length in turns.
    avg_turns: f64,
    /// Average captures per game.
    avg_captures: f64,
}

/// JSON-serializable per-player simulation stats.
#[derive(Debug, Serialize)]
pub(super) struct JsonSimPlayer {
    /// Player ID.
    id: PlayerId,
    /// Display name.
    name: String,
    /// Number of wins.
    wins: u64,
    /// Win rate (0.0-1.0).
    win_rate: f64,
}

impl JsonSimResult {
    /// Create from aggregated stats.
    pub(super) fn from_stats(stats: &SimStats, roster: &[Player]) -> Self {
        Self {
            games_played: stats.games_played,
            players: roster
                .iter()
                .enumerate()
                .map(|(i, p)| JsonSimPlayer {
                    id: p.id,
                    name: p.name.clone(),
                    wins: stats.wins.get(i).copied().unwrap_or(0),
                    win_rate: stats.win_rate(i),
                })
                .collect(),
            draws: stats.draws,
            avg_turns: stats.avg_turns(),
            avg_captures: stats.avg_captures(),
        }
    }
}
