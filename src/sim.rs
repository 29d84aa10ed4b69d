//! Deterministic random self-play.
//!
//! Every seat plays a random but legal-looking sequence of clicks: each
//! unmoved piece is clicked in random order, then a random number of
//! rotation clicks follow, then the turn passes. Given the same starting
//! board and seed, a game always plays out the same way.

// RNG helpers use intentional casts
#![allow(clippy::cast_possible_truncation)]

use tracing::debug;

use crate::game::{Board, ClickOutcome, PieceFilter, PieceId, PlayerId};

/// Deterministic PRNG using xorshift64.
#[derive(Debug, Clone, Copy)]
struct Rng {
    state: u64,
}

impl Rng {
    /// Create a new RNG with the given seed.
    const fn new(seed: u64) -> Self {
        // Ensure non-zero state
        let state = if seed == 0 { 0x5555_5555_5555_5555 } else { seed };
        Self { state }
    }

    /// Generate next random u64.
    fn next_u64(&mut self) -> u64 {
        let mut x = self.state;
        x ^= x << 13;
        x ^= x >> 7;
        x ^= x << 17;
        self.state = x;
        x
    }

    /// Generate random index in [0, len).
    fn index(&mut self, len: usize) -> usize {
        if len == 0 {
            return 0;
        }
        (self.next_u64() % len as u64) as usize
    }

    /// Pick a random element.
    fn pick(&mut self, ids: &[PieceId]) -> Option<PieceId> {
        if ids.is_empty() {
            return None;
        }
        ids.get(self.index(ids.len())).copied()
    }
}

/// Limits for a simulated game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SimConfig {
    /// Turns played before the game is called a draw.
    pub max_turns: u32,
    /// Most rotation clicks tried per turn.
    pub max_rotation_clicks: u32,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            max_turns: 200,
            max_rotation_clicks: 4,
        }
    }
}

/// Final result of a simulated game.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SimResult {
    /// The seed used for this game.
    pub seed: u64,
    /// The winning player (None for a draw).
    pub winner: Option<PlayerId>,
    /// Turns passed before the game ended.
    pub turns_played: u32,
    /// Pieces captured over the whole game.
    pub captures: u32,
    /// Players in the order they were eliminated.
    pub elimination_order: Vec<PlayerId>,
}

/// Play a random game starting from `start`.
///
/// The starting board is cloned and left untouched.
#[must_use]
pub fn play_random_game(start: &Board, seed: u64, config: &SimConfig) -> SimResult {
    let mut board = start.clone();
    let mut rng = Rng::new(seed);
    let mut captures = 0u32;
    let mut elimination_order = board.check_victory();

    while !board.is_game_over() && board.turn_number() < config.max_turns {
        // Move phase: click unmoved pieces until none remain
        loop {
            let unmoved = board
                .own_pieces()
                .filter(&PieceFilter::new().moved(false))
                .ids();
            let Some(id) = rng.pick(&unmoved) else {
                break;
            };
            if let ClickOutcome::Moved(result) = board.click_piece(id) {
                captures += u32::try_from(result.captured.len()).unwrap_or(u32::MAX);
            }
            elimination_order.extend(board.check_victory());
            if board.is_game_over() {
                break;
            }
        }

        // Rotation phase: try a few rotation clicks
        let clicks = rng.index(config.max_rotation_clicks as usize + 1);
        for _ in 0..clicks {
            if board.is_game_over() {
                break;
            }
            let rotatable = board
                .own_pieces()
                .filter(&PieceFilter::new().can_rotate(true))
                .ids();
            if let Some(id) = rng.pick(&rotatable) {
                board.click_piece(id);
            }
        }

        board.select(None);
        elimination_order.extend(board.check_victory());
        if board.is_game_over() {
            break;
        }
        board.pass_turn();
    }

    let result = SimResult {
        seed,
        winner: board.winner(),
        turns_played: board.turn_number(),
        captures,
        elimination_order,
    };
    debug!(seed, winner = ?result.winner, turns = result.turns_played, "simulated game");
    result
}
