//! The board and turn engine.
//!
//! One click drives everything. While the active player has pieces that have
//! not attempted a move, clicking one of them moves it. Once every piece has
//! moved, clicks rotate pieces within the side's rotation budget. Passing the
//! turn hands control to the next player and clears per-turn state.

use std::collections::VecDeque;

use tracing::{debug, info, trace};

use crate::config::GameConfig;
use crate::error::{BanneretResult, SetupError};
use crate::game::{
    BoardLayout, Bounds, ClickOutcome, Direction, Highlight, HighlightKind, Piece, PieceFilter,
    PieceId, PieceKind, PieceList, Player, PlayerId, Position, RotationBudget, Selection,
    TurnPhase, slide,
};

/// Default board width.
pub const DEFAULT_WIDTH: u16 = 8;

/// Default board height.
pub const DEFAULT_HEIGHT: u16 = 8;

/// Minimum number of players in a game.
pub const MIN_PLAYERS: usize = 2;

/// Maximum number of players in a game.
pub const MAX_PLAYERS: usize = 8;

/// Source of the piece under the cursor.
///
/// Picking is done by whatever draws the board; the engine only needs the
/// answer.
pub trait SelectionProvider {
    /// The piece currently hovered, if any.
    fn hovered(&self, board: &Board) -> Option<PieceId>;
}

impl<F> SelectionProvider for F
where
    F: Fn(&Board) -> Option<PieceId>,
{
    fn hovered(&self, board: &Board) -> Option<PieceId> {
        self(board)
    }
}

/// Complete game state for one session.
#[derive(Debug, Clone)]
pub struct Board {
    bounds: Bounds,
    /// Seats in their original order.
    roster: Vec<Player>,
    /// Turn rotation; the front is the active player.
    players: VecDeque<Player>,
    pieces: PieceList,
    selected: Option<PieceId>,
    game_over: bool,
    turn: u32,
    next_id: u32,
}

impl Board {
    /// Create an empty board.
    ///
    /// # Errors
    ///
    /// Returns an error if a dimension is zero or odd, if the player count
    /// is outside `MIN_PLAYERS..=MAX_PLAYERS`, or if two players share an id.
    pub fn new(width: u16, height: u16, players: Vec<Player>) -> BanneretResult<Self> {
        if width == 0 || height == 0 || width % 2 != 0 || height % 2 != 0 {
            return Err(SetupError::InvalidDimensions { width, height });
        }
        if players.len() < MIN_PLAYERS {
            return Err(SetupError::TooFewPlayers {
                min: MIN_PLAYERS,
                got: players.len(),
            });
        }
        if players.len() > MAX_PLAYERS {
            return Err(SetupError::TooManyPlayers {
                max: MAX_PLAYERS,
                got: players.len(),
            });
        }
        if let Some(dup) = players
            .iter()
            .enumerate()
            .find(|(i, p)| players[..*i].iter().any(|q| q.id == p.id))
            .map(|(_, p)| p.id)
        {
            return Err(SetupError::DuplicatePlayer(dup));
        }

        Ok(Self {
            bounds: Bounds::new(width, height),
            players: players.iter().cloned().collect(),
            roster: players,
            pieces: PieceList::new(),
            selected: None,
            game_over: false,
            turn: 0,
            next_id: 0,
        })
    }

    /// Create an empty board from configuration. Players get ids 1, 2, ...
    /// in the configured order.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration describes an invalid board.
    pub fn from_config(config: &GameConfig) -> BanneretResult<Self> {
        if config.players.len() > MAX_PLAYERS {
            return Err(SetupError::TooManyPlayers {
                max: MAX_PLAYERS,
                got: config.players.len(),
            });
        }
        let players = (1..=u8::MAX)
            .zip(&config.players)
            .map(|(id, name)| Player::new(id, name.clone()))
            .collect();
        Self::new(config.width, config.height, players)
    }

    /// Board width in squares.
    #[must_use]
    pub const fn width(&self) -> u16 {
        self.bounds.width
    }

    /// Board height in squares.
    #[must_use]
    pub const fn height(&self) -> u16 {
        self.bounds.height
    }

    /// Board extents.
    #[must_use]
    pub const fn bounds(&self) -> Bounds {
        self.bounds
    }

    /// Seats in their original order.
    #[must_use]
    pub fn roster(&self) -> &[Player] {
        &self.roster
    }

    /// Players in turn order, active player first.
    pub fn turn_order(&self) -> impl Iterator<Item = &Player> {
        self.players.iter()
    }

    /// Look up a player by id.
    #[must_use]
    pub fn player(&self, id: PlayerId) -> Option<&Player> {
        self.roster.iter().find(|p| p.id == id)
    }

    /// The player whose turn it is.
    #[must_use]
    pub fn active_player(&self) -> &Player {
        // The rotation is never empty: `new` requires MIN_PLAYERS seats.
        &self.players[0]
    }

    /// All pieces on the board.
    #[must_use]
    pub const fn pieces(&self) -> &PieceList {
        &self.pieces
    }

    /// Look up a piece by id.
    #[must_use]
    pub fn piece(&self, id: PieceId) -> Option<&Piece> {
        self.pieces.get(id)
    }

    /// The active player's pieces.
    #[must_use]
    pub fn own_pieces(&self) -> Selection<'_> {
        self.pieces
            .filter(&PieceFilter::new().owner(self.active_player().id))
    }

    /// The currently selected piece.
    #[must_use]
    pub const fn selected(&self) -> Option<PieceId> {
        self.selected
    }

    /// Whether the game has been decided.
    #[must_use]
    pub const fn is_game_over(&self) -> bool {
        self.game_over
    }

    /// Number of turns passed since the board was loaded.
    #[must_use]
    pub const fn turn_number(&self) -> u32 {
        self.turn
    }

    /// The winning player once the game is over. `None` while play continues
    /// or when no pieces are left at all.
    #[must_use]
    pub fn winner(&self) -> Option<PlayerId> {
        if !self.game_over {
            return None;
        }
        self.pieces.iter().next().map(Piece::owner)
    }

    /// Clear all pieces and restore the initial turn order.
    pub fn reset(&mut self) {
        self.pieces.clear();
        self.players = self.roster.iter().cloned().collect();
        self.selected = None;
        self.game_over = false;
        self.turn = 0;
    }

    /// Put a new piece on the board.
    ///
    /// # Errors
    ///
    /// Returns an error if the owner is unknown, the square is off the board
    /// or the square is taken.
    pub fn place(
        &mut self,
        kind: PieceKind,
        owner: PlayerId,
        position: Position,
        facing: Direction,
    ) -> BanneretResult<PieceId> {
        if self.player(owner).is_none() {
            return Err(SetupError::NoSuchPlayer(owner));
        }
        if !self.bounds.contains(position) {
            return Err(SetupError::OutOfBounds {
                x: position.x,
                y: position.y,
                width: self.bounds.width,
                height: self.bounds.height,
            });
        }
        if self.pieces.piece_at(position).is_some() {
            return Err(SetupError::Occupied {
                x: position.x,
                y: position.y,
            });
        }

        let id = PieceId(self.next_id);
        self.next_id += 1;
        self.pieces
            .push(Piece::new(id, kind, owner, position, facing));
        trace!(piece = %id, %kind, owner, %position, "placed");
        Ok(id)
    }

    /// Reset the board and place every piece of `layout`.
    ///
    /// On error the board is left untouched.
    ///
    /// # Errors
    ///
    /// Returns an error if the layout is empty, names an unknown class or
    /// player, or places a piece off the board or on a taken square.
    pub fn load_state(&mut self, layout: &BoardLayout) -> BanneretResult<()> {
        if layout.pieces.is_empty() {
            return Err(SetupError::EmptyLayout);
        }

        let mut staged = self.clone();
        staged.reset();
        for record in &layout.pieces {
            let placement = record.resolve(&staged.roster, staged.bounds)?;
            staged.place(
                placement.kind,
                placement.owner,
                placement.position,
                placement.facing,
            )?;
        }

        info!(pieces = staged.pieces.len(), "board state loaded");
        *self = staged;
        Ok(())
    }

    /// Set the selected piece directly.
    pub fn select(&mut self, piece: Option<PieceId>) {
        self.selected = piece;
    }

    /// Per-tick refresh: take the hovered piece from `provider`, then settle
    /// eliminations and victory.
    pub fn update(&mut self, provider: &dyn SelectionProvider) {
        self.selected = provider.hovered(self);
        self.check_victory();
    }

    /// Select `piece` and click it.
    pub fn click_piece(&mut self, piece: PieceId) -> ClickOutcome {
        self.select(Some(piece));
        self.click()
    }

    /// React to a click on the selected piece.
    ///
    /// Moves the piece if it is the active player's and has not moved yet.
    /// Otherwise, once every own piece has moved, rotates it if the rotation
    /// budget allows or if it has already been rotated this turn. Anything
    /// else is ignored.
    pub fn click(&mut self) -> ClickOutcome {
        if self.game_over {
            return ClickOutcome::Ignored;
        }
        let Some(id) = self.selected else {
            return ClickOutcome::Ignored;
        };

        let (can_move, moves_pending, can_rotate) = {
            let mine = self.own_pieces();
            let unmoved = mine.filter(&PieceFilter::new().moved(false));
            let budget = RotationBudget::of(&mine);
            let already = mine.filter(&PieceFilter::new().rotated(true));
            let rotatable = mine.filter(&PieceFilter::new().can_rotate(true));
            (
                unmoved.contains(id),
                !unmoved.is_empty(),
                (budget.remaining() > 0 && rotatable.contains(id)) || already.contains(id),
            )
        };

        if can_move {
            return match slide(&mut self.pieces, id, self.bounds) {
                Some(result) => {
                    debug!(
                        piece = %id,
                        from = %result.from,
                        to = %result.to,
                        captured = result.captured.len(),
                        stop = ?result.stop,
                        "move"
                    );
                    ClickOutcome::Moved(result)
                }
                None => ClickOutcome::Ignored,
            };
        }
        if moves_pending || !can_rotate {
            return ClickOutcome::Ignored;
        }

        match self.pieces.get_mut(id) {
            Some(piece) => {
                piece.rotate();
                debug!(piece = %id, facing = %piece.facing(), "rotate");
                ClickOutcome::Rotated(id)
            }
            None => ClickOutcome::Ignored,
        }
    }

    /// Hand the turn to the next player and clear every piece's per-turn
    /// state.
    pub fn pass_turn(&mut self) {
        self.players.rotate_left(1);
        for piece in self.pieces.iter_mut() {
            piece.reset();
        }
        self.turn += 1;
        debug!(turn = self.turn, active = %self.active_player(), "turn passed");
    }

    /// Remove every side that has lost all commanders, then end the game if
    /// only the active player's pieces remain.
    ///
    /// Returns the players eliminated by this call. Calling again without a
    /// new commander loss changes nothing.
    pub fn check_victory(&mut self) -> Vec<PlayerId> {
        let mut eliminated = Vec::new();
        for player in &self.roster {
            let side = PieceFilter::new().owner(player.id);
            if self.pieces.filter(&side.commands(true)).is_empty() {
                let removed = self.pieces.remove_matching(&side);
                if removed > 0 {
                    debug!(player = %player, removed, "eliminated");
                    eliminated.push(player.id);
                }
            }
        }

        if !self.game_over && self.own_pieces().len() == self.pieces.len() {
            self.game_over = true;
            info!(
                winner = ?self.winner(),
                turn = self.turn,
                "game over"
            );
        }
        eliminated
    }

    /// Rotation charges of the active player.
    #[must_use]
    pub fn rotation_budget(&self) -> RotationBudget {
        RotationBudget::of(&self.own_pieces())
    }

    /// Where the active player stands within the turn.
    #[must_use]
    pub fn phase(&self) -> TurnPhase {
        if self.game_over {
            return TurnPhase::GameOver;
        }
        let mine = self.own_pieces();
        if !mine.filter(&PieceFilter::new().moved(false)).is_empty() {
            return TurnPhase::Moving;
        }

        let budget = RotationBudget::of(&mine);
        let can_start = budget.remaining() > 0
            && !mine.filter(&PieceFilter::new().can_rotate(true)).is_empty();
        let can_cycle = !mine.filter(&PieceFilter::new().rotated(true)).is_empty();
        if can_start || can_cycle {
            TurnPhase::Rotating
        } else {
            TurnPhase::TurnEnded
        }
    }

    /// Whether the active player may end the turn: all own pieces have
    /// attempted their move.
    #[must_use]
    pub fn can_pass(&self) -> bool {
        !self.game_over
            && self
                .own_pieces()
                .filter(&PieceFilter::new().moved(false))
                .is_empty()
    }

    /// Squares worth highlighting for the active player.
    ///
    /// While moves are pending, every unmoved piece is marked. Afterwards
    /// the first unused commanders (one per remaining charge) and every
    /// rotated piece are marked.
    #[must_use]
    pub fn highlights(&self) -> Vec<Highlight> {
        let mut highlights = Vec::new();
        if self.game_over {
            return highlights;
        }

        let mine = self.own_pieces();
        if let Some(id) = self.selected.filter(|&id| mine.contains(id)) {
            highlights.push(Highlight {
                piece: id,
                kind: HighlightKind::Selected,
            });
        }

        let to_move = mine.filter(&PieceFilter::new().moved(false));
        let (marked, kind) = if to_move.is_empty() {
            let commanders = mine.filter(&PieceFilter::new().commands(true));
            let rotated = mine.filter(&PieceFilter::new().rotated(true));
            let budget = RotationBudget::of(&mine);
            (
                commanders.limit(budget.remaining()).chain(&rotated),
                HighlightKind::Rotation,
            )
        } else {
            (to_move, HighlightKind::ToMove)
        };
        highlights.extend(marked.iter().map(|p| Highlight {
            piece: p.id(),
            kind,
        }));
        highlights
    }
}
