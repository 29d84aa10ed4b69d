//! Pieces and the piece-kind table.
//!
//! Every piece type differs only in a handful of constants, so kinds are a
//! data table rather than separate types. Movement and rotation behave the
//! same for all kinds and read the constants from here.

use std::fmt;

use crate::game::{Direction, FACING_PRECISION, PlayerId, Position};

/// Rotation step that means "cannot rotate".
pub const NO_ROTATION: u16 = 360;

/// Constants shared by every piece of one type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PieceKind {
    name: &'static str,
    speed: u8,
    rotation_step: u16,
    rotation_offset: u16,
    command_count: u8,
}

impl PieceKind {
    /// Immobile base. Grants one rotation per turn and keeps its side alive.
    pub const B0: Self = Self::new("B0", 0, NO_ROTATION, 0, 1);
    /// Orthogonal piece moving one square.
    pub const O1: Self = Self::new("O1", 1, 90, 0, 0);
    /// Orthogonal piece moving two squares.
    pub const O2: Self = Self::new("O2", 2, 90, 0, 0);
    /// Diagonal piece moving one square.
    pub const D1: Self = Self::new("D1", 1, 90, 45, 0);

    /// Every kind a board file may name.
    pub const STANDARD: [Self; 4] = [Self::B0, Self::O1, Self::O2, Self::D1];

    /// Define a piece kind.
    #[must_use]
    pub const fn new(
        name: &'static str,
        speed: u8,
        rotation_step: u16,
        rotation_offset: u16,
        command_count: u8,
    ) -> Self {
        Self {
            name,
            speed,
            rotation_step,
            rotation_offset,
            command_count,
        }
    }

    /// Look up a standard kind by its class name.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        Self::STANDARD.into_iter().find(|kind| kind.name == name)
    }

    /// Class name used in board files.
    #[must_use]
    pub const fn name(self) -> &'static str {
        self.name
    }

    /// Maximum squares moved per turn. Zero for immobile pieces.
    #[must_use]
    pub const fn speed(self) -> u8 {
        self.speed
    }

    /// Degrees turned per rotation.
    #[must_use]
    pub const fn rotation_step(self) -> u16 {
        self.rotation_step
    }

    /// Offset between the model's zero angle and the facing's zero angle.
    #[must_use]
    pub const fn rotation_offset(self) -> u16 {
        self.rotation_offset
    }

    /// Rotation charges this piece grants its side each turn.
    #[must_use]
    pub const fn command_count(self) -> u8 {
        self.command_count
    }

    /// Whether pieces of this kind can rotate at all.
    #[must_use]
    pub const fn can_rotate(self) -> bool {
        self.rotation_step < NO_ROTATION
    }

    /// Whether this kind is a commander.
    #[must_use]
    pub const fn commands(self) -> bool {
        self.command_count > 0
    }
}

impl fmt::Display for PieceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name)
    }
}

/// Stable identity of a piece on a board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PieceId(pub u32);

impl fmt::Display for PieceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A piece on the board and its per-turn state.
#[derive(Debug, Clone)]
#[allow(missing_copy_implementations)]
pub struct Piece {
    id: PieceId,
    kind: PieceKind,
    owner: PlayerId,
    position: Position,
    facing: Direction,
    facing_at_turn_start: Direction,
    moved: bool,
    remaining_move: u8,
}

impl Piece {
    /// Create a piece at the start of a turn.
    ///
    /// Immobile pieces start out marked as moved.
    #[must_use]
    pub fn new(
        id: PieceId,
        kind: PieceKind,
        owner: PlayerId,
        position: Position,
        facing: Direction,
    ) -> Self {
        Self {
            id,
            kind,
            owner,
            position,
            facing,
            facing_at_turn_start: facing,
            moved: kind.speed() == 0,
            remaining_move: kind.speed(),
        }
    }

    /// This piece's identity.
    #[must_use]
    pub const fn id(&self) -> PieceId {
        self.id
    }

    /// Kind constants.
    #[must_use]
    pub const fn kind(&self) -> PieceKind {
        self.kind
    }

    /// Owning player.
    #[must_use]
    pub const fn owner(&self) -> PlayerId {
        self.owner
    }

    /// Current square.
    #[must_use]
    pub const fn position(&self) -> Position {
        self.position
    }

    /// Current facing.
    #[must_use]
    pub const fn facing(&self) -> Direction {
        self.facing
    }

    /// Facing snapshot taken when the turn began.
    #[must_use]
    pub const fn facing_at_turn_start(&self) -> Direction {
        self.facing_at_turn_start
    }

    /// Whether this piece has used its move this turn.
    ///
    /// Always true for immobile pieces.
    #[must_use]
    pub const fn moved(&self) -> bool {
        self.moved
    }

    /// Squares left in this turn's movement budget.
    #[must_use]
    pub const fn remaining_move(&self) -> u8 {
        self.remaining_move
    }

    /// Whether the facing differs from the turn-start snapshot.
    #[must_use]
    pub fn rotated(&self) -> bool {
        !self
            .facing
            .approx_eq(self.facing_at_turn_start, FACING_PRECISION)
    }

    /// Angle the model should be drawn at, in degrees.
    #[must_use]
    pub fn model_angle(&self) -> f64 {
        self.facing.degrees() - f64::from(self.kind.rotation_offset())
    }

    /// Center of the occupied square, for renderers.
    #[must_use]
    pub fn square_center(&self) -> (f32, f32) {
        self.position.square_center()
    }

    /// Turn by one rotation step.
    ///
    /// Does not check whether rotating is currently allowed; the board gates
    /// that. Pieces that cannot rotate are left untouched.
    pub fn rotate(&mut self) {
        if !self.kind.can_rotate() {
            return;
        }
        self.facing = self.facing.rotate(f64::from(self.kind.rotation_step()));
    }

    /// Clear per-turn state at a turn boundary.
    pub fn reset(&mut self) {
        self.moved = self.kind.speed() == 0;
        self.remaining_move = self.kind.speed();
        self.facing_at_turn_start = self.facing;
    }

    /// Record a move attempt and take one square from the budget.
    ///
    /// Returns `false` once the budget is spent. The piece counts as moved
    /// either way.
    pub(crate) fn begin_step(&mut self) -> bool {
        self.moved = true;
        if self.remaining_move == 0 {
            return false;
        }
        self.remaining_move -= 1;
        true
    }

    pub(crate) fn set_position(&mut self, position: Position) {
        self.position = position;
    }
}
