//! Piece collection and filter queries.
//!
//! All turn logic is built from one primitive: narrowing a set of pieces by a
//! combination of predicates. [`PieceList::filter`] produces a [`Selection`]
//! of borrowed pieces, and selections filter further, so decisions can chain
//! several queries without copying pieces.

use crate::game::{Piece, PieceId, PlayerId, Position};

/// A combination of optional predicates. Unset predicates match everything.
///
/// Predicates apply in a fixed order: owner, moved, can-rotate, rotated,
/// commands.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PieceFilter {
    /// Owning player.
    pub owner: Option<PlayerId>,
    /// Whether the piece has used its move.
    pub moved: Option<bool>,
    /// Whether the piece's kind can rotate.
    pub can_rotate: Option<bool>,
    /// Whether the piece has rotated this turn.
    pub rotated: Option<bool>,
    /// Whether the piece is a commander.
    pub commands: Option<bool>,
}

impl PieceFilter {
    /// A filter that matches every piece.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            owner: None,
            moved: None,
            can_rotate: None,
            rotated: None,
            commands: None,
        }
    }

    /// Match pieces owned by `owner`.
    #[must_use]
    pub const fn owner(mut self, owner: PlayerId) -> Self {
        self.owner = Some(owner);
        self
    }

    /// Match on move state.
    #[must_use]
    pub const fn moved(mut self, moved: bool) -> Self {
        self.moved = Some(moved);
        self
    }

    /// Match on rotation capability.
    #[must_use]
    pub const fn can_rotate(mut self, can_rotate: bool) -> Self {
        self.can_rotate = Some(can_rotate);
        self
    }

    /// Match on rotation state.
    #[must_use]
    pub const fn rotated(mut self, rotated: bool) -> Self {
        self.rotated = Some(rotated);
        self
    }

    /// Match on command capability.
    #[must_use]
    pub const fn commands(mut self, commands: bool) -> Self {
        self.commands = Some(commands);
        self
    }

    /// Test a single piece against every set predicate.
    #[must_use]
    pub fn matches(&self, piece: &Piece) -> bool {
        self.owner.is_none_or(|owner| piece.owner() == owner)
            && self.moved.is_none_or(|moved| piece.moved() == moved)
            && self
                .can_rotate
                .is_none_or(|can_rotate| piece.kind().can_rotate() == can_rotate)
            && self.rotated.is_none_or(|rotated| piece.rotated() == rotated)
            && self
                .commands
                .is_none_or(|commands| piece.kind().commands() == commands)
    }
}

/// Ordered collection of the pieces on a board.
///
/// Insertion order is draw order and carries no other meaning.
#[derive(Debug, Clone, Default)]
pub struct PieceList {
    pieces: Vec<Piece>,
}

impl PieceList {
    /// Create an empty collection.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of pieces.
    #[must_use]
    pub fn len(&self) -> usize {
        self.pieces.len()
    }

    /// Whether the collection is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pieces.is_empty()
    }

    /// Iterate in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Piece> {
        self.pieces.iter()
    }

    /// Iterate mutably in insertion order.
    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut Piece> {
        self.pieces.iter_mut()
    }

    /// Append a piece.
    pub fn push(&mut self, piece: Piece) {
        self.pieces.push(piece);
    }

    /// Look up a piece by identity.
    #[must_use]
    pub fn get(&self, id: PieceId) -> Option<&Piece> {
        self.pieces.iter().find(|p| p.id() == id)
    }

    /// Look up a piece mutably by identity.
    #[must_use]
    pub fn get_mut(&mut self, id: PieceId) -> Option<&mut Piece> {
        self.pieces.iter_mut().find(|p| p.id() == id)
    }

    /// The piece standing on `pos`, if any.
    #[must_use]
    pub fn piece_at(&self, pos: Position) -> Option<&Piece> {
        self.pieces.iter().find(|p| p.position() == pos)
    }

    /// Remove a piece by identity, returning it.
    pub fn remove(&mut self, id: PieceId) -> Option<Piece> {
        let idx = self.pieces.iter().position(|p| p.id() == id)?;
        Some(self.pieces.remove(idx))
    }

    /// Remove every piece matching `filter`, returning how many went.
    pub fn remove_matching(&mut self, filter: &PieceFilter) -> usize {
        let before = self.pieces.len();
        self.pieces.retain(|p| !filter.matches(p));
        before - self.pieces.len()
    }

    /// Remove every piece.
    pub fn clear(&mut self) {
        self.pieces.clear();
    }

    /// All pieces as a selection.
    #[must_use]
    pub fn all(&self) -> Selection<'_> {
        Selection {
            pieces: self.pieces.iter().collect(),
        }
    }

    /// Pieces matching `filter`, in insertion order.
    #[must_use]
    pub fn filter(&self, filter: &PieceFilter) -> Selection<'_> {
        Selection {
            pieces: self.pieces.iter().filter(|p| filter.matches(p)).collect(),
        }
    }
}

impl FromIterator<Piece> for PieceList {
    fn from_iter<I: IntoIterator<Item = Piece>>(iter: I) -> Self {
        Self {
            pieces: iter.into_iter().collect(),
        }
    }
}

/// A filtered view over a [`PieceList`].
#[derive(Debug, Clone, Default)]
pub struct Selection<'a> {
    pieces: Vec<&'a Piece>,
}

impl<'a> Selection<'a> {
    /// Narrow this selection further.
    #[must_use]
    pub fn filter(&self, filter: &PieceFilter) -> Selection<'a> {
        Selection {
            pieces: self
                .pieces
                .iter()
                .copied()
                .filter(|p| filter.matches(p))
                .collect(),
        }
    }

    /// The first `n` pieces. Zero or negative yields nothing; past the end
    /// yields everything.
    #[must_use]
    pub fn limit(&self, n: i64) -> Selection<'a> {
        let n = usize::try_from(n).unwrap_or(0);
        Selection {
            pieces: self.pieces.iter().copied().take(n).collect(),
        }
    }

    /// Join two selections, keeping order and duplicates.
    #[must_use]
    pub fn chain(&self, other: &Selection<'a>) -> Selection<'a> {
        Selection {
            pieces: self.pieces.iter().chain(&other.pieces).copied().collect(),
        }
    }

    /// Number of pieces selected.
    #[must_use]
    pub fn len(&self) -> usize {
        self.pieces.len()
    }

    /// Whether nothing is selected.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pieces.is_empty()
    }

    /// Whether the piece with `id` is selected.
    #[must_use]
    pub fn contains(&self, id: PieceId) -> bool {
        self.pieces.iter().any(|p| p.id() == id)
    }

    /// Iterate over the selected pieces.
    pub fn iter(&self) -> impl Iterator<Item = &'a Piece> + '_ {
        self.pieces.iter().copied()
    }

    /// Identities of the selected pieces.
    #[must_use]
    pub fn ids(&self) -> Vec<PieceId> {
        self.pieces.iter().map(|p| p.id()).collect()
    }

    /// Sum of command counts over the selection.
    #[must_use]
    pub fn command_total(&self) -> u32 {
        self.pieces
            .iter()
            .map(|p| u32::from(p.kind().command_count()))
            .sum()
    }
}
