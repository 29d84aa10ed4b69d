//! Player identity.

use std::fmt;

/// Unique identifier for a player (1-based seat number).
pub type PlayerId = u8;

/// A seat at the table. Immutable once the board is built.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Player {
    /// Unique identifier for this player.
    pub id: PlayerId,
    /// Display name.
    pub name: String,
}

impl Player {
    /// Create a new player.
    #[must_use]
    pub fn new(id: PlayerId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (player {})", self.name, self.id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_player_creation() {
        let player = Player::new(1, "Thane");
        assert_eq!(player.id, 1);
        assert_eq!(player.name, "Thane");
        assert_eq!(player.to_string(), "Thane (player 1)");
    }
}
