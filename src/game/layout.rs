//! Initial board layouts.
//!
//! A board file is a JSON array of piece records:
//!
//! ```json
//! [
//!   {"class": "B0", "player": 0, "position": [3, 0], "rotation": 90.0},
//!   {"class": "O1", "player": 1, "position": [3, 6], "rotation": 270.0}
//! ]
//! ```
//!
//! `player` indexes the board's roster, `position` is corner-origin
//! (`0..width`, `0..height`) and `rotation` is the facing in degrees.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{BanneretResult, SetupError};
use crate::game::{Board, Bounds, Direction, Piece, PieceKind, Player, PlayerId, Position};

/// One piece as written in a board file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PieceRecord {
    /// Piece class name, e.g. `"O2"`.
    pub class: String,
    /// Index into the roster.
    pub player: usize,
    /// Corner-origin square.
    pub position: [i32; 2],
    /// Facing in degrees.
    pub rotation: f64,
}

/// A record resolved against a board's roster and extents.
#[derive(Debug, Clone, Copy)]
pub struct Placement {
    /// Piece kind.
    pub kind: PieceKind,
    /// Owning player.
    pub owner: PlayerId,
    /// Board-centered square.
    pub position: Position,
    /// Initial facing.
    pub facing: Direction,
}

impl PieceRecord {
    /// Resolve the class name, roster index and square.
    ///
    /// # Errors
    ///
    /// Returns an error for an unknown class, an out-of-range player index
    /// or a square off the board.
    pub fn resolve(&self, roster: &[Player], bounds: Bounds) -> BanneretResult<Placement> {
        let kind = PieceKind::from_name(&self.class)
            .ok_or_else(|| SetupError::UnknownPieceClass(self.class.clone()))?;
        let owner = roster
            .get(self.player)
            .ok_or(SetupError::UnknownPlayer {
                index: self.player,
                count: roster.len(),
            })?
            .id;
        let [x, y] = self.position;
        let position = Position::from_file(x, y, bounds);
        if !bounds.contains(position) {
            return Err(SetupError::OutOfBounds {
                x: position.x,
                y: position.y,
                width: bounds.width,
                height: bounds.height,
            });
        }

        Ok(Placement {
            kind,
            owner,
            position,
            facing: Direction::from_degrees(self.rotation),
        })
    }

    /// Describe an existing piece as a record.
    ///
    /// The rotation is written in canonical form: rounded to hundredths and
    /// folded into `[0, 360)`, so a piece loaded at `-90` reads back as `270`.
    /// Returns `None` if the owner is not on the roster.
    #[must_use]
    pub fn from_piece(piece: &Piece, roster: &[Player], bounds: Bounds) -> Option<Self> {
        let player = roster.iter().position(|p| p.id == piece.owner())?;
        let (x, y) = piece.position().to_file(bounds);
        Some(Self {
            class: piece.kind().name().to_string(),
            player,
            position: [x, y],
            rotation: normalize_degrees(piece.facing().degrees()),
        })
    }
}

/// Round to hundredths and fold into `[0, 360)`.
fn normalize_degrees(degrees: f64) -> f64 {
    // Adding zero turns a negative zero into a positive one.
    ((degrees * 100.0).round() / 100.0).rem_euclid(360.0) + 0.0
}

/// An ordered list of piece records.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BoardLayout {
    /// Records in placement order.
    pub pieces: Vec<PieceRecord>,
}

impl BoardLayout {
    /// Parse a layout from JSON text.
    ///
    /// # Errors
    ///
    /// Returns an error if the text is not a valid layout.
    pub fn from_json(json: &str) -> BanneretResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Read a layout file.
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

    /// Serialize as pretty JSON.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_json(&self) -> BanneretResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Write the layout to a file.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization or the write fails.
    pub fn save(&self, path: &Path) -> BanneretResult<()> {
        let json = self.to_json()?;
        fs::write(path, json).map_err(|source| SetupError::Io {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Snapshot the pieces currently on `board`.
    ///
    /// Rotations come back in canonical form (see [`PieceRecord::from_piece`]),
    /// so a file with out-of-range rotations captures to equal facings rather
    /// than equal numbers.
    #[must_use]
    pub fn capture(board: &Board) -> Self {
        let pieces = board
            .pieces()
            .iter()
            .filter_map(|piece| PieceRecord::from_piece(piece, board.roster(), board.bounds()))
            .collect();
        Self { pieces }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::FACING_PRECISION;

    const SAMPLE: &str = r#"[
        {"class": "B0", "player": 0, "position": [3, 0], "rotation": 90},
        {"class": "O2", "player": 1, "position": [4, 7], "rotation": 270.0},
        {"class": "D1", "player": 1, "position": [0, 6], "rotation": 315.0}
    ]"#;

    fn roster() -> Vec<Player> {
        vec![Player::new(1, "Thane"), Player::new(2, "Stacey")]
    }

    #[test]
    fn test_parse_layout() {
        let layout = BoardLayout::from_json(SAMPLE).unwrap();
        assert_eq!(layout.pieces.len(), 3);
        assert_eq!(layout.pieces[1].class, "O2");
        assert_eq!(layout.pieces[1].position, [4, 7]);
    }

    #[test]
    fn test_resolve_centers_squares() {
        let layout = BoardLayout::from_json(SAMPLE).unwrap();
        let placement = layout.pieces[1].resolve(&roster(), Bounds::new(8, 8)).unwrap();
        assert_eq!(placement.kind, PieceKind::O2);
        assert_eq!(placement.owner, 2);
        assert_eq!(placement.position, Position::new(0, 3));
        assert!(placement
            .facing
            .approx_eq(Direction::from_degrees(-90.0), FACING_PRECISION));
    }

    #[test]
    fn test_resolve_errors() {
        let bad_class = PieceRecord {
            class: "K9".to_string(),
            player: 0,
            position: [0, 0],
            rotation: 0.0,
        };
        assert!(matches!(
            bad_class.resolve(&roster(), Bounds::new(8, 8)),
            Err(SetupError::UnknownPieceClass(name)) if name == "K9"
        ));

        let bad_player = PieceRecord {
            player: 5,
            class: "O1".to_string(),
            ..bad_class
        };
        assert!(matches!(
            bad_player.resolve(&roster(), Bounds::new(8, 8)),
            Err(SetupError::UnknownPlayer { index: 5, count: 2 })
        ));
    }

    #[test]
    fn test_resolve_rejects_off_board_squares() {
        for position in [[8, 0], [0, -1], [i32::MIN, 0], [i32::MAX, i32::MAX]] {
            let record = PieceRecord {
                class: "O1".to_string(),
                player: 0,
                position,
                rotation: 0.0,
            };
            assert!(matches!(
                record.resolve(&roster(), Bounds::new(8, 8)),
                Err(SetupError::OutOfBounds { width: 8, height: 8, .. })
            ));
        }
    }

    #[test]
    fn test_capture_folds_rotations() {
        let layout = BoardLayout::from_json(
            r#"[
                {"class": "B0", "player": 0, "position": [0, 0], "rotation": -90},
                {"class": "O1", "player": 1, "position": [3, 3], "rotation": 450},
                {"class": "O2", "player": 1, "position": [5, 2], "rotation": 405}
            ]"#,
        )
        .unwrap();
        let mut board = Board::new(8, 8, roster()).unwrap();
        board.load_state(&layout).unwrap();

        let captured = BoardLayout::capture(&board);
        let rotations: Vec<f64> = captured.pieces.iter().map(|r| r.rotation).collect();
        assert_eq!(rotations.len(), 3);
        for (got, want) in rotations.iter().zip([270.0, 90.0, 45.0]) {
            assert!((got - want).abs() < 1e-9, "{got} != {want}");
        }
        for (original, copy) in layout.pieces.iter().zip(&captured.pieces) {
            assert_eq!(original.position, copy.position);
            assert!(Direction::from_degrees(original.rotation)
                .approx_eq(Direction::from_degrees(copy.rotation), FACING_PRECISION));
        }
    }

    #[test]
    fn test_malformed_json() {
        assert!(matches!(
            BoardLayout::from_json("[{\"class\": 3}]"),
            Err(SetupError::Parse(_))
        ));
    }

    #[test]
    fn test_normalize_degrees() {
        assert!((normalize_degrees(-90.0) - 270.0).abs() < 1e-9);
        assert!(normalize_degrees(-0.000_001).abs() < 1e-9);
        assert!(normalize_degrees(-0.000_001).is_sign_positive());
        assert!((normalize_degrees(45.000_000_1) - 45.0).abs() < 1e-9);
    }
}
