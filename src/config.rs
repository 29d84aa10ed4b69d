//! Session configuration.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{BanneretResult, SetupError};
use crate::game::{DEFAULT_HEIGHT, DEFAULT_WIDTH};

/// Settings for building a board.
///
/// Every field has a default, so a config file only needs the fields it
/// changes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Board width in squares.
    pub width: u16,
    /// Board height in squares.
    pub height: u16,
    /// Player names in seat order.
    pub players: Vec<String>,
    /// Directory searched for named board files.
    pub boards_dir: PathBuf,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            players: vec!["Thane".to_string(), "Stacey".to_string()],
            boards_dir: PathBuf::from("boards"),
        }
    }
}

impl GameConfig {
    /// Parse a config from JSON text.
    ///
    /// # Errors
    ///
    /// Returns an error if the text is not valid config JSON.
    pub fn from_json(json: &str) -> BanneretResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Read a config file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn from_file(path: &Path) -> BanneretResult<Self> {
        let text = fs::read_to_string(path).map_err(|source| SetupError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&text)
    }

    /// Resolve a board name to a file.
    ///
    /// An existing file path is used as given; anything else is looked up
    /// as `<boards_dir>/<name>.board`.
    #[must_use]
    pub fn board_path(&self, name: &str) -> PathBuf {
        let direct = Path::new(name);
        if direct.is_file() {
            return direct.to_path_buf();
        }
        self.boards_dir.join(format!("{name}.board"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = GameConfig::default();
        assert_eq!(config.width, 8);
        assert_eq!(config.height, 8);
        assert_eq!(config.players, ["Thane", "Stacey"]);
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let config = GameConfig::from_json(r#"{"players": ["Ana", "Bo", "Cy"]}"#).unwrap();
        assert_eq!(config.players.len(), 3);
        assert_eq!(config.width, 8);
        assert_eq!(config.boards_dir, PathBuf::from("boards"));
    }

    #[test]
    fn test_board_path_by_name() {
        let config = GameConfig {
            boards_dir: PathBuf::from("/nonexistent/boards"),
            ..GameConfig::default()
        };
        assert_eq!(
            config.board_path("standard"),
            PathBuf::from("/nonexistent/boards/standard.board")
        );
    }
}
