//! Show command implementation.

use super::output::{JsonBoard, format_board_text};
use super::{CliError, OutputFormat, load_board};
use banneret::GameConfig;

/// Execute the show command.
///
/// # Errors
///
/// Returns an error if the board cannot be loaded.
pub(crate) fn execute(config: &GameConfig, board: &str, format: OutputFormat) -> Result<(), CliError> {
    let board = load_board(config, board)?;

    match format {
        OutputFormat::Text => print!("{}", format_board_text(&board)),
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(&JsonBoard::from_board(&board))?;
            println!("{json}");
        }
    }

    Ok(())
}
