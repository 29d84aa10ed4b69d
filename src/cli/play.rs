//! Scripted play command implementation.

use super::output::{JsonBoard, JsonPlayResult, JsonStep, format_board_text, format_step};
use super::{CliError, OutputFormat, load_board};
use banneret::GameConfig;
use banneret::script::Script;
use std::path::Path;

/// Execute the play command.
///
/// # Errors
///
/// Returns an error if the board or the script cannot be loaded.
pub(crate) fn execute(
    config: &GameConfig,
    board: &str,
    script: &Path,
    format: OutputFormat,
) -> Result<(), CliError> {
    let mut board = load_board(config, board)?;
    let script = Script::load(script)?;
    let reports = script.apply(&mut board);

    match format {
        OutputFormat::Text => {
            for (i, report) in reports.iter().enumerate() {
                println!("{}", format_step(i, report));
            }
            println!();
            print!("{}", format_board_text(&board));
        }
        OutputFormat::Json => {
            let bounds = board.bounds();
            let result = JsonPlayResult {
                steps: reports
                    .iter()
                    .map(|r| JsonStep::from_report(r, bounds))
                    .collect(),
                board: JsonBoard::from_board(&board),
            };
            println!("{}", serde_json::to_string_pretty(&result)?);
        }
    }

    Ok(())
}
