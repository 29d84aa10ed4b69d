//! Board validation command implementation.

use super::{CliError, load_board};
use banneret::game::{PieceFilter, check_invariants};
use banneret::GameConfig;

/// Execute the validate command.
///
/// # Errors
///
/// Returns an error if the board cannot be loaded or breaks an invariant.
pub(crate) fn execute(config: &GameConfig, name: &str) -> Result<(), CliError> {
    println!("Validating: {}", config.board_path(name).display());
    println!();

    let board = load_board(config, name)?;
    print_check("Board file loads", true);

    let violations = check_invariants(&board);
    print_check("Board invariants", violations.is_empty());
    for violation in &violations {
        println!("      {violation}");
    }

    // A side without commanders is removed on the first update
    let mut leaderless = Vec::new();
    for player in board.roster() {
        let side = PieceFilter::new().owner(player.id);
        let pieces = board.pieces().filter(&side);
        if !pieces.is_empty() && pieces.filter(&side.commands(true)).is_empty() {
            leaderless.push(player);
        }
    }
    print_check("Every side has a commander", leaderless.is_empty());
    for player in &leaderless {
        println!("      {player} has pieces but no commander");
    }

    println!();
    println!("Summary:");
    println!("  Size:    {}x{}", board.width(), board.height());
    println!("  Pieces:  {}", board.pieces().len());
    println!("  Players: {}", board.roster().len());

    if !violations.is_empty() {
        return Err(CliError::new(format!(
            "{} invariant violation(s)",
            violations.len()
        )));
    }

    println!();
    println!("Validation successful!");
    Ok(())
}

fn print_check(name: &str, ok: bool) {
    let status = if ok { "OK" } else { "FAILED" };
    let symbol = if ok { "✓" } else { "✗" };
    println!("  {symbol} {name}: {status}");
}
