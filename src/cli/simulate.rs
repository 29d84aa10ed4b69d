//! Simulate command implementation.

use super::output::{JsonSimResult, SimStats, format_sim_text};
use super::{CliError, OutputFormat, load_board};
use banneret::GameConfig;
use banneret::sim::{SimConfig, play_random_game};
use indicatif::{ProgressBar, ProgressStyle};
use rayon::prelude::*;
use std::time::Instant;

/// Flags of the simulate command.
#[derive(Debug, Clone, Copy)]
pub(crate) struct SimulateOptions {
    /// Number of games.
    pub(crate) games: u64,
    /// Starting seed.
    pub(crate) seed: Option<u64>,
    /// Worker threads.
    pub(crate) threads: Option<usize>,
    /// Turn limit per game.
    pub(crate) max_turns: Option<u32>,
    /// Output format.
    pub(crate) format: OutputFormat,
    /// Show a progress bar.
    pub(crate) progress: bool,
}

/// Execute the simulate command.
///
/// # Errors
///
/// Returns an error if the board cannot be loaded or the output fails.
#[allow(clippy::cast_precision_loss)]
pub(crate) fn execute(config: &GameConfig, board: &str, options: &SimulateOptions) -> Result<(), CliError> {
    let board = load_board(config, board)?;

    // Set thread pool size if specified
    if let Some(num_threads) = options.threads {
        rayon::ThreadPoolBuilder::new()
            .num_threads(num_threads)
            .build_global()
            .ok(); // Ignore error if already initialized
    }

    // Base seed
    let base_seed = options.seed.unwrap_or_else(|| {
        use std::time::{SystemTime, UNIX_EPOCH};
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map_or(42, |d| d.as_secs())
    });

    let mut sim_config = SimConfig::default();
    if let Some(t) = options.max_turns {
        sim_config.max_turns = t;
    }

    // Progress bar
    let pb = if options.progress {
        let pb = ProgressBar::new(options.games);
        let style = ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} games ({per_sec})")
            .map_err(|e| CliError::new(format!("Invalid progress template: {e}")))?
            .progress_chars("=>-");
        pb.set_style(style);
        Some(pb)
    } else {
        None
    };

    let start = Instant::now();
    let roster = board.roster();

    // Each thread accumulates into its own SimStats, merged at the end
    let stats = (0..options.games)
        .into_par_iter()
        .fold(
            || SimStats::new(roster),
            |mut local_stats, i| {
                let result = play_random_game(&board, base_seed.wrapping_add(i), &sim_config);
                local_stats.add_result(&result);
                if let Some(pb) = &pb {
                    pb.inc(1);
                }
                local_stats
            },
        )
        .reduce(
            || SimStats::new(roster),
            |mut a, b| {
                a.merge(&b);
                a
            },
        );

    if let Some(pb) = pb {
        pb.finish_with_message("done");
    }

    let duration = start.elapsed();
    let games_per_sec = if duration.as_secs_f64() > 0.0 {
        stats.games_played as f64 / duration.as_secs_f64()
    } else {
        0.0
    };

    match options.format {
        OutputFormat::Text => {
            println!("Seeds: {base_seed}..{}", base_seed.wrapping_add(options.games));
            println!();
            print!("{}", format_sim_text(&stats, roster));
            println!();
            println!(
                "Duration: {:.2}s ({games_per_sec:.0} games/sec)",
                duration.as_secs_f64()
            );
        }
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(&JsonSimResult::from_stats(&stats, roster))?;
            println!("{json}");
        }
    }

    Ok(())
}
