//! Banneret CLI - inspect boards, replay scripted turns and run self-play.

// Allow print in the CLI binary
#![allow(clippy::print_stdout, clippy::print_stderr)]

mod cli;

use clap::{ArgAction, Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

/// Banneret - turn and movement engine for a tabletop strategy game
#[derive(Parser, Debug)]
#[command(name = "banneret")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    /// JSON config file (board size, players, board directory)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

/// Available commands
#[derive(Subcommand, Debug)]
enum Commands {
    /// Load a board and print it
    Show {
        /// Board name (looked up in the board directory) or file path
        #[arg(required = true)]
        board: String,

        /// Output format: text or json
        #[arg(short, long, default_value = "text")]
        format: cli::OutputFormat,
    },

    /// Load a board and check it for consistency
    Validate {
        /// Board name or file path
        #[arg(required = true)]
        board: String,
    },

    /// Apply a scripted sequence of clicks and passes
    Play {
        /// Board name or file path
        #[arg(required = true)]
        board: String,

        /// Script file (JSON list of actions)
        #[arg(short, long)]
        script: PathBuf,

        /// Output format: text or json
        #[arg(short, long, default_value = "text")]
        format: cli::OutputFormat,
    },

    /// Run many random self-play games and aggregate statistics
    Simulate {
        /// Board name or file path
        #[arg(required = true)]
        board: String,

        /// Number of games to run (default: 1000)
        #[arg(short, long, default_value = "1000")]
        games: u64,

        /// Starting seed (increments for each game)
        #[arg(short, long)]
        seed: Option<u64>,

        /// Parallel threads (default: CPU count)
        #[arg(short = 'j', long)]
        threads: Option<usize>,

        /// Maximum turns per game (default: 200)
        #[arg(short = 't', long)]
        max_turns: Option<u32>,

        /// Output format: text or json
        #[arg(short, long, default_value = "text")]
        format: cli::OutputFormat,

        /// Show progress bar
        #[arg(short, long)]
        progress: bool,
    },
}

/// Install the stderr log subscriber. `RUST_LOG` wins over `-v`.
fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_logging(args.verbose);

    let result = cli::load_config(args.config.as_deref()).and_then(|config| match args.command {
        Commands::Show { board, format } => cli::show::execute(&config, &board, format),

        Commands::Validate { board } => cli::validate::execute(&config, &board),

        Commands::Play {
            board,
            script,
            format,
        } => cli::play::execute(&config, &board, &script, format),

        Commands::Simulate {
            board,
            games,
            seed,
            threads,
            max_turns,
            format,
            progress,
        } => cli::simulate::execute(
            &config,
            &board,
            &cli::simulate::SimulateOptions {
                games,
                seed,
                threads,
                max_turns,
                format,
                progress,
            },
        ),
    });

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
