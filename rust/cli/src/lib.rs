//! # Schocken CLI Library
//!
//! Command-line interface for the Schocken game engine. Exposes
//! subcommands for playing narrated games, running bulk simulations, and
//! aggregating statistics from recorded histories.
//!
//! ## Main Entry Point
//!
//! The primary entry point is the [`run`] function, which parses
//! command-line arguments and executes the appropriate subcommand against
//! injected output streams, returning a process exit code.
//!
//! ## Available Subcommands
//!
//! - `play`: Play narrated rounds with a chosen roster and strategy
//! - `sim`: Run many rounds quietly, optionally recording a JSONL history
//! - `stats`: Aggregate statistics from a JSONL round-history file

use std::io::Write;

use clap::{Parser, Subcommand};

mod commands;
mod error;
pub mod exit_code;

use commands::{handle_play_command, handle_sim_command, handle_stats_command};
pub use error::CliError;

#[derive(Parser)]
#[command(name = "schocken", version, about = "Schocken dice game simulator")]
struct SchockenCli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Play narrated rounds and print the final statistics
    Play {
        /// Comma-separated roster names
        #[arg(long, value_delimiter = ',', default_value = "Alice,Bob,Carol")]
        players: Vec<String>,
        /// Number of rounds to play
        #[arg(long, default_value_t = 1)]
        rounds: u32,
        /// RNG seed for reproducible games
        #[arg(long)]
        seed: Option<u64>,
        /// Strategy used by every player
        #[arg(long, default_value = "baseline")]
        strategy: String,
        /// Keep playing after stock exhaustion, eliminating broke players
        #[arg(long)]
        eliminate: bool,
    },
    /// Run rounds without narration, optionally recording a JSONL history
    Sim {
        #[arg(long, value_delimiter = ',', default_value = "Alice,Bob,Carol")]
        players: Vec<String>,
        #[arg(long, default_value_t = 100)]
        rounds: u32,
        #[arg(long)]
        seed: Option<u64>,
        #[arg(long, default_value = "baseline")]
        strategy: String,
        #[arg(long)]
        eliminate: bool,
        /// Path of the JSONL round-history file to write
        #[arg(long)]
        output: Option<String>,
    },
    /// Aggregate statistics from a JSONL round-history file
    Stats {
        /// Path of the JSONL round-history file to read
        #[arg(long)]
        input: String,
    },
}

/// Main entry point for the CLI application.
///
/// Parses command-line arguments and dispatches to the appropriate
/// subcommand handler. Returns `0` for success and `2` for errors.
pub fn run<I, S>(args: I, out: &mut dyn Write, err: &mut dyn Write) -> i32
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let argv: Vec<String> = args.into_iter().map(|a| a.as_ref().to_string()).collect();
    let cli = match SchockenCli::try_parse_from(&argv) {
        Ok(cli) => cli,
        Err(parse_err) => {
            use clap::error::ErrorKind;
            return if matches!(
                parse_err.kind(),
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion
            ) {
                let _ = write!(out, "{}", parse_err);
                exit_code::SUCCESS
            } else {
                let _ = write!(err, "{}", parse_err);
                exit_code::ERROR
            };
        }
    };

    let result = match cli.command {
        Commands::Play {
            players,
            rounds,
            seed,
            strategy,
            eliminate,
        } => handle_play_command(players, rounds, seed, &strategy, eliminate, out),
        Commands::Sim {
            players,
            rounds,
            seed,
            strategy,
            eliminate,
            output,
        } => handle_sim_command(players, rounds, seed, &strategy, eliminate, output, out),
        Commands::Stats { input } => handle_stats_command(&input, out, err),
    };

    match result {
        Ok(()) => exit_code::SUCCESS,
        Err(cli_err) => {
            let _ = writeln!(err, "Error: {}", cli_err);
            exit_code::ERROR
        }
    }
}
