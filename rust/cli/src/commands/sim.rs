use std::io::Write;

use schocken_engine::logger::{RoundLogger, RoundRecord};
use schocken_engine::stats::compute_scores;

use crate::error::CliError;

use super::build_game;

/// Runs rounds without narration, optionally recording each round as one
/// JSONL line, then prints a summary.
pub fn handle_sim_command(
    players: Vec<String>,
    rounds: u32,
    seed: Option<u64>,
    strategy: &str,
    eliminate: bool,
    output: Option<String>,
    out: &mut dyn Write,
) -> Result<(), CliError> {
    let seed = seed.unwrap_or_else(rand::random);
    let mut game = build_game(&players, Some(seed), strategy, eliminate)?;
    let mut logger = match output.as_deref() {
        Some(path) => Some(RoundLogger::create(path)?),
        None => None,
    };
    let names: Vec<String> = game.players().iter().map(|p| p.name().to_string()).collect();

    for _ in 0..rounds {
        let round = game.play_round()?;
        if let Some(logger) = logger.as_mut() {
            let record = RoundRecord {
                round_id: logger.next_id(),
                seed: Some(seed),
                players: names.clone(),
                round,
                ts: None,
            };
            logger.write(&record)?;
        }
    }

    writeln!(out, "Simulated {} rounds with seed {}.", rounds, seed)?;
    if let Some(path) = output.as_deref() {
        writeln!(out, "Recorded history to {}.", path)?;
    }
    let scores = compute_scores(game.players(), game.rounds());
    let json = serde_json::to_string_pretty(&scores)
        .map_err(|e| CliError::InvalidInput(format!("failed to encode scores: {}", e)))?;
    writeln!(out, "{}", json)?;
    Ok(())
}
