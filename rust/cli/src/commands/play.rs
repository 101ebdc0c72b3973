use std::io::Write;

use schocken_engine::stats::compute_scores;

use crate::error::CliError;

use super::build_game;

/// Plays narrated rounds and prints the final statistics as JSON.
pub fn handle_play_command(
    players: Vec<String>,
    rounds: u32,
    seed: Option<u64>,
    strategy: &str,
    eliminate: bool,
    out: &mut dyn Write,
) -> Result<(), CliError> {
    let mut game = build_game(&players, seed, strategy, eliminate)?;

    writeln!(out, "Welcome to the game Schocken!")?;
    writeln!(out, "- Schocken heißt das Spiel! -")?;
    writeln!(out)?;

    for _ in 0..rounds {
        game.play_round_to(out)?;
    }

    let scores = compute_scores(game.players(), game.rounds());
    let json = serde_json::to_string_pretty(&scores)
        .map_err(|e| CliError::InvalidInput(format!("failed to encode scores: {}", e)))?;
    writeln!(out, "{}", json)?;
    Ok(())
}
