mod play;
mod sim;
mod stats;

pub use play::handle_play_command;
pub use sim::handle_sim_command;
pub use stats::handle_stats_command;

use schocken_engine::game::{Game, GameConfig};
use schocken_engine::player::Player;

use crate::error::CliError;

/// Builds a game with the given roster, all players using the named
/// strategy from the AI crate.
fn build_game(
    players: &[String],
    seed: Option<u64>,
    strategy: &str,
    eliminate: bool,
) -> Result<Game, CliError> {
    let config = GameConfig {
        eliminate_on_exhaustion: eliminate,
        ..GameConfig::default()
    };
    let mut game = Game::with_config(seed, config);
    for name in players {
        let strat = schocken_ai::try_create_strategy(strategy)
            .ok_or_else(|| CliError::InvalidInput(format!("unknown strategy '{}'", strategy)))?;
        game.add_player(Player::new(name, strat))?;
    }
    Ok(game)
}
