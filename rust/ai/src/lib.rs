//! # schocken-ai: Player Strategies for Schocken
//!
//! Strategy implementations for the Schocken engine's re-roll decision
//! interface, with a common factory for creating them by name.
//!
//! ## Core Components
//!
//! - [`Strategy`] - Re-exported decision trait from the engine
//! - [`baseline`] - Rule-based strategy that keeps ones and chases Schocks
//! - [`random`] - Seeded coin-flip strategy for benchmarks and fuzzing
//! - [`create_strategy`] - Factory function for creating strategies by name
//!
//! ## Quick Start
//!
//! ```rust
//! use schocken_ai::create_strategy;
//! use schocken_engine::game::Game;
//! use schocken_engine::player::Player;
//!
//! let mut game = Game::new(Some(42));
//! game.add_player(Player::new("Alice", create_strategy("baseline"))).unwrap();
//! game.add_player(Player::new("Bob", create_strategy("baseline"))).unwrap();
//!
//! let round = game.play_round().unwrap();
//! assert!(game.players().iter().any(|p| p.id() == round.lost_by));
//! ```
//!
//! ## Strategy Types
//!
//! Currently supported:
//! - `"baseline"` - keep ones, chase a Schock-out, stand on good hands
//! - `"random"` - randomized re-roll choices (fresh entropy each instance)

pub use schocken_engine::strategy::Strategy;

pub mod baseline;
pub mod random;

/// Creates a strategy by type name, or `None` for an unknown name.
pub fn try_create_strategy(kind: &str) -> Option<Box<dyn Strategy>> {
    match kind {
        "baseline" => Some(Box::new(baseline::BaselineStrategy::new())),
        "random" => Some(Box::new(random::RandomStrategy::new())),
        _ => None,
    }
}

/// Creates a strategy by type name.
///
/// # Panics
///
/// Panics if an unknown strategy name is requested. Use
/// [`try_create_strategy`] when the name comes from user input.
pub fn create_strategy(kind: &str) -> Box<dyn Strategy> {
    match try_create_strategy(kind) {
        Some(strategy) => strategy,
        None => panic!("Unknown strategy type: {}", kind),
    }
}
