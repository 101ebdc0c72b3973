//! # schocken-engine: Schocken Game Engine Core
//!
//! A deterministic engine for the dice game Schocken. Provides the full
//! game state machine (turn, mini-round, half, round, game), penalty-chip
//! accounting, hand evaluation, and statistics aggregation with
//! reproducible RNG for regression testing and analysis.
//!
//! ## Core Modules
//!
//! - [`dice`] - Seeded die-throw source (ChaCha20 RNG or scripted faces)
//! - [`hand`] - Hand evaluation and the total order over hand values
//! - [`strategy`] - The pluggable re-roll decision interface
//! - [`player`] - Player identity and strategy binding
//! - [`turn`] - One player's turn: up to three throws
//! - [`chips`] - Penalty-chip stock and per-player ledger
//! - [`mini_round`] - One turn per active player, resolving to a loser
//! - [`half`] - Mini-round loop terminated by Schock-out or stock exhaustion
//! - [`round`] - Two regular halves plus a conditional decider half
//! - [`game`] - Roster management, round orchestration, statistics access
//! - [`stats`] - On-demand aggregation over the recorded round tree
//! - [`logger`] - Narration sink and JSONL round-record serialization
//! - [`errors`] - Error types for game operations
//!
//! ## Quick Start
//!
//! ```rust
//! use schocken_engine::game::Game;
//! use schocken_engine::player::Player;
//! use schocken_engine::strategy::Strategy;
//!
//! // A strategy that never re-rolls: one throw per turn.
//! struct StandPat;
//!
//! impl Strategy for StandPat {
//!     fn choose_rerolls(&self, _faces: &[u8], _throw_number: u8, _throws_remaining: u8) -> Vec<usize> {
//!         Vec::new()
//!     }
//!
//!     fn name(&self) -> &str {
//!         "stand-pat"
//!     }
//! }
//!
//! let mut game = Game::new(Some(42));
//! game.add_player(Player::new("Alice", Box::new(StandPat))).unwrap();
//! game.add_player(Player::new("Bob", Box::new(StandPat))).unwrap();
//!
//! let round = game.play_round().unwrap();
//! assert!(round.halves.len() == 2 || round.halves.len() == 3);
//! ```
//!
//! ## Deterministic Gameplay
//!
//! All game outcomes are reproducible using seeded RNG:
//!
//! ```rust
//! use schocken_engine::dice::DiceCup;
//!
//! // Same seed produces the same throw sequence
//! let mut cup1 = DiceCup::new_with_seed(42);
//! let mut cup2 = DiceCup::new_with_seed(42);
//! assert_eq!(cup1.throw_all(3), cup2.throw_all(3));
//! ```

pub mod chips;
pub mod dice;
pub mod errors;
pub mod game;
pub mod half;
pub mod hand;
pub mod logger;
pub mod mini_round;
pub mod player;
pub mod round;
pub mod stats;
pub mod strategy;
pub mod turn;
