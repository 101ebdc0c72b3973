use std::io;
use std::io::Write;

use crate::dice::DiceCup;
use crate::errors::GameError;
use crate::half::{play_half, Half};
use crate::hand::ChipTable;
use crate::logger::Narration;
use crate::mini_round::{play_mini_round, MiniRound, MIN_PLAYERS};
use crate::player::{Player, PlayerId};
use crate::round::{play_round, Round};
use crate::stats::{compute_scores, Scores};

/// Chips in a fresh stock.
pub const DEFAULT_STOCK_SIZE: u8 = 13;
/// Throws allowed to the starter of a mini-round.
pub const DEFAULT_MAX_THROWS: u8 = 3;

/// In-code game parameters. There is no configuration file surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    pub stock_size: u8,
    pub max_throws: u8,
    /// When set, a half keeps going after the stock runs dry: chips move
    /// from each mini-round's winner to its loser, zero-chip players drop
    /// out, and the half ends once one player holds the whole stock. When
    /// unset (default), the half ends at stock exhaustion.
    pub eliminate_on_exhaustion: bool,
    pub chip_table: ChipTable,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            stock_size: DEFAULT_STOCK_SIZE,
            max_throws: DEFAULT_MAX_THROWS,
            eliminate_on_exhaustion: false,
            chip_table: ChipTable::default(),
        }
    }
}

/// Orchestrates repeated rounds across a player roster and records their
/// results.
///
/// Process-lifetime state: the roster and round history only grow, records
/// are never mutated retroactively, and statistics are derived from the
/// history on demand. Not safe for concurrent mutation; callers needing
/// that must synchronize externally.
#[derive(Debug)]
pub struct Game {
    players: Vec<Player>,
    rounds: Vec<Round>,
    config: GameConfig,
    cup: DiceCup,
    last_loser: Option<PlayerId>,
    verbose: bool,
}

impl Game {
    pub fn new(seed: Option<u64>) -> Self {
        Self::with_config(seed, GameConfig::default())
    }

    pub fn with_config(seed: Option<u64>, config: GameConfig) -> Self {
        let seed = seed.unwrap_or(0x5C0C_7E4A);
        Self {
            players: Vec::new(),
            rounds: Vec::new(),
            config,
            cup: DiceCup::new_with_seed(seed),
            last_loser: None,
            verbose: false,
        }
    }

    /// Replaces the throw source, e.g. with a scripted cup for regression
    /// tests.
    pub fn set_dice_cup(&mut self, cup: DiceCup) {
        self.cup = cup;
    }

    /// Enables narration on stdout for subsequent play calls.
    pub fn set_verbose(&mut self, verbose: bool) {
        self.verbose = verbose;
    }

    pub fn players(&self) -> &[Player] {
        &self.players
    }

    pub fn rounds(&self) -> &[Round] {
        &self.rounds
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn player(&self, id: PlayerId) -> Option<&Player> {
        self.players.iter().find(|p| p.id() == id)
    }

    /// Adds a player to the roster and assigns its id. Names must be
    /// unique; a collision fails with [`GameError::DuplicatePlayer`].
    pub fn add_player(&mut self, mut player: Player) -> Result<PlayerId, GameError> {
        if self.players.iter().any(|p| p.name() == player.name()) {
            return Err(GameError::DuplicatePlayer {
                name: player.name().to_string(),
            });
        }
        let id = PlayerId(self.players.len() as u32);
        player.assign_id(id);
        self.players.push(player);
        Ok(id)
    }

    pub fn add_players(
        &mut self,
        players: impl IntoIterator<Item = Player>,
    ) -> Result<Vec<PlayerId>, GameError> {
        players.into_iter().map(|p| self.add_player(p)).collect()
    }

    /// Plays a single mini-round over the full roster. Exposed for
    /// unit-level composition; the result is returned, not recorded.
    pub fn play_mini_round(&mut self) -> Result<MiniRound, GameError> {
        self.check_roster()?;
        let players: Vec<&Player> = self.players.iter().collect();
        play_mini_round(
            &players,
            0,
            self.config.max_throws,
            &self.config.chip_table,
            &mut self.cup,
        )
    }

    /// Plays a single half over the full roster. Exposed for unit-level
    /// composition; the result is returned, not recorded.
    pub fn play_half(&mut self) -> Result<Half, GameError> {
        self.check_roster()?;
        let all_players: Vec<PlayerId> = self.players.iter().map(|p| p.id()).collect();
        let half = play_half(
            &self.players,
            &all_players,
            0,
            &self.config,
            &mut self.cup,
            self.last_loser,
            &mut Narration::off(),
        )?;
        self.last_loser = half.mini_rounds.last().map(|mr| mr.lost_by);
        Ok(half)
    }

    /// Plays one round over the full roster and appends it to the history.
    pub fn play_round(&mut self) -> Result<Round, GameError> {
        if self.verbose {
            let mut stdout = io::stdout();
            let mut narration = Narration::to(&mut stdout);
            self.play_round_inner(&mut narration)
        } else {
            self.play_round_inner(&mut Narration::off())
        }
    }

    /// Like [`Game::play_round`], narrating to the given sink regardless
    /// of the verbosity flag.
    pub fn play_round_to(&mut self, sink: &mut dyn Write) -> Result<Round, GameError> {
        let mut narration = Narration::to(sink);
        self.play_round_inner(&mut narration)
    }

    fn play_round_inner(&mut self, narration: &mut Narration<'_>) -> Result<Round, GameError> {
        self.check_roster()?;
        let round = play_round(
            &self.players,
            self.rounds.len(),
            &self.config,
            &mut self.cup,
            &mut self.last_loser,
            narration,
        )?;
        self.rounds.push(round.clone());
        Ok(round)
    }

    /// Plays `count` sequential rounds and returns their records.
    pub fn play_rounds(&mut self, count: usize) -> Result<Vec<Round>, GameError> {
        (0..count).map(|_| self.play_round()).collect()
    }

    /// Derives the statistics from the recorded round tree. Nothing is
    /// cached; every call walks the full history.
    pub fn scores(&self) -> Scores {
        compute_scores(&self.players, &self.rounds)
    }

    fn check_roster(&self) -> Result<(), GameError> {
        if self.players.len() < MIN_PLAYERS {
            return Err(GameError::InvalidState {
                reason: format!(
                    "at least {} players are needed, got {}",
                    MIN_PLAYERS,
                    self.players.len()
                ),
            });
        }
        Ok(())
    }
}
