use serde::{Deserialize, Serialize};

use crate::dice::DiceCup;
use crate::errors::GameError;
use crate::hand::ChipTable;
use crate::player::{Player, PlayerId};
use crate::turn::{play_turn, Turn};

/// Smallest number of players a mini-round can be played with.
pub const MIN_PLAYERS: usize = 2;
/// Largest supported table.
pub const MAX_PLAYERS: usize = 50;

/// Record of one round-robin of turns. Finalized once every participant
/// has played; owned by its half.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MiniRound {
    pub mini_round_index: usize,
    /// Participants in the order they threw.
    pub participants: Vec<PlayerId>,
    pub turns: Vec<Turn>,
    pub worst_turn: Turn,
    pub best_turn: Turn,
    /// Chips awarded to the loser. Set from the best hand's chip count and
    /// later adjusted by the half engine when the stock clamps the award.
    pub given_chips: u8,
    pub lost_by: PlayerId,
}

/// Plays one turn per player in the given order and resolves the loser.
///
/// The starter's throw count caps the throws allowed to everyone after
/// them. Worst and best hands are picked by strict comparison, so ties go
/// to the earliest turn in play order; in particular, the first player to
/// throw the worst hand loses.
pub fn play_mini_round(
    players: &[&Player],
    mini_round_index: usize,
    max_throws: u8,
    chip_table: &ChipTable,
    cup: &mut DiceCup,
) -> Result<MiniRound, GameError> {
    if players.len() < MIN_PLAYERS || players.len() > MAX_PLAYERS {
        return Err(GameError::InvalidState {
            reason: format!(
                "mini-round needs {} to {} players, got {}",
                MIN_PLAYERS,
                MAX_PLAYERS,
                players.len()
            ),
        });
    }

    let mut turns: Vec<Turn> = Vec::with_capacity(players.len());
    let mut throw_cap = max_throws;
    for (turn_index, player) in players.iter().enumerate() {
        let turn = play_turn(player, turn_index, throw_cap, cup)?;
        if turn_index == 0 {
            throw_cap = turn.num_throws();
        }
        turns.push(turn);
    }

    let mut worst = 0;
    let mut best = 0;
    for i in 1..turns.len() {
        if turns[i].final_hand < turns[worst].final_hand {
            worst = i;
        }
        if turns[i].final_hand > turns[best].final_hand {
            best = i;
        }
    }

    Ok(MiniRound {
        mini_round_index,
        participants: players.iter().map(|p| p.id()).collect(),
        worst_turn: turns[worst].clone(),
        best_turn: turns[best].clone(),
        given_chips: chip_table.chips_for(&turns[best].final_hand),
        lost_by: turns[worst].player_id,
        turns,
    })
}
