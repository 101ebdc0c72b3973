use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::chips::ChipManager;
use crate::dice::DiceCup;
use crate::errors::GameError;
use crate::game::GameConfig;
use crate::logger::Narration;
use crate::mini_round::{play_mini_round, MiniRound};
use crate::player::{name_of, Player, PlayerId};

/// Hard cap on mini-rounds per half. The stock is finite and strictly
/// decreasing outside the post-exhaustion phase, so hitting this means a
/// broken configuration rather than a long game.
pub const MAX_MINI_ROUNDS: usize = 1000;

/// Why a half ended.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub enum EndReason {
    /// Someone threw a Schock-out; the mini-round loser took the whole
    /// remaining stock.
    SchockOut,
    /// The stock ran dry (or, with elimination enabled, one player ended
    /// up holding all of it).
    StockExhausted,
}

/// Immutable record of one half: its mini-rounds, the final chip ledger,
/// and the losing player. Owned by its round.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Half {
    pub half_index: usize,
    /// Players still contesting when the half ended. Only shrinks when
    /// `eliminate_on_exhaustion` is enabled.
    pub active_players: Vec<PlayerId>,
    pub mini_rounds: Vec<MiniRound>,
    pub lost_by: PlayerId,
    pub end_reason: EndReason,
    pub chip_manager: ChipManager,
}

impl Half {
    pub fn stock_chips_gone(&self) -> bool {
        self.chip_manager.stock_exhausted()
    }
}

/// Repeats mini-rounds until the half ends.
///
/// Each mini-round's loser receives the best hand's chip count from the
/// stock, clamped to what remains. A Schock-out ends the half at once,
/// with the loser taking the entire remaining stock. When the stock runs
/// dry the half ends and the player with the highest total loses (ties go
/// to whoever reached that total first) - unless
/// [`GameConfig::eliminate_on_exhaustion`] is set, in which case play
/// continues with chips moving from each mini-round's winner to its loser,
/// players dropping out at zero chips, until one player holds the whole
/// stock.
///
/// The loser of each mini-round throws first in the next one; `last_loser`
/// carries that rotation in from earlier play. The decider half
/// (`half_index == 2`) keeps its fixed two-player order instead.
pub fn play_half(
    roster: &[Player],
    active: &[PlayerId],
    half_index: usize,
    config: &GameConfig,
    cup: &mut DiceCup,
    mut last_loser: Option<PlayerId>,
    narration: &mut Narration<'_>,
) -> Result<Half, GameError> {
    narration.line(1, &format!("Playing half {}", half_index));

    let mut active: Vec<PlayerId> = active.to_vec();
    let mut chips = ChipManager::new(config.stock_size, active.iter().copied());
    let mut mini_rounds: Vec<MiniRound> = Vec::new();
    // mini-round index of each player's latest chip gain, for tie-breaks
    let mut last_gain: BTreeMap<PlayerId, usize> = BTreeMap::new();
    let rotate = half_index < 2;
    let mut mini_round_index = 0;

    let (lost_by, end_reason) = loop {
        if mini_round_index >= MAX_MINI_ROUNDS {
            return Err(GameError::InvalidState {
                reason: format!(
                    "half did not terminate within {} mini-rounds",
                    MAX_MINI_ROUNDS
                ),
            });
        }

        if rotate {
            if let Some(starter) = last_loser {
                // a loser carried over from earlier play may not contest
                // this half
                if active.contains(&starter) {
                    active = rotate_to_starter(roster, &active, starter);
                }
            }
        }

        let players = resolve_players(roster, &active)?;
        let mut mr = play_mini_round(
            &players,
            mini_round_index,
            config.max_throws,
            &config.chip_table,
            cup,
        )?;
        last_loser = Some(mr.lost_by);

        if ChipManager::is_schock_out(&mr.best_turn.final_hand) {
            mr.given_chips = chips.award_all_remaining(mr.lost_by);
            narration.line(
                2,
                &format!("Schock out! by {}.", name_of(roster, mr.best_turn.player_id)),
            );
            let loser = mr.lost_by;
            mini_rounds.push(mr);
            mini_round_index += 1;
            break (loser, EndReason::SchockOut);
        }

        if !chips.stock_exhausted() {
            let granted = chips.award_from_stock(mr.lost_by, mr.given_chips)?;
            mr.given_chips = granted;
            if granted > 0 {
                last_gain.insert(mr.lost_by, mini_round_index);
            }
            let loser = mr.lost_by;
            mini_rounds.push(mr);
            if chips.stock_exhausted() {
                if !config.eliminate_on_exhaustion {
                    let richest = richest_player(&chips, &last_gain).unwrap_or(loser);
                    mini_round_index += 1;
                    break (richest, EndReason::StockExhausted);
                }
                // elimination starts with the mini-round that drains the
                // stock, not one later
                active.retain(|id| chips.balance(*id) > 0);
            }
        } else {
            // post-exhaustion phase: chips circulate from the mini-round
            // winner to the loser, clamped to the winner's balance
            let moved = chips.transfer(mr.best_turn.player_id, mr.lost_by, mr.given_chips);
            mr.given_chips = moved;
            if moved > 0 {
                last_gain.insert(mr.lost_by, mini_round_index);
            }
            mini_rounds.push(mr);
            active.retain(|id| chips.balance(*id) > 0);
        }

        if let Some(loser) = full_stock_holder(&chips, config.stock_size) {
            narration.line(2, "Half ended regularly");
            mini_round_index += 1;
            break (loser, EndReason::StockExhausted);
        }
        mini_round_index += 1;
    };

    narration.line(
        2,
        &format!(
            "-> Half ended after {} rounds. {} lost.",
            mini_round_index,
            name_of(roster, lost_by)
        ),
    );

    Ok(Half {
        half_index,
        active_players: active,
        mini_rounds,
        lost_by,
        end_reason,
        chip_manager: chips,
    })
}

fn resolve_players<'a>(
    roster: &'a [Player],
    active: &[PlayerId],
) -> Result<Vec<&'a Player>, GameError> {
    active
        .iter()
        .map(|id| {
            roster
                .iter()
                .find(|p| p.id() == *id)
                .ok_or_else(|| GameError::InvalidState {
                    reason: format!("active player {} is not on the roster", id),
                })
        })
        .collect()
}

/// Shifts the active list so `starter` throws first while keeping the
/// roster's circular order.
fn rotate_to_starter(roster: &[Player], active: &[PlayerId], starter: PlayerId) -> Vec<PlayerId> {
    let ordered: Vec<PlayerId> = roster
        .iter()
        .map(|p| p.id())
        .filter(|id| active.contains(id))
        .collect();
    match ordered.iter().position(|&id| id == starter) {
        Some(n) => ordered[n..].iter().chain(ordered[..n].iter()).copied().collect(),
        None => ordered,
    }
}

/// The player with the highest chip total; ties go to whoever reached
/// that total first.
fn richest_player(chips: &ChipManager, last_gain: &BTreeMap<PlayerId, usize>) -> Option<PlayerId> {
    let gain_index = |id: PlayerId| last_gain.get(&id).copied().unwrap_or(usize::MAX);
    let mut best: Option<(PlayerId, u8)> = None;
    for (&id, &balance) in chips.balances() {
        let better = match best {
            None => true,
            Some((best_id, best_balance)) => {
                balance > best_balance
                    || (balance == best_balance && gain_index(id) < gain_index(best_id))
            }
        };
        if better {
            best = Some((id, balance));
        }
    }
    best.map(|(id, _)| id)
}

fn full_stock_holder(chips: &ChipManager, stock_size: u8) -> Option<PlayerId> {
    chips
        .balances()
        .iter()
        .find(|(_, &balance)| balance >= stock_size)
        .map(|(&id, _)| id)
}
