use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::errors::GameError;
use crate::hand::{Category, Hand};
use crate::player::PlayerId;

/// Per-half penalty-chip ledger: a shared stock plus each player's
/// personal total.
///
/// Invariant, upheld by every operation: the sum of personal totals and
/// the remaining stock always equals the initial stock size. Awards are
/// clamped so a player can never receive more chips than remain.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChipManager {
    initial_stock: u8,
    chips_in_stock: u8,
    balances: BTreeMap<PlayerId, u8>,
}

impl ChipManager {
    pub fn new(stock_size: u8, players: impl IntoIterator<Item = PlayerId>) -> Self {
        Self {
            initial_stock: stock_size,
            chips_in_stock: stock_size,
            balances: players.into_iter().map(|id| (id, 0)).collect(),
        }
    }

    pub fn initial_stock(&self) -> u8 {
        self.initial_stock
    }

    pub fn chips_in_stock(&self) -> u8 {
        self.chips_in_stock
    }

    pub fn stock_exhausted(&self) -> bool {
        self.chips_in_stock == 0
    }

    pub fn balance(&self, player: PlayerId) -> u8 {
        self.balances.get(&player).copied().unwrap_or(0)
    }

    pub fn balances(&self) -> &BTreeMap<PlayerId, u8> {
        &self.balances
    }

    /// Chips currently accounted for: personal totals plus stock. Equal to
    /// the initial stock at all times.
    pub fn accounted_chips(&self) -> u8 {
        self.balances.values().sum::<u8>() + self.chips_in_stock
    }

    /// Moves up to `count` chips from the stock to the player, clamped to
    /// what remains. Returns the amount actually granted.
    ///
    /// Calling this with the stock already empty is engine misuse (the
    /// half must have ended) and fails with [`GameError::StockUnderflow`].
    pub fn award_from_stock(&mut self, player: PlayerId, count: u8) -> Result<u8, GameError> {
        if self.chips_in_stock == 0 {
            return Err(GameError::StockUnderflow {
                requested: count,
                available: 0,
            });
        }
        let granted = count.min(self.chips_in_stock);
        self.chips_in_stock -= granted;
        *self.balances.entry(player).or_insert(0) += granted;
        Ok(granted)
    }

    /// Empties the stock into the player's total (Schock-out settlement).
    /// Returns the amount moved.
    pub fn award_all_remaining(&mut self, player: PlayerId) -> u8 {
        let granted = self.chips_in_stock;
        self.chips_in_stock = 0;
        *self.balances.entry(player).or_insert(0) += granted;
        granted
    }

    /// Moves up to `count` chips between players, clamped to the giver's
    /// balance. Used in the post-exhaustion phase when chips circulate
    /// instead of coming from the stock. Returns the amount moved.
    pub fn transfer(&mut self, from: PlayerId, to: PlayerId, count: u8) -> u8 {
        if from == to {
            return 0;
        }
        let moved = count.min(self.balance(from));
        if let Some(balance) = self.balances.get_mut(&from) {
            *balance -= moved;
        }
        *self.balances.entry(to).or_insert(0) += moved;
        moved
    }

    pub fn is_schock_out(hand: &Hand) -> bool {
        hand.category == Category::SchockOut
    }
}
