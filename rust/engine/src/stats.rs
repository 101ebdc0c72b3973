use std::collections::BTreeMap;

use serde::Serialize;

use crate::player::{name_of, Player};
use crate::round::Round;

/// Per-player statistics derived from the recorded round tree, keyed by
/// player name. Pure aggregates; recomputed on every query.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Scores {
    pub rounds_lost: BTreeMap<String, u32>,
    pub halves_lost: BTreeMap<String, u32>,
    pub minirounds_lost: BTreeMap<String, u32>,
    /// Turns played per player across all recorded rounds.
    pub hands_played: BTreeMap<String, u32>,
    /// Histogram of hand names thrown per player.
    pub hand_histogram: BTreeMap<String, BTreeMap<String, u32>>,
}

/// Walks the round/half/mini-round/turn tree and counts losses and hands
/// per player.
pub fn compute_scores(roster: &[Player], rounds: &[Round]) -> Scores {
    let mut scores = Scores::default();
    for player in roster {
        let name = player.name().to_string();
        scores.rounds_lost.insert(name.clone(), 0);
        scores.halves_lost.insert(name.clone(), 0);
        scores.minirounds_lost.insert(name.clone(), 0);
        scores.hands_played.insert(name.clone(), 0);
        scores.hand_histogram.insert(name, BTreeMap::new());
    }

    for round in rounds {
        *scores
            .rounds_lost
            .entry(name_of(roster, round.lost_by))
            .or_insert(0) += 1;
        for half in &round.halves {
            *scores
                .halves_lost
                .entry(name_of(roster, half.lost_by))
                .or_insert(0) += 1;
            for mini_round in &half.mini_rounds {
                *scores
                    .minirounds_lost
                    .entry(name_of(roster, mini_round.lost_by))
                    .or_insert(0) += 1;
                for turn in &mini_round.turns {
                    let name = name_of(roster, turn.player_id);
                    *scores.hands_played.entry(name.clone()).or_insert(0) += 1;
                    *scores
                        .hand_histogram
                        .entry(name)
                        .or_default()
                        .entry(turn.final_hand.name())
                        .or_insert(0) += 1;
                }
            }
        }
    }
    scores
}
