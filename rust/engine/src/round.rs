use serde::{Deserialize, Serialize};

use crate::dice::DiceCup;
use crate::errors::GameError;
use crate::game::GameConfig;
use crate::half::{play_half, Half};
use crate::logger::Narration;
use crate::player::{name_of, Player, PlayerId};

/// Record of one round: two regular halves, plus a decider half iff the
/// regular halves produced different losers. Owned by the game.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Round {
    pub round_index: usize,
    pub halves: Vec<Half>,
    pub lost_by: PlayerId,
}

impl Round {
    pub fn had_decider(&self) -> bool {
        self.halves.len() == 3
    }
}

/// Plays a full round over the given roster.
///
/// Both regular halves run with every roster player active. If they share
/// a loser, that player loses the round outright. Otherwise a decider half
/// is played between exactly the two half losers, ordered so the first
/// half's loser starts; its loser loses the round.
///
/// `last_loser` carries the mini-round rotation across halves and rounds.
pub fn play_round(
    roster: &[Player],
    round_index: usize,
    config: &GameConfig,
    cup: &mut DiceCup,
    last_loser: &mut Option<PlayerId>,
    narration: &mut Narration<'_>,
) -> Result<Round, GameError> {
    narration.line(0, &format!("Playing round {}", round_index));

    let all_players: Vec<PlayerId> = roster.iter().map(|p| p.id()).collect();
    let mut halves: Vec<Half> = Vec::with_capacity(2);

    for half_index in 0..2 {
        let half = play_half(
            roster,
            &all_players,
            half_index,
            config,
            cup,
            *last_loser,
            narration,
        )?;
        *last_loser = half.mini_rounds.last().map(|mr| mr.lost_by);
        halves.push(half);
    }

    let first_loser = halves[0].lost_by;
    let second_loser = halves[1].lost_by;

    let lost_by = if first_loser == second_loser {
        narration.line(0, &format!("Round lost clean by {}", name_of(roster, first_loser)));
        narration.line(0, "");
        first_loser
    } else {
        // the decider: only the two half losers contest, first half's
        // loser starts
        let finalists = vec![first_loser, second_loser];
        let half = play_half(roster, &finalists, 2, config, cup, None, narration)?;
        *last_loser = half.mini_rounds.last().map(|mr| mr.lost_by);
        let loser = half.lost_by;
        halves.push(half);
        narration.line(
            0,
            &format!(
                "-> Final between {} and {} lost by {}.",
                name_of(roster, first_loser),
                name_of(roster, second_loser),
                name_of(roster, loser)
            ),
        );
        narration.line(0, "");
        loser
    };

    Ok(Round {
        round_index,
        halves,
        lost_by,
    })
}
