use serde::{Deserialize, Serialize};

use crate::dice::{DiceCup, DICE_PER_HAND};
use crate::errors::GameError;
use crate::hand::Hand;
use crate::player::{Player, PlayerId};

/// Immutable record of one player's turn: every throw's faces and the
/// final evaluated hand. Owned by its mini-round once finalized.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Turn {
    /// Position of this turn within its mini-round (0 = starter).
    pub turn_index: usize,
    pub player_id: PlayerId,
    /// Faces after each throw, in throw order (1 to `max_throws` entries).
    pub throws: Vec<[u8; 3]>,
    pub final_hand: Hand,
}

impl Turn {
    pub fn num_throws(&self) -> u8 {
        self.throws.len() as u8
    }
}

/// Drives one player through up to `max_throws` throws.
///
/// The first throw always uses all dice. After each throw except the last,
/// the player's strategy picks the dice to throw again; an empty choice
/// finalizes the turn early. Dice kept across a re-roll mark the hand as
/// "put together", which demotes an assembled 1-2-3 to High Dice.
///
/// Strategy output with out-of-range or duplicate indices aborts the turn
/// with [`GameError::InvalidStrategyOutput`]; nothing is recorded then.
pub fn play_turn(
    player: &Player,
    turn_index: usize,
    max_throws: u8,
    cup: &mut DiceCup,
) -> Result<Turn, GameError> {
    if max_throws == 0 {
        return Err(GameError::InvalidState {
            reason: "turn cannot start with a throw limit of 0".to_string(),
        });
    }

    let mut faces = cup.throw_all(DICE_PER_HAND);
    let mut kept = [false; DICE_PER_HAND];
    let mut throws = vec![[faces[0], faces[1], faces[2]]];
    let mut throw_number: u8 = 1;

    while throw_number < max_throws {
        let throws_remaining = max_throws - throw_number;
        let rerolls = player
            .strategy()
            .choose_rerolls(&faces, throw_number, throws_remaining);
        if rerolls.is_empty() {
            break;
        }

        let mut chosen = [false; DICE_PER_HAND];
        for &index in &rerolls {
            if index >= faces.len() || chosen[index] {
                return Err(GameError::InvalidStrategyOutput {
                    index,
                    dice: faces.len(),
                });
            }
            chosen[index] = true;
        }

        for (i, &rethrow) in chosen.iter().enumerate() {
            if rethrow {
                faces[i] = cup.throw_die();
                kept[i] = false;
            } else {
                kept[i] = true;
            }
        }
        throws.push([faces[0], faces[1], faces[2]]);
        throw_number += 1;
    }

    let put_together = kept.iter().any(|&k| k);
    let final_hand = Hand::evaluate_put_together(&faces, put_together)?;

    Ok(Turn {
        turn_index,
        player_id: player.id(),
        throws,
        final_hand,
    })
}
