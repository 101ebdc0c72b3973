use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::dice::DICE_PER_HAND;
use crate::errors::GameError;

/// Hand categories from worst to best. The discriminant doubles as the
/// rank tier, mirroring the classic `tier * 1000 + value` scheme.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Serialize, Deserialize)]
pub enum Category {
    HighDice = 1,
    Straight = 2,
    General = 3,
    Schock = 4,
    SchockOut = 5,
}

/// The comparable value of three dice at turn end.
///
/// `value` is the in-category payload: the loose die for a Schock (2-6),
/// the face for a General (2-6), the low die for a Straight (1-4), the
/// descending digits for High Dice (221-665), and 0 for a Schock-out.
/// Hands are totally ordered; two hands are equal iff category and value
/// match.
#[derive(Debug, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct Hand {
    pub category: Category,
    pub value: u16,
    /// Faces sorted descending.
    pub faces: [u8; 3],
}

impl Hand {
    /// Evaluates raw dice faces into a hand. Pure and deterministic; the
    /// only failure modes are a wrong die count or an out-of-range face.
    pub fn evaluate(faces: &[u8]) -> Result<Hand, GameError> {
        Self::evaluate_put_together(faces, false)
    }

    /// Like [`Hand::evaluate`], but honoring the "put together" rule: a
    /// 1-2-3 assembled from kept dice across throws does not count as a
    /// Straight and falls back to High Dice.
    pub fn evaluate_put_together(faces: &[u8], put_together: bool) -> Result<Hand, GameError> {
        if faces.len() != DICE_PER_HAND {
            return Err(GameError::InvalidInput {
                reason: format!("expected {} dice, got {}", DICE_PER_HAND, faces.len()),
            });
        }
        for &face in faces {
            if !(1..=6).contains(&face) {
                return Err(GameError::InvalidInput {
                    reason: format!("die face {} out of range 1-6", face),
                });
            }
        }
        let mut sorted = [faces[0], faces[1], faces[2]];
        sorted.sort_unstable_by(|a, b| b.cmp(a));

        let ones = sorted.iter().filter(|&&f| f == 1).count();
        if ones == 3 {
            return Ok(Hand {
                category: Category::SchockOut,
                value: 0,
                faces: sorted,
            });
        }
        if ones == 2 {
            return Ok(Hand {
                category: Category::Schock,
                value: sorted[0] as u16,
                faces: sorted,
            });
        }
        if sorted[0] == sorted[1] && sorted[1] == sorted[2] {
            return Ok(Hand {
                category: Category::General,
                value: sorted[0] as u16,
                faces: sorted,
            });
        }
        // consecutive descending run, e.g. [4, 3, 2]
        if sorted[0] == sorted[1] + 1 && sorted[1] == sorted[2] + 1 {
            let low = sorted[2];
            if low != 1 || !put_together {
                return Ok(Hand {
                    category: Category::Straight,
                    value: low as u16,
                    faces: sorted,
                });
            }
        }
        Ok(Hand {
            category: Category::HighDice,
            value: 100 * sorted[0] as u16 + 10 * sorted[1] as u16 + sorted[2] as u16,
            faces: sorted,
        })
    }

    /// Internal rank backing the total order.
    pub fn rank(&self) -> u16 {
        self.category as u16 * 1000 + self.value
    }

    /// Penalty chips awarded when this is the best hand of a mini-round,
    /// per the default chip table. A Schock-out stands for the entire
    /// remaining stock; the value here is the full default stock.
    pub fn chip_count(&self) -> u8 {
        ChipTable::default().chips_for(self)
    }

    /// Human-readable hand name: `Schock-out`, `Schock-5`, `General-4`,
    /// `Straight-2:4`, `65-3`, or `Motte` for the lowest high dice.
    pub fn name(&self) -> String {
        match self.category {
            Category::SchockOut => "Schock-out".to_string(),
            Category::Schock => format!("Schock-{}", self.value),
            Category::General => format!("General-{}", self.value),
            Category::Straight => format!("Straight-{}:{}", self.value, self.value + 2),
            Category::HighDice => {
                if self.value == 221 {
                    "Motte".to_string()
                } else {
                    format!("{}{}-{}", self.faces[0], self.faces[1], self.faces[2])
                }
            }
        }
    }
}

impl Ord for Hand {
    fn cmp(&self, other: &Self) -> Ordering {
        self.rank().cmp(&other.rank())
    }
}

impl PartialOrd for Hand {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for Hand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for Hand {
    type Err = GameError;

    /// Parses the names produced by [`Hand::name`] back into hands.
    fn from_str(name: &str) -> Result<Self, Self::Err> {
        if name == "Motte" {
            return Hand::evaluate(&[1, 2, 2]);
        }
        if name == "Schock-out" {
            return Hand::evaluate(&[1, 1, 1]);
        }
        if let Some(rest) = name.strip_prefix("Schock-") {
            let value: u8 = parse_face(rest, name)?;
            return Hand::evaluate(&[1, 1, value]);
        }
        if let Some(rest) = name.strip_prefix("General-") {
            let value: u8 = parse_face(rest, name)?;
            return Hand::evaluate(&[value, value, value]);
        }
        if let Some(rest) = name.strip_prefix("Straight-") {
            let low: u8 = parse_face(rest.split(':').next().unwrap_or(""), name)?;
            return Hand::evaluate(&[low, low + 1, low + 2]);
        }
        // high dice written as "ab-c"
        let digits: Vec<u8> = name
            .chars()
            .filter(|c| *c != '-')
            .map(|c| c.to_digit(10).map(|d| d as u8))
            .collect::<Option<Vec<u8>>>()
            .ok_or_else(|| GameError::InvalidInput {
                reason: format!("unknown hand name '{}'", name),
            })?;
        if digits.len() != DICE_PER_HAND {
            return Err(GameError::InvalidInput {
                reason: format!("unknown hand name '{}'", name),
            });
        }
        // a named high dice containing a one can only exist put together,
        // otherwise it would have been a Schock or Straight
        let put_together = digits.contains(&1);
        Hand::evaluate_put_together(&digits, put_together)
    }
}

fn parse_face(text: &str, name: &str) -> Result<u8, GameError> {
    text.parse::<u8>().map_err(|_| GameError::InvalidInput {
        reason: format!("unknown hand name '{}'", name),
    })
}

/// The fixed mapping from best-hand category to awarded penalty chips.
/// Schock chips equal the loose die's face; a Schock-out empties the stock.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChipTable {
    pub general: u8,
    pub straight: u8,
    pub high_dice: u8,
}

impl Default for ChipTable {
    fn default() -> Self {
        Self {
            general: 3,
            straight: 2,
            high_dice: 1,
        }
    }
}

impl ChipTable {
    pub fn chips_for(&self, hand: &Hand) -> u8 {
        match hand.category {
            Category::SchockOut => crate::game::DEFAULT_STOCK_SIZE,
            Category::Schock => hand.value as u8,
            Category::General => self.general,
            Category::Straight => self.straight,
            Category::HighDice => self.high_dice,
        }
    }
}
