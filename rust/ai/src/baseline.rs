//! Baseline strategy for Schocken play.
//!
//! A simple rule-based player for testing and benchmarking: set ones
//! aside, throw everything else again, and stand once the hand is worth
//! keeping. Holding a Schock, it keeps chasing the Schock-out with the
//! loose die.

use schocken_engine::hand::{Category, Hand};
use schocken_engine::strategy::Strategy;

#[derive(Debug, Default)]
pub struct BaselineStrategy;

impl BaselineStrategy {
    pub fn new() -> Self {
        Self
    }
}

impl Strategy for BaselineStrategy {
    fn choose_rerolls(&self, faces: &[u8], _throw_number: u8, _throws_remaining: u8) -> Vec<usize> {
        let category = Hand::evaluate(faces).map(|hand| hand.category).ok();
        match category {
            // nothing beats it
            Some(Category::SchockOut) => Vec::new(),
            // worth standing on
            Some(Category::General) | Some(Category::Straight) => Vec::new(),
            // keep the ones, throw the rest: holding a Schock this chases
            // the Schock-out, otherwise it builds toward one
            Some(Category::Schock) | Some(Category::HighDice) | None => reroll_non_ones(faces),
        }
    }

    fn name(&self) -> &str {
        "baseline"
    }
}

fn reroll_non_ones(faces: &[u8]) -> Vec<usize> {
    faces
        .iter()
        .enumerate()
        .filter(|&(_, &face)| face != 1)
        .map(|(index, _)| index)
        .collect()
}
