use std::fmt;

use serde::{Deserialize, Serialize};

use crate::strategy::Strategy;

/// Stable player identity within one game. Assigned by the game's roster
/// in join order; never reused.
#[derive(
    Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Serialize, Deserialize,
)]
pub struct PlayerId(pub u32);

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "PID({})", self.0)
    }
}

/// A roster entry: identity plus the strategy deciding its re-rolls.
/// No mutable game state lives here; chips and records are tracked by the
/// half and round structures.
pub struct Player {
    id: PlayerId,
    name: String,
    strategy: Box<dyn Strategy>,
}

impl Player {
    /// Creates an unregistered player. The id is assigned when the player
    /// joins a game roster.
    pub fn new(name: impl Into<String>, strategy: Box<dyn Strategy>) -> Self {
        Self {
            id: PlayerId(0),
            name: name.into(),
            strategy,
        }
    }

    pub fn id(&self) -> PlayerId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn strategy(&self) -> &dyn Strategy {
        self.strategy.as_ref()
    }

    pub(crate) fn assign_id(&mut self, id: PlayerId) {
        self.id = id;
    }
}

impl fmt::Debug for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Player")
            .field("id", &self.id)
            .field("name", &self.name)
            .field("strategy", &self.strategy.name())
            .finish()
    }
}

/// Resolves a player id to its display name, falling back to the raw id
/// for players no longer on the roster.
pub fn name_of(roster: &[Player], id: PlayerId) -> String {
    roster
        .iter()
        .find(|p| p.id() == id)
        .map(|p| p.name().to_string())
        .unwrap_or_else(|| id.to_string())
}
