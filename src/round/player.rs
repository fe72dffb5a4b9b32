use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

use super::error::RoundError;

/// Opaque player identifier, stable for the lifetime of a round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PlayerId(Uuid);

impl PlayerId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for PlayerId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    pub id: PlayerId,
    pub name: String,
    pub total_score: u32,
    pub total_strokes: u32,
}

impl Player {
    /// Create a player with a fresh id and zeroed totals.
    /// The name is trimmed; an empty result is rejected.
    pub fn new(name: impl Into<String>) -> Result<Self, RoundError> {
        let name = name.into().trim().to_string();
        if name.is_empty() {
            return Err(RoundError::InvalidPlayerName);
        }
        Ok(Self {
            id: PlayerId::new(),
            name,
            total_score: 0,
            total_strokes: 0,
        })
    }

    /// Build a roster from names, failing on the first empty one.
    pub fn roster<I, S>(names: I) -> Result<Vec<Player>, RoundError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        names.into_iter().map(Player::new).collect()
    }
}
