use std::fmt;

use super::player::PlayerId;

/// Number of players a Nines round is defined for.
pub const PLAYERS_PER_ROUND: usize = 3;

/// Failure kinds raised by the round engine.
///
/// Every operation that returns one of these leaves the round untouched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RoundError {
    /// A round or a hole was given a player set whose size is not 3.
    InvalidPlayerCount { expected: usize, found: usize },
    /// A stroke map referenced a player who is not in the round.
    UnknownPlayer(PlayerId),
    /// A hole was recorded while the hole pointer is outside `1..=hole_count`.
    State { current_hole: usize, hole_count: usize },
    /// Fewer than 3 players had a stroke count for the hole.
    MissingScore { expected: usize, found: usize },
    /// A player was created with an empty (or whitespace-only) name.
    InvalidPlayerName,
    /// The same player appears more than once in a roster.
    DuplicatePlayer(PlayerId),
    /// Adding a hole's strokes would overflow the player's running total.
    StrokeOverflow(PlayerId),
}

impl RoundError {
    /// True for both a wrong player count and an unknown player id.
    /// Callers that only care about "the player set is wrong" match on this.
    pub fn is_invalid_player_count(&self) -> bool {
        matches!(
            self,
            RoundError::InvalidPlayerCount { .. }
                | RoundError::UnknownPlayer(_)
                | RoundError::DuplicatePlayer(_)
        )
    }
}

impl fmt::Display for RoundError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RoundError::InvalidPlayerCount { expected, found } => {
                write!(f, "Round needs exactly {} players, got {}", expected, found)
            }
            RoundError::UnknownPlayer(id) => write!(f, "Player {} is not in this round", id),
            RoundError::State {
                current_hole,
                hole_count,
            } => write!(
                f,
                "Cannot record hole {}: round only has {} holes",
                current_hole, hole_count
            ),
            RoundError::MissingScore { expected, found } => write!(
                f,
                "Hole needs strokes for all {} players, got {}",
                expected, found
            ),
            RoundError::InvalidPlayerName => write!(f, "Player name cannot be empty"),
            RoundError::DuplicatePlayer(id) => {
                write!(f, "Player {} appears more than once in the roster", id)
            }
            RoundError::StrokeOverflow(id) => {
                write!(f, "Stroke total for player {} is too large", id)
            }
        }
    }
}

impl std::error::Error for RoundError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_player_counts_as_invalid_player_set() {
        let err = RoundError::UnknownPlayer(PlayerId::new());
        assert!(err.is_invalid_player_count());
        assert!(!RoundError::InvalidPlayerName.is_invalid_player_count());
    }

    #[test]
    fn test_display_messages() {
        let err = RoundError::InvalidPlayerCount {
            expected: 3,
            found: 2,
        };
        assert_eq!(err.to_string(), "Round needs exactly 3 players, got 2");

        let err = RoundError::State {
            current_hole: 10,
            hole_count: 9,
        };
        assert!(err.to_string().contains("hole 10"));

        let id = PlayerId::new();
        let err = RoundError::DuplicatePlayer(id);
        assert!(err.is_invalid_player_count());
        assert!(err.to_string().contains(&id.to_string()));
    }
}
