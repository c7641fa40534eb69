use crate::ROUNDS;
use crate::Round;

/// Knobs for how an arena runs its matches.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rules {
    /// Rounds that complete a match.
    pub rounds: Round,
    /// Substitute a random choice when a player's choice is missing.
    pub random_fill: bool,
}

impl Rules {
    /// Missing choices are rejected instead of drawn at random.
    pub fn strict() -> Self {
        Self {
            random_fill: false,
            ..Self::default()
        }
    }
}

impl Default for Rules {
    fn default() -> Self {
        Self {
            rounds: ROUNDS,
            random_fill: true,
        }
    }
}
