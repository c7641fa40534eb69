use crate::Points;
use serde::Deserialize;
use serde::Serialize;

/// Cumulative record of one player across finalized matches.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerStats {
    /// Round-wins summed over every finalized match.
    pub score: Points,
    /// Matches won outright.
    pub games_won: Points,
}

impl PlayerStats {
    pub fn credit(&mut self, wins: Points, outright: bool) {
        self.score += wins;
        if outright {
            self.games_won += 1;
        }
    }
}
