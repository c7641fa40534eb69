use super::*;
use crate::Points;
use serde::Deserialize;
use serde::Serialize;

/// A named row of the leaderboard.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Standing {
    pub name: String,
    pub score: Points,
    pub games_won: Points,
}

impl From<(&str, PlayerStats)> for Standing {
    fn from((name, stats): (&str, PlayerStats)) -> Self {
        Self {
            name: name.to_string(),
            score: stats.score,
            games_won: stats.games_won,
        }
    }
}

/// Both sorted views of the leaderboard at one instant.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    pub by_name: Vec<Standing>,
    pub by_score: Vec<Standing>,
}

impl From<Vec<Standing>> for Snapshot {
    /// Rows arrive in registration order; stable sorts keep that order on ties.
    fn from(rows: Vec<Standing>) -> Self {
        let mut by_name = rows.clone();
        let mut by_score = rows;
        by_name.sort_by_cached_key(|s| s.name.to_lowercase());
        by_score.sort_by(|a, b| b.score.cmp(&a.score));
        Self { by_name, by_score }
    }
}
