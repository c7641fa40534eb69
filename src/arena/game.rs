use crate::Points;
use crate::Round;
use crate::gameplay::Slot;
use serde::Deserialize;
use serde::Serialize;

/// Per-match round-win tally, one entry per slot.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tally {
    pub player1: Points,
    pub player2: Points,
}

impl Tally {
    pub fn credit(&mut self, slot: Slot) {
        match slot {
            Slot::One => self.player1 += 1,
            Slot::Two => self.player2 += 1,
        }
    }
    pub fn total(&self) -> Points {
        self.player1 + self.player2
    }
}

/// Lifecycle stage derived from the round counter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    Idle,
    InProgress,
    Finished,
}

/// The in-progress or just-finished match.
///
/// `player1` may outlive the match it was part of: a winner stays seated
/// (and locked) while `player2` is cleared.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchState {
    pub player1: Option<String>,
    pub player2: Option<String>,
    pub round: Round,
    pub round_wins: Tally,
    pub locked_player1: bool,
}

impl MatchState {
    pub fn phase(&self, rounds: Round) -> Phase {
        match self.round {
            0 => Phase::Idle,
            r if r >= rounds => Phase::Finished,
            _ => Phase::InProgress,
        }
    }

    /// Both contestants seated.
    pub fn seated(&self) -> Option<(&str, &str)> {
        self.player1.as_deref().zip(self.player2.as_deref())
    }

    /// Name forced into slot 1 by winner retention, if any.
    pub fn retained(&self) -> Option<&str> {
        self.player1.as_deref().filter(|_| self.locked_player1)
    }
}
