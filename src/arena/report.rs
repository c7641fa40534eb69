use super::*;
use crate::Round;
use crate::gameplay::Choice;
use crate::gameplay::Outcome;
use serde::Deserialize;
use serde::Serialize;

/// Seating returned by a successful match start.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Lineup {
    pub player1: String,
    pub player2: String,
    pub round: Round,
    pub locked_player1: bool,
}

/// Everything observable about one played round.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundReport {
    pub round: Round,
    pub p1_choice: Choice,
    pub p2_choice: Choice,
    pub round_result: Outcome,
    pub round_wins: Tally,
    /// This round completed the match.
    pub finished: bool,
    /// Outright match winner; only ever set on the finishing round.
    pub game_winner: Option<String>,
    pub locked_player1: bool,
    /// Occupant of slot 1 after this round, retained winner included.
    pub next_player1: Option<String>,
}
