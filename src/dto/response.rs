use crate::Round;
use crate::arena::*;
use crate::gameplay::*;
use crate::leaderboard::*;
use serde::Deserialize;
use serde::Serialize;

#[derive(Debug, Serialize, Deserialize)]
pub struct ApiError {
    pub error: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ApiPlayer {
    pub ok: bool,
    pub player: Standing,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ApiStart {
    pub ok: bool,
    pub game: Lineup,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ApiRound {
    pub ok: bool,
    pub round: Round,
    pub p1_choice: Choice,
    pub p2_choice: Choice,
    pub round_result: Outcome,
    pub round_wins: Tally,
    pub finished: bool,
    pub game_winner: Option<String>,
    pub locked_player1: bool,
    pub next_player1: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ApiGame {
    pub player1: Option<String>,
    pub player2: Option<String>,
    pub round: Round,
    pub round_wins: Tally,
    pub locked_player1: bool,
    pub phase: Phase,
}

impl From<ArenaError> for ApiError {
    fn from(e: ArenaError) -> Self {
        Self {
            error: e.to_string(),
        }
    }
}

impl From<Standing> for ApiPlayer {
    fn from(player: Standing) -> Self {
        Self { ok: true, player }
    }
}

impl From<Lineup> for ApiStart {
    fn from(lineup: Lineup) -> Self {
        Self {
            ok: true,
            game: lineup,
        }
    }
}

impl From<RoundReport> for ApiRound {
    fn from(report: RoundReport) -> Self {
        Self {
            ok: true,
            round: report.round,
            p1_choice: report.p1_choice,
            p2_choice: report.p2_choice,
            round_result: report.round_result,
            round_wins: report.round_wins,
            finished: report.finished,
            game_winner: report.game_winner,
            locked_player1: report.locked_player1,
            next_player1: report.next_player1,
        }
    }
}

impl From<(MatchState, Phase)> for ApiGame {
    fn from((state, phase): (MatchState, Phase)) -> Self {
        Self {
            player1: state.player1,
            player2: state.player2,
            round: state.round,
            round_wins: state.round_wins,
            locked_player1: state.locked_player1,
            phase,
        }
    }
}
