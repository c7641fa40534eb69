use super::*;
use crate::Arbitrary;
use crate::gameplay::Choice;
use crate::gameplay::Outcome;
use crate::gameplay::Slot;
use crate::leaderboard::Leaderboard;
use crate::leaderboard::Snapshot;
use crate::leaderboard::Standing;

/// Owns the leaderboard and the single current match.
///
/// Every mutation goes through `register`, `start` and `play_round`.
/// Each either applies fully or returns an [`ArenaError`] having touched
/// nothing.
#[derive(Debug, Default, Clone)]
pub struct Arena {
    rules: Rules,
    leaderboard: Leaderboard,
    game: MatchState,
}

impl Arena {
    pub fn new(rules: Rules) -> Self {
        Self {
            rules,
            ..Self::default()
        }
    }

    pub fn rules(&self) -> &Rules {
        &self.rules
    }
    pub fn game(&self) -> &MatchState {
        &self.game
    }
    pub fn leaderboard(&self) -> &Leaderboard {
        &self.leaderboard
    }
    pub fn phase(&self) -> Phase {
        self.game.phase(self.rules.rounds)
    }
    pub fn snapshot(&self) -> Snapshot {
        self.leaderboard.snapshot()
    }

    pub fn register(&mut self, name: &str) -> Result<Standing, ArenaError> {
        self.leaderboard
            .register(name)
            .inspect(|s| log::info!("registered {} (score {}, won {})", s.name, s.score, s.games_won))
    }

    /// Seats two players and resets round counters.
    ///
    /// A retained winner overrides `p1`. The lock itself is left alone;
    /// only match finalization changes it.
    pub fn start(&mut self, p1: &str, p2: &str) -> Result<Lineup, ArenaError> {
        let p1 = self.game.retained().unwrap_or(p1).trim().to_string();
        let p2 = p2.trim().to_string();
        if p1.is_empty() || p2.is_empty() {
            return Err(ArenaError::Validation(
                "Both player1 and player2 are required".into(),
            ));
        }
        if p1 == p2 {
            return Err(ArenaError::Validation("Players must be different".into()));
        }
        self.leaderboard.ensure(&p1);
        self.leaderboard.ensure(&p2);
        log::info!("match started: {} vs {}", p1, p2);
        self.game = MatchState {
            player1: Some(p1.clone()),
            player2: Some(p2.clone()),
            round: 0,
            round_wins: Tally::default(),
            locked_player1: self.game.locked_player1,
        };
        Ok(Lineup {
            player1: p1,
            player2: p2,
            round: self.game.round,
            locked_player1: self.game.locked_player1,
        })
    }

    /// Plays one round from raw caller input. Missing choices are drawn at
    /// random unless the rules are strict.
    pub fn play_round(
        &mut self,
        p1: Option<&str>,
        p2: Option<&str>,
    ) -> Result<RoundReport, ArenaError> {
        self.ready()?;
        let p1 = self.choose(p1)?;
        let p2 = self.choose(p2)?;
        Ok(self.commit(p1, p2))
    }

    /// Plays one round with already-resolved choices.
    pub fn play(&mut self, p1: Choice, p2: Choice) -> Result<RoundReport, ArenaError> {
        self.ready()?;
        Ok(self.commit(p1, p2))
    }

    /// Rejects unless a match is seated and unfinished.
    pub fn ready(&self) -> Result<(), ArenaError> {
        if self.game.seated().is_none() {
            return Err(ArenaError::State("Start a game first".into()));
        }
        if self.game.round >= self.rules.rounds {
            return Err(ArenaError::State(
                "Game already finished. Start a new game.".into(),
            ));
        }
        Ok(())
    }

    fn choose(&self, input: Option<&str>) -> Result<Choice, ArenaError> {
        match input.filter(|s| !s.is_empty()) {
            Some(token) => Choice::try_from(token.trim()).map_err(|e| ArenaError::Validation(e.into())),
            None if self.rules.random_fill => Ok(Choice::random()),
            None => Err(ArenaError::Validation(
                "Choices must be: rock, paper, scissors".into(),
            )),
        }
    }

    /// Callers must have passed `ready` first.
    fn commit(&mut self, p1: Choice, p2: Choice) -> RoundReport {
        let outcome = Outcome::resolve(p1, p2);
        self.game.round += 1;
        if let Some(slot) = outcome.winner() {
            self.game.round_wins.credit(slot);
        }
        log::debug!(
            "round {}: {} vs {} -> {}",
            self.game.round,
            p1,
            p2,
            outcome
        );
        let finished = self.game.round == self.rules.rounds;
        let game_winner = if finished { self.finalize() } else { None };
        RoundReport {
            round: self.game.round,
            p1_choice: p1,
            p2_choice: p2,
            round_result: outcome,
            round_wins: self.game.round_wins,
            finished,
            game_winner,
            locked_player1: self.game.locked_player1,
            next_player1: self.game.player1.clone(),
        }
    }

    /// Credits the leaderboard, applies winner retention and frees slot 2.
    fn finalize(&mut self) -> Option<String> {
        let (Some(p1), Some(p2)) = (self.game.player1.clone(), self.game.player2.take()) else {
            return None;
        };
        let tally = self.game.round_wins;
        let winner = self
            .leaderboard
            .apply_match_result(&p1, &p2, tally.player1, tally.player2)
            .map(|slot| match slot {
                Slot::One => p1.clone(),
                Slot::Two => p2.clone(),
            });
        match winner {
            Some(ref name) => {
                log::info!("match finished: {} wins {}-{}", name, tally.player1, tally.player2);
                self.game.player1 = Some(name.clone());
                self.game.locked_player1 = true;
            }
            None => {
                log::info!("match finished: {} and {} tie {}-{}", p1, p2, tally.player1, tally.player2);
                self.game.locked_player1 = false;
            }
        }
        winner
    }
}
