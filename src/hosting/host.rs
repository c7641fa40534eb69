use crate::arena::*;
use crate::dto::PlayRound;
use crate::leaderboard::Snapshot;
use crate::leaderboard::Standing;
use tokio::sync::Mutex;

/// Shares one arena across HTTP workers.
///
/// A single lock covers both the leaderboard and the match record, so every
/// request's read-modify-write is applied as one step.
pub struct Host {
    arena: Mutex<Arena>,
}

impl Default for Host {
    fn default() -> Self {
        Self::from(Rules::default())
    }
}

impl From<Rules> for Host {
    fn from(rules: Rules) -> Self {
        Self {
            arena: Mutex::new(Arena::new(rules)),
        }
    }
}

impl Host {
    pub async fn register(&self, name: &str) -> Result<Standing, ArenaError> {
        self.arena.lock().await.register(name)
    }

    pub async fn start(&self, p1: &str, p2: &str) -> Result<Lineup, ArenaError> {
        self.arena.lock().await.start(p1, p2)
    }

    /// Checks the match state before the body is parsed, so a stale match
    /// is reported ahead of a malformed request.
    pub async fn play_round(&self, body: &[u8]) -> Result<RoundReport, ArenaError> {
        let mut arena = self.arena.lock().await;
        arena.ready()?;
        let req = serde_json::from_slice::<PlayRound>(body)
            .map_err(|e| ArenaError::Validation(e.to_string()))?;
        arena.play_round(req.p1_choice.as_deref(), req.p2_choice.as_deref())
    }

    pub async fn snapshot(&self) -> Snapshot {
        self.arena.lock().await.snapshot()
    }

    pub async fn game(&self) -> (MatchState, Phase) {
        let arena = self.arena.lock().await;
        (arena.game().clone(), arena.phase())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    #[tokio::test]
    async fn concurrent_rounds_never_overshoot() {
        let host = Arc::new(Host::default());
        host.start("Alice", "Bob").await.unwrap();
        let tasks = (0..32)
            .map(|_| host.clone())
            .map(|host| tokio::spawn(async move { host.play_round(b"{}").await }))
            .collect::<Vec<_>>();
        let mut played = 0;
        for task in tasks {
            if task.await.unwrap().is_ok() {
                played += 1;
            }
        }
        let (state, phase) = host.game().await;
        assert!(played == 10);
        assert!(phase == Phase::Finished);
        assert!(state.round == 10);
        assert!(host.snapshot().await.by_name.len() == 2);
    }

    #[tokio::test]
    async fn state_is_checked_before_body() {
        let host = Host::default();
        let err = host.play_round(b"not json").await.unwrap_err();
        assert!(err == ArenaError::State("Start a game first".into()));
        host.start("Alice", "Bob").await.unwrap();
        let err = host.play_round(b"not json").await.unwrap_err();
        assert!(matches!(err, ArenaError::Validation(_)));
        let report = host.play_round(br#"{"p1_choice":"rock","p2_choice":"paper"}"#).await.unwrap();
        assert!(report.round == 1);
    }
}
