use super::*;
use crate::Points;
use crate::arena::ArenaError;
use crate::gameplay::Slot;
use std::collections::HashMap;

/// Name → cumulative stats, remembering registration order.
///
/// Entries are only ever added. Names are stored trimmed and compared
/// case-sensitively.
#[derive(Debug, Default, Clone)]
pub struct Leaderboard {
    index: HashMap<String, usize>,
    table: Vec<(String, PlayerStats)>,
}

impl Leaderboard {
    pub fn len(&self) -> usize {
        self.table.len()
    }
    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }
    pub fn get(&self, name: &str) -> Option<PlayerStats> {
        self.index.get(name).map(|&i| self.table[i].1)
    }

    /// Inserts zeroed stats for an unseen name. Existing entries are untouched.
    pub fn ensure(&mut self, name: &str) -> &mut PlayerStats {
        let i = match self.index.get(name) {
            Some(&i) => i,
            None => {
                let i = self.table.len();
                self.index.insert(name.to_string(), i);
                self.table.push((name.to_string(), PlayerStats::default()));
                log::debug!("added {} to leaderboard", name);
                i
            }
        };
        &mut self.table[i].1
    }

    /// Idempotent registration. Never resets an existing player.
    pub fn register(&mut self, name: &str) -> Result<Standing, ArenaError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(ArenaError::Validation("Player name is required".into()));
        }
        let stats = *self.ensure(name);
        Ok(Standing::from((name, stats)))
    }

    /// Both ordered views: case-insensitive name ascending, score descending.
    pub fn snapshot(&self) -> Snapshot {
        self.table
            .iter()
            .map(|(name, stats)| Standing::from((name.as_str(), *stats)))
            .collect::<Vec<_>>()
            .into()
    }

    /// Folds a finished match into cumulative stats and returns the slot
    /// that won outright, if any.
    pub fn apply_match_result(
        &mut self,
        p1: &str,
        p2: &str,
        p1_wins: Points,
        p2_wins: Points,
    ) -> Option<Slot> {
        let winner = match p1_wins.cmp(&p2_wins) {
            std::cmp::Ordering::Greater => Some(Slot::One),
            std::cmp::Ordering::Less => Some(Slot::Two),
            std::cmp::Ordering::Equal => None,
        };
        self.ensure(p1).credit(p1_wins, winner == Some(Slot::One));
        self.ensure(p2).credit(p2_wins, winner == Some(Slot::Two));
        winner
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn register_rejects_blank_names() {
        let mut board = Leaderboard::default();
        assert!(matches!(board.register(""), Err(ArenaError::Validation(_))));
        assert!(matches!(board.register("   "), Err(ArenaError::Validation(_))));
        assert!(board.is_empty());
    }

    #[test]
    fn register_trims_and_is_idempotent() {
        let mut board = Leaderboard::default();
        let first = board.register(" Alice ").unwrap();
        assert!(first.name == "Alice");
        board.apply_match_result("Alice", "Bob", 6, 4);
        let again = board.register("Alice").unwrap();
        assert!(again.score == 6);
        assert!(again.games_won == 1);
        assert!(board.len() == 2);
    }

    #[test]
    fn names_are_case_sensitive() {
        let mut board = Leaderboard::default();
        board.register("alice").unwrap();
        board.register("Alice").unwrap();
        assert!(board.len() == 2);
    }

    #[test]
    fn ensure_keeps_existing_stats() {
        let mut board = Leaderboard::default();
        board.ensure("Bob").credit(3, true);
        board.ensure("Bob");
        assert!(board.get("Bob") == Some(PlayerStats { score: 3, games_won: 1 }));
    }

    #[test]
    fn apply_credits_outright_winner() {
        let mut board = Leaderboard::default();
        let winner = board.apply_match_result("Alice", "Bob", 6, 4);
        assert!(winner == Some(Slot::One));
        assert!(board.get("Alice") == Some(PlayerStats { score: 6, games_won: 1 }));
        assert!(board.get("Bob") == Some(PlayerStats { score: 4, games_won: 0 }));
        let winner = board.apply_match_result("Alice", "Bob", 2, 7);
        assert!(winner == Some(Slot::Two));
        assert!(board.get("Bob") == Some(PlayerStats { score: 11, games_won: 1 }));
    }

    #[test]
    fn apply_tie_awards_no_games() {
        let mut board = Leaderboard::default();
        let winner = board.apply_match_result("Alice", "Bob", 5, 5);
        assert!(winner.is_none());
        assert!(board.get("Alice").unwrap().games_won == 0);
        assert!(board.get("Bob").unwrap().games_won == 0);
        assert!(board.get("Bob").unwrap().score == 5);
    }

    #[test]
    fn snapshot_orders_both_views() {
        let mut board = Leaderboard::default();
        for name in ["charlie", "Bob", "alice", "Dave"] {
            board.register(name).unwrap();
        }
        board.apply_match_result("Bob", "Dave", 7, 3);
        board.apply_match_result("alice", "charlie", 4, 4);
        let snapshot = board.snapshot();
        let names = snapshot
            .by_name
            .iter()
            .map(|s| s.name.as_str())
            .collect::<Vec<_>>();
        let order = snapshot
            .by_score
            .iter()
            .map(|s| s.name.as_str())
            .collect::<Vec<_>>();
        assert!(names == vec!["alice", "Bob", "charlie", "Dave"]);
        assert!(order == vec!["Bob", "charlie", "alice", "Dave"]);
    }

    #[test]
    fn snapshot_lists_everyone_once() {
        let mut board = Leaderboard::default();
        for name in ["x", "y", "x", "z", "y"] {
            board.register(name).unwrap();
        }
        let snapshot = board.snapshot();
        assert!(snapshot.by_name.len() == 3);
        assert!(snapshot.by_score.len() == 3);
    }
}
