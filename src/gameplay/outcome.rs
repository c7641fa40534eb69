use super::*;
use serde::Deserialize;
use serde::Serialize;

/// Result of a single round.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Outcome {
    Tie,
    Player1,
    Player2,
}

impl Outcome {
    /// Standard relation: rock beats scissors, scissors beats paper,
    /// paper beats rock, identical choices tie.
    pub fn resolve(p1: Choice, p2: Choice) -> Self {
        if p1 == p2 {
            Self::Tie
        } else if p1.beats() == p2 {
            Self::Player1
        } else {
            Self::Player2
        }
    }

    pub fn winner(&self) -> Option<Slot> {
        match self {
            Self::Tie => None,
            Self::Player1 => Some(Slot::One),
            Self::Player2 => Some(Slot::Two),
        }
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::Tie => write!(f, "tie"),
            Self::Player1 => write!(f, "player1"),
            Self::Player2 => write!(f, "player2"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identical_choices_tie() {
        for choice in Choice::ALL {
            assert!(Outcome::resolve(choice, choice) == Outcome::Tie);
        }
    }

    #[test]
    fn rock_crushes_scissors() {
        assert!(Outcome::resolve(Choice::Rock, Choice::Scissors) == Outcome::Player1);
        assert!(Outcome::resolve(Choice::Scissors, Choice::Rock) == Outcome::Player2);
    }

    #[test]
    fn scissors_cut_paper() {
        assert!(Outcome::resolve(Choice::Scissors, Choice::Paper) == Outcome::Player1);
    }

    #[test]
    fn paper_covers_rock() {
        assert!(Outcome::resolve(Choice::Paper, Choice::Rock) == Outcome::Player1);
    }

    #[test]
    fn antisymmetric() {
        for x in Choice::ALL {
            for y in Choice::ALL.into_iter().filter(|y| *y != x) {
                let forward = Outcome::resolve(x, y);
                let reverse = Outcome::resolve(y, x);
                assert!(forward != Outcome::Tie);
                assert!((forward == Outcome::Player1) == (reverse == Outcome::Player2));
                assert!(forward.winner().map(|s| s.other()) == reverse.winner());
            }
        }
    }

    #[test]
    fn serializes_lowercase() {
        assert!(serde_json::to_string(&Outcome::Player2).unwrap() == "\"player2\"");
        assert!(serde_json::to_string(&Outcome::Tie).unwrap() == "\"tie\"");
    }
}
