pub mod leaderboard;
pub use leaderboard::*;

pub mod standing;
pub use standing::*;

pub mod stats;
pub use stats::*;
