//! Two-player rock-paper-scissors backend with a cross-match leaderboard.
//!
//! ## Modules
//!
//! - [`gameplay`]: Choices, round outcomes, and the beats relation
//! - [`leaderboard`]: Cumulative player standings across matches
//! - [`arena`]: The single-match state machine
//! - [`dto`]: Wire request and response payloads
//! - [`hosting`]: actix-web server over a lock-guarded arena
pub mod arena;
pub mod dto;
pub mod gameplay;
pub mod leaderboard;

#[cfg(feature = "server")]
pub mod hosting;

// ============================================================================
// TYPE ALIASES
// ============================================================================
/// Round counter within a match.
pub type Round = u8;
/// Round-wins and cumulative scores.
pub type Points = u32;

// ============================================================================
// TRAITS
// ============================================================================
/// Random instance generation for defaulted inputs and tests.
pub trait Arbitrary {
    /// Generate a uniformly random instance.
    fn random() -> Self;
}

// ============================================================================
// MATCH PARAMETERS
// ============================================================================
/// Rounds in a complete match.
pub const ROUNDS: Round = 10;

// ============================================================================
// RUNTIME UTILITIES
// ============================================================================
/// Initialize dual logging (terminal + file) with timestamped log files.
/// Creates `logs/` directory and writes DEBUG level to file, INFO to terminal.
#[cfg(feature = "server")]
pub fn log() {
    std::fs::create_dir_all("logs").expect("create logs directory");
    let config = simplelog::ConfigBuilder::new()
        .set_location_level(log::LevelFilter::Off)
        .set_target_level(log::LevelFilter::Off)
        .set_thread_level(log::LevelFilter::Off)
        .build();
    let time = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .expect("time moves slow")
        .as_secs();
    let file = simplelog::WriteLogger::new(
        log::LevelFilter::Debug,
        config.clone(),
        std::fs::File::create(format!("logs/{}.log", time)).expect("create log file"),
    );
    let term = simplelog::TermLogger::new(
        log::LevelFilter::Info,
        config.clone(),
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    );
    simplelog::CombinedLogger::init(vec![term, file]).expect("initialize logger");
}
