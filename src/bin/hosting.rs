//! hosting Server Binary
//!
//! Runs the HTTP server for the rock-paper-scissors arena.
//! Configured by flags or the BIND_ADDR, WORKERS and STRICT_CHOICES
//! environment variables.

use clap::Parser;
use rps_arena::*;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    log();
    hosting::Server::run(hosting::Config::parse()).await?;
    Ok(())
}
