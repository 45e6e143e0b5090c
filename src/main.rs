//! Headless self-play runner (default binary).
//!
//! Plays seeded sessions on the cube engine and logs a summary per session.
//! Configuration comes from `CUBE2048_*` environment variables (see
//! [`cube_2048::config`]); log verbosity from `RUST_LOG`.

use anyhow::Result;
use tracing::info;
use tracing_subscriber::EnvFilter;

use cube_2048::config::RunConfig;
use cube_2048::selfplay;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(true)
        .init();

    let config = RunConfig::from_env();
    info!(?config, "cube-2048 starting");

    let summaries = selfplay::run(&config)?;

    let best = summaries.iter().map(|s| s.score).max().unwrap_or(0);
    let wins = summaries.iter().filter(|s| s.reached_target).count();
    info!(
        games = summaries.len(),
        best_score = best,
        wins,
        target = config.target,
        "self-play finished"
    );
    Ok(())
}
