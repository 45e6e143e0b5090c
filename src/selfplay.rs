//! Headless self-play: drives sessions without rendering or input.
//!
//! The driver cycles through [`Direction::ALL`], starting after the last
//! direction that moved, and relies on the engine's empty-batch signal to
//! skip directions that change nothing. It is a soak test for the engine,
//! not a strategy.

use anyhow::{ensure, Result};
use tracing::info;

use crate::config::RunConfig;
use crate::core::{apply_events, Game, SimpleRng};
use crate::types::Direction;

/// Outcome of one self-play session
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionSummary {
    pub seed: u32,
    pub turns: u32,
    pub score: u64,
    pub highest: u32,
    pub reached_target: bool,
    pub terminal: bool,
}

/// Play one session to a terminal board or the turn cap
///
/// Every turn is checked against its own event batch: replaying the batch on
/// the previous board must reproduce the live board.
pub fn play_session(config: &RunConfig, seed: u32) -> Result<SessionSummary> {
    let mut game = Game::with_rng(config.size, SimpleRng::new(seed))?;
    game.init();

    let mut turns = 0u32;
    let mut next = 0usize;
    while turns < config.max_turns && !game.is_terminal() {
        let before = game.board().clone();
        let mut played = None;
        for offset in 0..Direction::ALL.len() {
            let idx = (next + offset) % Direction::ALL.len();
            let events = game.shift(Direction::ALL[idx]);
            if !events.is_empty() {
                played = Some((idx, events));
                break;
            }
        }
        let Some((idx, events)) = played else {
            break;
        };
        ensure!(
            apply_events(&before, &events) == *game.board(),
            "turn {} events do not reproduce the board",
            turns + 1
        );
        next = idx + 1;
        turns += 1;
    }

    let summary = SessionSummary {
        seed,
        turns,
        score: game.score(),
        highest: game.highest_value().unwrap_or(0),
        reached_target: game.has_reached(config.target),
        terminal: game.is_terminal(),
    };
    info!(
        seed,
        turns,
        score = summary.score,
        highest = summary.highest,
        reached_target = summary.reached_target,
        terminal = summary.terminal,
        "session finished"
    );
    Ok(summary)
}

/// Play `config.games` sessions with consecutive seeds
pub fn run(config: &RunConfig) -> Result<Vec<SessionSummary>> {
    config.validate()?;
    (0..config.games)
        .map(|i| play_session(config, config.seed.wrapping_add(i)))
        .collect()
}
