//! Self-play runner tests

use cube_2048::config::{ConfigError, RunConfig};
use cube_2048::selfplay::{play_session, run};

fn config(size: usize, games: u32, max_turns: u32) -> RunConfig {
    RunConfig {
        size,
        seed: 7,
        games,
        max_turns,
        ..RunConfig::default()
    }
}

#[test]
fn test_session_is_deterministic() {
    let cfg = config(3, 1, 200);
    let a = play_session(&cfg, 7).unwrap();
    let b = play_session(&cfg, 7).unwrap();
    assert_eq!(a, b);
}

#[test]
fn test_session_respects_turn_cap() {
    let summary = play_session(&config(4, 1, 25), 3).unwrap();
    assert_eq!(summary.turns, 25);
    assert!(!summary.terminal);
}

#[test]
fn test_small_cube_reaches_terminal() {
    let summary = play_session(&config(2, 1, 10_000), 1).unwrap();
    assert!(summary.terminal);
    assert!(summary.turns < 10_000);
    assert!(summary.highest >= 2);
}

#[test]
fn test_run_plays_consecutive_seeds() {
    let summaries = run(&config(3, 3, 50)).unwrap();
    let seeds: Vec<u32> = summaries.iter().map(|s| s.seed).collect();
    assert_eq!(seeds, vec![7, 8, 9]);
}

#[test]
fn test_run_rejects_invalid_config() {
    let err = run(&config(0, 1, 10)).unwrap_err();
    assert_eq!(
        err.downcast_ref::<ConfigError>(),
        Some(&ConfigError::Size(0))
    );
}
