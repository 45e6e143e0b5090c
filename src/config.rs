//! Runner configuration from environment variables
//!
//! - `CUBE2048_SIZE`: cube edge length (default: 3)
//! - `CUBE2048_SEED`: seed of the first session (default: 1)
//! - `CUBE2048_GAMES`: number of sessions to play (default: 1)
//! - `CUBE2048_MAX_TURNS`: turn cap per session (default: 10000)
//! - `CUBE2048_TARGET`: tile value counted as a win (default: 2048)
//!
//! Unset or unparseable values fall back to the defaults.

use std::env;
use std::str::FromStr;

use crate::types::{DEFAULT_CUBE_SIZE, MAX_CUBE_SIZE};

/// Errors from [`RunConfig::validate`]
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("CUBE2048_SIZE must be in 1..={max}, got {0}", max = MAX_CUBE_SIZE)]
    Size(usize),

    #[error("CUBE2048_GAMES must be at least 1")]
    NoGames,

    #[error("CUBE2048_TARGET must be a power of two >= 2, got {0}")]
    Target(u32),
}

/// Self-play runner configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunConfig {
    pub size: usize,
    pub seed: u32,
    pub games: u32,
    pub max_turns: u32,
    pub target: u32,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            size: DEFAULT_CUBE_SIZE,
            seed: 1,
            games: 1,
            max_turns: 10_000,
            target: 2048,
        }
    }
}

impl RunConfig {
    /// Create from environment variables
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Create from an arbitrary key lookup (used by `from_env`)
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        Self {
            size: parse_var(&lookup, "CUBE2048_SIZE").unwrap_or(defaults.size),
            seed: parse_var(&lookup, "CUBE2048_SEED").unwrap_or(defaults.seed),
            games: parse_var(&lookup, "CUBE2048_GAMES").unwrap_or(defaults.games),
            max_turns: parse_var(&lookup, "CUBE2048_MAX_TURNS").unwrap_or(defaults.max_turns),
            target: parse_var(&lookup, "CUBE2048_TARGET").unwrap_or(defaults.target),
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.size == 0 || self.size > MAX_CUBE_SIZE {
            return Err(ConfigError::Size(self.size));
        }
        if self.games == 0 {
            return Err(ConfigError::NoGames);
        }
        if self.target < 2 || !self.target.is_power_of_two() {
            return Err(ConfigError::Target(self.target));
        }
        Ok(())
    }
}

fn parse_var<T, F>(lookup: &F, key: &str) -> Option<T>
where
    T: FromStr,
    F: Fn(&str) -> Option<String>,
{
    lookup(key).and_then(|s| s.trim().parse().ok())
}
