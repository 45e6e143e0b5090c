//! Core game logic - pure, deterministic, and testable
//!
//! This crate holds the rules of the 3D sliding-merge puzzle: a 2048 variant
//! played on an N×N×N cube. It has **zero dependencies** on rendering, input,
//! or storage, which makes it:
//!
//! - **Deterministic**: the spawn RNG is injected, so a seed replays a session
//! - **Replayable**: every board change is a [`CellEvent`](types::CellEvent)
//! - **Reversible**: undo/redo walk the event log instead of board copies
//!
//! # Module Structure
//!
//! - [`board`]: flat N×N×N cell storage and event application
//! - [`rotation`]: integer cube rotations mapping each direction onto -z
//! - [`slide`]: the 1D slide-and-merge producing move/destroy/create events
//! - [`engine`]: whole-board shift, spawn, reversal, stuck detection
//! - [`scoring`]: tile score and per-turn merge points
//! - [`history`]: linear undo/redo over turn batches
//! - [`game`]: the session state machine
//! - [`rng`]: random sources for spawning
//! - [`snapshot`]: serializable read-only session view
//!
//! # Game Rules
//!
//! - **Shift**: every line along the direction compacts toward the far face;
//!   equal neighbours merge once per pass, front pair first
//! - **Spawn**: after each successful shift one cell appears on a random empty
//!   position, a 2 with 60% probability, otherwise a 4
//! - **Scoring**: each merge adds the merged tile's score,
//!   `score(v) = v + score(v / 2)`, `score(4) = 4`, `score(2) = 0`
//! - **Terminal**: no direction changes the board
//!
//! # Example
//!
//! ```
//! use cube_2048_core::Game;
//! use cube_2048_types::Direction;
//!
//! let mut game = Game::new(12345);
//! let opening = game.init();
//! assert_eq!(opening.len(), 2);
//!
//! // Play until something moves, then take it back.
//! let played = Direction::ALL
//!     .into_iter()
//!     .any(|dir| !game.shift(dir).is_empty());
//! assert!(played);
//! assert!(game.undo().is_ok());
//! assert_eq!(game.history().cursor(), 0);
//! ```

pub mod board;
pub mod engine;
pub mod error;
pub mod game;
pub mod history;
pub mod rng;
pub mod rotation;
pub mod scoring;
pub mod slide;
pub mod snapshot;

pub use cube_2048_types as types;

// Re-export commonly used types for convenience
pub use board::{Board, Line};
pub use engine::{
    apply_event, apply_events, can_shift, is_stuck, reverse_event, reverse_events, shift,
    snapshot_events, spawn_cells,
};
pub use error::{BoardError, HistoryError};
pub use game::{Game, GameStatus};
pub use history::{History, Turn};
pub use rng::{RandomSource, ScriptedRng, SimpleRng};
pub use rotation::{rotate_board, rotate_event, rotate_point, rotation_for, Angle, Rotation};
pub use scoring::{merge_points, score};
pub use slide::{slide_line, LineSlide};
pub use snapshot::GameSnapshot;
