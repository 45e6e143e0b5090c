//! Snapshot module - a serializable view of a session for renderers

use serde::{Deserialize, Serialize};

use crate::board::Board;
use crate::game::GameStatus;

/// Read-only view of a session for renderers and observers
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSnapshot {
    pub board: Board,
    pub score: u64,
    pub status: GameStatus,
    /// Applied turns (the history cursor)
    pub turn: usize,
    /// Recorded turns, including undone ones
    pub turns: usize,
    pub can_undo: bool,
    pub can_redo: bool,
    pub highest: Option<u32>,
}

impl GameSnapshot {
    pub fn playable(&self) -> bool {
        self.status == GameStatus::Playing
    }
}
