//! History module - linear undo/redo over turn batches
//!
//! Each turn is the full event batch of one shift plus its spawn. The log is
//! the source of truth for history; boards are never snapshotted into it.
//! `index` always sits just past the last applied turn. Recording after an
//! undo drops every turn at or after the cursor.

use serde::{Deserialize, Serialize};

use crate::error::HistoryError;
use crate::types::CellEvent;

/// One shift+spawn cycle
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Turn {
    /// Shift events followed by spawn events, in application order
    pub events: Vec<CellEvent>,
    /// Points the turn's merges added to the score
    pub points: u64,
}

impl Turn {
    pub fn new(events: Vec<CellEvent>, points: u64) -> Self {
        Self { events, points }
    }
}

/// Ordered turns plus a cursor
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawHistory")]
pub struct History {
    turns: Vec<Turn>,
    index: usize,
}

#[derive(Deserialize)]
struct RawHistory {
    turns: Vec<Turn>,
    index: usize,
}

impl TryFrom<RawHistory> for History {
    type Error = HistoryError;

    fn try_from(raw: RawHistory) -> Result<Self, Self::Error> {
        History::from_turns(raw.turns, raw.index)
    }
}

impl History {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuild a history, validating the cursor
    pub fn from_turns(turns: Vec<Turn>, index: usize) -> Result<Self, HistoryError> {
        if index > turns.len() {
            return Err(HistoryError::CursorOutOfRange {
                index,
                len: turns.len(),
            });
        }
        Ok(Self { turns, index })
    }

    /// Append a turn at the cursor, discarding any redo tail
    pub fn record(&mut self, turn: Turn) {
        self.turns.truncate(self.index);
        self.turns.push(turn);
        self.index = self.turns.len();
    }

    /// Move the cursor back and return the turn to undo
    pub fn step_back(&mut self) -> Result<&Turn, HistoryError> {
        if self.index == 0 {
            return Err(HistoryError::NothingToUndo);
        }
        self.index -= 1;
        Ok(&self.turns[self.index])
    }

    /// Move the cursor forward and return the turn to redo
    pub fn step_forward(&mut self) -> Result<&Turn, HistoryError> {
        if self.index == self.turns.len() {
            return Err(HistoryError::NothingToRedo);
        }
        self.index += 1;
        Ok(&self.turns[self.index - 1])
    }

    pub fn can_undo(&self) -> bool {
        self.index > 0
    }

    pub fn can_redo(&self) -> bool {
        self.index < self.turns.len()
    }

    /// Number of applied turns
    pub fn cursor(&self) -> usize {
        self.index
    }

    /// Number of recorded turns, including undone ones
    pub fn len(&self) -> usize {
        self.turns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.turns.is_empty()
    }

    pub fn turns(&self) -> &[Turn] {
        &self.turns
    }

    /// Turns currently applied to the board, oldest first
    pub fn applied(&self) -> &[Turn] {
        &self.turns[..self.index]
    }

    pub fn clear(&mut self) {
        self.turns.clear();
        self.index = 0;
    }
}
