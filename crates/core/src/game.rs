//! Game module - the session state machine
//!
//! A [`Game`] owns the live board, the score and the undo/redo history. The
//! board is only ever changed by applying events, and the history stores
//! those events per turn, so undo and redo replay the log instead of restoring
//! copies of the board.
//!
//! Turn sequence for [`Game::shift`]: shift, add merge points, spawn one cell
//! if the board is not stuck, record shift+spawn as one turn.

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::board::{check_value, Board};
use crate::engine::{self, reverse_events, snapshot_events, spawn_cells};
use crate::error::{BoardError, HistoryError};
use crate::history::{History, Turn};
use crate::rng::{RandomSource, SimpleRng};
use crate::scoring::merge_points;
use crate::snapshot::GameSnapshot;
use crate::types::{CellEvent, Direction, CELLS_PER_TURN, INITIAL_CELLS};

/// Session state, derived from the board on demand
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GameStatus {
    Playing,
    /// No direction changes the board
    Terminal,
}

/// Complete session state
#[derive(Debug, Clone)]
pub struct Game<R = SimpleRng> {
    board: Board,
    score: u64,
    history: History,
    rng: R,
}

impl Game<SimpleRng> {
    /// Create a 3×3×3 session seeded with `seed`
    ///
    /// The board starts empty; call [`Game::init`] to place the first cells.
    pub fn new(seed: u32) -> Self {
        Self {
            board: Board::default(),
            score: 0,
            history: History::new(),
            rng: SimpleRng::new(seed),
        }
    }
}

impl<R: RandomSource> Game<R> {
    /// Create an empty session of edge `size` drawing from `rng`
    pub fn with_rng(size: usize, rng: R) -> Result<Self, BoardError> {
        Ok(Self {
            board: Board::new(size)?,
            score: 0,
            history: History::new(),
            rng,
        })
    }

    /// Resume a session from a persisted board, score and history
    ///
    /// `board` must be the state reached after the history's applied turns.
    /// Every event in the history has to lie inside the board's lattice and
    /// carry a tile value the board itself would accept.
    pub fn restore(
        board: Board,
        score: u64,
        history: History,
        rng: R,
    ) -> Result<Self, BoardError> {
        for ev in history.turns().iter().flat_map(|t| t.events.iter()) {
            let positions = match *ev {
                CellEvent::Move { from, to, .. } => [from, to],
                CellEvent::Create { at, .. } | CellEvent::Destroy { at, .. } => [at, at],
            };
            if let Some(p) = positions.into_iter().find(|p| !board.contains(*p)) {
                return Err(BoardError::OutOfBounds(p, board.size()));
            }
            check_value(ev.cell().value().unwrap_or(0))?;
        }
        Ok(Self {
            board,
            score,
            history,
            rng,
        })
    }

    /// Start (or restart) the session: clear everything and spawn the opening cells
    ///
    /// The opening spawn is turn 0 and is not recorded in the history.
    pub fn init(&mut self) -> Vec<CellEvent> {
        self.board.clear();
        self.score = 0;
        self.history.clear();

        let events = spawn_cells(&self.board, INITIAL_CELLS, &mut self.rng);
        for ev in &events {
            self.board.apply(ev);
        }
        debug!(size = self.board.size(), cells = events.len(), "session started");
        events
    }

    /// Play one turn toward `direction`
    ///
    /// Returns the shift and spawn events of the turn, or an empty batch when
    /// the session is terminal or the direction changes nothing. Empty
    /// batches leave the score and the history untouched.
    pub fn shift(&mut self, direction: Direction) -> Vec<CellEvent> {
        if self.is_terminal() {
            trace!(direction = direction.as_str(), "shift ignored: terminal");
            return Vec::new();
        }

        let mut events = engine::shift(&self.board, direction);
        if events.is_empty() {
            trace!(direction = direction.as_str(), "shift ignored: no-op");
            return events;
        }

        let points = merge_points(&events);
        for ev in &events {
            self.board.apply(ev);
        }
        self.score += points;

        if !engine::is_stuck(&self.board) {
            let spawned = spawn_cells(&self.board, CELLS_PER_TURN, &mut self.rng);
            for ev in &spawned {
                self.board.apply(ev);
            }
            events.extend(spawned);
        }

        self.history.record(Turn::new(events.clone(), points));
        debug!(
            direction = direction.as_str(),
            events = events.len(),
            points,
            score = self.score,
            turn = self.history.cursor(),
            "turn played"
        );
        events
    }

    /// Undo the last applied turn
    ///
    /// Returns the reversed events, in the order they were applied, so a
    /// renderer can play the turn backward.
    pub fn undo(&mut self) -> Result<Vec<CellEvent>, HistoryError> {
        let turn = self.history.step_back()?;
        let events = reverse_events(&turn.events);
        let points = turn.points;

        for ev in &events {
            self.board.apply(ev);
        }
        self.score = self.score.saturating_sub(points);
        debug!(
            turn = self.history.cursor(),
            score = self.score,
            "turn undone"
        );
        Ok(events)
    }

    /// Replay the next undone turn
    pub fn redo(&mut self) -> Result<Vec<CellEvent>, HistoryError> {
        let turn = self.history.step_forward()?;
        let events = turn.events.clone();
        let points = turn.points;

        for ev in &events {
            self.board.apply(ev);
        }
        self.score += points;
        debug!(
            turn = self.history.cursor(),
            score = self.score,
            "turn redone"
        );
        Ok(events)
    }

    /// Recomputed from the board: terminal when no direction moves anything
    pub fn status(&self) -> GameStatus {
        if engine::is_stuck(&self.board) {
            GameStatus::Terminal
        } else {
            GameStatus::Playing
        }
    }

    pub fn is_terminal(&self) -> bool {
        self.status() == GameStatus::Terminal
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn score(&self) -> u64 {
        self.score
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    pub fn rng(&self) -> &R {
        &self.rng
    }

    pub fn highest_value(&self) -> Option<u32> {
        self.board.highest_value()
    }

    /// Win policy on top of the base engine: some tile reached `target`
    pub fn has_reached(&self, target: u32) -> bool {
        self.highest_value().is_some_and(|v| v >= target)
    }

    /// `Create` events that draw the current board from scratch
    pub fn restore_events(&self) -> Vec<CellEvent> {
        snapshot_events(&self.board)
    }

    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot {
            board: self.board.clone(),
            score: self.score,
            status: self.status(),
            turn: self.history.cursor(),
            turns: self.history.len(),
            can_undo: self.history.can_undo(),
            can_redo: self.history.can_redo(),
            highest: self.highest_value(),
        }
    }
}
