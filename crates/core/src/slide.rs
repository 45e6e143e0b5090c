//! Slide-and-merge on a single line
//!
//! Cells are compacted toward the front (index 0) and equal neighbours merge,
//! with the usual 2048 rules:
//!
//! - each destination slot absorbs at most one pair per pass, so `[2, 2, 2]`
//!   becomes `[4, 2, _]`, never `[4, 4, _]` or `[2, 4, _]`;
//! - a merge is reported as `Move` (incoming cell onto the slot), `Destroy`
//!   (old occupant), `Destroy` (incoming cell), `Create` (doubled value);
//! - a line that does not change yields no events.

use crate::board::Line;
use crate::types::{Cell, CellEvent, Position};

/// Result of sliding one line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineSlide {
    /// The line after the slide, front first
    pub cells: Line,
    /// Events explaining the transformation, in application order
    pub events: Vec<CellEvent>,
}

impl LineSlide {
    pub fn is_noop(&self) -> bool {
        self.events.is_empty()
    }
}

/// Slide `line` toward index 0
///
/// `locate` maps a line index to the board position reported in events.
///
/// # Panics
///
/// Panics if `line` is longer than
/// [`MAX_CUBE_SIZE`](crate::types::MAX_CUBE_SIZE), the capacity of [`Line`].
pub fn slide_line<F>(line: &[Cell], locate: F) -> LineSlide
where
    F: Fn(usize) -> Position,
{
    let mut cells: Line = line.iter().map(|_| Cell::Empty).collect();
    let mut events = Vec::new();
    let mut target = 0usize;

    for (k, &cell) in line.iter().enumerate() {
        if cell.is_empty() {
            continue;
        }

        let slot = cells[target];
        if slot.is_empty() {
            cells[target] = cell;
            if k != target {
                events.push(CellEvent::Move {
                    cell,
                    from: locate(k),
                    to: locate(target),
                });
            }
        } else if slot.is_mergeable_with(cell) {
            let merged = slot.doubled();
            let at = locate(target);
            cells[target] = merged;
            events.extend([
                CellEvent::Move {
                    cell,
                    from: locate(k),
                    to: at,
                },
                CellEvent::Destroy { cell: slot, at },
                CellEvent::Destroy { cell, at },
                CellEvent::Create { cell: merged, at },
            ]);
            target += 1;
        } else {
            target += 1;
            cells[target] = cell;
            if k != target {
                events.push(CellEvent::Move {
                    cell,
                    from: locate(k),
                    to: locate(target),
                });
            }
        }
    }

    LineSlide { cells, events }
}
