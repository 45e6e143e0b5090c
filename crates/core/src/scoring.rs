//! Scoring module - points carried by a tile
//!
//! A tile is worth the sum of every intermediate value on the chain that
//! built it: `score(v) = v + score(v / 2)`, with `score(4) = 4` and nothing
//! for a 2. So a 16 is worth `16 + 8 + 4 = 28`.

use crate::types::{Cell, CellEvent};

/// Points represented by a cell
///
/// # Panics
///
/// Panics if a number cell does not hold a power of two.
pub fn score(cell: Cell) -> u64 {
    match cell {
        Cell::Empty => 0,
        Cell::Number(v) => value_score(v),
    }
}

fn value_score(value: u32) -> u64 {
    assert!(
        value.is_power_of_two(),
        "cell value {} is not a power of two",
        value
    );
    let mut total = 0u64;
    let mut v = value;
    while v >= 4 {
        total += u64::from(v);
        v /= 2;
    }
    total
}

/// Points gained by a shift batch: the score of every merge result it creates
///
/// Only pass shift events here; spawned cells are `Create`s as well.
pub fn merge_points(events: &[CellEvent]) -> u64 {
    events
        .iter()
        .filter_map(|e| match e {
            CellEvent::Create { cell, .. } => Some(score(*cell)),
            _ => None,
        })
        .sum()
}
