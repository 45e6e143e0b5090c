//! Cube engine - whole-board operations built from rotation and slide
//!
//! [`shift`] rotates the board so the direction points down the z axis,
//! slides every z-line toward z = 0, then rotates the emitted events back.
//! An empty batch means the move changed nothing; that is the only legality
//! signal the engine provides.

use tracing::trace;

use crate::board::Board;
use crate::rng::RandomSource;
use crate::rotation::{rotate_board, rotate_event, rotation_for};
use crate::slide::slide_line;
use crate::types::{
    Cell, CellEvent, Direction, Position, SPAWN_HIGH_VALUE, SPAWN_LOW_VALUE, SPAWN_TWO_PERCENT,
};

/// Events for shifting `board` toward `direction`
pub fn shift(board: &Board, direction: Direction) -> Vec<CellEvent> {
    let n = board.size();
    let rotation = rotation_for(direction);
    let rotated = rotate_board(board, rotation);

    let mut events = Vec::new();
    for x in 0..n {
        for y in 0..n {
            let slide = slide_line(&rotated.line(x, y), |z| Position::new(x, y, z));
            events.extend(slide.events);
        }
    }

    let back = rotation.inverse();
    for ev in &mut events {
        *ev = rotate_event(ev, back, n);
    }

    trace!(
        direction = direction.as_str(),
        events = events.len(),
        "shift computed"
    );
    events
}

/// True if shifting toward `direction` changes the board
pub fn can_shift(board: &Board, direction: Direction) -> bool {
    !shift(board, direction).is_empty()
}

/// True if no direction changes the board
pub fn is_stuck(board: &Board) -> bool {
    Direction::ALL.into_iter().all(|d| !can_shift(board, d))
}

/// Board with one event applied
pub fn apply_event(board: &Board, event: &CellEvent) -> Board {
    board.applied(event)
}

/// Board with a whole batch applied in order
pub fn apply_events(board: &Board, events: &[CellEvent]) -> Board {
    let mut next = board.clone();
    for ev in events {
        next.apply(ev);
    }
    next
}

pub fn reverse_event(event: &CellEvent) -> CellEvent {
    event.reversed()
}

/// The batch that undoes `events`: each reversed, back to front
///
/// A merge is emitted as `Move, Destroy(old), Destroy(incoming), Create`, all
/// landing on one slot. Reversed naively, the returning `Move` would clear the
/// slot after the old occupant was recreated there, so inside a merge group the
/// old occupant is recreated last instead.
pub fn reverse_events(events: &[CellEvent]) -> Vec<CellEvent> {
    let mut out = Vec::with_capacity(events.len());
    let mut end = events.len();

    while end > 0 {
        if end >= 4 && is_merge_group(&events[end - 4..end]) {
            let g = &events[end - 4..end];
            out.extend([
                g[3].reversed(),
                g[2].reversed(),
                g[0].reversed(),
                g[1].reversed(),
            ]);
            end -= 4;
            continue;
        }
        end -= 1;
        out.push(events[end].reversed());
    }
    out
}

fn is_merge_group(window: &[CellEvent]) -> bool {
    match window {
        [CellEvent::Move { to, .. }, CellEvent::Destroy { at: old, .. }, CellEvent::Destroy { at: incoming, .. }, CellEvent::Create { at: merged, .. }] => {
            old == to && incoming == to && merged == to
        }
        _ => false,
    }
}

/// Spawn up to `count` new cells at random empty positions
///
/// Each cell is a 2 with 60% probability, else a 4. Positions are drawn
/// without replacement; fewer than `count` events come back when the board
/// runs out of room. The board itself is not modified.
pub fn spawn_cells<R: RandomSource>(board: &Board, count: usize, rng: &mut R) -> Vec<CellEvent> {
    let mut empty = board.empty_positions();
    let mut events = Vec::with_capacity(count.min(empty.len()));

    for _ in 0..count {
        if empty.is_empty() {
            break;
        }
        let pick = rng.next_below(empty.len() as u32) as usize;
        let at = empty.remove(pick);
        let value = if rng.chance_percent(SPAWN_TWO_PERCENT) {
            SPAWN_LOW_VALUE
        } else {
            SPAWN_HIGH_VALUE
        };
        events.push(CellEvent::Create {
            cell: Cell::Number(value),
            at,
        });
    }
    events
}

/// `Create` events that rebuild `board` from empty, in storage order
///
/// Renderers use this to load a full snapshot through the same event path as
/// incremental updates.
pub fn snapshot_events(board: &Board) -> Vec<CellEvent> {
    board
        .occupied()
        .map(|(at, cell)| CellEvent::Create { cell, at })
        .collect()
}
