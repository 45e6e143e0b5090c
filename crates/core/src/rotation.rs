//! Rotation module - reduces the six shift directions to one
//!
//! Every shift is performed as "slide each z-line toward z = 0". To shift in
//! another direction the cube is first rotated so that direction points down
//! the z axis, slid, and the resulting events are rotated back.
//!
//! A [`Rotation`] is a pair of quarter-turn angles: `a` about the x axis,
//! applied first, then `b` about the y axis. Points rotate about the cube's
//! center. Coordinates are doubled before recentering (`2p - (n - 1)`), so the
//! center is an integer for even and odd sizes alike and no floating point is
//! involved.

use crate::board::Board;
use crate::types::{CellEvent, Direction, Position};

/// Rotation angle about a single axis
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Angle {
    Neg180,
    Neg90,
    Zero,
    Pos90,
    Pos180,
}

impl Angle {
    pub fn degrees(&self) -> i16 {
        match self {
            Angle::Neg180 => -180,
            Angle::Neg90 => -90,
            Angle::Zero => 0,
            Angle::Pos90 => 90,
            Angle::Pos180 => 180,
        }
    }

    pub fn negated(&self) -> Self {
        match self {
            Angle::Neg180 => Angle::Pos180,
            Angle::Neg90 => Angle::Pos90,
            Angle::Zero => Angle::Zero,
            Angle::Pos90 => Angle::Neg90,
            Angle::Pos180 => Angle::Neg180,
        }
    }

    /// Exact `(cos, sin)` of the angle
    fn cos_sin(&self) -> (i64, i64) {
        match self {
            Angle::Neg180 | Angle::Pos180 => (-1, 0),
            Angle::Neg90 => (0, -1),
            Angle::Zero => (1, 0),
            Angle::Pos90 => (0, 1),
        }
    }
}

/// A rigid rotation of the cube: `a` about x, then `b` about y
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rotation {
    pub a: Angle,
    pub b: Angle,
}

impl Rotation {
    pub const IDENTITY: Rotation = Rotation {
        a: Angle::Zero,
        b: Angle::Zero,
    };

    pub const fn new(a: Angle, b: Angle) -> Self {
        Self { a, b }
    }

    /// The rotation that turns `direction` into a shift toward z = 0
    pub fn for_direction(direction: Direction) -> Self {
        let (a, b) = match direction {
            Direction::PosX => (Angle::Zero, Angle::Pos90),
            Direction::NegX => (Angle::Zero, Angle::Neg90),
            Direction::PosY => (Angle::Neg90, Angle::Zero),
            Direction::NegY => (Angle::Pos90, Angle::Zero),
            Direction::PosZ => (Angle::Pos180, Angle::Zero),
            Direction::NegZ => (Angle::Zero, Angle::Zero),
        };
        Self { a, b }
    }

    /// Negate both angles
    ///
    /// This undoes the rotation whenever at most one of the angles is non-zero,
    /// which holds for every rotation produced by [`Rotation::for_direction`].
    pub fn inverse(&self) -> Self {
        Self {
            a: self.a.negated(),
            b: self.b.negated(),
        }
    }

    /// Integer matrix `Ry(b) * Rx(a)`
    fn matrix(&self) -> [[i64; 3]; 3] {
        let (ca, sa) = self.a.cos_sin();
        let (cb, sb) = self.b.cos_sin();
        [
            [cb, sb * sa, sb * ca],
            [0, ca, -sa],
            [-sb, cb * sa, cb * ca],
        ]
    }
}

/// Rotation for a shift direction (see [`Rotation::for_direction`])
pub fn rotation_for(direction: Direction) -> Rotation {
    Rotation::for_direction(direction)
}

/// Rotate a lattice point about the center of a cube of edge `size`
///
/// # Panics
///
/// Panics if the result leaves the lattice, which only happens for a point
/// that was outside it to begin with.
pub fn rotate_point(point: Position, rotation: Rotation, size: usize) -> Position {
    let span = size as i64 - 1;
    let centered = [
        2 * point.x as i64 - span,
        2 * point.y as i64 - span,
        2 * point.z as i64 - span,
    ];
    let m = rotation.matrix();

    let mut out = [0usize; 3];
    for (axis, row) in m.iter().enumerate() {
        let doubled: i64 = row.iter().zip(centered).map(|(r, c)| r * c).sum::<i64>() + span;
        assert!(
            doubled >= 0 && doubled % 2 == 0 && doubled / 2 < size as i64,
            "rotated point {:?} left the lattice of size {}",
            point,
            size
        );
        out[axis] = (doubled / 2) as usize;
    }
    Position::from(out)
}

/// New board with every cell relocated by `rotation`
pub fn rotate_board(board: &Board, rotation: Rotation) -> Board {
    let mut rotated = board.clone();
    rotated.clear();
    for (p, cell) in board.occupied() {
        rotated.set(rotate_point(p, rotation, board.size()), cell);
    }
    rotated
}

/// Rotate every coordinate an event carries
pub fn rotate_event(event: &CellEvent, rotation: Rotation, size: usize) -> CellEvent {
    match *event {
        CellEvent::Move { cell, from, to } => CellEvent::Move {
            cell,
            from: rotate_point(from, rotation, size),
            to: rotate_point(to, rotation, size),
        },
        CellEvent::Create { cell, at } => CellEvent::Create {
            cell,
            at: rotate_point(at, rotation, size),
        },
        CellEvent::Destroy { cell, at } => CellEvent::Destroy {
            cell,
            at: rotate_point(at, rotation, size),
        },
    }
}
