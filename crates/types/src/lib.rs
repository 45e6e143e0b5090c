//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the cube engine.
//! All types are plain data with no game logic attached, so they can travel
//! between the rules engine, a renderer, and a persistence layer unchanged.
//!
//! # Lattice
//!
//! The playfield is an N×N×N cube addressed by `(x, y, z)`, each axis in `[0, N)`:
//!
//! - **Default size**: 3 (27 cells)
//! - **Maximum size**: 16; line buffers are stack-allocated to this bound
//!
//! # Spawning
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `INITIAL_CELLS` | 2 | Cells placed when a session starts |
//! | `CELLS_PER_TURN` | 1 | Cells placed after every successful shift |
//! | `SPAWN_TWO_PERCENT` | 60 | Chance that a spawned cell is a 2 (otherwise 4) |
//! | `MAX_TILE_VALUE` | 2^31 | Largest tile; it never merges further |
//!
//! # Examples
//!
//! ```
//! use cube_2048_types::{Cell, CellEvent, Direction, Position};
//!
//! // Parse a direction from the `+x` / `-z` notation
//! let dir = Direction::from_str("+x").unwrap();
//! assert_eq!(dir, Direction::PosX);
//! assert_eq!(dir.vector(), [1, 0, 0]);
//!
//! // Only the six unit vectors are directions
//! assert_eq!(Direction::from_vector([0, 0, -1]), Some(Direction::NegZ));
//! assert_eq!(Direction::from_vector([1, 1, 0]), None);
//!
//! // Events reverse exactly
//! let ev = CellEvent::Create { cell: Cell::Number(2), at: Position::new(0, 1, 2) };
//! assert_eq!(ev.reversed().reversed(), ev);
//! ```

use serde::{Deserialize, Serialize};

/// Cube edge length used when none is configured (3×3×3)
pub const DEFAULT_CUBE_SIZE: usize = 3;

/// Largest supported cube edge length
pub const MAX_CUBE_SIZE: usize = 16;

/// Number of cells spawned when a session starts
pub const INITIAL_CELLS: usize = 2;

/// Number of cells spawned after each successful shift
pub const CELLS_PER_TURN: usize = 1;

/// Percent chance that a spawned cell holds the low value
pub const SPAWN_TWO_PERCENT: u32 = 60;

/// Value of the common spawned cell
pub const SPAWN_LOW_VALUE: u32 = 2;

/// Value of the rare spawned cell
pub const SPAWN_HIGH_VALUE: u32 = 4;

/// Largest tile value; tiles of this value no longer merge
pub const MAX_TILE_VALUE: u32 = 1 << 31;

/// A single lattice cell
///
/// - `Empty`: nothing at this coordinate
/// - `Number(v)`: a tile holding a power of two
///
/// Cells are copied by value; the engine never aliases them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "lowercase")]
pub enum Cell {
    #[default]
    Empty,
    Number(u32),
}

impl Cell {
    pub fn is_empty(&self) -> bool {
        matches!(self, Cell::Empty)
    }

    /// Numeric value, `None` for an empty cell
    pub fn value(&self) -> Option<u32> {
        match self {
            Cell::Empty => None,
            Cell::Number(v) => Some(*v),
        }
    }

    /// Two cells merge only when both hold the same number below [`MAX_TILE_VALUE`]
    pub fn is_mergeable_with(&self, other: Cell) -> bool {
        match (self, other) {
            (Cell::Number(a), Cell::Number(b)) => *a == b && *a < MAX_TILE_VALUE,
            _ => false,
        }
    }

    /// The merge result of this cell with its twin
    ///
    /// # Panics
    ///
    /// Panics on `Empty` or on [`MAX_TILE_VALUE`]; only cells that pass
    /// [`Cell::is_mergeable_with`] take part in a merge.
    pub fn doubled(&self) -> Cell {
        match self {
            Cell::Number(v) => match v.checked_mul(2) {
                Some(d) => Cell::Number(d),
                None => panic!("cannot double {}: past the largest tile", v),
            },
            Cell::Empty => panic!("cannot double an empty cell"),
        }
    }
}

/// Integer lattice coordinate `(x, y, z)`
///
/// Serialized as a `[x, y, z]` triple.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(from = "[usize; 3]", into = "[usize; 3]")]
pub struct Position {
    pub x: usize,
    pub y: usize,
    pub z: usize,
}

impl Position {
    pub const fn new(x: usize, y: usize, z: usize) -> Self {
        Self { x, y, z }
    }
}

impl From<[usize; 3]> for Position {
    fn from([x, y, z]: [usize; 3]) -> Self {
        Self { x, y, z }
    }
}

impl From<Position> for [usize; 3] {
    fn from(p: Position) -> Self {
        [p.x, p.y, p.z]
    }
}

/// The six shift directions, one per signed axis
///
/// Shifting in `PosX` compacts cells toward the highest x index,
/// `NegX` toward index 0, and likewise for the other axes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    #[serde(rename = "+x")]
    PosX,
    #[serde(rename = "-x")]
    NegX,
    #[serde(rename = "+y")]
    PosY,
    #[serde(rename = "-y")]
    NegY,
    #[serde(rename = "+z")]
    PosZ,
    #[serde(rename = "-z")]
    NegZ,
}

impl Direction {
    /// Every direction, in axis order
    pub const ALL: [Direction; 6] = [
        Direction::PosX,
        Direction::NegX,
        Direction::PosY,
        Direction::NegY,
        Direction::PosZ,
        Direction::NegZ,
    ];

    /// Unit vector along the shift axis
    pub fn vector(&self) -> [i8; 3] {
        match self {
            Direction::PosX => [1, 0, 0],
            Direction::NegX => [-1, 0, 0],
            Direction::PosY => [0, 1, 0],
            Direction::NegY => [0, -1, 0],
            Direction::PosZ => [0, 0, 1],
            Direction::NegZ => [0, 0, -1],
        }
    }

    /// Accept a raw vector from an input controller
    ///
    /// Returns `None` for anything but the six unit vectors.
    pub fn from_vector(v: [i8; 3]) -> Option<Self> {
        Direction::ALL.into_iter().find(|d| d.vector() == v)
    }

    /// Parse direction from string (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use cube_2048_types::Direction;
    ///
    /// assert_eq!(Direction::from_str("-Y"), Some(Direction::NegY));
    /// assert_eq!(Direction::from_str("z"), Some(Direction::PosZ));
    /// assert_eq!(Direction::from_str("w"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "+x" | "x" => Some(Direction::PosX),
            "-x" => Some(Direction::NegX),
            "+y" | "y" => Some(Direction::PosY),
            "-y" => Some(Direction::NegY),
            "+z" | "z" => Some(Direction::PosZ),
            "-z" => Some(Direction::NegZ),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::PosX => "+x",
            Direction::NegX => "-x",
            Direction::PosY => "+y",
            Direction::NegY => "-y",
            Direction::PosZ => "+z",
            Direction::NegZ => "-z",
        }
    }
}

/// Atomic, replayable board mutation
///
/// An ordered batch of events fully determines a board transition, and the
/// batch reversed (each event via [`CellEvent::reversed`], applied back to
/// front) restores the previous board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum CellEvent {
    /// A number cell changes position; `from != to`
    Move {
        cell: Cell,
        from: Position,
        to: Position,
    },
    /// A number cell appears at a previously empty position
    Create { cell: Cell, at: Position },
    /// A number cell disappears from a position
    Destroy { cell: Cell, at: Position },
}

impl CellEvent {
    pub fn cell(&self) -> Cell {
        match self {
            CellEvent::Move { cell, .. }
            | CellEvent::Create { cell, .. }
            | CellEvent::Destroy { cell, .. } => *cell,
        }
    }

    /// The event that undoes this one
    pub fn reversed(&self) -> Self {
        match *self {
            CellEvent::Move { cell, from, to } => CellEvent::Move {
                cell,
                from: to,
                to: from,
            },
            CellEvent::Create { cell, at } => CellEvent::Destroy { cell, at },
            CellEvent::Destroy { cell, at } => CellEvent::Create { cell, at },
        }
    }

    pub fn is_create(&self) -> bool {
        matches!(self, CellEvent::Create { .. })
    }
}
