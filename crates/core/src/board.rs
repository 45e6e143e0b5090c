//! Board module - manages the cube lattice
//!
//! The board is an N×N×N cube where each cell is empty or holds a power of two.
//! Uses a flat vector indexed `(x * N + y) * N + z`, so a z-line is contiguous.
//! Coordinates: `(x, y, z)` with every axis in `0..N`.
//!
//! [`Board::apply`] is the only way the game mutates a board; everything else
//! reads it or produces a new one.

use std::ops::{Index, IndexMut};

use arrayvec::ArrayVec;
use serde::{Deserialize, Serialize};

use crate::error::BoardError;
use crate::types::{
    Cell, CellEvent, Position, DEFAULT_CUBE_SIZE, MAX_CUBE_SIZE, MAX_TILE_VALUE,
};

/// One line of cells along the z axis
pub type Line = ArrayVec<Cell, MAX_CUBE_SIZE>;

/// The game cube - N×N×N cells in flat storage
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawBoard")]
pub struct Board {
    size: usize,
    cells: Vec<Cell>,
}

/// Unvalidated wire form of a board
#[derive(Deserialize)]
struct RawBoard {
    size: usize,
    cells: Vec<Cell>,
}

impl TryFrom<RawBoard> for Board {
    type Error = BoardError;

    fn try_from(raw: RawBoard) -> Result<Self, Self::Error> {
        Board::from_cells(raw.size, raw.cells)
    }
}

impl Board {
    /// Create a new empty cube with edge length `size`
    pub fn new(size: usize) -> Result<Self, BoardError> {
        if size == 0 || size > MAX_CUBE_SIZE {
            return Err(BoardError::UnsupportedSize(size));
        }
        Ok(Self {
            size,
            cells: vec![Cell::Empty; size * size * size],
        })
    }

    /// Build a cube from flat cells in `(x, y, z)` order
    pub fn from_cells(size: usize, cells: Vec<Cell>) -> Result<Self, BoardError> {
        let mut board = Self::new(size)?;
        if cells.len() != board.cells.len() {
            return Err(BoardError::CellCount {
                size,
                expected: board.cells.len(),
                actual: cells.len(),
            });
        }
        for v in cells.iter().filter_map(Cell::value) {
            check_value(v)?;
        }
        board.cells = cells;
        Ok(board)
    }

    /// Build a cube from a `[x][y][z]` nested layout
    pub fn from_nested(nested: &[Vec<Vec<Cell>>]) -> Result<Self, BoardError> {
        let size = nested.len();
        let cells: Vec<Cell> = nested
            .iter()
            .flat_map(|plane| plane.iter().flat_map(|line| line.iter().copied()))
            .collect();
        if nested
            .iter()
            .any(|plane| plane.len() != size || plane.iter().any(|line| line.len() != size))
        {
            return Err(BoardError::CellCount {
                size,
                expected: size * size * size,
                actual: cells.len(),
            });
        }
        Self::from_cells(size, cells)
    }

    /// Calculate flat index from a position
    #[inline(always)]
    fn offset(&self, p: Position) -> Option<usize> {
        if !self.contains(p) {
            return None;
        }
        Some((p.x * self.size + p.y) * self.size + p.z)
    }

    #[inline(always)]
    fn position_of(&self, idx: usize) -> Position {
        let n = self.size;
        Position::new(idx / (n * n), (idx / n) % n, idx % n)
    }

    /// Edge length of the cube
    pub fn size(&self) -> usize {
        self.size
    }

    /// Check if position lies within the lattice
    pub fn contains(&self, p: Position) -> bool {
        p.x < self.size && p.y < self.size && p.z < self.size
    }

    /// Get cell at a position
    /// Returns None if out of bounds
    pub fn get(&self, p: Position) -> Option<Cell> {
        self.offset(p).map(|idx| self.cells[idx])
    }

    /// Set cell at a position
    /// Returns false if out of bounds
    pub fn set(&mut self, p: Position, cell: Cell) -> bool {
        match self.offset(p) {
            Some(idx) => {
                self.cells[idx] = cell;
                true
            }
            None => false,
        }
    }

    /// Every lattice position in storage order
    pub fn positions(&self) -> impl Iterator<Item = Position> + '_ {
        (0..self.cells.len()).map(|idx| self.position_of(idx))
    }

    /// Every `(position, cell)` pair in storage order
    pub fn iter(&self) -> impl Iterator<Item = (Position, Cell)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .map(|(idx, cell)| (self.position_of(idx), *cell))
    }

    /// Non-empty cells in storage order
    pub fn occupied(&self) -> impl Iterator<Item = (Position, Cell)> + '_ {
        self.iter().filter(|(_, cell)| !cell.is_empty())
    }

    /// Positions of all empty cells, in storage order
    pub fn empty_positions(&self) -> Vec<Position> {
        self.iter()
            .filter(|(_, cell)| cell.is_empty())
            .map(|(p, _)| p)
            .collect()
    }

    pub fn count_empty(&self) -> usize {
        self.cells.iter().filter(|c| c.is_empty()).count()
    }

    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|c| !c.is_empty())
    }

    /// Largest number on the board
    pub fn highest_value(&self) -> Option<u32> {
        self.cells.iter().filter_map(Cell::value).max()
    }

    /// The z-line at `(x, y)`, front (z = 0) first
    pub fn line(&self, x: usize, y: usize) -> Line {
        let start = (x * self.size + y) * self.size;
        self.cells[start..start + self.size].iter().copied().collect()
    }

    /// Apply one event in place
    ///
    /// `Move` clears the source and writes the destination, `Create` writes,
    /// `Destroy` clears. Batches must be applied in order.
    ///
    /// # Panics
    ///
    /// Panics if the event names a position outside the lattice.
    pub fn apply(&mut self, event: &CellEvent) {
        match *event {
            CellEvent::Move { cell, from, to } => {
                self[from] = Cell::Empty;
                self[to] = cell;
            }
            CellEvent::Create { cell, at } => self[at] = cell,
            CellEvent::Destroy { at, .. } => self[at] = Cell::Empty,
        }
    }

    /// Copy of this board with one event applied
    pub fn applied(&self, event: &CellEvent) -> Board {
        let mut next = self.clone();
        next.apply(event);
        next
    }

    /// Get a reference to the internal cells in storage order
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Convert to a `[x][y][z]` nested layout
    pub fn to_nested(&self) -> Vec<Vec<Vec<Cell>>> {
        (0..self.size)
            .map(|x| (0..self.size).map(|y| self.line(x, y).to_vec()).collect())
            .collect()
    }

    /// Clear the entire board
    pub fn clear(&mut self) {
        for cell in &mut self.cells {
            *cell = Cell::Empty;
        }
    }
}

/// A tile value must be a power of two in `2..=MAX_TILE_VALUE`
pub(crate) fn check_value(value: u32) -> Result<(), BoardError> {
    if !(2..=MAX_TILE_VALUE).contains(&value) || !value.is_power_of_two() {
        return Err(BoardError::InvalidValue(value));
    }
    Ok(())
}

impl Default for Board {
    fn default() -> Self {
        Self {
            size: DEFAULT_CUBE_SIZE,
            cells: vec![Cell::Empty; DEFAULT_CUBE_SIZE.pow(3)],
        }
    }
}

impl Index<Position> for Board {
    type Output = Cell;

    fn index(&self, p: Position) -> &Cell {
        match self.offset(p) {
            Some(idx) => &self.cells[idx],
            None => panic!("position {:?} outside cube of size {}", p, self.size),
        }
    }
}

impl IndexMut<Position> for Board {
    fn index_mut(&mut self, p: Position) -> &mut Cell {
        match self.offset(p) {
            Some(idx) => &mut self.cells[idx],
            None => panic!("position {:?} outside cube of size {}", p, self.size),
        }
    }
}
