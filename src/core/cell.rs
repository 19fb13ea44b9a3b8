//! Cell addressing on the fixed 10×10 board.
//!
//! A [`Cell`] wraps a board index in `0..100`; row = index / 10 and
//! column = index % 10. Construction is fallible so a `Cell` in hand is
//! always on the board.

use core::fmt;

use crate::core::common::GameError;
use crate::core::config::{BOARD_SIZE, CELL_COUNT};
use crate::core::ship::Orientation;

const SIZE: usize = BOARD_SIZE as usize;

/// A single board square.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize))]
#[cfg_attr(feature = "std", serde(into = "u8"))]
pub struct Cell(u8);

impl Cell {
    /// Cell for a raw board index.
    pub fn new(index: usize) -> Result<Self, GameError> {
        if index < CELL_COUNT {
            Ok(Cell(index as u8))
        } else {
            Err(GameError::InvalidCell(index))
        }
    }

    /// Cell at (`row`, `col`).
    pub fn at(row: usize, col: usize) -> Result<Self, GameError> {
        if row >= SIZE || col >= SIZE {
            return Err(GameError::InvalidCell(row.saturating_mul(SIZE).saturating_add(col)));
        }
        Ok(Cell((row * SIZE + col) as u8))
    }

    /// Iterate all cells in index order.
    pub fn all() -> impl Iterator<Item = Cell> {
        (0..CELL_COUNT as u8).map(Cell)
    }

    pub fn index(self) -> usize {
        self.0 as usize
    }

    pub fn row(self) -> usize {
        self.index() / SIZE
    }

    pub fn col(self) -> usize {
        self.index() % SIZE
    }

    /// The cell `k` steps from this one along `orientation`, if still on the board.
    pub fn offset(self, orientation: Orientation, k: usize) -> Option<Cell> {
        let (row, col) = match orientation {
            Orientation::Horizontal => (self.row(), self.col() + k),
            Orientation::Vertical => (self.row() + k, self.col()),
        };
        Cell::at(row, col).ok()
    }

    /// Orthogonal neighbours in left, right, up, down order. Board edges do
    /// not wrap.
    pub fn neighbors(self) -> impl Iterator<Item = Cell> {
        let (row, col) = (self.row(), self.col());
        let left = (col > 0).then(|| Cell(self.0 - 1));
        let right = (col + 1 < SIZE).then(|| Cell(self.0 + 1));
        let up = (row > 0).then(|| Cell(self.0 - BOARD_SIZE));
        let down = (row + 1 < SIZE).then(|| Cell(self.0 + BOARD_SIZE));
        [left, right, up, down].into_iter().flatten()
    }

    /// Same row, one column apart.
    pub fn is_horizontal_neighbor(self, other: Cell) -> bool {
        self.row() == other.row() && self.col().abs_diff(other.col()) == 1
    }

    /// Same column, one row apart.
    pub fn is_vertical_neighbor(self, other: Cell) -> bool {
        self.col() == other.col() && self.row().abs_diff(other.row()) == 1
    }

    /// `self` is the next cell to the right of `other`, in the same row.
    pub fn is_right_of(self, other: Cell) -> bool {
        self.row() == other.row() && self.col() == other.col() + 1
    }

    /// `self` is the cell directly below `other`.
    pub fn is_below(self, other: Cell) -> bool {
        self.col() == other.col() && self.row() == other.row() + 1
    }
}

impl From<Cell> for u8 {
    fn from(cell: Cell) -> u8 {
        cell.0
    }
}

impl TryFrom<usize> for Cell {
    type Error = GameError;

    fn try_from(index: usize) -> Result<Self, Self::Error> {
        Cell::new(index)
    }
}

/// Board notation: column letter then 1-based row, e.g. `C4`.
impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let col = (b'A' + self.col() as u8) as char;
        write!(f, "{}{}", col, self.row() + 1)
    }
}

impl core::str::FromStr for Cell {
    type Err = GameError;

    /// Parse board notation (`A1`..`J10`, case-insensitive) or a raw index.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if let Ok(index) = s.parse::<usize>() {
            return Cell::new(index);
        }
        let mut chars = s.chars();
        let col_ch = chars
            .next()
            .map(|c| c.to_ascii_uppercase())
            .ok_or(GameError::InvalidCell(CELL_COUNT))?;
        if !col_ch.is_ascii_uppercase() {
            return Err(GameError::InvalidCell(CELL_COUNT));
        }
        let col = (col_ch as u8 - b'A') as usize;
        let row: usize = chars
            .as_str()
            .parse()
            .map_err(|_| GameError::InvalidCell(CELL_COUNT))?;
        if row == 0 {
            return Err(GameError::InvalidCell(CELL_COUNT));
        }
        Cell::at(row - 1, col)
    }
}
