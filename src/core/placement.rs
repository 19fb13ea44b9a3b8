//! Placement validation: bounds and overlap checks for a candidate ship.

use alloc::vec::Vec;
use core::fmt;

use crate::core::cell::Cell;
use crate::core::config::BOARD_SIZE;
use crate::core::ship::Orientation;

/// An accepted placement: the ordered cells a ship will occupy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Placement {
    pub orientation: Orientation,
    pub cells: Vec<Cell>,
}

/// Why a placement was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlacementError {
    /// The ship would extend past the board edge.
    OutOfBounds { start: Cell, length: usize, orientation: Orientation },
    /// The ship would cover an occupied cell.
    Overlaps(Cell),
    /// Length is zero, longer than the board, or not the length expected next.
    InvalidLength(usize),
}

impl fmt::Display for PlacementError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlacementError::OutOfBounds { start, length, orientation } => write!(
                f,
                "ship of length {} at {} ({:?}) leaves the board",
                length, start, orientation
            ),
            PlacementError::Overlaps(cell) => write!(f, "ship would overlap another ship at {}", cell),
            PlacementError::InvalidLength(len) => write!(f, "invalid ship length {}", len),
        }
    }
}

/// Validate a placement of `length` cells from `start` and return its cells.
///
/// `occupied` reports cells already taken by other ships.
pub fn check_placement<F>(
    start: Cell,
    length: usize,
    orientation: Orientation,
    occupied: F,
) -> Result<Placement, PlacementError>
where
    F: Fn(Cell) -> bool,
{
    let size = BOARD_SIZE as usize;
    if length == 0 || length > size {
        return Err(PlacementError::InvalidLength(length));
    }
    let lead = match orientation {
        Orientation::Horizontal => start.col(),
        Orientation::Vertical => start.row(),
    };
    if lead + length > size {
        return Err(PlacementError::OutOfBounds { start, length, orientation });
    }

    let mut cells = Vec::with_capacity(length);
    for k in 0..length {
        let cell = start
            .offset(orientation, k)
            .ok_or(PlacementError::OutOfBounds { start, length, orientation })?;
        if occupied(cell) {
            return Err(PlacementError::Overlaps(cell));
        }
        cells.push(cell);
    }
    Ok(Placement { orientation, cells })
}

/// Whether a ship of `length` fits at `start` without leaving the board or
/// touching an occupied cell.
pub fn can_place<F>(start: Cell, length: usize, orientation: Orientation, occupied: F) -> bool
where
    F: Fn(Cell) -> bool,
{
    check_placement(start, length, orientation, occupied).is_ok()
}
