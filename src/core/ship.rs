//! Ship definitions and hit tracking.

use alloc::vec::Vec;
use core::fmt;

use crate::core::bitboard::CellSet;
use crate::core::cell::Cell;
use crate::core::placement::Placement;

/// Orientation of a ship on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize))]
pub enum Orientation {
    Horizontal,
    Vertical,
}

impl Orientation {
    /// The other orientation.
    pub fn rotated(self) -> Self {
        match self {
            Orientation::Horizontal => Orientation::Vertical,
            Orientation::Vertical => Orientation::Horizontal,
        }
    }
}

/// A placed ship. `cells` is the full footprint; `remaining` shrinks as
/// hits land.
#[derive(Clone, PartialEq, Eq)]
pub struct Ship {
    id: usize,
    orientation: Orientation,
    cells: Vec<Cell>,
    footprint: CellSet,
    remaining: Vec<Cell>,
}

impl Ship {
    pub(crate) fn new(id: usize, placement: Placement) -> Self {
        let Placement { orientation, cells } = placement;
        Ship {
            id,
            orientation,
            footprint: cells.iter().copied().collect(),
            remaining: cells.clone(),
            cells,
        }
    }

    /// Position of the ship in its fleet's placement order.
    pub fn id(&self) -> usize {
        self.id
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// Every cell the ship was placed on, in order.
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Cells not yet hit, in placement order.
    pub fn remaining(&self) -> &[Cell] {
        &self.remaining
    }

    /// Whether the ship was placed on `cell`, hit or not.
    pub fn occupies(&self, cell: Cell) -> bool {
        self.footprint.contains(cell)
    }

    /// Remove `cell` from the remaining cells. Returns `true` if it was a
    /// live segment.
    pub fn register_hit(&mut self, cell: Cell) -> bool {
        match self.remaining.iter().position(|&c| c == cell) {
            Some(pos) => {
                self.remaining.remove(pos);
                true
            }
            None => false,
        }
    }

    /// Check if the ship is sunk (all segments hit).
    pub fn is_sunk(&self) -> bool {
        self.remaining.is_empty()
    }
}

impl fmt::Debug for Ship {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Ship {{ id: {}, origin: {:?}, orientation: {:?}, len: {}, remaining: {} }}",
            self.id,
            self.cells.first(),
            self.orientation,
            self.len(),
            self.remaining.len(),
        )
    }
}
