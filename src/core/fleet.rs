//! Fleets: the ships owned by one side, and random fleet generation for the
//! opponent.

use alloc::vec::Vec;
use log::{debug, trace};
use rand::Rng;

use crate::core::bitboard::CellSet;
use crate::core::cell::Cell;
use crate::core::common::GameError;
use crate::core::config::{CELL_COUNT, MAX_PLACEMENT_ATTEMPTS};
use crate::core::placement::{check_placement, Placement, PlacementError};
use crate::core::ship::{Orientation, Ship};

/// Ships belonging to one side, in placement order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Fleet {
    ships: Vec<Ship>,
    occupied: CellSet,
}

impl Fleet {
    /// An empty fleet.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn ships(&self) -> &[Ship] {
        &self.ships
    }

    /// Every cell covered by a ship, hit or not.
    pub fn occupied(&self) -> CellSet {
        self.occupied
    }

    /// Add a ship of `length` at `start`, rejecting out-of-bounds or
    /// overlapping placements. On success returns the new ship's id.
    pub fn place(
        &mut self,
        start: Cell,
        length: usize,
        orientation: Orientation,
    ) -> Result<usize, PlacementError> {
        let occupied = self.occupied;
        let placement = check_placement(start, length, orientation, |c| occupied.contains(c))?;
        Ok(self.commit(placement))
    }

    fn commit(&mut self, placement: Placement) -> usize {
        let id = self.ships.len();
        for &cell in &placement.cells {
            self.occupied.insert(cell);
        }
        self.ships.push(Ship::new(id, placement));
        id
    }

    /// Place one more ship of `length` at a uniformly random start and
    /// orientation, retrying until a legal spot comes up.
    pub fn place_random<R: Rng + ?Sized>(
        &mut self,
        rng: &mut R,
        length: usize,
    ) -> Result<usize, GameError> {
        let occupied = self.occupied;
        for attempt in 1..=MAX_PLACEMENT_ATTEMPTS {
            let start = Cell::new(rng.random_range(0..CELL_COUNT))?;
            let orientation = if rng.random_bool(0.5) {
                Orientation::Horizontal
            } else {
                Orientation::Vertical
            };
            match check_placement(start, length, orientation, |c| occupied.contains(c)) {
                Ok(placement) => {
                    trace!("placed length {} at {} {:?} after {} attempts", length, start, orientation, attempt);
                    return Ok(self.commit(placement));
                }
                Err(PlacementError::InvalidLength(len)) => {
                    return Err(GameError::InvalidPlacement(PlacementError::InvalidLength(len)))
                }
                Err(_) => continue,
            }
        }
        Err(GameError::ExhaustedRandomPlacement { length })
    }

    /// The ship with a live segment on `cell`, if any.
    pub fn ship_at_mut(&mut self, cell: Cell) -> Option<&mut Ship> {
        self.ships.iter_mut().find(|s| s.remaining().contains(&cell))
    }

    /// Whether any ship that has not sunk was placed on `cell`.
    pub fn live_ship_occupies(&self, cell: Cell) -> bool {
        self.ships.iter().any(|s| !s.is_sunk() && s.occupies(cell))
    }

    /// First unhit cell, walking ships in placement order.
    pub fn first_live_cell(&self) -> Option<Cell> {
        self.ships.iter().flat_map(|s| s.remaining().iter().copied()).next()
    }

    /// Number of unhit ship cells.
    pub fn remaining_cells(&self) -> usize {
        self.ships.iter().map(|s| s.remaining().len()).sum()
    }

    /// `true` once every ship is sunk. An empty fleet counts as sunk.
    pub fn all_sunk(&self) -> bool {
        self.ships.iter().all(Ship::is_sunk)
    }
}

/// Build a fleet with one ship per entry of `lengths`, each at a random legal
/// position.
pub fn generate_fleet<R: Rng + ?Sized>(rng: &mut R, lengths: &[usize]) -> Result<Fleet, GameError> {
    let mut fleet = Fleet::new();
    for &length in lengths {
        fleet.place_random(rng, length)?;
    }
    debug!("generated fleet of {} ships", fleet.ships().len());
    Ok(fleet)
}
