//! Board state for one side: its fleet and the shots received.

use core::fmt;
use log::trace;

use crate::core::bitboard::CellSet;
use crate::core::cell::Cell;
use crate::core::common::{ShotRejection, ShotResult};
use crate::core::fleet::Fleet;

/// A side's fleet together with every shot fired at it.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct Board {
    fleet: Fleet,
    shots: CellSet,
    hits: CellSet,
}

impl Board {
    /// Create an empty board (no ships placed, no shots).
    pub fn new() -> Self {
        Self::default()
    }

    /// Board holding an already built fleet.
    pub fn with_fleet(fleet: Fleet) -> Self {
        Board { fleet, ..Self::default() }
    }

    pub fn fleet(&self) -> &Fleet {
        &self.fleet
    }

    pub(crate) fn fleet_mut(&mut self) -> &mut Fleet {
        &mut self.fleet
    }

    /// Every cell fired upon so far.
    pub fn shots(&self) -> CellSet {
        self.shots
    }

    /// Cells where a shot found a ship.
    pub fn hits(&self) -> CellSet {
        self.hits
    }

    pub fn is_shot(&self, cell: Cell) -> bool {
        self.shots.contains(cell)
    }

    /// Returns `true` when all ships are sunk.
    pub fn all_sunk(&self) -> bool {
        self.fleet.all_sunk()
    }

    /// Fire at `cell`. A repeat shot is rejected and changes nothing.
    pub fn receive_shot(&mut self, cell: Cell) -> Result<ShotResult, ShotRejection> {
        if self.shots.contains(cell) {
            return Err(ShotRejection::AlreadyShot(cell));
        }
        self.shots.insert(cell);

        let result = match self.fleet.ship_at_mut(cell) {
            Some(ship) => {
                ship.register_hit(cell);
                self.hits.insert(cell);
                if ship.is_sunk() {
                    ShotResult::Sink { ship_id: ship.id(), length: ship.len() }
                } else {
                    ShotResult::Hit { ship_id: ship.id() }
                }
            }
            None => ShotResult::Miss,
        };
        trace!("shot at {} -> {:?}", cell, result);
        Ok(result)
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Board {{\n  ships: {:?},\n  shots: {:?},\n  hits: {:?}\n}}",
            self.fleet.ships(),
            self.shots,
            self.hits,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn debug_output_has_no_trailing_newline() {
        let rendered = alloc::format!("{:?}", Board::new());
        assert!(rendered.starts_with("Board {"));
        assert!(rendered.ends_with('}'));
    }
}
