/// Width and height of the square board.
pub const BOARD_SIZE: u8 = 10;

/// Number of addressable cells on the board.
pub const CELL_COUNT: usize = BOARD_SIZE as usize * BOARD_SIZE as usize;

pub const NUM_SHIPS: usize = 5;

/// Ship lengths in placement order. Both sides use the same fleet.
pub const SHIP_LENGTHS: [usize; NUM_SHIPS] = [5, 4, 3, 2, 2];

/// Total number of ship segments used in the standard configuration.
pub const TOTAL_SHIP_CELLS: usize = 5 + 4 + 3 + 2 + 2;

/// Random placement attempts allowed per ship before the fleet generator
/// gives up.
pub const MAX_PLACEMENT_ATTEMPTS: usize = 10_000;

/// Display name for the ship at `ship_id` in the standard fleet.
pub fn ship_name(ship_id: usize) -> Option<&'static str> {
    const NAMES: [&str; NUM_SHIPS] = ["Carrier", "Battleship", "Cruiser", "Destroyer", "Patrol Boat"];
    NAMES.get(ship_id).copied()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_follow_fleet_order() {
        assert_eq!(ship_name(0), Some("Carrier"));
        assert_eq!(ship_name(NUM_SHIPS - 1), Some("Patrol Boat"));
        assert_eq!(ship_name(NUM_SHIPS), None);
        assert_eq!(SHIP_LENGTHS.iter().sum::<usize>(), TOTAL_SHIP_CELLS);
    }
}
