use shipsinkers::{can_place, check_placement, Cell, Fleet, Orientation, PlacementError};

fn cell(i: usize) -> Cell {
    Cell::new(i).unwrap()
}

#[test]
fn test_bounds_horizontal_and_vertical() {
    let nothing = |_: Cell| false;
    // column 5 + 5 = 10 fits, column 6 does not
    assert!(can_place(cell(5), 5, Orientation::Horizontal, nothing));
    assert!(!can_place(cell(6), 5, Orientation::Horizontal, nothing));
    // row 6 + 4 = 10 fits, row 7 does not
    assert!(can_place(cell(60), 4, Orientation::Vertical, nothing));
    assert!(!can_place(cell(70), 4, Orientation::Vertical, nothing));
    // a horizontal ship never wraps onto the next row
    assert!(!can_place(cell(18), 3, Orientation::Horizontal, nothing));
}

#[test]
fn test_overlap_is_rejected() {
    let taken = |c: Cell| c.index() == 33;
    assert!(!can_place(cell(31), 3, Orientation::Horizontal, taken));
    assert!(!can_place(cell(3), 4, Orientation::Vertical, taken));
    assert!(can_place(cell(34), 3, Orientation::Horizontal, taken));

    assert_eq!(
        check_placement(cell(13), 3, Orientation::Vertical, taken).unwrap_err(),
        PlacementError::Overlaps(cell(33))
    );
}

#[test]
fn test_check_placement_returns_ordered_cells() {
    let p = check_placement(cell(42), 3, Orientation::Vertical, |_| false).unwrap();
    let idx: Vec<usize> = p.cells.iter().map(|c| c.index()).collect();
    assert_eq!(idx, vec![42, 52, 62]);

    let p = check_placement(cell(42), 2, Orientation::Horizontal, |_| false).unwrap();
    let idx: Vec<usize> = p.cells.iter().map(|c| c.index()).collect();
    assert_eq!(idx, vec![42, 43]);
}

#[test]
fn test_invalid_lengths() {
    assert_eq!(
        check_placement(cell(0), 0, Orientation::Horizontal, |_| false).unwrap_err(),
        PlacementError::InvalidLength(0)
    );
    assert!(!can_place(cell(0), 11, Orientation::Vertical, |_| false));
}

#[test]
fn test_fleet_rejects_without_mutation() {
    let mut fleet = Fleet::new();
    assert_eq!(fleet.place(cell(0), 5, Orientation::Horizontal).unwrap(), 0);
    let before = fleet.clone();

    assert_eq!(
        fleet.place(cell(2), 3, Orientation::Vertical).unwrap_err(),
        PlacementError::Overlaps(cell(2))
    );
    assert!(matches!(
        fleet.place(cell(97), 4, Orientation::Horizontal).unwrap_err(),
        PlacementError::OutOfBounds { .. }
    ));
    assert_eq!(fleet, before);
    assert_eq!(fleet.occupied().count(), 5);
}
