use proptest::prelude::*;
use rand::{rngs::SmallRng, SeedableRng};
use shipsinkers::{generate_fleet, CellSet, Fleet, GameError, CELL_COUNT, SHIP_LENGTHS, TOTAL_SHIP_CELLS};

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    #[test]
    fn generated_fleet_is_legal(seed in any::<u64>()) {
        let mut rng = SmallRng::seed_from_u64(seed);
        let fleet = generate_fleet(&mut rng, &SHIP_LENGTHS).unwrap();

        prop_assert_eq!(fleet.ships().len(), SHIP_LENGTHS.len());
        let mut seen = CellSet::new();
        for (ship, &len) in fleet.ships().iter().zip(SHIP_LENGTHS.iter()) {
            prop_assert_eq!(ship.len(), len);
            for &cell in ship.cells() {
                prop_assert!(cell.index() < CELL_COUNT);
                prop_assert!(seen.insert(cell), "cell {} shared by two ships", cell);
            }
            // cells form a straight, contiguous line
            let rows: Vec<usize> = ship.cells().iter().map(|c| c.row()).collect();
            let cols: Vec<usize> = ship.cells().iter().map(|c| c.col()).collect();
            let straight_h = rows.iter().all(|&r| r == rows[0])
                && cols.windows(2).all(|w| w[1] == w[0] + 1);
            let straight_v = cols.iter().all(|&c| c == cols[0])
                && rows.windows(2).all(|w| w[1] == w[0] + 1);
            prop_assert!(straight_h || straight_v);
        }
        prop_assert_eq!(seen.count(), TOTAL_SHIP_CELLS);
        prop_assert_eq!(fleet.occupied(), seen);
    }

    #[test]
    fn generation_is_reproducible(seed in any::<u64>()) {
        let a = generate_fleet(&mut SmallRng::seed_from_u64(seed), &SHIP_LENGTHS).unwrap();
        let b = generate_fleet(&mut SmallRng::seed_from_u64(seed), &SHIP_LENGTHS).unwrap();
        prop_assert_eq!(a, b);
    }
}

#[test]
fn test_impossible_fleet_exhausts_attempts() {
    // A length-10 ship spans a whole row or column, so at most ten fit.
    let mut rng = SmallRng::seed_from_u64(7);
    let lengths = [10usize; 11];
    let err = generate_fleet(&mut rng, &lengths).unwrap_err();
    assert_eq!(err, GameError::ExhaustedRandomPlacement { length: 10 });
}

#[test]
fn test_place_random_on_existing_fleet() {
    let mut rng = SmallRng::seed_from_u64(99);
    let mut fleet = Fleet::new();
    for &len in SHIP_LENGTHS.iter() {
        fleet.place_random(&mut rng, len).unwrap();
    }
    assert_eq!(fleet.remaining_cells(), TOTAL_SHIP_CELLS);
    assert!(!fleet.all_sunk());
}
