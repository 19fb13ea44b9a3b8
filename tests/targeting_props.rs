use std::collections::HashSet;

use proptest::prelude::*;
use rand::{rngs::SmallRng, SeedableRng};
use shipsinkers::{generate_fleet, Board, Difficulty, Targeting, SHIP_LENGTHS};

fn any_difficulty() -> impl Strategy<Value = Difficulty> {
    prop::sample::select(Difficulty::ALL.to_vec())
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    /// Play the opponent against a random fleet until it sinks, checking the
    /// strategy's guarantees after every shot.
    #[test]
    fn pick_shot_never_repeats(seed in any::<u64>(), difficulty in any_difficulty()) {
        let mut rng = SmallRng::seed_from_u64(seed);
        let fleet = generate_fleet(&mut rng, &SHIP_LENGTHS).unwrap();
        let mut board = Board::with_fleet(fleet);
        let mut ai = Targeting::new(difficulty);

        let mut turns = 0;
        while !board.all_sunk() {
            turns += 1;
            prop_assert!(turns <= 100);

            let shots = board.shots();
            let cell = ai.pick_shot(&mut rng, &shots, board.fleet()).unwrap();
            prop_assert!(!shots.contains(cell), "{} picked twice", cell);

            let result = board.receive_shot(cell).unwrap();
            ai.observe(cell, result, &board.shots());

            let queue = ai.memory().queue();
            let unique: HashSet<_> = queue.iter().collect();
            prop_assert_eq!(unique.len(), queue.len());

            if difficulty == Difficulty::Hard && result.is_hit() {
                if let [.., prev, last] = ai.memory().hits() {
                    if last.is_right_of(*prev) {
                        prop_assert!(queue.iter().all(|c| c.is_horizontal_neighbor(*last)));
                    } else if last.is_below(*prev) {
                        prop_assert!(queue.iter().all(|c| c.is_vertical_neighbor(*last)));
                    }
                }
            }

            ai.settle(board.fleet());
            if ai.memory().hits().iter().all(|&h| !board.fleet().live_ship_occupies(h)) {
                prop_assert!(ai.memory().is_empty());
            }
        }
        if difficulty == Difficulty::Impossible {
            prop_assert_eq!(turns, 16);
        }
    }
}
