use proptest::prelude::*;
use rand::{rngs::SmallRng, Rng, SeedableRng};
use skirmish::{Cell, Direction, Gameboard, Ship};

/// Board with a few ships dropped at random; refused placements are skipped.
fn random_board(seed: u64) -> Gameboard {
    let mut rng = SmallRng::seed_from_u64(seed);
    let mut board = Gameboard::default();
    for length in [5, 4, 3, 3, 2] {
        let direction = if rng.random() {
            Direction::Horizontal
        } else {
            Direction::Vertical
        };
        let x = rng.random_range(0..10);
        let y = rng.random_range(0..10);
        let _ = board.place_ship(Ship::new(length), x, y, direction);
    }
    board
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn sunk_iff_hits_reach_length(length in 0usize..8, hits in 0usize..12) {
        let mut ship = Ship::new(length);
        for _ in 0..hits {
            ship.hit();
        }
        prop_assert_eq!(ship.is_sunk(), hits >= length);
    }

    #[test]
    fn resolved_cells_never_revert(seed in any::<u64>(), attacks in proptest::collection::vec((0usize..10, 0usize..10), 1..150)) {
        let mut board = random_board(seed);
        let mut resolved = Vec::new();
        for (x, y) in attacks {
            board.receive_attack(x, y).unwrap();
            resolved.push((x, y));
            for &(rx, ry) in &resolved {
                let cell = board.cell(rx, ry).unwrap();
                prop_assert!(matches!(cell, Cell::Hit | Cell::Miss));
            }
        }
    }

    #[test]
    fn every_cell_hit_at_most_once(seed in any::<u64>(), attacks in proptest::collection::vec((0usize..10, 0usize..10), 0..300)) {
        let mut board = random_board(seed);
        let mut hits = 0;
        let mut misses = 0;
        for (x, y) in attacks {
            if board.receive_attack(x, y).unwrap().is_hit() {
                hits += 1;
            } else {
                misses += 1;
            }
        }
        let hits_taken: usize = board.ships().iter().map(|s| s.hits()).sum();
        prop_assert_eq!(hits, hits_taken);
        prop_assert_eq!(misses, board.missed_attacks().len());
        for ship in board.ships() {
            prop_assert!(ship.hits() <= ship.length());
        }
    }

    #[test]
    fn clearing_every_cell_sinks_everything(seed in any::<u64>()) {
        let mut board = random_board(seed);
        for y in 0..10 {
            for x in 0..10 {
                board.receive_attack(x, y).unwrap();
            }
        }
        prop_assert!(board.all_ships_sunk());
        prop_assert_eq!(board.ships_afloat(), 0);
    }
}
