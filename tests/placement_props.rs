use battleships::{attack, is_game_over, place_random, AttackOutcome, Board, Fleet};
use proptest::prelude::*;
use rand::rngs::SmallRng;
use rand::SeedableRng;

fn classic_fleet() -> Fleet {
    Fleet::from_pairs([
        ("Carrier", 5u32),
        ("Battleship", 4),
        ("Cruiser", 3),
        ("Submarine", 3),
        ("Destroyer", 2),
    ])
}

fn ship_cells(board: &Board, name: &str) -> Vec<(usize, usize)> {
    board
        .occupied_cells()
        .filter(|(_, _, n)| *n == name)
        .map(|(r, c, _)| (r, c))
        .collect()
}

fn is_contiguous(cells: &[(usize, usize)]) -> bool {
    let across = cells
        .windows(2)
        .all(|w| w[1].0 == w[0].0 && w[1].1 == w[0].1 + 1);
    let down = cells
        .windows(2)
        .all(|w| w[1].1 == w[0].1 && w[1].0 == w[0].0 + 1);
    across || down
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn small_fleet_places_on_any_board(seed in any::<u64>(), size in 5usize..=10) {
        let mut rng = SmallRng::seed_from_u64(seed);
        let fleet = Fleet::from_pairs([("A", 3u32), ("B", 2)]);
        let mut board = Board::new(size).unwrap();
        place_random(&mut board, &fleet, &mut rng).unwrap();

        prop_assert_eq!(board.occupied_cells().count(), 5);
        for (name, length) in fleet.iter() {
            let cells = ship_cells(&board, name);
            prop_assert_eq!(cells.len(), length as usize);
            prop_assert!(is_contiguous(&cells));
        }
    }

    // 7x7 and up leaves enough slack that the 100-attempt budget cannot
    // realistically be exhausted for the classic fleet.
    #[test]
    fn classic_fleet_spans_are_disjoint(seed in any::<u64>(), size in 7usize..=10) {
        let mut rng = SmallRng::seed_from_u64(seed);
        let fleet = classic_fleet();
        let mut board = Board::new(size).unwrap();
        place_random(&mut board, &fleet, &mut rng).unwrap();

        prop_assert_eq!(board.occupied_cells().count(), 17);
        for (name, length) in fleet.iter() {
            let cells = ship_cells(&board, name);
            prop_assert_eq!(cells.len(), length as usize);
            prop_assert!(is_contiguous(&cells));
        }
    }

    #[test]
    fn bombarding_every_cell_ends_the_game(seed in any::<u64>()) {
        let mut rng = SmallRng::seed_from_u64(seed);
        let mut fleet = classic_fleet();
        let mut board = Board::default();
        place_random(&mut board, &fleet, &mut rng).unwrap();

        let mut hits = 0;
        for row in 0..board.size() {
            for col in 0..board.size() {
                if attack((col, row), &mut board, &mut fleet) == AttackOutcome::Hit {
                    hits += 1;
                }
            }
        }
        prop_assert_eq!(hits, 17);
        prop_assert!(is_game_over(&board));
        for (name, remaining) in fleet.iter() {
            prop_assert_eq!(remaining, 0);
            prop_assert!(fleet.is_sunk(name));
        }
    }
}
