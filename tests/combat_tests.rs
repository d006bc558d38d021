use battleships::{
    attack, is_game_over, place_custom, random_attack, AttackOutcome, Board, Fleet, Layout,
    Orientation,
};
use rand::rngs::SmallRng;
use rand::SeedableRng;

/// Board with a single Carrier across row 0, columns 0..5.
fn carrier_board() -> (Board, Fleet) {
    let mut board = Board::default();
    let fleet = Fleet::from_pairs([("Carrier", 5u32)]);
    let mut layout = Layout::default();
    layout.insert("Carrier", 0, 0, Orientation::Horizontal);
    place_custom(&mut board, &fleet, &layout).unwrap();
    (board, fleet)
}

#[test]
fn test_hit_clears_cell_and_decrements() {
    let (mut board, mut fleet) = carrier_board();
    assert_eq!(attack((0, 0), &mut board, &mut fleet), AttackOutcome::Hit);
    assert_eq!(board.cell(0, 0), None);
    assert_eq!(fleet.remaining("Carrier"), Some(4));
}

#[test]
fn test_miss_on_empty_cell_mutates_nothing() {
    let (mut board, mut fleet) = carrier_board();
    assert_eq!(attack((9, 9), &mut board, &mut fleet), AttackOutcome::Miss);
    assert_eq!(fleet.remaining("Carrier"), Some(5));
    assert_eq!(board.occupied_cells().count(), 5);
}

#[test]
fn test_out_of_bounds_attack_is_a_miss_not_an_error() {
    let (mut board, mut fleet) = carrier_board();
    assert_eq!(attack((20, 20), &mut board, &mut fleet), AttackOutcome::Miss);
    assert_eq!(attack((0, 10), &mut board, &mut fleet), AttackOutcome::Miss);
    assert_eq!(fleet.remaining("Carrier"), Some(5));
    assert_eq!(board.occupied_cells().count(), 5);
}

#[test]
fn test_repeat_attack_is_an_idempotent_miss() {
    let (mut board, mut fleet) = carrier_board();
    assert_eq!(attack((3, 0), &mut board, &mut fleet), AttackOutcome::Hit);
    assert_eq!(fleet.remaining("Carrier"), Some(4));
    assert_eq!(attack((3, 0), &mut board, &mut fleet), AttackOutcome::Miss);
    assert_eq!(attack((3, 0), &mut board, &mut fleet), AttackOutcome::Miss);
    assert_eq!(fleet.remaining("Carrier"), Some(4));
}

#[test]
fn test_coordinates_are_column_then_row() {
    let (mut board, mut fleet) = carrier_board();
    // ship lies along row 0, so (col 2, row 0) hits and (col 0, row 2) misses
    assert_eq!(attack((2, 0), &mut board, &mut fleet), AttackOutcome::Hit);
    assert_eq!(attack((0, 2), &mut board, &mut fleet), AttackOutcome::Miss);
}

#[test]
fn test_sinking_a_ship() {
    let mut board = Board::default();
    let mut fleet = Fleet::from_pairs([("Destroyer", 2u32)]);
    let mut layout = Layout::default();
    layout.insert("Destroyer", 3, 3, Orientation::Vertical);
    place_custom(&mut board, &fleet, &layout).unwrap();

    assert_eq!(attack((3, 3), &mut board, &mut fleet), AttackOutcome::Hit);
    assert!(!fleet.is_sunk("Destroyer"));
    assert_eq!(attack((3, 4), &mut board, &mut fleet), AttackOutcome::Hit);
    assert!(fleet.is_sunk("Destroyer"));
    assert_eq!(fleet.remaining("Destroyer"), Some(0));
    assert!(is_game_over(&board));
}

#[test]
fn test_game_over_detection() {
    // an all-empty board is game over by definition
    assert!(is_game_over(&Board::default()));

    let (mut board, mut fleet) = carrier_board();
    assert!(!is_game_over(&board));
    for col in 0..5 {
        attack((col, 0), &mut board, &mut fleet);
    }
    assert!(is_game_over(&board));
}

#[test]
fn test_random_attack_stays_on_the_board() {
    let mut rng = SmallRng::seed_from_u64(11);
    for _ in 0..200 {
        let (col, row) = random_attack(&mut rng, 5);
        assert!(col < 5 && row < 5);
    }
}
