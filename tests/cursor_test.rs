//! Integration tests for the momentum movement heuristic.

use quadline::{Board, Direction, Mark, MomentumCursor, SIZE};
use rand::SeedableRng;
use rand::rngs::StdRng;

fn rng() -> StdRng {
    StdRng::seed_from_u64(11)
}

#[test]
fn marches_in_its_direction_on_an_open_board() {
    let mut board = Board::new();
    board.place(Mark::X, 0, 0);
    let mut cursor = MomentumCursor::new(0, 0, Direction::Down);
    let mut rng = rng();

    for expected_row in 1..SIZE {
        let cell = cursor.advance(&mut board, Mark::X, &mut rng);
        assert_eq!(cell, (expected_row, 0));
        assert_eq!(cursor.row(), expected_row);
        assert_eq!(cursor.col(), 0);
    }
}

#[test]
fn replans_at_the_edge_using_priority_order() {
    // Cursor at the bottom-left corner heading down: Down is off the board,
    // so the probe order picks Right first.
    let mut board = Board::new();
    board.place(Mark::X, 5, 0);
    let mut cursor = MomentumCursor::new(5, 0, Direction::Down);

    let cell = cursor.advance(&mut board, Mark::X, &mut rng());
    assert_eq!(cell, (5, 1));
    assert_eq!(cursor.direction(), Direction::Right);
}

#[test]
fn probe_order_skips_closed_neighbors() {
    // Down, Right and Up neighbors of (2,2) are occupied, so a rejected
    // candidate re-plans to Left.
    let mut board = Board::new();
    board.place(Mark::O, 1, 2); // Up (also the rejected candidate)
    board.place(Mark::O, 3, 2); // Down
    board.place(Mark::O, 2, 3); // Right
    let mut cursor = MomentumCursor::new(2, 2, Direction::Up);

    let cell = cursor.advance(&mut board, Mark::X, &mut rng());
    assert_eq!(cell, (2, 1));
    assert_eq!(cursor.direction(), Direction::Left);
}

#[test]
fn diagonal_is_chosen_when_no_straight_neighbor_is_open() {
    let mut board = Board::new();
    board.place(Mark::O, 1, 2); // Up
    board.place(Mark::O, 3, 2); // Down
    board.place(Mark::O, 2, 3); // Right
    board.place(Mark::O, 2, 1); // Left
    let mut cursor = MomentumCursor::new(2, 2, Direction::Up);

    let cell = cursor.advance(&mut board, Mark::X, &mut rng());
    assert_eq!(cell, (3, 3));
    assert_eq!(cursor.direction(), Direction::DownRight);
}

#[test]
fn saturated_neighborhood_jumps_to_an_open_cell() {
    // Fill rows 0..3 completely except one far-away cell, leaving the cursor
    // at (1,1) with every neighbor taken.
    let mut board = Board::new();
    for row in 0..3 {
        for col in 0..SIZE {
            board.place(Mark::O, row, col);
        }
    }
    let before = board.placed();
    let mut cursor = MomentumCursor::new(1, 1, Direction::Up);

    let (row, col) = cursor.advance(&mut board, Mark::X, &mut rng());
    assert!(row >= 3, "placement must land outside the saturated block");
    assert_eq!(board.mark_at(row, col), Mark::X);
    assert_eq!(board.placed(), before + 1);
    assert_eq!((cursor.row(), cursor.col()), (row, col));
}
