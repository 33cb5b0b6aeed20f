//! Integration tests for the board state machine.

use quadline::{Board, Mark, SIZE, WIN_STREAK};

#[test]
fn every_cell_accepts_exactly_one_mark() {
    for row in 0..SIZE {
        for col in 0..SIZE {
            let mut board = Board::new();
            assert!(board.place(Mark::X, row, col), "fresh cell ({row},{col})");
            assert!(!board.place(Mark::X, row, col), "repeat same mark");
            assert!(!board.place(Mark::O, row, col), "repeat other mark");
            assert_eq!(board.placed(), 1);
        }
    }
}

#[test]
fn horizontal_streak_wins_on_completing_placement_only() {
    let mut board = Board::new();
    board.place(Mark::X, 0, 0);
    board.place(Mark::X, 0, 1);
    board.place(Mark::X, 0, 2);
    assert!(board.winner().is_none(), "three in a row is not terminal");
    assert!(!board.is_terminal());

    assert!(board.place(Mark::X, 0, 3));
    assert_eq!(board.winner(), Some(Mark::X));
    assert!(board.is_terminal());
}

#[test]
fn vertical_streak_wins() {
    let mut board = Board::new();
    for row in 2..2 + WIN_STREAK {
        assert!(board.winner().is_none());
        board.place(Mark::O, row, 4);
    }
    assert_eq!(board.winner(), Some(Mark::O));
}

#[test]
fn down_right_diagonal_wins() {
    let mut board = Board::new();
    for i in 0..WIN_STREAK {
        assert!(board.winner().is_none());
        board.place(Mark::X, 1 + i, 2 + i);
    }
    assert_eq!(board.winner(), Some(Mark::X));
}

#[test]
fn down_left_diagonal_wins() {
    let mut board = Board::new();
    for i in 0..WIN_STREAK {
        assert!(board.winner().is_none());
        board.place(Mark::O, 1 + i, 4 - i);
    }
    assert_eq!(board.winner(), Some(Mark::O));
}

#[test]
fn longer_than_minimum_streak_wins() {
    // X X _ X X becomes a run of five when the gap is filled.
    let mut board = Board::new();
    for col in [0, 1, 3, 4] {
        board.place(Mark::X, 2, col);
        assert!(board.winner().is_none());
    }
    assert!(board.place(Mark::X, 2, 2));
    assert_eq!(board.winner(), Some(Mark::X));
}

// An 18/18 layout with no four-in-a-row on any axis.
const DRAW_ROWS: [&str; 6] = [
    "XXOOXX", "XXOOXX", "OOXXOO", "XXOOXX", "OOXXOO", "OOXXOO",
];

fn draw_cells(mark: char) -> Vec<(i32, i32)> {
    let mut cells = Vec::new();
    for (row, pattern) in DRAW_ROWS.iter().enumerate() {
        for (col, cell) in pattern.chars().enumerate() {
            if cell == mark {
                cells.push((row as i32, col as i32));
            }
        }
    }
    cells
}

#[test]
fn full_board_without_streak_is_a_draw() {
    let mut board = Board::new();
    // Alternate X and O placements the way real turns would.
    let crosses = draw_cells('X');
    let noughts = draw_cells('O');
    assert_eq!(crosses.len(), noughts.len());
    for (&(xr, xc), &(or, oc)) in crosses.iter().zip(&noughts) {
        assert!(board.winner().is_none());
        assert!(board.place(Mark::X, xr, xc));
        assert!(board.place(Mark::O, or, oc));
    }
    assert_eq!(board.placed(), (SIZE * SIZE) as usize);
    assert_eq!(board.winner(), Some(Mark::Blank), "draw sentinel");
    assert!(board.is_terminal());
}
