//! Grid state machine: cell contents, placement validation, win/draw detection.

use crate::direction::Direction;
use tracing::debug;

/// Board dimension (the grid is `SIZE` x `SIZE`).
pub const SIZE: i32 = 6;

/// Run length that ends the game with a winner.
pub const WIN_STREAK: i32 = 4;

const CELLS: usize = SIZE as usize;

/// A mark occupying one cell of the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, strum::Display)]
pub enum Mark {
    /// First player's mark.
    X,
    /// Second player's mark.
    O,
    /// Unoccupied cell; also the draw sentinel in [`Board::winner`].
    Blank,
}

impl Mark {
    /// The mark of the opposing player (`Blank` has no opponent).
    pub fn opponent(self) -> Self {
        match self {
            Mark::X => Mark::O,
            Mark::O => Mark::X,
            Mark::Blank => Mark::Blank,
        }
    }

    /// One-character cell representation for rendering.
    pub fn symbol(self) -> char {
        match self {
            Mark::X => 'X',
            Mark::O => 'O',
            Mark::Blank => '.',
        }
    }
}

/// The board on which a single match is played.
///
/// Mutated only through [`Board::place`]; all invalid operations degrade to
/// a `false` return or a `Blank` read rather than panicking.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    cells: [[Mark; CELLS]; CELLS],
    placed: usize,
    winner: Option<Mark>,
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Board {
    /// Creates an empty board.
    pub fn new() -> Self {
        Self {
            cells: [[Mark::Blank; CELLS]; CELLS],
            placed: 0,
            winner: None,
        }
    }

    /// Whether the coordinates fall inside the board.
    pub fn in_range(&self, row: i32, col: i32) -> bool {
        (0..SIZE).contains(&row) && (0..SIZE).contains(&col)
    }

    /// The mark at the given coordinates, `Blank` when out of range.
    pub fn mark_at(&self, row: i32, col: i32) -> Mark {
        if self.in_range(row, col) {
            self.cells[row as usize][col as usize]
        } else {
            Mark::Blank
        }
    }

    /// Places `mark` at the given coordinates.
    ///
    /// Succeeds iff the mark is `X` or `O`, the coordinates are in range and
    /// the cell is empty. Returns `false` with no mutation otherwise. A
    /// successful placement re-evaluates the terminal state around the placed
    /// cell; a winner, once decided, is never overwritten.
    pub fn place(&mut self, mark: Mark, row: i32, col: i32) -> bool {
        if mark == Mark::Blank || !self.in_range(row, col) || self.mark_at(row, col) != Mark::Blank
        {
            return false;
        }
        self.cells[row as usize][col as usize] = mark;
        self.placed += 1;
        self.update_winner(mark, row, col);
        true
    }

    /// Number of occupied cells.
    pub fn placed(&self) -> usize {
        self.placed
    }

    /// The match outcome: `None` while ongoing, `Some(Blank)` for a draw,
    /// otherwise the winning mark.
    pub fn winner(&self) -> Option<Mark> {
        self.winner
    }

    /// Whether the match is decided (win or draw).
    pub fn is_terminal(&self) -> bool {
        self.winner.is_some()
    }

    // Incremental terminal check around the just-placed cell. Each axis sums
    // the two opposed directional counts, which both include the placed cell.
    fn update_winner(&mut self, mark: Mark, row: i32, col: i32) {
        if self.winner.is_some() {
            return;
        }
        for (forward, backward) in Direction::AXES {
            let run = self.count_along(mark, row, col, forward)
                + self.count_along(mark, row, col, backward)
                - 1;
            if run >= WIN_STREAK {
                debug!(%mark, row, col, run, "winning streak completed");
                self.winner = Some(mark);
                return;
            }
        }
        if self.placed == (SIZE * SIZE) as usize {
            debug!("board full with no streak, draw");
            self.winner = Some(Mark::Blank);
        }
    }

    // Consecutive `mark` cells starting at (row, col) and walking `direction`,
    // the origin included.
    fn count_along(&self, mark: Mark, row: i32, col: i32, direction: Direction) -> i32 {
        let (row_delta, col_delta) = direction.delta();
        let (mut row, mut col) = (row, col);
        let mut count = 0;
        while self.in_range(row, col) && self.cells[row as usize][col as usize] == mark {
            count += 1;
            row += row_delta;
            col += col_delta;
        }
        count
    }
}
