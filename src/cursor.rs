//! Directional momentum heuristic: keep extending placements one way to
//! build streaks quickly, re-planning only when blocked.

use crate::board::{Board, Mark, SIZE};
use crate::direction::Direction;
use rand::Rng;
use strum::IntoEnumIterator;
use tracing::debug;

/// Last-placed position plus a current heading, owned by exactly one
/// strategy instance for the duration of one match.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MomentumCursor {
    row: i32,
    col: i32,
    direction: Direction,
}

impl MomentumCursor {
    /// Creates a cursor at the given position and heading.
    pub fn new(row: i32, col: i32, direction: Direction) -> Self {
        Self {
            row,
            col,
            direction,
        }
    }

    /// Creates a cursor at a uniformly random cell, heading up.
    pub fn random<R: Rng>(rng: &mut R) -> Self {
        Self::new(
            rng.random_range(0..SIZE),
            rng.random_range(0..SIZE),
            Direction::Up,
        )
    }

    /// Current cursor row.
    pub fn row(&self) -> i32 {
        self.row
    }

    /// Current cursor column.
    pub fn col(&self) -> i32 {
        self.col
    }

    /// Current heading.
    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// The cell one step ahead of the cursor. May be occupied or out of
    /// range; the caller finds out by attempting the placement.
    pub fn next_candidate(&self) -> (i32, i32) {
        let (row_delta, col_delta) = self.direction.delta();
        (self.row + row_delta, self.col + col_delta)
    }

    /// Picks a new heading after a rejected candidate.
    ///
    /// Probes the eight neighbors of the cursor in declaration order and
    /// takes the first open one. When the whole neighborhood is closed, the
    /// cursor jumps to a uniformly random cell instead, keeping its heading.
    pub fn replan<R: Rng>(&mut self, board: &Board, rng: &mut R) {
        for direction in Direction::iter() {
            let (row_delta, col_delta) = direction.delta();
            let (row, col) = (self.row + row_delta, self.col + col_delta);
            if board.in_range(row, col) && board.mark_at(row, col) == Mark::Blank {
                debug!(%direction, "replanned heading");
                self.direction = direction;
                return;
            }
        }
        self.row = rng.random_range(0..SIZE);
        self.col = rng.random_range(0..SIZE);
        debug!(row = self.row, col = self.col, "neighborhood saturated, cursor jumped");
    }

    /// Plays one momentum move: propose, place, replan on rejection, repeat
    /// until the board accepts. The cursor moves to the accepted cell.
    ///
    /// Terminates whenever the board has an empty cell, which the caller
    /// guarantees by only taking turns on a non-terminal board.
    pub fn advance<R: Rng>(&mut self, board: &mut Board, mark: Mark, rng: &mut R) -> (i32, i32) {
        let (mut row, mut col) = self.next_candidate();
        while !board.place(mark, row, col) {
            self.replan(board, rng);
            (row, col) = self.next_candidate();
        }
        self.row = row;
        self.col = col;
        debug!(%mark, row, col, "momentum placement");
        (row, col)
    }
}
