//! Threat scanner: finds empty cells whose marking would complete a winning
//! streak for a given mark.

use crate::board::{Board, Mark, SIZE, WIN_STREAK};
use crate::direction::Direction;
use rand::Rng;
use rand::seq::IndexedRandom;
use tracing::debug;

/// Finds a cell that, if marked with `mark`, completes a streak of
/// [`WIN_STREAK`].
///
/// Scans every origin in row-major order; for each win axis the existing
/// streak of `mark` is counted outward in both directions, and when it is
/// exactly one short of winning, the empty in-range cell immediately beyond
/// either end completes it. One candidate is chosen uniformly at random among
/// all distinct completions, so play is not deterministically exploitable.
///
/// The scan never mutates the board. Returns `None` when nothing completes a
/// streak, or when `mark` is `Blank`.
pub fn completing_cell<R: Rng>(board: &Board, mark: Mark, rng: &mut R) -> Option<(i32, i32)> {
    if mark == Mark::Blank {
        return None;
    }
    let mut candidates = Vec::new();
    for row in 0..SIZE {
        for col in 0..SIZE {
            collect_completions(board, mark, row, col, &mut candidates);
        }
    }
    candidates.sort_unstable();
    candidates.dedup();
    debug!(%mark, count = candidates.len(), "completion scan finished");
    candidates.choose(rng).copied()
}

// Candidates for a single origin cell: per axis, the combined directional
// counts double-count the origin, so the streak is their sum minus one.
fn collect_completions(
    board: &Board,
    mark: Mark,
    row: i32,
    col: i32,
    candidates: &mut Vec<(i32, i32)>,
) {
    for (forward, backward) in Direction::AXES {
        let (ahead, open_ahead) = probe(board, mark, row, col, forward);
        let (behind, open_behind) = probe(board, mark, row, col, backward);
        if ahead + behind - 1 == WIN_STREAK - 1 {
            candidates.extend(open_ahead);
            candidates.extend(open_behind);
        }
    }
}

// Walks from the origin while cells hold `mark`; reports the count and the
// stopping cell when it is an empty in-range extension of the streak.
fn probe(
    board: &Board,
    mark: Mark,
    row: i32,
    col: i32,
    direction: Direction,
) -> (i32, Option<(i32, i32)>) {
    let (row_delta, col_delta) = direction.delta();
    let (mut row, mut col) = (row, col);
    let mut count = 0;
    while board.in_range(row, col) && board.mark_at(row, col) == mark {
        count += 1;
        row += row_delta;
        col += col_delta;
    }
    let open = (board.in_range(row, col) && board.mark_at(row, col) == Mark::Blank)
        .then_some((row, col));
    (count, open)
}
