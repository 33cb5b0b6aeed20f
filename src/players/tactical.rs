//! Threat-aware player: win, block, or fall back to momentum.

use super::Player;
use crate::board::{Board, Mark};
use crate::cursor::MomentumCursor;
use crate::threat;
use anyhow::Result;
use rand::Rng;
use tracing::debug;

/// Takes an immediate win when one exists, otherwise blocks an imminent
/// opponent win, otherwise plays momentum like [`super::MomentumPlayer`].
pub struct TacticalPlayer<R: Rng> {
    name: String,
    cursor: MomentumCursor,
    rng: R,
}

impl<R: Rng> TacticalPlayer<R> {
    /// Creates a player with a randomly positioned fallback cursor.
    pub fn new(mut rng: R) -> Self {
        let cursor = MomentumCursor::random(&mut rng);
        Self::with_cursor(cursor, rng)
    }

    /// Creates a player with an explicit fallback cursor.
    pub fn with_cursor(cursor: MomentumCursor, rng: R) -> Self {
        Self {
            name: "tactical".to_string(),
            cursor,
            rng,
        }
    }
}

impl<R: Rng> Player for TacticalPlayer<R> {
    fn play_turn(&mut self, board: &mut Board, mark: Mark) -> Result<()> {
        // Each tier scans without touching the board; only the chosen cell
        // is placed. Win and block placements leave the cursor where it is.
        if let Some((row, col)) = threat::completing_cell(board, mark, &mut self.rng) {
            if board.place(mark, row, col) {
                debug!(player = %self.name, %mark, row, col, "winning placement");
                return Ok(());
            }
        }
        if let Some((row, col)) = threat::completing_cell(board, mark.opponent(), &mut self.rng) {
            if board.place(mark, row, col) {
                debug!(player = %self.name, %mark, row, col, "blocking placement");
                return Ok(());
            }
        }
        self.cursor.advance(board, mark, &mut self.rng);
        Ok(())
    }

    fn name(&self) -> &str {
        &self.name
    }
}
