//! Momentum-only player.

use super::Player;
use crate::board::{Board, Mark};
use crate::cursor::MomentumCursor;
use anyhow::Result;
use rand::Rng;

/// Extends placements in its current direction every turn, building streaks
/// faster than random play.
pub struct MomentumPlayer<R: Rng> {
    name: String,
    cursor: MomentumCursor,
    rng: R,
}

impl<R: Rng> MomentumPlayer<R> {
    /// Creates a player with a randomly positioned cursor.
    pub fn new(mut rng: R) -> Self {
        let cursor = MomentumCursor::random(&mut rng);
        Self::with_cursor(cursor, rng)
    }

    /// Creates a player with an explicit starting cursor.
    pub fn with_cursor(cursor: MomentumCursor, rng: R) -> Self {
        Self {
            name: "momentum".to_string(),
            cursor,
            rng,
        }
    }
}

impl<R: Rng> Player for MomentumPlayer<R> {
    fn play_turn(&mut self, board: &mut Board, mark: Mark) -> Result<()> {
        self.cursor.advance(board, mark, &mut self.rng);
        Ok(())
    }

    fn name(&self) -> &str {
        &self.name
    }
}
