//! Uniformly random player.

use super::Player;
use crate::board::{Board, Mark, SIZE};
use anyhow::Result;
use rand::Rng;
use tracing::debug;

/// Picks evenly distributed cells until the board accepts one.
pub struct RandomPlayer<R: Rng> {
    name: String,
    rng: R,
}

impl<R: Rng> RandomPlayer<R> {
    /// Creates a new random player.
    pub fn new(rng: R) -> Self {
        Self {
            name: "random".to_string(),
            rng,
        }
    }
}

impl<R: Rng> Player for RandomPlayer<R> {
    fn play_turn(&mut self, board: &mut Board, mark: Mark) -> Result<()> {
        loop {
            let row = self.rng.random_range(0..SIZE);
            let col = self.rng.random_range(0..SIZE);
            if board.place(mark, row, col) {
                debug!(player = %self.name, %mark, row, col, "placed");
                return Ok(());
            }
        }
    }

    fn name(&self) -> &str {
        &self.name
    }
}
