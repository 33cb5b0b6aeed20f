//! Match driver: alternates two players on one board until it is terminal.

use crate::board::{Board, Mark};
use crate::players::Player;
use crate::render::Renderer;
use anyhow::Result;
use derive_new::new;
use tracing::{debug, info};

/// Runs a single match between two players.
///
/// The first player always places `X` and the second `O`; round-order
/// bookkeeping across a tournament belongs to [`crate::Tournament`].
#[derive(new)]
pub struct Orchestrator {
    #[new(default)]
    board: Board,
    first: Box<dyn Player>,
    second: Box<dyn Player>,
}

impl Orchestrator {
    /// The board owned by this match.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Plays the match to completion and returns the board's outcome,
    /// `Mark::Blank` meaning a draw.
    pub fn run(&mut self, renderer: &mut dyn Renderer) -> Result<Mark> {
        info!(first = %self.first.name(), second = %self.second.name(), "match started");
        renderer.render(&self.board);
        let mut turn = 0usize;
        while !self.board.is_terminal() {
            let (player, mark) = if turn % 2 == 0 {
                (&mut self.first, Mark::X)
            } else {
                (&mut self.second, Mark::O)
            };
            player.play_turn(&mut self.board, mark)?;
            debug!(turn, %mark, "turn finished");
            renderer.render(&self.board);
            turn += 1;
        }
        let outcome = self.board.winner().unwrap_or(Mark::Blank);
        info!(%outcome, turns = turn, "match finished");
        Ok(outcome)
    }
}
