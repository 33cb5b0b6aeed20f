//! Human player that reads coordinates from an input stream.

use super::Player;
use crate::board::{Board, Mark};
use anyhow::Result;
use derive_more::{Display, Error};
use std::io::{BufRead, StdinLock};
use tracing::debug;

/// The input stream closed before a valid move was entered.
#[derive(Debug, Clone, Copy, Display, Error)]
#[display("input closed before a move was entered")]
pub struct InputClosed;

/// Prompts for a two-digit coordinate pair and retries until the board
/// accepts the placement.
///
/// Input follows the classic format: `23` means row 2, column 3, both
/// one-based.
pub struct HumanPlayer<I: BufRead> {
    name: String,
    input: I,
}

impl HumanPlayer<StdinLock<'static>> {
    /// Creates a player reading from standard input.
    pub fn from_stdin() -> Self {
        Self::new(std::io::stdin().lock())
    }
}

impl<I: BufRead> HumanPlayer<I> {
    /// Creates a player reading from the given stream.
    pub fn new(input: I) -> Self {
        Self {
            name: "human".to_string(),
            input,
        }
    }
}

impl<I: BufRead> Player for HumanPlayer<I> {
    fn play_turn(&mut self, board: &mut Board, mark: Mark) -> Result<()> {
        println!("Player {mark}, type coordinates:");
        loop {
            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0 {
                return Err(InputClosed.into());
            }
            let Ok(value) = line.trim().parse::<i32>() else {
                println!("Invalid coordinates, type again:");
                continue;
            };
            let (row, col) = (value / 10 - 1, value % 10 - 1);
            if board.place(mark, row, col) {
                debug!(player = %self.name, %mark, row, col, "placed");
                return Ok(());
            }
            println!("Invalid coordinates, type again:");
        }
    }

    fn name(&self) -> &str {
        &self.name
    }
}
