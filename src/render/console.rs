//! Plain-text board renderer.

use super::Renderer;
use crate::board::{Board, SIZE};
use std::io::{Stdout, Write};

/// Writes the board as a text grid with one-based row and column headers.
pub struct ConsoleRenderer<W: Write> {
    out: W,
}

impl ConsoleRenderer<Stdout> {
    /// Creates a renderer writing to standard output.
    pub fn stdout() -> Self {
        Self::new(std::io::stdout())
    }
}

impl<W: Write> ConsoleRenderer<W> {
    /// Creates a renderer writing to the given sink.
    pub fn new(out: W) -> Self {
        Self { out }
    }
}

impl<W: Write> Renderer for ConsoleRenderer<W> {
    fn render(&mut self, board: &Board) {
        let mut text = String::new();
        text.push_str("   ");
        for col in 1..=SIZE {
            text.push_str(&format!("{col} "));
        }
        text.push('\n');
        for row in 0..SIZE {
            text.push_str(&format!(" {} ", row + 1));
            for col in 0..SIZE {
                text.push(board.mark_at(row, col).symbol());
                text.push(' ');
            }
            text.push('\n');
        }
        // Rendering is observational; a broken pipe must not end the match.
        writeln!(self.out, "{text}").ok();
        self.out.flush().ok();
    }
}
