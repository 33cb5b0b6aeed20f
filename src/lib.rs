//! Quadline - four-in-a-row on a 6x6 grid
//!
//! Two players alternate placing marks; the first contiguous line of four
//! (horizontal, vertical or diagonal) wins, and a full grid with no line is
//! a draw.
//!
//! # Architecture
//!
//! - **Board**: grid state machine with incremental win detection
//! - **Players**: scripted strategies (random, momentum, tactical) and a
//!   human pass-through, all behind the [`Player`] trait
//! - **Renderers**: console and headless implementations of [`Renderer`]
//! - **Orchestrator**: drives one match to its terminal state
//! - **Tournament**: multi-round play with seat-aware standings

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod board;
mod cursor;
mod direction;
mod orchestrator;
mod players;
mod render;
mod threat;
mod tournament;

// Crate-level exports - board state machine
pub use board::{Board, Mark, SIZE, WIN_STREAK};

// Crate-level exports - movement and threat heuristics
pub use cursor::MomentumCursor;
pub use direction::Direction;
pub use threat::completing_cell;

// Crate-level exports - players
pub use players::{
    HumanPlayer, InputClosed, MomentumPlayer, Player, PlayerKind, RandomPlayer, TacticalPlayer,
};

// Crate-level exports - renderers
pub use render::{ConsoleRenderer, Renderer, RendererKind, VoidRenderer};

// Crate-level exports - match and tournament drivers
pub use orchestrator::Orchestrator;
pub use tournament::{Standings, Tournament};
