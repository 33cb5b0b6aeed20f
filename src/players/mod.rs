//! Player trait and strategy implementations.

mod human;
mod momentum;
mod random;
mod tactical;

pub use human::{HumanPlayer, InputClosed};
pub use momentum::MomentumPlayer;
pub use random::RandomPlayer;
pub use tactical::TacticalPlayer;

use crate::board::{Board, Mark};
use anyhow::Result;
use rand::Rng;
use rand::SeedableRng;
use rand::rngs::StdRng;

/// A participant that can take turns in a match.
pub trait Player {
    /// Performs exactly one successful placement of `mark` on the board.
    ///
    /// The board must not be terminal when this is called. Strategies retry
    /// internally until the board accepts a cell; only the human player can
    /// fail, and only when its input stream closes.
    fn play_turn(&mut self, board: &mut Board, mark: Mark) -> Result<()>;

    /// The player's display name.
    fn name(&self) -> &str;
}

/// The closed set of available player strategies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum, strum::Display)]
#[strum(serialize_all = "lowercase")]
pub enum PlayerKind {
    /// Uniformly random placement.
    Random,
    /// Directional momentum placement.
    Momentum,
    /// Win if possible, block if necessary, momentum otherwise.
    Tactical,
    /// Moves typed on standard input.
    Human,
}

impl PlayerKind {
    /// Builds a fresh player of this kind, forking its private RNG from
    /// `rng` so each instance stays independently reproducible.
    pub fn build<R: Rng>(self, rng: &mut R) -> Box<dyn Player> {
        match self {
            PlayerKind::Random => Box::new(RandomPlayer::new(StdRng::from_rng(rng))),
            PlayerKind::Momentum => Box::new(MomentumPlayer::new(StdRng::from_rng(rng))),
            PlayerKind::Tactical => Box::new(TacticalPlayer::new(StdRng::from_rng(rng))),
            PlayerKind::Human => Box::new(HumanPlayer::from_stdin()),
        }
    }
}
