//! Multi-round tournament with seat-aware score bookkeeping.

use crate::board::Mark;
use crate::orchestrator::Orchestrator;
use crate::players::PlayerKind;
use crate::render::Renderer;
use anyhow::Result;
use derive_getters::Getters;
use derive_more::Display;
use rand::Rng;
use tracing::{debug, info, instrument};

/// Accumulated results of a tournament.
///
/// `first` and `second` count wins for the configured player one and two,
/// not for the `X` and `O` seats, which alternate every round.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Getters, Display)]
#[display("=== player 1: {first} | player 2: {second} | draws: {draws} ===")]
pub struct Standings {
    first: u32,
    second: u32,
    draws: u32,
}

impl Standings {
    /// Records one round's outcome. `round` determines which player opened
    /// as `X`: player one on even rounds, player two on odd ones.
    pub fn record(&mut self, round: u32, winner: Mark) {
        let first_opened = round % 2 == 0;
        match winner {
            Mark::X if first_opened => self.first += 1,
            Mark::X => self.second += 1,
            Mark::O if first_opened => self.second += 1,
            Mark::O => self.first += 1,
            Mark::Blank => self.draws += 1,
        }
    }
}

/// Plays a configured number of rounds between two player kinds.
///
/// Every round gets fresh player instances, so per-match strategy state
/// (momentum cursors) never leaks between rounds, and their RNGs are forked
/// from the tournament's base RNG for reproducible runs.
pub struct Tournament<R: Rng> {
    rounds: u32,
    first: PlayerKind,
    second: PlayerKind,
    rng: R,
}

impl<R: Rng> Tournament<R> {
    /// Creates a tournament over `rounds` rounds.
    pub fn new(rounds: u32, first: PlayerKind, second: PlayerKind, rng: R) -> Self {
        Self {
            rounds,
            first,
            second,
            rng,
        }
    }

    /// Plays every round and returns the final standings.
    #[instrument(skip(self, renderer), fields(rounds = self.rounds, first = %self.first, second = %self.second))]
    pub fn play(&mut self, renderer: &mut dyn Renderer) -> Result<Standings> {
        let mut standings = Standings::default();
        for round in 0..self.rounds {
            let (opener, responder) = if round % 2 == 0 {
                (self.first, self.second)
            } else {
                (self.second, self.first)
            };
            let mut game = Orchestrator::new(
                opener.build(&mut self.rng),
                responder.build(&mut self.rng),
            );
            let winner = game.run(renderer)?;
            standings.record(round, winner);
            debug!(round, %winner, "round recorded");
        }
        info!(%standings, "tournament finished");
        Ok(standings)
    }
}
