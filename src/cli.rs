//! Command-line interface for quadline.

use clap::Parser;
use quadline::{PlayerKind, RendererKind};

/// Quadline - four-in-a-row tournaments on a 6x6 grid
#[derive(Parser, Debug)]
#[command(name = "quadline")]
#[command(about = "Play four-in-a-row tournaments between scripted or human players", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Number of rounds to play.
    pub rounds: u32,

    /// Board renderer.
    #[arg(value_enum)]
    pub renderer: RendererKind,

    /// Strategy for player one.
    #[arg(value_enum)]
    pub player1: PlayerKind,

    /// Strategy for player two.
    #[arg(value_enum)]
    pub player2: PlayerKind,

    /// Seed for the strategy RNGs; omit for a random seed.
    #[arg(long)]
    pub seed: Option<u64>,
}
