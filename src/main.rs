//! Quadline - four-in-a-row tournament runner.

#![warn(missing_docs)]

mod cli;

use anyhow::Result;
use clap::Parser;
use cli::Cli;
use quadline::Tournament;
use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .init();

    let cli = Cli::parse();
    info!(rounds = cli.rounds, renderer = %cli.renderer, player1 = %cli.player1, player2 = %cli.player2, "starting tournament");

    let rng = match cli.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };
    let mut renderer = cli.renderer.build();
    let mut tournament = Tournament::new(cli.rounds, cli.player1, cli.player2, rng);
    let standings = tournament.play(renderer.as_mut())?;

    println!("{standings}");
    Ok(())
}
