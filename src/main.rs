//! Tic-tac-toe with a replayable move history - CLI entry point.

#![warn(missing_docs)]

mod cli;

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Command};
use tictactoe_rewind::{GameState, Position, tui};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Command::Tui {
            ascending,
            log_file,
        } => tui::run(ascending, &log_file),
        Command::Replay { moves, json } => run_replay(&moves, json),
    }
}

/// Applies the given cell indices in order, printing each resulting board
/// and the final status.
fn run_replay(moves: &[usize], json: bool) -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    info!(count = moves.len(), "replaying move sequence");

    let mut game = GameState::new();
    for &index in moves {
        let Some(position) = Position::from_index(index) else {
            anyhow::bail!("invalid cell index {index}, expected 0-8");
        };
        game.apply_move(position);
        println!("{}\n", game.board().display());
    }
    println!("{}", game.status());

    if json {
        println!("{}", serde_json::to_string_pretty(&game)?);
    }

    Ok(())
}
