//! Command-line interface.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Tic-tac-toe with a replayable move history
#[derive(Parser, Debug)]
#[command(name = "tictactoe_rewind")]
#[command(about = "Tic-tac-toe with a replayable move history", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play interactively in the terminal
    Tui {
        /// Show the move list oldest-first
        #[arg(long)]
        ascending: bool,

        /// Log file path
        #[arg(long, default_value = "tictactoe_rewind.log")]
        log_file: PathBuf,
    },

    /// Apply a sequence of cell indices headlessly and print each board
    Replay {
        /// Cell indices (0-8) in play order
        #[arg(required = true)]
        moves: Vec<usize>,

        /// Emit the final game state as JSON
        #[arg(long)]
        json: bool,
    },
}
