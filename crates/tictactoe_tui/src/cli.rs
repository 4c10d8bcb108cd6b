//! Command-line interface for the tictactoe binary.

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tictactoe_core::Position;

/// Local two-player tic-tac-toe in the terminal
#[derive(Parser, Debug)]
#[command(name = "tictactoe")]
#[command(about = "Two-player tic-tac-toe for one keyboard", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the settings file (defaults are used if it does not exist)
    #[arg(short, long, default_value = "tictactoe.toml", global = true)]
    pub config: PathBuf,

    /// Log file for interactive play (overrides the settings file)
    #[arg(long, global = true)]
    pub log_file: Option<PathBuf>,

    /// Subcommand to run (defaults to `play`)
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Play interactively in the terminal
    Play,

    /// Feed cell labels through the game and print the result
    Replay {
        /// Cells to submit in order, as labels (1-9) or names ("center")
        #[arg(required = true, value_parser = parse_position)]
        positions: Vec<Position>,

        /// Print the result as JSON instead of a board
        #[arg(long)]
        json: bool,
    },
}

fn parse_position(s: &str) -> Result<Position, tictactoe_core::MoveError> {
    Position::parse(s)
}
