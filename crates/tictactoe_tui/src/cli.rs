//! Command-line interface for the terminal client.

use clap::Parser;
use std::path::PathBuf;

/// Two-player tic-tac-toe in the terminal.
#[derive(Parser, Debug)]
#[command(name = "tictactoe")]
#[command(about = "Two-player tic-tac-toe in the terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    /// File to write log output to. The terminal itself is owned by the UI,
    /// so tracing never writes there.
    #[arg(long, default_value = "tictactoe_tui.log")]
    pub log_file: PathBuf,
}
