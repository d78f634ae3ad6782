//! Command-line interface for the tic-tac-toe GUI.

use clap::Parser;

use crate::game::GameState;

/// Tic-tac-toe with move history and time travel
#[derive(Parser, Debug, Clone)]
#[command(name = "tictactoe")]
#[command(about = "Two-player tic-tac-toe with a time-travel move list", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Initial window width
    #[arg(long, default_value_t = 720.0)]
    pub width: f32,

    /// Initial window height
    #[arg(long, default_value_t = 480.0)]
    pub height: f32,

    /// Start with the move list reversed (newest move first)
    #[arg(long)]
    pub newest_first: bool,

    /// Tracing filter used when RUST_LOG is not set
    #[arg(long, default_value = "info")]
    pub log_level: String,
}

impl Cli {
    /// Starting snapshot for the configured move-list order
    pub fn initial_state(&self) -> GameState {
        GameState::with_sort_order(!self.newest_first)
    }
}
