//! Tic-tac-toe GUI
//!
//! Hotseat tic-tac-toe for two players with a time-travel move list.

use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use tictactoe::cli::Cli;
use tictactoe::ui::TicTacToeApp;

fn main() -> Result<(), eframe::Error> {
    let cli = Cli::parse();

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&cli.log_level));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    info!(width = cli.width, height = cli.height, "Starting tic-tac-toe");

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([cli.width, cli.height])
            .with_min_inner_size([480.0, 360.0])
            .with_title("Tic-Tac-Toe"),
        ..Default::default()
    };

    let initial = cli.initial_state();
    eframe::run_native(
        "Tic-Tac-Toe",
        options,
        Box::new(|cc| Ok(Box::new(TicTacToeApp::new(cc, initial)))),
    )
}
