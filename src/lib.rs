//! Two-player tic-tac-toe with move history
//!
//! Players alternate placing X and O on a 3x3 board. Every move is kept in
//! a history list; any earlier position can be revisited, and playing a
//! new move from an earlier position discards the moves that followed it.
//!
//! # Architecture
//!
//! - [`board`]: Marks, cell positions and immutable board snapshots
//! - [`rules`]: Win detection
//! - [`game`]: The game state snapshot, its transitions and the derived view
//! - [`ui`]: egui front end
//! - [`cli`]: Command-line options
//!
//! # Quick Start
//!
//! ```
//! use tictactoe::{GameState, Pos};
//!
//! // Cells are numbered 0..9 in row-major order.
//! let state = [0, 3, 1, 4, 2]
//!     .into_iter()
//!     .fold(GameState::new(), |s, i| s.place_mark(Pos::from_index(i)));
//!
//! assert_eq!(state.view().status, "Winner: X");
//!
//! // Time travel back to the start; the later moves stay in the list.
//! let start = state.jump_to(0);
//! assert_eq!(start.view().status, "Next player: X");
//! assert_eq!(start.history().len(), 6);
//! ```

pub mod board;
pub mod cli;
pub mod error;
pub mod game;
pub mod rules;
pub mod ui;

// Re-export commonly used types for convenience
pub use board::{Board, Mark, Pos, BOARD_SIZE};
pub use error::GameError;
pub use game::{GameState, GameView, Intent, Move, MoveEntry};
pub use rules::{calculate_winner, Winner};
