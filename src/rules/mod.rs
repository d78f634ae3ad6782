//! Game rules for tic-tac-toe
//!
//! Only the win condition lives here; move legality (empty cell, game not
//! yet decided) is checked by the transition engine in [`crate::game`].

pub mod win;

// Re-exports for convenient access
pub use win::{calculate_winner, Winner, WINNING_LINES};
