//! Presentation projection of a [`GameState`]
//!
//! Nothing here is stored between frames; the GUI rebuilds a [`GameView`]
//! from the current snapshot every time it renders.

use super::{GameState, Move};
use crate::board::{Board, Pos};
use crate::rules::{calculate_winner, Winner};

/// One row of the move list
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveEntry {
    /// History index this entry jumps to
    pub step: usize,
    pub label: String,
    /// Entry for the displayed step (rendered bold)
    pub is_current: bool,
}

/// Everything the GUI needs to draw one frame
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameView {
    pub board: Board,
    pub winner: Option<Winner>,
    pub status: String,
    /// Move list in display order
    pub moves: Vec<MoveEntry>,
    pub sort_button_label: String,
}

impl GameView {
    pub fn new(state: &GameState) -> Self {
        let board = state.current().squares;
        let winner = calculate_winner(&board);

        let mut moves: Vec<MoveEntry> = state
            .history()
            .iter()
            .enumerate()
            .map(|(step, entry)| MoveEntry {
                step,
                label: move_label(step, entry),
                is_current: step == state.step_number(),
            })
            .collect();
        // `is_descending == true` is the chronological order.
        if !state.is_descending() {
            moves.reverse();
        }

        Self {
            board,
            winner,
            status: status_text(winner.as_ref(), state.x_is_next()),
            moves,
            sort_button_label: sort_button_label(state.is_descending()),
        }
    }

    /// Whether `pos` belongs to the winning line
    pub fn is_winning_cell(&self, pos: Pos) -> bool {
        self.winner.is_some_and(|w| w.contains(pos))
    }

    /// Winning cell indices, empty without a winner
    pub fn winning_cells(&self) -> Vec<usize> {
        self.winner.map(|w| w.cells().to_vec()).unwrap_or_default()
    }
}

/// Status line. A drawn board keeps showing the next player.
pub fn status_text(winner: Option<&Winner>, x_is_next: bool) -> String {
    match winner {
        Some(w) => format!("Winner: {}", w.player),
        None => format!("Next player: {}", if x_is_next { "X" } else { "O" }),
    }
}

/// Move-list label for history entry `step`
pub fn move_label(step: usize, entry: &Move) -> String {
    match entry.placed {
        Some(pos) if step > 0 => {
            format!("Go to move #{} (col: {}, row: {})", step, pos.col(), pos.row())
        }
        _ => "Go to game start".to_string(),
    }
}

/// Label of the sort toggle; names the order a click switches to.
pub fn sort_button_label(is_descending: bool) -> String {
    format!(
        "Sort list in {} order",
        if is_descending { "descending" } else { "ascending" }
    )
}
