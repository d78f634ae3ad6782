//! Game state and transitions
//!
//! [`GameState`] is an immutable snapshot: every transition borrows the
//! current state and returns the next one. The GUI keeps exactly one
//! snapshot and swaps it wholesale on each user intent.

pub mod view;

pub use view::{GameView, MoveEntry};

use tracing::{debug, instrument, warn};

use crate::board::{Board, Mark, Pos};
use crate::error::GameError;
use crate::rules::calculate_winner;

/// History entry: a board snapshot and the cell placed to reach it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Move {
    pub squares: Board,
    /// `None` only for the initial empty board
    pub placed: Option<Pos>,
}

impl Move {
    pub fn start() -> Self {
        Self {
            squares: Board::new(),
            placed: None,
        }
    }

    pub fn row(&self) -> Option<u8> {
        self.placed.map(Pos::row)
    }

    pub fn col(&self) -> Option<u8> {
        self.placed.map(Pos::col)
    }
}

/// User intent forwarded by the GUI
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Intent {
    PlaceMark(Pos),
    JumpTo(usize),
    ToggleSortOrder,
}

/// Full game snapshot
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    history: Vec<Move>,
    step_number: usize,
    x_is_next: bool,
    is_descending: bool,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

impl GameState {
    /// Empty board, X to move, move list in its default order
    pub fn new() -> Self {
        Self {
            history: vec![Move::start()],
            step_number: 0,
            x_is_next: true,
            is_descending: true,
        }
    }

    /// Initial state with a chosen move-list order flag
    pub fn with_sort_order(is_descending: bool) -> Self {
        Self {
            is_descending,
            ..Self::new()
        }
    }

    pub fn history(&self) -> &[Move] {
        &self.history
    }

    pub fn step_number(&self) -> usize {
        self.step_number
    }

    pub fn x_is_next(&self) -> bool {
        self.x_is_next
    }

    pub fn is_descending(&self) -> bool {
        self.is_descending
    }

    /// Mark that the next `place_mark` would put down
    pub fn next_mark(&self) -> Mark {
        Mark::for_turn(self.x_is_next)
    }

    /// Entry currently displayed
    pub fn current(&self) -> &Move {
        &self.history[self.step_number]
    }

    /// Place the next mark on `pos`.
    ///
    /// Returns an unchanged copy when the displayed board is already won or
    /// `pos` is occupied. Otherwise any history after the displayed step is
    /// discarded before the new entry is appended.
    #[instrument(skip(self), fields(step = self.step_number))]
    pub fn place_mark(&self, pos: Pos) -> GameState {
        let current = self.current();

        if let Some(winner) = calculate_winner(&current.squares) {
            debug!(winner = %winner.player, "board already decided, ignoring click");
            return self.clone();
        }
        if !current.squares.is_empty(pos) {
            debug!("cell occupied, ignoring click");
            return self.clone();
        }

        let mark = self.next_mark();
        let entry = Move {
            squares: current.squares.with_mark(pos, mark),
            placed: Some(pos),
        };

        let mut history = self.history[..=self.step_number].to_vec();
        let dropped = self.history.len() - history.len();
        if dropped > 0 {
            debug!(dropped, "branching: discarding later history");
        }
        let step_number = history.len();
        history.push(entry);

        debug!(%mark, row = pos.row(), col = pos.col(), step_number, "mark placed");

        GameState {
            history,
            step_number,
            x_is_next: !self.x_is_next,
            is_descending: self.is_descending,
        }
    }

    /// Display history entry `step`; later entries are kept.
    pub fn try_jump_to(&self, step: usize) -> Result<GameState, GameError> {
        if step >= self.history.len() {
            return Err(GameError::StepOutOfRange {
                step,
                len: self.history.len(),
            });
        }
        Ok(GameState {
            history: self.history.clone(),
            step_number: step,
            x_is_next: step % 2 == 0,
            is_descending: self.is_descending,
        })
    }

    /// Like [`try_jump_to`](Self::try_jump_to) but an out-of-range step is
    /// logged and ignored.
    #[instrument(skip(self), fields(from = self.step_number))]
    pub fn jump_to(&self, step: usize) -> GameState {
        match self.try_jump_to(step) {
            Ok(next) => {
                debug!("jumped");
                next
            }
            Err(err) => {
                warn!(%err, "ignoring jump");
                self.clone()
            }
        }
    }

    /// Flip the move-list order flag
    #[instrument(skip(self))]
    pub fn toggle_sort_order(&self) -> GameState {
        debug!(is_descending = !self.is_descending, "sort order toggled");
        GameState {
            is_descending: !self.is_descending,
            ..self.clone()
        }
    }

    /// Run the transition for `intent`
    pub fn apply(&self, intent: Intent) -> GameState {
        match intent {
            Intent::PlaceMark(pos) => self.place_mark(pos),
            Intent::JumpTo(step) => self.jump_to(step),
            Intent::ToggleSortOrder => self.toggle_sort_order(),
        }
    }

    /// Derive everything the GUI renders from this snapshot
    pub fn view(&self) -> GameView {
        GameView::new(self)
    }
}
