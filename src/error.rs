//! Error types for the game engine.

use derive_more::{Display, Error};

/// Rejected input to the game engine.
///
/// The GUI only produces in-range cells and steps, so these surface from
/// the checked constructors (`Pos::try_from`, `GameState::try_jump_to`)
/// rather than from normal play.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum GameError {
    /// Cell index outside 0..9.
    #[display("cell index {index} is out of range (expected 0..9)")]
    CellOutOfRange {
        /// Offending index.
        index: usize,
    },

    /// Step outside the recorded history.
    #[display("step {step} is out of range (history has {len} entries)")]
    StepOutOfRange {
        /// Requested step.
        step: usize,
        /// History length at the time of the request.
        len: usize,
    },
}
