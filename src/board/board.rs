//! Board snapshot

use super::{Mark, Pos, TOTAL_CELLS};

/// Nine cells in row-major order.
///
/// Boards are treated as values: placing a mark produces a new board and
/// leaves the original untouched, so history entries never change once
/// recorded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Board {
    squares: [Option<Mark>; TOTAL_CELLS],
}

impl Board {
    pub fn new() -> Self {
        Self {
            squares: [None; TOTAL_CELLS],
        }
    }

    /// Build a board from raw cells (mostly for tests and fixtures)
    pub fn from_squares(squares: [Option<Mark>; TOTAL_CELLS]) -> Self {
        Self { squares }
    }

    /// Get mark at position
    #[inline]
    pub fn get(&self, pos: Pos) -> Option<Mark> {
        self.squares[pos.to_index()]
    }

    /// Check if position is empty
    #[inline]
    pub fn is_empty(&self, pos: Pos) -> bool {
        self.get(pos).is_none()
    }

    /// Copy of this board with `pos` set to `mark`
    #[inline]
    pub fn with_mark(&self, pos: Pos, mark: Mark) -> Board {
        let mut squares = self.squares;
        squares[pos.to_index()] = Some(mark);
        Board { squares }
    }

    pub fn squares(&self) -> &[Option<Mark>; TOTAL_CELLS] {
        &self.squares
    }

    /// Total marks on board
    #[inline]
    pub fn mark_count(&self) -> usize {
        self.squares.iter().filter(|s| s.is_some()).count()
    }

    #[inline]
    pub fn is_full(&self) -> bool {
        self.mark_count() == TOTAL_CELLS
    }

    /// Cells that differ between two boards
    pub fn diff(&self, other: &Board) -> Vec<Pos> {
        Pos::all().filter(|&p| self.get(p) != other.get(p)).collect()
    }
}
