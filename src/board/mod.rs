//! Board representation for tic-tac-toe

pub mod board;

// Re-exports
pub use board::Board;

use crate::error::GameError;

/// Board size (3x3)
pub const BOARD_SIZE: usize = 3;
pub const TOTAL_CELLS: usize = BOARD_SIZE * BOARD_SIZE; // 9

/// Player marks
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mark {
    X,
    O,
}

impl Mark {
    /// Mark placed when `x_is_next` holds
    #[inline]
    pub fn for_turn(x_is_next: bool) -> Mark {
        if x_is_next {
            Mark::X
        } else {
            Mark::O
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Mark::X => "X",
            Mark::O => "O",
        }
    }
}

impl std::fmt::Display for Mark {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Cell on the board, row-major.
///
/// Always in range: the fields are private and every constructor checks
/// the bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Pos {
    row: u8,
    col: u8,
}

impl Pos {
    /// Cell at `row`, `col`, or `None` outside the 3x3 grid
    #[inline]
    pub fn new(row: u8, col: u8) -> Option<Self> {
        if (row as usize) < BOARD_SIZE && (col as usize) < BOARD_SIZE {
            Some(Self { row, col })
        } else {
            None
        }
    }

    #[inline]
    pub fn row(self) -> u8 {
        self.row
    }

    #[inline]
    pub fn col(self) -> u8 {
        self.col
    }

    #[inline]
    pub fn to_index(self) -> usize {
        self.row as usize * BOARD_SIZE + self.col as usize
    }

    /// Split a cell index into row and column: `row = idx / 3`, `col = idx - row * 3`.
    ///
    /// # Panics
    ///
    /// Panics if `idx >= 9`; use `Pos::try_from` for unchecked input.
    #[inline]
    pub fn from_index(idx: usize) -> Self {
        assert!(idx < TOTAL_CELLS, "cell index {idx} out of range");
        let row = idx / BOARD_SIZE;
        Self {
            row: row as u8,
            col: (idx - row * BOARD_SIZE) as u8,
        }
    }

    /// All nine cells in index order
    pub fn all() -> impl Iterator<Item = Pos> {
        (0..TOTAL_CELLS).map(Pos::from_index)
    }
}

impl TryFrom<usize> for Pos {
    type Error = GameError;

    fn try_from(index: usize) -> Result<Self, Self::Error> {
        if index < TOTAL_CELLS {
            Ok(Pos::from_index(index))
        } else {
            Err(GameError::CellOutOfRange { index })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_round_trip_matches_row_major() {
        assert_eq!(Some(Pos::from_index(0)), Pos::new(0, 0));
        assert_eq!(Some(Pos::from_index(5)), Pos::new(1, 2));
        assert_eq!(Some(Pos::from_index(7)), Pos::new(2, 1));
        assert_eq!(Pos::new(2, 2).unwrap().to_index(), 8);
        for pos in Pos::all() {
            assert_eq!(pos.row() as usize, pos.to_index() / 3);
            assert_eq!(pos.col() as usize, pos.to_index() - pos.row() as usize * 3);
        }
    }

    #[test]
    fn test_new_rejects_out_of_grid() {
        // (0, 3) would alias cell 3, which is really (1, 0)
        assert_eq!(Pos::new(0, 3), None);
        assert_eq!(Pos::new(3, 0), None);
        assert_eq!(Pos::new(u8::MAX, 1), None);
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn test_from_index_panics_past_last_cell() {
        Pos::from_index(9);
    }

    #[test]
    fn test_try_from_rejects_out_of_range() {
        assert_eq!(Pos::try_from(8).ok(), Pos::new(2, 2));
        assert_eq!(
            Pos::try_from(9),
            Err(GameError::CellOutOfRange { index: 9 })
        );
    }

    #[test]
    fn test_mark_for_turn() {
        assert_eq!(Mark::for_turn(true), Mark::X);
        assert_eq!(Mark::for_turn(false), Mark::O);
        assert_eq!(Mark::O.to_string(), "O");
    }
}
