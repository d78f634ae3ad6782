//! Win condition checking for tic-tac-toe
//!
//! A player wins with three of their marks on one of the eight fixed
//! lines (three rows, three columns, two diagonals).

use tracing::trace;

use crate::board::{Board, Mark, Pos};

/// The eight winning lines, as cell indices, in check order.
pub const WINNING_LINES: [[usize; 3]; 8] = [
    // Rows
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    // Columns
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    // Diagonals
    [0, 4, 8],
    [2, 4, 6],
];

/// Winning player and the line that completed it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Winner {
    pub player: Mark,
    pub line: [Pos; 3],
}

impl Winner {
    /// Winning line as cell indices
    pub fn cells(&self) -> [usize; 3] {
        self.line.map(Pos::to_index)
    }

    pub fn contains(&self, pos: Pos) -> bool {
        self.line.contains(&pos)
    }
}

/// Find the first completed line in [`WINNING_LINES`] order.
///
/// Returns `None` for boards without three in a row, including a full
/// drawn board.
pub fn calculate_winner(board: &Board) -> Option<Winner> {
    for [a, b, c] in WINNING_LINES {
        let line = [Pos::from_index(a), Pos::from_index(b), Pos::from_index(c)];
        if let Some(player) = board.get(line[0]) {
            if board.get(line[1]) == Some(player) && board.get(line[2]) == Some(player) {
                trace!(%player, ?line, "winning line found");
                return Some(Winner { player, line });
            }
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board_from(cells: &str) -> Board {
        let mut squares = [None; 9];
        for (i, ch) in cells.chars().enumerate() {
            squares[i] = match ch {
                'X' => Some(Mark::X),
                'O' => Some(Mark::O),
                _ => None,
            };
        }
        Board::from_squares(squares)
    }

    #[test]
    fn test_no_winner_empty_board() {
        assert_eq!(calculate_winner(&Board::new()), None);
    }

    #[test]
    fn test_top_row() {
        let winner = calculate_winner(&board_from("XXX......")).unwrap();
        assert_eq!(winner.player, Mark::X);
        assert_eq!(winner.cells(), [0, 1, 2]);
    }

    #[test]
    fn test_column() {
        let winner = calculate_winner(&board_from("XO.XO..O.")).unwrap();
        assert_eq!(winner.player, Mark::O);
        assert_eq!(winner.cells(), [1, 4, 7]);
    }

    #[test]
    fn test_anti_diagonal() {
        let winner = calculate_winner(&board_from("XXO.O.O.X")).unwrap();
        assert_eq!(winner.player, Mark::O);
        assert_eq!(winner.cells(), [2, 4, 6]);
        assert!(winner.contains(Pos::new(1, 1).unwrap()));
        assert!(!winner.contains(Pos::new(0, 0).unwrap()));
    }

    #[test]
    fn test_mixed_line_is_not_a_win() {
        assert_eq!(calculate_winner(&board_from("XXO......")), None);
    }

    #[test]
    fn test_draw_has_no_winner() {
        // X O X
        // X O O
        // O X X
        let board = board_from("XOXXOOOXX");
        assert!(board.is_full());
        assert_eq!(calculate_winner(&board), None);
    }

    #[test]
    fn test_first_line_in_order_is_reported() {
        // Row 0 and column 0 both complete; the row comes first.
        let winner = calculate_winner(&board_from("XXXX..X..")).unwrap();
        assert_eq!(winner.cells(), [0, 1, 2]);
    }
}
