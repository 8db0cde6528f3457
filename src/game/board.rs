use std::fmt;

use serde::{Deserialize, Serialize};

use super::player::Player;

/// Board side length. The grid is `SIZE` x `SIZE`.
pub const SIZE: usize = 3;
/// Total number of cells on the board.
pub const CELLS: usize = SIZE * SIZE;

/// The 8 ways to win, scanned in this order: rows, columns, diagonals.
pub const WINNING_LINES: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8], // rows
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8], // columns
    [0, 4, 8],
    [2, 4, 6], // diagonals
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    Empty,
    X,
    O,
}

impl Cell {
    /// The player occupying this cell, if any.
    pub fn player(self) -> Option<Player> {
        match self {
            Cell::Empty => None,
            Cell::X => Some(Player::X),
            Cell::O => Some(Player::O),
        }
    }
}

/// A completed winning line: who made it and the three cells it covers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Winner {
    pub player: Player,
    /// Cell indices of the winning triple, in line order.
    pub line: [usize; 3],
}

/// 3x3 board, cells indexed 0-8 in row-major order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    cells: [Cell; CELLS],
}

impl Board {
    /// Create a new empty board
    pub fn new() -> Self {
        Board {
            cells: [Cell::Empty; CELLS],
        }
    }

    /// Get the cell at a position (0-8)
    pub fn get(&self, pos: usize) -> Cell {
        self.cells[pos]
    }

    /// Check if a position holds no mark. Out-of-range positions count as
    /// occupied, so callers can treat them as unplayable.
    pub fn is_empty(&self, pos: usize) -> bool {
        matches!(self.cells.get(pos), Some(Cell::Empty))
    }

    /// Check if every cell is occupied
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|&cell| cell != Cell::Empty)
    }

    /// Place a player's mark. Legality checks live in the game state; this
    /// overwrites whatever is at `pos`.
    pub(crate) fn set(&mut self, pos: usize, player: Player) {
        self.cells[pos] = player.to_cell();
    }

    /// Scan the 8 winning lines in their fixed order and report the first
    /// complete one, or `None` if no line is complete.
    pub fn winner(&self) -> Option<Winner> {
        for line in WINNING_LINES {
            let [a, b, c] = line;
            if let Some(player) = self.cells[a].player() {
                if self.cells[a] == self.cells[b] && self.cells[b] == self.cells[c] {
                    return Some(Winner { player, line });
                }
            }
        }
        None
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..SIZE {
            if row > 0 {
                writeln!(f)?;
            }
            for col in 0..SIZE {
                let glyph = match self.cells[row * SIZE + col] {
                    Cell::Empty => '.',
                    Cell::X => 'X',
                    Cell::O => 'O',
                };
                write!(f, "{glyph}")?;
            }
        }
        Ok(())
    }
}

/// 1-indexed display column of a cell index.
pub fn column(pos: usize) -> usize {
    pos % SIZE + 1
}

/// 1-indexed display line of a cell index.
pub fn line(pos: usize) -> usize {
    pos / SIZE + 1
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board_with(marks: &[(usize, Player)]) -> Board {
        let mut board = Board::new();
        for &(pos, player) in marks {
            board.set(pos, player);
        }
        board
    }

    #[test]
    fn test_new_board_is_empty() {
        let board = Board::new();
        for pos in 0..CELLS {
            assert_eq!(board.get(pos), Cell::Empty);
            assert!(board.is_empty(pos));
        }
        assert!(!board.is_full());
    }

    #[test]
    fn test_out_of_range_is_not_playable() {
        let board = Board::new();
        assert!(!board.is_empty(CELLS));
        assert!(!board.is_empty(100));
    }

    #[test]
    fn test_no_winner_empty_board() {
        assert_eq!(Board::new().winner(), None);
    }

    #[test]
    fn test_no_winner_without_complete_line() {
        // X.X / .O. / O.X, plenty of marks but no triple
        let board = board_with(&[
            (0, Player::X),
            (2, Player::X),
            (4, Player::O),
            (6, Player::O),
            (8, Player::X),
        ]);
        assert_eq!(board.winner(), None);
    }

    #[test]
    fn test_each_line_detected_with_exact_cells() {
        for expected in WINNING_LINES {
            let board = board_with(&[
                (expected[0], Player::O),
                (expected[1], Player::O),
                (expected[2], Player::O),
            ]);
            let winner = board.winner().expect("line should win");
            assert_eq!(winner.player, Player::O);
            assert_eq!(winner.line, expected);
        }
    }

    #[test]
    fn test_mixed_marks_on_line_do_not_win() {
        let board = board_with(&[(0, Player::X), (1, Player::O), (2, Player::X)]);
        assert_eq!(board.winner(), None);
    }

    #[test]
    fn test_first_line_in_scan_order_wins_ties() {
        // Two complete X lines; the earlier one in WINNING_LINES is reported.
        let board = board_with(&[
            (0, Player::X),
            (1, Player::X),
            (2, Player::X),
            (3, Player::X),
            (4, Player::X),
            (5, Player::X),
        ]);
        assert_eq!(board.winner().map(|w| w.line), Some([0, 1, 2]));
    }

    #[test]
    fn test_full_board() {
        let mut board = Board::new();
        for pos in 0..CELLS {
            board.set(pos, Player::X);
        }
        assert!(board.is_full());
        assert!(!board.is_empty(0));
    }

    #[test]
    fn test_display_coordinates() {
        assert_eq!((column(0), line(0)), (1, 1));
        assert_eq!((column(4), line(4)), (2, 2));
        assert_eq!((column(8), line(8)), (3, 3));
        assert_eq!((column(5), line(5)), (3, 2));
    }

    #[test]
    fn test_display() {
        let board = board_with(&[(0, Player::X), (4, Player::O), (8, Player::X)]);
        assert_eq!(format!("{board}"), "X..\n.O.\n..X");
    }
}
