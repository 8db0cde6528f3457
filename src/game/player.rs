use serde::{Deserialize, Serialize};

use super::board::Cell;

/// One of the two marks that alternate on the board. X moves first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    X,
    O,
}

impl Player {
    /// Side to move at a given step. X plays the even steps.
    pub fn for_step(step: usize) -> Player {
        if step % 2 == 0 {
            Player::X
        } else {
            Player::O
        }
    }

    /// Convert player to cell type
    pub fn to_cell(self) -> Cell {
        match self {
            Player::X => Cell::X,
            Player::O => Cell::O,
        }
    }

    /// Get player name for display
    pub fn name(self) -> &'static str {
        match self {
            Player::X => "X",
            Player::O => "O",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_for_step_alternates_from_x() {
        assert_eq!(Player::for_step(0), Player::X);
        assert_eq!(Player::for_step(1), Player::O);
        assert_eq!(Player::for_step(8), Player::X);
    }

    #[test]
    fn test_to_cell() {
        assert_eq!(Player::X.to_cell(), Cell::X);
        assert_eq!(Player::O.to_cell(), Cell::O);
    }

    #[test]
    fn test_player_name() {
        assert_eq!(Player::X.name(), "X");
        assert_eq!(Player::O.name(), "O");
    }
}
