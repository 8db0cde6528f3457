//! Core tic-tac-toe logic: board representation, player marks, and the
//! history-keeping game state with immutable transitions.

mod board;
mod player;
mod state;

pub use board::{column, line, Board, Cell, Winner, CELLS, SIZE, WINNING_LINES};
pub use player::Player;
pub use state::{GameState, GameStatus, HistoryEntry};
