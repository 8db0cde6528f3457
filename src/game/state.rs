use serde::{Deserialize, Serialize};
use tracing::debug;

use super::board::{self, Board, Winner, CELLS};
use super::player::Player;

/// One snapshot in the move history: the board after a move, plus the
/// square that move filled. The starting entry has no move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryEntry {
    board: Board,
    last_move: Option<usize>,
}

impl HistoryEntry {
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Square filled by the move that produced this entry, if any.
    pub fn last_move(&self) -> Option<usize> {
        self.last_move
    }
}

/// What the game looks like from the currently viewed step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    Won(Winner),
    Draw,
    Turn(Player),
}

/// Full game state: every board reached so far, which of those boards is
/// being viewed, and the preferred ordering for the step list.
///
/// The side to move is never stored. It is recomputed from the viewed
/// step's parity, so it stays consistent across jumps automatically.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    history: Vec<HistoryEntry>,
    current_step: usize,
    ascending_moves: bool,
}

impl GameState {
    /// Fresh game: one empty board in the history, steps listed oldest first.
    pub fn new() -> Self {
        Self::with_move_order(true)
    }

    /// Fresh game with an explicit step-list ordering.
    pub fn with_move_order(ascending_moves: bool) -> Self {
        let mut history = Vec::with_capacity(CELLS + 1);
        history.push(HistoryEntry {
            board: Board::new(),
            last_move: None,
        });
        Self {
            history,
            current_step: 0,
            ascending_moves,
        }
    }

    pub fn history(&self) -> &[HistoryEntry] {
        &self.history
    }

    pub fn current_step(&self) -> usize {
        self.current_step
    }

    pub fn ascending_moves(&self) -> bool {
        self.ascending_moves
    }

    /// Board at the currently viewed step.
    pub fn current_board(&self) -> &Board {
        &self.history[self.current_step].board
    }

    /// Side to move at the viewed step. Even steps are X's turn.
    pub fn to_move(&self) -> Player {
        Player::for_step(self.current_step)
    }

    /// Status at the viewed step. A win on the board takes precedence;
    /// a full board with no winner is a draw.
    pub fn status(&self) -> GameStatus {
        if let Some(winner) = self.current_board().winner() {
            GameStatus::Won(winner)
        } else if self.current_step == CELLS {
            GameStatus::Draw
        } else {
            GameStatus::Turn(self.to_move())
        }
    }

    /// True once the viewed step is won or drawn.
    pub fn is_over(&self) -> bool {
        !matches!(self.status(), GameStatus::Turn(_))
    }

    /// Play the side to move at `pos`, returning the resulting state.
    ///
    /// If the square is occupied, the position is out of range, or the
    /// viewed board already has a winner, the state is returned unchanged.
    #[must_use]
    pub fn apply_move(&self, pos: usize) -> Self {
        let mut next = self.clone();
        next.apply_move_mut(pos);
        next
    }

    /// In-place version of [`apply_move`](Self::apply_move).
    ///
    /// Playing from an earlier step discards the steps after it before
    /// recording the move, so the history always describes one line of play.
    pub fn apply_move_mut(&mut self, pos: usize) {
        let current = &self.history[self.current_step].board;
        if current.winner().is_some() || !current.is_empty(pos) {
            debug!(pos, step = self.current_step, "move rejected");
            return;
        }
        let player = self.to_move();
        let mut board = *current;
        board.set(pos, player);
        self.history.truncate(self.current_step + 1);
        self.history.push(HistoryEntry {
            board,
            last_move: Some(pos),
        });
        self.current_step = self.history.len() - 1;
        debug!(pos, step = self.current_step, player = player.name(), "move played");
    }

    /// View the board as it was after `step` moves.
    ///
    /// The history is left intact, so play can resume from there.
    /// Steps past the end of the history are ignored.
    #[must_use]
    pub fn jump_to(&self, step: usize) -> Self {
        let mut next = self.clone();
        next.jump_to_mut(step);
        next
    }

    /// In-place version of [`jump_to`](Self::jump_to).
    pub fn jump_to_mut(&mut self, step: usize) {
        if step >= self.history.len() {
            debug!(step, len = self.history.len(), "jump rejected");
            return;
        }
        self.current_step = step;
        debug!(step, "jumped");
    }

    /// Flip the step list between oldest-first and newest-first.
    #[must_use]
    pub fn toggle_sort(&self) -> Self {
        let mut next = self.clone();
        next.toggle_sort_mut();
        next
    }

    /// In-place version of [`toggle_sort`](Self::toggle_sort).
    pub fn toggle_sort_mut(&mut self) {
        self.ascending_moves = !self.ascending_moves;
    }

    /// Step indices in display order. Descending order reverses the whole
    /// list, the starting entry included.
    pub fn display_steps(&self) -> Vec<usize> {
        let mut steps: Vec<usize> = (0..self.history.len()).collect();
        if !self.ascending_moves {
            steps.reverse();
        }
        steps
    }

    /// Human-readable label for a history step, in 1-based board coordinates.
    pub fn move_label(&self, step: usize) -> String {
        match self.history[step].last_move {
            None => "Go to start".to_string(),
            Some(pos) => format!(
                "Go to step #{step}, column #{}, line #{}",
                board::column(pos),
                board::line(pos)
            ),
        }
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}
