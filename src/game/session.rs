use tracing::{debug, info};

use super::board::{Board, Cell, MoveError, COLS};
use super::player::Player;
use super::snapshot::BoardState;
use super::win::{self, GameOutcome};
use crate::error::RestoreError;

/// What happened to a `play_column` call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveResult {
    /// Piece placed, game goes on; carries the player to move next.
    Continued(Player),
    /// Column had no room. Nothing changed, same player to move.
    ColumnFull,
    /// Piece placed and it completed a four-in-a-row.
    Win(Player),
    /// Piece placed and filled the board without a line.
    Tie,
    /// The game had already ended. Nothing changed.
    GameOver,
}

/// One game of Connect Four: the board, whose turn it is, and the result once
/// the game has ended.
#[derive(Debug, Clone, PartialEq)]
pub struct GameSession {
    board: Board,
    current_player: Player,
    outcome: Option<GameOutcome>,
}

impl GameSession {
    /// Empty board, Red to move
    pub fn new() -> Self {
        GameSession {
            board: Board::new(),
            current_player: Player::Red,
            outcome: None,
        }
    }

    /// Get current player
    pub fn current_player(&self) -> Player {
        self.current_player
    }

    /// Get reference to board
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Lenient cell read for rendering, see [`Board::cell_at`]
    pub fn cell_at(&self, row: isize, col: isize) -> Cell {
        self.board.cell_at(row, col)
    }

    /// Get game outcome if game is over
    pub fn outcome(&self) -> Option<GameOutcome> {
        self.outcome
    }

    /// Check if game is over
    pub fn is_terminal(&self) -> bool {
        self.outcome.is_some()
    }

    /// Columns that still take a piece. Empty once the game is over.
    pub fn legal_columns(&self) -> Vec<usize> {
        if self.is_terminal() {
            return Vec::new();
        }

        (0..COLS)
            .filter(|&col| !self.board.is_column_full(col))
            .collect()
    }

    /// Drop the current player's piece into `column`.
    ///
    /// A full column and a finished game are ordinary results, not errors.
    /// The only error is a column index outside `0..COLS`.
    pub fn play_column(&mut self, column: usize) -> Result<MoveResult, MoveError> {
        if self.is_terminal() {
            return Ok(MoveResult::GameOver);
        }

        let player = self.current_player;
        let row = match self.board.drop_piece(column, player.to_cell()) {
            Ok(row) => row,
            Err(MoveError::ColumnFull) => return Ok(MoveResult::ColumnFull),
            Err(err) => return Err(err),
        };
        debug!(player = player.name(), row, column, "piece dropped");

        match win::evaluate(&self.board) {
            Some(outcome) => {
                self.outcome = Some(outcome);
                info!(?outcome, "game over");
                Ok(match outcome {
                    GameOutcome::Winner(winner) => MoveResult::Win(winner),
                    GameOutcome::Draw => MoveResult::Tie,
                })
            }
            None => {
                self.current_player = player.other();
                Ok(MoveResult::Continued(self.current_player))
            }
        }
    }

    /// Back to an empty board with Red to move
    pub fn reset(&mut self) {
        self.board.reset();
        self.current_player = Player::Red;
        self.outcome = None;
        info!("game reset");
    }

    /// The grid, ready to hand to a save slot
    pub fn snapshot(&self) -> BoardState {
        BoardState::from(&self.board)
    }

    /// Replace the board with a saved grid.
    ///
    /// The player to move is inferred from piece counts: Yellow if Red has
    /// more pieces on the board, otherwise Red. The outcome is recomputed
    /// from the grid. On error the session is left as it was.
    pub fn restore(&mut self, state: &BoardState) -> Result<(), RestoreError> {
        let board = state.to_board()?;

        let red = board.count(Cell::Red);
        let yellow = board.count(Cell::Yellow);
        self.current_player = if red > yellow {
            Player::Yellow
        } else {
            Player::Red
        };
        self.outcome = win::evaluate(&board);
        self.board = board;

        info!(
            red,
            yellow,
            next = self.current_player.name(),
            outcome = ?self.outcome,
            "board restored"
        );
        debug!("restored grid:\n{}", self.board);
        Ok(())
    }
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new()
    }
}
