use serde::{Deserialize, Serialize};

use super::board::{Board, Cell, COLS, ROWS};
use crate::error::RestoreError;

/// Persistable form of a board: the grid as save codes (0 empty, 1 red,
/// 2 yellow), row 0 at the top. Whose turn it is and whether the game is over
/// are not stored; they are derived again on restore.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BoardState {
    grid: [[u8; COLS]; ROWS],
}

impl BoardState {
    pub fn from_grid(grid: [[u8; COLS]; ROWS]) -> Self {
        BoardState { grid }
    }

    pub fn grid(&self) -> &[[u8; COLS]; ROWS] {
        &self.grid
    }

    /// Decode into a board, rejecting unknown codes and pieces resting on an
    /// empty cell.
    pub fn to_board(&self) -> Result<Board, RestoreError> {
        let mut cells = [[Cell::Empty; COLS]; ROWS];
        for (row, codes) in self.grid.iter().enumerate() {
            for (col, &value) in codes.iter().enumerate() {
                cells[row][col] =
                    Cell::from_code(value).ok_or(RestoreError::CellValue { row, col, value })?;
            }
        }

        for col in 0..COLS {
            for row in 0..ROWS - 1 {
                if cells[row][col] != Cell::Empty && cells[row + 1][col] == Cell::Empty {
                    return Err(RestoreError::FloatingPiece { row, col });
                }
            }
        }

        Ok(Board::from_cells(cells))
    }
}

impl From<&Board> for BoardState {
    fn from(board: &Board) -> Self {
        let mut grid = [[0u8; COLS]; ROWS];
        for (row, cells) in board.cells().iter().enumerate() {
            for (col, cell) in cells.iter().enumerate() {
                grid[row][col] = cell.code();
            }
        }
        BoardState { grid }
    }
}
