//! Four-in-a-row detection over a whole board.
//!
//! The scan visits every cell as a potential line start in a fixed order:
//! all horizontal lines, then all vertical lines, then both diagonals. Lines
//! that run off the grid read [`Cell::Empty`] beyond the edge, so they never
//! match.

use super::board::{Board, Cell, COLS, ROWS};
use super::player::Player;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameOutcome {
    Winner(Player),
    Draw,
}

/// Step vectors `(d_row, d_col)` in scan order. The two diagonals share a pass
/// so that, for a given start cell, the rising line is tried before the
/// falling one.
const PASSES: [&[(isize, isize)]; 3] = [&[(0, 1)], &[(1, 0)], &[(-1, 1), (1, 1)]];

/// Evaluate the board. `None` means the game goes on.
pub fn evaluate(board: &Board) -> Option<GameOutcome> {
    if let Some(player) = find_line(board) {
        return Some(GameOutcome::Winner(player));
    }
    if board.is_full() {
        Some(GameOutcome::Draw)
    } else {
        None
    }
}

/// First four-in-a-row in scan order, as its owner.
pub fn find_line(board: &Board) -> Option<Player> {
    for steps in PASSES {
        for y in 0..ROWS as isize {
            for x in 0..COLS as isize {
                for &(dy, dx) in steps {
                    if let Some(player) = line_owner(board, y, x, dy, dx) {
                        return Some(player);
                    }
                }
            }
        }
    }
    None
}

fn line_owner(board: &Board, y: isize, x: isize, dy: isize, dx: isize) -> Option<Player> {
    let first = board.cell_at(y, x);
    if first == Cell::Empty {
        return None;
    }
    let complete = (1..4).all(|i| board.cell_at(y + i * dy, x + i * dx) == first);
    if complete {
        Player::from_cell(first)
    } else {
        None
    }
}
