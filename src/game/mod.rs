//! Core Connect Four game logic: board representation, player types, the
//! whole-board win scan, and the game session that ties them together.

mod board;
mod player;
mod session;
mod snapshot;
pub mod win;

pub use board::{Board, Cell, MoveError, COLS, ROWS};
pub use player::Player;
pub use session::{GameSession, MoveResult};
pub use snapshot::BoardState;
pub use win::GameOutcome;
