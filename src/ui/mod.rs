//! Terminal UI: a thin adapter that turns key presses into session calls and
//! draws the board.

mod app;
mod game_view;

pub use app::App;
