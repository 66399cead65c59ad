//! # Connect Four
//!
//! Two-player Connect Four on a 6×7 board, played in the terminal, with one
//! save slot on disk.
//!
//! ## Modules
//!
//! - [`game`] — Core game logic: board, player, win scan, game session
//! - [`save`] — The on-disk save slot
//! - [`ui`] — Terminal UI built with Ratatui
//! - [`config`] — TOML configuration loading and validation
//! - [`error`] — Structured error types

pub mod config;
pub mod error;
pub mod game;
pub mod save;
pub mod ui;
