//! The single on-disk save slot. Only the board grid is written; the session
//! works out whose turn it is when the grid is loaded back.

mod slot;

pub use slot::{SaveSlot, SaveSlotConfig};
