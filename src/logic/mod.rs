//! Core tic-tac-toe rules (no_std compatible)
//!
//! Pure board logic: construction, move application, win/draw detection and
//! conversion to the flat record stored in a game document. Needs only
//! `alloc` (for the record keys) and `rand` (for the computer player).

pub mod ai;
pub mod board;
pub mod common;
pub mod config;
pub mod mark;
pub mod record;

// Re-export commonly used types
pub use ai::{choose_cell, random_cell, winning_cell};
pub use board::{Board, Cell, MoveResult};
pub use common::{BoardError, Winner};
pub use config::*;
pub use mark::Mark;
pub use record::FlatRecord;
