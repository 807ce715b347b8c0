//! Commonly used types and utilities for ease of import.

pub use crate::{AiPlayer, Board, Command, FlatRecord, Mark, Player, Winner};

#[cfg(feature = "std")]
pub use crate::{print_game, CliPlayer, GameSession, GameState, MoveStatus, PlayerNode};

#[cfg(feature = "std")]
pub use crate::store::{file::JsonFileStore, in_memory::InMemoryStore, GameStore};
