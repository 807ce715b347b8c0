//! Player trait and implementations
//!
//! This module defines the Player trait and provides concrete implementations:
//! - AiPlayer: wins when it can, blocks when it must, otherwise plays randomly
//! - CliPlayer: Interactive command-line player
//! - PlayerNode: Orchestrator combining local players with a GameSession

use rand::rngs::SmallRng;

use crate::logic::{Board, Mark};

/// What a player wants to do next.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Click the cell at (row, col).
    Move(usize, usize),
    /// Start a new game.
    Reset,
    /// Leave the game.
    Quit,
}

/// Interface implemented by different player types.
pub trait Player: Send {
    /// Choose what to do on `mark`'s turn.
    fn select_command(
        &mut self,
        rng: &mut SmallRng,
        board: &Board,
        mark: Mark,
    ) -> anyhow::Result<Command>;

    /// Asked once the game is decided. `Reset` starts another game.
    fn after_game(&mut self) -> anyhow::Result<Command> {
        Ok(Command::Quit)
    }
}

pub mod ai;
pub use ai::AiPlayer;

#[cfg(feature = "std")]
pub mod cli;
#[cfg(feature = "std")]
pub use cli::CliPlayer;

#[cfg(feature = "std")]
pub mod node;
#[cfg(feature = "std")]
pub use node::PlayerNode;
