use rand::rngs::SmallRng;

use crate::logic::{ai, Board, Mark};

use super::{Command, Player};

/// Computer player: completes its own line, blocks the opponent's, prefers
/// the centre, and otherwise picks a random empty cell.
pub struct AiPlayer;

impl AiPlayer {
    pub fn new() -> Self {
        Self
    }
}

impl Default for AiPlayer {
    fn default() -> Self {
        Self::new()
    }
}

impl Player for AiPlayer {
    fn select_command(
        &mut self,
        rng: &mut SmallRng,
        board: &Board,
        mark: Mark,
    ) -> anyhow::Result<Command> {
        match ai::choose_cell(board, mark, rng) {
            Some((r, c)) => Ok(Command::Move(r, c)),
            None => Ok(Command::Quit),
        }
    }
}
