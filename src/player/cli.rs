#![cfg(feature = "std")]

use std::io::{self, BufRead, Write};

use rand::rngs::SmallRng;

use crate::logic::{Board, Mark, BOARD_SIZE};

use super::{Command, Player};

/// Human player reading commands from stdin.
pub struct CliPlayer;

impl CliPlayer {
    pub fn new() -> Self {
        Self
    }

    fn prompt(&self, text: &str) -> anyhow::Result<String> {
        std::print!("{}", text);
        io::stdout().flush()?;
        let mut line = String::new();
        if io::stdin().lock().read_line(&mut line)? == 0 {
            return Ok("q".to_string());
        }
        Ok(line)
    }
}

impl Default for CliPlayer {
    fn default() -> Self {
        Self::new()
    }
}

/// Parse a command line: `row col` or `row-col` (0-based), `r` to reset,
/// `q` to quit.
pub fn parse_command(input: &str) -> Result<Command, String> {
    let input = input.trim();
    if input.is_empty() {
        return Err("Empty input".to_string());
    }
    match input.to_ascii_lowercase().as_str() {
        "r" | "reset" => return Ok(Command::Reset),
        "q" | "quit" => return Ok(Command::Quit),
        _ => {}
    }
    let parts: Vec<&str> = input
        .split(|ch: char| ch.is_whitespace() || ch == '-' || ch == ',')
        .filter(|p| !p.is_empty())
        .collect();
    if parts.len() != 2 {
        return Err(format!("Expected row and column (e.g. 1 2), got '{}'", input));
    }
    let max = BOARD_SIZE - 1;
    let row: usize = parts[0]
        .parse()
        .map_err(|_| format!("Invalid row '{}' - must be a number 0-{}", parts[0], max))?;
    let col: usize = parts[1]
        .parse()
        .map_err(|_| format!("Invalid column '{}' - must be a number 0-{}", parts[1], max))?;
    if row > max {
        return Err(format!("Row {} out of bounds - must be 0-{}", row, max));
    }
    if col > max {
        return Err(format!("Column {} out of bounds - must be 0-{}", col, max));
    }
    Ok(Command::Move(row, col))
}

impl Player for CliPlayer {
    fn select_command(
        &mut self,
        _rng: &mut SmallRng,
        board: &Board,
        mark: Mark,
    ) -> anyhow::Result<Command> {
        loop {
            let line = self.prompt(&format!("{} > row col (r = reset, q = quit): ", mark))?;
            match parse_command(&line) {
                Ok(Command::Move(r, c)) if board.get(r, c).ok().flatten().is_some() => {
                    std::println!("Cell {}-{} is already taken.", r, c);
                }
                Ok(cmd) => return Ok(cmd),
                Err(msg) => std::println!("{}", msg),
            }
        }
    }

    fn after_game(&mut self) -> anyhow::Result<Command> {
        loop {
            let line = self.prompt("Play again? (r = reset, q = quit): ")?;
            match parse_command(&line) {
                Ok(Command::Move(..)) => std::println!("The game is over."),
                Ok(cmd) => return Ok(cmd),
                Err(msg) => std::println!("{}", msg),
            }
        }
    }
}
