#![cfg(feature = "std")]

use crate::logic::{Board, Mark, Winner, BOARD_SIZE};
use crate::session::GameState;

/// Status line shown above the board.
pub fn status_text(winner: Option<Winner>, turn: Mark) -> String {
    match winner {
        Some(Winner::Draw) => "A draw!".to_string(),
        Some(Winner::Mark(m)) => format!("Winner: {}", m),
        None => format!("Next player: {}", turn),
    }
}

/// Grid with 0-based row and column labels.
///
/// ```text
///      0   1   2
///  0   X | . | .
///     ---+---+---
///  1   . | O | .
/// ```
pub fn render_board(board: &Board) -> String {
    let mut out = String::from("    ");
    for c in 0..BOARD_SIZE {
        out.push_str(&format!(" {}  ", c));
    }
    out.push('\n');
    for (r, row) in board.rows().iter().enumerate() {
        if r > 0 {
            out.push_str("    ");
            out.push_str(&vec!["---"; BOARD_SIZE].join("+"));
            out.push('\n');
        }
        let cells: Vec<String> = row
            .iter()
            .map(|cell| match cell {
                Some(m) => format!(" {} ", m),
                None => " . ".to_string(),
            })
            .collect();
        out.push_str(&format!(" {}  {}\n", r, cells.join("|")));
    }
    out
}

/// Print the board followed by the status line.
pub fn print_game(state: &GameState) {
    std::println!();
    std::print!("{}", render_board(&state.board));
    std::println!("\n{}", state.status());
}
