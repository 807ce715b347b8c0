//! Move selection for the computer player.

use rand::Rng;

use super::board::Board;
use super::common::Winner;
use super::config::{Coord, BOARD_SIZE};
use super::mark::Mark;

/// First empty cell (row-major) that completes a line for `mark`.
pub fn winning_cell(board: &Board, mark: Mark) -> Option<Coord> {
    board.empty_cells().find(|&(r, c)| {
        board
            .make_move(r, c, mark)
            .map(|res| res.winner == Some(Winner::Mark(mark)))
            .unwrap_or(false)
    })
}

/// Uniformly random empty cell, or `None` on a full board.
pub fn random_cell<R: Rng>(board: &Board, rng: &mut R) -> Option<Coord> {
    let n = board.empty_cells().count();
    if n == 0 {
        return None;
    }
    let pick = rng.random_range(0..n);
    board.empty_cells().nth(pick)
}

/// Win if possible, otherwise block the opponent, otherwise take the centre,
/// otherwise play a random empty cell.
pub fn choose_cell<R: Rng>(board: &Board, mark: Mark, rng: &mut R) -> Option<Coord> {
    if let Some(cell) = winning_cell(board, mark) {
        return Some(cell);
    }
    if let Some(cell) = winning_cell(board, mark.opposite()) {
        return Some(cell);
    }
    let centre = (BOARD_SIZE / 2, BOARD_SIZE / 2);
    if board.rows()[centre.0][centre.1].is_none() {
        return Some(centre);
    }
    random_cell(board, rng)
}
