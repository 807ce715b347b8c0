use super::mark::Mark;

pub const BOARD_SIZE: usize = 3;
pub const NUM_CELLS: usize = BOARD_SIZE * BOARD_SIZE;

/// Mark that moves first in a fresh game.
pub const FIRST_PLAYER: Mark = Mark::X;

/// A `(row, col)` pair, both in `0..BOARD_SIZE`.
pub type Coord = (usize, usize);

/// The eight winning lines in the order they are checked: rows top to
/// bottom, columns left to right, then the main and anti diagonal.
pub const LINES: [[Coord; 3]; 8] = [
    [(0, 0), (0, 1), (0, 2)],
    [(1, 0), (1, 1), (1, 2)],
    [(2, 0), (2, 1), (2, 2)],
    [(0, 0), (1, 0), (2, 0)],
    [(0, 1), (1, 1), (2, 1)],
    [(0, 2), (1, 2), (2, 2)],
    [(0, 0), (1, 1), (2, 2)],
    [(0, 2), (1, 1), (2, 0)],
];
