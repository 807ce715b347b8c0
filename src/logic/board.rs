//! Board state and the move/win rules.

use core::fmt;
use core::str::FromStr;

use super::common::{BoardError, Winner};
use super::config::{Coord, BOARD_SIZE, LINES, NUM_CELLS};
use super::mark::Mark;

/// A single square: a mark or empty.
pub type Cell = Option<Mark>;

/// 3x3 grid of cells, indexed `[row][col]`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Board {
    cells: [[Cell; BOARD_SIZE]; BOARD_SIZE],
}

/// Board produced by [`Board::make_move`] together with its outcome.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MoveResult {
    pub board: Board,
    pub winner: Option<Winner>,
}

impl Board {
    /// Create an empty board.
    pub const fn new() -> Self {
        Board {
            cells: [[None; BOARD_SIZE]; BOARD_SIZE],
        }
    }

    pub const fn from_rows(cells: [[Cell; BOARD_SIZE]; BOARD_SIZE]) -> Self {
        Board { cells }
    }

    pub fn rows(&self) -> &[[Cell; BOARD_SIZE]; BOARD_SIZE] {
        &self.cells
    }

    /// Cell at (row, col).
    pub fn get(&self, row: usize, col: usize) -> Result<Cell, BoardError> {
        check_bounds(row, col)?;
        Ok(self.cells[row][col])
    }

    pub fn is_full(&self) -> bool {
        self.cells.iter().flatten().all(|c| c.is_some())
    }

    /// Empty coordinates in row-major order.
    pub fn empty_cells(&self) -> impl Iterator<Item = Coord> + '_ {
        (0..NUM_CELLS)
            .map(|i| (i / BOARD_SIZE, i % BOARD_SIZE))
            .filter(move |&(r, c)| self.cells[r][c].is_none())
    }

    /// Evaluate the board. The first uniform line wins; a full board with
    /// no uniform line is a draw; anything else has no result yet.
    pub fn winner(&self) -> Option<Winner> {
        for [a, b, c] in LINES {
            if let Some(mark) = self.cells[a.0][a.1] {
                if self.cells[b.0][b.1] == Some(mark) && self.cells[c.0][c.1] == Some(mark) {
                    return Some(Winner::Mark(mark));
                }
            }
        }
        if self.is_full() {
            Some(Winner::Draw)
        } else {
            None
        }
    }

    /// Place `mark` at (row, col) on a copy of this board.
    ///
    /// An occupied target leaves the copy unchanged; the returned winner is
    /// then that of the current board. `self` is never modified.
    pub fn make_move(&self, row: usize, col: usize, mark: Mark) -> Result<MoveResult, BoardError> {
        let mut board = *self;
        if board.get(row, col)?.is_none() {
            board.cells[row][col] = Some(mark);
        }
        Ok(MoveResult {
            winner: board.winner(),
            board,
        })
    }
}

fn check_bounds(row: usize, col: usize) -> Result<(), BoardError> {
    if row >= BOARD_SIZE || col >= BOARD_SIZE {
        return Err(BoardError::InvalidIndex);
    }
    Ok(())
}

fn cell_symbol(cell: Cell) -> char {
    match cell {
        Some(Mark::X) => 'X',
        Some(Mark::O) => 'O',
        None => '.',
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.cells.iter() {
            for &cell in row.iter() {
                write!(f, "{}", cell_symbol(cell))?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// Parses nine symbols (`X`, `O`, and `.`/`_`/`-` for empty) in row-major
/// order. Whitespace and `/` separators are ignored.
impl FromStr for Board {
    type Err = BoardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut board = Board::new();
        let mut n = 0;
        for ch in s.chars().filter(|ch| !ch.is_whitespace() && *ch != '/') {
            if n >= NUM_CELLS {
                return Err(BoardError::InvalidBoard);
            }
            let cell = match ch {
                'X' | 'x' => Some(Mark::X),
                'O' | 'o' => Some(Mark::O),
                '.' | '_' | '-' => None,
                _ => return Err(BoardError::InvalidBoard),
            };
            board.cells[n / BOARD_SIZE][n % BOARD_SIZE] = cell;
            n += 1;
        }
        if n != NUM_CELLS {
            return Err(BoardError::InvalidBoard);
        }
        Ok(board)
    }
}
