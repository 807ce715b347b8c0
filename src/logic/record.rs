//! Flat `"row-col"` keyed representation of a board, as stored in a game
//! document.

use alloc::collections::BTreeMap;
use alloc::format;
use alloc::string::String;

use super::board::{Board, Cell};
use super::common::BoardError;
use super::config::{Coord, BOARD_SIZE};

/// Key-value form of a [`Board`]. Serializes as a plain object, e.g.
/// `{"0-0": "X", "0-1": null, ...}`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(
    feature = "std",
    derive(serde::Serialize, serde::Deserialize),
    serde(transparent)
)]
pub struct FlatRecord(BTreeMap<String, Cell>);

impl FlatRecord {
    pub fn new() -> Self {
        FlatRecord(BTreeMap::new())
    }

    /// Record key for (row, col).
    pub fn key(row: usize, col: usize) -> String {
        format!("{}-{}", row, col)
    }

    /// Parse a `row-col` key. Both parts must be a single decimal digit
    /// within the board, so `"00-0"` is rejected.
    pub fn parse_key(key: &str) -> Result<Coord, BoardError> {
        let (row, col) = key.split_once('-').ok_or(BoardError::MalformedKey)?;
        let row = parse_index(row)?;
        let col = parse_index(col)?;
        if row >= BOARD_SIZE || col >= BOARD_SIZE {
            return Err(BoardError::MalformedKey);
        }
        Ok((row, col))
    }

    pub fn get(&self, key: &str) -> Option<Cell> {
        self.0.get(key).copied()
    }

    pub fn insert(&mut self, key: impl Into<String>, cell: Cell) -> Option<Cell> {
        self.0.insert(key.into(), cell)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, Cell)> + '_ {
        self.0.iter().map(|(k, v)| (k.as_str(), *v))
    }
}

// Only the canonical single digit, so no two keys can name the same cell.
fn parse_index(part: &str) -> Result<usize, BoardError> {
    match part.as_bytes() {
        [b @ b'0'..=b'9'] => Ok(usize::from(b - b'0')),
        _ => Err(BoardError::MalformedKey),
    }
}

impl FromIterator<(String, Cell)> for FlatRecord {
    fn from_iter<I: IntoIterator<Item = (String, Cell)>>(iter: I) -> Self {
        FlatRecord(iter.into_iter().collect())
    }
}

impl From<&Board> for FlatRecord {
    fn from(board: &Board) -> Self {
        let mut record = FlatRecord::new();
        for (r, row) in board.rows().iter().enumerate() {
            for (c, &cell) in row.iter().enumerate() {
                record.insert(FlatRecord::key(r, c), cell);
            }
        }
        record
    }
}

impl From<Board> for FlatRecord {
    fn from(board: Board) -> Self {
        FlatRecord::from(&board)
    }
}

/// Rebuild a board by parsing each key, so entry order does not matter.
/// Absent keys are empty cells; any malformed key rejects the record.
impl TryFrom<&FlatRecord> for Board {
    type Error = BoardError;

    fn try_from(record: &FlatRecord) -> Result<Self, Self::Error> {
        let mut rows = [[None; BOARD_SIZE]; BOARD_SIZE];
        for (key, cell) in record.iter() {
            let (r, c) = FlatRecord::parse_key(key)?;
            rows[r][c] = cell;
        }
        Ok(Board::from_rows(rows))
    }
}

impl TryFrom<FlatRecord> for Board {
    type Error = BoardError;

    fn try_from(record: FlatRecord) -> Result<Self, Self::Error> {
        Board::try_from(&record)
    }
}
