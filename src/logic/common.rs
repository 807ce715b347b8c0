//! Common types for tic-tac-toe: board errors and game outcomes.

use alloc::string::{String, ToString};
use core::fmt;

use super::mark::Mark;

/// Decided result of a game. "No result yet" is `None` in an `Option<Winner>`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "std",
    derive(serde::Serialize, serde::Deserialize),
    serde(into = "String", try_from = "String")
)]
pub enum Winner {
    /// A line of three belongs to this mark.
    Mark(Mark),
    /// Board is full and no line is uniform.
    Draw,
}

impl Winner {
    /// The winning mark, or `None` for a draw.
    pub fn mark(self) -> Option<Mark> {
        match self {
            Winner::Mark(m) => Some(m),
            Winner::Draw => None,
        }
    }
}

impl fmt::Display for Winner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Winner::Mark(m) => write!(f, "{}", m),
            Winner::Draw => f.write_str("draw"),
        }
    }
}

impl From<Winner> for String {
    fn from(w: Winner) -> Self {
        w.to_string()
    }
}

impl TryFrom<String> for Winner {
    type Error = BoardError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        if s == "draw" {
            return Ok(Winner::Draw);
        }
        s.parse::<Mark>()
            .map(Winner::Mark)
            .map_err(|_| BoardError::InvalidWinner)
    }
}

/// Errors returned by Board operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoardError {
    /// Row or column is outside `0..BOARD_SIZE`.
    InvalidIndex,
    /// Record key is not of the form `row-col`.
    MalformedKey,
    /// Text is not `X` or `O`.
    InvalidMark,
    /// Text is not `X`, `O` or `draw`.
    InvalidWinner,
    /// Board text does not describe exactly nine cells.
    InvalidBoard,
}

impl fmt::Display for BoardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoardError::InvalidIndex => write!(f, "Index is out of range"),
            BoardError::MalformedKey => write!(f, "Record key is not of the form row-col"),
            BoardError::InvalidMark => write!(f, "Mark must be X or O"),
            BoardError::InvalidWinner => write!(f, "Winner must be X, O or draw"),
            BoardError::InvalidBoard => write!(f, "Board must contain exactly nine cells"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for BoardError {}
