#![cfg(feature = "std")]

//! Shape of the persisted game document and of the partial update a move
//! issues.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::logic::{Board, BoardError, FlatRecord, Mark, Winner, FIRST_PLAYER};

/// Player identifiers keyed by mark. Serializes as `{"X": .., "O": ..}`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Players {
    #[serde(rename = "X")]
    pub x: Option<String>,
    #[serde(rename = "O")]
    pub o: Option<String>,
}

impl Players {
    /// `X` taken by `id`, `O` still open.
    pub fn hosted_by(id: impl Into<String>) -> Self {
        Players {
            x: Some(id.into()),
            o: None,
        }
    }

    pub fn get(&self, mark: Mark) -> Option<&str> {
        match mark {
            Mark::X => self.x.as_deref(),
            Mark::O => self.o.as_deref(),
        }
    }
}

/// Full game document.
///
/// `created_at`, `updated_at` and `revision` belong to the store: whatever a
/// caller puts there is overwritten on write.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameDocument {
    pub board: FlatRecord,
    pub turn: Mark,
    pub winner: Option<Winner>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub players: Players,
    #[serde(default)]
    pub revision: u64,
}

impl GameDocument {
    /// Document for a fresh game: empty board, `X` to move, no winner.
    pub fn new_game(players: Players) -> Self {
        let now = Utc::now();
        GameDocument {
            board: FlatRecord::from(Board::new()),
            turn: FIRST_PLAYER,
            winner: None,
            created_at: now,
            updated_at: now,
            players,
            revision: 0,
        }
    }

    /// Decode the stored board.
    pub fn board(&self) -> Result<Board, BoardError> {
        Board::try_from(&self.board)
    }

    /// Merge a partial update. Store bookkeeping fields are left alone.
    pub fn apply(&mut self, update: &GameUpdate) {
        self.board = update.board.clone();
        self.turn = update.turn;
        self.winner = update.winner;
    }
}

/// Fields a move changes. `base_revision` is the document revision the move
/// was computed from; stores reject the update if the document has moved on.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameUpdate {
    pub board: FlatRecord,
    pub turn: Mark,
    pub winner: Option<Winner>,
    pub base_revision: u64,
}
