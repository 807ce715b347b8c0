#![cfg(feature = "std")]

//! Runtime defaults; the CLI can override each of them.

use std::path::PathBuf;
use std::time::Duration;

/// Document name used when none is given.
pub const DEFAULT_GAME_ID: &str = "test-game";

/// Identifier recorded for `X` when a game is reset.
pub const DEFAULT_PLAYER_ID: &str = "local-player";

/// How often a file-backed subscription checks for changes.
pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_millis(250);

/// Environment variable holding the log level.
pub const LOG_ENV_VAR: &str = "TICTACTOE_LOG";

/// Default document file for a game id: `<id>.json` in the working directory.
pub fn default_document_path(game_id: &str) -> PathBuf {
    PathBuf::from(format!("{}.json", game_id))
}
