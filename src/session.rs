#![cfg(feature = "std")]

//! Game state shared through a [`GameStore`].
//!
//! A [`GameSession`] keeps the local view of one game (board, turn, winner)
//! and publishes every change on a `watch` channel. Clicks and resets are
//! turned into store writes; snapshots coming back from the store are the
//! only thing that changes the local view.

use chrono::{DateTime, Utc};
use tokio::sync::watch;

use crate::document::{GameDocument, GameUpdate, Players};
use crate::logic::{Board, Mark, Winner, FIRST_PLAYER};
use crate::store::{GameStore, StoreError, Subscription};
use crate::ui::status_text;

/// Local view of the game.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GameState {
    pub board: Board,
    pub turn: Mark,
    pub winner: Option<Winner>,
    /// Revision of the document this state was read from.
    pub revision: u64,
}

impl GameState {
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            turn: FIRST_PLAYER,
            winner: None,
            revision: 0,
        }
    }

    pub fn is_over(&self) -> bool {
        self.winner.is_some()
    }

    /// "Next player: X", "Winner: O" or "A draw!".
    pub fn status(&self) -> String {
        status_text(self.winner, self.turn)
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

/// What became of a click.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveStatus {
    /// The move was written to the store.
    Applied,
    /// Cell already filled or game already decided; nothing was written.
    Ignored,
    /// Another writer got there first; local state was refreshed instead.
    Conflict,
}

pub struct GameSession<S: GameStore> {
    store: S,
    player_id: String,
    state: GameState,
    /// `created_at` of the game `state` belongs to.
    game_started: Option<DateTime<Utc>>,
    subscription: Option<Subscription>,
    changes: watch::Sender<GameState>,
}

impl<S: GameStore> GameSession<S> {
    /// `player_id` is recorded as `X` whenever this session resets the game.
    pub fn new(store: S, player_id: impl Into<String>) -> Self {
        let (changes, _) = watch::channel(GameState::new());
        Self {
            store,
            player_id: player_id.into(),
            state: GameState::new(),
            game_started: None,
            subscription: None,
            changes,
        }
    }

    pub fn state(&self) -> GameState {
        self.state
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Receiver that sees every state change.
    pub fn watch(&self) -> watch::Receiver<GameState> {
        self.changes.subscribe()
    }

    /// Subscribe to the store, creating a fresh game if none exists yet, and
    /// apply whatever snapshots are already available.
    pub async fn connect(&mut self) -> anyhow::Result<()> {
        let mut subscription = self.store.subscribe().await?;
        match self.store.read().await? {
            Some(doc) => self.apply_snapshot(&doc)?,
            None => {
                log::info!("no game document found, starting a new game");
                let doc = self.store.write(self.fresh_document()).await?;
                self.apply_snapshot(&doc)?;
            }
        }
        while let Some(doc) = subscription.try_next() {
            self.apply_snapshot(&doc)?;
        }
        self.subscription = Some(subscription);
        Ok(())
    }

    /// Replace the local view with a document snapshot.
    ///
    /// Snapshots of an older game, or older revisions of the current game,
    /// are skipped. A game started later wins even with a lower revision, so
    /// a store that restarted its count is followed.
    pub fn apply_snapshot(&mut self, doc: &GameDocument) -> anyhow::Result<()> {
        if (Some(doc.created_at), doc.revision) < (self.game_started, self.state.revision) {
            log::debug!(
                "skipping stale snapshot {} (at {})",
                doc.revision,
                self.state.revision
            );
            return Ok(());
        }
        self.adopt(doc)
    }

    fn adopt(&mut self, doc: &GameDocument) -> anyhow::Result<()> {
        let board = doc
            .board()
            .map_err(|e| anyhow::anyhow!("invalid board in document: {}", e))?;
        let next = GameState {
            board,
            turn: doc.turn,
            winner: doc.winner,
            revision: doc.revision,
        };
        self.game_started = Some(doc.created_at);
        if next != self.state {
            self.state = next;
            self.changes.send_replace(next);
        }
        Ok(())
    }

    /// Apply every snapshot already queued on the subscription.
    pub fn sync(&mut self) -> anyhow::Result<()> {
        let mut pending = Vec::new();
        if let Some(sub) = self.subscription.as_mut() {
            while let Some(doc) = sub.try_next() {
                pending.push(doc);
            }
        }
        for doc in pending.iter() {
            self.apply_snapshot(doc)?;
        }
        Ok(())
    }

    /// Wait for the next snapshot from the store and apply it.
    pub async fn next_change(&mut self) -> anyhow::Result<GameState> {
        let sub = self
            .subscription
            .as_mut()
            .ok_or_else(|| anyhow::anyhow!("session is not connected"))?;
        let doc = sub.next().await?;
        self.apply_snapshot(&doc)?;
        Ok(self.state)
    }

    /// Play the current turn's mark at (row, col).
    ///
    /// The turn passes to the opponent unless the move decides the game.
    pub async fn handle_click(&mut self, row: usize, col: usize) -> anyhow::Result<MoveStatus> {
        let state = self.state;
        if state.board.get(row, col)?.is_some() || state.is_over() {
            log::debug!("ignoring click on ({}, {})", row, col);
            return Ok(MoveStatus::Ignored);
        }
        let result = state.board.make_move(row, col, state.turn)?;
        let turn = if result.winner.is_some() {
            state.turn
        } else {
            state.turn.opposite()
        };
        let update = GameUpdate {
            board: result.board.into(),
            turn,
            winner: result.winner,
            base_revision: state.revision,
        };
        match self.store.update(update).await {
            Ok(doc) => {
                log::info!("{} played ({}, {})", state.turn, row, col);
                self.apply_snapshot(&doc)?;
                Ok(MoveStatus::Applied)
            }
            Err(e) => match e.downcast_ref::<StoreError>() {
                Some(StoreError::Conflict { .. }) => {
                    log::warn!("move ({}, {}) lost a race: {}", row, col, e);
                    self.refresh().await?;
                    Ok(MoveStatus::Conflict)
                }
                _ => {
                    log::error!("failed to write move ({}, {}): {}", row, col, e);
                    Err(e)
                }
            },
        }
    }

    /// Start over with a brand-new document.
    ///
    /// The written document replaces the local view whatever its revision.
    pub async fn reset(&mut self) -> anyhow::Result<()> {
        // snapshots queued so far belong to the game being replaced
        if let Some(sub) = self.subscription.as_mut() {
            while sub.try_next().is_some() {}
        }
        let doc = self
            .store
            .write(self.fresh_document())
            .await
            .inspect_err(|e| log::error!("failed to reset game: {}", e))?;
        log::info!("game reset at revision {}", doc.revision);
        self.adopt(&doc)
    }

    /// Re-read the document from the store.
    pub async fn refresh(&mut self) -> anyhow::Result<()> {
        if let Some(doc) = self.store.read().await? {
            self.apply_snapshot(&doc)?;
        }
        Ok(())
    }

    fn fresh_document(&self) -> GameDocument {
        GameDocument::new_game(Players::hosted_by(self.player_id.clone()))
    }
}
