//! Storage and change notification for the shared game document.

use core::fmt;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;

use crate::document::{GameDocument, GameUpdate};

/// Where the game document lives.
///
/// Stores assign `created_at`/`updated_at` and bump `revision` on every write.
#[async_trait::async_trait]
pub trait GameStore: Send + Sync {
    /// Current document, or `None` if no game has been written yet.
    async fn read(&self) -> anyhow::Result<Option<GameDocument>>;
    /// Replace the whole document. Returns the document as stored.
    async fn write(&self, doc: GameDocument) -> anyhow::Result<GameDocument>;
    /// Apply a partial update. Fails with [`StoreError::NotFound`] when there
    /// is no document and [`StoreError::Conflict`] when `base_revision` is
    /// stale.
    async fn update(&self, update: GameUpdate) -> anyhow::Result<GameDocument>;
    /// Stream of full snapshots. The current document, if any, is delivered
    /// first.
    async fn subscribe(&self) -> anyhow::Result<Subscription>;
}

/// Store failures callers may want to match on (via `downcast_ref`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// No document to update.
    NotFound,
    /// Update was computed from an older revision.
    Conflict { expected: u64, actual: u64 },
    /// Subscription ended.
    Closed,
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoreError::NotFound => write!(f, "Game document does not exist"),
            StoreError::Conflict { expected, actual } => write!(
                f,
                "Stale update: based on revision {}, document is at revision {}",
                expected, actual
            ),
            StoreError::Closed => write!(f, "Subscription closed"),
        }
    }
}

impl std::error::Error for StoreError {}

/// Snapshot stream returned by [`GameStore::subscribe`].
///
/// Dropping it stops any background task feeding it.
pub struct Subscription {
    rx: mpsc::UnboundedReceiver<GameDocument>,
    task: Option<JoinHandle<()>>,
}

impl Subscription {
    pub fn new(rx: mpsc::UnboundedReceiver<GameDocument>) -> Self {
        Self { rx, task: None }
    }

    /// Subscription fed by a background task that is aborted on drop.
    pub fn with_task(rx: mpsc::UnboundedReceiver<GameDocument>, task: JoinHandle<()>) -> Self {
        Self {
            rx,
            task: Some(task),
        }
    }

    /// Wait for the next snapshot.
    pub async fn next(&mut self) -> anyhow::Result<GameDocument> {
        self.rx
            .recv()
            .await
            .ok_or_else(|| anyhow::anyhow!(StoreError::Closed))
    }

    /// Next snapshot if one is already queued.
    pub fn try_next(&mut self) -> Option<GameDocument> {
        self.rx.try_recv().ok()
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(task) = self.task.take() {
            task.abort();
        }
    }
}

pub(crate) fn check_revision(current: &GameDocument, update: &GameUpdate) -> anyhow::Result<()> {
    if current.revision != update.base_revision {
        return Err(anyhow::anyhow!(StoreError::Conflict {
            expected: update.base_revision,
            actual: current.revision,
        }));
    }
    Ok(())
}

pub mod file;
pub mod in_memory;
