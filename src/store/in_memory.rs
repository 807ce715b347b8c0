use std::sync::Arc;

use chrono::Utc;
use tokio::sync::{mpsc, Mutex};

use crate::document::{GameDocument, GameUpdate};
use crate::store::{check_revision, GameStore, StoreError, Subscription};

/// Process-local store. Clones share the same document, so two sessions
/// built from clones of one store play the same game.
#[derive(Clone, Default)]
pub struct InMemoryStore {
    inner: Arc<Mutex<Inner>>,
}

#[derive(Default)]
struct Inner {
    doc: Option<GameDocument>,
    subscribers: Vec<mpsc::UnboundedSender<GameDocument>>,
}

impl Inner {
    fn publish(&mut self, doc: &GameDocument) {
        self.subscribers.retain(|tx| tx.send(doc.clone()).is_ok());
    }
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of live subscriptions, counting any whose receiver was dropped
    /// since the last write.
    pub async fn subscriber_count(&self) -> usize {
        self.inner.lock().await.subscribers.len()
    }
}

#[async_trait::async_trait]
impl GameStore for InMemoryStore {
    async fn read(&self) -> anyhow::Result<Option<GameDocument>> {
        Ok(self.inner.lock().await.doc.clone())
    }

    async fn write(&self, mut doc: GameDocument) -> anyhow::Result<GameDocument> {
        let mut inner = self.inner.lock().await;
        let now = Utc::now();
        doc.created_at = now;
        doc.updated_at = now;
        doc.revision = inner.doc.as_ref().map_or(0, |d| d.revision) + 1;
        inner.doc = Some(doc.clone());
        inner.publish(&doc);
        log::debug!("in-memory store: wrote revision {}", doc.revision);
        Ok(doc)
    }

    async fn update(&self, update: GameUpdate) -> anyhow::Result<GameDocument> {
        let mut inner = self.inner.lock().await;
        let mut doc = inner
            .doc
            .clone()
            .ok_or_else(|| anyhow::anyhow!(StoreError::NotFound))?;
        check_revision(&doc, &update)?;
        doc.apply(&update);
        doc.updated_at = Utc::now();
        doc.revision += 1;
        inner.doc = Some(doc.clone());
        inner.publish(&doc);
        log::debug!("in-memory store: updated to revision {}", doc.revision);
        Ok(doc)
    }

    async fn subscribe(&self) -> anyhow::Result<Subscription> {
        let mut inner = self.inner.lock().await;
        let (tx, rx) = mpsc::unbounded_channel();
        if let Some(doc) = inner.doc.clone() {
            tx.send(doc)?;
        }
        inner.subscribers.push(tx);
        Ok(Subscription::new(rx))
    }
}
