use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use chrono::Utc;
use tokio::sync::{mpsc, Mutex};
use tokio::time::{interval, Duration, MissedTickBehavior};

use crate::config::DEFAULT_POLL_INTERVAL;
use crate::document::{GameDocument, GameUpdate};
use crate::store::{check_revision, GameStore, StoreError, Subscription};

/// Store backed by a JSON file, so separate processes can share one game.
///
/// Writes go to a sibling temporary file that is then renamed over the
/// document. Writers in the same process are serialized; writers in
/// different processes are only protected by the revision check, which
/// leaves a small window between read and rename.
///
/// Subscriptions poll the file and emit a snapshot whenever the revision or
/// `updated_at` changes.
#[derive(Clone)]
pub struct JsonFileStore {
    path: PathBuf,
    poll_interval: Duration,
    write_lock: Arc<Mutex<()>>,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self::with_poll_interval(path, DEFAULT_POLL_INTERVAL)
    }

    pub fn with_poll_interval(path: impl Into<PathBuf>, poll_interval: Duration) -> Self {
        Self {
            path: path.into(),
            poll_interval,
            write_lock: Arc::new(Mutex::new(())),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn persist(&self, doc: &GameDocument) -> anyhow::Result<()> {
        let json = serde_json::to_string_pretty(doc)?;
        let mut tmp = self.path.clone().into_os_string();
        tmp.push(".tmp");
        let tmp = PathBuf::from(tmp);
        tokio::fs::write(&tmp, json).await?;
        tokio::fs::rename(&tmp, &self.path).await?;
        Ok(())
    }
}

async fn read_document(path: &Path) -> anyhow::Result<Option<GameDocument>> {
    match tokio::fs::read_to_string(path).await {
        Ok(text) => Ok(Some(serde_json::from_str(&text)?)),
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
        Err(e) => Err(e.into()),
    }
}

#[async_trait::async_trait]
impl GameStore for JsonFileStore {
    async fn read(&self) -> anyhow::Result<Option<GameDocument>> {
        read_document(&self.path).await
    }

    async fn write(&self, mut doc: GameDocument) -> anyhow::Result<GameDocument> {
        let _guard = self.write_lock.lock().await;
        let previous = read_document(&self.path).await.unwrap_or_else(|e| {
            log::warn!("replacing unreadable document {}: {}", self.path.display(), e);
            None
        });
        let now = Utc::now();
        doc.created_at = now;
        doc.updated_at = now;
        doc.revision = previous.map_or(0, |d| d.revision) + 1;
        self.persist(&doc).await?;
        log::debug!("{}: wrote revision {}", self.path.display(), doc.revision);
        Ok(doc)
    }

    async fn update(&self, update: GameUpdate) -> anyhow::Result<GameDocument> {
        let _guard = self.write_lock.lock().await;
        let mut doc = read_document(&self.path)
            .await?
            .ok_or_else(|| anyhow::anyhow!(StoreError::NotFound))?;
        check_revision(&doc, &update)?;
        doc.apply(&update);
        doc.updated_at = Utc::now();
        doc.revision += 1;
        self.persist(&doc).await?;
        log::debug!("{}: updated to revision {}", self.path.display(), doc.revision);
        Ok(doc)
    }

    async fn subscribe(&self) -> anyhow::Result<Subscription> {
        let (tx, rx) = mpsc::unbounded_channel();
        let path = self.path.clone();
        let period = self.poll_interval;
        let task = tokio::spawn(async move {
            let mut ticker = interval(period);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
            let mut last_seen = None;
            loop {
                ticker.tick().await;
                let doc = match read_document(&path).await {
                    Ok(Some(doc)) => doc,
                    Ok(None) => continue,
                    Err(e) => {
                        log::warn!("polling {}: {}", path.display(), e);
                        continue;
                    }
                };
                let stamp = (doc.revision, doc.updated_at);
                if last_seen == Some(stamp) {
                    continue;
                }
                last_seen = Some(stamp);
                if tx.send(doc).is_err() {
                    break;
                }
            }
        });
        Ok(Subscription::with_task(rx, task))
    }
}
