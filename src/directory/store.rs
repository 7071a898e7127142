use std::time::{Duration, Instant};
use tokio::sync::{Mutex, RwLock};

use crate::client::{SourceError, UpstreamClient};
use crate::models::photographers::PhotographerRecord;

/// How many collection re-fetches a missing id may trigger before the miss
/// becomes a not-found.
const RECONCILE_ATTEMPTS: u32 = 3;
/// Quiet period between reconciliation attempts.
const RETRY_DELAY: Duration = Duration::from_millis(500);
/// A refresh that finished this recently satisfies later refresh requests.
const REFRESH_COOLDOWN: Duration = Duration::from_millis(400);

/// In-memory snapshot of the photographer collection.
///
/// Loaded once at startup and replaced wholesale by reconciliation refreshes;
/// individual records are never mutated. Refreshes are serialized behind a
/// lock, so the snapshot always reflects exactly one complete upstream
/// response and a burst of concurrent misses collapses into a single fetch.
pub struct DirectoryStore {
    client: UpstreamClient,
    records: RwLock<Vec<PhotographerRecord>>,
    last_refresh: Mutex<Option<Instant>>,
}

impl DirectoryStore {
    /// Fetch the collection and build the store. Fails if the upstream is
    /// unreachable — there is no degraded empty-snapshot mode.
    pub async fn load(client: UpstreamClient) -> Result<Self, SourceError> {
        let records = client.fetch_all().await?;
        tracing::info!(count = records.len(), "Loaded photographer collection");
        Ok(Self::with_records(client, records))
    }

    /// Build a store from records already in hand.
    pub fn with_records(client: UpstreamClient, records: Vec<PhotographerRecord>) -> Self {
        Self {
            client,
            records: RwLock::new(records),
            last_refresh: Mutex::new(None),
        }
    }

    /// Snapshot of every record, in upstream order.
    pub async fn all(&self) -> Vec<PhotographerRecord> {
        self.records.read().await.clone()
    }

    pub async fn len(&self) -> usize {
        self.records.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.records.read().await.is_empty()
    }

    /// Look up a record in the current snapshot.
    pub async fn get(&self, id: u64) -> Option<PhotographerRecord> {
        self.records.read().await.iter().find(|p| p.id == id).cloned()
    }

    /// Look up a record, reconciling with the upstream on a miss.
    ///
    /// The detail route can be reached before a newly-added record has made it
    /// into the snapshot; on a miss the whole collection is re-fetched and
    /// re-checked, at most [`RECONCILE_ATTEMPTS`] times, before the miss is
    /// reported as [`SourceError::NotFound`]. A transport or HTTP failure
    /// during a re-fetch aborts the loop immediately — only not-found is
    /// retried.
    pub async fn get_or_reconcile(&self, id: u64) -> Result<PhotographerRecord, SourceError> {
        if let Some(found) = self.get(id).await {
            return Ok(found);
        }

        for attempt in 1..=RECONCILE_ATTEMPTS {
            if attempt > 1 {
                tokio::time::sleep(RETRY_DELAY).await;
            }
            tracing::debug!(id, attempt, "Photographer missing from snapshot, re-fetching collection");
            self.refresh().await?;
            if let Some(found) = self.get(id).await {
                return Ok(found);
            }
        }

        Err(SourceError::NotFound(id))
    }

    /// Replace the snapshot with a fresh upstream fetch.
    ///
    /// Holding the gate across the fetch serializes refreshes; a caller that
    /// queued behind a refresh which finished inside the cooldown window gets
    /// that result instead of issuing another fetch.
    async fn refresh(&self) -> Result<(), SourceError> {
        let mut last = self.last_refresh.lock().await;
        if let Some(at) = *last {
            if at.elapsed() < REFRESH_COOLDOWN {
                return Ok(());
            }
        }

        let fresh = self.client.fetch_all().await?;
        tracing::debug!(count = fresh.len(), "Refreshed photographer collection");
        *self.records.write().await = fresh;
        *last = Some(Instant::now());
        Ok(())
    }
}
