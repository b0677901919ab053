//! In-memory session store with expiry.
//!
//! Records sit in a `moka` cache that evicts each one once its session's
//! expiry date passes, or after the idle timeout without access. Nothing
//! outlives the process.

use std::time::{Duration, Instant};

use async_trait::async_trait;
use moka::{Expiry, future::Cache};
use tower_sessions::{
    SessionStore,
    cookie::time::OffsetDateTime,
    session::{Id, Record},
    session_store,
};

/// Upper bound on live sessions kept in memory.
const MAX_SESSIONS: u64 = 100_000;

/// Expires each cache entry at its record's expiry date.
struct RecordExpiry;

impl RecordExpiry {
    fn remaining(record: &Record) -> Duration {
        Duration::try_from(record.expiry_date - OffsetDateTime::now_utc())
            .unwrap_or(Duration::ZERO)
    }
}

impl Expiry<Id, Record> for RecordExpiry {
    fn expire_after_create(
        &self,
        _id: &Id,
        record: &Record,
        _created_at: Instant,
    ) -> Option<Duration> {
        Some(Self::remaining(record))
    }

    fn expire_after_update(
        &self,
        _id: &Id,
        record: &Record,
        _updated_at: Instant,
        _duration_until_expiry: Option<Duration>,
    ) -> Option<Duration> {
        Some(Self::remaining(record))
    }
}

/// Session store backed by a `moka` cache.
#[derive(Debug, Clone)]
pub struct MokaSessionStore {
    cache: Cache<Id, Record>,
}

impl MokaSessionStore {
    /// Create a store whose entries are dropped after `idle` without access.
    #[must_use]
    pub fn new(idle: Duration) -> Self {
        let cache = Cache::builder()
            .max_capacity(MAX_SESSIONS)
            .time_to_idle(idle)
            .expire_after(RecordExpiry)
            .build();
        Self { cache }
    }

    /// Number of sessions currently held.
    ///
    /// Approximate until pending evictions have run.
    #[must_use]
    pub fn len(&self) -> u64 {
        self.cache.entry_count()
    }

    /// Whether the store holds no sessions.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Apply pending evictions now.
    pub async fn sync(&self) {
        self.cache.run_pending_tasks().await;
    }
}

#[async_trait]
impl SessionStore for MokaSessionStore {
    async fn create(&self, record: &mut Record) -> session_store::Result<()> {
        while self.cache.contains_key(&record.id) {
            record.id = Id::default();
        }
        self.cache.insert(record.id, record.clone()).await;
        Ok(())
    }

    async fn save(&self, record: &Record) -> session_store::Result<()> {
        self.cache.insert(record.id, record.clone()).await;
        Ok(())
    }

    async fn load(&self, session_id: &Id) -> session_store::Result<Option<Record>> {
        Ok(self
            .cache
            .get(session_id)
            .await
            .filter(|record| record.expiry_date > OffsetDateTime::now_utc()))
    }

    async fn delete(&self, session_id: &Id) -> session_store::Result<()> {
        self.cache.invalidate(session_id).await;
        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use tower_sessions::cookie::time;

    use super::*;

    fn record(lifetime: time::Duration) -> Record {
        Record {
            id: Id::default(),
            data: Default::default(),
            expiry_date: OffsetDateTime::now_utc() + lifetime,
        }
    }

    #[tokio::test]
    async fn test_save_and_load() {
        let store = MokaSessionStore::new(Duration::from_secs(60));
        let mut rec = record(time::Duration::minutes(30));
        store.create(&mut rec).await.unwrap();

        assert_eq!(store.load(&rec.id).await.unwrap(), Some(rec));
    }

    #[tokio::test]
    async fn test_delete() {
        let store = MokaSessionStore::new(Duration::from_secs(60));
        let mut rec = record(time::Duration::minutes(30));
        store.create(&mut rec).await.unwrap();
        store.delete(&rec.id).await.unwrap();

        assert_eq!(store.load(&rec.id).await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_create_avoids_id_collision() {
        let store = MokaSessionStore::new(Duration::from_secs(60));
        let mut first = record(time::Duration::minutes(30));
        store.create(&mut first).await.unwrap();

        let mut second = record(time::Duration::minutes(30));
        second.id = first.id;
        store.create(&mut second).await.unwrap();

        assert_ne!(first.id, second.id);
    }

    #[tokio::test]
    async fn test_expired_record_is_evicted() {
        let store = MokaSessionStore::new(Duration::from_secs(60));
        let mut rec = record(time::Duration::milliseconds(50));
        store.create(&mut rec).await.unwrap();
        store.sync().await;
        assert_eq!(store.len(), 1);

        tokio::time::sleep(Duration::from_millis(150)).await;

        assert_eq!(store.load(&rec.id).await.unwrap(), None);
        store.sync().await;
        assert!(store.is_empty());
    }

    #[tokio::test]
    async fn test_idle_record_is_evicted() {
        let store = MokaSessionStore::new(Duration::from_millis(50));
        let mut rec = record(time::Duration::minutes(30));
        store.create(&mut rec).await.unwrap();

        tokio::time::sleep(Duration::from_millis(150)).await;

        assert_eq!(store.load(&rec.id).await.unwrap(), None);
        store.sync().await;
        assert!(store.is_empty());
    }
}
