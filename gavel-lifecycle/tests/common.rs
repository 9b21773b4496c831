use gavel_core::models::{AuctionRecord, AuctionStatus};
use gavel_core::ports::{AuctionRepository, Repository};
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use time::OffsetDateTime;
use uuid::Uuid;

/// An in-memory auction store with the same atomicity contract as a real
/// backend: the status predicate is evaluated and applied under one lock.
///
/// `set_offline` makes every operation fail, simulating a store outage.
#[derive(Clone, Default)]
pub struct MemoryStore {
    auctions: Arc<Mutex<HashMap<Uuid, AuctionRecord<OffsetDateTime, Uuid>>>>,
    offline: Arc<AtomicBool>,
    queries: Arc<AtomicUsize>,
}

/// The only failure mode the mock store knows.
#[derive(Debug, thiserror::Error)]
#[error("store offline")]
pub struct StoreOffline;

impl MemoryStore {
    pub fn set_offline(&self, offline: bool) {
        self.offline.store(offline, Ordering::SeqCst);
    }

    /// Number of sweep queries attempted so far, successful or not.
    pub fn queries(&self) -> usize {
        self.queries.load(Ordering::SeqCst)
    }

    pub fn is_empty(&self) -> bool {
        self.auctions.lock().unwrap().is_empty()
    }

    /// Seed a record directly, bypassing the creation flow.
    pub fn seed(&self, record: AuctionRecord<OffsetDateTime, Uuid>) {
        self.auctions.lock().unwrap().insert(record.id, record);
    }

    pub fn status_of(&self, auction_id: Uuid) -> Option<AuctionStatus> {
        self.auctions
            .lock()
            .unwrap()
            .get(&auction_id)
            .map(|record| record.status)
    }

    fn check_online(&self) -> Result<(), StoreOffline> {
        if self.offline.load(Ordering::SeqCst) {
            Err(StoreOffline)
        } else {
            Ok(())
        }
    }
}

impl Repository for MemoryStore {
    type Error = StoreOffline;
    type DateTime = OffsetDateTime;
    type AuctionId = Uuid;
}

impl AuctionRepository for MemoryStore {
    async fn insert_auction(
        &self,
        record: AuctionRecord<OffsetDateTime, Uuid>,
    ) -> Result<(), StoreOffline> {
        self.check_online()?;
        self.auctions.lock().unwrap().insert(record.id, record);
        Ok(())
    }

    async fn get_auction(
        &self,
        auction_id: Uuid,
    ) -> Result<Option<AuctionRecord<OffsetDateTime, Uuid>>, StoreOffline> {
        self.check_online()?;
        Ok(self.auctions.lock().unwrap().get(&auction_id).cloned())
    }

    async fn update_auction_status(
        &self,
        auction_id: Uuid,
        expected: AuctionStatus,
        new: AuctionStatus,
    ) -> Result<u64, StoreOffline> {
        self.check_online()?;
        let mut auctions = self.auctions.lock().unwrap();
        match auctions.get_mut(&auction_id) {
            Some(record) if record.status == expected => {
                record.status = new;
                Ok(1)
            }
            _ => Ok(0),
        }
    }

    async fn query_active_older_than(
        &self,
        cutoff: OffsetDateTime,
    ) -> Result<Vec<AuctionRecord<OffsetDateTime, Uuid>>, StoreOffline> {
        self.queries.fetch_add(1, Ordering::SeqCst);
        self.check_online()?;
        let auctions = self.auctions.lock().unwrap();
        let mut expired: Vec<_> = auctions
            .values()
            .filter(|record| record.status == AuctionStatus::Active && record.created_at <= cutoff)
            .cloned()
            .collect();
        expired.sort_by_key(|record| record.created_at);
        Ok(expired)
    }
}
