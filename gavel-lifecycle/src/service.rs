//! The external-facing auction creation flow.

use crate::closer::spawn_deferred_close;
use crate::lifetime::LifetimeSource;
use gavel_core::models::{AuctionDraft, AuctionRecord, AuctionStatus};
use gavel_core::ports::AuctionRepository;
use std::sync::Arc;
use time::OffsetDateTime;
use uuid::Uuid;

/// Creates auctions and arms their deferred closers.
pub struct AuctionService<R> {
    repo: R,
    lifetime: Arc<dyn LifetimeSource>,
}

impl<R> AuctionService<R>
where
    R: AuctionRepository + Clone + Send + Sync + 'static,
    R::AuctionId: From<Uuid>,
    R::DateTime: From<OffsetDateTime>,
{
    /// A creation service over the given store and lifetime policy.
    pub fn new(repo: R, lifetime: Arc<dyn LifetimeSource>) -> Self {
        Self { repo, lifetime }
    }

    /// Persist a new Active auction, then arm its deferred closer.
    ///
    /// Creation is all-or-nothing with respect to storage: a failed insert is
    /// surfaced to the caller and no timer is armed. The timer launch itself
    /// is fire-and-forget — if the process dies before it fires, the sweeper
    /// closes the auction on a later run.
    pub async fn create_auction(&self, draft: AuctionDraft) -> Result<R::AuctionId, R::Error> {
        let auction_id: R::AuctionId = Uuid::new_v4().into();
        let record = AuctionRecord {
            id: auction_id.clone(),
            product_name: draft.product_name,
            category: draft.category,
            description: draft.description,
            condition: draft.condition,
            status: AuctionStatus::Active,
            created_at: OffsetDateTime::now_utc().into(),
        };

        self.repo.insert_auction(record).await?;
        spawn_deferred_close(
            self.repo.clone(),
            auction_id.clone(),
            Arc::clone(&self.lifetime),
        );

        Ok(auction_id)
    }
}
