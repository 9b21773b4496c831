use crate::models::{AuctionRecord, AuctionStatus};
use std::fmt::{Debug, Display};

/// Associated types shared by every repository port.
///
/// Backends own their temporal and identifier representations; the engine
/// only requires what it needs to log, clone, and move values across tasks.
pub trait Repository {
    /// Backend error type surfaced through every port method.
    ///
    /// A store-level failure (connectivity, timeout) is reported through this
    /// type and never silently swallowed by the engine.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Backend-owned temporal type.
    type DateTime: Clone + Debug + Send + Sync + 'static;

    /// Backend-owned auction identifier.
    type AuctionId: Clone + Debug + Display + Send + Sync + 'static;
}

/// Repository interface for auction persistence and the atomic status update.
///
/// The conditional update is the sole coordination point between the
/// per-auction deferred closer and the periodic sweeper: there is no
/// process-side locking anywhere, so an implementation must evaluate the
/// status predicate and apply the new status atomically.
pub trait AuctionRepository: Repository {
    /// Persist a new auction.
    fn insert_auction(
        &self,
        record: AuctionRecord<Self::DateTime, Self::AuctionId>,
    ) -> impl Future<Output = Result<(), Self::Error>> + Send;

    /// Retrieve an auction by id, returning `None` if it does not exist.
    fn get_auction(
        &self,
        auction_id: Self::AuctionId,
    ) -> impl Future<Output = Result<Option<AuctionRecord<Self::DateTime, Self::AuctionId>>, Self::Error>>
    + Send;

    /// Set the auction's status to `new` only if it currently equals `expected`.
    ///
    /// # Returns
    ///
    /// The number of records matched by the predicate: 1 if this call
    /// performed the transition, 0 if the auction was in another state or
    /// does not exist. Racing callers are safe; at most one observes a match.
    fn update_auction_status(
        &self,
        auction_id: Self::AuctionId,
        expected: AuctionStatus,
        new: AuctionStatus,
    ) -> impl Future<Output = Result<u64, Self::Error>> + Send;

    /// Query all Active auctions created at or before `cutoff`.
    ///
    /// The result is the finite batch of candidates for one expiration sweep,
    /// ordered oldest first.
    fn query_active_older_than(
        &self,
        cutoff: Self::DateTime,
    ) -> impl Future<
        Output = Result<Vec<AuctionRecord<Self::DateTime, Self::AuctionId>>, Self::Error>,
    > + Send;
}
