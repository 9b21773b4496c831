//! The periodic expiration sweep.

use crate::closer::{CloseOutcome, close_if_active};
use crate::lifetime::{LifetimeSource, resolve_lifetime};
use gavel_core::ports::AuctionRepository;
use std::sync::Arc;
use time::OffsetDateTime;
use tokio::sync::watch;
use tracing::{Instrument as _, Level, span};

/// The durability backstop for auctions whose deferred closer never ran.
///
/// Wakes on a fixed cadence, queries the store for Active auctions past their
/// deadline, and conditionally closes each one. A failed query or a failed
/// close is contained to that tick; the next tick retries. This is the only
/// path that recovers auctions created before a process restart.
pub struct Sweeper<R> {
    repo: R,
    lifetime: Arc<dyn LifetimeSource>,
}

impl<R> Sweeper<R>
where
    R: AuctionRepository,
    R::DateTime: From<OffsetDateTime>,
{
    /// A sweeper over the given store and lifetime policy.
    pub fn new(repo: R, lifetime: Arc<dyn LifetimeSource>) -> Self {
        Self { repo, lifetime }
    }

    /// Run until `shutdown` is signalled.
    ///
    /// The tick interval is half the lifetime resolved at startup, so every
    /// auction is swept at least once before its own deferred closer's
    /// deadline passes. The lifetime backing the cutoff is re-resolved on
    /// every scan. Shutdown is observed in the same select as the tick: it
    /// takes effect within one interval and never interrupts a scan midway.
    pub async fn run(self, mut shutdown: watch::Receiver<bool>) {
        let tick = resolve_lifetime(self.lifetime.as_ref()) / 2;
        tracing::info!(tick_secs = tick.as_secs(), "starting expiration sweeper");
        let mut interval = tokio::time::interval(tick);

        loop {
            tokio::select! {
                _ = interval.tick() => {
                    let span = span!(Level::INFO, "expiration sweep");
                    self.scan().instrument(span).await;
                }
                _ = shutdown.changed() => {
                    tracing::info!("expiration sweeper shutting down");
                    return;
                }
            }
        }
    }

    async fn scan(&self) {
        let lifetime = resolve_lifetime(self.lifetime.as_ref());
        let cutoff = OffsetDateTime::now_utc() - lifetime;

        let expired = match self.repo.query_active_older_than(cutoff.into()).await {
            Ok(records) => records,
            Err(error) => {
                tracing::error!(%error, "failed to query expired auctions");
                return;
            }
        };

        for record in expired {
            match close_if_active(&self.repo, record.id.clone()).await {
                Ok(CloseOutcome::Closed) => {
                    tracing::info!(auction_id = %record.id, "expired auction closed");
                }
                Ok(CloseOutcome::AlreadyClosed) => {}
                Err(error) => {
                    tracing::error!(auction_id = %record.id, %error, "failed to close expired auction");
                }
            }
        }
    }
}
