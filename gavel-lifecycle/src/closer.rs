//! The idempotent closing primitive and the per-auction deferred closer.

use crate::lifetime::{LifetimeSource, resolve_lifetime};
use gavel_core::models::AuctionStatus;
use gavel_core::ports::AuctionRepository;
use std::sync::Arc;

/// The observable result of a conditional close attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CloseOutcome {
    /// This call performed the Active → Completed transition.
    Closed,
    /// Another path got there first, or the auction no longer exists.
    ///
    /// Not an error: the desired end state holds either way.
    AlreadyClosed,
}

/// Attempt the Active → Completed transition for one auction.
///
/// Issues a single conditional update against the store. Any number of
/// callers may race on the same id; the store's atomic predicate guarantees
/// exactly one of them observes a matched record.
pub async fn close_if_active<R>(
    repo: &R,
    auction_id: R::AuctionId,
) -> Result<CloseOutcome, R::Error>
where
    R: AuctionRepository,
{
    let matched = repo
        .update_auction_status(auction_id, AuctionStatus::Active, AuctionStatus::Completed)
        .await?;

    Ok(if matched > 0 {
        CloseOutcome::Closed
    } else {
        CloseOutcome::AlreadyClosed
    })
}

/// Arm the per-auction deferred closer.
///
/// Fire and forget: no handle is returned and outcomes are observable only
/// through logs and the store's state. The task resolves the lifetime once,
/// sleeps for it, attempts a single conditional close, and terminates without
/// retrying. If it never runs — the process restarted before the timer fired —
/// the sweeper closes the auction instead.
pub fn spawn_deferred_close<R>(repo: R, auction_id: R::AuctionId, lifetime: Arc<dyn LifetimeSource>)
where
    R: AuctionRepository + Send + Sync + 'static,
{
    tokio::spawn(async move {
        let lifetime = resolve_lifetime(lifetime.as_ref());
        tracing::info!(
            auction_id = %auction_id,
            lifetime_secs = lifetime.as_secs(),
            "auction will close automatically"
        );
        tokio::time::sleep(lifetime).await;

        match close_if_active(&repo, auction_id.clone()).await {
            Ok(CloseOutcome::Closed) => {
                tracing::info!(auction_id = %auction_id, "auction closed automatically");
            }
            Ok(CloseOutcome::AlreadyClosed) => {
                tracing::debug!(auction_id = %auction_id, "auction was already closed");
            }
            Err(error) => {
                tracing::error!(auction_id = %auction_id, %error, "failed to close auction");
            }
        }
    });
}
