use gavel_core::models::{AuctionDraft, AuctionRecord, AuctionStatus, ProductCondition};
use gavel_core::ports::AuctionRepository as _;
use gavel_lifecycle::{AuctionService, CloseOutcome, FixedLifetime, Sweeper, close_if_active};
use gavel_sqlite::{
    Db,
    config::SqliteConfig,
    types::{AuctionId, Timestamp},
};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::watch;

/// A throwaway on-disk database.
///
/// The reader and writer pools must observe the same database; with
/// `:memory:` each new connection gets its own, so tests use real files.
fn temp_config() -> SqliteConfig {
    SqliteConfig {
        database_path: Some(
            std::env::temp_dir().join(format!("gavel-test-{}.db", uuid::Uuid::new_v4())),
        ),
        create_if_missing: true,
    }
}

fn active_record(created_at: Timestamp) -> AuctionRecord<Timestamp, AuctionId> {
    AuctionRecord {
        id: uuid::Uuid::new_v4().into(),
        product_name: "film camera".into(),
        category: "photography".into(),
        description: "35mm rangefinder, light seals replaced".into(),
        condition: ProductCondition::Refurbished,
        status: AuctionStatus::Active,
        created_at,
    }
}

#[tokio::test]
async fn insert_and_get_round_trip() -> anyhow::Result<()> {
    let db = Db::open(&temp_config()).await?;

    let record = active_record(Timestamp::now());
    db.insert_auction(record.clone()).await?;

    let fetched = db.get_auction(record.id).await?.expect("auction exists");
    assert_eq!(fetched, record);

    let missing = db.get_auction(uuid::Uuid::new_v4().into()).await?;
    assert!(missing.is_none());
    Ok(())
}

#[tokio::test(flavor = "multi_thread")]
async fn racing_closes_transition_exactly_once() -> anyhow::Result<()> {
    let db = Db::open(&temp_config()).await?;

    let record = active_record(Timestamp::now());
    let id = record.id;
    db.insert_auction(record).await?;

    let mut handles = Vec::new();
    for _ in 0..20 {
        let db = db.clone();
        handles.push(tokio::spawn(async move { close_if_active(&db, id).await }));
    }

    let mut closed = 0;
    for handle in handles {
        if handle.await?? == CloseOutcome::Closed {
            closed += 1;
        }
    }

    assert_eq!(closed, 1);
    let status = db.get_auction(id).await?.expect("auction exists").status;
    assert_eq!(status, AuctionStatus::Completed);
    Ok(())
}

#[tokio::test]
async fn completed_status_is_final() -> anyhow::Result<()> {
    let db = Db::open(&temp_config()).await?;

    let record = active_record(Timestamp::now());
    let id = record.id;
    db.insert_auction(record).await?;

    assert_eq!(close_if_active(&db, id).await?, CloseOutcome::Closed);
    assert_eq!(close_if_active(&db, id).await?, CloseOutcome::AlreadyClosed);

    // no path transitions a completed auction back
    let matched = db
        .update_auction_status(id, AuctionStatus::Active, AuctionStatus::Completed)
        .await?;
    assert_eq!(matched, 0);
    let status = db.get_auction(id).await?.expect("auction exists").status;
    assert_eq!(status, AuctionStatus::Completed);
    Ok(())
}

#[tokio::test]
async fn sweep_query_selects_only_expired_active_auctions() -> anyhow::Result<()> {
    let db = Db::open(&temp_config()).await?;
    let now = Timestamp::now();

    let stale = active_record(Timestamp(now.0 - 120));
    let fresh = active_record(now);
    let mut finished = active_record(Timestamp(now.0 - 600));
    finished.status = AuctionStatus::Completed;

    db.insert_auction(stale.clone()).await?;
    db.insert_auction(fresh).await?;
    db.insert_auction(finished).await?;

    let cutoff = Timestamp(now.0 - 60);
    let expired = db.query_active_older_than(cutoff).await?;
    assert_eq!(expired.len(), 1);
    assert_eq!(expired[0].id, stale.id);
    Ok(())
}

#[tokio::test]
async fn sweeper_recovers_a_stale_auction() -> anyhow::Result<()> {
    let db = Db::open(&temp_config()).await?;

    // as if created before a restart, with its deferred closer lost
    let record = active_record(Timestamp(Timestamp::now().0 - 3600));
    let id = record.id;
    db.insert_auction(record).await?;

    let (shutdown_tx, shutdown_rx) = watch::channel(false);
    let sweeper = Sweeper::new(db.clone(), Arc::new(FixedLifetime::from_secs(2)));
    let task = tokio::spawn(sweeper.run(shutdown_rx));

    // the first tick fires immediately
    tokio::time::sleep(Duration::from_millis(500)).await;
    let status = db.get_auction(id).await?.expect("auction exists").status;
    assert_eq!(status, AuctionStatus::Completed);

    shutdown_tx.send(true)?;
    tokio::time::timeout(Duration::from_secs(2), task).await??;
    Ok(())
}

#[tokio::test]
async fn created_auction_completes_after_its_lifetime() -> anyhow::Result<()> {
    let db = Db::open(&temp_config()).await?;
    let service = AuctionService::new(db.clone(), Arc::new(FixedLifetime::from_secs(2)));

    let id = service
        .create_auction(AuctionDraft {
            product_name: "espresso machine".into(),
            category: "kitchen".into(),
            description: "dual boiler, descaled".into(),
            condition: ProductCondition::Used,
        })
        .await?;

    tokio::time::sleep(Duration::from_secs(1)).await;
    let status = db.get_auction(id).await?.expect("auction exists").status;
    assert_eq!(status, AuctionStatus::Active);

    tokio::time::sleep(Duration::from_secs(2)).await;
    let status = db.get_auction(id).await?.expect("auction exists").status;
    assert_eq!(status, AuctionStatus::Completed);
    Ok(())
}
