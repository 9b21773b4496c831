use gavel_core::models::AuctionDraft;
use gavel_lifecycle::{AuctionService, Sweeper};
use gavel_sqlite::Db;
use gaveld::{AppConfig, Cli, Command};
use tokio::sync::watch;
use tracing_subscriber::{layer::SubscriberExt as _, util::SubscriberInitExt as _};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // By convention, we leverage `tracing` to instrument and log various
    // operations throughout this project, so subscribe to these events and
    // write them to stdio.
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::import()?;
    let AppConfig {
        database,
        lifecycle,
    } = AppConfig::load(&cli)?;

    let db = Db::open(&database).await?;
    let lifetime = lifecycle.lifetime_source();

    match cli.command {
        Command::Create {
            product_name,
            category,
            description,
            condition,
        } => {
            let service = AuctionService::new(db, lifetime);
            let auction_id = service
                .create_auction(AuctionDraft {
                    product_name,
                    category,
                    description,
                    condition,
                })
                .await?;

            // The deferred closer dies with this short-lived process; a
            // running daemon's sweeper closes the auction instead.
            println!("{auction_id}");
        }
        Command::Run => {
            let (shutdown_tx, shutdown_rx) = watch::channel(false);

            tokio::spawn(async move {
                if let Err(error) = tokio::signal::ctrl_c().await {
                    tracing::error!(%error, "failed to listen for shutdown signal");
                }
                tracing::info!("shutdown signal received");
                let _ = shutdown_tx.send(true);
            });

            Sweeper::new(db, lifetime).run(shutdown_rx).await;
        }
    }

    Ok(())
}
