//! Command-line interface definition and parsing.

use clap::{Parser, Subcommand};
use gavel_core::models::ProductCondition;
use std::path::PathBuf;

/// Command-line arguments for the auction lifecycle daemon.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Path to configuration file.
    #[arg(short, long, env = "APP_CONFIG")]
    pub config: Option<PathBuf>,

    /// What to do.
    #[command(subcommand)]
    pub command: Command,
}

/// The daemon's operating modes.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Run the expiration sweeper until interrupted.
    Run,

    /// Create a new auction and arm its deferred closer.
    Create {
        /// Name of the product on offer.
        product_name: String,

        /// Product category.
        #[arg(long, default_value = "general")]
        category: String,

        /// Product description.
        #[arg(long, default_value = "")]
        description: String,

        /// Product condition: new, used, or refurbished.
        #[arg(long, default_value = "used")]
        condition: ProductCondition,
    },
}

impl Cli {
    /// Parse command-line arguments.
    pub fn import() -> Result<Self, clap::Error> {
        Self::try_parse()
    }
}
