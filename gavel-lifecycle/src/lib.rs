#![warn(missing_docs)]
#![doc = include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/README.md"))]

pub mod config;

mod lifetime;
pub use lifetime::{
    DEFAULT_LIFETIME, EnvLifetime, FixedLifetime, LIFETIME_VAR, LifetimeSource, resolve_lifetime,
};

mod closer;
pub use closer::{CloseOutcome, close_if_active, spawn_deferred_close};

mod sweeper;
pub use sweeper::Sweeper;

mod service;
pub use service::AuctionService;
