#![warn(missing_docs)]
#![doc = include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/README.md"))]

mod cli;
pub use cli::{Cli, Command};

mod config;
pub use config::AppConfig;
