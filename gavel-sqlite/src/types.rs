//! Strongly-typed identifier and timestamp types for the SQLite backend.

mod datetime;
mod ids;

pub use datetime::Timestamp;
pub use ids::AuctionId;
