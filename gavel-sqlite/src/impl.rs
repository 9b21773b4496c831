//! Repository trait implementations for the SQLite database.

use crate::{
    Db,
    types::{AuctionId, Timestamp},
};
use gavel_core::ports::Repository;

mod auction;

impl Repository for Db {
    type Error = sqlx::Error;
    type DateTime = Timestamp;
    type AuctionId = AuctionId;
}
