mod auction;

pub use auction::{AuctionRepository, Repository};
