mod auction;

pub use auction::{AuctionDraft, AuctionRecord, AuctionStatus, ParseLabelError, ProductCondition};
