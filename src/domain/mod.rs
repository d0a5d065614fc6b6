//! Marketplace listing domain: listings, deal classification and deduplication.

mod classifier;
mod dedup;
mod listing;
mod session;

pub use classifier::{
    classify, discount_pct, DealCriteria, MissingField, ReferenceSource, Rejection, Verdict,
};
pub use dedup::{DedupKey, DedupStore};
pub use listing::{AuctionDetails, Cents, Item, Listing, ListingType, ReferenceData, Wear};
pub use session::SessionState;
