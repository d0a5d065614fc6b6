//! CSFloat marketplace adapter.
//!
//! Implements [`ListingFeed`](crate::port::ListingFeed) over the public
//! listings endpoint.

mod client;
mod dto;
mod settings;

pub use client::CsfloatClient;
pub use settings::CsfloatConfig;
