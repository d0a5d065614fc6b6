//! Outbound ports (driven side): interfaces implemented by outbound adapters.

pub mod clock;
pub mod feed;
pub mod notifier;
