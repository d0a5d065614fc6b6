//! Outbound adapters (driven side).

pub mod clock;
pub mod csfloat;
pub mod notifier;
