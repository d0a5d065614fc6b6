//! Inbound (driving) ports consumed by inbound adapters.
//!
//! - [`shutdown`]: decides the optional exit-time auction scan

pub mod shutdown;
