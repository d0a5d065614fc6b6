//! Notification adapters.
//!
//! Implements the `port::Notifier` trait for the supported transports.

#[cfg(feature = "email")]
pub mod email;
pub mod log;
