//! Trait definitions (hexagonal ports). Depend only on domain.
//!
//! ```text
//!                 ┌──────────────────────────┐
//!   ShutdownHook ─┤  Application (scheduler) ├─ ListingFeed
//!                 │                          ├─ Notifier
//!                 └──────────────────────────┴─ Clock
//! ```
//!
//! - [`inbound`]: driving ports used by the CLI and signal layer
//! - [`outbound`]: driven ports implemented by feed, notifier and clock adapters

pub mod inbound;
pub mod outbound;

pub use inbound::shutdown::{FixedShutdown, ShutdownHook};
pub use outbound::clock::Clock;
pub use outbound::feed::{FeedPage, FeedQuery, ListingFeed, SortOrder};
pub use outbound::notifier::{Notification, Notifier, NotifierRegistry, NullNotifier};
