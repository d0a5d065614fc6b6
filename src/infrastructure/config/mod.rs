//! Infrastructure configuration modules.

pub mod logging;
pub mod notify;
pub mod schedule;
pub mod settings;
pub mod shutdown;
