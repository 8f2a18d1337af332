/* src/holder/mod.rs */

//!
//! The hot config holder: one value, refreshed in place, readable at any time.

mod config;
mod error;
#[cfg(feature = "events")]
mod event;
mod fault;
mod meta;
mod snapshot;
mod store;
#[cfg(feature = "stream")]
mod stream;

pub use config::RefreshConfig;
pub use error::HoldError;
#[cfg(feature = "events")]
pub use event::HoldEvent;
pub use fault::{Fault, Health};
pub use meta::Meta;
pub use snapshot::Snapshot;
#[cfg(feature = "events")]
pub use store::DEFAULT_EVENT_CAPACITY;
pub use store::ConfigHolder;
#[cfg(feature = "stream")]
pub use stream::EventStream;
