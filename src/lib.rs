/* src/lib.rs */

//!
//! A hot-reloadable configuration value.
//!
//! A [`ConfigHolder`] keeps one decoded config value in memory and refreshes
//! it from a pluggable [`Fetcher`] without blocking readers. Failed refreshes
//! are recorded but never disturb the last-known-good value.
//!
//! - **holder**: The holder, its freshness and error bookkeeping, and the periodic refresh loop.
//! - **fetcher**: The [`Fetcher`] capability, a closure adapter, and [`Pipeline`] (Source + Decoder).
//! - **source**: Where raw bytes come from (memory, files, bucket-style object stores).
//! - **decoder**: How raw bytes become a typed value (serde formats or plain functions).
//! - **controller**: [`HotConfig`](controller::HotConfig), a holder plus its managed background task.
//!
//! ## Feature Flags
//!
//! - `full`: Enables all features.
//! - `controller`: Enables the `HotConfig` controller.
//! - `events`: Enables refresh event broadcasting from `ConfigHolder`.
//! - `stream`: Exposes events as a `futures_util::Stream`.
//! - `fs`: Enables `FileSource`.
//! - `json`, `toml`, `yaml`, `postcard`: Serde decoder formats.
//! - `serde`: Derives `Serialize`/`Deserialize` for `RefreshConfig`.
//!
//! ## Basic Usage
//!
//! See `demos/basic.rs` for a complete example.

pub mod decoder;
pub mod fetcher;
pub mod holder;
pub mod source;

#[cfg(feature = "controller")]
pub mod controller;

pub use fetcher::{FetchError, FetchFn, Fetcher, Pipeline, fetch_fn};
pub use holder::{ConfigHolder, HoldError, RefreshConfig};
pub use tokio_util::sync::CancellationToken;
