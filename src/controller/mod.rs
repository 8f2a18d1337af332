/* src/controller/mod.rs */

//!
//! A holder bundled with the background task that keeps it fresh.
//!
//! - [`HotConfig`] - owns a [`ConfigHolder`](crate::holder::ConfigHolder) and its periodic refresh task

mod error;
mod hot;

pub use error::ControlError;
pub use hot::{HotConfig, HotConfigBuilder};
