/* src/source/mod.rs */

//!
//! Sources retrieve raw config bytes from a backing store.
//!
//! A [`Source`] is bound to its location when it is built, so every call to
//! [`Source::load`] reads the same logical object. Sources must return
//! promptly once the cancellation token passed to them fires.

mod error;
mod func;
mod memory;
mod object;
mod url;

#[cfg(feature = "fs")]
mod file;

pub use error::SourceError;
pub use func::{SourceFn, source_fn};
pub use memory::MemorySource;
pub use object::{ObjectClient, ObjectSource};
pub use url::ObjectUrl;

#[cfg(feature = "fs")]
pub use file::FileSource;

use std::sync::Arc;

use async_trait::async_trait;
use tokio_util::sync::CancellationToken;

/// Abstract data source that retrieves raw bytes from a fixed location.
#[async_trait]
pub trait Source: Send + Sync {
	/// Reads the raw bytes of the config object.
	async fn load(&self, cancel: &CancellationToken) -> Result<Vec<u8>, SourceError>;

	/// Human-readable location, used in log lines.
	fn describe(&self) -> String {
		String::from("source")
	}
}

#[async_trait]
impl<S> Source for Arc<S>
where
	S: Source + ?Sized,
{
	async fn load(&self, cancel: &CancellationToken) -> Result<Vec<u8>, SourceError> {
		(**self).load(cancel).await
	}

	fn describe(&self) -> String {
		(**self).describe()
	}
}

#[async_trait]
impl<S> Source for Box<S>
where
	S: Source + ?Sized,
{
	async fn load(&self, cancel: &CancellationToken) -> Result<Vec<u8>, SourceError> {
		(**self).load(cancel).await
	}

	fn describe(&self) -> String {
		(**self).describe()
	}
}
