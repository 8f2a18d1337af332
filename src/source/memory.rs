/* src/source/memory.rs */

use std::sync::Arc;

use arc_swap::ArcSwapOption;
use async_trait::async_trait;
use tokio_util::sync::CancellationToken;

use super::{Source, SourceError};

/// An in-memory source whose contents can be swapped at runtime.
///
/// Clones share the same slot, so a test or an embedding application can keep
/// one handle to publish new bytes while a holder reads through another.
#[derive(Clone)]
pub struct MemorySource {
	data: Arc<ArcSwapOption<Vec<u8>>>,
}

impl MemorySource {
	/// Creates an empty source. Loading it fails with `NotFound` until [`set`](Self::set) is called.
	pub fn new() -> Self {
		Self {
			data: Arc::new(ArcSwapOption::empty()),
		}
	}

	/// Creates a source that already holds `bytes`.
	pub fn with_bytes(bytes: impl Into<Vec<u8>>) -> Self {
		let source = Self::new();
		source.set(bytes);
		source
	}

	/// Publishes new contents.
	pub fn set(&self, bytes: impl Into<Vec<u8>>) {
		self.data.store(Some(Arc::new(bytes.into())));
	}

	/// Removes the contents, making subsequent loads fail with `NotFound`.
	pub fn clear(&self) {
		self.data.store(None);
	}
}

impl Default for MemorySource {
	fn default() -> Self {
		Self::new()
	}
}

#[async_trait]
impl Source for MemorySource {
	async fn load(&self, _cancel: &CancellationToken) -> Result<Vec<u8>, SourceError> {
		self.data
			.load_full()
			.map(|bytes| (*bytes).clone())
			.ok_or_else(|| SourceError::NotFound(self.describe()))
	}

	fn describe(&self) -> String {
		String::from("memory")
	}
}
