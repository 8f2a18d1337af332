/* src/holder/snapshot.rs */

use std::sync::Arc;

use super::Meta;

/// A config value together with the metadata of the fetch that produced it.
///
/// Value and metadata are swapped in as one unit, so a reader holding a
/// snapshot always sees a consistent pair.
#[derive(Debug)]
pub struct Snapshot<T> {
	/// The config value wrapped in Arc for efficient sharing.
	pub value: Arc<T>,
	pub meta: Meta,
}

impl<T> Clone for Snapshot<T> {
	fn clone(&self) -> Self {
		Self {
			value: Arc::clone(&self.value),
			meta: self.meta,
		}
	}
}
