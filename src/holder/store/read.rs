/* src/holder/store/read.rs */

use std::sync::Arc;
use std::sync::atomic::Ordering;
use std::time::SystemTime;

#[cfg(feature = "events")]
use super::super::HoldEvent;
use super::super::{Fault, Health, HoldError, Snapshot};
use super::ConfigHolder;

impl<T> ConfigHolder<T>
where
	T: Send + Sync + 'static,
{
	/// Returns the current value. This is a wait-free operation.
	///
	/// Fails only with [`HoldError::NotInitialized`]. Once a fetch has
	/// succeeded this never fails again, even if every later refresh does;
	/// check [`last_updated`](Self::last_updated) for freshness.
	pub fn read(&self) -> Result<Arc<T>, HoldError> {
		self.get().ok_or(HoldError::NotInitialized)
	}

	/// Returns the current value, or `None` before the first successful fetch.
	pub fn get(&self) -> Option<Arc<T>> {
		(*self.current.load())
			.as_ref()
			.map(|snapshot| Arc::clone(&snapshot.value))
	}

	/// Returns the current value, or `fallback` before the first successful fetch.
	pub fn read_or(&self, fallback: T) -> Arc<T> {
		self.get().unwrap_or_else(|| Arc::new(fallback))
	}

	/// Returns value and metadata as one consistent unit.
	pub fn snapshot(&self) -> Option<Arc<Snapshot<T>>> {
		self.current.load_full()
	}

	/// Time of the most recent successful fetch, `None` if never initialized.
	pub fn last_updated(&self) -> Option<SystemTime> {
		(*self.current.load())
			.as_ref()
			.map(|snapshot| snapshot.meta.updated_at)
	}

	/// Number of successful refreshes so far.
	pub fn version(&self) -> u64 {
		(*self.current.load())
			.as_ref()
			.map_or(0, |snapshot| snapshot.meta.version)
	}

	/// The most recent failure, if any.
	///
	/// A later success does not clear this record; compare
	/// [`Fault::at`] with [`last_updated`](Self::last_updated) or use
	/// [`health`](Self::health) to know whether the failure is still current.
	pub fn last_error(&self) -> Option<Fault> {
		(*self.fault.load()).as_deref().cloned()
	}

	/// Failures since the last success (or since creation).
	pub fn consecutive_failures(&self) -> u32 {
		self.failures.load(Ordering::SeqCst)
	}

	pub fn is_initialized(&self) -> bool {
		self.current.load().is_some()
	}

	pub fn health(&self) -> Health {
		if !self.is_initialized() {
			return Health::Uninitialized;
		}
		match self.consecutive_failures() {
			0 => Health::Healthy,
			consecutive => Health::Degraded { consecutive },
		}
	}

	/// Subscribes to refresh events.
	#[cfg(feature = "events")]
	pub fn subscribe(&self) -> tokio::sync::broadcast::Receiver<HoldEvent<T>> {
		self.events.subscribe()
	}

	/// Subscribes to refresh events as a stream.
	#[cfg(feature = "stream")]
	pub fn stream(&self) -> super::super::EventStream<T> {
		super::super::EventStream {
			inner: tokio_stream::wrappers::BroadcastStream::new(self.subscribe()),
		}
	}
}
