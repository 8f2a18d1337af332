/* src/holder/store/mod.rs */

mod periodic;
mod read;
mod refresh;

use std::fmt;
use std::sync::Arc;
use std::sync::atomic::AtomicU32;

use arc_swap::ArcSwapOption;
use tokio_util::sync::CancellationToken;

use super::{Fault, RefreshConfig, Snapshot};
#[cfg(feature = "events")]
use super::HoldEvent;
use crate::fetcher::Fetcher;

/// Default event channel capacity.
#[cfg(feature = "events")]
pub const DEFAULT_EVENT_CAPACITY: usize = 100;

/// A hot-reloadable config value.
///
/// Uses RCU (Read-Copy-Update) for lock-free reads: the current value and its
/// metadata live in one atomically swapped [`Snapshot`], the latest failure in
/// another. Fetching happens outside of any critical section, so a slow
/// backend never blocks readers. Concurrent refreshes are applied in the order
/// they complete (last writer wins).
pub struct ConfigHolder<T> {
	pub(crate) current: ArcSwapOption<Snapshot<T>>,
	pub(crate) fault: ArcSwapOption<Fault>,
	pub(crate) failures: AtomicU32,
	pub(crate) fetcher: Arc<dyn Fetcher<T>>,
	pub(crate) config: RefreshConfig,
	#[cfg(feature = "events")]
	pub(crate) events: tokio::sync::broadcast::Sender<HoldEvent<T>>,
}

impl<T> ConfigHolder<T>
where
	T: Send + Sync + 'static,
{
	/// Binds `fetcher` with default refresh settings and performs the first fetch.
	///
	/// Never fails: if the first fetch fails the holder starts uninitialized
	/// with the failure recorded, and [`read`](Self::read) reports `NotInitialized`
	/// until a later refresh succeeds.
	pub async fn new<F>(fetcher: F, cancel: &CancellationToken) -> Self
	where
		F: Fetcher<T> + 'static,
	{
		Self::with_config(fetcher, RefreshConfig::default(), cancel).await
	}

	/// Like [`new`](Self::new) with explicit refresh settings.
	pub async fn with_config<F>(fetcher: F, config: RefreshConfig, cancel: &CancellationToken) -> Self
	where
		F: Fetcher<T> + 'static,
	{
		let holder = Self::unprimed(Arc::new(fetcher), config);
		// The outcome is recorded in the holder itself.
		let _ = holder.refresh(cancel).await;
		holder
	}

	/// Builds a holder without performing the initial fetch.
	pub(crate) fn unprimed(fetcher: Arc<dyn Fetcher<T>>, config: RefreshConfig) -> Self {
		Self {
			current: ArcSwapOption::empty(),
			fault: ArcSwapOption::empty(),
			failures: AtomicU32::new(0),
			fetcher,
			config,
			#[cfg(feature = "events")]
			events: tokio::sync::broadcast::channel(DEFAULT_EVENT_CAPACITY).0,
		}
	}

	pub fn config(&self) -> &RefreshConfig {
		&self.config
	}
}

impl<T> fmt::Debug for ConfigHolder<T>
where
	T: fmt::Debug,
{
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("ConfigHolder")
			.field("current", &self.current.load())
			.field("fault", &self.fault.load())
			.field("config", &self.config)
			.finish_non_exhaustive()
	}
}
