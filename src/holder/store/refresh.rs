/* src/holder/store/refresh.rs */

use std::sync::Arc;
use std::sync::atomic::Ordering;
use std::time::{Duration, Instant, SystemTime};

use tokio_util::sync::CancellationToken;

#[cfg(feature = "events")]
use super::super::HoldEvent;
use super::super::{Fault, HoldError, Meta, Snapshot};
use super::ConfigHolder;
use crate::fetcher::FetchError;

impl<T> ConfigHolder<T>
where
	T: Send + Sync + 'static,
{
	/// Performs exactly one fetch and applies its outcome.
	///
	/// On success the value and its metadata are replaced together. On failure
	/// the error is recorded, the previous value stays in place, and the error
	/// is returned. A cancelled fetch is returned but not recorded.
	pub async fn refresh(&self, cancel: &CancellationToken) -> Result<Arc<T>, HoldError> {
		let started = Instant::now();
		let outcome = self.fetch_once(cancel).await;
		self.apply(outcome, started.elapsed())
	}

	/// Runs the fetcher under the configured timeout. Touches no state.
	pub(crate) async fn fetch_once(&self, cancel: &CancellationToken) -> Result<T, FetchError> {
		if cancel.is_cancelled() {
			return Err(FetchError::Cancelled);
		}
		let fetch = self.fetcher.fetch(cancel);
		match self.config.fetch_timeout {
			Some(limit) => tokio::time::timeout(limit, fetch)
				.await
				.unwrap_or(Err(FetchError::Timeout(limit))),
			None => fetch.await,
		}
	}

	pub(crate) fn apply(
		&self,
		outcome: Result<T, FetchError>,
		took: Duration,
	) -> Result<Arc<T>, HoldError> {
		match outcome {
			Ok(value) => Ok(self.install(value, took)),
			Err(FetchError::Cancelled) => {
				tracing::debug!("config refresh cancelled");
				Err(HoldError::Refresh(Arc::new(FetchError::Cancelled)))
			}
			Err(error) => {
				let error = Arc::new(error);
				self.record_fault(Arc::clone(&error));
				Err(HoldError::Refresh(error))
			}
		}
	}

	fn install(&self, value: T, took: Duration) -> Arc<T> {
		let value = Arc::new(value);
		let updated_at = SystemTime::now();
		let next_meta = |current: &Option<Arc<Snapshot<T>>>| Meta {
			updated_at,
			version: current.as_ref().map_or(0, |s| s.meta.version) + 1,
			fetch_duration: took,
		};

		// rcu returns the snapshot its final attempt replaced, which is the
		// one the installed version was derived from.
		let previous = self.current.rcu(|current| {
			Some(Arc::new(Snapshot {
				value: Arc::clone(&value),
				meta: next_meta(current),
			}))
		});
		self.failures.store(0, Ordering::SeqCst);
		let meta = next_meta(&previous);

		tracing::debug!(version = meta.version, ?took, "config refreshed");

		#[cfg(feature = "events")]
		{
			let event = match previous {
				Some(old) => HoldEvent::Updated {
					old: Arc::clone(&old.value),
					new: Arc::clone(&value),
					meta,
				},
				None => HoldEvent::Initialized {
					value: Arc::clone(&value),
					meta,
				},
			};
			let _ = self.events.send(event);
		}

		#[cfg(not(feature = "events"))]
		{
			let _ = previous;
		}

		value
	}

	fn record_fault(&self, error: Arc<FetchError>) {
		let consecutive = self.failures.fetch_add(1, Ordering::SeqCst).saturating_add(1);
		let fault = Fault {
			error,
			at: SystemTime::now(),
			consecutive,
		};
		tracing::warn!(
			error = %fault.error,
			consecutive,
			initialized = self.is_initialized(),
			"config refresh failed, keeping last-known-good value"
		);
		self.fault.store(Some(Arc::new(fault.clone())));

		#[cfg(feature = "events")]
		{
			let _ = self.events.send(HoldEvent::Failed { fault });
		}

		#[cfg(not(feature = "events"))]
		{
			let _ = fault;
		}
	}
}
