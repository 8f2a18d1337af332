/* src/holder/store/periodic.rs */

use std::time::{Duration, Instant};

use tokio_util::sync::CancellationToken;

use super::ConfigHolder;

impl<T> ConfigHolder<T>
where
	T: Send + Sync + 'static,
{
	/// Refreshes every `interval` until `cancel` fires.
	///
	/// Launch this as a background task. Refresh errors are recorded in the
	/// holder, never returned, and never stop the loop. The token is checked
	/// before each fetch and passed into it; an outcome that completes after
	/// cancellation is discarded, so the holder does not change once the loop
	/// has observed cancellation.
	pub async fn run_periodic(&self, cancel: &CancellationToken, interval: Duration) {
		tracing::info!(?interval, "periodic config refresh started");

		loop {
			let delay = self.config.next_delay(interval, self.consecutive_failures());
			tracing::trace!(?delay, "waiting for next config refresh");

			tokio::select! {
				biased;
				_ = cancel.cancelled() => break,
				_ = tokio::time::sleep(delay) => {}
			}

			let started = Instant::now();
			let outcome = self.fetch_once(cancel).await;
			if cancel.is_cancelled() {
				break;
			}
			// Failures are absorbed into the holder's error state.
			let _ = self.apply(outcome, started.elapsed());
		}

		tracing::info!("periodic config refresh stopped");
	}

	/// [`run_periodic`](Self::run_periodic) with the interval from the holder's config.
	pub async fn run(&self, cancel: &CancellationToken) {
		self.run_periodic(cancel, self.config.interval).await
	}
}
