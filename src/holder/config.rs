/* src/holder/config.rs */

use std::time::Duration;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Shortest delay the periodic loop will wait between refreshes.
const MIN_INTERVAL: Duration = Duration::from_millis(1);

/// Refresh behaviour of a [`ConfigHolder`](super::ConfigHolder).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct RefreshConfig {
	/// Time between periodic refreshes.
	pub interval: Duration,

	/// Upper bound for a single fetch. `None` waits indefinitely.
	pub fetch_timeout: Option<Duration>,

	/// Enables exponential backoff after consecutive failures, capped at this delay.
	/// `None` keeps a fixed interval.
	pub max_backoff: Option<Duration>,
}

impl Default for RefreshConfig {
	fn default() -> Self {
		Self {
			interval: Duration::from_secs(30),
			fetch_timeout: None,
			max_backoff: None,
		}
	}
}

impl RefreshConfig {
	pub fn interval(mut self, interval: Duration) -> Self {
		self.interval = interval;
		self
	}

	pub fn fetch_timeout(mut self, timeout: Duration) -> Self {
		self.fetch_timeout = Some(timeout);
		self
	}

	pub fn max_backoff(mut self, cap: Duration) -> Self {
		self.max_backoff = Some(cap);
		self
	}

	/// Delay before the next periodic refresh, given the current failure streak.
	///
	/// Without backoff this is always `interval`. With backoff it doubles per
	/// consecutive failure and never exceeds `max_backoff` (or drops below `interval`).
	pub fn next_delay(&self, interval: Duration, consecutive_failures: u32) -> Duration {
		let base = interval.max(MIN_INTERVAL);
		match self.max_backoff {
			None => base,
			Some(cap) => {
				let factor = 1u32 << consecutive_failures.min(31);
				base.saturating_mul(factor).min(cap.max(base))
			}
		}
	}
}
