/* src/holder/fault.rs */

use std::sync::Arc;
use std::time::SystemTime;

use crate::fetcher::FetchError;

/// The most recent refresh failure.
#[derive(Debug, Clone)]
pub struct Fault {
	pub error: Arc<FetchError>,
	/// Wall-clock time the failure was recorded.
	pub at: SystemTime,
	/// Failures in a row up to and including this one.
	pub consecutive: u32,
}

/// Freshness summary of a holder.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Health {
	/// No fetch has succeeded yet.
	Uninitialized,
	/// The latest refresh succeeded.
	Healthy,
	/// Serving the last-known-good value while refreshes keep failing.
	Degraded { consecutive: u32 },
}
