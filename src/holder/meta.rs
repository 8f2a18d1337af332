/* src/holder/meta.rs */

use std::time::{Duration, SystemTime};

/// Metadata recorded with each successfully fetched value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Meta {
	/// Wall-clock time the value was installed.
	pub updated_at: SystemTime,
	/// Number of successful refreshes so far, starting at 1.
	pub version: u64,
	/// How long the fetch that produced the value took.
	pub fetch_duration: Duration,
}
