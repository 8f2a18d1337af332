/* src/fetcher/error.rs */

use std::time::Duration;

use crate::decoder::DecodeError;
use crate::source::SourceError;

/// Boxed error carried by [`FetchError::Other`].
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Errors returned by a [`Fetcher`](super::Fetcher).
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
	/// The backing store failed to produce bytes.
	#[error("source error: {0}")]
	Source(#[source] SourceError),

	/// Bytes were retrieved but could not be decoded.
	#[error("decode error: {0}")]
	Decode(#[from] DecodeError),

	/// The fetch exceeded the configured time limit.
	#[error("fetch timed out after {0:?}")]
	Timeout(Duration),

	/// The fetch was abandoned because its cancellation token fired.
	#[error("fetch cancelled")]
	Cancelled,

	/// Failure from an application-supplied fetcher.
	#[error("fetch failed: {0}")]
	Other(#[source] BoxError),
}

impl FetchError {
	/// Wraps an arbitrary error (or message) as [`FetchError::Other`].
	pub fn other(error: impl Into<BoxError>) -> Self {
		Self::Other(error.into())
	}

	pub fn is_cancelled(&self) -> bool {
		matches!(self, Self::Cancelled)
	}
}

impl From<SourceError> for FetchError {
	fn from(error: SourceError) -> Self {
		match error {
			SourceError::Cancelled => Self::Cancelled,
			other => Self::Source(other),
		}
	}
}
