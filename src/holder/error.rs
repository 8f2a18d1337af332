/* src/holder/error.rs */

use std::sync::Arc;

use crate::fetcher::FetchError;

#[derive(Debug, Clone, thiserror::Error)]
pub enum HoldError {
	/// No fetch has ever succeeded, so there is no value to read.
	#[error("config has not been initialized (no fetch has succeeded yet)")]
	NotInitialized,
	/// A refresh attempt failed. The previous value, if any, is still served.
	#[error("config refresh failed: {0}")]
	Refresh(#[source] Arc<FetchError>),
}

impl HoldError {
	/// The fetch failure behind a `Refresh` error.
	pub fn fetch_error(&self) -> Option<&FetchError> {
		match self {
			Self::NotInitialized => None,
			Self::Refresh(error) => Some(&**error),
		}
	}
}
