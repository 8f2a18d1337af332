/* src/source/func.rs */

use std::future::Future;

use async_trait::async_trait;
use tokio_util::sync::CancellationToken;

use super::{Source, SourceError};

/// Adapts a plain async closure into a [`Source`].
pub struct SourceFn<F> {
	f: F,
	name: String,
}

impl<F> SourceFn<F> {
	/// Wraps `f`; the name shows up in log lines.
	pub fn new(name: impl Into<String>, f: F) -> Self {
		Self {
			f,
			name: name.into(),
		}
	}
}

/// Shorthand for [`SourceFn::new`].
pub fn source_fn<F, Fut>(name: impl Into<String>, f: F) -> SourceFn<F>
where
	F: Fn(CancellationToken) -> Fut + Send + Sync,
	Fut: Future<Output = Result<Vec<u8>, SourceError>> + Send + 'static,
{
	SourceFn::new(name, f)
}

#[async_trait]
impl<F, Fut> Source for SourceFn<F>
where
	F: Fn(CancellationToken) -> Fut + Send + Sync,
	Fut: Future<Output = Result<Vec<u8>, SourceError>> + Send + 'static,
{
	async fn load(&self, cancel: &CancellationToken) -> Result<Vec<u8>, SourceError> {
		(self.f)(cancel.clone()).await
	}

	fn describe(&self) -> String {
		self.name.clone()
	}
}
