/* src/fetcher/func.rs */

use std::future::Future;

use async_trait::async_trait;
use tokio_util::sync::CancellationToken;

use super::{FetchError, Fetcher};

/// Adapts a plain async closure into a [`Fetcher`].
///
/// The closure receives a clone of the cancellation token for each call.
#[derive(Debug, Clone, Copy)]
pub struct FetchFn<F>(pub F);

/// Shorthand for `FetchFn(f)` that lets type inference see the closure bounds.
pub fn fetch_fn<T, F, Fut>(f: F) -> FetchFn<F>
where
	F: Fn(CancellationToken) -> Fut + Send + Sync,
	Fut: Future<Output = Result<T, FetchError>> + Send + 'static,
{
	FetchFn(f)
}

#[async_trait]
impl<T, F, Fut> Fetcher<T> for FetchFn<F>
where
	T: Send + 'static,
	F: Fn(CancellationToken) -> Fut + Send + Sync,
	Fut: Future<Output = Result<T, FetchError>> + Send + 'static,
{
	async fn fetch(&self, cancel: &CancellationToken) -> Result<T, FetchError> {
		(self.0)(cancel.clone()).await
	}
}
