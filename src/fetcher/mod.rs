/* src/fetcher/mod.rs */

//!
//! Fetchers produce a fresh config value on demand.
//!
//! A [`Fetcher`] is either supplied directly (any type implementing the
//! trait, or a closure wrapped in [`FetchFn`]) or composed from a
//! [`Source`](crate::source::Source) and a [`Decoder`](crate::decoder::Decoder)
//! with [`Pipeline`].

mod error;
mod func;
mod pipeline;

pub use error::{BoxError, FetchError};
pub use func::{FetchFn, fetch_fn};
pub use pipeline::Pipeline;

use std::sync::Arc;

use async_trait::async_trait;
use tokio_util::sync::CancellationToken;

/// Produces a new config value or fails.
///
/// Implementations should stop work and return [`FetchError::Cancelled`]
/// promptly once `cancel` fires. They must not retry internally; retry
/// policy belongs to the caller.
#[async_trait]
pub trait Fetcher<T>: Send + Sync {
	async fn fetch(&self, cancel: &CancellationToken) -> Result<T, FetchError>;
}

#[async_trait]
impl<T, F> Fetcher<T> for Arc<F>
where
	T: Send + 'static,
	F: Fetcher<T> + ?Sized,
{
	async fn fetch(&self, cancel: &CancellationToken) -> Result<T, FetchError> {
		(**self).fetch(cancel).await
	}
}

#[async_trait]
impl<T, F> Fetcher<T> for Box<F>
where
	T: Send + 'static,
	F: Fetcher<T> + ?Sized,
{
	async fn fetch(&self, cancel: &CancellationToken) -> Result<T, FetchError> {
		(**self).fetch(cancel).await
	}
}
