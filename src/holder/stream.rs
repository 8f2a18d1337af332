/* src/holder/stream.rs */

use std::pin::Pin;
use std::task::{Context, Poll};

use futures_util::Stream;
use tokio_stream::wrappers::BroadcastStream;
use tokio_stream::wrappers::errors::BroadcastStreamRecvError;

use super::HoldEvent;

/// Holder events as a [`futures_util::Stream`].
///
/// Yields `Err(Lagged)` when the consumer falls behind the channel capacity.
pub struct EventStream<T> {
	pub(crate) inner: BroadcastStream<HoldEvent<T>>,
}

impl<T> Stream for EventStream<T>
where
	T: Send + Sync + 'static,
{
	type Item = Result<HoldEvent<T>, BroadcastStreamRecvError>;

	fn poll_next(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
		Pin::new(&mut self.inner).poll_next(cx)
	}
}
