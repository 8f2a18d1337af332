/* src/fetcher/pipeline.rs */

use async_trait::async_trait;
use tokio_util::sync::CancellationToken;

use super::{FetchError, Fetcher};
use crate::decoder::Decoder;
use crate::source::Source;

/// A fetcher that combines a specific Source and Decoder at compile time.
///
/// A source failure short-circuits: the decoder is only invoked on bytes
/// that were actually loaded.
pub struct Pipeline<S, D> {
	pub source: S,
	pub decoder: D,
}

impl<S, D> Pipeline<S, D> {
	/// Creates a new Pipeline.
	pub const fn new(source: S, decoder: D) -> Self {
		Self { source, decoder }
	}
}

#[async_trait]
impl<T, S, D> Fetcher<T> for Pipeline<S, D>
where
	T: Send + 'static,
	S: Source,
	D: Decoder<T>,
{
	async fn fetch(&self, cancel: &CancellationToken) -> Result<T, FetchError> {
		let bytes = self.source.load(cancel).await?;
		tracing::debug!(
			source = %self.source.describe(),
			bytes = bytes.len(),
			"loaded raw config"
		);
		Ok(self.decoder.decode(&bytes)?)
	}
}
