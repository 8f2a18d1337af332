/* src/source/object.rs */

use async_trait::async_trait;
use tokio_util::sync::CancellationToken;

use super::{ObjectUrl, Source, SourceError};

/// Transport for a bucket-style object store (cloud storage, S3-compatible, ...).
///
/// Implementations wrap a vendor client. Cancellation is handled by
/// [`ObjectSource`], which drops the request future when the token fires.
#[async_trait]
pub trait ObjectClient: Send + Sync {
	/// Downloads the whole object at `bucket`/`key`.
	async fn get_object(&self, bucket: &str, key: &str) -> Result<Vec<u8>, SourceError>;
}

/// A [`Source`] reading one object through an [`ObjectClient`].
pub struct ObjectSource<C> {
	client: C,
	url: ObjectUrl,
}

impl<C> ObjectSource<C>
where
	C: ObjectClient,
{
	/// Binds `client` to an explicit bucket and key. The scheme is informational.
	pub fn new(client: C, scheme: &str, bucket: impl Into<String>, key: impl Into<String>) -> Self {
		Self {
			client,
			url: ObjectUrl {
				scheme: scheme.to_string(),
				bucket: bucket.into(),
				key: key.into(),
			},
		}
	}

	/// Binds `client` to the object named by a `scheme://bucket/key` URL.
	pub fn from_url(client: C, url: &str) -> Result<Self, SourceError> {
		Ok(Self {
			client,
			url: ObjectUrl::parse(url)?,
		})
	}

	pub fn url(&self) -> &ObjectUrl {
		&self.url
	}
}

#[async_trait]
impl<C> Source for ObjectSource<C>
where
	C: ObjectClient,
{
	async fn load(&self, cancel: &CancellationToken) -> Result<Vec<u8>, SourceError> {
		tokio::select! {
			biased;
			_ = cancel.cancelled() => Err(SourceError::Cancelled),
			bytes = self.client.get_object(&self.url.bucket, &self.url.key) => bytes,
		}
	}

	fn describe(&self) -> String {
		self.url.to_string()
	}
}
