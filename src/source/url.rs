/* src/source/url.rs */

use std::fmt;
use std::str::FromStr;

use super::SourceError;

/// Location of an object in a bucket-style store, written `scheme://bucket/key`.
///
/// The key is everything after the first `/` following the bucket and may
/// itself contain slashes. An empty key (`gs://bucket/`) is accepted.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ObjectUrl {
	pub scheme: String,
	pub bucket: String,
	pub key: String,
}

impl ObjectUrl {
	/// Parses `scheme://bucket/key` with any scheme.
	pub fn parse(url: &str) -> Result<Self, SourceError> {
		let invalid = || SourceError::InvalidUrl(url.to_string());

		let (scheme, rest) = url.split_once("://").ok_or_else(invalid)?;
		if scheme.is_empty() {
			return Err(invalid());
		}
		let (bucket, key) = rest.split_once('/').ok_or_else(invalid)?;
		if bucket.is_empty() {
			return Err(invalid());
		}

		Ok(Self {
			scheme: scheme.to_string(),
			bucket: bucket.to_string(),
			key: key.to_string(),
		})
	}

	/// Parses the URL and requires its scheme to be `scheme` (e.g. `"gs"`, `"s3"`).
	pub fn parse_with_scheme(url: &str, scheme: &str) -> Result<Self, SourceError> {
		let parsed = Self::parse(url)?;
		if parsed.scheme != scheme {
			return Err(SourceError::InvalidUrl(url.to_string()));
		}
		Ok(parsed)
	}
}

impl FromStr for ObjectUrl {
	type Err = SourceError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		Self::parse(s)
	}
}

impl fmt::Display for ObjectUrl {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}://{}/{}", self.scheme, self.bucket, self.key)
	}
}
