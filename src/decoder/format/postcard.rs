/* src/decoder/format/postcard.rs */

use super::{DecodeError, Format};
use serde::de::DeserializeOwned;

/// Postcard binary format parser using `postcard`.
#[derive(Debug, Clone, Copy, Default)]
pub struct Postcard;

impl Format for Postcard {
	fn extensions(&self) -> &'static [&'static str] {
		&["bin", "post"]
	}

	fn parse<T: DeserializeOwned>(&self, input: &[u8]) -> Result<T, DecodeError> {
		postcard::from_bytes(input).map_err(|e| DecodeError::Parse(e.to_string()))
	}
}
