/* src/decoder/format/json.rs */

use super::{DecodeError, Format};
use serde::de::DeserializeOwned;

/// JSON format parser using `serde_json`.
#[derive(Debug, Clone, Copy, Default)]
pub struct Json;

impl Format for Json {
	fn extensions(&self) -> &'static [&'static str] {
		&["json"]
	}

	fn parse<T: DeserializeOwned>(&self, input: &[u8]) -> Result<T, DecodeError> {
		serde_json::from_slice(input).map_err(|e| DecodeError::Parse(e.to_string()))
	}
}
