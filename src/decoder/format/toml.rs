/* src/decoder/format/toml.rs */

use super::{DecodeError, Format};
use serde::de::DeserializeOwned;

/// TOML format parser using `toml`.
#[derive(Debug, Clone, Copy, Default)]
pub struct Toml;

impl Format for Toml {
	fn extensions(&self) -> &'static [&'static str] {
		&["toml"]
	}

	fn parse<T: DeserializeOwned>(&self, input: &[u8]) -> Result<T, DecodeError> {
		let s = std::str::from_utf8(input)?;
		toml::from_str(s).map_err(|e| DecodeError::Parse(e.to_string()))
	}
}
