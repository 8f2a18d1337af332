/* src/decoder/format/yaml.rs */

use super::{DecodeError, Format};
use serde::de::DeserializeOwned;

/// YAML format parser using `serde_yaml`.
#[derive(Debug, Clone, Copy, Default)]
pub struct Yaml;

impl Format for Yaml {
	fn extensions(&self) -> &'static [&'static str] {
		&["yaml", "yml"]
	}

	fn parse<T: DeserializeOwned>(&self, input: &[u8]) -> Result<T, DecodeError> {
		serde_yaml::from_slice(input).map_err(|e| DecodeError::Parse(e.to_string()))
	}
}
