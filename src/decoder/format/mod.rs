/* src/decoder/format/mod.rs */

use serde::de::DeserializeOwned;

use super::{DecodeError, Decoder};

#[cfg(feature = "json")]
mod json;
#[cfg(feature = "json")]
pub use self::json::Json;

#[cfg(feature = "toml")]
mod toml;
#[cfg(feature = "toml")]
pub use self::toml::Toml;

#[cfg(feature = "yaml")]
mod yaml;
#[cfg(feature = "yaml")]
pub use self::yaml::Yaml;

#[cfg(feature = "postcard")]
mod postcard;
#[cfg(feature = "postcard")]
pub use self::postcard::Postcard;

/// Abstract serde format that converts bytes into a structured object.
pub trait Format: Send + Sync {
	/// List of supported extensions or identifiers.
	fn extensions(&self) -> &'static [&'static str];

	/// Parse the raw bytes into the target type.
	fn parse<T: DeserializeOwned>(&self, input: &[u8]) -> Result<T, DecodeError>;
}

impl<T, F> Decoder<T> for F
where
	T: DeserializeOwned,
	F: Format,
{
	fn decode(&self, input: &[u8]) -> Result<T, DecodeError> {
		self.parse(input)
	}
}

/// An enum wrapper for all enabled formats, chosen at runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnyFormat {
	#[cfg(feature = "json")]
	Json,
	#[cfg(feature = "toml")]
	Toml,
	#[cfg(feature = "yaml")]
	Yaml,
	#[cfg(feature = "postcard")]
	Postcard,
}

impl AnyFormat {
	/// Every format compiled into this build.
	pub const ALL: &'static [AnyFormat] = &[
		#[cfg(feature = "json")]
		Self::Json,
		#[cfg(feature = "toml")]
		Self::Toml,
		#[cfg(feature = "yaml")]
		Self::Yaml,
		#[cfg(feature = "postcard")]
		Self::Postcard,
	];

	/// Finds the format registered for `ext` (case-insensitive, without the dot).
	pub fn from_extension(ext: &str) -> Option<Self> {
		let ext = ext.to_ascii_lowercase();
		Self::ALL
			.iter()
			.copied()
			.find(|format| format.extensions().contains(&ext.as_str()))
	}

	/// Picks a format from the extension of a file name or object key.
	pub fn for_key(key: &str) -> Option<Self> {
		let name = key.rsplit('/').next().unwrap_or(key);
		let (_, ext) = name.rsplit_once('.')?;
		Self::from_extension(ext)
	}
}

impl Format for AnyFormat {
	fn extensions(&self) -> &'static [&'static str] {
		match self {
			#[cfg(feature = "json")]
			Self::Json => Json.extensions(),
			#[cfg(feature = "toml")]
			Self::Toml => Toml.extensions(),
			#[cfg(feature = "yaml")]
			Self::Yaml => Yaml.extensions(),
			#[cfg(feature = "postcard")]
			Self::Postcard => Postcard.extensions(),
		}
	}

	fn parse<T: DeserializeOwned>(&self, input: &[u8]) -> Result<T, DecodeError> {
		match self {
			#[cfg(feature = "json")]
			Self::Json => Json.parse(input),
			#[cfg(feature = "toml")]
			Self::Toml => Toml.parse(input),
			#[cfg(feature = "yaml")]
			Self::Yaml => Yaml.parse(input),
			#[cfg(feature = "postcard")]
			Self::Postcard => Postcard.parse(input),
		}
	}
}
