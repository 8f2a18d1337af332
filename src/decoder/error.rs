/* src/decoder/error.rs */

/// Errors produced while turning raw bytes into a config value.
#[derive(Debug, thiserror::Error)]
pub enum DecodeError {
	/// Parsing error from a format implementation.
	#[error("parse error: {0}")]
	Parse(String),

	/// The input was expected to be text but is not valid UTF-8.
	#[error("invalid utf-8: {0}")]
	Utf8(#[from] std::str::Utf8Error),

	/// Failure reported by a custom decoder.
	#[error("{0}")]
	Custom(String),
}
