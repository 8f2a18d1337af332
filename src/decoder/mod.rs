/* src/decoder/mod.rs */

//!
//! Decoders turn raw bytes into a typed config value.
//!
//! Any serde [`Format`] decodes into any `T: DeserializeOwned`; [`DecodeFn`]
//! lifts a plain function into a decoder for everything else.

mod error;

#[cfg(any(feature = "json", feature = "toml", feature = "yaml", feature = "postcard"))]
pub mod format;

pub use error::DecodeError;

#[cfg(any(feature = "json", feature = "toml", feature = "yaml", feature = "postcard"))]
pub use format::{AnyFormat, Format};

/// Parses raw bytes into a value of type `T`.
///
/// Decoders are pure: no I/O, same input gives the same result.
pub trait Decoder<T>: Send + Sync {
	fn decode(&self, input: &[u8]) -> Result<T, DecodeError>;
}

/// Adapts a plain function into a [`Decoder`].
#[derive(Debug, Clone, Copy)]
pub struct DecodeFn<F>(pub F);

impl<T, F> Decoder<T> for DecodeFn<F>
where
	F: Fn(&[u8]) -> Result<T, DecodeError> + Send + Sync,
{
	fn decode(&self, input: &[u8]) -> Result<T, DecodeError> {
		(self.0)(input)
	}
}

/// Decodes the input as a UTF-8 string, unchanged.
#[derive(Debug, Clone, Copy, Default)]
pub struct Utf8;

impl Decoder<String> for Utf8 {
	fn decode(&self, input: &[u8]) -> Result<String, DecodeError> {
		Ok(std::str::from_utf8(input)?.to_owned())
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn utf8_decoder_rejects_invalid_bytes() {
		let decoded: String = Utf8.decode(b"mode=fast").unwrap();
		assert_eq!(decoded, "mode=fast");
		let invalid: Result<String, _> = Utf8.decode(&[0xff, 0xfe]);
		assert!(matches!(invalid, Err(DecodeError::Utf8(_))));
	}

	#[test]
	fn decode_fn_forwards_to_closure() {
		let lines = DecodeFn(|input: &[u8]| {
			let text = std::str::from_utf8(input)?;
			Ok::<_, DecodeError>(text.lines().count())
		});
		assert_eq!(lines.decode(b"a\nb\nc").unwrap(), 3);
	}
}
