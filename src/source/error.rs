/* src/source/error.rs */

/// Errors produced while retrieving raw config bytes.
#[derive(Debug, thiserror::Error)]
pub enum SourceError {
	/// Nothing exists at the configured location.
	#[error("not found: {0}")]
	NotFound(String),

	/// IO error from the backing store.
	#[error("io error: {0}")]
	Io(#[from] std::io::Error),

	/// A keyed file lookup resolved outside its root directory.
	#[cfg(feature = "fs")]
	#[error("sandbox violation: {0}")]
	SandboxViolation(String),

	/// An object URL could not be split into scheme, bucket and key.
	#[error("invalid object url: {0}")]
	InvalidUrl(String),

	/// The load was abandoned because its cancellation token fired.
	#[error("load cancelled")]
	Cancelled,

	/// Opaque failure reported by a remote backend.
	#[error("backend error: {0}")]
	Backend(String),
}
