/* src/source/file.rs */

use std::path::{Component, Path, PathBuf};

use async_trait::async_trait;
use tokio::fs;
use tokio_util::sync::CancellationToken;

use super::{Source, SourceError};

/// A file system source backed by tokio::fs.
#[derive(Debug, Clone)]
pub struct FileSource {
	root: Option<PathBuf>,
	path: PathBuf,
}

impl FileSource {
	/// Reads the file at `path` as-is.
	pub fn new(path: impl Into<PathBuf>) -> Self {
		Self {
			root: None,
			path: path.into(),
		}
	}

	/// Reads `key` relative to `root`, refusing keys that escape the root.
	pub fn within(root: impl Into<PathBuf>, key: impl AsRef<Path>) -> Self {
		Self {
			root: Some(root.into()),
			path: key.as_ref().to_path_buf(),
		}
	}

	/// The configured path, relative to the root when one is set.
	pub fn path(&self) -> &Path {
		&self.path
	}

	/// Resolves the path safely, ensuring it is within the root directory.
	async fn resolve(&self) -> Result<PathBuf, SourceError> {
		let Some(root) = &self.root else {
			return Ok(self.path.clone());
		};

		if self
			.path
			.components()
			.any(|c| matches!(c, Component::ParentDir | Component::RootDir | Component::Prefix(_)))
		{
			return Err(SourceError::SandboxViolation(self.describe()));
		}

		let canonical_root = fs::canonicalize(root).await?;
		match fs::canonicalize(root.join(&self.path)).await {
			Ok(canonical) if canonical.starts_with(&canonical_root) => Ok(canonical),
			Ok(_) => Err(SourceError::SandboxViolation(self.describe())),
			Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
				Err(SourceError::NotFound(self.describe()))
			}
			Err(e) => Err(SourceError::Io(e)),
		}
	}
}

#[async_trait]
impl Source for FileSource {
	async fn load(&self, cancel: &CancellationToken) -> Result<Vec<u8>, SourceError> {
		let path = self.resolve().await?;
		tokio::select! {
			biased;
			_ = cancel.cancelled() => Err(SourceError::Cancelled),
			read = fs::read(&path) => read.map_err(|e| match e.kind() {
				std::io::ErrorKind::NotFound => SourceError::NotFound(path.display().to_string()),
				_ => SourceError::Io(e),
			}),
		}
	}

	fn describe(&self) -> String {
		match &self.root {
			Some(root) => root.join(&self.path).display().to_string(),
			None => self.path.display().to_string(),
		}
	}
}
