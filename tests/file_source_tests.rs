/* tests/file_source_tests.rs */

#![cfg(all(feature = "fs", feature = "json", feature = "toml"))]

use hotconf::decoder::AnyFormat;
use hotconf::decoder::format::Toml;
use hotconf::source::{FileSource, Source, SourceError};
use hotconf::{CancellationToken, ConfigHolder, FetchError, Pipeline};
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize, PartialEq)]
struct TestConfig {
	val: i32,
}

#[tokio::test]
async fn test_file_source_reload() -> Result<(), Box<dyn std::error::Error>> {
	let dir = tempfile::tempdir()?;
	let path = dir.path().join("app.toml");
	tokio::fs::write(&path, b"val = 1").await?;

	let cancel = CancellationToken::new();
	let holder: ConfigHolder<TestConfig> =
		ConfigHolder::new(Pipeline::new(FileSource::new(&path), Toml), &cancel).await;
	assert_eq!(holder.read()?.val, 1);

	tokio::fs::write(&path, b"val = 2").await?;
	holder.refresh(&cancel).await?;
	assert_eq!(holder.read()?.val, 2);

	// A half-written file must not replace the good value.
	tokio::fs::write(&path, b"val = ").await?;
	assert!(holder.refresh(&cancel).await.is_err());
	assert_eq!(holder.read()?.val, 2);

	tokio::fs::remove_file(&path).await?;
	let err = holder.refresh(&cancel).await.unwrap_err();
	assert!(matches!(err.fetch_error(), Some(FetchError::Source(SourceError::NotFound(_)))));
	assert_eq!(holder.read()?.val, 2);

	Ok(())
}

#[tokio::test]
async fn test_file_source_within_root() -> Result<(), Box<dyn std::error::Error>> {
	let dir = tempfile::tempdir()?;
	tokio::fs::create_dir(dir.path().join("[tcp]")).await?;
	tokio::fs::write(dir.path().join("[tcp]").join("config.json"), b"{\"val\": 7}").await?;

	let key = "[tcp]/config.json";
	let format = AnyFormat::for_key(key).ok_or("unknown format")?;
	let source = FileSource::within(dir.path(), key);
	let cancel = CancellationToken::new();
	let holder: ConfigHolder<TestConfig> = ConfigHolder::new(Pipeline::new(source, format), &cancel).await;

	assert_eq!(holder.read()?.val, 7);
	Ok(())
}

#[tokio::test]
async fn test_file_source_rejects_escaping_keys() -> Result<(), Box<dyn std::error::Error>> {
	let dir = tempfile::tempdir()?;
	let root = dir.path().join("root");
	tokio::fs::create_dir(&root).await?;
	tokio::fs::write(dir.path().join("secret.json"), b"{}").await?;

	let cancel = CancellationToken::new();
	let escaping = FileSource::within(&root, "../secret.json");
	assert!(matches!(
		escaping.load(&cancel).await,
		Err(SourceError::SandboxViolation(_))
	));

	let missing = FileSource::within(&root, "absent.json");
	assert!(matches!(missing.load(&cancel).await, Err(SourceError::NotFound(_))));
	Ok(())
}

#[tokio::test]
async fn test_file_source_honours_cancelled_token() -> Result<(), Box<dyn std::error::Error>> {
	let dir = tempfile::tempdir()?;
	let path = dir.path().join("app.json");
	tokio::fs::write(&path, b"{\"val\": 1}").await?;

	let cancel = CancellationToken::new();
	cancel.cancel();
	let result = FileSource::new(&path).load(&cancel).await;
	assert!(matches!(result, Err(SourceError::Cancelled)));
	Ok(())
}
