/* tests/fetcher_tests.rs */

#![cfg(feature = "json")]

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use async_trait::async_trait;
use hotconf::decoder::{AnyFormat, DecodeError, DecodeFn, Decoder, Utf8};
use hotconf::decoder::format::Json;
use hotconf::source::{MemorySource, ObjectClient, ObjectSource, SourceError, source_fn};
use hotconf::{CancellationToken, ConfigHolder, FetchError, Fetcher, Pipeline};
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize, PartialEq)]
struct AppConfig {
	name: String,
	port: u16,
}

#[tokio::test]
async fn test_pipeline_loads_then_decodes() {
	let source = MemorySource::with_bytes(r#"{"name": "edge", "port": 8080}"#);
	let pipeline = Pipeline::new(source, Json);

	let config = Fetcher::<AppConfig>::fetch(&pipeline, &CancellationToken::new())
		.await
		.unwrap();
	assert_eq!(
		config,
		AppConfig {
			name: "edge".to_string(),
			port: 8080
		}
	);
}

#[tokio::test]
async fn test_source_failure_short_circuits_decoder() {
	let decodes = Arc::new(AtomicUsize::new(0));
	let counted = decodes.clone();
	let decoder = DecodeFn(move |input: &[u8]| {
		counted.fetch_add(1, Ordering::SeqCst);
		Decoder::<String>::decode(&Utf8, input)
	});
	let pipeline = Pipeline::new(MemorySource::new(), decoder);

	let err = Fetcher::<String>::fetch(&pipeline, &CancellationToken::new())
		.await
		.unwrap_err();
	assert!(matches!(err, FetchError::Source(SourceError::NotFound(_))));
	assert_eq!(decodes.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn test_decode_failure_is_passed_through() {
	let pipeline = Pipeline::new(MemorySource::with_bytes("{not json"), AnyFormat::Json);

	let err = Fetcher::<AppConfig>::fetch(&pipeline, &CancellationToken::new())
		.await
		.unwrap_err();
	assert!(matches!(err, FetchError::Decode(DecodeError::Parse(_))));
}

#[tokio::test]
async fn test_holder_follows_memory_source_updates() {
	let source = MemorySource::with_bytes(r#"{"name": "a", "port": 1}"#);
	let cancel = CancellationToken::new();
	let holder: ConfigHolder<AppConfig> =
		ConfigHolder::new(Pipeline::new(source.clone(), Json), &cancel).await;
	assert_eq!(holder.read().unwrap().name, "a");

	source.set(r#"{"name": "b", "port": 2}"#);
	holder.refresh(&cancel).await.unwrap();
	assert_eq!(holder.read().unwrap().port, 2);

	source.set("garbage");
	assert!(holder.refresh(&cancel).await.is_err());
	assert_eq!(holder.read().unwrap().name, "b");

	source.clear();
	let err = holder.refresh(&cancel).await.unwrap_err();
	assert!(matches!(err.fetch_error(), Some(FetchError::Source(SourceError::NotFound(_)))));
	assert_eq!(holder.read().unwrap().name, "b");
}

#[tokio::test]
async fn test_source_fn_receives_cancellation() {
	let source = source_fn("flaky", |cancel: CancellationToken| async move {
		if cancel.is_cancelled() {
			Err(SourceError::Cancelled)
		} else {
			Ok(b"plain text".to_vec())
		}
	});
	let pipeline = Pipeline::new(source, Utf8);

	let live = CancellationToken::new();
	assert_eq!(Fetcher::<String>::fetch(&pipeline, &live).await.unwrap(), "plain text");

	let cancelled = CancellationToken::new();
	cancelled.cancel();
	let err = Fetcher::<String>::fetch(&pipeline, &cancelled).await.unwrap_err();
	assert!(err.is_cancelled());
}

/// Object store double: serves one object, optionally stalling forever.
struct FakeBucket {
	stall: bool,
}

#[async_trait]
impl ObjectClient for FakeBucket {
	async fn get_object(&self, bucket: &str, key: &str) -> Result<Vec<u8>, SourceError> {
		if self.stall {
			std::future::pending::<()>().await;
		}
		match (bucket, key) {
			("configs", "prod/app.json") => Ok(br#"{"name": "prod", "port": 443}"#.to_vec()),
			_ => Err(SourceError::NotFound(format!("{bucket}/{key}"))),
		}
	}
}

#[tokio::test]
async fn test_object_source_from_url() {
	let source = ObjectSource::from_url(FakeBucket { stall: false }, "gs://configs/prod/app.json").unwrap();
	assert_eq!(source.url().bucket, "configs");

	let format = AnyFormat::for_key(&source.url().key).unwrap();
	let cancel = CancellationToken::new();
	let holder: ConfigHolder<AppConfig> = ConfigHolder::new(Pipeline::new(source, format), &cancel).await;
	assert_eq!(holder.read().unwrap().port, 443);

	let missing = ObjectSource::from_url(FakeBucket { stall: false }, "gs://configs/missing.json").unwrap();
	let holder: ConfigHolder<AppConfig> = ConfigHolder::new(Pipeline::new(missing, Json), &cancel).await;
	assert!(holder.read().is_err());
	assert!(holder.last_error().is_some());
}

#[test]
fn test_object_source_rejects_bad_url() {
	let result = ObjectSource::from_url(FakeBucket { stall: false }, "configs/app.json");
	assert!(matches!(result, Err(SourceError::InvalidUrl(_))));
}

#[tokio::test(start_paused = true)]
async fn test_stalled_object_fetch_is_aborted_by_token() {
	let source = ObjectSource::new(FakeBucket { stall: true }, "gs", "configs", "prod/app.json");
	let pipeline = Pipeline::new(source, Json);
	let cancel = CancellationToken::new();

	let trigger = cancel.clone();
	tokio::spawn(async move {
		tokio::time::sleep(Duration::from_millis(100)).await;
		trigger.cancel();
	});

	let err = Fetcher::<AppConfig>::fetch(&pipeline, &cancel).await.unwrap_err();
	assert!(err.is_cancelled());
}
