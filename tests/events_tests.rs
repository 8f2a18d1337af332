/* tests/events_tests.rs */

#![cfg(feature = "events")]

use std::sync::{Arc, Mutex};

use hotconf::holder::HoldEvent;
use hotconf::{CancellationToken, ConfigHolder, FetchError, fetch_fn};

#[tokio::test]
async fn test_refresh_outcomes_are_broadcast() {
	let state = Arc::new(Mutex::new(None::<u32>));
	let fetcher = {
		let state = state.clone();
		fetch_fn(move |_cancel| {
			let next = *state.lock().unwrap();
			async move { next.ok_or_else(|| FetchError::other("not yet published")) }
		})
	};
	let cancel = CancellationToken::new();
	let holder = ConfigHolder::new(fetcher, &cancel).await;
	let mut rx = holder.subscribe();

	*state.lock().unwrap() = Some(1);
	holder.refresh(&cancel).await.unwrap();
	*state.lock().unwrap() = Some(2);
	holder.refresh(&cancel).await.unwrap();
	*state.lock().unwrap() = None;
	let _ = holder.refresh(&cancel).await;

	match rx.recv().await.unwrap() {
		HoldEvent::Initialized { value, meta } => {
			assert_eq!(*value, 1);
			assert_eq!(meta.version, 1);
		}
		other => panic!("expected Initialized, got {other:?}"),
	}
	match rx.recv().await.unwrap() {
		HoldEvent::Updated { old, new, meta } => {
			assert_eq!((*old, *new), (1, 2));
			assert_eq!(meta.version, 2);
		}
		other => panic!("expected Updated, got {other:?}"),
	}
	match rx.recv().await.unwrap() {
		HoldEvent::Failed { fault } => assert_eq!(fault.consecutive, 1),
		other => panic!("expected Failed, got {other:?}"),
	}
}

#[cfg(feature = "stream")]
#[tokio::test]
async fn test_event_stream_yields_updates() {
	use futures_util::StreamExt;

	let counter = Arc::new(Mutex::new(0u32));
	let fetcher = {
		let counter = counter.clone();
		fetch_fn(move |_cancel| {
			let mut n = counter.lock().unwrap();
			*n += 1;
			let value = *n;
			async move { Ok(value) }
		})
	};
	let cancel = CancellationToken::new();
	let holder = ConfigHolder::new(fetcher, &cancel).await;
	let mut events = holder.stream();

	holder.refresh(&cancel).await.unwrap();
	holder.refresh(&cancel).await.unwrap();

	let versions: Vec<u64> = events
		.by_ref()
		.take(2)
		.map(|event| match event {
			Ok(HoldEvent::Updated { meta, .. }) => meta.version,
			other => panic!("unexpected event {other:?}"),
		})
		.collect()
		.await;
	assert_eq!(versions, vec![2, 3]);
}
