/* src/controller/hot.rs */

//!
//! Hot config controller with a managed periodic refresh task.

use std::sync::Arc;
use std::time::Duration;

use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;

use super::ControlError;
use crate::decoder::Decoder;
use crate::fetcher::{Fetcher, Pipeline};
use crate::holder::{ConfigHolder, Health, HoldError, RefreshConfig};
use crate::source::Source;

/// A hot config value kept fresh by a background task.
///
/// Dropping the controller cancels its task. The holder itself stays usable
/// through any [`holder`](Self::holder) handles still alive.
pub struct HotConfig<T> {
	holder: Arc<ConfigHolder<T>>,
	root: CancellationToken,
	run: Option<(CancellationToken, JoinHandle<()>)>,
}

impl<T> Drop for HotConfig<T> {
	fn drop(&mut self) {
		if let Some((token, _)) = self.run.take() {
			token.cancel();
		}
	}
}

/// Builder for HotConfig controller.
pub struct HotConfigBuilder<T> {
	fetcher: Option<Box<dyn Fetcher<T>>>,
	config: RefreshConfig,
	parent: Option<CancellationToken>,
	require_initial: bool,
}

impl<T> HotConfigBuilder<T>
where
	T: Send + Sync + 'static,
{
	pub fn new() -> Self {
		Self {
			fetcher: None,
			config: RefreshConfig::default(),
			parent: None,
			require_initial: false,
		}
	}

	pub fn fetcher(mut self, fetcher: impl Fetcher<T> + 'static) -> Self {
		self.fetcher = Some(Box::new(fetcher));
		self
	}

	/// Fetches by loading `source` and decoding with `decoder`.
	pub fn pipeline<S, D>(self, source: S, decoder: D) -> Self
	where
		S: Source + 'static,
		D: Decoder<T> + 'static,
	{
		self.fetcher(Pipeline::new(source, decoder))
	}

	pub fn config(mut self, config: RefreshConfig) -> Self {
		self.config = config;
		self
	}

	pub fn interval(mut self, interval: Duration) -> Self {
		self.config.interval = interval;
		self
	}

	/// Ties the controller to an application-wide shutdown token.
	pub fn cancel_on(mut self, parent: CancellationToken) -> Self {
		self.parent = Some(parent);
		self
	}

	/// Makes [`build`](Self::build) fail when the first fetch fails.
	pub fn require_initial(mut self, required: bool) -> Self {
		self.require_initial = required;
		self
	}

	/// Creates the holder and performs its first fetch.
	///
	/// By default a failing first fetch leaves the holder uninitialized with
	/// the failure recorded; with [`require_initial`](Self::require_initial)
	/// it is returned as an error instead.
	pub async fn build(self) -> Result<HotConfig<T>, ControlError> {
		let fetcher = self
			.fetcher
			.ok_or_else(|| ControlError::Builder("fetcher is required".to_string()))?;
		let root = self.parent.map_or_else(CancellationToken::new, |p| p.child_token());
		let holder = ConfigHolder::with_config(fetcher, self.config, &root).await;

		if self.require_initial && !holder.is_initialized() {
			let error = match holder.last_error() {
				Some(fault) => HoldError::Refresh(fault.error),
				None => HoldError::NotInitialized,
			};
			return Err(ControlError::Hold(error));
		}

		Ok(HotConfig {
			holder: Arc::new(holder),
			root,
			run: None,
		})
	}
}

impl<T> Default for HotConfigBuilder<T>
where
	T: Send + Sync + 'static,
{
	fn default() -> Self {
		Self::new()
	}
}

impl<T> HotConfig<T>
where
	T: Send + Sync + 'static,
{
	pub fn builder() -> HotConfigBuilder<T> {
		HotConfigBuilder::new()
	}

	/// Spawns the periodic refresh task (borrowing version). No-op if already running.
	pub fn start(&mut self) {
		if self.is_running() {
			return;
		}

		let token = self.root.child_token();
		let holder = Arc::clone(&self.holder);
		let task_token = token.clone();
		let handle = tokio::spawn(async move {
			holder.run(&task_token).await;
		});
		self.run = Some((token, handle));
	}

	/// Spawns the periodic refresh task (consuming version).
	pub fn started(mut self) -> Self {
		self.start();
		self
	}

	/// Cancels the periodic refresh task without waiting for it.
	pub fn stop(&mut self) {
		if let Some((token, _)) = self.run.take() {
			token.cancel();
		}
	}

	/// Cancels the periodic refresh task and waits for it to exit.
	pub async fn shutdown(&mut self) {
		if let Some((token, handle)) = self.run.take() {
			token.cancel();
			if let Err(e) = handle.await {
				tracing::error!(error = %e, "config refresh task ended abnormally");
			}
		}
	}

	/// Returns true if the periodic refresh task is currently active.
	pub fn is_running(&self) -> bool {
		self.run
			.as_ref()
			.is_some_and(|(token, handle)| !token.is_cancelled() && !handle.is_finished())
	}

	/// Performs one manual refresh alongside the periodic task.
	pub async fn refresh(&self) -> Result<Arc<T>, HoldError> {
		self.holder.refresh(&self.root).await
	}

	/// Returns the current configuration value.
	pub fn get(&self) -> Option<Arc<T>> {
		self.holder.get()
	}

	pub fn read(&self) -> Result<Arc<T>, HoldError> {
		self.holder.read()
	}

	pub fn health(&self) -> Health {
		self.holder.health()
	}

	/// Shared handle to the underlying holder.
	pub fn holder(&self) -> Arc<ConfigHolder<T>> {
		Arc::clone(&self.holder)
	}
}

impl<T> std::fmt::Debug for HotConfig<T>
where
	T: std::fmt::Debug,
{
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		let mut s = f.debug_struct("HotConfig");
		s.field("holder", &self.holder);
		s.field("running", &self.run.is_some());
		s.finish_non_exhaustive()
	}
}
