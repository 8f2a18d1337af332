/* demos/basic.rs */

use hotconf::controller::HotConfig;
use hotconf::decoder::format::Json;
use hotconf::source::FileSource;
use hotconf::RefreshConfig;
use serde::Deserialize;
use std::fs;
use std::time::Duration;

#[derive(Debug, Clone, Deserialize)]
struct AppConfig {
	name: String,
	port: u16,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
	tracing_subscriber::fmt()
		.with_max_level(tracing::Level::DEBUG)
		.init();

	// 0. Prepare a real file
	let config_path = "example_config.json";
	fs::write(config_path, b"{\"name\": \"hot-demo\", \"port\": 8080}")?;
	println!("Created {}", config_path);

	// 1. Build a controller that re-reads the file every two seconds
	let hot = HotConfig::<AppConfig>::builder()
		.pipeline(FileSource::new(config_path), Json)
		.config(
			RefreshConfig::default()
				.interval(Duration::from_secs(2))
				.fetch_timeout(Duration::from_secs(1))
				.max_backoff(Duration::from_secs(16)),
		)
		.build()
		.await?
		.started();

	if let Some(config) = hot.get() {
		println!("Initial config: {} (Port: {})", config.name, config.port);
	}

	println!(
		"Refreshing {} every 2s... (Edit the file, or break it, to see updates)",
		config_path
	);
	println!("Waiting 20 seconds...");

	// Loop to display config and freshness
	for _ in 0..10 {
		tokio::time::sleep(Duration::from_secs(2)).await;
		let config = hot.read()?;
		println!(
			"Current config: {} (Port: {}), health: {:?}",
			config.name,
			config.port,
			hot.health()
		);
	}

	// Cleanup
	drop(hot);
	fs::remove_file(config_path)?;
	println!("Done.");
	Ok(())
}
