use anyhow::Result;

use common::{ config::ServerConfig, server::run_server, store::InMemoryStore };

#[tokio::main]
async fn main() -> Result<()> {
	let config = ServerConfig::from_env()?;

	// Seeded catalog: three products and one user
	let store = InMemoryStore::seeded();

	run_server(store, &config).await?;

	Ok(())
}
