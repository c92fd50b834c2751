use std::{ env, net::SocketAddr };

use anyhow::{ Context, Result };
use tokio::net::lookup_host;

pub const HOST_VAR: &str = "APP_HOST";
pub const PORT_VAR: &str = "APP_PORT";

/// Address the server binds to (default: 0.0.0.0:8000)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
	pub host: String,
	pub port: u16,
}

impl Default for ServerConfig {
	fn default() -> Self {
		Self {
			host: "0.0.0.0".to_string(),
			port: 8000,
		}
	}
}

impl ServerConfig {
	/// Read `APP_HOST` / `APP_PORT`, loading a `.env` file first if one exists
	pub fn from_env() -> Result<Self> {
		dotenvy::dotenv().ok();
		Self::from_vars(env::var(HOST_VAR).ok(), env::var(PORT_VAR).ok())
	}

	pub fn from_vars(host: Option<String>, port: Option<String>) -> Result<Self> {
		let defaults = Self::default();
		let port = match port {
			Some(raw) =>
				raw
					.trim()
					.parse::<u16>()
					.with_context(|| format!("invalid {}: {:?}", PORT_VAR, raw))?,
			None => defaults.port,
		};

		Ok(Self {
			host: host.unwrap_or(defaults.host),
			port,
		})
	}

	/// Resolve `host` (IP literal or hostname) to the first matching address
	pub async fn socket_addr(&self) -> Result<SocketAddr> {
		lookup_host((self.host.as_str(), self.port))
			.await
			.with_context(|| format!("cannot resolve bind host {:?}", self.host))?
			.next()
			.with_context(|| format!("no address found for bind host {:?}", self.host))
	}
}
