use std::env;
use std::net::{IpAddr, SocketAddr};
use std::str::FromStr;
use std::time::Duration;
use crate::error::{AppError, Result};

/// Cap applied to `CLIENT_MAX_RETRIES`.
pub const MAX_CLIENT_RETRIES: u32 = 10;

#[derive(Clone, Debug)]
pub struct Config {
    pub server_addr: SocketAddr,
    pub client: ClientConfig,
}

/// Settings for [`crate::client::SummaryClient`]; the server itself ignores them.
#[derive(Clone, Debug)]
pub struct ClientConfig {
    /// Backend root, e.g. `http://127.0.0.1:3000`. `None` means mock mode.
    pub base_url: Option<String>,
    pub use_mock_data: bool,
    pub max_retries: u32,
    pub retry_base_delay: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        ClientConfig {
            base_url: None,
            use_mock_data: false,
            max_retries: 3,
            retry_base_delay: Duration::from_secs(1),
        }
    }
}

impl ClientConfig {
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        ClientConfig {
            base_url: Some(base_url.into()),
            ..ClientConfig::default()
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        // Load environment variables from .env file if it exists
        dotenv::dotenv().ok();

        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the configuration from an arbitrary variable source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let host = lookup("HOST").unwrap_or_else(|| "127.0.0.1".to_string());
        let port = lookup("PORT").unwrap_or_else(|| "3000".to_string());
        let port = port
            .parse::<u16>()
            .map_err(|e| AppError::Config(format!("Invalid port: {}", e)))?;
        let ip = IpAddr::from_str(&host)
            .map_err(|e| AppError::Config(format!("Invalid host address: {}", e)))?;

        let server_addr = SocketAddr::new(ip, port);

        let base_url = lookup("API_BASE_URL")
            .map(|url| url.trim_end_matches('/').to_string())
            .filter(|url| !url.is_empty());
        let use_mock_data = lookup("USE_MOCK_DATA").is_some_and(|v| v == "true");

        let max_retries = match lookup("CLIENT_MAX_RETRIES") {
            Some(raw) => raw
                .parse::<u32>()
                .map_err(|e| AppError::Config(format!("Invalid CLIENT_MAX_RETRIES: {}", e)))?
                .clamp(1, MAX_CLIENT_RETRIES),
            None => 3,
        };
        let retry_base_delay = match lookup("CLIENT_RETRY_BASE_MS") {
            Some(raw) => {
                let millis = raw.parse::<u64>().map_err(|e| {
                    AppError::Config(format!("Invalid CLIENT_RETRY_BASE_MS: {}", e))
                })?;
                Duration::from_millis(millis)
            }
            None => Duration::from_secs(1),
        };

        Ok(Config {
            server_addr,
            client: ClientConfig {
                base_url,
                use_mock_data,
                max_retries,
                retry_base_delay,
            },
        })
    }
}
