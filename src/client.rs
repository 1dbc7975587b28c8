//! Typed client for the summarizer HTTP API.
//!
//! Without a configured base URL (or with mock data forced on) the client
//! never touches the network and answers from [`crate::mock`].

use reqwest::{Client, ClientBuilder, Response};
use std::time::Duration;
use once_cell::sync::Lazy;
use tokio_retry::RetryIf;
use tracing::{debug, warn};

use crate::api::models::SummaryRequest;
use crate::config::{ClientConfig, Config};
use crate::error::{AppError, ErrorBody, Result};
use crate::health::{self, HealthStatus};
use crate::mock;
use crate::summarizer::SummaryResult;

pub const SUMMARIZE_PATH: &str = "/api/summarize";
pub const HEALTH_PATH: &str = "/api/health";

/// Upper bound for a single backoff sleep.
pub const MAX_RETRY_DELAY: Duration = Duration::from_secs(60);

// Create a static client to reuse connections
static HTTP: Lazy<Client> = Lazy::new(|| {
    ClientBuilder::new()
        .timeout(Duration::from_secs(10))
        .connect_timeout(Duration::from_secs(5))
        .pool_max_idle_per_host(10)
        .build()
        .expect("Failed to build HTTP client")
});

#[derive(Clone, Debug)]
pub struct SummaryClient {
    config: ClientConfig,
}

impl SummaryClient {
    pub fn new(config: ClientConfig) -> Self {
        SummaryClient { config }
    }

    /// Builds a client from `API_BASE_URL`, `USE_MOCK_DATA` and `CLIENT_*`.
    pub fn from_env() -> Result<Self> {
        Ok(Self::from(&Config::load()?))
    }

    pub fn is_mock(&self) -> bool {
        self.config.use_mock_data || self.config.base_url.is_none()
    }

    fn url(&self, path: &str) -> Option<String> {
        self.config
            .base_url
            .as_deref()
            .map(|base| format!("{}{}", base.trim_end_matches('/'), path))
    }

    pub async fn generate_summary(&self, request: &SummaryRequest) -> Result<SummaryResult> {
        let url = match self.url(SUMMARIZE_PATH) {
            Some(url) if !self.config.use_mock_data => url,
            _ => {
                debug!("Serving canned summary");
                return Ok(mock::summary_for(request.length()));
            }
        };

        let response = HTTP.post(&url).json(request).send().await?;
        decode(response).await
    }

    /// Retries failed requests with exponential backoff: `base`, `2 * base`,
    /// `4 * base`, ... between attempts. Rejected input is never retried.
    pub async fn generate_summary_with_retry(
        &self,
        request: &SummaryRequest,
    ) -> Result<SummaryResult> {
        let delays = backoff_delays(self.config.retry_base_delay, self.config.max_retries);

        RetryIf::spawn(
            delays,
            || self.generate_summary(request),
            |err: &AppError| {
                let retry = !err.is_client_error();
                if retry {
                    warn!(error = %err, "Summary request failed, retrying");
                }
                retry
            },
        )
        .await
    }

    pub async fn check_health(&self) -> Result<HealthStatus> {
        let url = match self.url(HEALTH_PATH) {
            Some(url) if !self.config.use_mock_data => url,
            _ => return Ok(health::status()),
        };

        let response = HTTP.get(&url).send().await?;
        decode(response).await
    }
}

impl From<&Config> for SummaryClient {
    fn from(config: &Config) -> Self {
        SummaryClient::new(config.client.clone())
    }
}

/// Sleeps between `attempts` tries: `base * 2^i`, saturating at [`MAX_RETRY_DELAY`].
pub fn backoff_delays(base: Duration, attempts: u32) -> impl Iterator<Item = Duration> {
    (0..attempts.saturating_sub(1)).map(move |i| {
        let factor = 2u32.checked_pow(i).unwrap_or(u32::MAX);
        base.checked_mul(factor)
            .map_or(MAX_RETRY_DELAY, |delay| delay.min(MAX_RETRY_DELAY))
    })
}

async fn decode<T: serde::de::DeserializeOwned>(response: Response) -> Result<T> {
    let status = response.status();
    if status.is_success() {
        return Ok(response.json::<T>().await?);
    }

    let body = response.text().await.unwrap_or_default();
    let message = serde_json::from_str::<ErrorBody>(&body)
        .map(|err| err.message)
        .unwrap_or(body);

    // reqwest 0.11 and axum 0.7 ship different `http` majors
    let status = axum::http::StatusCode::from_u16(status.as_u16())
        .map_err(|e| AppError::Upstream(e.to_string()))?;
    Err(AppError::from_status(status, message))
}
