//! HTTP client for the portfolio API.
//!
//! Every endpoint is a plain `GET` below the configured base URL. A request that
//! exceeds the configured timeout fails with [`Error::Timeout`]; everything else
//! that goes wrong before a body arrives is an [`Error::Transport`].

use async_trait::async_trait;
use log::debug;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT};
use serde::de::DeserializeOwned;
use std::time::Duration;

use wealthdash_core::errors::{Error, Result};
use wealthdash_core::{
    AllocationResponse, Holding, PerformanceResponse, PortfolioApiTrait, Summary,
};

use crate::config::ClientConfig;

pub const HOLDINGS_PATH: &str = "/holdings";
pub const ALLOCATION_PATH: &str = "/allocation";
pub const SUMMARY_PATH: &str = "/summary";
pub const PERFORMANCE_PATH: &str = "/performance";

#[derive(Debug, serde::Deserialize)]
struct ApiErrorResponse {
    #[serde(default)]
    error: Option<String>,
    #[serde(default)]
    message: Option<String>,
}

/// HTTP client for the portfolio API.
///
/// # Example
///
/// ```ignore
/// let client = PortfolioApiClient::new(&ClientConfig::from_env())?;
/// let holdings = client.get_holdings().await?;
/// ```
#[derive(Debug, Clone)]
pub struct PortfolioApiClient {
    client: reqwest::Client,
    base_url: String,
    timeout: Duration,
}

impl PortfolioApiClient {
    /// Create a new client.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be initialized.
    pub fn new(config: &ClientConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| Error::Config(format!("Failed to initialize HTTP client: {}", e)))?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            timeout: config.timeout,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn headers(&self) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        headers
    }

    fn request_error(&self, path: &str, e: reqwest::Error) -> Error {
        if e.is_timeout() {
            Error::Timeout {
                resource: path.to_string(),
                timeout_ms: u64::try_from(self.timeout.as_millis()).unwrap_or(u64::MAX),
            }
        } else {
            Error::Transport(format!("{}: {}", path, e))
        }
    }

    /// Make a GET request and parse the response.
    async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let url = format!("{}{}", self.base_url, path);
        debug!("[PortfolioApi] GET {}", url);

        let response = self
            .client
            .get(&url)
            .headers(self.headers())
            .send()
            .await
            .map_err(|e| self.request_error(path, e))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| self.request_error(path, e))?;

        parse_body(status.as_u16(), &body)
    }
}

/// Turns a status and body into a typed record or an API/decode error.
pub(crate) fn parse_body<T: DeserializeOwned>(status: u16, body: &str) -> Result<T> {
    if !(200..300).contains(&status) {
        // Try to parse error response for a better message
        if let Ok(err) = serde_json::from_str::<ApiErrorResponse>(body) {
            if let Some(message) = err.message.or(err.error) {
                return Err(Error::Api { status, message });
            }
        }
        return Err(Error::Api {
            status,
            message: body.chars().take(200).collect(),
        });
    }

    serde_json::from_str(body).map_err(|e| {
        Error::Decode(format!(
            "{} - {}",
            e,
            body.chars().take(200).collect::<String>()
        ))
    })
}

#[async_trait]
impl PortfolioApiTrait for PortfolioApiClient {
    async fn get_holdings(&self) -> Result<Vec<Holding>> {
        self.get(HOLDINGS_PATH).await
    }

    async fn get_allocation(&self) -> Result<AllocationResponse> {
        self.get(ALLOCATION_PATH).await
    }

    async fn get_summary(&self) -> Result<Summary> {
        self.get(SUMMARY_PATH).await
    }

    async fn get_performance(&self) -> Result<PerformanceResponse> {
        self.get(PERFORMANCE_PATH).await
    }
}
