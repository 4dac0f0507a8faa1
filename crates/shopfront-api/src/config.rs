//! # API Client Configuration
//!
//! Base URL and timeouts for the remote API, resolved from the environment
//! with development defaults.

use std::time::Duration;

/// Default public instance of the product/auth API.
const DEFAULT_BASE_URL: &str = "https://dummyjson.com";

/// Per-request timeout. Bounds how long a store can stay loading.
const REQUEST_TIMEOUT_SECS: u64 = 30;

/// TCP connect timeout.
const CONNECT_TIMEOUT_SECS: u64 = 10;

/// Configuration for [`crate::ApiClient`].
#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// API base URL, e.g. "https://dummyjson.com".
    pub base_url: String,
    /// Total time budget for one request.
    pub request_timeout: Duration,
    /// Time budget for establishing the connection.
    pub connect_timeout: Duration,
}

impl Default for ApiConfig {
    fn default() -> Self {
        ApiConfig {
            base_url: DEFAULT_BASE_URL.to_string(),
            request_timeout: Duration::from_secs(REQUEST_TIMEOUT_SECS),
            connect_timeout: Duration::from_secs(CONNECT_TIMEOUT_SECS),
        }
    }
}

impl ApiConfig {
    /// Creates a config from an explicit base URL, the `SHOPFRONT_API_URL`
    /// environment variable, or the default instance - in that order.
    pub fn from_env_or(base_url: Option<String>) -> Self {
        ApiConfig {
            base_url: base_url
                .or_else(|| std::env::var("SHOPFRONT_API_URL").ok())
                .unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
            ..ApiConfig::default()
        }
    }
}
