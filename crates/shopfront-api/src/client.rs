//! # Remote API Client
//!
//! Thin reqwest wrapper over the product/auth API.
//!
//! ## Request Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                     ApiClient Request Flow                              │
//! │                                                                         │
//! │  fetch_products(query)                                                  │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌───────────────────────────────────────────┐                         │
//! │  │  Category selected?                       │                         │
//! │  │  YES: GET /products/category/{slug}       │                         │
//! │  │  NO:  GET /products?limit=&skip=          │                         │
//! │  └───────────────────────────────────────────┘                         │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  2xx → deserialize ProductPage                                          │
//! │  4xx/5xx → ApiError::Rejected { status, server message }                │
//! │  transport → ApiError::Network / Timeout                                │
//! │                                                                         │
//! │  No retries, no caching, no deduplication: the catalog store's          │
//! │  generation counter decides which response is applied.                  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use reqwest::{Response, Url};
use serde::Deserialize;
use tracing::debug;

use shopfront_core::catalog::{CatalogQuery, ProductPage};
use shopfront_core::types::{Credentials, LoginResponse};

use crate::config::ApiConfig;
use crate::error::{ApiError, ApiResult};

/// Error payload the server sends alongside non-success statuses.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: String,
}

/// Client for the remote product/auth API.
pub struct ApiClient {
    http: reqwest::Client,
    base: Url,
}

impl ApiClient {
    /// Builds a client from the given configuration.
    pub fn new(config: ApiConfig) -> ApiResult<Self> {
        let mut base = Url::parse(&config.base_url)
            .map_err(|e| ApiError::Config(format!("invalid base URL '{}': {}", config.base_url, e)))?;

        // Url::join treats a path without a trailing slash as a file and
        // would drop its last segment
        if !base.path().ends_with('/') {
            base.set_path(&format!("{}/", base.path()));
        }

        let http = reqwest::Client::builder()
            .timeout(config.request_timeout)
            .connect_timeout(config.connect_timeout)
            .build()
            .map_err(|e| ApiError::Config(e.to_string()))?;

        Ok(ApiClient { http, base })
    }

    /// Authenticates against `POST /auth/login`.
    ///
    /// A rejected login surfaces the server's own message; the caller
    /// never sees the credentials again after this returns.
    pub async fn login(&self, credentials: &Credentials) -> ApiResult<LoginResponse> {
        let url = self.join("auth/login")?;
        debug!(username = %credentials.username, "login request");

        let response = self.http.post(url).json(credentials).send().await?;
        let response = Self::require_success(response).await?;

        Ok(response.json::<LoginResponse>().await?)
    }

    /// Fetches one catalog page for the given query.
    pub async fn fetch_products(&self, query: &CatalogQuery) -> ApiResult<ProductPage> {
        let url = self.products_url(query)?;
        debug!(
            category = %query.category(),
            page = query.page(),
            limit = query.limit(),
            "fetch products"
        );

        let response = self.http.get(url).send().await?;
        let response = Self::require_success(response).await?;

        Ok(response.json::<ProductPage>().await?)
    }

    /// Builds the products URL for a query: the category endpoint when a
    /// category is selected, the paged listing otherwise.
    fn products_url(&self, query: &CatalogQuery) -> ApiResult<Url> {
        match query.category().slug() {
            Some(slug) => self.join(&format!("products/category/{}", slug)),
            None => {
                let mut url = self.join("products")?;
                url.query_pairs_mut()
                    .append_pair("limit", &query.limit().to_string())
                    .append_pair("skip", &query.skip().to_string());
                Ok(url)
            }
        }
    }

    fn join(&self, path: &str) -> ApiResult<Url> {
        self.base
            .join(path)
            .map_err(|e| ApiError::Config(format!("invalid path '{}': {}", path, e)))
    }

    /// Turns non-success statuses into [`ApiError::Rejected`], preserving
    /// the server's `{message}` payload when one was sent.
    async fn require_success(response: Response) -> ApiResult<Response> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().await.unwrap_or_default();
        let message = parse_error_message(&body)
            .unwrap_or_else(|| status.canonical_reason().unwrap_or("request rejected").to_string());

        Err(ApiError::Rejected {
            status: status.as_u16(),
            message,
        })
    }
}

fn parse_error_message(body: &str) -> Option<String> {
    serde_json::from_str::<ErrorBody>(body)
        .ok()
        .map(|b| b.message)
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use shopfront_core::catalog::Category;

    fn client(base: &str) -> ApiClient {
        ApiClient::new(ApiConfig::from_env_or(Some(base.to_string()))).unwrap()
    }

    fn query(page: u32, limit: u32, category: Category) -> CatalogQuery {
        let mut query = CatalogQuery::default().with_limit(limit).unwrap();
        query.set_category(category);
        query.set_page(page);
        query
    }

    #[test]
    fn test_paged_listing_url() {
        let client = client("https://dummyjson.com");
        let url = client
            .products_url(&query(3, 10, Category::All))
            .unwrap();

        assert_eq!(
            url.as_str(),
            "https://dummyjson.com/products?limit=10&skip=20"
        );
    }

    #[test]
    fn test_category_url_has_no_paging() {
        let client = client("https://dummyjson.com");
        let url = client
            .products_url(&query(1, 10, Category::from("smartphones")))
            .unwrap();

        assert_eq!(
            url.as_str(),
            "https://dummyjson.com/products/category/smartphones"
        );
    }

    #[test]
    fn test_base_path_gets_trailing_slash() {
        let client = client("http://localhost:3001/api");
        let url = client.join("auth/login").unwrap();
        assert_eq!(url.as_str(), "http://localhost:3001/api/auth/login");
    }

    #[test]
    fn test_invalid_base_url_rejected() {
        let err = ApiClient::new(ApiConfig::from_env_or(Some("not a url".to_string())));
        assert!(matches!(err, Err(ApiError::Config(_))));
    }

    #[test]
    fn test_error_body_message_extraction() {
        assert_eq!(
            parse_error_message(r#"{"message": "Invalid credentials"}"#),
            Some("Invalid credentials".to_string())
        );
        assert_eq!(parse_error_message("<html>502</html>"), None);
        assert_eq!(parse_error_message(""), None);
    }
}
