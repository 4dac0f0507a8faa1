//! # shopfront-api: Remote Store Access for Shopfront
//!
//! Everything that leaves the device lives here: the HTTP client for the
//! remote product/auth API and the durable session-token file. The state
//! model in `shopfront-core` stays pure; this crate feeds it.
//!
//! ## Consumed Endpoints
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                     Remote API Surface                                  │
//! │                                                                         │
//! │  POST /auth/login                {username, password}                   │
//! │       → 200 {token, ...userFields}                                      │
//! │       → 4xx {message}            (credentials rejected)                 │
//! │                                                                         │
//! │  GET  /products?limit=&skip=     → {products: [...], total, ...}        │
//! │  GET  /products/category/{slug}  → {products: [...], total, ...}        │
//! │                                                                         │
//! │  The client never retries; one request per invocation. Request and      │
//! │  connect timeouts bound every call so a hung server can never leave     │
//! │  a store loading forever.                                               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

pub mod client;
pub mod config;
pub mod error;
pub mod token;

pub use client::ApiClient;
pub use config::ApiConfig;
pub use error::{ApiError, ApiResult};
pub use token::TokenStore;
