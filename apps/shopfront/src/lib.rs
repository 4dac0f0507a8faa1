//! # Shopfront Application Library
//!
//! The composition root: owns the application state and exposes the
//! operations the frontend drives.
//!
//! ## Module Organization
//! ```text
//! shopfront/
//! ├── lib.rs          ◄─── You are here (startup & wiring)
//! ├── state/
//! │   ├── mod.rs      ◄─── AppState + per-store wrappers
//! │   ├── cart.rs     ◄─── CartState
//! │   ├── catalog.rs  ◄─── CatalogState
//! │   └── session.rs  ◄─── SessionState
//! └── ops/
//!     ├── mod.rs      ◄─── Operation exports
//!     ├── cart.rs     ◄─── Cart manipulation
//!     ├── catalog.rs  ◄─── Catalog loading & projection
//!     └── auth.rs     ◄─── Login / logout
//! ```
//!
//! ## State Management
//! There is no global store singleton: [`state::AppState`] is an explicit
//! struct the composition root builds and hands to whoever needs a slice.
//! Each slice is independently lockable; stores never reach into each
//! other - they compose only through the operations layer.

pub mod ops;
pub mod state;

use tracing::info;
use tracing_subscriber::EnvFilter;

use shopfront_api::{ApiClient, ApiConfig, TokenStore};
use shopfront_core::types::Credentials;
use state::AppState;

/// Runs a headless storefront session: loads the first catalog page and,
/// when `SHOPFRONT_USERNAME`/`SHOPFRONT_PASSWORD` are set, performs a
/// login. Exercises the same operations a UI would.
pub async fn run() -> Result<(), Box<dyn std::error::Error>> {
    init_tracing();
    info!("Starting Shopfront");

    let api = ApiClient::new(ApiConfig::from_env_or(None))?;
    let tokens = TokenStore::open_default()?;
    let app = AppState::new();

    let catalog = ops::catalog::load_catalog(&app.catalog, &api).await;
    info!(
        items = catalog.items.len(),
        page = catalog.page,
        page_count = ?catalog.page_count,
        error = ?catalog.error,
        "catalog loaded"
    );

    if let (Ok(username), Ok(password)) = (
        std::env::var("SHOPFRONT_USERNAME"),
        std::env::var("SHOPFRONT_PASSWORD"),
    ) {
        let session =
            ops::auth::login(&app.session, &api, &tokens, Credentials::new(username, password))
                .await;
        info!(
            authenticated = session.user.is_some(),
            error = ?session.error,
            "login attempted"
        );
    }

    Ok(())
}

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show debug messages
/// - `RUST_LOG=shopfront=trace` - Show trace for shopfront crates only
/// - Default: INFO level
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,shopfront=debug"));

    tracing_subscriber::fmt().with_env_filter(filter).init();
}
