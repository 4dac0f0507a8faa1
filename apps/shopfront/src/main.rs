//! # Shopfront Application Entry Point
//!
//! Thin binary wrapper; the actual setup lives in lib.rs for testability.

use tracing::error;

#[tokio::main]
async fn main() {
    if let Err(e) = shopfront::run().await {
        error!(error = %e, "shopfront failed to start");
        std::process::exit(1);
    }
}
