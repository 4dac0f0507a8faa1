//! # Catalog Operations
//!
//! Loading catalog pages and projecting them for display.
//!
//! ## One Verb For Loading
//! The stores themselves never fetch. `select_category` and `select_page`
//! mutate the query and then call [`load_catalog`] - there is no implicit
//! "the UI must remember to re-fetch" coupling. `load_catalog` is
//! idempotent per query fingerprint: calling it again for a page that is
//! already displayed skips the network entirely.
//!
//! ## Overlapping Fetches
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │           Overlapping load_catalog calls (generation guard)             │
//! │                                                                         │
//! │  load #1 ── begin_fetch (gen 1) ──── request ───────────┐ settles last  │
//! │  load #2 ────── begin_fetch (gen 2) ── request ──┐      │               │
//! │                                                  ▼      ▼               │
//! │                                         apply (gen 2)  DROPPED (gen 1)  │
//! │                                                                         │
//! │  The latest-issued fetch decides the final state regardless of          │
//! │  completion order. Stale completions are logged and discarded.          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use shopfront_api::ApiClient;
use shopfront_core::types::Product;
use shopfront_core::view::{project_view, SortKey, Wishlist};
use shopfront_core::{Catalog, Category};

use crate::state::CatalogState;

/// Shown when a fetch fails without a server-provided message.
const FETCH_FALLBACK: &str = "Failed to load products. Please try again.";

/// Catalog view for the product grid.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogView {
    pub items: Vec<Product>,
    pub loading: bool,
    pub error: Option<String>,
    pub page: u32,
    pub page_count: Option<u32>,
    pub category: String,
}

impl From<&Catalog> for CatalogView {
    fn from(catalog: &Catalog) -> Self {
        CatalogView {
            items: catalog.items().to_vec(),
            loading: catalog.is_loading(),
            error: catalog.error().map(str::to_string),
            page: catalog.query().page(),
            page_count: catalog.page_count(),
            category: catalog.query().category().to_string(),
        }
    }
}

/// Loads the catalog page for the store's current query.
///
/// ## Behavior
/// - Already displaying this exact query: returns without fetching
/// - Otherwise: takes a generation ticket, fetches unlocked, applies the
///   result only if no newer fetch superseded it meanwhile
/// - On failure: previous items stay visible, the error message is stored
pub async fn load_catalog(catalog: &CatalogState, api: &ApiClient) -> CatalogView {
    // One lock acquisition: the fingerprint check and the returned view
    // must describe the same query snapshot
    let already_loaded = catalog.with(|c| {
        let fingerprint = c.query().fingerprint();
        if c.is_loaded(&fingerprint) {
            debug!(%fingerprint, "catalog page already loaded");
            Some(CatalogView::from(c))
        } else {
            None
        }
    });
    if let Some(view) = already_loaded {
        return view;
    }

    let ticket = catalog.with_mut(|c| c.begin_fetch());

    match api.fetch_products(ticket.query()).await {
        Ok(page) => {
            let applied = catalog.with_mut(|c| c.apply_page(&ticket, page));
            if !applied {
                debug!(fingerprint = %ticket.fingerprint(), "stale catalog page dropped");
            }
        }
        Err(err) => {
            warn!(error = %err, fingerprint = %ticket.fingerprint(), "catalog fetch failed");
            let message = err
                .server_message()
                .unwrap_or(FETCH_FALLBACK)
                .to_string();
            let applied = catalog.with_mut(|c| c.apply_error(&ticket, message));
            if !applied {
                debug!(fingerprint = %ticket.fingerprint(), "stale catalog failure dropped");
            }
        }
    }

    catalog.with(|c| CatalogView::from(c))
}

/// Selects a category (resetting to page 1) and loads it.
pub async fn select_category(
    catalog: &CatalogState,
    api: &ApiClient,
    category: Category,
) -> CatalogView {
    catalog.with_mut(|c| c.set_category(category));
    load_catalog(catalog, api).await
}

/// Moves to a page of the current category and loads it.
pub async fn select_page(catalog: &CatalogState, api: &ApiClient, page: u32) -> CatalogView {
    catalog.with_mut(|c| c.set_page(page));
    load_catalog(catalog, api).await
}

/// Projects the current page for display: search filter plus sort order.
///
/// Search term and sort key are ephemeral view state owned by the caller;
/// they never land in the store.
pub fn search_catalog(catalog: &CatalogState, search_term: &str, sort: SortKey) -> Vec<Product> {
    catalog.with(|c| project_view(c.items(), search_term, sort))
}

/// Projects the hearted products of the current page, in catalog order.
///
/// The [`Wishlist`] is caller-owned like the search term; products
/// hearted on an earlier page reappear when that page is loaded again.
pub fn wishlist_items(catalog: &CatalogState, wishlist: &Wishlist) -> Vec<Product> {
    catalog.with(|c| {
        c.items()
            .iter()
            .filter(|p| wishlist.contains(p.id))
            .cloned()
            .collect()
    })
}

// =============================================================================
// Unit Tests
// =============================================================================
