//! # Catalog Store
//!
//! The product listing state: the current page of fetched products, the
//! query that produced it, and the fetch lifecycle.
//!
//! ## Fetch Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Catalog Fetch Lifecycle                              │
//! │                                                                         │
//! │  set_category / set_page          (pure; category resets page to 1)    │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  begin_fetch() ──► FetchTicket { generation, query }                   │
//! │         │          loading = true, error cleared,                      │
//! │         │          previous items retained while pending               │
//! │         ▼                                                               │
//! │  [ network call happens outside this crate ]                           │
//! │         │                                                               │
//! │    ┌────┴──────────────┐                                               │
//! │    ▼                   ▼                                               │
//! │  apply_page(ticket)  apply_error(ticket)                               │
//! │  items replaced      items UNCHANGED, error set                        │
//! │  wholesale                                                             │
//! │                                                                         │
//! │  STALENESS RULE: a ticket from an older generation is dropped.         │
//! │  When fetches overlap, the latest-issued fetch decides the final       │
//! │  state no matter which response settles last.                          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use ts_rs::TS;

use crate::error::ValidationError;
use crate::types::Product;
use crate::DEFAULT_PAGE_LIMIT;

// =============================================================================
// Category
// =============================================================================

/// A catalog category filter: everything, or one category slug.
///
/// Serialized as its slug string ("all" or e.g. "smartphones"), matching
/// what the remote API and the frontend exchange.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "String", from = "String")]
pub enum Category {
    /// No category filter ("all").
    All,
    /// A single category slug, e.g. "smartphones".
    Id(String),
}

impl Category {
    /// Returns the category slug when one is selected.
    pub fn slug(&self) -> Option<&str> {
        match self {
            Category::All => None,
            Category::Id(slug) => Some(slug),
        }
    }
}

impl Default for Category {
    fn default() -> Self {
        Category::All
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Category::All => write!(f, "all"),
            Category::Id(slug) => write!(f, "{}", slug),
        }
    }
}

impl From<String> for Category {
    fn from(value: String) -> Self {
        if value == "all" {
            Category::All
        } else {
            Category::Id(value)
        }
    }
}

impl From<&str> for Category {
    fn from(value: &str) -> Self {
        Category::from(value.to_string())
    }
}

impl From<Category> for String {
    fn from(value: Category) -> Self {
        value.to_string()
    }
}

// =============================================================================
// Catalog Query
// =============================================================================

/// The parameters of a catalog page request.
///
/// ## Invariants
/// - `page >= 1` (the API is skip-based; `skip() = (page - 1) * limit`)
/// - `limit >= 1`
/// - Changing category resets the page to 1, so a category switch can
///   never leave a stale out-of-range page behind
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct CatalogQuery {
    page: u32,
    limit: u32,
    #[ts(as = "String")]
    category: Category,
}

impl Default for CatalogQuery {
    fn default() -> Self {
        CatalogQuery {
            page: 1,
            limit: DEFAULT_PAGE_LIMIT,
            category: Category::All,
        }
    }
}

impl CatalogQuery {
    /// Overrides the page limit. Zero is rejected.
    pub fn with_limit(mut self, limit: u32) -> Result<Self, ValidationError> {
        if limit == 0 {
            return Err(ValidationError::MustBePositive {
                field: "limit".to_string(),
            });
        }
        self.limit = limit;
        Ok(self)
    }

    #[inline]
    pub fn page(&self) -> u32 {
        self.page
    }

    #[inline]
    pub fn limit(&self) -> u32 {
        self.limit
    }

    #[inline]
    pub fn category(&self) -> &Category {
        &self.category
    }

    /// Offset into the remote collection for the current page.
    ///
    /// Computed in u64: `set_page` accepts any page number, so the
    /// product can exceed u32.
    pub fn skip(&self) -> u64 {
        u64::from(self.page - 1) * u64::from(self.limit)
    }

    /// Identifies this request's parameters. Two queries with the same
    /// fingerprint would fetch the same page.
    pub fn fingerprint(&self) -> String {
        format!("{}:{}:{}", self.category, self.page, self.limit)
    }

    /// Selects a category filter and resets the page to 1.
    pub fn set_category(&mut self, category: Category) {
        self.category = category;
        self.page = 1;
    }

    /// Moves to the given page (clamped to >= 1).
    pub fn set_page(&mut self, page: u32) {
        self.page = page.max(1);
    }
}

// =============================================================================
// Product Page (API response)
// =============================================================================

/// One page of products as returned by the remote catalog API.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductPage {
    pub products: Vec<Product>,

    /// Total products matching the query, across all pages.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total: Option<u64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub skip: Option<u64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub limit: Option<u64>,
}

// =============================================================================
// Fetch Ticket
// =============================================================================

/// Handed out by [`Catalog::begin_fetch`]; pairs the generation at issue
/// time with a snapshot of the query to fetch.
///
/// The catalog only applies results carrying the CURRENT generation. A
/// ticket from before a newer `begin_fetch` is stale, and its result is
/// dropped on arrival.
#[derive(Debug, Clone)]
pub struct FetchTicket {
    generation: u64,
    query: CatalogQuery,
}

impl FetchTicket {
    /// The query snapshot this ticket was issued for.
    pub fn query(&self) -> &CatalogQuery {
        &self.query
    }

    pub fn fingerprint(&self) -> String {
        self.query.fingerprint()
    }
}

// =============================================================================
// Catalog
// =============================================================================

/// The product store.
///
/// Holds the currently displayed page, the query state, and the fetch
/// lifecycle flags. All fields are private: every transition goes through
/// a method so the invariants stay auditable.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    items: Vec<Product>,
    total: Option<u64>,
    query: CatalogQuery,
    loading: bool,
    error: Option<String>,
    generation: u64,
    /// Fingerprint of the query whose page is currently displayed.
    loaded: Option<String>,
}

impl Catalog {
    pub fn new() -> Self {
        Catalog::default()
    }

    // -------------------------------------------------------------------------
    // Accessors
    // -------------------------------------------------------------------------

    pub fn items(&self) -> &[Product] {
        &self.items
    }

    pub fn query(&self) -> &CatalogQuery {
        &self.query
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Total products matching the current query, when the API reported it.
    pub fn total(&self) -> Option<u64> {
        self.total
    }

    /// Number of pages for the current query, when the total is known.
    pub fn page_count(&self) -> Option<u32> {
        let total = self.total?;
        let limit = u64::from(self.query.limit);
        let pages = total.div_ceil(limit).max(1);
        Some(u32::try_from(pages).unwrap_or(u32::MAX))
    }

    /// True when the displayed page is exactly the given fingerprint and no
    /// fetch is pending. Lets the caller skip a redundant fetch.
    pub fn is_loaded(&self, fingerprint: &str) -> bool {
        !self.loading && self.error.is_none() && self.loaded.as_deref() == Some(fingerprint)
    }

    // -------------------------------------------------------------------------
    // Query transitions (pure, synchronous)
    // -------------------------------------------------------------------------

    /// Selects a category filter and resets the page to 1.
    ///
    /// Does not itself fetch: the composition root's `load_catalog` is the
    /// single operation that talks to the network.
    pub fn set_category(&mut self, category: Category) {
        self.query.set_category(category);
    }

    /// Moves to the given page (clamped to >= 1).
    pub fn set_page(&mut self, page: u32) {
        self.query.set_page(page);
    }

    /// Replaces the whole query.
    pub fn set_query(&mut self, query: CatalogQuery) {
        self.query = query;
    }

    // -------------------------------------------------------------------------
    // Fetch lifecycle
    // -------------------------------------------------------------------------

    /// Starts a fetch for the current query.
    ///
    /// Bumps the generation (invalidating any in-flight ticket), marks the
    /// store loading, and clears a previous error. The previous items stay
    /// visible while the fetch is pending.
    pub fn begin_fetch(&mut self) -> FetchTicket {
        self.generation += 1;
        self.loading = true;
        self.error = None;

        FetchTicket {
            generation: self.generation,
            query: self.query.clone(),
        }
    }

    /// Applies a fetched page.
    ///
    /// Returns `false` (dropping the page) when the ticket is stale, i.e.
    /// a newer `begin_fetch` happened after this ticket was issued.
    pub fn apply_page(&mut self, ticket: &FetchTicket, page: ProductPage) -> bool {
        if ticket.generation != self.generation {
            return false;
        }

        self.loading = false;
        self.error = None;
        self.items = page.products;
        self.total = page.total;
        self.loaded = Some(ticket.fingerprint());
        true
    }

    /// Applies a fetch failure.
    ///
    /// The previously displayed items are left intact; only the error
    /// message and the loading flag change. Stale tickets are dropped the
    /// same way as in [`Catalog::apply_page`].
    pub fn apply_error(&mut self, ticket: &FetchTicket, message: impl Into<String>) -> bool {
        if ticket.generation != self.generation {
            return false;
        }

        self.loading = false;
        self.error = Some(message.into());
        true
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;

    fn page_of(ids: &[u64]) -> ProductPage {
        ProductPage {
            products: ids
                .iter()
                .map(|&id| Product::new(id, format!("P{}", id), Decimal::from(id)))
                .collect(),
            total: Some(100),
            skip: None,
            limit: None,
        }
    }

    #[test]
    fn test_set_category_resets_page() {
        let mut catalog = Catalog::new();
        catalog.set_page(7);
        assert_eq!(catalog.query().page(), 7);

        catalog.set_category(Category::from("laptops"));
        assert_eq!(catalog.query().page(), 1);
        assert_eq!(catalog.query().category().slug(), Some("laptops"));

        // Holds regardless of prior page, including switching back to all
        catalog.set_page(3);
        catalog.set_category(Category::All);
        assert_eq!(catalog.query().page(), 1);
    }

    #[test]
    fn test_skip_is_page_based() {
        let mut query = CatalogQuery::default().with_limit(10).unwrap();
        assert_eq!(query.skip(), 0);

        query.set_page(3);
        assert_eq!(query.skip(), 20);
    }

    #[test]
    fn test_skip_does_not_overflow_on_huge_pages() {
        let mut query = CatalogQuery::default().with_limit(1000).unwrap();
        query.set_page(u32::MAX);
        assert_eq!(query.skip(), u64::from(u32::MAX - 1) * 1000);
    }

    #[test]
    fn test_zero_limit_rejected() {
        let err = CatalogQuery::default().with_limit(0).unwrap_err();
        assert_eq!(err.to_string(), "limit must be positive");
    }

    #[test]
    fn test_fingerprint_identifies_parameters() {
        let q1 = CatalogQuery::default();
        let q2 = CatalogQuery::default();
        assert_eq!(q1.fingerprint(), q2.fingerprint());

        let mut q3 = CatalogQuery::default();
        q3.set_category(Category::from("smartphones"));
        assert_ne!(q1.fingerprint(), q3.fingerprint());
    }

    #[test]
    fn test_pending_retains_items_and_clears_error() {
        let mut catalog = Catalog::new();
        let ticket = catalog.begin_fetch();
        assert!(catalog.apply_page(&ticket, page_of(&[1, 2])));

        let ticket = catalog.begin_fetch();
        assert!(catalog.apply_error(&ticket, "boom"));
        assert_eq!(catalog.error(), Some("boom"));

        // A new fetch clears the error and keeps showing the old items
        let _ticket = catalog.begin_fetch();
        assert!(catalog.is_loading());
        assert_eq!(catalog.error(), None);
        assert_eq!(catalog.items().len(), 2);
    }

    #[test]
    fn test_rejected_fetch_keeps_previous_items() {
        let mut catalog = Catalog::new();
        let ticket = catalog.begin_fetch();
        assert!(catalog.apply_page(&ticket, page_of(&[1, 2, 3])));

        let ticket = catalog.begin_fetch();
        assert!(catalog.apply_error(&ticket, "network down"));

        assert!(!catalog.is_loading());
        assert_eq!(catalog.error(), Some("network down"));
        assert_eq!(catalog.items().len(), 3);
    }

    #[test]
    fn test_stale_response_dropped_when_it_settles_last() {
        let mut catalog = Catalog::new();

        // First fetch issued...
        let first = catalog.begin_fetch();
        // ...then a second fetch supersedes it before the first resolves
        let second = catalog.begin_fetch();

        // Second response arrives first and is applied
        assert!(catalog.apply_page(&second, page_of(&[10, 11])));

        // First response settles last but carries a stale generation: dropped
        assert!(!catalog.apply_page(&first, page_of(&[1, 2])));
        let ids: Vec<u64> = catalog.items().iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![10, 11]);

        // Same rule for errors: a stale failure cannot clobber fresh items
        assert!(!catalog.apply_error(&first, "late failure"));
        assert_eq!(catalog.error(), None);
    }

    #[test]
    fn test_latest_issued_fetch_decides_even_on_failure() {
        let mut catalog = Catalog::new();
        let first = catalog.begin_fetch();
        let second = catalog.begin_fetch();

        // Latest fetch fails; that failure is the final state
        assert!(catalog.apply_error(&second, "timeout"));
        // The older success is dropped even though it settles last
        assert!(!catalog.apply_page(&first, page_of(&[1])));

        assert_eq!(catalog.error(), Some("timeout"));
        assert!(catalog.items().is_empty());
    }

    #[test]
    fn test_is_loaded_after_apply() {
        let mut catalog = Catalog::new();
        let fp = catalog.query().fingerprint();
        assert!(!catalog.is_loaded(&fp));

        let ticket = catalog.begin_fetch();
        assert!(!catalog.is_loaded(&fp)); // pending
        catalog.apply_page(&ticket, page_of(&[1]));
        assert!(catalog.is_loaded(&fp));

        // A different query's fingerprint is not considered loaded
        catalog.set_page(2);
        assert!(!catalog.is_loaded(&catalog.query().fingerprint()));
    }

    #[test]
    fn test_page_count_from_reported_total() {
        let mut catalog = Catalog::new();
        assert_eq!(catalog.page_count(), None);

        let ticket = catalog.begin_fetch();
        catalog.apply_page(&ticket, page_of(&[1])); // total = 100, limit = 10
        assert_eq!(catalog.page_count(), Some(10));

        let ticket = catalog.begin_fetch();
        let mut page = page_of(&[1]);
        page.total = Some(101);
        catalog.apply_page(&ticket, page);
        assert_eq!(catalog.page_count(), Some(11));
    }
}
