//! # shopfront-core: Pure State Model for Shopfront
//!
//! This crate is the **heart** of Shopfront. It contains every store the
//! storefront runs on as pure state transitions with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       Shopfront Architecture                            │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    Frontend (browser)                           │   │
//! │  │    Login ──► Catalog grid ──► Cart ──► Checkout summary         │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ operations                            │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                    apps/shopfront                                │   │
//! │  │    load_catalog, add_to_cart, login, search_catalog, ...       │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │             ★ shopfront-core (THIS CRATE) ★                      │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   cart    │  │  catalog  │  │  session  │  │   view    │  │   │
//! │  │   │   Cart    │  │  Catalog  │  │  Session  │  │ projection│  │   │
//! │  │   │ CartItem  │  │   query   │  │   login   │  │ sort/find │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO NETWORK • NO STORAGE • PURE TRANSITIONS          │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                    shopfront-api (I/O layer)                     │   │
//! │  │              reqwest client, token persistence                   │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Wire-facing types (Product, User, Credentials)
//! - [`cart`] - Cart store (line items, derived totals)
//! - [`catalog`] - Product store (page state, category, fetch lifecycle)
//! - [`session`] - Auth store (login lifecycle)
//! - [`view`] - Derived catalog projection (search + sort)
//! - [`error`] - Validation error types
//!
//! ## Design Principles
//!
//! 1. **Pure Transitions**: Every store mutation is a plain method on owned
//!    state - same input, same output, trivially testable
//! 2. **No I/O**: Network, file system, and clock reads (beyond timestamps
//!    stamped by callers of `chrono`) are FORBIDDEN here
//! 3. **Exact Decimals**: Prices are `rust_decimal::Decimal`, never floats
//! 4. **Total Cart Ops**: Cart mutations never fail; operating on an id
//!    that is not in the cart is a silent no-op, not an error
//!
//! ## Example Usage
//!
//! ```rust
//! use rust_decimal::Decimal;
//! use shopfront_core::cart::Cart;
//! use shopfront_core::types::Product;
//!
//! let mut cart = Cart::new();
//! let product = Product::new(1, "Smartphone X", Decimal::new(49999, 2));
//!
//! // Adding the same product twice increments quantity, not line count
//! cart.add(&product);
//! cart.add(&product);
//!
//! assert_eq!(cart.item_count(), 1);
//! assert_eq!(cart.total_price(), Decimal::new(99998, 2));
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod cart;
pub mod catalog;
pub mod error;
pub mod session;
pub mod types;
pub mod view;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use shopfront_core::Cart` instead of
// `use shopfront_core::cart::Cart`

pub use cart::{Cart, CartItem, CartTotals};
pub use catalog::{Catalog, CatalogQuery, Category, FetchTicket, ProductPage};
pub use error::ValidationError;
pub use session::Session;
pub use types::*;
pub use view::{project_view, SortKey, Wishlist};

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Default number of products per catalog page.
///
/// ## Why a constant?
/// The remote API pages by `limit`/`skip`; the storefront has always shown
/// ten products per page and the grid layout assumes it. Overridable per
/// query via [`CatalogQuery::with_limit`].
pub const DEFAULT_PAGE_LIMIT: u32 = 10;
