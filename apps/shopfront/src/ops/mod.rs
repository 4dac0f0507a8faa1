//! # Operations Layer
//!
//! The verbs the frontend drives, one module per store.
//!
//! ## Error Discipline
//! Operations never return errors. A failed network call is captured into
//! the owning store's `error` field as a user-facing message (the server's
//! own message when one was sent, a generic fallback otherwise) and shows
//! up in the returned view. Nothing throws past a store boundary.

pub mod auth;
pub mod cart;
pub mod catalog;

pub use auth::{login, logout, SessionView};
pub use cart::{add_to_cart, clear_cart, get_cart, remove_from_cart, update_cart_item, CartView};
pub use catalog::{
    load_catalog, search_catalog, select_category, select_page, wishlist_items, CatalogView,
};
