//! # State Module
//!
//! One wrapper per store slice, owned together by [`AppState`].
//!
//! ## Why Multiple State Types?
//! Instead of a single mutex over everything, each store gets its own
//! wrapper. This approach:
//!
//! 1. **Matches the ownership model**: each store exclusively owns its
//!    slice; there is no shared transactional boundary across stores
//! 2. **Reduced Contention**: a pending catalog fetch never blocks a cart
//!    mutation
//! 3. **Clearer Operation Signatures**: operations declare exactly which
//!    slices they touch
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    State Architecture                                   │
//! │                                                                         │
//! │  AppState { cart, catalog, session }        (composition root)          │
//! │          │                                                              │
//! │          ├──────────────────┬──────────────────┐                        │
//! │          ▼                  ▼                  ▼                        │
//! │  ┌──────────────┐  ┌──────────────┐  ┌──────────────────┐              │
//! │  │  CartState   │  │ CatalogState │  │  SessionState    │              │
//! │  │              │  │              │  │                  │              │
//! │  │  Arc<Mutex<  │  │  Arc<Mutex<  │  │  Arc<Mutex<      │              │
//! │  │    Cart>>    │  │   Catalog>>  │  │    Session>>     │              │
//! │  └──────────────┘  └──────────────┘  └──────────────────┘              │
//! │                                                                         │
//! │  THREAD SAFETY: every wrapper locks exclusively for the duration of     │
//! │  one closure. Locks are NEVER held across an await - fetch results      │
//! │  re-acquire the lock and pass a generation ticket instead.              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

mod cart;
mod catalog;
mod session;

pub use cart::CartState;
pub use catalog::CatalogState;
pub use session::SessionState;

/// The whole application state, built once by the composition root.
///
/// No global singleton: whoever needs a slice gets a clone of its wrapper
/// (cheap `Arc` clone) or a borrow of this struct.
#[derive(Debug, Clone, Default)]
pub struct AppState {
    pub cart: CartState,
    pub catalog: CatalogState,
    pub session: SessionState,
}

impl AppState {
    pub fn new() -> Self {
        AppState::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_state_starts_empty() {
        let app = AppState::new();
        assert!(app.cart.with(|c| c.is_empty()));
        assert!(app.catalog.with(|c| c.items().is_empty()));
        assert!(app.session.with(|s| !s.is_authenticated()));
    }

    #[test]
    fn test_slices_are_independent() {
        let app = AppState::new();
        let cart = app.cart.clone();

        // A clone shares the same underlying slice
        cart.with_mut(|c| {
            c.add(&shopfront_core::Product::new(
                1,
                "A",
                rust_decimal::Decimal::ONE,
            ))
        });
        assert_eq!(app.cart.with(|c| c.item_count()), 1);

        // Other slices are untouched
        assert!(app.catalog.with(|c| !c.is_loading()));
    }
}
