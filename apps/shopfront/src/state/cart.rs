//! # Cart State Wrapper
//!
//! Shared handle to the cart store.
//!
//! ## Thread Safety
//! The cart is wrapped in `Arc<Mutex<T>>` because:
//! 1. Multiple operations may access/modify the cart
//! 2. Only one operation should modify the cart at a time
//! 3. Operations can run concurrently with catalog fetches
//!
//! ## Why Not RwLock?
//! Cart operations are quick and most of them modify state. A RwLock
//! would add complexity with minimal benefit.

use std::sync::{Arc, Mutex};

use shopfront_core::Cart;

/// Shared, mutex-guarded cart store.
#[derive(Debug, Clone, Default)]
pub struct CartState {
    cart: Arc<Mutex<Cart>>,
}

impl CartState {
    pub fn new() -> Self {
        CartState::default()
    }

    /// Executes a function with read access to the cart.
    ///
    /// ## Usage
    /// ```rust,ignore
    /// let totals = cart_state.with(|cart| CartTotals::from(cart));
    /// ```
    pub fn with<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&Cart) -> R,
    {
        let cart = self.cart.lock().expect("Cart mutex poisoned");
        f(&cart)
    }

    /// Executes a function with write access to the cart.
    ///
    /// ## Usage
    /// ```rust,ignore
    /// cart_state.with_mut(|cart| cart.add(&product));
    /// ```
    pub fn with_mut<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&mut Cart) -> R,
    {
        let mut cart = self.cart.lock().expect("Cart mutex poisoned");
        f(&mut cart)
    }
}
