//! # Cart Operations
//!
//! Cart manipulation verbs.
//!
//! ## Cart Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Cart Lifecycle                                       │
//! │                                                                         │
//! │  ┌──────────┐     ┌──────────┐     ┌────────────┐                      │
//! │  │  Empty   │────►│ In Cart  │────►│  Checkout  │                      │
//! │  │  Cart    │     │          │     │  Summary   │                      │
//! │  └──────────┘     └──────────┘     └────────────┘                      │
//! │                        │                                                │
//! │                   add_to_cart                                           │
//! │                   update_cart_item                                      │
//! │                   remove_from_cart                                      │
//! │                        │                                                │
//! │                        ▼                                                │
//! │                   clear_cart ──────────────────────► (back to empty)   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};
use tracing::debug;

use shopfront_core::types::Product;
use shopfront_core::{Cart, CartItem, CartTotals};

use crate::state::CartState;

/// Cart view including items and totals, as the checkout summary shows it.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartView {
    pub items: Vec<CartItem>,
    pub totals: CartTotals,
}

impl From<&Cart> for CartView {
    fn from(cart: &Cart) -> Self {
        CartView {
            items: cart.items.clone(),
            totals: CartTotals::from(cart),
        }
    }
}

/// Gets the current cart contents.
pub fn get_cart(cart: &CartState) -> CartView {
    cart.with(|c| CartView::from(c))
}

/// Adds a product to the cart.
///
/// ## Behavior
/// - If product already in cart: quantity increases by one
/// - If product not in cart: added as a new line
/// - Title and price are frozen at add time (a later catalog refresh
///   does not change the line)
pub fn add_to_cart(cart: &CartState, product: &Product) -> CartView {
    debug!(product_id = product.id, "add_to_cart");

    cart.with_mut(|c| {
        c.add(product);
        CartView::from(&*c)
    })
}

/// Sets the quantity of a cart line.
///
/// ## Behavior
/// - Quantity 0: removes the line
/// - Product not in cart: silent no-op
pub fn update_cart_item(cart: &CartState, product_id: u64, quantity: u32) -> CartView {
    debug!(product_id, quantity, "update_cart_item");

    cart.with_mut(|c| {
        c.set_quantity(product_id, quantity);
        CartView::from(&*c)
    })
}

/// Removes a line from the cart. No-op when absent.
pub fn remove_from_cart(cart: &CartState, product_id: u64) -> CartView {
    debug!(product_id, "remove_from_cart");

    cart.with_mut(|c| {
        c.remove(product_id);
        CartView::from(&*c)
    })
}

/// Empties the cart.
///
/// ## When Used
/// - User abandons the cart
/// - After checkout completes (new session)
pub fn clear_cart(cart: &CartState) -> CartView {
    debug!("clear_cart");

    cart.with_mut(|c| {
        c.clear();
        CartView::from(&*c)
    })
}

// =============================================================================
// Unit Tests
// =============================================================================
