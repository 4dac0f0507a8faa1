//! # Cart Store
//!
//! The client-side shopping cart: an insertion-ordered list of line items
//! with a derived total.
//!
//! ## Cart Operations Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Cart Store Operations                                │
//! │                                                                         │
//! │  Frontend Action          Operation               State Change          │
//! │  ───────────────          ─────────               ────────────          │
//! │                                                                         │
//! │  Click "Add to Cart" ────► add(product) ────────► append or qty += 1   │
//! │                                                                         │
//! │  Change Quantity ────────► set_quantity(id, n) ──► qty = n (0 removes) │
//! │                                                                         │
//! │  Click Remove ───────────► remove(id) ──────────► retain(≠ id)         │
//! │                                                                         │
//! │  Empty After Checkout ───► clear() ─────────────► items.clear()        │
//! │                                                                         │
//! │  NOTE: Every mutation is total. Operating on an id that is not in      │
//! │        the cart is a silent no-op, never an error.                     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::types::Product;

/// An item in the shopping cart.
///
/// ## Design Notes
/// - `product_id`: Reference to the catalog product
/// - `title` / `unit_price`: Frozen copies of product data at add time.
///   The cart displays consistent data even if the catalog page the
///   product came from is replaced by a later fetch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct CartItem {
    /// Catalog product id.
    pub product_id: u64,

    /// Product title at time of adding (frozen).
    pub title: String,

    /// Price at time of adding (frozen).
    #[ts(as = "String")]
    pub unit_price: Decimal,

    /// Quantity in cart. Always >= 1; a quantity of 0 removes the item.
    pub quantity: u32,

    /// When this item was first added to the cart.
    #[ts(as = "String")]
    pub added_at: DateTime<Utc>,
}

impl CartItem {
    /// Creates a cart line from a product with quantity 1.
    pub fn from_product(product: &Product) -> Self {
        CartItem {
            product_id: product.id,
            title: product.title.clone(),
            unit_price: product.price,
            quantity: 1,
            added_at: Utc::now(),
        }
    }

    /// Line total (unit price × quantity).
    pub fn line_total(&self) -> Decimal {
        self.unit_price * Decimal::from(self.quantity)
    }
}

/// The shopping cart.
///
/// ## Invariants
/// - Items are unique by `product_id` (adding the same product increments
///   quantity, never duplicates the line)
/// - No retained item has quantity 0
/// - `total_price()` always equals the sum of line totals over current
///   items; it is computed from the items on every call, so the invariant
///   holds by construction
/// - Insertion order is preserved
#[derive(Debug, Clone, Default, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Cart {
    /// Items in the cart, in insertion order.
    pub items: Vec<CartItem>,
}

impl Cart {
    /// Creates a new empty cart.
    pub fn new() -> Self {
        Cart { items: Vec::new() }
    }

    /// Adds a product to the cart, or increments its quantity by one if it
    /// is already present.
    pub fn add(&mut self, product: &Product) {
        if let Some(item) = self.items.iter_mut().find(|i| i.product_id == product.id) {
            item.quantity += 1;
            return;
        }

        self.items.push(CartItem::from_product(product));
    }

    /// Removes the item with the given product id. No-op when absent.
    pub fn remove(&mut self, product_id: u64) {
        self.items.retain(|i| i.product_id != product_id);
    }

    /// Sets the quantity of an item.
    ///
    /// ## Behavior
    /// - Quantity 0: removes the item
    /// - Product not in cart: silent no-op
    pub fn set_quantity(&mut self, product_id: u64, quantity: u32) {
        if quantity == 0 {
            self.remove(product_id);
            return;
        }

        if let Some(item) = self.items.iter_mut().find(|i| i.product_id == product_id) {
            item.quantity = quantity;
        }
    }

    /// Removes all items.
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Number of distinct lines in the cart.
    pub fn item_count(&self) -> usize {
        self.items.len()
    }

    /// Total quantity across all lines.
    pub fn total_quantity(&self) -> u64 {
        self.items.iter().map(|i| u64::from(i.quantity)).sum()
    }

    /// Derived total: sum of unit price × quantity over current items.
    pub fn total_price(&self) -> Decimal {
        self.items.iter().map(CartItem::line_total).sum()
    }

    /// Checks if the cart is empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Cart totals summary for the checkout view.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct CartTotals {
    pub item_count: usize,
    pub total_quantity: u64,
    #[ts(as = "String")]
    pub total_price: Decimal,
}

impl From<&Cart> for CartTotals {
    fn from(cart: &Cart) -> Self {
        CartTotals {
            item_count: cart.item_count(),
            total_quantity: cart.total_quantity(),
            total_price: cart.total_price(),
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn product(id: u64, title: &str, price: i64) -> Product {
        // price given in whole units
        Product::new(id, title, Decimal::from(price))
    }

    #[test]
    fn test_add_new_product_appends_line() {
        let mut cart = Cart::new();
        cart.add(&product(1, "A", 10));

        assert_eq!(cart.item_count(), 1);
        assert_eq!(cart.items[0].quantity, 1);
        assert_eq!(cart.items[0].title, "A");
    }

    #[test]
    fn test_add_same_product_twice_increments_quantity() {
        let mut cart = Cart::new();
        let p = product(1, "A", 10);
        cart.add(&p);
        cart.add(&p);

        // One line with quantity 2, not two lines
        assert_eq!(cart.item_count(), 1);
        assert_eq!(cart.items[0].quantity, 2);
    }

    #[test]
    fn test_total_price_checkout_scenario() {
        // items = [{id:1, price:10, qty:1}, {id:2, price:5, qty:2}] → 20
        let mut cart = Cart::new();
        cart.add(&product(1, "A", 10));
        let b = product(2, "B", 5);
        cart.add(&b);
        cart.add(&b);

        assert_eq!(cart.total_price(), Decimal::from(20));
        assert_eq!(cart.total_quantity(), 3);
    }

    #[test]
    fn test_total_equals_sum_over_items_after_any_sequence() {
        let mut cart = Cart::new();
        let a = product(1, "A", 7);
        let b = product(2, "B", 3);

        cart.add(&a);
        cart.add(&b);
        cart.add(&a);
        cart.set_quantity(2, 5);
        cart.remove(1);
        cart.add(&a);

        let expected: Decimal = cart.items.iter().map(CartItem::line_total).sum();
        assert_eq!(cart.total_price(), expected);
    }

    #[test]
    fn test_set_quantity_zero_removes_item() {
        let mut cart = Cart::new();
        cart.add(&product(1, "A", 10));
        cart.set_quantity(1, 0);

        assert!(cart.is_empty());
        assert_eq!(cart.total_price(), Decimal::ZERO);
    }

    #[test]
    fn test_operations_on_missing_id_are_no_ops() {
        let mut cart = Cart::new();
        cart.add(&product(1, "A", 10));

        cart.remove(99);
        cart.set_quantity(99, 4);

        assert_eq!(cart.item_count(), 1);
        assert_eq!(cart.items[0].quantity, 1);
    }

    #[test]
    fn test_insertion_order_preserved() {
        let mut cart = Cart::new();
        cart.add(&product(3, "C", 1));
        cart.add(&product(1, "A", 1));
        cart.add(&product(2, "B", 1));

        let ids: Vec<u64> = cart.items.iter().map(|i| i.product_id).collect();
        assert_eq!(ids, vec![3, 1, 2]);
    }

    #[test]
    fn test_price_frozen_at_add_time() {
        let mut cart = Cart::new();
        let mut p = product(1, "A", 10);
        cart.add(&p);

        // Catalog refresh changes the price; the cart line keeps the old one
        p.price = Decimal::from(12);
        assert_eq!(cart.items[0].unit_price, Decimal::from(10));
    }

    #[test]
    fn test_clear_and_totals_summary() {
        let mut cart = Cart::new();
        cart.add(&product(1, "A", 10));
        cart.add(&product(2, "B", 5));

        let totals = CartTotals::from(&cart);
        assert_eq!(totals.item_count, 2);
        assert_eq!(totals.total_price, Decimal::from(15));

        cart.clear();
        assert!(cart.is_empty());
        assert_eq!(CartTotals::from(&cart).total_price, Decimal::ZERO);
    }
}
