//! # Derived Catalog Projection
//!
//! Pure derived-view logic for the product grid: filter by search term,
//! then order by a sort key.
//!
//! The projection owns nothing. It reads the catalog's items plus
//! ephemeral UI state (search term, sort key, wishlist), produces a fresh
//! sequence, and is discarded on every recomputation. Ephemeral view
//! state never lands in a store.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::types::Product;

/// Ordering applied to the visible product list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "kebab-case")]
pub enum SortKey {
    /// Keep the API's ordering.
    #[default]
    Default,
    /// Price ascending.
    PriceLow,
    /// Price descending.
    PriceHigh,
    /// Rating descending; products without a rating sort as zero.
    Rating,
    /// Title ascending, lexicographic.
    Name,
}

/// Computes the visible product list.
///
/// 1. Filter: keep products whose title contains `search_term`
///    case-insensitively. An empty term keeps everything.
/// 2. Sort: stable ordering by `sort`. Ties keep their prior relative
///    order, so equal-priced products never flicker between renders.
///
/// The input is never mutated; the result is an owned, transient
/// projection.
pub fn project_view(items: &[Product], search_term: &str, sort: SortKey) -> Vec<Product> {
    let needle = search_term.trim().to_lowercase();

    let mut visible: Vec<Product> = items
        .iter()
        .filter(|p| needle.is_empty() || p.title.to_lowercase().contains(&needle))
        .cloned()
        .collect();

    // Vec::sort_by is stable, which the tie-order guarantee relies on
    match sort {
        SortKey::Default => {}
        SortKey::PriceLow => visible.sort_by(|a, b| a.price.cmp(&b.price)),
        SortKey::PriceHigh => visible.sort_by(|a, b| b.price.cmp(&a.price)),
        SortKey::Rating => visible.sort_by(|a, b| b.rating_or_zero().cmp(&a.rating_or_zero())),
        SortKey::Name => visible.sort_by(|a, b| a.title.cmp(&b.title)),
    }

    visible
}

// =============================================================================
// Wishlist (ephemeral)
// =============================================================================

/// Product ids the user has hearted in the grid.
///
/// Caller-owned ephemeral view state, like the search term: it is
/// reconstructible, never persisted, and never lands in a store.
/// Insertion order is kept so the wishlist renders deterministically.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Wishlist {
    ids: Vec<u64>,
}

impl Wishlist {
    pub fn new() -> Self {
        Wishlist::default()
    }

    /// Hearts or un-hearts a product. Returns whether the product is on
    /// the wishlist after the toggle.
    pub fn toggle(&mut self, product_id: u64) -> bool {
        if let Some(pos) = self.ids.iter().position(|&id| id == product_id) {
            self.ids.remove(pos);
            false
        } else {
            self.ids.push(product_id);
            true
        }
    }

    pub fn contains(&self, product_id: u64) -> bool {
        self.ids.contains(&product_id)
    }

    pub fn ids(&self) -> &[u64] {
        &self.ids
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;

    fn product(id: u64, title: &str, price: i64, rating: Option<&str>) -> Product {
        let mut p = Product::new(id, title, Decimal::from(price));
        p.rating = rating.map(|r| r.parse().unwrap());
        p
    }

    fn fixture() -> Vec<Product> {
        vec![
            product(1, "Smartphone X", 499, Some("4.5")),
            product(2, "Laptop Pro", 1299, Some("4.8")),
            product(3, "Earphones", 49, None),
            product(4, "Phone Case", 15, Some("3.9")),
        ]
    }

    #[test]
    fn test_empty_search_keeps_all() {
        let items = fixture();
        let view = project_view(&items, "", SortKey::Default);
        assert_eq!(view.len(), items.len());
    }

    #[test]
    fn test_filter_is_case_insensitive() {
        let items = fixture();
        let view = project_view(&items, "phone", SortKey::Default);

        // "phone" matches "Smartphone X", "Earphones" and "Phone Case"
        let titles: Vec<&str> = view.iter().map(|p| p.title.as_str()).collect();
        assert_eq!(titles, vec!["Smartphone X", "Earphones", "Phone Case"]);

        let view = project_view(&items, "LAPTOP", SortKey::Default);
        assert_eq!(view.len(), 1);
        assert_eq!(view[0].id, 2);
    }

    #[test]
    fn test_price_low_is_non_decreasing() {
        let items = fixture();
        let view = project_view(&items, "", SortKey::PriceLow);
        for pair in view.windows(2) {
            assert!(pair[0].price <= pair[1].price);
        }
        assert_eq!(view[0].id, 4);
    }

    #[test]
    fn test_price_high_is_non_increasing() {
        let items = fixture();
        let view = project_view(&items, "", SortKey::PriceHigh);
        for pair in view.windows(2) {
            assert!(pair[0].price >= pair[1].price);
        }
        assert_eq!(view[0].id, 2);
    }

    #[test]
    fn test_name_is_lexicographic() {
        let items = fixture();
        let view = project_view(&items, "", SortKey::Name);
        let titles: Vec<&str> = view.iter().map(|p| p.title.as_str()).collect();
        assert_eq!(
            titles,
            vec!["Earphones", "Laptop Pro", "Phone Case", "Smartphone X"]
        );
    }

    #[test]
    fn test_rating_descending_with_absent_as_zero() {
        let items = fixture();
        let view = project_view(&items, "", SortKey::Rating);
        let ids: Vec<u64> = view.iter().map(|p| p.id).collect();
        // 4.8, 4.5, 3.9, then the unrated one
        assert_eq!(ids, vec![2, 1, 4, 3]);
    }

    #[test]
    fn test_numeric_ties_keep_prior_order() {
        let items = vec![
            product(1, "B same price", 100, None),
            product(2, "A same price", 100, None),
            product(3, "C cheaper", 50, None),
        ];

        let view = project_view(&items, "", SortKey::PriceLow);
        let ids: Vec<u64> = view.iter().map(|p| p.id).collect();
        // The two 100s stay in input order behind the 50
        assert_eq!(ids, vec![3, 1, 2]);
    }

    #[test]
    fn test_wishlist_toggle_adds_then_removes() {
        let mut wishlist = Wishlist::new();
        assert!(wishlist.is_empty());

        assert!(wishlist.toggle(1));
        assert!(wishlist.toggle(3));
        assert!(wishlist.contains(1));
        assert_eq!(wishlist.ids(), &[1, 3]);

        // Toggling again un-hearts without touching the rest
        assert!(!wishlist.toggle(1));
        assert!(!wishlist.contains(1));
        assert_eq!(wishlist.ids(), &[3]);
    }

    #[test]
    fn test_input_is_not_mutated() {
        let items = fixture();
        let before: Vec<u64> = items.iter().map(|p| p.id).collect();

        let _ = project_view(&items, "phone", SortKey::PriceHigh);

        let after: Vec<u64> = items.iter().map(|p| p.id).collect();
        assert_eq!(before, after);
    }
}
