//! # Catalog State Wrapper
//!
//! Shared handle to the product store. The lock is never held across a
//! network await: `load_catalog` takes a ticket under one lock, performs
//! the fetch unlocked, then re-locks to apply the generation-checked
//! result.

use std::sync::{Arc, Mutex};

use shopfront_core::Catalog;

/// Shared, mutex-guarded catalog store.
#[derive(Debug, Clone, Default)]
pub struct CatalogState {
    catalog: Arc<Mutex<Catalog>>,
}

impl CatalogState {
    pub fn new() -> Self {
        CatalogState::default()
    }

    /// Executes a function with read access to the catalog.
    pub fn with<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&Catalog) -> R,
    {
        let catalog = self.catalog.lock().expect("Catalog mutex poisoned");
        f(&catalog)
    }

    /// Executes a function with write access to the catalog.
    pub fn with_mut<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&mut Catalog) -> R,
    {
        let mut catalog = self.catalog.lock().expect("Catalog mutex poisoned");
        f(&mut catalog)
    }
}
