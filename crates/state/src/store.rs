//! The view-state store: single source of truth for the derived view.
//!
//! Four independent pieces of state live here: the raw product list, the
//! active sort key, the customizable flag, and the like-set. All mutation
//! goes through the operations below; no other component touches the fields
//! directly. The store itself has no side effects — persistence of the
//! like-set is the adapter's concern, and recomputing the derived view is
//! the session's.

use catalog::{Product, ProductId};
use pipeline::SortKey;
use std::collections::HashSet;

/// Owns the raw list, sort key, customizable flag, and like-set.
///
/// A plain value passed explicitly to its collaborators; there is no
/// ambient singleton.
#[derive(Debug, Default)]
pub struct ViewState {
    products: Vec<Product>,
    sort_key: SortKey,
    customizable: bool,
    liked: HashSet<ProductId>,
}

impl ViewState {
    pub fn new() -> Self {
        Self::default()
    }

    /// State seeded with a previously persisted like-set.
    pub fn with_likes(liked: HashSet<ProductId>) -> Self {
        Self {
            liked,
            ..Self::default()
        }
    }

    /// Replace the raw product list wholesale.
    ///
    /// Called once after the initial fetch succeeds, or with an empty list
    /// when it fails.
    pub fn set_products(&mut self, products: Vec<Product>) {
        self.products = products;
    }

    /// Select the active sort key.
    ///
    /// Takes the typed enum, so an out-of-range value cannot reach this
    /// point; string inputs go through [`SortKey::parse`], which falls back
    /// to `Recommended`.
    pub fn set_sort_key(&mut self, sort_key: SortKey) {
        self.sort_key = sort_key;
    }

    pub fn set_customizable(&mut self, customizable: bool) {
        self.customizable = customizable;
    }

    /// Flip like membership for one product.
    ///
    /// Every call either adds or removes the id, never both and never
    /// neither. Returns whether the product is liked afterwards.
    pub fn toggle_like(&mut self, product_id: ProductId) -> bool {
        if self.liked.remove(&product_id) {
            false
        } else {
            self.liked.insert(product_id);
            true
        }
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn sort_key(&self) -> SortKey {
        self.sort_key
    }

    pub fn customizable(&self) -> bool {
        self.customizable
    }

    pub fn is_liked(&self, product_id: ProductId) -> bool {
        self.liked.contains(&product_id)
    }

    pub fn like_count(&self) -> usize {
        self.liked.len()
    }

    /// Liked ids in ascending order, the serialization order used by the
    /// persistence adapter.
    pub fn liked_ids(&self) -> Vec<ProductId> {
        let mut ids: Vec<ProductId> = self.liked.iter().copied().collect();
        ids.sort_unstable();
        ids
    }

    /// Borrow the like-set itself, for persistence.
    pub fn liked(&self) -> &HashSet<ProductId> {
        &self.liked
    }
}
