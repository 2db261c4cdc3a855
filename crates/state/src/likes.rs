//! Persistence adapter for the like-set.
//!
//! Mirrors the like-set to the durable store under one fixed key, and seeds
//! it back at startup. Every failure here is recoverable: a missing,
//! malformed, or unreadable value loads as an empty set, and a failed write
//! leaves the in-memory set authoritative for the session. Nothing in this
//! module ever surfaces an error to the presentation layer.

use crate::kv::KvStore;
use catalog::ProductId;
use std::collections::HashSet;
use tracing::warn;

/// Fixed key the like-set is stored under.
pub const LIKED_PRODUCTS_KEY: &str = "likedProducts";

/// Mirrors the like-set to and from a [`KvStore`].
#[derive(Debug)]
pub struct LikePersistence<S: KvStore> {
    store: S,
}

impl<S: KvStore> LikePersistence<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Read the persisted like-set, falling back to empty on any failure.
    ///
    /// ## Algorithm
    /// 1. Read [`LIKED_PRODUCTS_KEY`] from the store
    /// 2. Absent key: empty set, no log (first run is normal)
    /// 3. Store failure or malformed JSON: empty set, `warn!` and continue
    pub fn load(&self) -> HashSet<ProductId> {
        let raw = match self.store.get(LIKED_PRODUCTS_KEY) {
            Ok(Some(raw)) => raw,
            Ok(None) => return HashSet::new(),
            Err(err) => {
                warn!("Failed to read liked products, starting empty: {err}");
                return HashSet::new();
            }
        };

        match serde_json::from_str::<Vec<ProductId>>(&raw) {
            Ok(ids) => ids.into_iter().collect(),
            Err(err) => {
                warn!("Stored liked products are malformed, starting empty: {err}");
                HashSet::new()
            }
        }
    }

    /// Write the like-set as a JSON array of ids in ascending order.
    ///
    /// Invoked after every like-set change. Failures are logged and
    /// swallowed; the caller's in-memory set stays authoritative.
    pub fn save(&self, liked: &HashSet<ProductId>) {
        let mut ids: Vec<ProductId> = liked.iter().copied().collect();
        ids.sort_unstable();

        let value = match serde_json::to_string(&ids) {
            Ok(value) => value,
            Err(err) => {
                warn!("Failed to serialize liked products: {err}");
                return;
            }
        };

        if let Err(err) = self.store.set(LIKED_PRODUCTS_KEY, &value) {
            warn!("Failed to persist liked products: {err}");
        }
    }

    /// Access the underlying store, mainly for tests.
    pub fn store(&self) -> &S {
        &self.store
    }
}
