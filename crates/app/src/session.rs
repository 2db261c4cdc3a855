//! # Storefront Session
//!
//! The session coordinates the whole storefront core:
//! 1. Seed the like-set from the durable store
//! 2. Fetch the product feed (the only suspending operation)
//! 3. Recompute the derived view synchronously after every mutation
//! 4. Mirror like-set changes back to the store as a dependent effect
//!
//! Every state transition runs to completion before the next event is
//! processed; no component outside the session mutates view state.

use std::time::Instant;

use catalog::{Product, ProductId, ProductSource};
use pipeline::{DerivationPipeline, SortKey, display_slice};
use state::{KvStore, LikePersistence, ViewState};
use tracing::{info, warn};

use crate::overlay::{Overlay, OverlayEvent, SearchOverlay};

/// Message shown in place of the grid when the fetch fails.
pub const FETCH_ERROR_MESSAGE: &str = "Failed to load products. Please try again later.";

/// Lifecycle of the initial product fetch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadState {
    /// Fetch not finished yet; show a loading indication.
    Loading,
    /// Products installed; grid is consistent.
    Ready,
    /// Fetch failed; the message is user-visible. Terminal for the
    /// session — there is no retry.
    Failed(String),
}

/// Owns the view state and drives the derivation pipeline.
pub struct StorefrontSession<K: KvStore> {
    state: ViewState,
    pipeline: DerivationPipeline,
    likes: LikePersistence<K>,
    load_state: LoadState,
    derived: Vec<Product>,
    sort_menu: Overlay,
    search: SearchOverlay,
}

impl<K: KvStore> StorefrontSession<K> {
    /// Create a session, seeding the like-set from `store`.
    ///
    /// A missing or unreadable stored value seeds an empty set; the session
    /// always constructs.
    pub fn new(store: K) -> Self {
        let likes = LikePersistence::new(store);
        let state = ViewState::with_likes(likes.load());
        info!("Session started with {} liked products", state.like_count());

        Self {
            state,
            pipeline: DerivationPipeline::new(),
            likes,
            load_state: LoadState::Loading,
            derived: Vec::new(),
            sort_menu: Overlay::new(),
            search: SearchOverlay::new(),
        }
    }

    /// Fetch the product feed and install the result.
    ///
    /// Success installs the list and clears any error; failure installs an
    /// empty list and a user-visible message. Both outcomes recompute the
    /// derived view before returning, so no stale view is observable.
    pub async fn load_products(&mut self, source: &impl ProductSource) {
        let start = Instant::now();
        self.load_state = LoadState::Loading;

        match source.fetch_products().await {
            Ok(products) => {
                info!(
                    "Loaded {} products in {:.2?}",
                    products.len(),
                    start.elapsed()
                );
                self.state.set_products(products);
                self.load_state = LoadState::Ready;
            }
            Err(err) => {
                warn!("Product fetch failed: {err}");
                self.state.set_products(Vec::new());
                self.load_state = LoadState::Failed(FETCH_ERROR_MESSAGE.to_string());
            }
        }

        self.recompute();
    }

    /// Select a sort key directly (e.g., from a query parameter).
    pub fn select_sort(&mut self, sort_key: SortKey) {
        self.state.set_sort_key(sort_key);
        self.recompute();
    }

    /// Select a sort key from the sort menu, closing it.
    pub fn choose_sort_from_menu(&mut self, sort_key: SortKey) {
        self.select_sort(sort_key);
        self.sort_menu.handle(OverlayEvent::ItemSelected);
    }

    pub fn set_customizable(&mut self, customizable: bool) {
        self.state.set_customizable(customizable);
        self.recompute();
    }

    /// Toggle a like, persist the new set, and return the new membership.
    ///
    /// Persistence is a dependent effect: storage failures are swallowed by
    /// the adapter and the in-memory set stays authoritative.
    pub fn toggle_like(&mut self, product_id: ProductId) -> bool {
        let now_liked = self.state.toggle_like(product_id);
        self.likes.save(self.state.liked());
        self.recompute();
        now_liked
    }

    /// Recompute the derived view from current state.
    ///
    /// Called after every mutation, before control returns to the caller.
    fn recompute(&mut self) {
        self.derived = self.pipeline.derive(
            self.state.products(),
            self.state.customizable(),
            self.state.sort_key(),
        );
    }

    /// Full derived view (filtered and sorted, untruncated).
    pub fn derived_view(&self) -> &[Product] {
        &self.derived
    }

    /// The derived view truncated to the display count.
    pub fn display_page(&self) -> &[Product] {
        display_slice(&self.derived)
    }

    /// Item count shown in the filter sidebar (full view, not the page).
    pub fn item_count(&self) -> usize {
        self.derived.len()
    }

    pub fn load_state(&self) -> &LoadState {
        &self.load_state
    }

    /// User-visible error message, if the fetch failed.
    pub fn error(&self) -> Option<&str> {
        match &self.load_state {
            LoadState::Failed(message) => Some(message),
            _ => None,
        }
    }

    pub fn sort_key(&self) -> SortKey {
        self.state.sort_key()
    }

    pub fn customizable(&self) -> bool {
        self.state.customizable()
    }

    pub fn is_liked(&self, product_id: ProductId) -> bool {
        self.state.is_liked(product_id)
    }

    pub fn liked_ids(&self) -> Vec<ProductId> {
        self.state.liked_ids()
    }

    pub fn sort_menu(&mut self) -> &mut Overlay {
        &mut self.sort_menu
    }

    pub fn search(&mut self) -> &mut SearchOverlay {
        &mut self.search
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use catalog::{BrokenFeed, FixtureFeed, Rating};
    use state::{LIKED_PRODUCTS_KEY, MemoryStore};

    fn product(id: u64, price: f64) -> Product {
        Product {
            id,
            title: Some(format!("Product {id}")),
            price: Some(price),
            rating: Some(Rating {
                rate: 4.0,
                count: 10,
            }),
            image: None,
        }
    }

    fn ids(products: &[Product]) -> Vec<u64> {
        products.iter().map(|p| p.id).collect()
    }

    #[tokio::test]
    async fn test_successful_load_installs_products() {
        let feed = FixtureFeed::new(vec![product(1, 10.0), product(2, 5.0)]);
        let mut session = StorefrontSession::new(MemoryStore::new());
        assert_eq!(*session.load_state(), LoadState::Loading);

        session.load_products(&feed).await;
        assert_eq!(*session.load_state(), LoadState::Ready);
        assert_eq!(ids(session.derived_view()), vec![1, 2]);
        assert!(session.error().is_none());
    }

    #[tokio::test]
    async fn test_failed_load_leaves_empty_view_and_error() {
        let feed = BrokenFeed::new("timeout");
        let mut session = StorefrontSession::new(MemoryStore::new());

        session.load_products(&feed).await;
        assert!(session.derived_view().is_empty());
        assert_eq!(session.item_count(), 0);
        assert_eq!(session.error(), Some(FETCH_ERROR_MESSAGE));
    }

    #[tokio::test]
    async fn test_sort_change_recomputes_synchronously() {
        let feed = FixtureFeed::new(vec![product(1, 10.0), product(2, 5.0), product(3, 20.0)]);
        let mut session = StorefrontSession::new(MemoryStore::new());
        session.load_products(&feed).await;

        session.select_sort(SortKey::PriceLowHigh);
        assert_eq!(ids(session.derived_view()), vec![2, 1, 3]);

        session.select_sort(SortKey::PriceHighLow);
        assert_eq!(ids(session.derived_view()), vec![3, 1, 2]);
    }

    #[tokio::test]
    async fn test_customizable_flag_filters_view() {
        let feed = FixtureFeed::new(vec![
            product(1, 1.0),
            product(2, 2.0),
            product(3, 3.0),
            product(4, 4.0),
        ]);
        let mut session = StorefrontSession::new(MemoryStore::new());
        session.load_products(&feed).await;

        session.set_customizable(true);
        assert_eq!(ids(session.derived_view()), vec![1, 3]);
        assert_eq!(session.item_count(), 2);

        session.set_customizable(false);
        assert_eq!(session.item_count(), 4);
    }

    #[tokio::test]
    async fn test_toggle_like_persists_each_change() {
        let mut session = StorefrontSession::new(MemoryStore::new());

        assert!(session.toggle_like(7));
        assert_eq!(
            session_store_value(&session),
            Some("[7]".to_string())
        );

        assert!(!session.toggle_like(7));
        assert_eq!(session_store_value(&session), Some("[]".to_string()));
    }

    #[tokio::test]
    async fn test_likes_survive_a_restart() {
        let store = MemoryStore::new();
        {
            let mut session = StorefrontSession::new(&store);
            session.toggle_like(3);
            session.toggle_like(11);
        }

        let session = StorefrontSession::new(&store);
        assert!(session.is_liked(3));
        assert!(session.is_liked(11));
        assert_eq!(session.liked_ids(), vec![3, 11]);
    }

    #[tokio::test]
    async fn test_choose_sort_from_menu_closes_menu() {
        let feed = FixtureFeed::new(vec![product(1, 1.0)]);
        let mut session = StorefrontSession::new(MemoryStore::new());
        session.load_products(&feed).await;

        session.sort_menu().handle(OverlayEvent::OpenRequest);
        session.choose_sort_from_menu(SortKey::Popular);
        assert!(!session.sort_menu().is_open());
        assert_eq!(session.sort_key(), SortKey::Popular);
    }

    fn session_store_value<K: KvStore>(session: &StorefrontSession<K>) -> Option<String> {
        session
            .likes
            .store()
            .get(LIKED_PRODUCTS_KEY)
            .expect("memory store never fails")
    }
}
