//! # App Crate
//!
//! Orchestration for the storefront core.
//!
//! ## Components
//!
//! - [`StorefrontSession`]: wires the view state, derivation pipeline, and
//!   like persistence together; owns the fetch lifecycle
//! - [`Overlay`] / [`SearchOverlay`]: explicit state machines for the sort
//!   menu and the (stubbed) search panel
//!
//! ## Example Usage
//! ```ignore
//! use app::StorefrontSession;
//! use catalog::FileFeed;
//! use state::FileStore;
//!
//! let mut session = StorefrontSession::new(FileStore::new(".storefront"));
//! session.load_products(&FileFeed::new("data/products.json")).await;
//! for product in session.display_page() {
//!     println!("{:?}", product.title);
//! }
//! ```

pub mod overlay;
pub mod session;

// Re-export main types
pub use overlay::{Overlay, OverlayEvent, OverlayState, SearchOverlay};
pub use session::{FETCH_ERROR_MESSAGE, LoadState, StorefrontSession};
