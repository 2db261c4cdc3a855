//! # Catalog Crate
//!
//! Product domain types and the read-only product feed.
//!
//! ## Components
//!
//! - [`Product`] / [`Rating`]: immutable feed records with explicit
//!   optional fields and documented zero-defaults
//! - [`ProductSource`]: the fetch seam the rest of the system depends on
//! - [`FileFeed`] / [`FixtureFeed`]: JSON-file and in-memory sources
//!
//! ## Example Usage
//! ```ignore
//! use catalog::{FileFeed, ProductSource};
//!
//! let feed = FileFeed::new("data/products.json");
//! let products = feed.fetch_products().await?;
//! ```

pub mod error;
pub mod feed;
pub mod types;

// Re-export main types
pub use error::{CatalogError, Result};
pub use feed::{BrokenFeed, FileFeed, FixtureFeed, ProductSource, parse_feed};
pub use types::{Product, ProductId, Rating};
