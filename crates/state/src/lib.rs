//! # State Crate
//!
//! View state and its durable slice.
//!
//! ## Components
//!
//! - [`ViewState`]: owns the raw list, sort key, customizable flag, and
//!   like-set; the only mutation path for each
//! - [`KvStore`]: durable key-value seam with memory and file backends
//! - [`LikePersistence`]: mirrors the like-set to the store under the fixed
//!   `likedProducts` key, swallowing storage failures
//!
//! The like-set is the only state that survives a restart; everything else
//! is rebuilt from the feed on the next load.

pub mod kv;
pub mod likes;
pub mod store;

// Re-export commonly used types
pub use kv::{FileStore, KvStore, MemoryStore, StoreError};
pub use likes::{LIKED_PRODUCTS_KEY, LikePersistence};
pub use store::ViewState;
