//! Derivation pipeline for the product grid.
//!
//! This crate provides:
//! - SortKey enum and its stable comparators
//! - ViewFilter trait and the stubbed CustomizableFilter
//! - DerivationPipeline for recomputing the derived view
//! - Display truncation as a separate, explicit step
//!
//! ## Architecture
//! The derived view is a pure function of (raw list, customizable flag,
//! sort key):
//! 1. Filter keeps a subset while the list is still in feed order
//! 2. A stable sort orders the survivors
//! 3. The presentation boundary truncates to the display page
//!
//! ## Example Usage
//! ```ignore
//! use pipeline::{DerivationPipeline, SortKey, display_slice};
//!
//! let pipeline = DerivationPipeline::new();
//! let view = pipeline.derive(&products, false, SortKey::PriceLowHigh);
//! let page = display_slice(&view);
//! ```

pub mod derive;
pub mod filters;
pub mod sort;
pub mod traits;

// Re-export main types
pub use derive::{DISPLAY_COUNT, DerivationPipeline, display_slice};
pub use sort::SortKey;
pub use traits::ViewFilter;
