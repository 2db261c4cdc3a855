//! Core trait for the derivation pipeline's filter stage.

use catalog::Product;

/// A filter over the raw product list.
///
/// Filters take ownership of the `Vec<Product>` and return the kept subset,
/// preserving relative order. They must be pure: no side effects, identical
/// output for identical input, so the derived view stays a deterministic
/// function of the view state.
///
/// `Send + Sync` allows filters to be boxed behind a shared pipeline.
pub trait ViewFilter: Send + Sync {
    /// Name of this filter, for logging.
    fn name(&self) -> &str;

    /// Apply this filter to the product list in its original feed order.
    fn apply(&self, products: Vec<Product>) -> Vec<Product>;
}
