//! The derivation pipeline: raw list in, ordered view out.
//!
//! Contract: given (raw list, customizable flag, sort key), produce the full
//! filtered and sorted list. Deterministic, no side effects, safe to
//! recompute on every state change. Truncation to the display count is a
//! separate explicit step at the presentation boundary, never part of the
//! derivation itself.

use crate::sort::SortKey;
use crate::traits::ViewFilter;
use catalog::Product;

/// Maximum number of products shown in the grid.
pub const DISPLAY_COUNT: usize = 9;

/// Truncate a derived view to the display page.
///
/// Kept separate from [`DerivationPipeline::derive`] so the pipeline's
/// contract stays "full ordered list"; callers opt in to the page limit.
pub fn display_slice(products: &[Product]) -> &[Product] {
    &products[..products.len().min(DISPLAY_COUNT)]
}

/// Recomputes the derived view from the raw list and the view flags.
pub struct DerivationPipeline {
    customizable_policy: Box<dyn ViewFilter>,
}

impl DerivationPipeline {
    /// Pipeline with the default customizable policy
    /// ([`crate::filters::CustomizableFilter`]).
    pub fn new() -> Self {
        Self::with_policy(crate::filters::CustomizableFilter)
    }

    /// Pipeline with a custom customizable policy, mainly for tests.
    pub fn with_policy(policy: impl ViewFilter + 'static) -> Self {
        Self {
            customizable_policy: Box::new(policy),
        }
    }

    /// Derive the full ordered view.
    ///
    /// ## Algorithm
    /// 1. Copy the raw list; the input is never mutated.
    /// 2. If `customizable`, apply the customizable policy to the copy while
    ///    it is still in original feed order.
    /// 3. Apply the sort key's stable comparator.
    pub fn derive(
        &self,
        products: &[Product],
        customizable: bool,
        sort_key: SortKey,
    ) -> Vec<Product> {
        let mut view: Vec<Product> = products.to_vec();

        if customizable {
            tracing::debug!(
                "Applying filter: {} (input count: {})",
                self.customizable_policy.name(),
                view.len()
            );
            view = self.customizable_policy.apply(view);
            tracing::debug!(
                "Filter applied: {} (output count: {})",
                self.customizable_policy.name(),
                view.len()
            );
        }

        sort_key.apply(&mut view);
        view
    }
}

impl Default for DerivationPipeline {
    fn default() -> Self {
        Self::new()
    }
}
