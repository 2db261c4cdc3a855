//! The "customizable" filter.
//!
//! This is a stub policy, preserved as-is from the demo: the feed carries no
//! customizability data, so the filter keeps products at even zero-based
//! index in the original feed ordering. It has no real semantic meaning and
//! stands in for an attribute the catalog would supply in a real system.

use crate::traits::ViewFilter;
use catalog::Product;

/// Keeps products at even zero-based index in the original feed order.
///
/// Placeholder predicate, not actual customizability. Must run before any
/// reordering stage, since the index parity refers to feed positions.
pub struct CustomizableFilter;

impl ViewFilter for CustomizableFilter {
    fn name(&self) -> &str {
        "CustomizableFilter"
    }

    fn apply(&self, products: Vec<Product>) -> Vec<Product> {
        products
            .into_iter()
            .enumerate()
            .filter(|(index, _)| index % 2 == 0)
            .map(|(_, product)| product)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product(id: u64) -> Product {
        Product {
            id,
            title: None,
            price: None,
            rating: None,
            image: None,
        }
    }

    #[test]
    fn test_keeps_even_indexed_products() {
        let products = vec![product(1), product(2), product(3), product(4)];
        let kept = CustomizableFilter.apply(products);
        let ids: Vec<u64> = kept.iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![1, 3]);
    }

    #[test]
    fn test_empty_input_yields_empty_output() {
        let kept = CustomizableFilter.apply(Vec::new());
        assert!(kept.is_empty());
    }

    #[test]
    fn test_single_product_is_kept() {
        let kept = CustomizableFilter.apply(vec![product(42)]);
        assert_eq!(kept.len(), 1);
        assert_eq!(kept[0].id, 42);
    }
}
