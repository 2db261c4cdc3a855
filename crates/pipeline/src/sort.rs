//! Sort keys and their comparators.
//!
//! Exactly one sort key is active at a time. Sorting is always stable so
//! that tied values keep their relative feed order, which keeps the derived
//! view deterministic and testable.

use catalog::Product;

/// The enumerated ordering modes for the product grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SortKey {
    /// Identity order: products stay in feed order.
    #[default]
    Recommended,
    /// Descending by product id.
    NewestFirst,
    /// Descending by rating rate; missing rating compares as 0.
    Popular,
    /// Descending by price; missing price compares as 0.
    PriceHighLow,
    /// Ascending by price; missing price compares as 0.
    PriceLowHigh,
}

impl SortKey {
    /// All keys, in menu order.
    pub const ALL: [SortKey; 5] = [
        SortKey::Recommended,
        SortKey::NewestFirst,
        SortKey::Popular,
        SortKey::PriceHighLow,
        SortKey::PriceLowHigh,
    ];

    /// Parse a wire value into a sort key.
    ///
    /// Total by design: anything outside the five known values falls back
    /// to `Recommended` rather than erroring.
    pub fn parse(value: &str) -> SortKey {
        match value {
            "recommended" => SortKey::Recommended,
            "newest" => SortKey::NewestFirst,
            "popular" => SortKey::Popular,
            "price-high" => SortKey::PriceHighLow,
            "price-low" => SortKey::PriceLowHigh,
            other => {
                tracing::debug!("Unrecognized sort key {:?}, using recommended", other);
                SortKey::Recommended
            }
        }
    }

    /// Wire value, inverse of [`SortKey::parse`] for known keys.
    pub fn as_str(&self) -> &'static str {
        match self {
            SortKey::Recommended => "recommended",
            SortKey::NewestFirst => "newest",
            SortKey::Popular => "popular",
            SortKey::PriceHighLow => "price-high",
            SortKey::PriceLowHigh => "price-low",
        }
    }

    /// Label shown in the sort menu.
    pub fn label(&self) -> &'static str {
        match self {
            SortKey::Recommended => "RECOMMENDED",
            SortKey::NewestFirst => "NEWEST FIRST",
            SortKey::Popular => "POPULAR",
            SortKey::PriceHighLow => "PRICE : HIGH TO LOW",
            SortKey::PriceLowHigh => "PRICE : LOW TO HIGH",
        }
    }

    /// Reorder `products` in place according to this key.
    ///
    /// Uses `Vec::sort_by`, which is stable: ties retain input order.
    /// `Recommended` is a no-op.
    pub fn apply(&self, products: &mut Vec<Product>) {
        match self {
            SortKey::Recommended => {}
            SortKey::NewestFirst => {
                products.sort_by(|a, b| b.id.cmp(&a.id));
            }
            SortKey::Popular => {
                products.sort_by(|a, b| b.rating_rate().total_cmp(&a.rating_rate()));
            }
            SortKey::PriceHighLow => {
                products.sort_by(|a, b| b.price_or_zero().total_cmp(&a.price_or_zero()));
            }
            SortKey::PriceLowHigh => {
                products.sort_by(|a, b| a.price_or_zero().total_cmp(&b.price_or_zero()));
            }
        }
    }
}
