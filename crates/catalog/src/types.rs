//! Core domain types for the product catalog.
//!
//! Products arrive from the feed as-is and are never mutated locally; only
//! the displayed order/subset and the like-set change. Optional fields use
//! explicit `Option` with documented read-side defaults rather than falsy
//! coercion, so a legitimate zero is distinguishable from an absent value.

use serde::{Deserialize, Serialize};

/// Unique identifier for a product, used as a stable key.
///
/// The demo feed uses small integer ids; `NewestFirst` sorting relies on the
/// numeric ordering of ids.
pub type ProductId = u64;

/// Aggregate rating attached to a product.
///
/// `count == 0` denotes out-of-stock in the feed's conventions.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rating {
    /// Average rating value.
    #[serde(default)]
    pub rate: f64,
    /// Number of ratings received.
    #[serde(default)]
    pub count: u32,
}

/// A single product record from the feed.
///
/// Every field except `id` may be absent. Absent price means "pricing
/// hidden" (shown behind a sign-in prompt), not free.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub price: Option<f64>,
    #[serde(default)]
    pub rating: Option<Rating>,
    /// Image URL, if the feed supplies one.
    #[serde(default)]
    pub image: Option<String>,
}

impl Product {
    /// Price with the documented default of 0 when pricing is hidden.
    ///
    /// Sort comparators use this; presentation must check `price.is_none()`
    /// itself to show the sign-in hint instead of "$0.00".
    pub fn price_or_zero(&self) -> f64 {
        self.price.unwrap_or(0.0)
    }

    /// Rating rate with the documented default of 0 when unrated.
    pub fn rating_rate(&self) -> f64 {
        self.rating.map(|r| r.rate).unwrap_or(0.0)
    }

    /// Number of ratings, 0 when unrated.
    pub fn rating_count(&self) -> u32 {
        self.rating.map(|r| r.count).unwrap_or(0)
    }

    /// A rating with `count == 0` marks the product as out of stock.
    ///
    /// A product with no rating structure at all is not considered out of
    /// stock, only unrated.
    pub fn is_out_of_stock(&self) -> bool {
        matches!(self.rating, Some(r) if r.count == 0)
    }
}
