//! Product feed parsing and the `ProductSource` seam.
//!
//! The core treats the feed as an opaque read-only collaborator: one fetch
//! returning the full ordered product array, or a failure. Transport is the
//! implementation's concern; this module ships a JSON file feed for the CLI
//! and an in-memory fixture feed for tests and demos.

use crate::error::{CatalogError, Result};
use crate::types::Product;
use std::path::PathBuf;

/// A read-only source of product records.
///
/// The fetch is the single suspending operation in the system. There is no
/// retry policy here; a failed fetch is terminal for the session.
pub trait ProductSource {
    /// Fetch the full ordered product list.
    fn fetch_products(&self) -> impl Future<Output = Result<Vec<Product>>> + Send;
}

/// Parse a feed body: a JSON array of product records.
///
/// Optional fields may be absent or `null`. Records with a negative price
/// are rejected, since absent price already encodes "pricing hidden".
pub fn parse_feed(body: &str) -> Result<Vec<Product>> {
    let products: Vec<Product> = serde_json::from_str(body)?;

    for product in &products {
        if let Some(price) = product.price {
            if price < 0.0 {
                return Err(CatalogError::InvalidValue {
                    field: format!("price (product {})", product.id),
                    value: price.to_string(),
                });
            }
        }
    }

    Ok(products)
}

/// Product feed backed by a JSON file on disk.
#[derive(Debug, Clone)]
pub struct FileFeed {
    path: PathBuf,
}

impl FileFeed {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl ProductSource for FileFeed {
    async fn fetch_products(&self) -> Result<Vec<Product>> {
        let body = std::fs::read_to_string(&self.path).map_err(|err| {
            CatalogError::FetchFailed {
                reason: format!("{}: {}", self.path.display(), err),
            }
        })?;
        parse_feed(&body)
    }
}

/// In-memory feed that always succeeds with a fixed product list.
#[derive(Debug, Clone, Default)]
pub struct FixtureFeed {
    products: Vec<Product>,
}

impl FixtureFeed {
    pub fn new(products: Vec<Product>) -> Self {
        Self { products }
    }
}

impl ProductSource for FixtureFeed {
    async fn fetch_products(&self) -> Result<Vec<Product>> {
        Ok(self.products.clone())
    }
}

/// Feed that always fails, for exercising the failure path.
#[derive(Debug, Clone)]
pub struct BrokenFeed {
    reason: String,
}

impl BrokenFeed {
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }
}

impl ProductSource for BrokenFeed {
    async fn fetch_products(&self) -> Result<Vec<Product>> {
        Err(CatalogError::FetchFailed {
            reason: self.reason.clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_full_record() {
        let body = r#"[
            {
                "id": 1,
                "title": "Backpack",
                "price": 109.95,
                "rating": { "rate": 3.9, "count": 120 },
                "image": "https://example.com/1.jpg"
            }
        ]"#;

        let products = parse_feed(body).unwrap();
        assert_eq!(products.len(), 1);
        assert_eq!(products[0].id, 1);
        assert_eq!(products[0].title.as_deref(), Some("Backpack"));
        assert_eq!(products[0].price, Some(109.95));
        assert_eq!(products[0].rating_count(), 120);
    }

    #[test]
    fn test_parse_missing_and_null_fields() {
        let body = r#"[
            { "id": 2 },
            { "id": 3, "title": null, "price": null, "rating": null }
        ]"#;

        let products = parse_feed(body).unwrap();
        assert_eq!(products.len(), 2);
        assert!(products[0].title.is_none());
        assert!(products[1].price.is_none());
        assert!(products[1].rating.is_none());
    }

    #[test]
    fn test_parse_rejects_negative_price() {
        let body = r#"[{ "id": 4, "price": -5.0 }]"#;
        let err = parse_feed(body).unwrap_err();
        assert!(matches!(err, CatalogError::InvalidValue { .. }));
    }

    #[test]
    fn test_parse_rejects_non_array_body() {
        let err = parse_feed(r#"{ "id": 1 }"#).unwrap_err();
        assert!(matches!(err, CatalogError::ParseError(_)));
    }

    #[tokio::test]
    async fn test_fixture_feed_round_trip() {
        let feed = FixtureFeed::new(vec![Product {
            id: 7,
            title: Some("Mug".to_string()),
            price: Some(12.5),
            rating: None,
            image: None,
        }]);

        let products = feed.fetch_products().await.unwrap();
        assert_eq!(products.len(), 1);
        assert_eq!(products[0].id, 7);
    }

    #[tokio::test]
    async fn test_broken_feed_fails() {
        let feed = BrokenFeed::new("connection refused");
        let err = feed.fetch_products().await.unwrap_err();
        assert!(matches!(err, CatalogError::FetchFailed { .. }));
    }
}
