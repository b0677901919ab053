//! The product catalog.
//!
//! A fixed, ordered list of bouquets. The catalog is built once at startup and
//! only ever read afterwards.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::types::{Price, ProductId};

/// A purchasable bouquet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    /// Unit price in whole rubles.
    pub price: Price,
    /// URI of the product photo. Passed through to the page as-is.
    pub image: String,
    pub description: String,
    /// Free-form tag shown as a badge (e.g. "Премиум").
    pub category: String,
}

/// Errors from building a catalog out of a custom product list.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    #[error("product id must be positive")]
    ZeroId,
    #[error("duplicate product id {0}")]
    DuplicateId(ProductId),
    #[error("product {0} has a zero price")]
    ZeroPrice(ProductId),
}

/// Read-only list of products, in display order.
#[derive(Debug, Clone)]
pub struct Catalog {
    products: Vec<Product>,
}

const IMAGE_BASE: &str = "https://cdn.poehali.dev/projects/daf5d2dd-c34c-43c5-aa03-0b001f22993e/files";

impl Catalog {
    /// Build a catalog from an arbitrary product list.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError` if an ID is zero or repeated, or a price is zero.
    pub fn new(products: Vec<Product>) -> Result<Self, CatalogError> {
        let mut seen = HashSet::with_capacity(products.len());
        for product in &products {
            if product.id.as_u32() == 0 {
                return Err(CatalogError::ZeroId);
            }
            if !seen.insert(product.id) {
                return Err(CatalogError::DuplicateId(product.id));
            }
            if product.price.is_zero() {
                return Err(CatalogError::ZeroPrice(product.id));
            }
        }
        Ok(Self { products })
    }

    /// The shop's bouquet lineup.
    #[must_use]
    pub fn seeded() -> Self {
        let products = vec![
            Product {
                id: ProductId::new(1),
                name: "Розовая нежность".to_string(),
                price: Price::rubles(2500),
                image: format!("{IMAGE_BASE}/09313eb5-36ff-48fb-bd8a-bc39b9a0fbec.jpg"),
                description: "Элегантный букет с розами и конфетами".to_string(),
                category: "Премиум".to_string(),
            },
            Product {
                id: ProductId::new(2),
                name: "Клубничная мечта".to_string(),
                price: Price::rubles(3200),
                image: format!("{IMAGE_BASE}/8a6ba2e0-a2ce-4da2-9019-bb36d7bc59b7.jpg"),
                description: "Букет с клубникой в шоколаде и макаронс".to_string(),
                category: "Эксклюзив".to_string(),
            },
            Product {
                id: ProductId::new(3),
                name: "Радужный праздник".to_string(),
                price: Price::rubles(1800),
                image: format!("{IMAGE_BASE}/d28b8cc1-9c13-4c6f-be7f-4d6950d09167.jpg"),
                description: "Яркий букет с леденцами и зефиром".to_string(),
                category: "Классик".to_string(),
            },
        ];
        Self { products }
    }

    /// Look up a product by ID.
    #[must_use]
    pub fn get(&self, id: ProductId) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }

    /// Iterate over products in display order.
    pub fn iter(&self) -> impl Iterator<Item = &Product> {
        self.products.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.products.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn product(id: u32, price: u64) -> Product {
        Product {
            id: ProductId::new(id),
            name: format!("Bouquet {id}"),
            price: Price::rubles(price),
            image: String::new(),
            description: String::new(),
            category: String::new(),
        }
    }

    #[test]
    fn test_seeded_catalog() {
        let catalog = Catalog::seeded();
        assert_eq!(catalog.len(), 3);

        let first = catalog.get(ProductId::new(1)).unwrap();
        assert_eq!(first.name, "Розовая нежность");
        assert_eq!(first.price, Price::rubles(2500));
        assert!(first.image.starts_with("https://"));

        assert_eq!(
            catalog.get(ProductId::new(2)).unwrap().price,
            Price::rubles(3200)
        );
        assert_eq!(
            catalog.get(ProductId::new(3)).unwrap().category,
            "Классик"
        );
    }

    #[test]
    fn test_seeded_catalog_passes_validation() {
        let products: Vec<Product> = Catalog::seeded().iter().cloned().collect();
        assert!(Catalog::new(products).is_ok());
    }

    #[test]
    fn test_get_unknown_id() {
        assert!(Catalog::seeded().get(ProductId::new(99)).is_none());
    }

    #[test]
    fn test_iter_preserves_order() {
        let catalog = Catalog::new(vec![product(5, 10), product(2, 20), product(9, 30)]).unwrap();
        let ids: Vec<u32> = catalog.iter().map(|p| p.id.as_u32()).collect();
        assert_eq!(ids, vec![5, 2, 9]);
    }

    #[test]
    fn test_new_rejects_duplicate_id() {
        let err = Catalog::new(vec![product(1, 10), product(1, 20)]).unwrap_err();
        assert_eq!(err, CatalogError::DuplicateId(ProductId::new(1)));
    }

    #[test]
    fn test_new_rejects_zero_id() {
        let err = Catalog::new(vec![product(0, 10)]).unwrap_err();
        assert_eq!(err, CatalogError::ZeroId);
    }

    #[test]
    fn test_new_rejects_zero_price() {
        let err = Catalog::new(vec![product(4, 0)]).unwrap_err();
        assert_eq!(err, CatalogError::ZeroPrice(ProductId::new(4)));
    }

    #[test]
    fn test_empty_catalog() {
        let catalog = Catalog::new(Vec::new()).unwrap();
        assert!(catalog.is_empty());
    }
}
