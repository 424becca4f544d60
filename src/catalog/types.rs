//! Catalog Data Types
//!
//! Defines the product row structure and the immutable in-memory table built from it.

use serde::{Deserialize, Serialize};

/// A single product listing.
///
/// `company` is stored lower-cased (normalized by [`Catalog::new`]) so that
/// substring matching against the query never needs per-row case folding.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Product {
    pub title: String,
    pub company: String,
    pub price: f64,
    pub rating: f64,
}

/// The read-only product table queried by the engine.
///
/// Built once at startup and shared behind `Arc`. Holds the rows plus the distinct
/// company vocabulary in first-seen row order; that order is the documented
/// tie-break for entity matching and must stay stable.
#[derive(Debug, Clone)]
pub struct Catalog {
    products: Vec<Product>,
    companies: Vec<String>,
}

impl Catalog {
    /// Normalizes the rows (lower-cases `company`) and collects the distinct
    /// company vocabulary in the order companies first appear.
    pub fn new(mut products: Vec<Product>) -> Self {
        let mut companies: Vec<String> = Vec::new();
        for product in products.iter_mut() {
            product.company = product.company.to_lowercase();
            if !companies.contains(&product.company) {
                companies.push(product.company.clone());
            }
        }

        Self {
            products,
            companies,
        }
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// Distinct company names, lower-cased, in first-seen row order.
    pub fn companies(&self) -> &[String] {
        &self.companies
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}
