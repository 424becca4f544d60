use super::types::{Catalog, Product};
use anyhow::{Context, Result};
use std::path::Path;

/// Loads the catalog from a JSON array of product records.
///
/// Runs once, single-threaded, before the server starts serving queries.
/// Any failure here aborts startup.
pub fn load(path: &Path) -> Result<Catalog> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read catalog file {}", path.display()))?;

    let products: Vec<Product> = serde_json::from_str(&raw)
        .with_context(|| format!("Failed to parse catalog file {}", path.display()))?;

    let catalog = Catalog::new(products);
    tracing::info!(
        "Loaded {} products ({} companies) from {}",
        catalog.len(),
        catalog.companies().len(),
        path.display()
    );

    Ok(catalog)
}
