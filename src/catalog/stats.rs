//! Dashboard Statistics
//!
//! Aggregate views over the catalog backing the dashboard endpoint. Everything here
//! is a pure function of the snapshot and is recomputed on each request.

use super::types::{Catalog, Product};
use serde::Serialize;

/// How many of the most-listed companies the dashboard shows.
const TOP_COMPANIES: usize = 8;
/// How many rows the top-rated / budget-friendly panels show.
const HIGHLIGHT_ROWS: usize = 5;

#[derive(Debug, Serialize)]
pub struct CompanyCount {
    pub company: String,
    pub count: usize,
}

/// Price segmentation buckets. Boundaries are half-open except the last,
/// which captures everything from 100k up.
#[derive(Debug, Serialize)]
pub struct PriceRanges {
    pub budget: usize,
    pub mid_range: usize,
    pub premium: usize,
    pub flagship: usize,
}

#[derive(Debug, Serialize)]
pub struct RatingDistribution {
    pub five_stars: usize,
    pub four_to_five: usize,
    pub three_to_four: usize,
    pub below_three: usize,
}

/// The aggregate view served by the dashboard endpoint.
#[derive(Debug, Serialize)]
pub struct DashboardStats {
    pub total_products: usize,
    pub avg_price: f64,
    pub avg_rating: f64,
    pub companies: Vec<CompanyCount>,
    pub price_ranges: PriceRanges,
    pub rating_dist: RatingDistribution,
    pub top_rated: Vec<Product>,
    pub budget_friendly: Vec<Product>,
}

pub fn dashboard_stats(catalog: &Catalog) -> DashboardStats {
    let products = catalog.products();
    let total_products = products.len();

    let (avg_price, avg_rating) = if products.is_empty() {
        (0.0, 0.0)
    } else {
        let price_sum: f64 = products.iter().map(|p| p.price).sum();
        let rating_sum: f64 = products.iter().map(|p| p.rating).sum();
        (
            round2(price_sum / total_products as f64),
            round2(rating_sum / total_products as f64),
        )
    };

    // Count rows per company in vocabulary order, then rank by count.
    // The stable sort keeps first-seen order between equal counts.
    let mut companies: Vec<CompanyCount> = catalog
        .companies()
        .iter()
        .map(|company| CompanyCount {
            company: company.clone(),
            count: products.iter().filter(|p| &p.company == company).count(),
        })
        .collect();
    companies.sort_by(|a, b| b.count.cmp(&a.count));
    companies.truncate(TOP_COMPANIES);

    let price_ranges = PriceRanges {
        budget: products.iter().filter(|p| p.price < 20_000.0).count(),
        mid_range: products
            .iter()
            .filter(|p| p.price >= 20_000.0 && p.price < 50_000.0)
            .count(),
        premium: products
            .iter()
            .filter(|p| p.price >= 50_000.0 && p.price < 100_000.0)
            .count(),
        flagship: products.iter().filter(|p| p.price >= 100_000.0).count(),
    };

    let rating_dist = RatingDistribution {
        five_stars: products.iter().filter(|p| p.rating == 5.0).count(),
        four_to_five: products
            .iter()
            .filter(|p| p.rating >= 4.0 && p.rating < 5.0)
            .count(),
        three_to_four: products
            .iter()
            .filter(|p| p.rating >= 3.0 && p.rating < 4.0)
            .count(),
        below_three: products.iter().filter(|p| p.rating < 3.0).count(),
    };

    let mut by_rating: Vec<Product> = products.to_vec();
    by_rating.sort_by(|a, b| b.rating.total_cmp(&a.rating));
    by_rating.truncate(HIGHLIGHT_ROWS);

    let mut by_price: Vec<Product> = products.to_vec();
    by_price.sort_by(|a, b| a.price.total_cmp(&b.price));
    by_price.truncate(HIGHLIGHT_ROWS);

    DashboardStats {
        total_products,
        avg_price,
        avg_rating,
        companies,
        price_ranges,
        rating_dist,
        top_rated: by_rating,
        budget_friendly: by_price,
    }
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
