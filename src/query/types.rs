//! Query Engine Data Types
//!
//! Transient values produced while interpreting one query, plus the DTOs exposed
//! through the HTTP API. Everything here lives for a single evaluation; nothing
//! is persisted or cached.

use crate::catalog::types::Product;
use serde::{Deserialize, Serialize};

/// Boolean intent signals derived from keyword presence in the query.
///
/// The detectors are independent and not mutually exclusive; a query like
/// "less than 500" sets both `high` (via "than") and `low` (via "less").
/// `range` is detected for completeness but not consumed by the planner.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct IntentFlags {
    pub rating_mention: bool,
    pub high: bool,
    pub low: bool,
    pub best: bool,
    pub range: bool,
}

/// Everything the extractors pulled out of one query.
///
/// `integers` and `floats` keep text order; the planner reads positionally.
#[derive(Debug, Clone, Default)]
pub struct ExtractedIntent {
    pub company: Option<String>,
    pub integers: Vec<i64>,
    pub floats: Vec<f64>,
    pub flags: IntentFlags,
}

/// A numeric predicate applied to a single column.
///
/// `Between` stores its bounds exactly as constructed and matches the closed
/// interval `[lo, hi]`; a reversed pair therefore matches nothing.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum NumberFilter {
    Above(f64),
    Below(f64),
    AtLeast(f64),
    Between(f64, f64),
}

impl NumberFilter {
    pub fn matches(&self, value: f64) -> bool {
        match self {
            NumberFilter::Above(bound) => value > *bound,
            NumberFilter::Below(bound) => value < *bound,
            NumberFilter::AtLeast(bound) => value >= *bound,
            NumberFilter::Between(lo, hi) => value >= *lo && value <= *hi,
        }
    }
}

/// Row ordering applied after filtering. All orderings are stable, so rows
/// with equal keys keep catalog order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortKey {
    RatingDescPriceAsc,
    PriceAsc,
    PriceDesc,
    RatingDesc,
}

/// The derived combination of filters, ordering, and result cap for one query.
#[derive(Debug, Clone)]
pub struct FilterPlan {
    pub company: Option<String>,
    pub rating: Option<NumberFilter>,
    pub price: Option<NumberFilter>,
    pub sort: SortKey,
    pub limit: usize,
}

/// Outcome of evaluating one query against the catalog.
///
/// An empty result is a normal outcome, not an error. `Failure` is produced by
/// the surrounding layer when evaluation itself could not complete; the engine
/// never constructs it for well-formed input.
#[derive(Debug)]
pub enum QueryOutcome {
    Success(Vec<Product>),
    Empty,
    Failure(String),
}

#[derive(Debug, Deserialize)]
pub struct QueryRequest {
    pub text: String,
}

/// Response for the query endpoint. `query` echoes the input so the caller can
/// redisplay it; `error` is present only on failures.
#[derive(Debug, Serialize, Deserialize)]
pub struct QueryResponse {
    pub query: String,
    pub status: String,
    pub count: usize,
    pub results: Vec<Product>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}
