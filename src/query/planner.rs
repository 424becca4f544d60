use super::extract::{extract_company, extract_numbers};
use super::intent::detect_flags;
use super::types::{ExtractedIntent, FilterPlan, NumberFilter, QueryOutcome, SortKey};
use crate::catalog::types::{Catalog, Product};

/// Maximum rows returned by a regular query.
const RESULT_CAP: usize = 20;
/// Maximum rows returned by the best-of short-circuit.
const BEST_OF_CAP: usize = 10;

/// Band width for a bare price mention: keep rows within ±10% of the target.
const NEARBY_PRICE_FACTOR: f64 = 0.1;

/// Runs the full pipeline for one query: extractors, plan construction, and
/// plan execution against the snapshot.
///
/// Pure and synchronous; the catalog is read-only and every transient value is
/// owned by this call, so concurrent evaluations share nothing mutable.
pub fn evaluate(catalog: &Catalog, query: &str) -> QueryOutcome {
    let intent = extract_intent(catalog, query);
    let plan = build_plan(&intent);

    tracing::debug!(
        "Query {:?} -> company={:?} rating={:?} price={:?} sort={:?} limit={}",
        query,
        plan.company,
        plan.rating,
        plan.price,
        plan.sort,
        plan.limit
    );

    let rows = apply_plan(catalog, &plan);
    if rows.is_empty() {
        QueryOutcome::Empty
    } else {
        QueryOutcome::Success(rows)
    }
}

/// Runs the four leaf extractors against the raw query text.
pub fn extract_intent(catalog: &Catalog, query: &str) -> ExtractedIntent {
    let (integers, floats) = extract_numbers(query);

    ExtractedIntent {
        company: extract_company(query, catalog.companies()),
        integers,
        floats,
        flags: detect_flags(query),
    }
}

/// Maps the extracted intent to a filter plan.
///
/// Decision steps run in fixed priority order. The best-of short-circuit
/// returns early: when `best` is set and the query carried no numbers at all,
/// the plan is simply "top 10 by rating" (after any company restriction) and
/// the threshold logic below never runs.
pub fn build_plan(intent: &ExtractedIntent) -> FilterPlan {
    let flags = intent.flags;

    let mut plan = FilterPlan {
        company: intent.company.clone(),
        rating: None,
        price: None,
        sort: SortKey::RatingDesc,
        limit: RESULT_CAP,
    };

    if flags.best && intent.integers.is_empty() && intent.floats.is_empty() {
        plan.limit = BEST_OF_CAP;
        return plan;
    }

    // Rating threshold, only when the query both mentions ratings and carries
    // a fractional value. With two or more values the first two form the
    // interval in extraction order, NOT normalized: a reversed pair yields an
    // empty result.
    if flags.rating_mention && !intent.floats.is_empty() {
        plan.rating = Some(if intent.floats.len() >= 2 {
            NumberFilter::Between(intent.floats[0], intent.floats[1])
        } else if flags.high {
            NumberFilter::Above(intent.floats[0])
        } else if flags.low {
            NumberFilter::Below(intent.floats[0])
        } else {
            NumberFilter::AtLeast(intent.floats[0])
        });
    }

    // Price filter from integer values. `high` wins when both direction flags
    // are set ("less than 500" sets both). The low branch also covers the
    // literal words "under" and "below" since both are members of the low
    // keyword set. Unlike the rating interval, a two-integer range IS
    // normalized via min/max.
    if !intent.integers.is_empty() {
        let value = intent.integers[0] as f64;
        plan.price = Some(if intent.integers.len() >= 2 {
            let second = intent.integers[1] as f64;
            NumberFilter::Between(value.min(second), value.max(second))
        } else if flags.high {
            NumberFilter::Above(value)
        } else if flags.low {
            NumberFilter::Below(value)
        } else {
            // Bare price mention: treat it as an approximate target.
            NumberFilter::Between(
                value * (1.0 - NEARBY_PRICE_FACTOR),
                value * (1.0 + NEARBY_PRICE_FACTOR),
            )
        });
    }

    plan.sort = if flags.best || flags.rating_mention {
        SortKey::RatingDescPriceAsc
    } else if !intent.integers.is_empty() {
        if flags.low {
            SortKey::PriceAsc
        } else {
            SortKey::PriceDesc
        }
    } else {
        SortKey::RatingDesc
    };

    plan
}

/// Executes a plan against the catalog snapshot.
///
/// Filters into a fresh owned row set, sorts it stably, and truncates to the
/// plan's cap. The snapshot itself is never reordered or filtered in place.
/// An empty subset at any stage simply flows through to an empty result.
pub fn apply_plan(catalog: &Catalog, plan: &FilterPlan) -> Vec<Product> {
    let mut rows: Vec<Product> = catalog
        .products()
        .iter()
        .filter(|product| {
            plan.company
                .as_deref()
                .map_or(true, |company| product.company.contains(company))
        })
        .filter(|product| {
            plan.rating
                .map_or(true, |filter| filter.matches(product.rating))
        })
        .filter(|product| {
            plan.price
                .map_or(true, |filter| filter.matches(product.price))
        })
        .cloned()
        .collect();

    match plan.sort {
        SortKey::RatingDescPriceAsc => rows.sort_by(|a, b| {
            b.rating
                .total_cmp(&a.rating)
                .then(a.price.total_cmp(&b.price))
        }),
        SortKey::PriceAsc => rows.sort_by(|a, b| a.price.total_cmp(&b.price)),
        SortKey::PriceDesc => rows.sort_by(|a, b| b.price.total_cmp(&a.price)),
        SortKey::RatingDesc => rows.sort_by(|a, b| b.rating.total_cmp(&a.rating)),
    }

    rows.truncate(plan.limit);
    rows
}
