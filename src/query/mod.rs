//! Query Engine Module
//!
//! The core component of the service: turns a free-text query about product listings
//! into a deterministic filter/sort/cap operation over the catalog snapshot.
//!
//! ## Overview
//! A query flows through a single-pass pipeline. Four leaf extractors scan the raw
//! text independently; the planner combines their outputs into a `FilterPlan` and
//! executes it. There is no grammar, negation handling, or multi-clause logic:
//! extraction is substring and regex matching only.
//!
//! ## Responsibilities
//! - **Entity extraction**: First catalog company occurring as a substring of the query.
//! - **Numeric extraction**: Integer tokens are candidate prices, fractional tokens
//!   candidate ratings, both in text order.
//! - **Intent detection**: Five independent keyword tests (rating/high/low/best/range).
//! - **Planning**: The fixed-priority decision algorithm mapping intent to filters,
//!   a sort key, and a result cap.
//! - **API**: Exposing query evaluation via an HTTP endpoint.
//!
//! ## Submodules
//! - **`extract`**: Entity and numeric extractors.
//! - **`handlers`**: HTTP request handlers for the Axum web server.
//! - **`intent`**: Keyword-based intent detectors.
//! - **`planner`**: Plan construction and execution against the catalog.
//! - **`types`**: Intent, plan, outcome, and API transfer structures.

pub mod extract;
pub mod handlers;
pub mod intent;
pub mod planner;
pub mod types;
