//! Catalog Query Service Library
//!
//! This library crate defines the core modules of the product catalog query service.
//! It serves as the foundation for the binary executable (`main.rs`).
//!
//! ## Architecture Modules
//! The system is composed of two loosely coupled subsystems:
//!
//! - **`catalog`**: The data layer. Loads the product table from disk once at startup,
//!   normalizes it, and exposes it as an immutable, process-wide snapshot. Also computes
//!   the aggregate statistics backing the dashboard endpoint.
//! - **`query`**: The query-interpretation engine. Extracts structured intent (company,
//!   numeric thresholds, comparison keywords) from free-text queries and deterministically
//!   maps it to a filter/sort/cap plan executed against the catalog snapshot.

pub mod catalog;
pub mod query;
