//! Catalog Module
//!
//! The data layer of the service: an immutable, in-memory product table.
//!
//! ## Core Concepts
//! - **Loading**: The table is read from a JSON file exactly once, before the HTTP
//!   server starts. A load failure is fatal to startup.
//! - **Normalization**: Company names are lower-cased at construction time so the
//!   query engine can match them without per-query case folding.
//! - **Vocabulary**: The distinct company names, in first-seen row order. The query
//!   engine scans this list linearly, so its order is part of the matching contract.
//! - **Access**: The catalog is shared as `Arc<Catalog>` and never mutated after load;
//!   every query works against the same read-only snapshot.
//!
//! ## Submodules
//! - **`handlers`**: HTTP request handlers for the dashboard and health endpoints.
//! - **`loader`**: One-shot dataset loading from disk.
//! - **`stats`**: Aggregate statistics for the dashboard view.
//! - **`types`**: The product row and catalog snapshot structures.

pub mod handlers;
pub mod loader;
pub mod stats;
pub mod types;
