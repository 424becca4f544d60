use super::stats::{dashboard_stats, DashboardStats};
use super::types::Catalog;
use axum::{Extension, Json};
use serde::Serialize;
use std::sync::Arc;

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub products: usize,
}

pub async fn handle_dashboard(
    Extension(catalog): Extension<Arc<Catalog>>,
) -> Json<DashboardStats> {
    Json(dashboard_stats(&catalog))
}

pub async fn handle_health(Extension(catalog): Extension<Arc<Catalog>>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        products: catalog.len(),
    })
}
