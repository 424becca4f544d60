use super::planner;
use super::types::{QueryOutcome, QueryRequest, QueryResponse};
use crate::catalog::types::Catalog;
use axum::http::StatusCode;
use axum::{Extension, Json};
use std::sync::Arc;

pub async fn handle_query(
    Extension(catalog): Extension<Arc<Catalog>>,
    Json(req): Json<QueryRequest>,
) -> (StatusCode, Json<QueryResponse>) {
    let query = req.text.trim().to_string();

    if query.is_empty() {
        return (
            StatusCode::BAD_REQUEST,
            Json(QueryResponse {
                query,
                status: "error".to_string(),
                count: 0,
                results: Vec::new(),
                error: Some("Please enter a query".to_string()),
            }),
        );
    }

    let request_id = uuid::Uuid::new_v4();
    tracing::info!("Query {}: {:?}", request_id, query);

    // Evaluation is pure CPU work over the snapshot; run it off the async
    // worker. A join error means the evaluation task died, which is the one
    // path that surfaces as a generic failure with the query preserved.
    let snapshot = catalog.clone();
    let text = query.clone();
    let outcome = match tokio::task::spawn_blocking(move || planner::evaluate(&snapshot, &text))
        .await
    {
        Ok(outcome) => outcome,
        Err(err) => {
            tracing::error!("Query {} evaluation failed: {}", request_id, err);
            QueryOutcome::Failure("Error processing your query".to_string())
        }
    };

    match outcome {
        QueryOutcome::Success(results) => {
            tracing::info!("Query {}: {} rows", request_id, results.len());
            (
                StatusCode::OK,
                Json(QueryResponse {
                    query,
                    status: "ok".to_string(),
                    count: results.len(),
                    results,
                    error: None,
                }),
            )
        }
        QueryOutcome::Empty => {
            tracing::info!("Query {}: no matches", request_id);
            (
                StatusCode::OK,
                Json(QueryResponse {
                    query,
                    status: "empty".to_string(),
                    count: 0,
                    results: Vec::new(),
                    error: None,
                }),
            )
        }
        QueryOutcome::Failure(reason) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(QueryResponse {
                query,
                status: "error".to_string(),
                count: 0,
                results: Vec::new(),
                error: Some(reason),
            }),
        ),
    }
}
