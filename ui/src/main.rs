use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::Html;
use axum::{routing::get, Json, Router};
use serde::{Deserialize, Serialize};
use std::net::SocketAddr;

#[derive(Clone)]
struct AppState {
    service_url: String,
    client: reqwest::Client,
}

#[derive(Deserialize)]
struct QueryParams {
    q: String,
}

#[derive(Serialize)]
struct ProxyResponse {
    status: u16,
    body: serde_json::Value,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    let service_url =
        std::env::var("SERVICE_URL").unwrap_or_else(|_| "http://127.0.0.1:9100".to_string());
    let bind_addr: SocketAddr = std::env::var("UI_BIND")
        .unwrap_or_else(|_| "127.0.0.1:8080".to_string())
        .parse()?;

    let state = AppState {
        service_url: normalize_url(&service_url),
        client: reqwest::Client::new(),
    };

    let app = Router::new()
        .route("/", get(ui))
        .route("/api/query", get(api_query))
        .route("/api/dashboard", get(api_dashboard))
        .with_state(state);

    tracing::info!("UI listening on {} (service: {})", bind_addr, service_url);
    axum::serve(tokio::net::TcpListener::bind(bind_addr).await?, app).await?;

    Ok(())
}

async fn ui() -> Html<&'static str> {
    Html(include_str!("ui.html"))
}

async fn api_query(
    State(state): State<AppState>,
    Query(params): Query<QueryParams>,
) -> Result<Json<ProxyResponse>, (StatusCode, String)> {
    let url = format!("{}/query", state.service_url);
    let resp = state
        .client
        .post(url)
        .json(&serde_json::json!({ "text": params.q }))
        .send()
        .await
        .map_err(|e| (StatusCode::BAD_GATEWAY, e.to_string()))?;

    let status = resp.status().as_u16();
    let body = resp
        .json::<serde_json::Value>()
        .await
        .unwrap_or_else(|_| serde_json::json!({"error": "invalid json"}));

    Ok(Json(ProxyResponse { status, body }))
}

async fn api_dashboard(
    State(state): State<AppState>,
) -> Result<Json<ProxyResponse>, (StatusCode, String)> {
    let url = format!("{}/dashboard", state.service_url);
    let resp = state
        .client
        .get(url)
        .send()
        .await
        .map_err(|e| (StatusCode::BAD_GATEWAY, e.to_string()))?;

    let status = resp.status().as_u16();
    let body = resp
        .json::<serde_json::Value>()
        .await
        .unwrap_or_else(|_| serde_json::json!({"error": "invalid json"}));

    Ok(Json(ProxyResponse { status, body }))
}

fn normalize_url(raw: &str) -> String {
    let trimmed = raw.trim();
    let with_scheme = if trimmed.starts_with("http://") || trimmed.starts_with("https://") {
        trimmed.to_string()
    } else {
        format!("http://{}", trimmed)
    };

    with_scheme.trim_end_matches('/').to_string()
}
