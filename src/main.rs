use axum::{
    extract::Extension,
    routing::{get, post},
    Router,
};
use catalog_query::catalog::handlers::{handle_dashboard, handle_health};
use catalog_query::catalog::loader;
use catalog_query::query::handlers::handle_query;
use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    let args: Vec<String> = std::env::args().collect();

    let mut bind_addr: SocketAddr = "127.0.0.1:9100".parse()?;
    let mut data_path = PathBuf::from("data/products.json");

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--bind" => {
                bind_addr = args[i + 1].parse()?;
                i += 2;
            }
            "--data" => {
                data_path = PathBuf::from(&args[i + 1]);
                i += 2;
            }
            "--help" | "-h" => {
                eprintln!("Usage: {} [--bind <addr:port>] [--data <path>]", args[0]);
                eprintln!("Example: {} --bind 127.0.0.1:9100 --data data/products.json", args[0]);
                std::process::exit(0);
            }
            _ => {
                i += 1;
            }
        }
    }

    // 1. Catalog (one-time, read-only snapshot):
    let catalog = Arc::new(loader::load(&data_path)?);
    tracing::info!(
        "Catalog ready: {} products, {} companies",
        catalog.len(),
        catalog.companies().len()
    );

    // 2. HTTP Router:
    let app = Router::new()
        .route("/query", post(handle_query))
        .route("/dashboard", get(handle_dashboard))
        .route("/health", get(handle_health))
        .layer(Extension(catalog));

    // 3. Start HTTP server:
    tracing::info!("HTTP server listening on {}", bind_addr);
    tracing::info!("Press Ctrl+C to shutdown");

    let listener = tokio::net::TcpListener::bind(bind_addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
