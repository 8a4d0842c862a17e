// analysis-service-rs/src/main.rs
// Analysis Service - HTTP endpoint for study-notes learning gap analysis

mod analysis;
mod groq_client;
mod service;

use std::sync::Arc;

use groq_client::GroqClient;
use service::AppState;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load .env file
    dotenv::dotenv().ok();

    // Initialize logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    // Get bind address from standard configuration
    let addr = config_rs::get_bind_address("ANALYSIS", 8080);

    // Construct the provider client once; it is shared read-only across handlers
    let state = Arc::new(AppState {
        groq: GroqClient::from_env(),
    });

    log::info!("Analysis Service starting on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, service::router(state)).await?;

    Ok(())
}
