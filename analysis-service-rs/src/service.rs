// analysis-service-rs/src/service.rs
// Router and handlers for the Analysis Service HTTP surface

use axum::{
    extract::State,
    http::StatusCode,
    response::{Html, IntoResponse},
    routing::{get, post},
    Json, Router,
};
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use std::time::Instant;
use tower_http::cors::{Any, CorsLayer};
use tower_http::limit::RequestBodyLimitLayer;

use crate::analysis::{self, ANALYSIS_FAILED, NOTES_GUIDANCE};
use crate::groq_client::GroqClient;

// Track service start time for uptime reporting
static START_TIME: Lazy<Instant> = Lazy::new(Instant::now);

/// Largest accepted request body. Study notes are plain text; anything past
/// this is not a legitimate form submission.
pub const MAX_PAYLOAD_SIZE: usize = 1024 * 1024;

const INDEX_HTML: &str = include_str!("../assets/index.html");

/// Shared application state
pub struct AppState {
    pub groq: GroqClient,
}

/// Analyze request body (JSON). Absent fields decode as empty strings so the
/// validation short-circuit, not a deserialization error, handles them.
#[derive(Debug, Deserialize)]
pub struct AnalyzeRequest {
    #[serde(default)]
    pub text: String,
    #[serde(default)]
    pub goal: String,
    #[serde(default)]
    pub language: String,
}

/// Analyze success body (JSON)
#[derive(Debug, Serialize)]
pub struct AnalyzeResponse {
    pub result: String,
}

/// Analyze failure body (JSON)
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub healthy: bool,
    pub service_name: String,
    pub uptime_seconds: i64,
    pub status: String,
}

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(index_handler))
        .route("/api/analyze", post(analyze_handler))
        .route("/api/health", get(health_handler))
        .layer(RequestBodyLimitLayer::new(MAX_PAYLOAD_SIZE))
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state)
}

/// GET / - embedded study-notes form page
async fn index_handler() -> Html<&'static str> {
    Html(INDEX_HTML)
}

/// POST /api/analyze - analyze study notes against a learning goal
async fn analyze_handler(
    State(state): State<Arc<AppState>>,
    Json(request): Json<AnalyzeRequest>,
) -> impl IntoResponse {
    log::info!(
        "Received analyze request: notes length={}, goal length={}",
        request.text.len(),
        request.goal.len()
    );

    // Too-short notes are a soft miss, not an error: respond 200 with the
    // guidance string and never touch the provider.
    if analysis::notes_too_short(&request.text) {
        log::info!("analyze request short-circuited: notes below minimum length");
        return (
            StatusCode::OK,
            Json(AnalyzeResponse {
                result: NOTES_GUIDANCE.to_string(),
            }),
        )
            .into_response();
    }

    let language = analysis::resolve_language(&request.language);
    let system = analysis::system_prompt();
    let user = analysis::user_prompt(&request.goal, &request.text, language);

    match state.groq.complete(system, &user).await {
        // Provider text passes through verbatim
        Ok(result) => (StatusCode::OK, Json(AnalyzeResponse { result })).into_response(),
        Err(e) => {
            log::error!("analysis failed: {}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    error: ANALYSIS_FAILED.to_string(),
                }),
            )
                .into_response()
        }
    }
}

/// GET /api/health - liveness plus provider-key configuration status
async fn health_handler(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let configured = state.groq.is_configured();

    Json(HealthResponse {
        healthy: configured,
        service_name: "analysis-service".to_string(),
        uptime_seconds: START_TIME.elapsed().as_secs() as i64,
        status: if configured {
            "SERVING".to_string()
        } else {
            "DEGRADED".to_string()
        },
    })
}
