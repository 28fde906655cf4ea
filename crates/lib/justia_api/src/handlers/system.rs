//! Service banner and health check.

use axum::Json;
use axum::extract::State;
use chrono::Utc;

use crate::AppState;
use crate::models::{HealthResponse, RootResponse};
use crate::routes;

/// `GET /`: service banner with the advertised endpoints.
pub async fn root() -> Json<RootResponse> {
    Json(RootResponse {
        service: "JUSTIA API",
        version: justia_core::version(),
        status: "online",
        endpoints: routes::ADVERTISED.to_vec(),
    })
}

/// `GET /api/health`: liveness plus whether the AI provider is configured.
pub async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy",
        claude_available: state.assistant.ai_enabled(),
        timestamp: Utc::now(),
    })
}
