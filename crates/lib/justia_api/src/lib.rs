//! # justia_api
//!
//! HTTP API library for Justia.

pub mod config;
pub mod error;
pub mod handlers;
pub mod models;
pub mod routes;

use axum::Router;
use axum::routing::{get, post};
use justia_core::assistant::Assistant;
use justia_core::data::ReferenceData;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::config::ApiConfig;
use crate::handlers::{chat, court, ngos, reference, stats, system};

/// Shared application state passed to all handlers.
#[derive(Clone)]
pub struct AppState {
    /// Reply engine; also owns the reference tables.
    pub assistant: Assistant,
    /// API configuration.
    pub config: ApiConfig,
}

impl AppState {
    pub fn data(&self) -> &ReferenceData {
        self.assistant.data()
    }
}

/// Builds the Axum router with all routes and shared state.
pub fn router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route(routes::GET_ROOT, get(system::root))
        .route(routes::GET_API_HEALTH, get(system::health))
        .route(routes::POST_API_CHAT, post(chat::chat))
        .route(routes::POST_API_CHAT_STREAM, post(chat::chat_stream))
        .route(routes::GET_API_STATES, get(reference::states))
        .route(routes::GET_API_CASE_TYPES, get(reference::case_types))
        .route(
            routes::GET_API_LEGAL_INFO_CASE_TYPE_STATE,
            get(reference::legal_info),
        )
        .route(routes::GET_API_DOCUMENTS_CASE_TYPE, get(reference::documents))
        .route(routes::POST_API_COURT_LOOKUP, post(court::court_lookup))
        .route(routes::POST_API_NGOS, post(ngos::search))
        .route(routes::GET_API_STATS, get(stats::stats))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}
