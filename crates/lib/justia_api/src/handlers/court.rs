//! Demo eCourts lookup.

use axum::Json;
use axum::extract::State;
use tracing::debug;

use crate::AppState;
use crate::models::{CourtLookupRequest, CourtLookupResponse};

/// `POST /api/court-lookup`: waits the configured delay, then answers from
/// the demo case table. Unknown numbers are a normal `found: false` reply.
pub async fn court_lookup(
    State(state): State<AppState>,
    Json(req): Json<CourtLookupRequest>,
) -> Json<CourtLookupResponse> {
    debug!(case_number = %req.case_number, state = ?req.state, "Court lookup");
    if !state.config.court_lookup_delay.is_zero() {
        tokio::time::sleep(state.config.court_lookup_delay).await;
    }

    let response = match state.data().find_court_case(&req.case_number) {
        Some(record) => CourtLookupResponse::found(record.clone()),
        None => CourtLookupResponse::missing(&req.case_number),
    };
    Json(response)
}
