//! NGO directory search.

use axum::Json;
use axum::extract::State;

use crate::AppState;
use crate::models::{NgoSearchRequest, NgoSearchResponse};

/// `POST /api/ngos`: ids are free-form tags here, so unknown values
/// narrow the match instead of failing.
pub async fn search(
    State(state): State<AppState>,
    Json(req): Json<NgoSearchRequest>,
) -> Json<NgoSearchResponse> {
    let matches = state.data().search_ngos(&req.state, &req.case_type);
    Json(NgoSearchResponse {
        matches,
        state: req.state,
        case_type: req.case_type,
    })
}
