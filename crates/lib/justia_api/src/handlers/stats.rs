//! Platform counters.

use axum::Json;
use axum::extract::State;
use justia_core::data::StatsSnapshot;

use crate::AppState;

/// `GET /api/stats`: base counters with a little per-request jitter.
pub async fn stats(State(state): State<AppState>) -> Json<StatsSnapshot> {
    let snapshot = state.data().stats_snapshot(&mut rand::rng());
    Json(snapshot)
}
