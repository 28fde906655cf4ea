//! Read-only reference tables: states, case types, legal info, documents.

use axum::Json;
use axum::extract::{Path, State};

use crate::AppState;
use crate::error::AppResult;
use crate::models::{
    CaseTypeInfo, CaseTypeSummary, CaseTypesResponse, DOCUMENTS_TIP, DocumentsResponse,
    LEGAL_INFO_DISCLAIMER, LEGAL_INFO_LAST_UPDATED, LEGAL_INFO_SOURCES, LegalInfoResponse,
    StateInfo, StateSummary, StatesResponse,
};

/// Case type whose legal info carries the state's rent act.
const RENTAL_CASE_TYPE: &str = "rental_deposit";

/// `GET /api/states`
pub async fn states(State(state): State<AppState>) -> Json<StatesResponse> {
    let states: Vec<StateSummary> = state.data().states().iter().map(StateSummary::from).collect();
    Json(StatesResponse {
        total: states.len(),
        states,
    })
}

/// `GET /api/case-types`
pub async fn case_types(State(state): State<AppState>) -> Json<CaseTypesResponse> {
    Json(CaseTypesResponse {
        case_types: state
            .data()
            .case_types()
            .iter()
            .map(CaseTypeSummary::from)
            .collect(),
    })
}

/// `GET /api/legal-info/{case_type}/{state}`: the case type is checked
/// before the state.
pub async fn legal_info(
    State(state): State<AppState>,
    Path((case_type_id, state_id)): Path<(String, String)>,
) -> AppResult<Json<LegalInfoResponse>> {
    let data = state.data();
    let case_type = data.case_type(&case_type_id)?;
    let profile = data.state(&state_id)?;

    let relevant_act = (case_type.id == RENTAL_CASE_TYPE).then(|| profile.rent_act.clone());

    Ok(Json(LegalInfoResponse {
        case_type: CaseTypeInfo::from(case_type),
        state: StateInfo::new(profile, relevant_act),
        disclaimer: LEGAL_INFO_DISCLAIMER,
        sources: LEGAL_INFO_SOURCES,
        last_updated: LEGAL_INFO_LAST_UPDATED,
    }))
}

/// `GET /api/documents/{case_type}`
pub async fn documents(
    State(state): State<AppState>,
    Path(case_type_id): Path<String>,
) -> AppResult<Json<DocumentsResponse>> {
    let case_type = state.data().case_type(&case_type_id)?;
    Ok(Json(DocumentsResponse {
        case_type: case_type.id.clone(),
        documents: case_type.required_documents.clone(),
        tip: DOCUMENTS_TIP,
    }))
}
