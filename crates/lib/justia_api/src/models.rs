//! Request and response bodies.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use justia_core::assistant::{ChatQuery, ReplySource};
use justia_core::data::{CaseType, CourtCaseRecord, NgoMatches, ProcedureStep, StateProfile};
use justia_core::provider::ChatMessage;
use serde::{Deserialize, Serialize};

pub const COURT_SOURCE: &str = "eCourts (mock)";
pub const COURT_DISCLAIMER: &str =
    "Case data is for demonstration. For live data, visit ecourts.gov.in";
pub const COURT_SUGGESTION: &str = "Visit https://ecourts.gov.in for live case status.";
pub const LEGAL_INFO_DISCLAIMER: &str = "This information is sourced from India Code and official government websites. It is legal information, not legal advice.";
pub const LEGAL_INFO_SOURCES: [&str; 3] = [
    "https://indiacode.nic.in",
    "https://ecourts.gov.in",
    "https://nalsa.gov.in",
];
pub const LEGAL_INFO_LAST_UPDATED: &str = "2025-01-01";
pub const DOCUMENTS_TIP: &str = "Collect ALL documents before approaching any forum. Missing documents = delayed resolution.";

#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
}

#[derive(Debug, Serialize)]
pub struct RootResponse {
    pub service: &'static str,
    pub version: &'static str,
    pub status: &'static str,
    pub endpoints: Vec<&'static str>,
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub claude_available: bool,
    pub timestamp: DateTime<Utc>,
}

fn default_language() -> String {
    "en".to_string()
}

/// Body of `POST /api/chat` and `POST /api/chat/stream`.
#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    pub message: String,
    #[serde(default = "default_language")]
    pub language: String,
    #[serde(default)]
    pub state: Option<String>,
    #[serde(default)]
    pub case_type: Option<String>,
    #[serde(default)]
    pub conversation_history: Vec<ChatMessage>,
}

impl From<ChatRequest> for ChatQuery {
    fn from(req: ChatRequest) -> Self {
        ChatQuery {
            message: req.message,
            language: req.language,
            state: req.state,
            case_type: req.case_type,
            history: req.conversation_history,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ChatResponse {
    pub reply: String,
    pub source: ReplySource,
    pub language: String,
    pub response_time_ms: u64,
    pub disclaimer: bool,
}

/// Payload of one `data:` event on the chat stream.
#[derive(Debug, Serialize)]
pub struct StreamDelta {
    pub delta: String,
}

#[derive(Debug, Serialize)]
pub struct StateSummary {
    pub id: String,
    pub name: String,
    pub high_court: String,
    pub legal_aid_phone: String,
}

impl From<&StateProfile> for StateSummary {
    fn from(s: &StateProfile) -> Self {
        Self {
            id: s.id.clone(),
            name: s.name.clone(),
            high_court: s.high_court.clone(),
            legal_aid_phone: s.legal_aid_phone.clone(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct StatesResponse {
    pub states: Vec<StateSummary>,
    pub total: usize,
}

#[derive(Debug, Serialize)]
pub struct CaseTypeSummary {
    pub id: String,
    pub name: String,
    pub icon: String,
    pub success_rate: u8,
    pub avg_days: u32,
}

impl From<&CaseType> for CaseTypeSummary {
    fn from(ct: &CaseType) -> Self {
        Self {
            id: ct.id.clone(),
            name: ct.name.clone(),
            icon: ct.icon.clone(),
            success_rate: ct.success_rate_percent,
            avg_days: ct.avg_resolution_days,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct CaseTypesResponse {
    pub case_types: Vec<CaseTypeSummary>,
}

#[derive(Debug, Serialize)]
pub struct CaseTypeInfo {
    pub id: String,
    pub name: String,
    pub primary_acts: Vec<String>,
    pub required_documents: Vec<String>,
    pub steps: Vec<ProcedureStep>,
    pub success_rate_percent: u8,
    pub avg_resolution_days: u32,
    /// Forum by claim band; `null` for case types without banded forums.
    pub forums: Option<BTreeMap<String, String>>,
    pub key_rights: Vec<String>,
    pub immediate_resources: Vec<String>,
    pub rules: BTreeMap<String, serde_json::Value>,
    pub limitation_period_years: Option<u32>,
}

impl From<&CaseType> for CaseTypeInfo {
    fn from(ct: &CaseType) -> Self {
        let forums = ct.forums_by_band().map(|bands| {
            bands
                .into_iter()
                .map(|(band, forum)| (band.to_string(), forum.to_string()))
                .collect()
        });
        Self {
            id: ct.id.clone(),
            name: ct.name.clone(),
            primary_acts: ct.primary_acts.clone(),
            required_documents: ct.required_documents.clone(),
            steps: ct.steps.clone(),
            success_rate_percent: ct.success_rate_percent,
            avg_resolution_days: ct.avg_resolution_days,
            forums,
            key_rights: ct.key_rights.clone(),
            immediate_resources: ct.immediate_resources.clone(),
            rules: ct.rules.clone(),
            limitation_period_years: ct.limitation_period_years,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct StateInfo {
    pub name: String,
    pub high_court: String,
    pub legal_aid_authority: String,
    pub legal_aid_phone: String,
    pub legal_aid_url: String,
    /// The state's rent act, only for rental disputes.
    pub relevant_act: Option<String>,
    pub consumer_forum: String,
    pub income_limit_legal_aid: u64,
    pub labour_commissioner: String,
    pub police_complaint_url: String,
}

impl StateInfo {
    pub fn new(s: &StateProfile, relevant_act: Option<String>) -> Self {
        Self {
            name: s.name.clone(),
            high_court: s.high_court.clone(),
            legal_aid_authority: s.legal_aid_authority.clone(),
            legal_aid_phone: s.legal_aid_phone.clone(),
            legal_aid_url: s.legal_aid_url.clone(),
            relevant_act,
            consumer_forum: s.consumer_forum.clone(),
            income_limit_legal_aid: s.income_limit_legal_aid,
            labour_commissioner: s.labour_commissioner.clone(),
            police_complaint_url: s.police_complaint_url.clone(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct LegalInfoResponse {
    pub case_type: CaseTypeInfo,
    pub state: StateInfo,
    pub disclaimer: &'static str,
    pub sources: [&'static str; 3],
    pub last_updated: &'static str,
}

#[derive(Debug, Deserialize)]
pub struct CourtLookupRequest {
    pub case_number: String,
    #[serde(default)]
    pub state: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum CourtLookupResponse {
    Found(CourtCaseFound),
    Missing(CourtCaseMissing),
}

#[derive(Debug, Serialize)]
pub struct CourtCaseFound {
    pub found: bool,
    pub case: CourtCaseRecord,
    pub source: &'static str,
    pub disclaimer: &'static str,
}

#[derive(Debug, Serialize)]
pub struct CourtCaseMissing {
    pub found: bool,
    pub message: String,
    pub suggestion: &'static str,
    pub source: &'static str,
}

impl CourtLookupResponse {
    pub fn found(case: CourtCaseRecord) -> Self {
        Self::Found(CourtCaseFound {
            found: true,
            case,
            source: COURT_SOURCE,
            disclaimer: COURT_DISCLAIMER,
        })
    }

    pub fn missing(case_number: &str) -> Self {
        Self::Missing(CourtCaseMissing {
            found: false,
            message: format!("Case {case_number} not found in our demo database."),
            suggestion: COURT_SUGGESTION,
            source: COURT_SOURCE,
        })
    }
}

#[derive(Debug, Deserialize)]
pub struct NgoSearchRequest {
    pub state: String,
    pub case_type: String,
}

#[derive(Debug, Serialize)]
pub struct NgoSearchResponse {
    #[serde(flatten)]
    pub matches: NgoMatches,
    pub state: String,
    pub case_type: String,
}

#[derive(Debug, Serialize)]
pub struct DocumentsResponse {
    pub case_type: String,
    pub documents: Vec<String>,
    pub tip: &'static str,
}
