//! Route paths served by [`crate::router`].

pub const GET_ROOT: &str = "/";
pub const GET_API_HEALTH: &str = "/api/health";
pub const POST_API_CHAT: &str = "/api/chat";
pub const POST_API_CHAT_STREAM: &str = "/api/chat/stream";
pub const GET_API_STATES: &str = "/api/states";
pub const GET_API_CASE_TYPES: &str = "/api/case-types";
pub const GET_API_LEGAL_INFO_CASE_TYPE_STATE: &str = "/api/legal-info/{case_type}/{state}";
pub const POST_API_COURT_LOOKUP: &str = "/api/court-lookup";
pub const POST_API_NGOS: &str = "/api/ngos";
pub const GET_API_STATS: &str = "/api/stats";
pub const GET_API_DOCUMENTS_CASE_TYPE: &str = "/api/documents/{case_type}";

/// Endpoints advertised by `GET /`.
pub const ADVERTISED: [&str; 9] = [
    POST_API_CHAT,
    POST_API_CHAT_STREAM,
    GET_API_STATES,
    GET_API_CASE_TYPES,
    GET_API_LEGAL_INFO_CASE_TYPE_STATE,
    POST_API_COURT_LOOKUP,
    POST_API_NGOS,
    GET_API_STATS,
    GET_API_DOCUMENTS_CASE_TYPE,
];
