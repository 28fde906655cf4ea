//! State / union-territory profiles.

use serde::{Deserialize, Serialize};

/// Jurisdiction-specific courts, authorities and statutes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StateProfile {
    pub id: String,
    pub name: String,
    pub capital: String,
    pub high_court: String,
    pub legal_aid_authority: String,
    pub legal_aid_phone: String,
    pub legal_aid_url: String,
    /// Rent-control statute applicable in the state.
    pub rent_act: String,
    pub consumer_forum: String,
    pub labour_commissioner: String,
    pub police_complaint_url: String,
    /// Annual income ceiling (rupees) for free legal aid.
    pub income_limit_legal_aid: u64,
}
