//! Demo court-case records.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A dated order in a case's history.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CourtOrder {
    pub date: NaiveDate,
    pub order: String,
}

/// Case status in the shape eCourts returns it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CourtCaseRecord {
    pub case_number: String,
    pub court: String,
    pub petitioner: String,
    pub respondent: String,
    pub case_type: String,
    pub filed_date: NaiveDate,
    pub last_hearing: NaiveDate,
    pub next_hearing: NaiveDate,
    pub status: String,
    pub stage: String,
    pub judge: String,
    /// Oldest first.
    pub orders: Vec<CourtOrder>,
}

/// First record whose upper-cased number contains the trimmed, upper-cased
/// query. A blank query matches nothing.
pub(super) fn find<'a>(records: &'a [CourtCaseRecord], case_number: &str) -> Option<&'a CourtCaseRecord> {
    let needle = case_number.trim().to_uppercase();
    if needle.is_empty() {
        return None;
    }
    records
        .iter()
        .find(|record| record.case_number.to_uppercase().contains(&needle))
}
