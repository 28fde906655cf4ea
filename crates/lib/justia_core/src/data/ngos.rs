//! NGO directory search.

use serde::{Deserialize, Serialize};

/// Tag matching every state or every focus area.
pub const WILDCARD: &str = "all";

/// Maximum number of NGOs returned by a search.
pub const MAX_RESULTS: usize = 5;

/// A legal-aid NGO.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NgoEntry {
    pub name: String,
    /// Case-type ids or broader tags (`human_rights`, `family_law`).
    pub focus: Vec<String>,
    /// State ids served.
    pub states: Vec<String>,
    pub phone: String,
    pub email: String,
    pub url: String,
    pub free: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

impl NgoEntry {
    fn serves_state(&self, state: &str) -> bool {
        self.states.iter().any(|s| s == state || s == WILDCARD)
    }

    fn handles(&self, case_type: &str) -> bool {
        self.focus.iter().any(|f| f == case_type || f == WILDCARD)
    }
}

/// Result of [`search`].
#[derive(Debug, Clone, Serialize)]
pub struct NgoMatches {
    /// At most [`MAX_RESULTS`] entries.
    pub ngos: Vec<NgoEntry>,
    /// Matches before truncation, NALSA included.
    pub total_found: usize,
}

/// The national authority appended to every search.
pub fn nalsa() -> NgoEntry {
    NgoEntry {
        name: "NALSA (National Legal Services Authority)".to_string(),
        focus: vec![WILDCARD.to_string()],
        states: vec![WILDCARD.to_string()],
        phone: "15100".to_string(),
        email: "nalsa@nic.in".to_string(),
        url: "https://nalsa.gov.in".to_string(),
        free: true,
        note: Some("Free legal aid for income below ₹3 lakh/year".to_string()),
    }
}

/// Union of NGOs matching the state or the case type, then NALSA.
///
/// The last slot is reserved for NALSA: directory matches are cut to
/// `MAX_RESULTS - 1` before it is appended.
pub fn search(directory: &[NgoEntry], state: &str, case_type: &str) -> NgoMatches {
    let mut matches: Vec<NgoEntry> = directory
        .iter()
        .filter(|ngo| ngo.serves_state(state) || ngo.handles(case_type))
        .cloned()
        .collect();

    let total_found = matches.len() + 1;
    matches.truncate(MAX_RESULTS - 1);
    matches.push(nalsa());

    NgoMatches {
        ngos: matches,
        total_found,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::ReferenceData;

    fn directory() -> Vec<NgoEntry> {
        let data = ReferenceData::embedded().expect("embedded tables load");
        data.ngos.clone()
    }

    fn names(m: &NgoMatches) -> Vec<&str> {
        m.ngos.iter().map(|n| n.name.as_str()).collect()
    }

    #[test]
    fn matches_by_state_or_focus() {
        let m = search(&directory(), "karnataka", "rental_deposit");
        // Lawyers Collective by state, iJustice by focus.
        assert_eq!(
            names(&m),
            [
                "Lawyers Collective",
                "iJustice",
                "NALSA (National Legal Services Authority)"
            ]
        );
        assert_eq!(m.total_found, 3);
    }

    #[test]
    fn unknown_ids_still_return_nalsa() {
        let m = search(&directory(), "nowhere", "nothing");
        assert_eq!(names(&m), ["NALSA (National Legal Services Authority)"]);
        assert_eq!(m.total_found, 1);
    }

    #[test]
    fn nalsa_survives_truncation() {
        // Every directory entry serves Maharashtra.
        let m = search(&directory(), "maharashtra", "labour_wage");
        assert_eq!(m.ngos.len(), MAX_RESULTS);
        assert_eq!(m.total_found, 6);
        assert_eq!(
            m.ngos.last().map(|n| n.name.as_str()),
            Some("NALSA (National Legal Services Authority)")
        );
    }

    #[test]
    fn truncates_to_max_and_reports_total() {
        let mut dir = directory();
        dir.extend(directory());
        let m = search(&dir, "maharashtra", "labour_wage");
        assert_eq!(m.ngos.len(), MAX_RESULTS);
        assert_eq!(m.total_found, 11);
    }

    #[test]
    fn wildcard_entries_match_everything() {
        let m = search(&[nalsa()], "delhi", "consumer_complaint");
        assert_eq!(m.total_found, 2);
    }
}
