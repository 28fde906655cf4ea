//! Case types: statutes, procedure, required documents.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::DataError;

/// One step of a sequential legal procedure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProcedureStep {
    /// 1-based position within the procedure.
    pub step: u32,
    pub title: String,
    pub description: String,
    pub timeline: String,
    pub cost: String,
    /// Whether the step can be done without a lawyer.
    pub diy: bool,
}

/// Forum responsible for a claim-amount band.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ForumBand {
    pub band: String,
    pub forum: String,
}

/// A category of legal dispute.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CaseType {
    pub id: String,
    pub name: String,
    pub icon: String,
    pub primary_acts: Vec<String>,
    /// Free-form numeric facts (deposit caps, return days, interest rate).
    #[serde(default)]
    pub rules: BTreeMap<String, serde_json::Value>,
    #[serde(default)]
    pub limitation_period_years: Option<u32>,
    #[serde(default)]
    pub key_rights: Vec<String>,
    #[serde(default)]
    pub immediate_resources: Vec<String>,
    #[serde(default)]
    pub forums: Vec<ForumBand>,
    pub required_documents: Vec<String>,
    pub steps: Vec<ProcedureStep>,
    pub success_rate_percent: u8,
    pub avg_resolution_days: u32,
}

impl CaseType {
    /// Forum bands as a `band -> forum` map, or `None` when the case type has none.
    pub fn forums_by_band(&self) -> Option<BTreeMap<&str, &str>> {
        if self.forums.is_empty() {
            return None;
        }
        Some(
            self.forums
                .iter()
                .map(|f| (f.band.as_str(), f.forum.as_str()))
                .collect(),
        )
    }

    pub(super) fn validate(&self) -> Result<(), DataError> {
        let invalid = |reason: String| DataError::Invalid {
            table: "case_types",
            id: self.id.clone(),
            reason,
        };

        if self.required_documents.is_empty() {
            return Err(invalid("no required documents".into()));
        }
        if self.success_rate_percent > 100 {
            return Err(invalid(format!(
                "success rate {}% exceeds 100",
                self.success_rate_percent
            )));
        }
        for (expected, step) in (1u32..).zip(&self.steps) {
            if step.step != expected {
                return Err(invalid(format!(
                    "step '{}' has ordinal {}, expected {expected}",
                    step.title, step.step
                )));
            }
        }
        Ok(())
    }
}
