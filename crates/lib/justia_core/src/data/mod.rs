//! Reference data store.
//!
//! The tables are authored as YAML under `data/` and compiled into the crate.
//! [`ReferenceData::embedded`] parses and validates them once at start-up;
//! after that every table is read-only and shared behind an `Arc`.
//!
//! # Public API
//!
//! - [`ReferenceData::state`] / [`ReferenceData::case_type`]: keyed lookups
//!   returning [`LookupError`] for unknown ids
//! - [`ReferenceData::search_ngos`]: NGO directory search
//! - [`ReferenceData::find_court_case`]: demo eCourts lookup
//! - [`ReferenceData::stats_snapshot`]: jittered platform counters

pub mod case_types;
pub mod court;
pub mod ngos;
pub mod states;
pub mod stats;

use std::collections::HashMap;

use rand::Rng;
use thiserror::Error;

pub use case_types::{CaseType, ForumBand, ProcedureStep};
pub use court::{CourtCaseRecord, CourtOrder};
pub use ngos::{NgoEntry, NgoMatches};
pub use states::StateProfile;
pub use stats::{PlatformStats, StatsSnapshot};

const STATES_YAML: &str = include_str!("../../data/states.yaml");
const CASE_TYPES_YAML: &str = include_str!("../../data/case_types.yaml");
const NGOS_YAML: &str = include_str!("../../data/ngos.yaml");
const COURT_CASES_YAML: &str = include_str!("../../data/court_cases.yaml");
const PLATFORM_STATS_YAML: &str = include_str!("../../data/platform_stats.yaml");

/// Errors raised while loading the embedded tables.
#[derive(Debug, Error)]
pub enum DataError {
    #[error("Failed to parse {table}: {source}")]
    Parse {
        table: &'static str,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("Duplicate id '{id}' in {table}")]
    DuplicateId { table: &'static str, id: String },

    #[error("Invalid record '{id}' in {table}: {reason}")]
    Invalid {
        table: &'static str,
        id: String,
        reason: String,
    },
}

/// A keyed lookup that failed because the id is not in the fixed table.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LookupError {
    #[error("State '{0}' not found")]
    StateNotFound(String),

    #[error("Case type '{0}' not found")]
    CaseTypeNotFound(String),
}

/// Records that carry a unique string id.
trait Keyed {
    fn key(&self) -> &str;
}

impl Keyed for StateProfile {
    fn key(&self) -> &str {
        &self.id
    }
}

impl Keyed for CaseType {
    fn key(&self) -> &str {
        &self.id
    }
}

/// Ordered table with an id index.
#[derive(Debug)]
struct Table<T> {
    rows: Vec<T>,
    index: HashMap<String, usize>,
}

impl<T: Keyed> Table<T> {
    fn build(table: &'static str, rows: Vec<T>) -> Result<Self, DataError> {
        let mut index = HashMap::with_capacity(rows.len());
        for (pos, row) in rows.iter().enumerate() {
            if index.insert(row.key().to_string(), pos).is_some() {
                return Err(DataError::DuplicateId {
                    table,
                    id: row.key().to_string(),
                });
            }
        }
        Ok(Self { rows, index })
    }

    fn get(&self, id: &str) -> Option<&T> {
        self.index.get(id).map(|&pos| &self.rows[pos])
    }
}

fn parse<T: serde::de::DeserializeOwned>(table: &'static str, yaml: &str) -> Result<T, DataError> {
    serde_yaml::from_str(yaml).map_err(|source| DataError::Parse { table, source })
}

/// All static reference tables, immutable after construction.
#[derive(Debug)]
pub struct ReferenceData {
    states: Table<StateProfile>,
    case_types: Table<CaseType>,
    ngos: Vec<NgoEntry>,
    court_cases: Vec<CourtCaseRecord>,
    stats: PlatformStats,
}

impl ReferenceData {
    /// Parse and validate the tables compiled into the crate.
    pub fn embedded() -> Result<Self, DataError> {
        let states: Vec<StateProfile> = parse("states", STATES_YAML)?;
        let case_types: Vec<CaseType> = parse("case_types", CASE_TYPES_YAML)?;
        for case_type in &case_types {
            case_type.validate()?;
        }

        Ok(Self {
            states: Table::build("states", states)?,
            case_types: Table::build("case_types", case_types)?,
            ngos: parse("ngos", NGOS_YAML)?,
            court_cases: parse("court_cases", COURT_CASES_YAML)?,
            stats: parse("platform_stats", PLATFORM_STATS_YAML)?,
        })
    }

    /// All states in table order.
    pub fn states(&self) -> &[StateProfile] {
        &self.states.rows
    }

    /// All case types in table order.
    pub fn case_types(&self) -> &[CaseType] {
        &self.case_types.rows
    }

    pub fn state(&self, id: &str) -> Result<&StateProfile, LookupError> {
        self.states
            .get(id)
            .ok_or_else(|| LookupError::StateNotFound(id.to_string()))
    }

    pub fn case_type(&self, id: &str) -> Result<&CaseType, LookupError> {
        self.case_types
            .get(id)
            .ok_or_else(|| LookupError::CaseTypeNotFound(id.to_string()))
    }

    /// NGOs serving the state OR focused on the case type, plus NALSA.
    pub fn search_ngos(&self, state: &str, case_type: &str) -> NgoMatches {
        ngos::search(&self.ngos, state, case_type)
    }

    /// First record whose case number contains `case_number`, ignoring case.
    pub fn find_court_case(&self, case_number: &str) -> Option<&CourtCaseRecord> {
        court::find(&self.court_cases, case_number)
    }

    /// Base counters with fresh cosmetic jitter.
    pub fn stats_snapshot<R: Rng + ?Sized>(&self, rng: &mut R) -> StatsSnapshot {
        self.stats.jittered(rng)
    }
}
