//! Platform counters for the landing page.
//!
//! The figures are decorative. Each snapshot adds fresh jitter to the
//! immutable base; nothing accumulates between requests.

use std::ops::RangeInclusive;

use rand::Rng;
use serde::{Deserialize, Serialize};

const TOTAL_QUERIES_JITTER: RangeInclusive<i64> = -50..=200;
const ACTIVE_USERS_JITTER: RangeInclusive<i64> = -10..=50;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlatformStats {
    pub total_queries: i64,
    pub resolved_queries: i64,
    pub active_users: i64,
    pub languages_supported: u32,
    pub states_covered: u32,
    pub ngos_partnered: u32,
    pub avg_response_time_sec: f64,
    pub user_satisfaction_percent: u8,
    pub cases_redirected_to_ngos: i64,
    pub documents_generated: i64,
}

/// Jittered copy of [`PlatformStats`] with a generation timestamp.
#[derive(Debug, Clone, Serialize)]
pub struct StatsSnapshot {
    #[serde(flatten)]
    pub stats: PlatformStats,
    pub timestamp: chrono::DateTime<chrono::Utc>,
}

impl PlatformStats {
    pub(super) fn jittered<R: Rng + ?Sized>(&self, rng: &mut R) -> StatsSnapshot {
        let mut stats = self.clone();
        stats.total_queries += rng.random_range(TOTAL_QUERIES_JITTER);
        stats.active_users += rng.random_range(ACTIVE_USERS_JITTER);
        StatsSnapshot {
            stats,
            timestamp: chrono::Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use crate::data::ReferenceData;

    #[test]
    fn jitter_stays_in_bounds() {
        let data = ReferenceData::embedded().expect("embedded tables load");
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..500 {
            let snap = data.stats_snapshot(&mut rng);
            assert!((128_400..=128_650).contains(&snap.stats.total_queries));
            assert!((45_220..=45_280).contains(&snap.stats.active_users));
        }
    }

    #[test]
    fn jitter_does_not_accumulate() {
        let data = ReferenceData::embedded().expect("embedded tables load");
        let mut rng = StdRng::seed_from_u64(11);
        for _ in 0..100 {
            data.stats_snapshot(&mut rng);
        }
        let snap = data.stats_snapshot(&mut rng);
        assert!(snap.stats.total_queries <= 128_650);
        assert_eq!(snap.stats.resolved_queries, 94_210);
    }

    #[test]
    fn snapshot_serializes_flat() {
        let data = ReferenceData::embedded().expect("embedded tables load");
        let snap = data.stats_snapshot(&mut rand::rng());
        let json = serde_json::to_value(&snap).expect("serialize");
        assert_eq!(json["ngos_partnered"], 412);
        assert_eq!(json["avg_response_time_sec"], 2.3);
        assert!(json["timestamp"].is_string());
    }
}
