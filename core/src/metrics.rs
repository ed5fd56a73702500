//! Daily metrics ledger.

use crate::types::Day;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Aggregate record for one simulated day.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyMetrics {
    /// Distinct customer identities in the store at end of day.
    pub total_customers_in_store: u64,
    /// Carried in every record but not yet computed by any simulation
    /// path; stays at the default until a revenue model exists.
    pub income: f64,
}

impl Default for DailyMetrics {
    fn default() -> Self {
        Self {
            total_customers_in_store: 0,
            income: 0.0,
        }
    }
}

/// Per-day metrics, ordered by day so reports render chronologically.
pub type DailyMetricsMap = BTreeMap<Day, DailyMetrics>;

/// Set the metrics for a day, replacing any earlier record for that
/// day. No aggregation across days happens here.
pub fn update_daily_metrics(day: Day, metrics: DailyMetrics, daily_metrics_map: &mut DailyMetricsMap) {
    daily_metrics_map.insert(day, metrics);
}
