//! Day-based KPIs computed from per-day diary aggregates.
//!
//! All counts are day counts: a day with three headache entries is one
//! headache day. Undocumented days dilute nothing; pain statistics cover
//! headache days with a recorded non-zero pain level only.

use serde::Serialize;

use crate::models::{DayRecord, IntakeTotals};

use super::helpers::{mean_1dp, median_1dp};

/// Stateless aggregate over one report range. Recomputed on every run,
/// never persisted by this crate.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CoreMetrics {
    pub days_in_range: u32,
    pub documented_days: u32,
    pub undocumented_days: u32,
    pub headache_days: u32,
    /// Mean of daily maximum pain over headache days, 1 decimal.
    pub avg_pain_on_headache_days: Option<f64>,
    /// Median of daily maximum pain over headache days, 1 decimal.
    pub median_pain_on_headache_days: Option<f64>,
    pub max_pain: Option<u8>,
    pub acute_med_days: u32,
    pub triptan_days: u32,
    /// Dose totals passed through from the medication module, untouched.
    pub intake: Option<IntakeTotals>,
    /// Always `None`: the diary carries no migraine diagnosis flag and the
    /// engine never estimates one from proxy signals.
    pub migraine_days: Option<u32>,
}

pub fn compute_core_metrics(
    days_in_range: u32,
    days: &[DayRecord],
    intake: Option<IntakeTotals>,
) -> CoreMetrics {
    let documented_days = days.iter().filter(|d| d.documented).count() as u32;
    let headache_days = days.iter().filter(|d| d.headache).count() as u32;
    let acute_med_days = days.iter().filter(|d| d.acute_med_used).count() as u32;
    let triptan_days = days.iter().filter(|d| d.triptan_used).count() as u32;

    // Pain sample: headache days with a recorded pain level above zero.
    let pain_values: Vec<u8> = days
        .iter()
        .filter(|d| d.headache)
        .filter_map(|d| d.pain_max)
        .filter(|p| *p > 0)
        .collect();

    CoreMetrics {
        days_in_range,
        documented_days,
        undocumented_days: days_in_range.saturating_sub(documented_days),
        headache_days,
        avg_pain_on_headache_days: mean_1dp(&pain_values),
        median_pain_on_headache_days: median_1dp(&pain_values),
        max_pain: pain_values.iter().copied().max(),
        acute_med_days,
        triptan_days,
        intake,
        migraine_days: None,
    }
}
