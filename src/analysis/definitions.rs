//! Counting rules and fixed thresholds for the analysis engine.
//!
//! Single source for every number the engine compares against. The same
//! definitions are embedded verbatim in each result bundle so report text
//! can quote the exact rule that produced a metric.

use serde::Serialize;

// ═══════════════════════════════════════════════════════════
// Medication-overuse thresholds
// ═══════════════════════════════════════════════════════════

/// Acute-medication days per 30 days at or above which risk is "likely".
pub const MOH_ACUTE_THRESHOLD_PER_30: f64 = 10.0;

/// Triptan days per 30 days at or above which risk is "likely".
pub const MOH_TRIPTAN_THRESHOLD_PER_30: f64 = 10.0;

/// Fraction of a threshold at which risk becomes "possible".
pub const MOH_APPROACH_FACTOR: f64 = 0.8;

/// Ranges shorter than this many days cap screening confidence at "medium".
pub const MOH_SHORT_RANGE_DAYS: u32 = 28;

/// Documentation ratio below which screening confidence caps at "medium".
pub const MOH_LOW_DOCUMENTATION_RATIO: f64 = 0.5;

// ═══════════════════════════════════════════════════════════
// Coverage thresholds
// ═══════════════════════════════════════════════════════════

/// Diary documentation ratio below which a coverage warning is attached.
pub const DIARY_COVERAGE_WARN_BELOW: f64 = 0.6;

/// Weather coverage ratio below which a coverage warning is attached.
pub const WEATHER_COVERAGE_WARN_BELOW: f64 = 0.5;

// ═══════════════════════════════════════════════════════════
// Severity guardrail
// ═══════════════════════════════════════════════════════════

/// Documented severity days required before a burden summary is allowed.
pub const SEVERITY_MIN_DOCUMENTED_DAYS: u32 = 20;

// ═══════════════════════════════════════════════════════════
// Weather association
// ═══════════════════════════════════════════════════════════

/// Paired days (documented diary day + 24h pressure delta) required before
/// the delta analysis runs at all.
pub const WEATHER_MIN_PAIRED_DAYS: u32 = 20;

/// Paired days at which confidence rises from "low" to "medium".
pub const WEATHER_MEDIUM_PAIRED_DAYS: u32 = 30;

/// Paired days at which confidence rises to "high".
pub const WEATHER_HIGH_PAIRED_DAYS: u32 = 60;

/// Bucket boundary: 24h drops at or below this value are "strong".
pub const STRONG_DROP_MAX_HPA: f64 = -8.0;

/// Bucket boundary: drops at or below this (and above strong) are "moderate".
pub const MODERATE_DROP_MAX_HPA: f64 = -3.0;

/// Days a bucket needs before it enters the relative-risk comparison.
pub const BUCKET_MIN_DAYS_FOR_COMPARISON: u32 = 5;

/// Documented days with an absolute pressure value required before the
/// low/normal/high tier breakdown is reported.
pub const ABSOLUTE_PRESSURE_MIN_DAYS: u32 = 60;

/// Absolute pressure below this is the "low" tier (hPa).
pub const PRESSURE_LOW_HPA: f64 = 1005.0;

/// Absolute pressure above this is the "high" tier (hPa).
pub const PRESSURE_HIGH_HPA: f64 = 1025.0;

/// Acute-medication rate spread across comparable buckets that triggers a
/// confounder note (expressed as a rate, 0.20 = 20 percentage points).
pub const CONFOUNDER_RATE_SPREAD: f64 = 0.20;

// ═══════════════════════════════════════════════════════════
// Fixed texts
// ═══════════════════════════════════════════════════════════

/// Non-causal disclaimer attached to every weather association result.
pub const WEATHER_DISCLAIMER: &str = "Statistical association over documented days only; \
not a causal statement and not a diagnosis. Patterns are best discussed with the treating physician.";

/// Constraints handed to the downstream narrative generator with every
/// bundle. Order is fixed; the list is part of the reproducible output.
pub const NARRATIVE_DO_NOT_DO: &[&str] = &[
    "Do not recompute counts or rates from raw diary data; quote the provided values verbatim.",
    "Do not extrapolate across undocumented days or past a blocking guardrail.",
    "Do not assert causality for any association, including weather.",
    "Do not invent statistics beyond the provided buckets, rates, and ratios.",
    "Do not infer or estimate a migraine-day count; the diary has no diagnosis flag.",
    "Keep wording calm and preparatory; avoid alarmist phrasing.",
];

// ═══════════════════════════════════════════════════════════
// Embedded definitions block
// ═══════════════════════════════════════════════════════════

/// Counting rules and every active threshold, embedded in every bundle so
/// a rendered report can state what its numbers mean.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Definitions {
    pub headache_day: &'static str,
    pub acute_medication_day: &'static str,
    pub triptan_day: &'static str,
    pub documented_day: &'static str,
    pub migraine_day: &'static str,
    pub rounding: &'static str,
    pub moh_acute_threshold_per_30: f64,
    pub moh_triptan_threshold_per_30: f64,
    pub moh_approach_factor: f64,
    pub moh_short_range_days: u32,
    pub moh_low_documentation_ratio: f64,
    pub diary_coverage_warn_below: f64,
    pub weather_coverage_warn_below: f64,
    pub severity_min_documented_days: u32,
    pub weather_min_paired_days: u32,
    pub weather_medium_paired_days: u32,
    pub weather_high_paired_days: u32,
    pub strong_drop_max_hpa: f64,
    pub moderate_drop_max_hpa: f64,
    pub bucket_min_days_for_comparison: u32,
    pub absolute_pressure_min_days: u32,
    pub pressure_low_hpa: f64,
    pub pressure_high_hpa: f64,
    pub confounder_rate_spread: f64,
}

pub fn definitions() -> Definitions {
    Definitions {
        headache_day: "Calendar day with at least one documented headache entry.",
        acute_medication_day: "Calendar day with at least one documented acute-medication intake, any class.",
        triptan_day: "Calendar day with at least one documented triptan intake.",
        documented_day: "Calendar day with any diary interaction, including an explicit no-headache check-in.",
        migraine_day: "Not derivable from diary data; reported as absent, never estimated from pain or medication proxies.",
        rounding: "Pain statistics and per-30-day values round half away from zero to 1 decimal; rates and ratios to 3 decimals; relative-risk ratios to 2 decimals.",
        moh_acute_threshold_per_30: MOH_ACUTE_THRESHOLD_PER_30,
        moh_triptan_threshold_per_30: MOH_TRIPTAN_THRESHOLD_PER_30,
        moh_approach_factor: MOH_APPROACH_FACTOR,
        moh_short_range_days: MOH_SHORT_RANGE_DAYS,
        moh_low_documentation_ratio: MOH_LOW_DOCUMENTATION_RATIO,
        diary_coverage_warn_below: DIARY_COVERAGE_WARN_BELOW,
        weather_coverage_warn_below: WEATHER_COVERAGE_WARN_BELOW,
        severity_min_documented_days: SEVERITY_MIN_DOCUMENTED_DAYS,
        weather_min_paired_days: WEATHER_MIN_PAIRED_DAYS,
        weather_medium_paired_days: WEATHER_MEDIUM_PAIRED_DAYS,
        weather_high_paired_days: WEATHER_HIGH_PAIRED_DAYS,
        strong_drop_max_hpa: STRONG_DROP_MAX_HPA,
        moderate_drop_max_hpa: MODERATE_DROP_MAX_HPA,
        bucket_min_days_for_comparison: BUCKET_MIN_DAYS_FOR_COMPARISON,
        absolute_pressure_min_days: ABSOLUTE_PRESSURE_MIN_DAYS,
        pressure_low_hpa: PRESSURE_LOW_HPA,
        pressure_high_hpa: PRESSURE_HIGH_HPA,
        confounder_rate_spread: CONFOUNDER_RATE_SPREAD,
    }
}
