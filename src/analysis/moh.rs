//! Medication-overuse risk screening.
//!
//! Normalizes acute-medication and triptan day counts to a 30-day basis
//! and grades them against the commonly referenced 10-days-per-month
//! threshold. Screening only; the rationale wording stays calm and
//! preparatory, never diagnostic.

use serde::Serialize;

use crate::models::{ConfidenceLevel, RiskLevel};

use super::core_metrics::CoreMetrics;
use super::definitions::{
    MOH_ACUTE_THRESHOLD_PER_30, MOH_APPROACH_FACTOR, MOH_LOW_DOCUMENTATION_RATIO,
    MOH_SHORT_RANGE_DAYS, MOH_TRIPTAN_THRESHOLD_PER_30,
};
use super::helpers::round_to;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MohAssessment {
    pub risk_level: RiskLevel,
    pub confidence: ConfidenceLevel,
    /// Acute-medication days normalized to a 30-day basis, 1 decimal.
    pub acute_med_days_per_30: f64,
    /// Triptan days normalized to a 30-day basis, 1 decimal.
    pub triptan_days_per_30: f64,
    /// Fixed template keyed by risk level, with the normalized values
    /// interpolated. Safe to show to the patient unchanged.
    pub rationale: String,
}

pub fn assess_moh(core: &CoreMetrics) -> MohAssessment {
    let factor = if core.days_in_range == 0 {
        1.0
    } else {
        30.0 / f64::from(core.days_in_range)
    };

    // Classification runs on the rounded values, so the reported numbers
    // always justify the reported level.
    let acute_per_30 = round_to(f64::from(core.acute_med_days) * factor, 1);
    let triptan_per_30 = round_to(f64::from(core.triptan_days) * factor, 1);

    let risk_level = classify(acute_per_30, triptan_per_30);
    let rationale = rationale_for(&risk_level, acute_per_30, triptan_per_30);

    MohAssessment {
        risk_level,
        confidence: grade_confidence(core),
        acute_med_days_per_30: acute_per_30,
        triptan_days_per_30: triptan_per_30,
        rationale,
    }
}

/// Threshold classification over the normalized values. Monotone: raising
/// either value never lowers the level.
fn classify(acute_per_30: f64, triptan_per_30: f64) -> RiskLevel {
    if acute_per_30 >= MOH_ACUTE_THRESHOLD_PER_30
        || triptan_per_30 >= MOH_TRIPTAN_THRESHOLD_PER_30
    {
        return RiskLevel::Likely;
    }
    if acute_per_30 >= MOH_ACUTE_THRESHOLD_PER_30 * MOH_APPROACH_FACTOR
        || triptan_per_30 >= MOH_TRIPTAN_THRESHOLD_PER_30 * MOH_APPROACH_FACTOR
    {
        return RiskLevel::Possible;
    }
    RiskLevel::None
}

/// Confidence reflects how well the range supports a per-30 extrapolation,
/// independent of the risk level itself.
fn grade_confidence(core: &CoreMetrics) -> ConfidenceLevel {
    if core.days_in_range == 0 {
        return ConfidenceLevel::Low;
    }
    let documentation = f64::from(core.documented_days) / f64::from(core.days_in_range);
    if core.days_in_range < MOH_SHORT_RANGE_DAYS || documentation < MOH_LOW_DOCUMENTATION_RATIO {
        return ConfidenceLevel::Medium;
    }
    ConfidenceLevel::High
}

fn rationale_for(level: &RiskLevel, acute_per_30: f64, triptan_per_30: f64) -> String {
    match level {
        RiskLevel::None => format!(
            "Documented acute-medication use ({acute_per_30:.1} days per 30) and triptan use \
             ({triptan_per_30:.1} days per 30) are below the commonly referenced \
             10-days-per-month threshold."
        ),
        RiskLevel::Possible => format!(
            "Documented use ({acute_per_30:.1} acute days and {triptan_per_30:.1} triptan days \
             per 30) is approaching the commonly referenced 10-days-per-month threshold. \
             This may be worth mentioning at the next appointment."
        ),
        RiskLevel::Likely => format!(
            "Documented use ({acute_per_30:.1} acute days and {triptan_per_30:.1} triptan days \
             per 30) is at or above the commonly referenced 10-days-per-month threshold. \
             A conversation with the treating physician about acute-medication frequency \
             could be helpful."
        ),
    }
}
