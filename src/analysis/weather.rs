//! Barometric-pressure association analysis.
//!
//! Buckets documented days by their 24h pressure change and compares
//! headache rates across buckets, with a sample-size confidence ladder and
//! a relative-risk comparison against the stable/rise reference bucket.
//! Association only; every result carries the fixed non-causal disclaimer.

use serde::Serialize;

use crate::models::{
    PressureBucketLabel, PressureTier, WeatherConfidence, WeatherDayFeature,
    WeatherSignalCoverage,
};

use super::definitions::{
    ABSOLUTE_PRESSURE_MIN_DAYS, BUCKET_MIN_DAYS_FOR_COMPARISON, CONFOUNDER_RATE_SPREAD,
    MODERATE_DROP_MAX_HPA, PRESSURE_HIGH_HPA, PRESSURE_LOW_HPA, STRONG_DROP_MAX_HPA,
    WEATHER_DISCLAIMER, WEATHER_HIGH_PAIRED_DAYS, WEATHER_MEDIUM_PAIRED_DAYS,
    WEATHER_MIN_PAIRED_DAYS,
};
use super::helpers::{mean_1dp, rate, ratio, round_to};

// ═══════════════════════════════════════════════════════════
// Types
// ═══════════════════════════════════════════════════════════

/// Signal availability over documented days, counted from the option
/// fields themselves.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WeatherCoverage {
    pub days_documented: u32,
    pub days_with_weather: u32,
    pub days_with_delta24h: u32,
    /// Days the join layer tagged as carrying the complete signal set.
    pub complete_signal_days: u32,
    pub weather_ratio: f64,
    pub delta24h_ratio: f64,
}

/// One 24h-pressure-change bucket with its outcome rates.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PressureBucket {
    pub label: PressureBucketLabel,
    pub days: u32,
    pub headache_rate: Option<f64>,
    /// Mean daily-max pain over headache days in the bucket, 1 decimal.
    pub mean_pain: Option<f64>,
    pub acute_med_rate: Option<f64>,
}

/// Headache-rate comparison of one drop bucket against the stable/rise
/// reference bucket.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RelativeRisk {
    pub comparison: PressureBucketLabel,
    pub reference: PressureBucketLabel,
    pub comparison_rate: f64,
    pub reference_rate: f64,
    /// `comparison_rate / reference_rate`, 2 decimals. `None` when the
    /// reference rate is zero; the absolute difference still stands.
    pub ratio: Option<f64>,
    pub absolute_difference: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PressureDeltaAnalysis {
    /// False below the minimum paired-day count; buckets stay empty then.
    pub enabled: bool,
    pub paired_days: u32,
    pub buckets: Vec<PressureBucket>,
    pub relative_risk: Option<RelativeRisk>,
}

/// One absolute-pressure tier with the same outcome rates as a bucket.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PressureTierStats {
    pub tier: PressureTier,
    pub days: u32,
    pub headache_rate: Option<f64>,
    pub mean_pain: Option<f64>,
    pub acute_med_rate: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AbsolutePressureAnalysis {
    pub sampled_days: u32,
    pub tiers: Vec<PressureTierStats>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WeatherAssociation {
    pub coverage: WeatherCoverage,
    pub confidence: WeatherConfidence,
    pub pressure_delta24h: PressureDeltaAnalysis,
    /// Reported independently of the delta analysis, and only once enough
    /// days carry an absolute pressure value.
    pub absolute_pressure: Option<AbsolutePressureAnalysis>,
    /// Caveats composed during analysis: low-powered buckets, possible
    /// medication confounding. Fixed order, bucket notes first.
    pub notes: Vec<String>,
    pub disclaimer: String,
}

// ═══════════════════════════════════════════════════════════
// Analysis
// ═══════════════════════════════════════════════════════════

pub fn analyze_weather(features: &[WeatherDayFeature]) -> WeatherAssociation {
    let documented: Vec<&WeatherDayFeature> = features.iter().filter(|f| f.documented).collect();

    let days_documented = documented.len() as u32;
    let days_with_weather = documented.iter().filter(|f| f.pressure_mb.is_some()).count() as u32;
    let days_with_delta = documented
        .iter()
        .filter(|f| f.pressure_change_24h.is_some())
        .count() as u32;
    let complete_signal_days = documented
        .iter()
        .filter(|f| f.signal_coverage == WeatherSignalCoverage::Complete)
        .count() as u32;

    let coverage = WeatherCoverage {
        days_documented,
        days_with_weather,
        days_with_delta24h: days_with_delta,
        complete_signal_days,
        weather_ratio: ratio(days_with_weather, days_documented),
        delta24h_ratio: ratio(days_with_delta, days_documented),
    };

    // A paired day carries both a diary outcome and a 24h delta.
    let paired: Vec<&WeatherDayFeature> = documented
        .iter()
        .copied()
        .filter(|f| f.pressure_change_24h.is_some())
        .collect();
    let confidence = grade_confidence(paired.len() as u32);

    let mut notes = Vec::new();
    let pressure_delta24h = if confidence == WeatherConfidence::Insufficient {
        PressureDeltaAnalysis {
            enabled: false,
            paired_days: paired.len() as u32,
            buckets: Vec::new(),
            relative_risk: None,
        }
    } else {
        build_delta_analysis(&paired, &mut notes)
    };

    WeatherAssociation {
        coverage,
        confidence,
        pressure_delta24h,
        absolute_pressure: build_absolute_analysis(&documented),
        notes,
        disclaimer: WEATHER_DISCLAIMER.to_string(),
    }
}

/// Sample-size ladder over paired days.
fn grade_confidence(paired_days: u32) -> WeatherConfidence {
    if paired_days < WEATHER_MIN_PAIRED_DAYS {
        WeatherConfidence::Insufficient
    } else if paired_days < WEATHER_MEDIUM_PAIRED_DAYS {
        WeatherConfidence::Low
    } else if paired_days < WEATHER_HIGH_PAIRED_DAYS {
        WeatherConfidence::Medium
    } else {
        WeatherConfidence::High
    }
}

fn bucket_of(delta: f64) -> PressureBucketLabel {
    if delta <= STRONG_DROP_MAX_HPA {
        PressureBucketLabel::StrongDrop
    } else if delta <= MODERATE_DROP_MAX_HPA {
        PressureBucketLabel::ModerateDrop
    } else {
        PressureBucketLabel::StableRise
    }
}

fn build_delta_analysis(
    paired: &[&WeatherDayFeature],
    notes: &mut Vec<String>,
) -> PressureDeltaAnalysis {
    let mut buckets = Vec::with_capacity(3);
    for label in [
        PressureBucketLabel::StrongDrop,
        PressureBucketLabel::ModerateDrop,
        PressureBucketLabel::StableRise,
    ] {
        let days: Vec<&WeatherDayFeature> = paired
            .iter()
            .copied()
            .filter(|f| f.pressure_change_24h.is_some_and(|d| bucket_of(d) == label))
            .collect();
        buckets.push(build_bucket(label, &days));
    }

    for bucket in &buckets {
        if bucket.days > 0 && bucket.days < BUCKET_MIN_DAYS_FOR_COMPARISON {
            notes.push(format!(
                "Only {} day(s) fall in the {} bucket; rates from it carry little weight.",
                bucket.days,
                bucket.label.human_label()
            ));
        }
    }
    if let Some(note) = confounder_note(&buckets) {
        notes.push(note);
    }

    let relative_risk = build_relative_risk(&buckets);

    PressureDeltaAnalysis {
        enabled: true,
        paired_days: paired.len() as u32,
        buckets,
        relative_risk,
    }
}

fn build_bucket(label: PressureBucketLabel, days: &[&WeatherDayFeature]) -> PressureBucket {
    let n = days.len() as u32;
    let headaches = days.iter().filter(|f| f.had_headache).count() as u32;
    let acute = days.iter().filter(|f| f.had_acute_med).count() as u32;
    PressureBucket {
        label,
        days: n,
        headache_rate: rate(headaches, n),
        mean_pain: mean_1dp(&pain_sample(days)),
        acute_med_rate: rate(acute, n),
    }
}

/// Pain sample within a bucket: headache days with a recorded non-zero
/// pain level, same rule as the core metrics.
fn pain_sample(days: &[&WeatherDayFeature]) -> Vec<u8> {
    days.iter()
        .filter(|f| f.had_headache)
        .filter_map(|f| f.pain_max)
        .filter(|p| *p > 0)
        .collect()
}

fn build_relative_risk(buckets: &[PressureBucket]) -> Option<RelativeRisk> {
    let reference = buckets
        .iter()
        .find(|b| b.label == PressureBucketLabel::StableRise)
        .filter(|b| b.days >= BUCKET_MIN_DAYS_FOR_COMPARISON)?;

    // Reporting preference: the strong-drop bucket wins whenever both drop
    // buckets are large enough for a comparison.
    let comparison = [
        PressureBucketLabel::StrongDrop,
        PressureBucketLabel::ModerateDrop,
    ]
    .iter()
    .filter_map(|label| buckets.iter().find(|b| b.label == *label))
    .find(|b| b.days >= BUCKET_MIN_DAYS_FOR_COMPARISON)?;

    let reference_rate = reference.headache_rate?;
    let comparison_rate = comparison.headache_rate?;

    let ratio = if reference_rate == 0.0 {
        None
    } else {
        Some(round_to(comparison_rate / reference_rate, 2))
    };

    Some(RelativeRisk {
        comparison: comparison.label.clone(),
        reference: reference.label.clone(),
        comparison_rate,
        reference_rate,
        ratio,
        absolute_difference: round_to(comparison_rate - reference_rate, 3),
    })
}

/// Flags a possible medication confounder: acute-medication rates that
/// differ by more than the configured spread across comparable buckets.
fn confounder_note(buckets: &[PressureBucket]) -> Option<String> {
    let rates: Vec<f64> = buckets
        .iter()
        .filter(|b| b.days >= BUCKET_MIN_DAYS_FOR_COMPARISON)
        .filter_map(|b| b.acute_med_rate)
        .collect();
    if rates.len() < 2 {
        return None;
    }
    let spread = rates.iter().copied().fold(f64::MIN, f64::max)
        - rates.iter().copied().fold(f64::MAX, f64::min);
    if spread > CONFOUNDER_RATE_SPREAD {
        Some(format!(
            "Acute-medication use differs by {:.0} percentage points across the compared \
             buckets; medication timing may be entangled with the pressure association.",
            spread * 100.0
        ))
    } else {
        None
    }
}

fn tier_of(pressure: f64) -> PressureTier {
    if pressure < PRESSURE_LOW_HPA {
        PressureTier::Low
    } else if pressure > PRESSURE_HIGH_HPA {
        PressureTier::High
    } else {
        PressureTier::Normal
    }
}

fn build_absolute_analysis(
    documented: &[&WeatherDayFeature],
) -> Option<AbsolutePressureAnalysis> {
    let sampled: Vec<&WeatherDayFeature> = documented
        .iter()
        .copied()
        .filter(|f| f.pressure_mb.is_some())
        .collect();
    if (sampled.len() as u32) < ABSOLUTE_PRESSURE_MIN_DAYS {
        return None;
    }

    let mut tiers = Vec::with_capacity(3);
    for tier in [PressureTier::Low, PressureTier::Normal, PressureTier::High] {
        let days: Vec<&WeatherDayFeature> = sampled
            .iter()
            .copied()
            .filter(|f| f.pressure_mb.is_some_and(|p| tier_of(p) == tier))
            .collect();
        let n = days.len() as u32;
        let headaches = days.iter().filter(|f| f.had_headache).count() as u32;
        let acute = days.iter().filter(|f| f.had_acute_med).count() as u32;
        tiers.push(PressureTierStats {
            tier,
            days: n,
            headache_rate: rate(headaches, n),
            mean_pain: mean_1dp(&pain_sample(&days)),
            acute_med_rate: rate(acute, n),
        });
    }

    Some(AbsolutePressureAnalysis {
        sampled_days: sampled.len() as u32,
        tiers,
    })
}

// ═══════════════════════════════════════════════════════════
// Tests
// ═══════════════════════════════════════════════════════════
